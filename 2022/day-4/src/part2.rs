use chumsky::prelude::*;
use miette::*;

/// An inclusive range of section IDs.
type Assignment = (u32, u32);

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(Assignment, Assignment)>, extra::Err<Rich<'a, char>>>
{
    let number = text::int(10).from_str::<u32>().unwrapped();
    let assignment = number.then_ignore(just('-')).then(number);
    let pair = assignment.then_ignore(just(',')).then(assignment);

    pair.separated_by(text::newline())
        .allow_trailing()
        .collect()
}

fn overlaps(first: Assignment, second: Assignment) -> bool {
    first.0 <= second.1 && second.0 <= first.1
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pairs = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let count = pairs
        .iter()
        .filter(|&&(first, second)| overlaps(first, second))
        .count();

    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case((2, 4), (6, 8), false)]
    #[case((2, 8), (3, 7), true)]
    #[case((5, 7), (7, 9), true)]
    fn detects_overlap(
        #[case] first: Assignment,
        #[case] second: Assignment,
        #[case] expected: bool,
    ) {
        assert_eq!(expected, overlaps(first, second));
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8";
        assert_eq!("4", process(input)?);
        Ok(())
    }
}
