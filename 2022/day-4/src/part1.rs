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

fn one_fully_contains_the_other(first: Assignment, second: Assignment) -> bool {
    (first.0 >= second.0 && first.1 <= second.1) || (second.0 >= first.0 && second.1 <= first.1)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pairs = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let count = pairs
        .iter()
        .filter(|&&(first, second)| one_fully_contains_the_other(first, second))
        .count();

    Ok(count.to_string())
}
