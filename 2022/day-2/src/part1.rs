use chumsky::prelude::*;
use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    const fn shape_score(self) -> u64 {
        match self {
            Hand::Rock => 1,
            Hand::Paper => 2,
            Hand::Scissors => 3,
        }
    }

    /// The hand this one defeats.
    const fn beats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }
}

fn round_score(opponent: Hand, mine: Hand) -> u64 {
    let outcome_score = if mine == opponent {
        3
    } else if mine.beats() == opponent {
        6
    } else {
        0
    };
    outcome_score + mine.shape_score()
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(Hand, Hand)>, extra::Err<Rich<'a, char>>> {
    let opponent = choice((
        just('A').to(Hand::Rock),
        just('B').to(Hand::Paper),
        just('C').to(Hand::Scissors),
    ));
    let mine = choice((
        just('X').to(Hand::Rock),
        just('Y').to(Hand::Paper),
        just('Z').to(Hand::Scissors),
    ));
    let round = opponent.then_ignore(just(' ')).then(mine);

    round
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rounds = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total: u64 = rounds
        .iter()
        .map(|&(opponent, mine)| round_score(opponent, mine))
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Hand::Rock, Hand::Paper, 8)]
    #[case(Hand::Paper, Hand::Rock, 1)]
    #[case(Hand::Scissors, Hand::Scissors, 6)]
    fn scores_a_round(#[case] opponent: Hand, #[case] mine: Hand, #[case] score: u64) {
        assert_eq!(score, round_score(opponent, mine));
    }

    #[test]
    fn parses_a_round() -> Result<()> {
        let rounds = parser()
            .parse("A Y")
            .into_result()
            .map_err(|e| miette!("{:?}", e))?;
        assert_eq!(vec![(Hand::Rock, Hand::Paper)], rounds);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "A Y
B X
C Z";
        assert_eq!("15", process(input)?);
        Ok(())
    }
}
