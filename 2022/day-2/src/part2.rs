use chumsky::prelude::*;
use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hand {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Lose,
    Draw,
    Win,
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

    /// The hand this one loses against.
    const fn loses_to(self) -> Hand {
        match self {
            Hand::Rock => Hand::Paper,
            Hand::Paper => Hand::Scissors,
            Hand::Scissors => Hand::Rock,
        }
    }
}

fn round_score(opponent: Hand, outcome: Outcome) -> u64 {
    let (outcome_score, mine) = match outcome {
        Outcome::Lose => (0, opponent.beats()),
        Outcome::Draw => (3, opponent),
        Outcome::Win => (6, opponent.loses_to()),
    };
    outcome_score + mine.shape_score()
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(Hand, Outcome)>, extra::Err<Rich<'a, char>>> {
    let opponent = choice((
        just('A').to(Hand::Rock),
        just('B').to(Hand::Paper),
        just('C').to(Hand::Scissors),
    ));
    let outcome = choice((
        just('X').to(Outcome::Lose),
        just('Y').to(Outcome::Draw),
        just('Z').to(Outcome::Win),
    ));
    let round = opponent.then_ignore(just(' ')).then(outcome);

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
        .map(|&(opponent, outcome)| round_score(opponent, outcome))
        .sum();

    Ok(total.to_string())
}
