use chumsky::prelude::*;
use miette::*;

use crate::rope::{Direction, RopeSimulator};

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(Direction, u32)>, extra::Err<Rich<'a, char>>> {
    let movement = one_of("RLUD")
        .then_ignore(just(' '))
        .then(text::int(10).from_str::<u32>().unwrapped())
        .map(|(letter, steps)| {
            let direction = match letter {
                'R' => Direction::Right,
                'L' => Direction::Left,
                'U' => Direction::Up,
                'D' => Direction::Down,
                _ => unreachable!("one_of ensures only RLUD are parsed"),
            };
            (direction, steps)
        });

    movement
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let movements = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut simulator = RopeSimulator::new(10);
    for (direction, steps) in movements {
        simulator.move_head(direction, steps);
    }

    Ok(simulator.count_tail_visited_tiles().to_string())
}
