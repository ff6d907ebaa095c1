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

    let mut simulator = RopeSimulator::new(2);
    for (direction, steps) in movements {
        simulator.move_head(direction, steps);
    }

    Ok(simulator.count_tail_visited_tiles().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("R 4", Direction::Right, 4)]
    #[case("U 4", Direction::Up, 4)]
    #[case("L 3", Direction::Left, 3)]
    #[case("D 1", Direction::Down, 1)]
    fn parses_movements(
        #[case] line: &str,
        #[case] direction: Direction,
        #[case] steps: u32,
    ) -> Result<()> {
        let movements = parser()
            .parse(line)
            .into_result()
            .map_err(|e| miette!("{:?}", e))?;
        assert_eq!(vec![(direction, steps)], movements);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2";
        assert_eq!("13", process(input)?);
        Ok(())
    }
}
