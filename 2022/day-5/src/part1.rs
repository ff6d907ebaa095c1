use miette::*;
use nom::{bytes::complete::tag, character::complete::u32 as number, sequence::tuple, IResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instruction {
    quantity: usize,
    origin: usize,
    destination: usize,
}

fn instruction(input: &str) -> IResult<&str, Instruction> {
    let (input, (_, quantity, _, origin, _, destination)) = tuple((
        tag("move "),
        number,
        tag(" from "),
        number,
        tag(" to "),
        number,
    ))(input)?;

    Ok((
        input,
        Instruction {
            quantity: quantity as usize,
            origin: origin as usize,
            destination: destination as usize,
        },
    ))
}

/// Reads the crate drawing column by column. Crates sit every 4 characters,
/// one character past the opening bracket; the last row only labels the
/// stacks and is dropped.
fn parse_stacks(drawing: &str) -> Vec<Vec<char>> {
    let mut rows: Vec<&str> = drawing.lines().collect();
    rows.pop();

    let stack_count = rows.iter().map(|row| (row.len() + 1) / 4).max().unwrap_or(0);
    let mut stacks = vec![Vec::new(); stack_count];

    for row in rows.iter().rev() {
        for (stack, label) in row.chars().skip(1).step_by(4).enumerate() {
            if label.is_ascii_alphanumeric() {
                stacks[stack].push(label);
            }
        }
    }
    stacks
}

fn top_crates(mut stacks: Vec<Vec<char>>, instructions: &[Instruction]) -> Result<String> {
    for instruction in instructions {
        for _ in 0..instruction.quantity {
            let krate = stacks[instruction.origin - 1]
                .pop()
                .ok_or_else(|| miette!("Stack {} ran out of crates", instruction.origin))?;
            stacks[instruction.destination - 1].push(krate);
        }
    }
    Ok(stacks.iter().filter_map(|stack| stack.last()).collect())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (drawing, moves) = input
        .split_once("\n\n")
        .ok_or_else(|| miette!("Missing blank line between drawing and instructions"))?;

    let stacks = parse_stacks(drawing);
    let instructions = moves
        .lines()
        .map(|line| {
            let (_, parsed) =
                instruction(line).map_err(|e| miette!("Bad instruction {:?}: {}", line, e))?;
            Ok(parsed)
        })
        .collect::<Result<Vec<Instruction>>>()?;

    top_crates(stacks, &instructions)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("move 1 from 2 to 1", 1, 2, 1)]
    #[case("move 2 from 2 to 1", 2, 2, 1)]
    #[case("move 11 from 7 to 2", 11, 7, 2)]
    fn parses_instructions(
        #[case] line: &str,
        #[case] quantity: usize,
        #[case] origin: usize,
        #[case] destination: usize,
    ) {
        let expected = Instruction {
            quantity,
            origin,
            destination,
        };
        assert_eq!(Ok(("", expected)), instruction(line));
    }

    #[test]
    fn parses_the_crate_drawing() {
        let drawing = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 ";
        assert_eq!(
            vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']],
            parse_stacks(drawing)
        );
    }

    #[test]
    fn moves_crates_one_at_a_time() -> Result<()> {
        let stacks = vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']];
        let instructions = [
            Instruction {
                quantity: 1,
                origin: 2,
                destination: 1,
            },
            Instruction {
                quantity: 3,
                origin: 1,
                destination: 3,
            },
            Instruction {
                quantity: 2,
                origin: 2,
                destination: 1,
            },
            Instruction {
                quantity: 1,
                origin: 1,
                destination: 2,
            },
        ];
        assert_eq!("CMZ", top_crates(stacks, &instructions)?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "    [D]
[N] [C]
[Z] [M] [P]
 1   2   3

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2";
        assert_eq!("CMZ", process(input)?);
        Ok(())
    }
}
