use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

const SCREEN_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Noop,
    Addx(i64),
}

impl Instruction {
    /// Register delta applied at the end of each cycle the instruction
    /// spends executing.
    fn cycle_deltas(self) -> Vec<i64> {
        match self {
            Instruction::Noop => vec![0],
            Instruction::Addx(value) => vec![0, value],
        }
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Instruction>, extra::Err<Rich<'a, char>>> {
    let number = text::int(10).from_str::<i64>().unwrapped();
    let signed = just('-')
        .or_not()
        .then(number)
        .map(|(sign, value)| if sign.is_some() { -value } else { value });

    let instruction = choice((
        just("noop").to(Instruction::Noop),
        just("addx ").ignore_then(signed).map(Instruction::Addx),
    ));

    instruction
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[derive(Debug)]
struct InstructionProcessor {
    register: i64,
    cycle: u32,
}

impl InstructionProcessor {
    fn new() -> Self {
        Self {
            register: 1,
            cycle: 0,
        }
    }

    /// Executes the program cycle by cycle, yielding the register value as
    /// it stands *during* each cycle.
    fn run<'a>(&'a mut self, instructions: &'a [Instruction]) -> impl Iterator<Item = i64> + 'a {
        instructions
            .iter()
            .flat_map(|instruction| instruction.cycle_deltas())
            .map(move |delta| {
                let during = self.register;
                self.cycle += 1;
                self.register += delta;
                during
            })
    }
}

/// Lights a pixel whenever the three-wide sprite centered on the register
/// covers the column the CRT is currently drawing.
fn render(instructions: &[Instruction]) -> String {
    let mut cpu = InstructionProcessor::new();
    let pixels: String = cpu
        .run(instructions)
        .enumerate()
        .map(|(cycle, register)| {
            let column = (cycle % SCREEN_WIDTH) as i64;
            if (register - column).abs() <= 1 {
                '#'
            } else {
                '.'
            }
        })
        .collect();

    pixels
        .as_bytes()
        .chunks(SCREEN_WIDTH)
        .map(String::from_utf8_lossy)
        .join("\n")
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let instructions = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Ok(render(&instructions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_tracks_the_register() {
        let pixels = render(&[
            Instruction::Addx(15),
            Instruction::Addx(-11),
            Instruction::Addx(6),
        ]);
        assert_eq!("##..##", pixels);
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "addx 15
addx -11
addx 6";
        assert_eq!("##..##", process(input)?);
        Ok(())
    }
}
