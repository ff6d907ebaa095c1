use chumsky::prelude::*;
use miette::*;

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

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let instructions = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut cpu = InstructionProcessor::new();
    let total: i64 = cpu
        .run(&instructions)
        .enumerate()
        .filter(|(index, _)| (index + 1) % 40 == 20)
        .map(|(index, register)| (index as i64 + 1) * register)
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("noop", Instruction::Noop)]
    #[case("addx -3", Instruction::Addx(-3))]
    #[case("addx 15", Instruction::Addx(15))]
    fn parses_instructions(#[case] line: &str, #[case] expected: Instruction) -> Result<()> {
        let instructions = parser()
            .parse(line)
            .into_result()
            .map_err(|e| miette!("{:?}", e))?;
        assert_eq!(vec![expected], instructions);
        Ok(())
    }

    #[test]
    fn an_empty_program_does_nothing() {
        let mut cpu = InstructionProcessor::new();
        assert_eq!(0, cpu.run(&[]).count());
        assert_eq!(0, cpu.cycle);
        assert_eq!(1, cpu.register);
    }

    #[test]
    fn noops_only_burn_cycles() {
        let mut cpu = InstructionProcessor::new();
        cpu.run(&[Instruction::Noop, Instruction::Noop]).for_each(drop);
        assert_eq!(2, cpu.cycle);
        assert_eq!(1, cpu.register);
    }

    #[test]
    fn addx_lands_after_two_cycles() {
        let mut cpu = InstructionProcessor::new();
        cpu.run(&[Instruction::Addx(2)]).for_each(drop);
        assert_eq!(2, cpu.cycle);
        assert_eq!(3, cpu.register);
    }

    #[test]
    fn mixed_program_tracks_the_register() {
        let mut cpu = InstructionProcessor::new();
        cpu.run(&[
            Instruction::Noop,
            Instruction::Addx(3),
            Instruction::Addx(-5),
        ])
        .for_each(drop);
        assert_eq!(5, cpu.cycle);
        assert_eq!(-1, cpu.register);
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19";
        assert_eq!("420", process(input)?);
        Ok(())
    }
}
