use std::collections::VecDeque;

use miette::*;

const ROUNDS: usize = 20;
const BOREDOM_DIVISOR: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(self, old: u64) -> u64 {
        match self {
            Operation::Add(value) => old + value,
            Operation::Multiply(value) => old * value,
            Operation::Square => old * old,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Monkey {
    items: VecDeque<u64>,
    operation: Operation,
    divisor: u64,
    true_target: usize,
    false_target: usize,
    inspection_count: u64,
}

fn field<'a>(line: Option<&'a str>, prefix: &str) -> Result<&'a str> {
    line.and_then(|line| line.trim_start().strip_prefix(prefix))
        .ok_or_else(|| miette!("Expected a line starting with {:?}", prefix))
}

fn parse_operation(raw: &str) -> Result<Operation> {
    match raw.split_once(' ') {
        Some(("*", "old")) => Ok(Operation::Square),
        Some(("*", value)) => Ok(Operation::Multiply(
            value
                .parse()
                .map_err(|e| miette!("Bad operand {:?}: {}", value, e))?,
        )),
        Some(("+", value)) => Ok(Operation::Add(
            value
                .parse()
                .map_err(|e| miette!("Bad operand {:?}: {}", value, e))?,
        )),
        _ => Err(miette!("Unsupported operation {:?}", raw)),
    }
}

/// Parses one blank-line-separated monkey block. Monkey IDs are implicit
/// in block order, so the header line is only checked for shape.
fn parse_monkey(block: &str) -> Result<Monkey> {
    let mut lines = block.lines();
    field(lines.next(), "Monkey ")?;

    let items = field(lines.next(), "Starting items: ")?
        .split(", ")
        .map(|raw| {
            raw.parse()
                .map_err(|e| miette!("Bad worry level {:?}: {}", raw, e))
        })
        .collect::<Result<VecDeque<u64>>>()?;
    let operation = parse_operation(field(lines.next(), "Operation: new = old ")?)?;
    let divisor = field(lines.next(), "Test: divisible by ")?
        .parse()
        .map_err(|e| miette!("Bad divisor: {}", e))?;
    let true_target = field(lines.next(), "If true: throw to monkey ")?
        .parse()
        .map_err(|e| miette!("Bad target: {}", e))?;
    let false_target = field(lines.next(), "If false: throw to monkey ")?
        .parse()
        .map_err(|e| miette!("Bad target: {}", e))?;

    Ok(Monkey {
        items,
        operation,
        divisor,
        true_target,
        false_target,
        inspection_count: 0,
    })
}

fn monkey_business(mut monkeys: Vec<Monkey>) -> u64 {
    for _ in 0..ROUNDS {
        for turn in 0..monkeys.len() {
            while let Some(item) = monkeys[turn].items.pop_front() {
                let worry = monkeys[turn].operation.apply(item) / BOREDOM_DIVISOR;
                let target = if worry % monkeys[turn].divisor == 0 {
                    monkeys[turn].true_target
                } else {
                    monkeys[turn].false_target
                };
                monkeys[turn].inspection_count += 1;
                monkeys[target].items.push_back(worry);
            }
        }
    }

    let mut counts: Vec<u64> = monkeys.iter().map(|m| m.inspection_count).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.into_iter().take(2).product()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let monkeys = input
        .trim_end()
        .split("\n\n")
        .map(parse_monkey)
        .collect::<Result<Vec<Monkey>>>()?;

    Ok(monkey_business(monkeys).to_string())
}
