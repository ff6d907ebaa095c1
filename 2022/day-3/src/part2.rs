use itertools::Itertools;
use miette::*;

fn priority(item: u8) -> Result<u64> {
    match item {
        b'a'..=b'z' => Ok(u64::from(item - b'a') + 1),
        b'A'..=b'Z' => Ok(u64::from(item - b'A') + 27),
        other => Err(miette!("Item {:?} has no priority", other as char)),
    }
}

/// The badge item carried by every rucksack of a three-elf group.
fn badge(first: &str, second: &str, third: &str) -> Result<u8> {
    first
        .bytes()
        .find(|item| second.as_bytes().contains(item) && third.as_bytes().contains(item))
        .ok_or_else(|| miette!("No badge shared by group starting with {:?}", first))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let sum = input
        .lines()
        .tuples::<(_, _, _)>()
        .map(|(first, second, third)| priority(badge(first, second, third)?))
        .sum::<Result<u64>>()?;

    Ok(sum.to_string())
}
