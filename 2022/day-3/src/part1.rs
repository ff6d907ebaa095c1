use miette::*;

fn priority(item: u8) -> Result<u64> {
    match item {
        b'a'..=b'z' => Ok(u64::from(item - b'a') + 1),
        b'A'..=b'Z' => Ok(u64::from(item - b'A') + 27),
        other => Err(miette!("Item {:?} has no priority", other as char)),
    }
}

/// The one item type present in both compartment halves of the rucksack.
fn shared_item(rucksack: &str) -> Result<u8> {
    let (first, second) = rucksack.as_bytes().split_at(rucksack.len() / 2);
    first
        .iter()
        .copied()
        .find(|item| second.contains(item))
        .ok_or_else(|| miette!("No shared item in rucksack {:?}", rucksack))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let sum = input
        .lines()
        .map(|rucksack| priority(shared_item(rucksack)?))
        .sum::<Result<u64>>()?;

    Ok(sum.to_string())
}
