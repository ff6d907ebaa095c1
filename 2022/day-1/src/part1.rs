use miette::*;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let totals = input
        .trim_end()
        .split("\n\n")
        .map(|inventory| {
            inventory
                .lines()
                .map(|line| {
                    line.parse::<u64>()
                        .map_err(|e| miette!("Invalid calorie count {:?}: {}", line, e))
                })
                .sum::<Result<u64>>()
        })
        .collect::<Result<Vec<u64>>>()?;

    let most_calories = totals
        .into_iter()
        .max()
        .ok_or_else(|| miette!("No inventories in input"))?;

    Ok(most_calories.to_string())
}
