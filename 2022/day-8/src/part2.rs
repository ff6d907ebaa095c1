use miette::*;
use rayon::prelude::*;

type TreeGrid = Vec<Vec<u8>>;

fn parse_grid(input: &str) -> Result<TreeGrid> {
    input
        .lines()
        .map(|line| {
            line.bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    other => Err(miette!("Invalid tree height {:?}", other as char)),
                })
                .collect()
        })
        .collect()
}

/// Trees counted until (and including) the first one at least as tall as
/// the viewpoint.
fn viewing_distance(height: u8, trees: impl Iterator<Item = u8>) -> usize {
    let mut distance = 0;
    for tree in trees {
        distance += 1;
        if tree >= height {
            break;
        }
    }
    distance
}

fn scenic_score(grid: &[Vec<u8>], x: usize, y: usize) -> usize {
    let height = grid[x][y];
    let row = &grid[x];

    let right = viewing_distance(height, row[y + 1..].iter().copied());
    let left = viewing_distance(height, row[..y].iter().rev().copied());
    let down = viewing_distance(height, grid[x + 1..].iter().map(|r| r[y]));
    let up = viewing_distance(height, grid[..x].iter().rev().map(|r| r[y]));

    right * left * down * up
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_grid(input)?;
    let width = grid.first().map_or(0, Vec::len);

    let best = (0..grid.len())
        .into_par_iter()
        .map(|x| {
            (0..width)
                .map(|y| scenic_score(&grid, x, y))
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0);

    Ok(best.to_string())
}
