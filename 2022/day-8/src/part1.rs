use miette::*;

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

/// A tree is visible when every tree between it and at least one edge is
/// strictly shorter.
fn is_visible(grid: &[Vec<u8>], x: usize, y: usize) -> bool {
    let height = grid[x][y];
    let row = &grid[x];

    row[..y].iter().all(|&h| h < height)
        || row[y + 1..].iter().all(|&h| h < height)
        || grid[..x].iter().all(|r| r[y] < height)
        || grid[x + 1..].iter().all(|r| r[y] < height)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_grid(input)?;
    let width = grid.first().map_or(0, Vec::len);

    let count = (0..grid.len())
        .flat_map(|x| (0..width).map(move |y| (x, y)))
        .filter(|&(x, y)| is_visible(&grid, x, y))
        .count();

    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const GRID: &str = "30373
25512
65332
33549
35390";

    #[test]
    fn parses_the_grid() -> Result<()> {
        let grid = parse_grid(GRID)?;
        assert_eq!(
            vec![
                vec![3, 0, 3, 7, 3],
                vec![2, 5, 5, 1, 2],
                vec![6, 5, 3, 3, 2],
                vec![3, 3, 5, 4, 9],
                vec![3, 5, 3, 9, 0],
            ],
            grid
        );
        Ok(())
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(1, 4, true)]
    #[case(4, 2, true)]
    #[case(0, 2, true)]
    #[case(1, 1, true)]
    #[case(1, 2, true)]
    #[case(3, 3, false)]
    #[case(3, 2, true)]
    #[case(0, 1, true)]
    fn checks_visibility(#[case] x: usize, #[case] y: usize, #[case] expected: bool) -> Result<()> {
        let grid = parse_grid(GRID)?;
        assert_eq!(expected, is_visible(&grid, x, y));
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("21", process(GRID)?);
        Ok(())
    }
}
