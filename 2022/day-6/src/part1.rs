use itertools::Itertools;
use miette::*;

const MARKER_LEN: usize = 4;

/// Index one past the first window of `MARKER_LEN` pairwise-distinct
/// characters, the way the elves count received characters.
fn start_of_packet_index(datastream: &str) -> Option<usize> {
    datastream
        .as_bytes()
        .windows(MARKER_LEN)
        .position(|window| window.iter().all_unique())
        .map(|index| index + MARKER_LEN)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let index = start_of_packet_index(input.trim_end())
        .ok_or_else(|| miette!("Start of packet not found"))?;

    Ok(index.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7)]
    #[case("bvwbjplbgvbhsrlpgdmjqwftvncz", 5)]
    #[case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10)]
    fn finds_the_marker(#[case] datastream: &str, #[case] index: usize) {
        assert_eq!(Some(index), start_of_packet_index(datastream));
    }

    #[test]
    fn reports_a_missing_marker() {
        assert!(process("aabbaabb").is_err());
    }

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("7", process("mjqjpqmgbljsphdztnvjfqwrcgsmlb")?);
        Ok(())
    }
}
