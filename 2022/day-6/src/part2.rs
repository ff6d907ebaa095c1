use itertools::Itertools;
use miette::*;

const MARKER_LEN: usize = 14;

fn start_of_message_index(datastream: &str) -> Option<usize> {
    datastream
        .as_bytes()
        .windows(MARKER_LEN)
        .position(|window| window.iter().all_unique())
        .map(|index| index + MARKER_LEN)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let index = start_of_message_index(input.trim_end())
        .ok_or_else(|| miette!("Start of message not found"))?;

    Ok(index.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 19)]
    #[case("bvwbjplbgvbhsrlpgdmjqwftvncz", 23)]
    #[case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 29)]
    fn finds_the_marker(#[case] datastream: &str, #[case] index: usize) {
        assert_eq!(Some(index), start_of_message_index(datastream));
    }

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("19", process("mjqjpqmgbljsphdztnvjfqwrcgsmlb")?);
        Ok(())
    }
}
