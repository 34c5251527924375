//! Input boundary: one line of whitespace-separated integers.
//!
//! Every token is parsed on its own and the first bad one is reported. The
//! sequence is never truncated at a bad token and no default is substituted.

use std::io::BufRead;

use crate::error::{InvalidInputError, ReadError, Result};

/// Parse a line of whitespace-separated `i64` tokens.
///
/// ```
/// assert_eq!(lis_dp::input::parse_line(" 3 -1\t4 ").unwrap(), vec![3, -1, 4]);
/// assert!(lis_dp::input::parse_line("1 two 3").is_err());
/// ```
pub fn parse_line(line: &str) -> std::result::Result<Vec<i64>, InvalidInputError> {
    line.split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<i64>().map_err(|source| InvalidInputError {
                token: token.to_string(),
                position: idx + 1,
                source,
            })
        })
        .collect()
}

/// Read the first line from `reader` and parse it.
///
/// End of input counts as a line boundary, so a final line without `\n` (or
/// no input at all) is accepted. Nothing past the first line is consumed
/// beyond what `reader` has already buffered.
pub fn read_sequence<R: BufRead>(mut reader: R) -> Result<Vec<i64>> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(ReadError::Io)?;
    let seq = parse_line(line.trim_end_matches(['\n', '\r']))?;
    #[cfg(feature = "tracing")]
    tracing::debug!(len = seq.len(), "read input sequence");
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_line_is_empty_sequence() {
        assert_eq!(parse_line("").unwrap(), Vec::<i64>::new());
        assert_eq!(read_sequence(Cursor::new("\n")).unwrap(), Vec::<i64>::new());
        assert_eq!(read_sequence(Cursor::new("")).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn end_of_input_terminates_like_newline() {
        assert_eq!(read_sequence(Cursor::new("1 2 3")).unwrap(), vec![1, 2, 3]);
        assert_eq!(read_sequence(Cursor::new("1 2 3\r\n")).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn only_first_line_is_read() {
        let seq = read_sequence(Cursor::new("5 4\n1 2 3\n")).unwrap();
        assert_eq!(seq, vec![5, 4]);
    }

    #[test]
    fn reports_first_bad_token() {
        let err = parse_line("1 x 3 y").unwrap_err();
        assert_eq!(err.token, "x");
        assert_eq!(err.position, 2);
        assert_eq!(err.to_string(), "invalid integer \"x\" at position 2");
    }

    #[test]
    fn rejects_overflow_and_fractions() {
        let err = parse_line("1 9223372036854775808").unwrap_err();
        assert_eq!(err.position, 2);
        assert!(parse_line("1.5").is_err());
        assert_eq!(
            parse_line("-9223372036854775808 +7").unwrap(),
            vec![i64::MIN, 7]
        );
    }

    #[test]
    fn bad_token_surfaces_as_read_error() {
        let err = read_sequence(Cursor::new("3 4 five\n")).unwrap_err();
        match err {
            ReadError::Invalid(e) => assert_eq!(e.position, 3),
            other => panic!("unexpected error: {other}"),
        }
    }
}
