//! Plain-text checker.
//!
//! The stream is rewound and rescanned for every expected value, so the first
//! matching line for each value is always the earliest one in the file.

use std::io::{self, BufRead, Seek, SeekFrom};

/// Count how many of `values` occur as a substring of some line in `stream`.
///
/// Lines are compared as read, trailing newline included. Bytes that are not
/// valid UTF-8 are replaced before matching.
///
/// # Errors
///
/// Returns the underlying I/O error if seeking or reading fails.
pub fn check_text<R>(values: &[String], stream: &mut R) -> io::Result<usize>
where
    R: BufRead + Seek,
{
    let mut found = 0;
    let mut line = Vec::new();
    for value in values {
        stream.seek(SeekFrom::Start(0))?;
        loop {
            line.clear();
            if stream.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if String::from_utf8_lossy(&line).contains(value.as_str()) {
                found += 1;
                break;
            }
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_all_values_found_across_lines() {
        let mut stream = Cursor::new("hello there\nthe world is round\nluke\n");
        let found = check_text(&values(&["hello", "world", "luke"]), &mut stream).unwrap();
        assert_eq!(found, 3);
    }

    #[test]
    fn test_values_in_reverse_order_are_found() {
        let mut stream = Cursor::new("first\nsecond\nthird");
        let found = check_text(&values(&["third", "second", "first"]), &mut stream).unwrap();
        assert_eq!(found, 3);
    }

    #[test]
    fn test_missing_values_not_counted() {
        let mut stream = Cursor::new("hello world\n");
        let found = check_text(&values(&["do", "not", "work"]), &mut stream).unwrap();
        assert_eq!(found, 0);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        let mut stream = Cursor::new("cat\n");
        let found = check_text(&values(&["a"]), &mut stream).unwrap();
        assert_eq!(found, 1);
    }

    #[test]
    fn test_duplicate_values_counted_each_time() {
        let mut stream = Cursor::new("only once\n");
        let found = check_text(&values(&["once", "once"]), &mut stream).unwrap();
        assert_eq!(found, 2);
    }

    #[test]
    fn test_value_does_not_span_lines() {
        let mut stream = Cursor::new("hello\nworld\n");
        let found = check_text(&values(&["hello world"]), &mut stream).unwrap();
        assert_eq!(found, 0);
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = Cursor::new("");
        let found = check_text(&values(&["x"]), &mut stream).unwrap();
        assert_eq!(found, 0);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut stream = Cursor::new(b"caf\xff ok\n".to_vec());
        let found = check_text(&values(&["ok"]), &mut stream).unwrap();
        assert_eq!(found, 1);
    }
}
