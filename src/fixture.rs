// Fixture file → segments.
//
// The consumer side of the emitted format: splits a fixture back into its
// title, input, and expected-output segments on the `......` marker lines.
// The blank padding the template inserts around segments is stripped, so
// `input` carries no trailing newline while `expected` keeps one per line.

use std::fs;
use std::path::Path;

use crate::error::SpecExtractError;

/// An emitted fixture parsed back into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Title block, normally `Example N`, newline-terminated.
    pub title: String,
    /// The example's source input.
    pub input: String,
    /// The example's expected rendered output.
    pub expected: String,
}

/// Read and parse a fixture file written by [`write_fixtures`].
///
/// [`write_fixtures`]: crate::write_fixtures
pub fn read_fixture(path: &Path) -> Result<Fixture, SpecExtractError> {
    let text = fs::read_to_string(path).map_err(|source| SpecExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&text).ok_or_else(|| SpecExtractError::MalformedFixture {
        path: path.to_path_buf(),
    })
}

fn parse_fixture(text: &str) -> Option<Fixture> {
    let mut lines = text.lines();
    let mut title = String::new();
    let mut input = String::new();
    let mut expected = String::new();

    loop {
        match lines.next() {
            None => return None,
            Some(line) if line.starts_with("....") => break,
            Some(line) => {
                title.push_str(line);
                title.push('\n');
            }
        }
    }
    loop {
        match lines.next() {
            None => return None,
            Some(line) if line.starts_with("....") => break,
            Some(line) => {
                input.push_str(line);
                input.push('\n');
            }
        }
    }
    for line in lines {
        expected.push_str(line);
        expected.push('\n');
    }

    // Strip the template's blank padding.
    while input.starts_with('\n') {
        input.remove(0);
    }
    while input.ends_with('\n') {
        input.pop();
    }
    while expected.starts_with('\n') {
        expected.remove(0);
    }

    Some(Fixture {
        title,
        input,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_canonical_layout() {
        let f = parse_fixture("Example 1\n......\n\n*hi*\n\n......\n\n<em>hi</em>\n").unwrap();
        assert_eq!(f.title, "Example 1\n");
        assert_eq!(f.input, "*hi*");
        assert_eq!(f.expected, "<em>hi</em>\n");
    }

    #[test]
    fn keeps_interior_blank_lines() {
        let f = parse_fixture("Example 2\n......\n\nfoo\n\nbar\n\n......\n\n<p>foo</p>\n<p>bar</p>\n")
            .unwrap();
        assert_eq!(f.input, "foo\n\nbar");
        assert_eq!(f.expected, "<p>foo</p>\n<p>bar</p>\n");
    }

    #[test]
    fn empty_segments_parse_as_empty() {
        let f = parse_fixture("Example 3\n......\n\n\n\n......\n\n<p></p>\n").unwrap();
        assert_eq!(f.input, "");
        assert_eq!(f.expected, "<p></p>\n");

        let f = parse_fixture("Example 4\n......\n\nfoo\n\n......\n\n\n").unwrap();
        assert_eq!(f.input, "foo");
        assert_eq!(f.expected, "");
    }

    #[test]
    fn missing_markers_are_malformed() {
        assert!(parse_fixture("Example 1\nno markers here\n").is_none());
        assert!(parse_fixture("Example 1\n......\n\nonly one marker\n").is_none());
    }
}
