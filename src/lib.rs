// spec2fixtures — spec.txt example extractor for Markdown conformance suites.
//
// Architecture:
//   spec.txt → scan (fence state machine) → Vec<Example> → emit (template) → spec_NNN.md
//
// The source document follows the CommonMark/GFM spec.txt convention:
//   https://github.com/github/cmark-gfm/blob/master/test/spec.txt
// Each example block is opened by a backtick fence carrying the word
// "example", split into input and expected output by a lone `.` line, and
// closed by a long backtick run. Every block becomes one fixture file for
// the conformance test runner, except a few indices that clash with the
// GFM extensions.

mod emit;
mod error;
mod fixture;
mod scan;

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

pub use emit::{fixture_content, fixture_name};
pub use error::SpecExtractError;
pub use fixture::{read_fixture, Fixture};
pub use scan::Example;

/// Example indices whose fixtures clash with the GFM extensions and are
/// withheld from emission by default.
pub const DEFAULT_SKIP: &[u32] = &[491, 620, 621];

static DEFAULT_OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^`{3,}\s*example").expect("default opening fence pattern"));

/// Extraction and emission options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Pattern an opening fence line must match (a prefix match: trailing
    /// text after the match is allowed).
    pub opening_fence: Regex,
    /// Literal prefix that closes an example block. Default: a run of ten
    /// backticks, so the spec's longer fences close blocks too.
    pub closing_fence: String,
    /// Line dividing an example's input from its expected output. Compared
    /// by exact equality, no trimming. Default: `"."`.
    pub separator: String,
    /// Example indices to withhold from emission. Extraction numbering is
    /// unaffected. Default: [`DEFAULT_SKIP`].
    pub skip: Vec<u32>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            opening_fence: DEFAULT_OPENING_FENCE.clone(),
            closing_fence: "`".repeat(10),
            separator: ".".to_string(),
            skip: DEFAULT_SKIP.to_vec(),
        }
    }
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening fence pattern.
    pub fn with_opening_fence(mut self, pattern: Regex) -> Self {
        self.opening_fence = pattern;
        self
    }

    /// Set the closing fence prefix.
    pub fn with_closing_fence(mut self, fence: impl Into<String>) -> Self {
        self.closing_fence = fence.into();
        self
    }

    /// Set the input/output separator line.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the emission skip set.
    pub fn with_skip(mut self, skip: impl IntoIterator<Item = u32>) -> Self {
        self.skip = skip.into_iter().collect();
        self
    }
}

/// Extract all examples from a specification document using default options.
///
/// # Examples
///
/// ```
/// let doc = "``` example\n*hi*\n.\n<em>hi</em>\n``````````\n";
/// let examples = spec2fixtures::extract(doc).unwrap();
/// assert_eq!(examples.len(), 1);
/// assert_eq!(examples[0].input, vec!["*hi*"]);
/// ```
pub fn extract(document: &str) -> Result<Vec<Example>, SpecExtractError> {
    extract_with(document, &Options::default())
}

/// Extract all examples from a specification document with custom options.
pub fn extract_with(document: &str, options: &Options) -> Result<Vec<Example>, SpecExtractError> {
    scan::scan(document, options)
}

/// Write fixture files for `examples` into `dir` using default options.
/// Returns the number of files written.
pub fn write_fixtures(examples: &[Example], dir: &Path) -> Result<usize, SpecExtractError> {
    write_fixtures_with(examples, dir, &Options::default())
}

/// Write fixture files for `examples` into `dir` with custom options.
pub fn write_fixtures_with(
    examples: &[Example],
    dir: &Path,
    options: &Options,
) -> Result<usize, SpecExtractError> {
    emit::write_fixtures(examples, dir, options)
}

/// Load a specification document, extract its examples, and write fixtures.
/// Returns the number of fixture files written.
pub fn run(spec_path: &Path, fixtures_dir: &Path) -> Result<usize, SpecExtractError> {
    run_with(spec_path, fixtures_dir, &Options::default())
}

/// [`run`] with custom options.
pub fn run_with(
    spec_path: &Path,
    fixtures_dir: &Path,
    options: &Options,
) -> Result<usize, SpecExtractError> {
    let document = fs::read_to_string(spec_path).map_err(|source| SpecExtractError::Read {
        path: spec_path.to_path_buf(),
        source,
    })?;
    let examples = extract_with(&document, options)?;
    let written = write_fixtures_with(&examples, fixtures_dir, options)?;
    info!(
        extracted = examples.len(),
        written,
        dir = %fixtures_dir.display(),
        "emitted fixtures"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert!(options.opening_fence.is_match("``` example"));
        assert!(!options.opening_fence.is_match("`` example"));
        assert_eq!(options.closing_fence, "``````````");
        assert_eq!(options.separator, ".");
        assert_eq!(options.skip, vec![491, 620, 621]);
    }

    #[test]
    fn test_options_builder() {
        let options = Options::new()
            .with_closing_fence("~~~~~")
            .with_separator("---")
            .with_skip([7, 9]);

        assert_eq!(options.closing_fence, "~~~~~");
        assert_eq!(options.separator, "---");
        assert_eq!(options.skip, vec![7, 9]);
    }

    #[test]
    fn test_extract_empty_document() {
        let examples = extract("").unwrap();
        assert!(examples.is_empty());
    }

    #[test]
    fn test_run_missing_input() {
        let err = run(Path::new("no/such/spec.txt"), Path::new("no/such/out")).unwrap_err();
        match err {
            SpecExtractError::Read { path, .. } => {
                assert_eq!(path, Path::new("no/such/spec.txt"));
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }
}
