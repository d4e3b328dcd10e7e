// Example → fixture file.
//
// Each example becomes one `spec_NNN.md` file laid out as:
//
//   Example {index}
//   ......
//
//   {input lines}
//
//   ......
//
//   {output lines}
//
// The downstream conformance runner splits the file back apart on the
// six-dot marker lines.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SpecExtractError;
use crate::scan::Example;
use crate::Options;

/// Fixture filename for an example index, zero-padded to three digits.
pub fn fixture_name(index: u32) -> String {
    format!("spec_{index:03}.md")
}

/// Render an example into the fixture template. Always newline-terminated.
pub fn fixture_content(example: &Example) -> String {
    format!(
        "Example {}\n......\n\n{}\n\n......\n\n{}\n",
        example.index,
        example.input.join("\n"),
        example.output.join("\n"),
    )
}

/// Write one fixture per non-skipped example into `dir`, creating the
/// directory if needed. Existing fixtures are overwritten. Returns the
/// number of files written.
pub(crate) fn write_fixtures(
    examples: &[Example],
    dir: &Path,
    options: &Options,
) -> Result<usize, SpecExtractError> {
    fs::create_dir_all(dir).map_err(|source| SpecExtractError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    for example in examples {
        if options.skip.contains(&example.index) {
            debug!(index = example.index, "skipping fixture");
            continue;
        }
        let path = dir.join(fixture_name(example.index));
        fs::write(&path, fixture_content(example)).map_err(|source| SpecExtractError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(index = example.index, path = %path.display(), "wrote fixture");
        written += 1;
    }
    Ok(written)
}
