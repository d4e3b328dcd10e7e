// Spec document → ordered examples.
//
// The spec.txt convention marks each example with an opening fence
// (three or more backticks, then the word "example"), an input segment,
// a lone `.` separator, an expected-output segment, and a closing fence
// (a run of at least ten backticks). Everything outside a fence pair is
// prose and is ignored.

use tracing::debug;

use crate::error::SpecExtractError;
use crate::Options;

/// One input/expected-output pair extracted from the specification document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// 1-based position in document order. Counts every structurally valid
    /// example, independent of any emission-time skip policy.
    pub index: u32,
    /// Lines of the example's source input.
    pub input: Vec<String>,
    /// Lines of the example's expected rendered output.
    pub output: Vec<String>,
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any example block.
    Scanning,
    /// Inside a block, before the separator.
    InInput,
    /// Inside a block, after the separator.
    InOutput,
}

/// Scan a document and collect its examples in order.
///
/// The document is walked once, front to back; lines are never re-scanned.
/// Fence and separator recognition come from `options`: the opening fence is
/// a prefix pattern match, the closing fence a literal prefix, and the
/// separator an exact string comparison with no trimming.
pub(crate) fn scan(document: &str, options: &Options) -> Result<Vec<Example>, SpecExtractError> {
    let mut examples = Vec::new();
    let mut state = State::Scanning;
    let mut index = 0u32;
    let mut line_count = 0usize;
    let mut input: Vec<String> = Vec::new();
    let mut output: Vec<String> = Vec::new();

    for (pos, line) in document.lines().enumerate() {
        line_count = pos + 1;
        match state {
            State::Scanning => {
                if options.opening_fence.is_match(line) {
                    index += 1;
                    input.clear();
                    output.clear();
                    state = State::InInput;
                }
            }
            State::InInput | State::InOutput => {
                if line.starts_with(&options.closing_fence) {
                    if state == State::InInput {
                        return Err(SpecExtractError::MissingSeparator {
                            index,
                            line: pos + 1,
                        });
                    }
                    debug!(
                        index,
                        input_lines = input.len(),
                        output_lines = output.len(),
                        "extracted example"
                    );
                    examples.push(Example {
                        index,
                        input: std::mem::take(&mut input),
                        output: std::mem::take(&mut output),
                    });
                    state = State::Scanning;
                } else if state == State::InInput && line == options.separator {
                    state = State::InOutput;
                } else if state == State::InInput {
                    input.push(line.to_string());
                } else {
                    output.push(line.to_string());
                }
            }
        }
    }

    if state != State::Scanning {
        return Err(SpecExtractError::UnterminatedExample {
            index,
            line: line_count,
        });
    }

    Ok(examples)
}
