//! Per-file scanning state machine
//!
//! [`FileScanner`] consumes one file's lines and decides, for every
//! definition block the pattern recognizes, whether it is immediately
//! followed by a docstring. Blank lines are skipped outright and never touch
//! the state, so a blank line between a definition and its docstring does not
//! break the pairing.

use crate::patterns::{is_docstring_delimiter, is_docstring_one_liner, BlockPattern};

/// One recognized block-opening line. Held only until its documentation
/// status is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionBlock {
    /// Declared name/parameter list, for reporting.
    pub signature: String,
    /// 1-indexed line number.
    pub line: usize,
}

/// Result of scanning one file for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileScan {
    /// Undocumented blocks in scan order, ascending by line.
    pub undocumented: Vec<DefinitionBlock>,
    /// Every block the pattern recognized, documented or not.
    pub total_blocks: usize,
}

/// Scans one file's lines for one category of definition block.
///
/// State is owned per file; nothing is shared across files or categories.
pub struct FileScanner<'p> {
    pattern: &'p dyn BlockPattern,
    /// The immediately preceding non-blank line opened a block whose
    /// documentation has not been checked yet.
    awaiting_doc: bool,
    /// Currently inside an unterminated multi-line docstring.
    in_doc_body: bool,
    last_block: Option<DefinitionBlock>,
    scan: FileScan,
}

impl<'p> FileScanner<'p> {
    pub fn new(pattern: &'p dyn BlockPattern) -> Self {
        Self {
            pattern,
            awaiting_doc: false,
            in_doc_body: false,
            last_block: None,
            scan: FileScan::default(),
        }
    }

    /// Feed the next line. `line_number` is 1-indexed.
    pub fn feed(&mut self, line: &str, line_number: usize) {
        if line.trim().is_empty() {
            return;
        }

        if self.awaiting_doc {
            if is_docstring_one_liner(line) {
                // Opens and closes on this line: the pending block is
                // documented, and no body is entered.
                self.last_block = None;
            } else if is_docstring_delimiter(line) {
                self.in_doc_body = !self.in_doc_body;
            } else if !self.in_doc_body {
                if let Some(block) = self.last_block.take() {
                    self.scan.undocumented.push(block);
                }
            }
        }

        // Block-open detection is suspended inside a docstring body, so prose
        // that merely looks like a definition is never counted. awaiting_doc
        // stays set, and the marker checks above keep running on every body
        // line until the closing delimiter is found.
        if self.in_doc_body {
            return;
        }

        if let Some(signature) = self.pattern.match_open(line) {
            self.scan.total_blocks += 1;
            self.last_block = Some(DefinitionBlock {
                signature,
                line: line_number,
            });
            self.awaiting_doc = true;
        } else {
            self.awaiting_doc = false;
        }
    }

    /// Finish the file. A block still awaiting its docstring at end of file
    /// counts as documented; no final check is forced.
    pub fn finish(self) -> FileScan {
        self.scan
    }
}

/// Scan raw content with no I/O. Undocumented blocks come back in ascending
/// line order because they are appended in scan order.
pub fn scan_content(pattern: &dyn BlockPattern, content: &str) -> FileScan {
    let mut scanner = FileScanner::new(pattern);
    for (index, line) in content.lines().enumerate() {
        scanner.feed(line, index + 1);
    }
    scanner.finish()
}
