//! Line-level recognizers for definition openings and docstring markers
//!
//! Everything here is a total function over a single line of text: an
//! unrecognized line is simply "no match", never an error.

use regex::Regex;
use std::sync::OnceLock;

/// The triple-quote sequences that delimit a docstring.
const TRIPLE_QUOTES: [&str; 2] = ["\"\"\"", "'''"];

/// Recognizes the opening line of one category of definition block.
///
/// Implementations are line-oriented on purpose: they trade grammar fidelity
/// for cheap, dependency-free scanning. The trait is the seam where a
/// syntax-tree-based recognizer could be swapped in without touching the
/// scanner or the aggregation.
pub trait BlockPattern: Sync {
    /// Display label for this category (e.g. `CLASS`).
    fn label(&self) -> &'static str;

    /// If `line` opens a definition of this category, the declared
    /// name/parameter list (keyword and trailing colon stripped).
    fn match_open(&self, line: &str) -> Option<String>;
}

/// Matches `class Name:` / `class Name(Bases):` at any indentation.
pub struct ClassPattern;

impl BlockPattern for ClassPattern {
    fn label(&self) -> &'static str {
        "CLASS"
    }

    fn match_open(&self, line: &str) -> Option<String> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^\s*class\s+([A-Za-z_]\w*(?:\s*\([^)]*\))?)\s*:").unwrap()
        });
        re.captures(line).map(|caps| caps[1].trim().to_string())
    }
}

/// Matches `def name(...):` / `async def name(...):` at any indentation, so
/// methods count alongside free functions.
pub struct FunctionPattern;

impl BlockPattern for FunctionPattern {
    fn label(&self) -> &'static str {
        "FUNCTION/METHOD"
    }

    fn match_open(&self, line: &str) -> Option<String> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            // Lazy parameter match so a return annotation stays out of the
            // captured signature; a signature split across lines never
            // reaches the closing colon and is not recognized.
            Regex::new(r"^\s*(?:async\s+)?def\s+([A-Za-z_]\w*\s*\(.*?\))\s*(?:->.*?)?\s*:")
                .unwrap()
        });
        re.captures(line).map(|caps| caps[1].trim().to_string())
    }
}

/// Whether `line` holds a complete, self-terminating docstring marker: a
/// triple quote that opens and closes on the same line.
pub fn is_docstring_one_liner(line: &str) -> bool {
    let text = line.trim();
    TRIPLE_QUOTES
        .iter()
        .any(|quote| text.strip_prefix(quote).is_some_and(|rest| rest.contains(quote)))
}

/// Whether `line` contains a docstring delimiter at all, paired or not.
/// Used both to open and to close a multi-line docstring body.
pub fn is_docstring_delimiter(line: &str) -> bool {
    TRIPLE_QUOTES.iter().any(|quote| line.contains(quote))
}
