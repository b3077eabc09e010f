//! Highlighter cache extraction
//!
//! Pulls the identifier → hex-color mapping out of the highlighter's
//! persisted cache: a free-form, line-oriented file that somewhere contains
//! a `["colors"]` table. Only that one nested table matters, so this is a
//! deliberate narrow-scope scanner, not a parser for the host syntax: it
//! tracks brace depth line by line and matches entries with a single
//! pattern, which keeps it robust to unrelated structure in the file.

use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{AnalysisError, Result};

/// Per-line entry pattern: `["<identifier>"] = "#RRGGBB"`
///
/// Identifiers may contain any character except a double quote; the value
/// must be exactly six hex digits behind a `#`, case-insensitive.
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\["(?P<key>[^"]+)"\]\s*=\s*"(?P<value>#[0-9a-fA-F]{6})""#)
        .expect("entry pattern is valid")
});

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for the line that opens the colors table
    Seeking,
    /// Inside the table, tracking brace depth
    InBlock { depth: i32 },
    /// The table closed; no further lines are consumed
    Done,
}

/// Incremental line scanner for the colors table
///
/// Feed lines in order with [`feed_line`](Self::feed_line); once the block
/// closes the scanner ignores the rest of the input. `load_cache_colors`
/// wraps this with file handling and error mapping.
#[derive(Debug)]
pub struct CacheScanner {
    state: ScanState,
    found_block: bool,
    entries: HashMap<String, String>,
}

impl Default for CacheScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheScanner {
    /// Create a scanner in the seeking state
    pub fn new() -> Self {
        Self {
            state: ScanState::Seeking,
            found_block: false,
            entries: HashMap::new(),
        }
    }

    /// Consume one line; returns false once the block has closed
    ///
    /// The opener line itself is not scanned for entries, matching the
    /// cache writer which always starts entries on the following line.
    pub fn feed_line(&mut self, line: &str) -> bool {
        match self.state {
            ScanState::Seeking => {
                if line.contains("[\"colors\"]") && line.contains('=') && line.contains('{') {
                    self.found_block = true;
                    self.state = ScanState::InBlock {
                        depth: brace_balance(line),
                    };
                }
                true
            }
            ScanState::InBlock { depth } => {
                let depth = depth + brace_balance(line);
                if depth <= 0 {
                    self.state = ScanState::Done;
                    return false;
                }
                self.state = ScanState::InBlock { depth };
                if let Some(captures) = ENTRY_PATTERN.captures(line) {
                    // Last write wins for duplicate identifiers
                    self.entries
                        .insert(captures["key"].to_string(), captures["value"].to_string());
                }
                true
            }
            ScanState::Done => false,
        }
    }

    /// Whether the opener line was ever seen
    pub fn found_block(&self) -> bool {
        self.found_block
    }

    /// Consume the scanner, yielding the extracted entries
    pub fn into_entries(self) -> HashMap<String, String> {
        self.entries
    }
}

/// Opens minus closes on a single line
fn brace_balance(line: &str) -> i32 {
    let opens = line.bytes().filter(|&b| b == b'{').count() as i32;
    let closes = line.bytes().filter(|&b| b == b'}').count() as i32;
    opens - closes
}

/// Load the identifier → hex-color mapping from a cache file
///
/// # Errors
///
/// - `CacheFileMissing` if the path is not a regular file
/// - `CacheBlockNotFound` if no `["colors"]` table opener is seen
/// - `CacheBlockEmpty` if the table closes with zero entries
/// - `Io` if reading fails mid-scan
pub fn load_cache_colors(path: &Path) -> Result<HashMap<String, String>> {
    if !path.is_file() {
        return Err(AnalysisError::CacheFileMissing {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut scanner = CacheScanner::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !scanner.feed_line(&line) {
            break;
        }
    }

    if !scanner.found_block() {
        return Err(AnalysisError::CacheBlockNotFound {
            path: path.to_path_buf(),
        });
    }
    let entries = scanner.into_entries();
    if entries.is_empty() {
        return Err(AnalysisError::CacheBlockEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}
