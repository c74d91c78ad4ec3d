//! Tab-separated word list parser.
//!
//! One `<term>\t<meaning>` pair per line. Malformed lines are dropped
//! without error; only the final entry count can fail a load.

use crate::distractor::CHOICE_COUNT;
use crate::error::{DrillError, DrillResult};
use crate::model::{Direction, TermEntry};

/// Smallest corpus that can fill one multiple-choice question.
pub const MIN_CORPUS_SIZE: usize = CHOICE_COUNT;

/// The parsed, immutable word list for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCorpus {
    entries: Vec<TermEntry>,
    /// Non-blank lines that were discarded while parsing.
    dropped_lines: usize,
}

impl TermCorpus {
    /// Build a corpus from already-validated entries.
    pub fn from_entries(entries: Vec<TermEntry>) -> DrillResult<Self> {
        if entries.len() < MIN_CORPUS_SIZE {
            return Err(DrillError::CorpusTooSmall {
                found: entries.len(),
                required: MIN_CORPUS_SIZE,
            });
        }
        Ok(Self {
            entries,
            dropped_lines: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TermEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// Every term, in corpus order.
    pub fn terms(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.term.as_str()).collect()
    }

    /// Every meaning, in corpus order.
    pub fn meanings(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.meaning.as_str()).collect()
    }

    /// Candidate answers for a question asked in `direction`.
    pub fn answer_pool(&self, direction: Direction) -> Vec<&str> {
        match direction {
            Direction::NativeToTarget => self.meanings(),
            Direction::TargetToNative => self.terms(),
        }
    }
}

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Whitespace plus the byte-order mark editors prepend to UTF-8 files.
fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Parse one trimmed, non-blank line.
fn parse_line(line: &str) -> Option<TermEntry> {
    let (term, meaning) = line.split_once('\t')?;
    let term = term.trim_matches(is_padding);
    let meaning = meaning.trim_matches(is_padding);
    if term.is_empty() || meaning.is_empty() {
        return None;
    }
    Some(TermEntry {
        term: term.to_string(),
        meaning: meaning.to_string(),
    })
}

/// Parse raw word list text into a corpus.
///
/// Accepts `\n` and `\r\n` line endings and a leading byte-order mark. Fails with
/// [`DrillError::CorpusTooSmall`] when fewer than [`MIN_CORPUS_SIZE`]
/// entries survive.
pub fn parse(raw: &str) -> DrillResult<TermCorpus> {
    let mut entries = Vec::new();
    let mut dropped_lines = 0;

    let raw = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
    for line in raw
        .lines()
        .map(|l| l.trim_matches(is_padding))
        .filter(|l| !l.is_empty())
    {
        match parse_line(line) {
            Some(entry) => entries.push(entry),
            None => dropped_lines += 1,
        }
    }

    tracing::debug!(
        entries = entries.len(),
        dropped_lines,
        "parsed word list"
    );

    let mut corpus = TermCorpus::from_entries(entries)?;
    corpus.dropped_lines = dropped_lines;
    Ok(corpus)
}
