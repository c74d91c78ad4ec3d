//! Core data model types for lexidrill.
//!
//! Entries, directions, questions and outcomes shared by the selector,
//! the distractor generator and the session tracker.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One line of the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    /// Native-language term (first tab-delimited field).
    pub term: String,
    /// Target-language meaning (everything after the first tab).
    pub meaning: String,
}

impl TermEntry {
    /// Prompt and expected answer for this entry in the given direction.
    pub fn prompt_and_answer(&self, direction: Direction) -> (&str, &str) {
        match direction {
            Direction::NativeToTarget => (&self.term, &self.meaning),
            Direction::TargetToNative => (&self.meaning, &self.term),
        }
    }
}

/// Which side of an entry is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Show the term, ask for the meaning.
    NativeToTarget,
    /// Show the meaning, ask for the term.
    TargetToNative,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::NativeToTarget => "native-to-target",
            Direction::TargetToNative => "target-to-native",
        }
    }

    /// Label such as "Italian to English" for the given language pair.
    pub fn label(&self, languages: &LanguagePair) -> String {
        match self {
            Direction::NativeToTarget => format!("{} to {}", languages.native, languages.target),
            Direction::TargetToNative => format!("{} to {}", languages.target, languages.native),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction setting for a whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionMode {
    #[default]
    NativeToTarget,
    TargetToNative,
    /// Pick a direction per question.
    Mixed,
}

impl fmt::Display for DirectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionMode::NativeToTarget => write!(f, "native-to-target"),
            DirectionMode::TargetToNative => write!(f, "target-to-native"),
            DirectionMode::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for DirectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native-to-target" | "native" => Ok(DirectionMode::NativeToTarget),
            "target-to-native" | "target" => Ok(DirectionMode::TargetToNative),
            "mixed" => Ok(DirectionMode::Mixed),
            other => Err(format!(
                "unknown direction mode: '{other}' (expected native-to-target, target-to-native or mixed)"
            )),
        }
    }
}

/// The two languages a word list pairs up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub native: String,
    pub target: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            native: "Italian".to_string(),
            target: "English".to_string(),
        }
    }
}

/// A single posed question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position within the session.
    pub sequence_number: usize,
    pub direction: Direction,
    pub prompt: String,
    pub correct_answer: String,
}

/// How a question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Correct,
    Incorrect,
    Skipped,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::Correct => write!(f, "correct"),
            OutcomeStatus::Incorrect => write!(f, "incorrect"),
            OutcomeStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// Recorded result of one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub question: Question,
    pub status: OutcomeStatus,
    /// The chosen text, or [`SKIPPED_MARKER`] for skips.
    pub selected_answer: String,
}

/// Selected-answer text recorded for skipped questions.
pub const SKIPPED_MARKER: &str = "(Skipped)";
