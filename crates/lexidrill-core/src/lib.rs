//! lexidrill-core: Word list parsing, question selection, distractors and scoring.
//!
//! This crate holds everything a drill front end needs: the tab-separated
//! corpus parser, async corpus sources, the draw-without-replacement
//! selector, the multiple-choice builder and the session tracker, tied
//! together by the [`engine::Drill`] controller.

pub mod config;
pub mod corpus;
pub mod distractor;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod selector;
pub mod source;
pub mod tracker;

pub use corpus::{parse, TermCorpus};
pub use engine::{Drill, DrillSettings, RenderedQuestion, SessionPhase};
pub use error::{DrillError, DrillResult};
