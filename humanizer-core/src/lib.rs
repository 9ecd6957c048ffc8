//! Rule-based text humanization library.
//!
//! This crate rewrites text so that it reads less mechanically, through a
//! fixed pipeline of randomized stages:
//! - Grade-aware synonym substitution
//! - Optional typo injection
//! - Formality normalization or relaxation
//! - Casual/formal style rewriting with fillers and emphasis
//!
//! The high-level entry point is [`TextHumanizer`]. Requests coming from a
//! transport layer go through [`request::ProcessRequest`], which validates
//! loosely typed input before anything runs.

/// Error type shared by every public operation.
pub mod error;

/// Validated processing options.
pub mod options;

/// Request parsing and response shapes for transport layers.
pub mod request;

/// Synonym, error-pattern and filler tables.
pub mod lexicon;

/// Tokenization, sentence splitting and part-of-speech tagging.
pub mod text;

/// Transformation stages and their orchestration.
pub mod pipeline;

/// I/O utilities (file loading, cache freshness).
///
/// Not exposed
pub(crate) mod io;

pub use error::HumanizerError;
pub use lexicon::Lexicons;
pub use options::{Options, Style};
pub use pipeline::humanizer::TextHumanizer;
pub use pipeline::style::{Humanized, Metrics};
pub use request::{ProcessRequest, ProcessResponse};
