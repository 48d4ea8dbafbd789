#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod chain;
pub mod config;
pub mod corpus;
pub mod error;
pub mod llm;
pub mod prompt;

pub use chain::{ChainOutput, GeneratedReview, ReviewChain, ReviewRequest, StyleProfile};
pub use config::Config;
pub use corpus::ReferenceCorpus;
pub use error::{Result, ScriptError};
