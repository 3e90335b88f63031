//! Wordsplit - space-delimited tokenizer.
//!
//! Splits text into non-empty, space-delimited tokens with optional
//! regex filtering, plain/JSON/re-joined output, and audit logging.

pub mod audit;
pub mod config;
pub mod filter;
pub mod output;
pub mod text;

pub use config::{CompiledConfig, Config};
pub use filter::apply_filters;
pub use output::{OutputFormat, format_tokens};
pub use text::{join, split};
