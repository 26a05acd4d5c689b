//! Parsers for plain-text IRC channel logs
//!
//! # Error Handling Strategy
//!
//! Log files are not required to be well-formed, so parsing never fails on content:
//!
//! - **Non-chat lines**: Joins, quits, nick changes, actions and anything malformed are
//!   skipped silently by the line scanner.
//!
//! - **Bad timestamps**: The first chat line whose timestamp is not RFC 3339 ends parsing.
//!   Messages collected before it are kept and returned successfully; a warning is logged.
//!
//! - **I/O failures**: Reading the input is the only error path, reported through
//!   `anyhow::Result` with context.

pub mod irc_log;
pub mod links;

pub use irc_log::{ChatLine, parse_log, parse_log_reader};
pub use links::linkify;
