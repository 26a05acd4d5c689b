//! IRC Log HTML - Turn plain-text IRC channel logs into static web pages
//!
//! This library converts a channel log into a single self-contained HTML document. It supports:
//!
//! - Parsing chat lines (`[<RFC 3339 timestamp>] <nick> message`) and skipping joins, quits,
//!   nick changes and actions
//! - Turning URLs with an explicit scheme into links
//! - Coloring each sender consistently within a page
//! - Deriving the channel name from the log file name
//!
//! # Example
//!
//! ```
//! use irc_log_html::{parse_log, render};
//!
//! let log = "[2021-03-01T13:37:14.974Z] <creekorful> see https://example.org/manual";
//! let channel = parse_log("#rust", log);
//! assert_eq!(channel.len(), 1);
//!
//! let page = render(&channel);
//! assert!(page.contains("<title>#rust</title>"));
//! assert!(page.contains("<a href=\"https://example.org/manual\">"));
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use models::{Channel, Message};
pub use parsers::{parse_log, parse_log_reader};
pub use render::{render, write_html};
pub use utils::paths::{channel_name_from_path, trim_suffixes};
