//! Data models for parsed IRC logs.
//!
//! - [`Channel`] - A named channel holding its chat messages in log order
//! - [`Message`] - One chat line: timestamp, sender and raw content

pub mod channel;

pub use channel::{Channel, Message};
