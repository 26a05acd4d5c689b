use std::borrow::Cow;
use std::io::Read;

use anyhow::{Context, Result};
use chrono::DateTime;

use super::links::linkify;
use crate::models::{Channel, Message};

/// The positional parts of a chat line, before timestamp parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLine<'a> {
    pub timestamp: &'a str,
    pub sender: &'a str,
    pub content: &'a str,
}

impl<'a> ChatLine<'a> {
    /// Scan a log line of the form `[<timestamp>] <<sender>> <content>`
    ///
    /// Returns `None` for anything that is not a chat line (joins, quits, nick changes,
    /// actions). A line counts as chat iff it contains `"] <"` followed somewhere by `>`.
    /// This is a heuristic, not a grammar: unrelated lines with that shape are accepted.
    pub fn scan(line: &'a str) -> Option<Self> {
        let marker = line.find("] <")?;
        let sender_start = marker + "] <".len();
        let sender_len = line[sender_start..].find('>')?;
        let sender_end = sender_start + sender_len;

        // Skip the opening '[' (or whatever the first character is)
        let timestamp = line
            .char_indices()
            .nth(1)
            .map(|(start, _)| line.get(start..marker).unwrap_or(""))
            .unwrap_or("");

        let content = line[sender_end..]
            .find("> ")
            .map(|offset| &line[sender_end + offset + "> ".len()..])
            .unwrap_or("");

        Some(Self { timestamp, sender: &line[sender_start..sender_end], content })
    }
}

/// Parse the raw text of an IRC log into a channel
///
/// URLs are wrapped in anchors over the whole text first, then each chat line becomes a
/// [`Message`]. Non-chat lines are skipped. The first chat line whose timestamp is not
/// valid RFC 3339 ends parsing: the messages collected so far are returned as-is.
pub fn parse_log(name: &str, raw: &str) -> Channel {
    let mut channel = Channel::new(name);
    let text = linkify(raw);

    for (line_num, line) in text.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);

        let Some(chat) = ChatLine::scan(line) else {
            continue;
        };

        let timestamp = match DateTime::parse_from_rfc3339(chat.timestamp) {
            Ok(ts) => ts,
            Err(e) => {
                log::warn!(
                    "Stopped parsing {} at line {}: invalid timestamp {:?} ({})",
                    name,
                    line_num + 1,
                    chat.timestamp,
                    e
                );
                break;
            }
        };

        channel.messages.push(Message {
            timestamp,
            sender: chat.sender.to_string(),
            content: chat.content.to_string(),
        });
    }

    channel
}

/// Read an IRC log from `reader` and parse it with [`parse_log`]
///
/// Invalid UTF-8 is replaced rather than rejected. Only read failures are errors.
pub fn parse_log_reader<R: Read>(name: &str, mut reader: R) -> Result<Channel> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).context("Failed to read IRC log")?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        log::warn!("IRC log {} is not valid UTF-8, invalid bytes were replaced", name);
    }

    Ok(parse_log(name, &text))
}
