//! Strict URL detection and anchor wrapping.
//!
//! URLs are only recognised with an explicit scheme so plain words like `example.org` stay
//! untouched. Any scheme followed by `://` counts, as do the `mailto:`, `xmpp:`, `magnet:`,
//! `tel:` and `sms:` forms. Script schemes (`javascript`, `vbscript`, `data`) are never
//! linked. Trailing punctuation such as a sentence-final `.` is left outside the link, and
//! a closing `)`, `]` or `}` only stays in when the URL opens it too.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"[a-zA-Z][a-zA-Z0-9+.\-]*://[^\s<>"']+|\b(?i:mailto|xmpp|magnet|tel|sms):[^\s<>"']+"#,
    )
    .expect("URL regex pattern is valid")
});

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a href="([^"<>]*)">([^<>]*)</a>"#).expect("anchor regex pattern is valid")
});

const SCRIPT_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// A piece of message content: plain text, or a link created by [`linkify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Text(&'a str),
    Link(&'a str),
}

/// Wrap a URL in an anchor whose href and text are both the URL
pub fn anchor(url: &str) -> String {
    format!("<a href=\"{url}\">{url}</a>")
}

/// Replace every strict URL in `text` with an anchor
///
/// # Examples
///
/// ```
/// use irc_log_html::parsers::links::linkify;
///
/// assert_eq!(
///     linkify("see https://example.org/manual"),
///     "see <a href=\"https://example.org/manual\">https://example.org/manual</a>"
/// );
/// assert_eq!(linkify("see example.org"), "see example.org");
/// ```
pub fn linkify(text: &str) -> Cow<'_, str> {
    URL_RE.replace_all(text, |caps: &Captures| {
        let candidate = &caps[0];
        match trim_url(candidate) {
            Some(url) => format!("{}{}", anchor(url), &candidate[url.len()..]),
            None => candidate.to_string(),
        }
    })
}

/// Returns true if the whole string is a single strict URL
pub fn is_strict_url(s: &str) -> bool {
    URL_RE.find(s).is_some_and(|m| m.start() == 0 && m.end() == s.len())
        && trim_url(s) == Some(s)
}

/// Cut trailing punctuation off a regex match, or reject it
///
/// Returns `None` for script schemes and for URLs with nothing after the scheme.
fn trim_url(candidate: &str) -> Option<&str> {
    let mut url = candidate;
    while let Some(last) = url.chars().last() {
        let keep = match last {
            '.' | ',' | ':' | ';' | '!' | '?' => false,
            ')' => is_balanced(url, '(', ')'),
            ']' => is_balanced(url, '[', ']'),
            '}' => is_balanced(url, '{', '}'),
            _ => true,
        };
        if keep {
            break;
        }
        url = &url[..url.len() - last.len_utf8()];
    }

    let (scheme, rest) = url.split_once(':')?;
    if rest.trim_start_matches('/').is_empty()
        || SCRIPT_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s))
    {
        return None;
    }

    Some(url)
}

fn is_balanced(url: &str, open: char, close: char) -> bool {
    url.matches(open).count() >= url.matches(close).count()
}

/// Split content into plain text and the links [`linkify`] inserted
///
/// Only anchors of the exact `<a href="U">U</a>` form, where `U` is a strict URL, are
/// reported as links. Any other markup stays inside a [`Fragment::Text`].
pub fn fragments(content: &str) -> Vec<Fragment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in ANCHOR_RE.captures_iter(content) {
        let (Some(whole), Some(href), Some(text)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        if href.as_str() != text.as_str() || !is_strict_url(href.as_str()) {
            continue;
        }

        if whole.start() > last {
            out.push(Fragment::Text(&content[last..whole.start()]));
        }
        out.push(Fragment::Link(href.as_str()));
        last = whole.end();
    }

    if last < content.len() {
        out.push(Fragment::Text(&content[last..]));
    }

    out
}
