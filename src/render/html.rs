use std::io::Write;

use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rand::Rng;

use super::colors::{ColorTable, Palette};
use crate::models::{Channel, Message};
use crate::parsers::links::{Fragment, fragments};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const STYLE: &str = "\
body { font-family: monospace; background: #fdfdfd; color: #222; margin: 2em; }
h1 { font-size: 1.4em; }
ul.messages { list-style: none; margin: 0; padding: 0; }
ul.messages li { padding: 2px 0; white-space: pre-wrap; overflow-wrap: anywhere; }
time { color: #888; }
a { color: #0645ad; }
";

/// Render a channel as a complete HTML document
///
/// Sender colors are assigned at random for this call only; rendering the same channel
/// twice may color senders differently.
pub fn render(channel: &Channel) -> String {
    let palette = Palette::default();
    let mut colors = ColorTable::new(&palette, rand::rng());
    render_with(channel, &mut colors).into_string()
}

/// Render a channel using the given color table
pub fn render_with<R: Rng>(channel: &Channel, colors: &mut ColorTable<'_, R>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (channel.name()) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (channel.name()) }
                @if channel.is_empty() {
                    p class="empty" { "No messages." }
                } @else {
                    ul class="messages" {
                        @for message in &channel.messages {
                            (message_entry(message, colors))
                        }
                    }
                }
            }
        }
    }
}

/// Render a channel and write the document to `writer`
pub fn write_html<W: Write>(channel: &Channel, writer: &mut W) -> Result<()> {
    let document = render(channel);
    writer.write_all(document.as_bytes()).context("Failed to write HTML output")?;
    writer.flush().context("Failed to flush HTML output")?;
    Ok(())
}

/// `<sender>` with the name in bold and the given color; the brackets are shown literally
pub fn sender_tag(sender: &str, color: &str) -> Markup {
    html! {
        (PreEscaped("&lt;"))
        span style=(format!("color: {color}; font-weight: bold;")) { (sender) }
        (PreEscaped("&gt;"))
    }
}

/// Escaped message content with the anchors inserted by link substitution kept as links
pub fn content_markup(content: &str) -> Markup {
    html! {
        @for fragment in fragments(content) {
            @match fragment {
                Fragment::Text(text) => { (text) },
                Fragment::Link(url) => { a href=(url) { (url) } },
            }
        }
    }
}

fn message_entry<R: Rng>(message: &Message, colors: &mut ColorTable<'_, R>) -> Markup {
    let color = colors.color_for(&message.sender);

    html! {
        li {
            time datetime=(message.timestamp.to_rfc3339()) {
                (message.timestamp.format(TIMESTAMP_FORMAT).to_string())
            }
            " "
            (sender_tag(&message.sender, color))
            " "
            span class="content" { (content_markup(&message.content)) }
        }
    }
}
