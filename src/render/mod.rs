//! HTML rendering of parsed channels.
//!
//! The document template is compiled in with `maud`, so every interpolated value is
//! HTML-escaped. The only markup taken from the log is the anchors produced by link
//! substitution, and those are re-emitted as `a` elements rather than copied through.
//!
//! Sender colors come from a per-render [`ColorTable`]. Nothing is shared between renders.

pub mod colors;
pub mod html;

pub use colors::{ColorTable, DEFAULT_COLORS, Palette, pick_color};
pub use html::{render, render_with, write_html};
