use std::collections::HashMap;

use anyhow::{Result, bail};
use rand::Rng;

/// Colors used for sender names unless a custom [`Palette`] is given
pub const DEFAULT_COLORS: &[&str] = &[
    "red",
    "green",
    "blue",
    "violet",
    "turquoise",
    "coral",
    "brown",
    "crimson",
    "darkblue",
    "fuschia",
    "indigo",
    "maroon",
    "navy",
];

/// An ordered, non-empty list of CSS color names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette from color names
    ///
    /// # Errors
    ///
    /// Returns an error if no colors are given.
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            bail!("Color palette must contain at least one color");
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect() }
    }
}

/// Pick a color uniformly at random from the palette
///
/// With `exclude_last` the index is drawn from `0..len - 1`, so the final palette entry is
/// never picked. A single-color palette always yields its only color.
pub fn pick_color<'p, R: Rng>(
    palette: &'p Palette,
    exclude_last: bool,
    rng: &mut R,
) -> &'p str {
    let colors = palette.colors();
    let bound = if exclude_last && colors.len() > 1 { colors.len() - 1 } else { colors.len() };
    &colors[rng.random_range(0..bound)]
}

/// Sender to color assignments for a single render
///
/// The first lookup of a sender picks a random color, every later lookup returns the same one.
pub struct ColorTable<'p, R> {
    palette: &'p Palette,
    rng: R,
    assigned: HashMap<String, &'p str>,
}

impl<'p, R: Rng> ColorTable<'p, R> {
    pub fn new(palette: &'p Palette, rng: R) -> Self {
        Self { palette, rng, assigned: HashMap::new() }
    }

    /// Color for `sender`, assigning one on first use
    pub fn color_for(&mut self, sender: &str) -> &'p str {
        if let Some(color) = self.assigned.get(sender) {
            return *color;
        }

        let color = pick_color(self.palette, true, &mut self.rng);
        self.assigned.insert(sender.to_string(), color);
        color
    }

    /// Number of senders with an assigned color
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
