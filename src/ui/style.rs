//! Terminal colours for rendered views and banners.
//!
//! `console` drops the escape codes on its own when stdout is not a terminal.

use console::Style;
use std::fmt::Display;

fn paint<D: Display>(style: Style, text: D) -> String {
    style.apply_to(text).to_string()
}

/// Checkmarks and completed agent steps.
pub fn success<D: Display>(text: D) -> String {
    paint(Style::new().green().bold(), text)
}

pub fn failure<D: Display>(text: D) -> String {
    paint(Style::new().red().bold(), text)
}

/// View titles.
pub fn header<D: Display>(text: D) -> String {
    paint(Style::new().white().bold(), text)
}

pub fn dim<D: Display>(text: D) -> String {
    paint(Style::new().dim(), text)
}

/// Warnings and the backend start command.
pub fn yellow<D: Display>(text: D) -> String {
    paint(Style::new().yellow(), text)
}

/// Bullets and arrows between agents.
pub fn accent<D: Display>(text: D) -> String {
    paint(Style::new().cyan().bold(), text)
}

/// Field labels.
pub fn cyan<D: Display>(text: D) -> String {
    paint(Style::new().cyan(), text)
}

pub fn url<D: Display>(text: D) -> String {
    paint(Style::new().cyan().underlined(), text)
}

/// Traffic-light colour for a stress or risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Yellow,
    Green,
}

impl Tone {
    fn style(self) -> Style {
        let base = Style::new().bold();
        match self {
            Self::Red => base.red(),
            Self::Yellow => base.yellow(),
            Self::Green => base.green(),
        }
    }
}

pub fn toned<D: Display>(tone: Tone, text: D) -> String {
    paint(tone.style(), text)
}
