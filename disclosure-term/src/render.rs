//! Paint the disclosure into the terminal.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;

use crate::config::TermConfig;
use crate::hover::Rect;

/// Top-left corner of the header.
const ORIGIN: (u16, u16) = (2, 1);

/// Body indent relative to the header.
const BODY_INDENT: u16 = 2;

/// Gap between label and hint.
const HINT_GAP: &str = "  ";

/// Positioned text for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Indicator and label
    pub header: String,
    /// Dimmed hint after the header
    pub hint: String,
    /// Hit area covering header and hint
    pub region: Rect,
    /// Body lines with their rows; empty while closed
    pub body: Vec<(u16, String)>,
}

/// Lay out a frame for the given visibility.
pub fn layout(config: &TermConfig, open: bool) -> Frame {
    let (x, y) = ORIGIN;
    let header = format!("{} {}", config.indicator(open), config.header);
    let hint = format!("{}{}", HINT_GAP, config.hint);
    let width = (header.width() + hint.width()).min(u16::MAX as usize) as u16;

    let body = if open {
        config
            .body
            .iter()
            .enumerate()
            .map_while(|(i, line)| {
                // Rows past the last addressable one are not laid out
                let row = u16::try_from(i).ok().and_then(|i| y.checked_add(1)?.checked_add(i))?;
                Some((row, line.clone()))
            })
            .collect()
    } else {
        Vec::new()
    };

    Frame {
        header,
        hint,
        region: Rect::new(x, y, width, 1),
        body,
    }
}

/// Clear the screen and paint a frame. Returns the header hit area.
pub fn paint<W: Write>(out: &mut W, config: &TermConfig, open: bool) -> io::Result<Rect> {
    let frame = layout(config, open);
    let (x, y) = ORIGIN;

    queue!(
        out,
        Clear(ClearType::All),
        cursor::MoveTo(x, y),
        SetAttribute(Attribute::Bold),
        Print(&frame.header),
        SetAttribute(Attribute::Reset),
        SetAttribute(Attribute::Dim),
        Print(&frame.hint),
        SetAttribute(Attribute::Reset),
    )?;

    for (row, line) in &frame.body {
        queue!(out, cursor::MoveTo(x + BODY_INDENT, *row), Print(line))?;
    }

    out.flush()?;
    Ok(frame.region)
}
