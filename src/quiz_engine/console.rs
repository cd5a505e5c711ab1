//! Presentation boundary between the session and the terminal.
//!
//! The session only talks to a [`Console`]: it writes lines, asks for input
//! and clears the screen. Colour is cosmetic and comes from an immutable
//! [`Palette`] owned by the console; [`Palette::plain`] renders the exact same
//! text with no escape codes at all.

use std::io::{self, BufRead, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, Color, ContentStyle},
    terminal::{Clear, ClearType},
};

use crate::quiz_engine::error::{QuizError, Result};

/// Text roles the session can ask to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Header,
    Keyword,
    Correct,
    Incorrect,
    Warning,
    Bold,
}

impl Tone {
    fn apply(self, style: &mut ContentStyle) {
        let color = match self {
            Tone::Header    => Color::DarkBlue,
            Tone::Keyword   => Color::Cyan,
            Tone::Correct   => Color::Green,
            Tone::Incorrect => Color::Red,
            Tone::Warning   => Color::Yellow,
            Tone::Bold      => {
                style.attributes.set(Attribute::Bold);
                return;
            }
        };
        style.foreground_color = Some(color);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    pub const fn ansi() -> Self {
        Palette { colored: true }
    }

    pub const fn plain() -> Self {
        Palette { colored: false }
    }

    pub fn is_plain(&self) -> bool {
        !self.colored
    }

    /// Combined terminal style for a set of tones.
    pub fn style(&self, tones: &[Tone]) -> ContentStyle {
        let mut style = ContentStyle::new();
        if self.colored {
            for &tone in tones {
                tone.apply(&mut style);
            }
        }
        style
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        self.paint_all(&[tone], text)
    }

    /// Apply several tones at once, e.g. header colour plus bold.
    pub fn paint_all(&self, tones: &[Tone], text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        self.style(tones).apply(text).to_string()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::ansi()
    }
}

/// What the quiz session needs from its surroundings.
pub trait Console {
    fn palette(&self) -> &Palette;

    /// Wipe the screen between questions. May do nothing.
    fn clear(&mut self) -> Result<()>;

    /// Write one line of output.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Show `text` without a newline and read one line back, trimmed.
    /// End of input is reported as [`QuizError::Interrupted`].
    fn prompt(&mut self, text: &str) -> Result<String>;
}

/// Line-based console over any reader/writer pair.
pub struct Terminal<R, W> {
    palette: Palette,
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, Stdout> {
    pub fn stdio(palette: Palette) -> Self {
        Terminal::new(palette, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(palette: Palette, input: R, output: W) -> Self {
        Terminal { palette, input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn clear(&mut self) -> Result<()> {
        if self.palette.is_plain() {
            return Ok(());
        }
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(QuizError::Interrupted),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(e.into()),
        }
    }
}
