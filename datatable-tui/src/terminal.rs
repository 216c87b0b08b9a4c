//! Crossterm terminal.
//!
//! Raw mode, alternate screen and mouse capture for the lifetime of
//! [`Terminal`]; dropping it restores the terminal.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use datatable_lib::{Span, Tone};

use crate::view::{Background, Frame};

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for events, then drain whatever else is pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let (width, _) = terminal::size()?;
        let width = usize::from(width);

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        for (y, frame_line) in frame.lines.iter().enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(
                self.stdout,
                cursor::MoveTo(0, y),
                SetBackgroundColor(background(frame_line.background)),
                terminal::Clear(ClearType::UntilNewLine)
            )?;

            let mut used = 0;
            for span in &frame_line.line.spans {
                if used + span.width() > width {
                    break;
                }
                used += span.width();
                self.print_span(span)?;
            }
            queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        }
        queue!(self.stdout, SetBackgroundColor(Color::Reset))?;
        self.stdout.flush()
    }

    fn print_span(&mut self, span: &Span) -> io::Result<()> {
        queue!(self.stdout, SetForegroundColor(foreground(span.tone)))?;
        if span.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.stdout, Print(&span.text))?;
        if span.bold {
            queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn foreground(tone: Tone) -> Color {
    match tone {
        Tone::Default => Color::Reset,
        Tone::Muted => Color::DarkGrey,
        Tone::Accent => Color::Cyan,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
    }
}

fn background(background: Background) -> Color {
    match background {
        Background::None => Color::Reset,
        Background::Stripe => Color::Rgb {
            r: 28,
            g: 28,
            b: 36,
        },
        Background::Cursor => Color::Rgb {
            r: 48,
            g: 52,
            b: 70,
        },
        Background::Status => Color::Rgb {
            r: 36,
            g: 36,
            b: 48,
        },
    }
}
