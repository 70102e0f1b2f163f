//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Double buffered: every frame is diffed against the previous one and only
//! changed runs are written, so a steady board costs almost no terminal
//! traffic between piece movements.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    /// Put the terminal into game mode: raw input, alternate screen,
    /// hidden cursor, no line wrap.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Undo everything `enter` did. Safe to call after a failed run so the
    /// shell comes back usable.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame, swapping it into internal state.
    ///
    /// The caller keeps one `FrameBuffer` and passes it in every frame; the
    /// renderer diffs against the previous frame, then swaps buffers so no
    /// frame is ever cloned. A size change falls back to a full redraw.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) => prev,
            None => FrameBuffer::new(0, 0),
        };

        if prev.width() != fb.width() || prev.height() != fb.height() {
            self.full_redraw(fb)?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.diff_redraw(fb, &prev)?;
        }

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            let row = match fb.row(y) {
                Some(row) => row,
                None => continue,
            };
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for cell in row {
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.finish_frame()
    }

    // Caller guarantees equal dimensions, so rows pair up exactly.
    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut style: Option<CellStyle> = None;

        for y in 0..next.height() {
            let (old, new) = match (prev.row(y), next.row(y)) {
                (Some(old), Some(new)) => (old, new),
                _ => continue,
            };
            let mut x = 0;
            while x < new.len() {
                if old[x] == new[x] {
                    x += 1;
                    continue;
                }
                // Start of a changed run; emit it in one cursor move
                self.stdout.queue(cursor::MoveTo(x as u16, y))?;
                while x < new.len() && old[x] != new[x] {
                    let cell = new[x];
                    if style != Some(cell.style) {
                        self.apply_style(cell.style)?;
                        style = Some(cell.style);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                    x += 1;
                }
            }
        }

        self.finish_frame()
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        } else {
            self.stdout.queue(SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
