//! TerminalRenderer: flushes a monochrome framebuffer to a real terminal.
//!
//! Two pixel rows share one terminal row using half-block glyphs, so the
//! 128x32 display occupies 128x16 character cells plus a status line.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::MonoFrameBuffer;

/// Text shown under the pixel area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudStatus {
    pub score: u32,
    pub rows_cleared: u32,
    pub is_over: bool,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<(MonoFrameBuffer, HudStatus)>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame. Identical consecutive frames are skipped.
    pub fn draw(&mut self, fb: &MonoFrameBuffer, hud: HudStatus) -> Result<()> {
        if self.is_unchanged(fb, hud) {
            return Ok(());
        }

        self.buf.clear();
        encode_full_into(fb, hud, &mut self.buf)?;
        self.flush_buf()?;
        self.remember(fb, hud);
        Ok(())
    }

    fn is_unchanged(&self, fb: &MonoFrameBuffer, hud: HudStatus) -> bool {
        matches!(&self.last, Some((prev_fb, prev_hud)) if prev_fb == fb && *prev_hud == hud)
    }

    /// Keep a copy of the drawn frame, reusing the previous buffer.
    fn remember(&mut self, fb: &MonoFrameBuffer, hud: HudStatus) {
        match &mut self.last {
            Some((prev_fb, prev_hud)) => {
                prev_fb.copy_from(fb);
                *prev_hud = hud;
            }
            None => self.last = Some((fb.clone(), hud)),
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph for a vertical pair of pixels.
fn half_block(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &MonoFrameBuffer, hud: HudStatus, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut line = String::with_capacity(fb.width() as usize * 3);
    for y in (0..fb.height() as i32).step_by(2) {
        line.clear();
        for x in 0..fb.width() as i32 {
            line.push(half_block(fb.is_on(x, y), fb.is_on(x, y + 1)));
        }
        out.queue(Print(&line))?;
        out.queue(Print("\r\n"))?;
    }

    let status = if hud.is_over {
        format!("GAME OVER  score {}  [r] restart  [q] quit", hud.score)
    } else {
        format!("score {}  rows {}", hud.score, hud.rows_cleared)
    };
    out.queue(Print(status))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_block_pairs() {
        assert_eq!(half_block(true, false), '▀');
        assert_eq!(half_block(false, true), '▄');
        assert_eq!(half_block(true, true), '█');
        assert_eq!(half_block(false, false), ' ');
    }

    #[test]
    fn test_encode_contains_pixels_and_status() {
        let mut fb = MonoFrameBuffer::new(4, 2);
        fb.set(1, 0, true);
        fb.set(2, 0, true);
        fb.set(2, 1, true);
        let mut out = Vec::new();
        encode_full_into(
            &fb,
            HudStatus {
                score: 30,
                rows_cleared: 3,
                is_over: false,
            },
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" ▀█ "));
        assert!(text.contains("score 30  rows 3"));
    }

    #[test]
    fn test_remembered_frame_skips_redraw() {
        let hud = HudStatus::default();
        let mut small = MonoFrameBuffer::new(8, 2);
        small.set(3, 1, true);
        let mut full = MonoFrameBuffer::default();
        full.fill_rect(44, 0, 3, 3);

        let mut term = TerminalRenderer::new();
        assert!(!term.is_unchanged(&small, hud));

        term.remember(&small, hud);
        assert!(term.is_unchanged(&small, hud));
        assert!(!term.is_unchanged(&small, HudStatus { score: 10, ..hud }));

        // A different size goes through the resize path of the kept buffer.
        term.remember(&full, hud);
        assert!(term.is_unchanged(&full, hud));
        assert!(!term.is_unchanged(&small, hud));

        term.invalidate();
        assert!(!term.is_unchanged(&full, hud));
    }
}
