// NØNOS Operating System
// Copyright (C) 2026 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Text terminal on top of the plane-optimized text mode.
//!
//! There is no scrolling: running off the last row clears the screen and
//! starts over at the top.

use core::fmt;

use crate::buffer::FrameBuffer;
use crate::constants::*;
use crate::device::Vga;
use crate::error::{Result, VgaError};
use crate::format::{write_formatted, Arg};
use crate::io::PortIo;
use crate::log::log_dbg;
use crate::mode::Mode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    pub column: usize,
    pub row: usize,
    pub color: u8,
}

pub struct Terminal<P: PortIo, M: FrameBuffer> {
    vga: Vga<P, M>,
    cursor: CursorState,
}

impl<P: PortIo, M: FrameBuffer> Terminal<P, M> {
    /// Takes ownership of the adapter; nothing is programmed until `init`.
    pub fn new(vga: Vga<P, M>) -> Self {
        Self { vga, cursor: CursorState::default() }
    }

    /// Text mode, color plane painted with `color`, cursor visible at home.
    pub fn init(&mut self, color: u8) -> Result<()> {
        self.cursor = CursorState { column: 0, row: 0, color };
        self.vga.set_mode(Mode::Text)?;
        self.vga.arm(color)?;
        self.vga.cursor_toggle(true);
        self.vga.cursor_move(0, 0)
    }

    /// Blanks the screen in the terminal color and homes the cursor.
    pub fn clear(&mut self) -> Result<()> {
        let color = self.cursor.color;
        // The fill disarms the optimizer; arm again for the fast path.
        self.vga.fill(0, color)?;
        self.vga.arm(color)?;
        self.cursor.row = 0;
        self.cursor.column = 0;
        self.vga.cursor_move(0, 0)
    }

    /// Emits one byte.
    ///
    /// `\n` moves to the start of the next row. Other control bytes (0..=31)
    /// are not drawn but still take up a column, like printable bytes do.
    pub fn put_char(&mut self, c: u8) -> Result<()> {
        self.settle()?;

        match c {
            b'\n' => {
                self.cursor.row += 1;
                self.cursor.column = 0;
            }
            c if c <= CONTROL_CHAR_MAX => {}
            c => self.vga.write_char_fast(self.cursor.row, self.cursor.column, c)?,
        }

        if self.cursor.row < TEXT_HEIGHT {
            self.vga.cursor_move(self.cursor.row, self.cursor.column)?;
        }
        self.cursor.column += 1;

        self.settle()
    }

    pub fn put_string(&mut self, s: &str) -> Result<()> {
        s.bytes().try_for_each(|b| self.put_char(b))
    }

    /// See [`crate::format`] for the accepted specifiers.
    pub fn formatted_write(&mut self, format: &str, args: &[Arg<'_>]) -> Result<()> {
        write_formatted(format, args, |b| self.put_char(b))
    }

    /// Linear cursor offset, `row * 80 + column`.
    #[inline]
    pub fn tell(&self) -> usize {
        self.cursor.row * TEXT_WIDTH + self.cursor.column
    }

    /// Moves the logical cursor; the hardware cursor follows on the next
    /// character. Offsets past the last cell are rejected.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > TEXT_CELLS {
            return Err(VgaError::OutOfBounds);
        }
        self.cursor.row = offset / TEXT_WIDTH;
        self.cursor.column = offset % TEXT_WIDTH;
        Ok(())
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.cursor.row, self.cursor.column)
    }

    #[inline]
    pub fn color(&self) -> u8 {
        self.cursor.color
    }

    #[inline]
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn device(&self) -> &Vga<P, M> {
        &self.vga
    }

    pub fn device_mut(&mut self) -> &mut Vga<P, M> {
        &mut self.vga
    }

    pub fn into_device(self) -> Vga<P, M> {
        self.vga
    }

    // Wrap past the last column, clear past the last row.
    fn settle(&mut self) -> Result<()> {
        if self.cursor.column >= TEXT_WIDTH {
            self.cursor.row += 1;
            self.cursor.column = 0;
        }
        if self.cursor.row >= TEXT_HEIGHT {
            log_dbg!("vga: terminal full, clearing");
            self.clear()?;
        }
        Ok(())
    }
}

impl<P: PortIo, M: FrameBuffer> fmt::Write for Terminal<P, M> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_string(s).map_err(|_| fmt::Error)
    }
}
