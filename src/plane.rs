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

//! Text-mode plane optimizer.
//!
//! In text mode every cell is a character byte in plane 0 and a color byte in
//! plane 1. Arming paints the color plane once, then routes all later writes
//! to plane 0 only, so per-character output costs one byte and no plane
//! switching. Any full-cell write disarms first.

use crate::buffer::FrameBuffer;
use crate::constants::*;
use crate::device::Vga;
use crate::error::{Result, VgaError};
use crate::io::PortIo;
use crate::log::log_dbg;
use crate::mode::Mode;
use crate::regs::write_indexed;

/// Linear cell index, checked before any address is formed.
#[inline]
pub(crate) fn text_offset(row: usize, col: usize) -> Result<usize> {
    if row >= TEXT_HEIGHT || col >= TEXT_WIDTH {
        return Err(VgaError::OutOfBounds);
    }
    Ok(row * TEXT_WIDTH + col)
}

impl<P: PortIo, M: FrameBuffer> Vga<P, M> {
    /// Paints `color` into every cell's color plane and leaves the character
    /// plane as the only write target.
    pub fn arm(&mut self, color: u8) -> Result<()> {
        let geometry = self.require_mode(Mode::Text)?;

        // Odd/even off: byte offsets address one plane linearly.
        write_indexed(&mut self.io, GC_INDEX_PORT, GC_MODE, GC_MODE_PLANAR);
        write_indexed(&mut self.io, GC_INDEX_PORT, GC_MISC, GC_MISC_PLANAR);
        write_indexed(&mut self.io, SEQ_INDEX_PORT, SEQ_MEMORY_MODE, MEMORY_MODE_PLANAR);

        write_indexed(&mut self.io, SEQ_INDEX_PORT, SEQ_MAP_MASK, MAP_MASK_COLOR);
        for cell in 0..TEXT_CELLS {
            self.mem.write_u8(geometry.base + cell, color);
        }
        write_indexed(&mut self.io, SEQ_INDEX_PORT, SEQ_MAP_MASK, MAP_MASK_CHARACTER);

        self.state.plane_optimization_armed = true;
        self.stats.arms += 1;
        log_dbg!("vga: plane optimizer armed, color {:#04x}", color);
        Ok(())
    }

    /// Back to interleaved character/color addressing.
    pub(crate) fn disarm(&mut self) {
        write_indexed(&mut self.io, GC_INDEX_PORT, GC_MODE, GC_MODE_ODD_EVEN);
        write_indexed(&mut self.io, GC_INDEX_PORT, GC_MISC, GC_MISC_TEXT);
        write_indexed(&mut self.io, SEQ_INDEX_PORT, SEQ_MEMORY_MODE, MEMORY_MODE_TEXT);
        write_indexed(&mut self.io, SEQ_INDEX_PORT, SEQ_MAP_MASK, MAP_MASK_TEXT);

        self.state.plane_optimization_armed = false;
        self.stats.disarms += 1;
        log_dbg!("vga: plane optimizer disarmed");
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.state.plane_optimization_armed
    }

    /// Writes only the character byte of a cell. Requires an armed optimizer.
    pub fn write_char_fast(&mut self, row: usize, col: usize, ch: u8) -> Result<()> {
        let geometry = self.require_mode(Mode::Text)?;
        if !self.state.plane_optimization_armed {
            return Err(VgaError::UnsupportedMode);
        }
        let offset = text_offset(row, col)?;

        self.mem.write_u8(geometry.base + offset, ch);
        self.stats.cells_written += 1;
        Ok(())
    }

    /// Writes character and color of a cell, disarming the optimizer if it
    /// is armed. Bounds are checked before any register is touched.
    pub fn write_cell(&mut self, row: usize, col: usize, ch: u8, color: u8) -> Result<()> {
        let geometry = self.require_mode(Mode::Text)?;
        let offset = text_offset(row, col)?;

        if self.state.plane_optimization_armed {
            self.disarm();
        }

        let cell = (color as u16) << 8 | ch as u16;
        self.mem.write_u16(geometry.base + offset * 2, cell);
        self.stats.cells_written += 1;
        Ok(())
    }
}
