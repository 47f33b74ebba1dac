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

//! Whole-screen transfers: fills and frame blits.

use crate::buffer::FrameBuffer;
use crate::constants::*;
use crate::device::Vga;
use crate::error::{Result, VgaError};
use crate::io::PortIo;
use crate::log::log_dbg;
use crate::mode::{Addressing, Geometry, Mode};
use crate::regs::modify_indexed;

impl<P: PortIo, M: FrameBuffer> Vga<P, M> {
    /// Fills the visible region.
    ///
    /// Text: every cell becomes `(ch, color)`. 256-color: every pixel becomes
    /// `color` and `ch` is ignored.
    pub fn fill(&mut self, ch: u8, color: u8) -> Result<()> {
        match self.state.mode {
            Mode::Text => self.fill_latched(ch, color)?,
            Mode::Color256 => self.fill_pixels(color)?,
            Mode::Off | Mode::Color16 => return Err(VgaError::UnsupportedMode),
        }
        self.stats.fills += 1;
        log_dbg!("vga: fill {:#04x}/{:#04x} in {}", ch, color, self.state.mode.name());
        Ok(())
    }

    #[inline]
    pub fn clear(&mut self, color: u8) -> Result<()> {
        self.fill(0, color)
    }

    /// Copies a full frame (`resolution` bytes) into the window with the
    /// display blanked. Text frames are interleaved character/color bytes.
    pub fn blit(&mut self, frame: &[u8]) -> Result<()> {
        let geometry = self.geometry()?;
        if frame.len() < geometry.resolution {
            return Err(VgaError::OutOfBounds);
        }
        if self.state.plane_optimization_armed {
            self.disarm();
        }
        self.stream(geometry, |i| frame[i]);
        Ok(())
    }

    pub fn set_screen_enabled(&mut self, enabled: bool) {
        modify_indexed(&mut self.io, SEQ_INDEX_PORT, SEQ_CLOCKING, |v| {
            if enabled {
                v & !SCREEN_DISABLE_BIT
            } else {
                v | SCREEN_DISABLE_BIT
            }
        });
    }

    // Paint cell 0, load the latches from it, then let write mode 1 replay
    // the latched planes over the whole window. The data of the pass is
    // discarded by the hardware.
    fn fill_latched(&mut self, ch: u8, color: u8) -> Result<()> {
        self.write_cell(0, 0, ch, color)?;
        let geometry = self.geometry()?;

        let _ = self.mem.read_u8(geometry.base);
        modify_indexed(&mut self.io, GC_INDEX_PORT, GC_MODE, |v| v | WRITE_MODE_1);
        self.stream(geometry, |_| 0);
        modify_indexed(&mut self.io, GC_INDEX_PORT, GC_MODE, |v| v & !WRITE_MODE_1);
        Ok(())
    }

    // Chain-4 has no usable latch path; write every pixel.
    fn fill_pixels(&mut self, color: u8) -> Result<()> {
        let geometry = self.require_mode(Mode::Color256)?;

        self.set_screen_enabled(false);
        for y in 0..PIXEL_HEIGHT {
            for x in 0..PIXEL_WIDTH {
                self.mem.write_u8(geometry.base + y * PIXEL_WIDTH + x, color);
            }
        }
        self.set_screen_enabled(true);
        Ok(())
    }

    // Word-addressed windows take whole cells, low byte first in the frame.
    fn stream(&mut self, geometry: Geometry, mut byte_at: impl FnMut(usize) -> u8) {
        self.set_screen_enabled(false);
        match geometry.unit {
            Addressing::Word => {
                for i in (0..geometry.resolution).step_by(2) {
                    let cell = u16::from_le_bytes([byte_at(i), byte_at(i + 1)]);
                    self.mem.write_u16(geometry.base + i, cell);
                }
            }
            Addressing::Byte => {
                for i in 0..geometry.resolution {
                    self.mem.write_u8(geometry.base + i, byte_at(i));
                }
            }
        }
        self.set_screen_enabled(true);
    }
}
