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

use crate::buffer::FrameBuffer;
use crate::constants::*;
use crate::device::Vga;
use crate::error::Result;
use crate::io::PortIo;
use crate::plane::text_offset;
use crate::regs::{modify_indexed, read_indexed, write_indexed};

impl<P: PortIo, M: FrameBuffer> Vga<P, M> {
    pub fn cursor_toggle(&mut self, enabled: bool) {
        modify_indexed(&mut self.io, self.crtc.index_port(), CRT_CURSOR_START, |v| {
            if enabled {
                v & !CURSOR_DISABLE_BIT
            } else {
                v | CURSOR_DISABLE_BIT
            }
        });
    }

    /// Moves the hardware cursor. Out-of-range positions are rejected before
    /// any port is written.
    pub fn cursor_move(&mut self, row: usize, col: usize) -> Result<()> {
        let pos = text_offset(row, col)? as u16;
        let port = self.crtc.index_port();
        write_indexed(&mut self.io, port, CRT_CURSOR_LOC_LOW, (pos & 0xFF) as u8);
        write_indexed(&mut self.io, port, CRT_CURSOR_LOC_HIGH, (pos >> 8) as u8);
        Ok(())
    }

    pub fn cursor_position(&mut self) -> u16 {
        let port = self.crtc.index_port();
        let high = read_indexed(&mut self.io, port, CRT_CURSOR_LOC_HIGH) as u16;
        let low = read_indexed(&mut self.io, port, CRT_CURSOR_LOC_LOW) as u16;
        (high << 8) | low
    }

    pub fn is_cursor_enabled(&mut self) -> bool {
        read_indexed(&mut self.io, self.crtc.index_port(), CRT_CURSOR_START) & CURSOR_DISABLE_BIT == 0
    }
}
