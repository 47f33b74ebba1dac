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
use crate::constants::{PIXEL_HEIGHT, PIXEL_WIDTH};
use crate::device::Vga;
use crate::error::{Result, VgaError};
use crate::io::PortIo;
use crate::mode::Mode;

impl<P: PortIo, M: FrameBuffer> Vga<P, M> {
    /// Sets one pixel in 256-color mode.
    pub fn put_pixel(&mut self, x: usize, y: usize, color: u8) -> Result<()> {
        let geometry = self.require_mode(Mode::Color256)?;
        if x >= PIXEL_WIDTH || y >= PIXEL_HEIGHT {
            return Err(VgaError::OutOfBounds);
        }
        self.mem.write_u8(geometry.base + y * PIXEL_WIDTH + x, color);
        Ok(())
    }
}
