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

//! Indexed register access.
//!
//! The sequencer, graphics controller and CRT controller each expose an
//! index/data port pair at `port` and `port + 1`. The attribute controller
//! shares a single port for index and data, toggled by a flip-flop that is
//! reset by reading input status #1.

use crate::config::CrtcBase;
use crate::constants::{AC_INDEX_WRITE_PORT, AC_PALETTE_SOURCE, AC_READ_PORT, CRT_INDEX_PORT_COLOR};
use crate::io::PortIo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWrite {
    /// Index port of the register group; data is at `port + 1`.
    pub port: u16,
    pub index: u8,
    pub value: u8,
}

impl RegisterWrite {
    pub const fn new(port: u16, index: u8, value: u8) -> Self {
        Self { port, index, value }
    }
}

#[inline]
pub fn write_indexed<P: PortIo>(io: &mut P, port: u16, index: u8, value: u8) {
    io.write_u8(port, index);
    io.write_u8(port + 1, value);
}

#[inline]
pub fn read_indexed<P: PortIo>(io: &mut P, port: u16, index: u8) -> u8 {
    io.write_u8(port, index);
    io.read_u8(port + 1)
}

/// Read-modify-write of one indexed register. The index stays selected.
#[inline]
pub fn modify_indexed<P: PortIo>(io: &mut P, port: u16, index: u8, f: impl FnOnce(u8) -> u8) {
    let current = read_indexed(io, port, index);
    io.write_u8(port + 1, f(current));
}

/// Applies `preset` verbatim, in order. Tables name the CRT controller by its
/// color-block port; entries are relocated when the adapter decodes mono.
pub fn apply_preset<P: PortIo>(io: &mut P, crtc: CrtcBase, preset: &[RegisterWrite]) {
    for reg in preset {
        let port = if reg.port == CRT_INDEX_PORT_COLOR {
            crtc.index_port()
        } else {
            reg.port
        };
        write_indexed(io, port, reg.index, reg.value);
    }
}

/// Writes attribute register `index` and restores whatever index the
/// controller had selected before, palette-source bit included.
///
/// Status read, save, select, write, restore: nothing else may touch the
/// attribute port while this runs or the flip-flop desynchronizes.
pub fn write_attribute<P: PortIo>(io: &mut P, status_port: u16, index: u8, value: u8) {
    io.read_u8(status_port);
    let saved = io.read_u8(AC_INDEX_WRITE_PORT);
    io.write_u8(AC_INDEX_WRITE_PORT, index);
    io.write_u8(AC_INDEX_WRITE_PORT, value);
    io.write_u8(AC_INDEX_WRITE_PORT, saved);
}

/// Reads attribute register `index` with the same save/restore contract as
/// [`write_attribute`]. The palette-source bit is kept set while selecting so
/// the display is not blanked during the read.
pub fn read_attribute<P: PortIo>(io: &mut P, status_port: u16, index: u8) -> u8 {
    io.read_u8(status_port);
    let saved = io.read_u8(AC_INDEX_WRITE_PORT);
    io.write_u8(AC_INDEX_WRITE_PORT, index | AC_PALETTE_SOURCE);
    let value = io.read_u8(AC_READ_PORT);
    // Flip-flop is on "data" after the select; put it back on "index".
    io.read_u8(status_port);
    io.write_u8(AC_INDEX_WRITE_PORT, saved);
    value
}
