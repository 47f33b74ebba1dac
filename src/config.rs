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

//! Build-time and runtime adapter configuration.

use crate::constants::*;
use crate::io::PortIo;

/// Which I/O block the CRT controller answers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrtcBase {
    Color,
    Mono,
}

impl CrtcBase {
    #[cfg(not(feature = "monochrome"))]
    pub const DEFAULT: CrtcBase = CrtcBase::Color;
    #[cfg(feature = "monochrome")]
    pub const DEFAULT: CrtcBase = CrtcBase::Mono;

    /// Misc output bit 0 selects the 0x3Dx block.
    pub fn detect<P: PortIo>(io: &mut P) -> CrtcBase {
        if io.read_u8(MISC_READ_PORT) & 0x01 != 0 {
            CrtcBase::Color
        } else {
            CrtcBase::Mono
        }
    }

    #[inline]
    pub const fn index_port(self) -> u16 {
        match self {
            CrtcBase::Color => CRT_INDEX_PORT_COLOR,
            CrtcBase::Mono => CRT_INDEX_PORT_MONO,
        }
    }

    #[inline]
    pub const fn data_port(self) -> u16 {
        self.index_port() + 1
    }

    #[inline]
    pub const fn status_port(self) -> u16 {
        match self {
            CrtcBase::Color => INPUT_STATUS_PORT_COLOR,
            CrtcBase::Mono => INPUT_STATUS_PORT_MONO,
        }
    }
}

impl Default for CrtcBase {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VgaConfig {
    pub crtc: CrtcBase,
}

impl VgaConfig {
    pub const fn new(crtc: CrtcBase) -> Self {
        Self { crtc }
    }

    /// Configuration matching what the adapter currently decodes.
    pub fn detect<P: PortIo>(io: &mut P) -> Self {
        Self { crtc: CrtcBase::detect(io) }
    }
}
