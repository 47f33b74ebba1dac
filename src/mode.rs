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

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Off,
    Text,
    Color16,
    Color256,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Text => "Text",
            Self::Color16 => "Color16",
            Self::Color256 => "Color256",
        }
    }
}

/// Access width of the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// Character/attribute pairs.
    Word,
    Byte,
}

/// Where the mode's frame buffer lives and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub base: usize,
    /// Visible region in bytes.
    pub resolution: usize,
    pub unit: Addressing,
}

impl Geometry {
    pub const fn for_mode(mode: Mode) -> Option<Geometry> {
        match mode {
            Mode::Text => Some(Geometry {
                base: TEXT_BUFFER_ADDR,
                resolution: TEXT_BUFFER_SIZE,
                unit: Addressing::Word,
            }),
            Mode::Color256 => Some(Geometry {
                base: GRAPHICS_BUFFER_ADDR,
                resolution: PIXEL_COUNT,
                unit: Addressing::Byte,
            }),
            Mode::Off | Mode::Color16 => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceState {
    pub mode: Mode,
    /// `None` while the mode is `Off`.
    pub geometry: Option<Geometry>,
    /// Color plane pre-painted, writes routed to the character plane only.
    pub plane_optimization_armed: bool,
}

impl DeviceState {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Off,
            geometry: None,
            plane_optimization_armed: false,
        }
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VgaStats {
    pub mode_switches: u64,
    pub fills: u64,
    pub arms: u64,
    pub disarms: u64,
    pub cells_written: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_geometry() {
        let g = Geometry::for_mode(Mode::Text);
        assert_eq!(
            g,
            Some(Geometry { base: 0xB8000, resolution: 4000, unit: Addressing::Word })
        );
    }

    #[test]
    fn test_color256_geometry() {
        let g = Geometry::for_mode(Mode::Color256);
        assert_eq!(
            g,
            Some(Geometry { base: 0xA0000, resolution: 64000, unit: Addressing::Byte })
        );
    }

    #[test]
    fn test_off_has_no_geometry() {
        assert!(Geometry::for_mode(Mode::Off).is_none());
        assert!(DeviceState::new().geometry.is_none());
        assert_eq!(DeviceState::new().mode, Mode::Off);
    }
}
