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

//! Register presets per display mode. The values are bit-packed hardware
//! configuration (clocking, plane mapping, retrace timing) and must not be
//! "tidied up".

use crate::constants::*;
use crate::mode::Mode;
use crate::regs::RegisterWrite;

const GC: u16 = GC_INDEX_PORT;
const SEQ: u16 = SEQ_INDEX_PORT;
const CRT: u16 = CRT_INDEX_PORT_COLOR;

pub struct ModePreset {
    pub registers: &'static [RegisterWrite],
    /// (index, value) pairs for the attribute controller, written in order.
    pub attributes: &'static [(u8, u8)],
    pub misc_output: u8,
}

pub const TEXT_REGISTERS: [RegisterWrite; 22] = [
    RegisterWrite::new(GC, GC_ENABLE_SET_RESET, 0),
    RegisterWrite::new(GC, GC_DATA_ROTATE, 0),
    RegisterWrite::new(GC, GC_READ_MAP, 0),
    RegisterWrite::new(GC, GC_MODE, 0b0001_0000),
    RegisterWrite::new(GC, GC_MISC, 0b1110),
    RegisterWrite::new(GC, GC_BIT_MASK, 0xFF),
    RegisterWrite::new(SEQ, SEQ_CLOCKING, 0),
    RegisterWrite::new(SEQ, SEQ_MAP_MASK, 0b0011),
    RegisterWrite::new(SEQ, SEQ_CHAR_MAP, 0),
    RegisterWrite::new(SEQ, SEQ_MEMORY_MODE, 0b0010),
    RegisterWrite::new(CRT, CRT_HORIZONTAL_RETRACE_START, 0x55),
    RegisterWrite::new(CRT, CRT_HORIZONTAL_RETRACE_END, 0x81),
    RegisterWrite::new(CRT, CRT_VERTICAL_TOTAL, 0xBF),
    RegisterWrite::new(CRT, CRT_OVERFLOW, 0x1F),
    RegisterWrite::new(CRT, CRT_MAX_SCANLINE, 0x4F),
    RegisterWrite::new(CRT, CRT_VERTICAL_RETRACE_START, 0x9C),
    RegisterWrite::new(CRT, CRT_VERTICAL_RETRACE_END, 0x0E),
    RegisterWrite::new(CRT, CRT_VERTICAL_DISPLAY_END, 0x8F),
    RegisterWrite::new(CRT, CRT_UNDERLINE, 0x1F),
    RegisterWrite::new(CRT, CRT_VERTICAL_BLANK_START, 0x96),
    RegisterWrite::new(CRT, CRT_VERTICAL_BLANK_END, 0xB9),
    RegisterWrite::new(CRT, CRT_MODE_CONTROL, 0b1010_0011),
];

pub const COLOR256_REGISTERS: [RegisterWrite; 21] = [
    RegisterWrite::new(GC, GC_ENABLE_SET_RESET, 0),
    RegisterWrite::new(GC, GC_DATA_ROTATE, 0),
    RegisterWrite::new(GC, GC_READ_MAP, 0),
    RegisterWrite::new(GC, GC_MODE, 0b0100_0000),
    RegisterWrite::new(GC, GC_MISC, 0b0101),
    RegisterWrite::new(GC, GC_BIT_MASK, 0xFF),
    RegisterWrite::new(SEQ, SEQ_CLOCKING, 1),
    RegisterWrite::new(SEQ, SEQ_MAP_MASK, 0b1111),
    RegisterWrite::new(SEQ, SEQ_MEMORY_MODE, 0b1110),
    RegisterWrite::new(CRT, CRT_HORIZONTAL_RETRACE_START, 0x54),
    RegisterWrite::new(CRT, CRT_HORIZONTAL_RETRACE_END, 0x80),
    RegisterWrite::new(CRT, CRT_VERTICAL_TOTAL, 0xBF),
    RegisterWrite::new(CRT, CRT_OVERFLOW, 0x1F),
    RegisterWrite::new(CRT, CRT_MAX_SCANLINE, 0x41),
    RegisterWrite::new(CRT, CRT_VERTICAL_RETRACE_START, 0x9C),
    RegisterWrite::new(CRT, CRT_VERTICAL_RETRACE_END, 0x0E),
    RegisterWrite::new(CRT, CRT_VERTICAL_DISPLAY_END, 0x8F),
    RegisterWrite::new(CRT, CRT_UNDERLINE, 0x40),
    RegisterWrite::new(CRT, CRT_VERTICAL_BLANK_START, 0x96),
    RegisterWrite::new(CRT, CRT_VERTICAL_BLANK_END, 0xB9),
    RegisterWrite::new(CRT, CRT_MODE_CONTROL, 0b1010_0011),
];

pub static TEXT: ModePreset = ModePreset {
    registers: &TEXT_REGISTERS,
    attributes: &[
        (AC_MODE_CONTROL, 0b0100),
        (AC_OVERSCAN, 0),
        (AC_PLANE_ENABLE, 0b1111),
        (AC_PIXEL_SHIFT, 0x08),
        (AC_COLOR_SELECT, 0),
    ],
    misc_output: 0x67,
};

pub static COLOR256: ModePreset = ModePreset {
    registers: &COLOR256_REGISTERS,
    attributes: &[(AC_MODE_CONTROL, 0b0100_0001), (AC_PIXEL_SHIFT, 0)],
    misc_output: 0b0110_0011,
};

/// `None` for modes this build carries no table for.
pub fn preset_for(mode: Mode) -> Option<&'static ModePreset> {
    match mode {
        Mode::Text => Some(&TEXT),
        Mode::Color256 => Some(&COLOR256),
        Mode::Off | Mode::Color16 => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert!(preset_for(Mode::Text).is_some());
        assert!(preset_for(Mode::Color256).is_some());
        assert!(preset_for(Mode::Off).is_none());
        assert!(preset_for(Mode::Color16).is_none());
    }

    #[test]
    fn test_text_preset_keeps_crtc_unlocked() {
        // Protect bit must stay clear until set_mode re-locks.
        let retrace_end = TEXT_REGISTERS
            .iter()
            .find(|r| r.port == CRT && r.index == CRT_VERTICAL_RETRACE_END)
            .map(|r| r.value);
        assert_eq!(retrace_end, Some(0x0E));
        assert_eq!(retrace_end.unwrap_or(0xFF) & CRT_PROTECT_BIT, 0);
    }

    #[test]
    fn test_text_preset_selects_odd_even_window() {
        let misc = TEXT_REGISTERS
            .iter()
            .find(|r| r.port == GC && r.index == GC_MISC)
            .map(|r| r.value);
        assert_eq!(misc, Some(GC_MISC_TEXT));
        assert_eq!(TEXT.misc_output, 0x67);
    }

    #[test]
    fn test_color256_preset_is_chain4() {
        let mem = COLOR256_REGISTERS
            .iter()
            .find(|r| r.port == SEQ && r.index == SEQ_MEMORY_MODE)
            .map(|r| r.value);
        assert_eq!(mem, Some(0b1110));
        assert_eq!(COLOR256.misc_output, 0x63);
    }
}
