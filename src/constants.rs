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

// Memory windows
pub const TEXT_BUFFER_ADDR: usize = 0xB8000;
pub const GRAPHICS_BUFFER_ADDR: usize = 0xA0000;

// Text geometry
pub const TEXT_WIDTH: usize = 80;
pub const TEXT_HEIGHT: usize = 25;
pub const TEXT_CELLS: usize = TEXT_WIDTH * TEXT_HEIGHT;
pub const TEXT_BUFFER_SIZE: usize = TEXT_CELLS * 2;

// 256-color geometry
pub const PIXEL_WIDTH: usize = 320;
pub const PIXEL_HEIGHT: usize = 200;
pub const PIXEL_COUNT: usize = PIXEL_WIDTH * PIXEL_HEIGHT;

// Ports
pub const GC_INDEX_PORT: u16 = 0x3CE;
pub const GC_DATA_PORT: u16 = 0x3CF;
pub const SEQ_INDEX_PORT: u16 = 0x3C4;
pub const SEQ_DATA_PORT: u16 = 0x3C5;
pub const AC_INDEX_WRITE_PORT: u16 = 0x3C0;
pub const AC_READ_PORT: u16 = 0x3C1;
pub const MISC_READ_PORT: u16 = 0x3CC;
pub const MISC_WRITE_PORT: u16 = 0x3C2;
pub const CRT_INDEX_PORT_COLOR: u16 = 0x3D4;
pub const CRT_INDEX_PORT_MONO: u16 = 0x3B4;
pub const INPUT_STATUS_PORT_COLOR: u16 = 0x3DA;
pub const INPUT_STATUS_PORT_MONO: u16 = 0x3BA;

// Graphics controller registers
pub const GC_SET_RESET: u8 = 0x00;
pub const GC_ENABLE_SET_RESET: u8 = 0x01;
pub const GC_COLOR_COMPARE: u8 = 0x02;
pub const GC_DATA_ROTATE: u8 = 0x03;
pub const GC_READ_MAP: u8 = 0x04;
pub const GC_MODE: u8 = 0x05;
pub const GC_MISC: u8 = 0x06;
pub const GC_COLOR_DONT_CARE: u8 = 0x07;
pub const GC_BIT_MASK: u8 = 0x08;

// Sequencer registers
pub const SEQ_RESET: u8 = 0x00;
pub const SEQ_CLOCKING: u8 = 0x01;
pub const SEQ_MAP_MASK: u8 = 0x02;
pub const SEQ_CHAR_MAP: u8 = 0x03;
pub const SEQ_MEMORY_MODE: u8 = 0x04;

// Attribute controller registers (0x00..=0x0F are the palette)
pub const AC_MODE_CONTROL: u8 = 0x10;
pub const AC_OVERSCAN: u8 = 0x11;
pub const AC_PLANE_ENABLE: u8 = 0x12;
pub const AC_PIXEL_SHIFT: u8 = 0x13;
pub const AC_COLOR_SELECT: u8 = 0x14;
pub const AC_PALETTE_SOURCE: u8 = 0x20;

// CRT controller registers
pub const CRT_HORIZONTAL_RETRACE_START: u8 = 0x04;
pub const CRT_HORIZONTAL_RETRACE_END: u8 = 0x05;
pub const CRT_VERTICAL_TOTAL: u8 = 0x06;
pub const CRT_OVERFLOW: u8 = 0x07;
pub const CRT_MAX_SCANLINE: u8 = 0x09;
pub const CRT_CURSOR_START: u8 = 0x0A;
pub const CRT_CURSOR_END: u8 = 0x0B;
pub const CRT_CURSOR_LOC_HIGH: u8 = 0x0E;
pub const CRT_CURSOR_LOC_LOW: u8 = 0x0F;
pub const CRT_VERTICAL_RETRACE_START: u8 = 0x10;
pub const CRT_VERTICAL_RETRACE_END: u8 = 0x11;
pub const CRT_VERTICAL_DISPLAY_END: u8 = 0x12;
pub const CRT_UNDERLINE: u8 = 0x14;
pub const CRT_VERTICAL_BLANK_START: u8 = 0x15;
pub const CRT_VERTICAL_BLANK_END: u8 = 0x16;
pub const CRT_MODE_CONTROL: u8 = 0x17;

// Bits
pub const CRT_PROTECT_BIT: u8 = 0x80;
pub const CURSOR_DISABLE_BIT: u8 = 0x20;
pub const SCREEN_DISABLE_BIT: u8 = 0x20;
pub const WRITE_MODE_1: u8 = 0x01;

// Plane optimizer register values
pub const MAP_MASK_CHARACTER: u8 = 0b0001;
pub const MAP_MASK_COLOR: u8 = 0b0010;
pub const MAP_MASK_TEXT: u8 = 0b0011;
pub const GC_MODE_ODD_EVEN: u8 = 0b1_0000;
pub const GC_MODE_PLANAR: u8 = 0b0_0000;
pub const GC_MISC_TEXT: u8 = 0b1110;
pub const GC_MISC_PLANAR: u8 = 0b1100;
pub const MEMORY_MODE_TEXT: u8 = 0b0010;
pub const MEMORY_MODE_PLANAR: u8 = 0b0110;

pub const CONTROL_CHAR_MAX: u8 = 31;
