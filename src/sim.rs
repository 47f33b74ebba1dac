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

//! Simulated adapter for host tests.
//!
//! Models the parts of the VGA the driver depends on: the sequencer,
//! graphics, CRT and attribute register files (with CRTC write protection
//! and the attribute flip-flop), four 64 KiB planes behind the memory window
//! selected by GC misc, odd/even and chain-4 addressing, latches, and write
//! modes 0 and 1. Odd/even stores cell `i` at offset `i` of planes 0 and 1,
//! which lines text cells up with the planar view the optimizer writes.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::buffer::FrameBuffer;
use crate::constants::*;
use crate::device::Vga;
use crate::io::PortIo;

pub const PLANE_SIZE: usize = 0x10000;

pub struct SimAdapter {
    pub seq: [u8; 5],
    pub gc: [u8; 9],
    pub crtc: [u8; 0x19],
    pub ac: [u8; 0x15],
    pub misc: u8,
    seq_index: u8,
    gc_index: u8,
    crtc_index: u8,
    pub ac_index: u8,
    ac_expect_data: bool,
    pub planes: [Vec<u8>; 4],
    latches: [u8; 4],
    pub port_writes: Vec<(u16, u8)>,
    pub memory_writes: usize,
    pub word_writes: usize,
    pub stray_accesses: usize,
}

impl SimAdapter {
    pub fn new() -> Self {
        let mut crtc = [0u8; 0x19];
        crtc[CRT_VERTICAL_RETRACE_END as usize] = 0x8E;
        crtc[CRT_CURSOR_START as usize] = 0x2D;
        Self {
            seq: [0x03, 0x00, 0x03, 0x00, 0x02],
            gc: [0, 0, 0, 0, 0, 0x10, 0x0E, 0, 0xFF],
            crtc,
            ac: [0; 0x15],
            misc: 0x67,
            seq_index: 0,
            gc_index: 0,
            crtc_index: 0,
            ac_index: AC_PALETTE_SOURCE,
            ac_expect_data: false,
            planes: [
                vec![0; PLANE_SIZE],
                vec![0; PLANE_SIZE],
                vec![0; PLANE_SIZE],
                vec![0; PLANE_SIZE],
            ],
            latches: [0; 4],
            port_writes: Vec::new(),
            memory_writes: 0,
            word_writes: 0,
            stray_accesses: 0,
        }
    }

    pub fn clear_journal(&mut self) {
        self.port_writes.clear();
        self.memory_writes = 0;
        self.word_writes = 0;
    }

    pub fn char_at(&self, row: usize, col: usize) -> u8 {
        self.planes[0][row * TEXT_WIDTH + col]
    }

    pub fn color_at(&self, row: usize, col: usize) -> u8 {
        self.planes[1][row * TEXT_WIDTH + col]
    }

    pub fn cell(&self, offset: usize) -> u16 {
        (self.planes[1][offset] as u16) << 8 | self.planes[0][offset] as u16
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        let a = y * PIXEL_WIDTH + x;
        self.planes[a & 3][a >> 2]
    }

    pub fn write_mode(&self) -> u8 {
        self.gc[GC_MODE as usize] & 0x03
    }

    pub fn screen_disabled(&self) -> bool {
        self.seq[SEQ_CLOCKING as usize] & SCREEN_DISABLE_BIT != 0
    }

    pub fn crtc_locked(&self) -> bool {
        self.crtc[CRT_VERTICAL_RETRACE_END as usize] & CRT_PROTECT_BIT != 0
    }

    fn window_offset(&self, addr: usize) -> Option<usize> {
        let (start, end) = match (self.gc[GC_MISC as usize] >> 2) & 0x03 {
            0 => (0xA0000, 0xC0000),
            1 => (0xA0000, 0xB0000),
            2 => (0xB0000, 0xB8000),
            _ => (0xB8000, 0xC0000),
        };
        (start..end).contains(&addr).then(|| addr - start)
    }

    // (plane offset, planes the address can reach, plane a read returns)
    fn route(&self, a: usize) -> (usize, u8, usize) {
        let mem_mode = self.seq[SEQ_MEMORY_MODE as usize];
        if mem_mode & 0x08 != 0 {
            (a >> 2, 1 << (a & 3), a & 3)
        } else if mem_mode & 0x04 == 0 {
            (a >> 1, 1 << (a & 1), a & 1)
        } else {
            (a, 0x0F, (self.gc[GC_READ_MAP as usize] & 0x03) as usize)
        }
    }

    fn load_latches(&mut self, offset: usize) {
        for plane in 0..4 {
            self.latches[plane] = self.planes[plane][offset];
        }
    }

    fn mem_read(&mut self, addr: usize) -> u8 {
        let Some(a) = self.window_offset(addr) else {
            self.stray_accesses += 1;
            return 0xFF;
        };
        let (offset, _, plane) = self.route(a);
        if offset >= PLANE_SIZE {
            self.stray_accesses += 1;
            return 0xFF;
        }
        self.load_latches(offset);
        self.latches[plane]
    }

    fn mem_write(&mut self, addr: usize, value: u8) {
        self.memory_writes += 1;
        let Some(a) = self.window_offset(addr) else {
            self.stray_accesses += 1;
            return;
        };
        let (offset, reachable, _) = self.route(a);
        if offset >= PLANE_SIZE {
            self.stray_accesses += 1;
            return;
        }

        let write_mode = self.write_mode();
        if write_mode != 1 {
            self.load_latches(offset);
        }
        let bit_mask = self.gc[GC_BIT_MASK as usize];
        let enabled = reachable & self.seq[SEQ_MAP_MASK as usize];

        for plane in 0..4 {
            if enabled & (1 << plane) == 0 {
                continue;
            }
            let latch = self.latches[plane];
            self.planes[plane][offset] = match write_mode {
                1 => latch,
                _ => (value & bit_mask) | (latch & !bit_mask),
            };
        }
    }

    fn port_read(&mut self, port: u16) -> u8 {
        match port {
            SEQ_DATA_PORT => self.seq.get(self.seq_index as usize).copied().unwrap_or(0xFF),
            GC_DATA_PORT => self.gc.get(self.gc_index as usize).copied().unwrap_or(0xFF),
            0x3D5 | 0x3B5 => self.crtc.get(self.crtc_index as usize).copied().unwrap_or(0xFF),
            AC_INDEX_WRITE_PORT => self.ac_index,
            AC_READ_PORT => self.ac.get((self.ac_index & 0x1F) as usize).copied().unwrap_or(0xFF),
            INPUT_STATUS_PORT_COLOR | INPUT_STATUS_PORT_MONO => {
                self.ac_expect_data = false;
                0
            }
            MISC_READ_PORT => self.misc,
            SEQ_INDEX_PORT => self.seq_index,
            GC_INDEX_PORT => self.gc_index,
            CRT_INDEX_PORT_COLOR | CRT_INDEX_PORT_MONO => self.crtc_index,
            _ => 0xFF,
        }
    }

    fn port_write(&mut self, port: u16, value: u8) {
        self.port_writes.push((port, value));
        match port {
            SEQ_INDEX_PORT => self.seq_index = value,
            SEQ_DATA_PORT => {
                if let Some(reg) = self.seq.get_mut(self.seq_index as usize) {
                    *reg = value;
                }
            }
            GC_INDEX_PORT => self.gc_index = value,
            GC_DATA_PORT => {
                if let Some(reg) = self.gc.get_mut(self.gc_index as usize) {
                    *reg = value;
                }
            }
            CRT_INDEX_PORT_COLOR | CRT_INDEX_PORT_MONO => self.crtc_index = value,
            0x3D5 | 0x3B5 => {
                let index = self.crtc_index as usize;
                let protected = index <= CRT_OVERFLOW as usize && self.crtc_locked();
                if !protected {
                    if let Some(reg) = self.crtc.get_mut(index) {
                        *reg = value;
                    }
                }
            }
            AC_INDEX_WRITE_PORT => {
                if self.ac_expect_data {
                    if let Some(reg) = self.ac.get_mut((self.ac_index & 0x1F) as usize) {
                        *reg = value;
                    }
                } else {
                    self.ac_index = value;
                }
                self.ac_expect_data = !self.ac_expect_data;
            }
            MISC_WRITE_PORT => self.misc = value,
            _ => {}
        }
    }
}

/// Shared handle so one adapter can serve as both port space and memory.
#[derive(Clone)]
pub struct Sim(Rc<RefCell<SimAdapter>>);

impl Sim {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(SimAdapter::new())))
    }

    pub fn get(&self) -> Ref<'_, SimAdapter> {
        self.0.borrow()
    }

    pub fn get_mut(&self) -> RefMut<'_, SimAdapter> {
        self.0.borrow_mut()
    }

    pub fn vga(&self) -> Vga<Sim, Sim> {
        Vga::new(self.clone(), self.clone())
    }
}

impl PortIo for Sim {
    fn read_u8(&mut self, port: u16) -> u8 {
        self.0.borrow_mut().port_read(port)
    }

    fn write_u8(&mut self, port: u16, value: u8) {
        self.0.borrow_mut().port_write(port, value)
    }
}

impl FrameBuffer for Sim {
    fn read_u8(&mut self, addr: usize) -> u8 {
        self.0.borrow_mut().mem_read(addr)
    }

    fn write_u8(&mut self, addr: usize, value: u8) {
        self.0.borrow_mut().mem_write(addr, value)
    }

    fn write_u16(&mut self, addr: usize, value: u16) {
        let mut sim = self.0.borrow_mut();
        sim.word_writes += 1;
        sim.mem_write(addr, value as u8);
        sim.mem_write(addr + 1, (value >> 8) as u8);
    }
}
