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

use core::ptr;

/// Legacy video memory window (`0xA0000..0xC0000`). Addresses are physical;
/// which plane a byte lands in is decided by the adapter's current
/// sequencer/graphics configuration, not by this trait.
pub trait FrameBuffer {
    fn read_u8(&mut self, addr: usize) -> u8;
    fn write_u8(&mut self, addr: usize, value: u8);
    fn write_u16(&mut self, addr: usize, value: u16);
}

impl<M: FrameBuffer + ?Sized> FrameBuffer for &mut M {
    #[inline]
    fn read_u8(&mut self, addr: usize) -> u8 {
        (**self).read_u8(addr)
    }

    #[inline]
    fn write_u8(&mut self, addr: usize, value: u8) {
        (**self).write_u8(addr, value)
    }

    #[inline]
    fn write_u16(&mut self, addr: usize, value: u16) {
        (**self).write_u16(addr, value)
    }
}

/// Volatile access to an identity-mapped legacy window.
pub struct MappedFrameBuffer {
    offset: usize,
}

impl MappedFrameBuffer {
    /// # Safety
    /// `0xA0000..0xC0000` must be mapped at `virt_base + phys` for the whole
    /// lifetime of the value, uncached, and not aliased by Rust references.
    pub const unsafe fn new(virt_base: usize) -> Self {
        Self { offset: virt_base }
    }

    #[inline]
    fn ptr<T>(&self, addr: usize) -> *mut T {
        (self.offset + addr) as *mut T
    }
}


impl FrameBuffer for MappedFrameBuffer {
    #[inline]
    fn read_u8(&mut self, addr: usize) -> u8 {
        // SAFETY: Driver only passes addresses inside the mapped window.
        unsafe { ptr::read_volatile(self.ptr::<u8>(addr)) }
    }

    #[inline]
    fn write_u8(&mut self, addr: usize, value: u8) {
        // SAFETY: Driver only passes addresses inside the mapped window.
        unsafe { ptr::write_volatile(self.ptr::<u8>(addr), value) }
    }

    #[inline]
    fn write_u16(&mut self, addr: usize, value: u16) {
        // SAFETY: Driver only passes even, in-window addresses for word writes.
        unsafe { ptr::write_volatile(self.ptr::<u16>(addr), value) }
    }
}
