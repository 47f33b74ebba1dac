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

/// Single-byte access to the I/O port space. Hardware faults are not
/// reported; a port that misbehaves leaves the adapter in an undefined state.
pub trait PortIo {
    fn read_u8(&mut self, port: u16) -> u8;
    fn write_u8(&mut self, port: u16, value: u8);
}

impl<P: PortIo + ?Sized> PortIo for &mut P {
    #[inline]
    fn read_u8(&mut self, port: u16) -> u8 {
        (**self).read_u8(port)
    }

    #[inline]
    fn write_u8(&mut self, port: u16, value: u8) {
        (**self).write_u8(port, value)
    }
}

/// The real port space, through `in`/`out` instructions.
#[cfg(target_arch = "x86_64")]
pub struct PortBus {
    _private: (),
}

#[cfg(target_arch = "x86_64")]
impl PortBus {
    /// # Safety
    /// The caller must run at an I/O privilege level that allows access to
    /// the VGA port block and must be the only party programming the adapter.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(target_arch = "x86_64")]
impl PortIo for PortBus {
    #[inline(always)]
    fn read_u8(&mut self, port: u16) -> u8 {
        let mut p: x86_64::instructions::port::Port<u8> = x86_64::instructions::port::Port::new(port);
        // SAFETY: PortBus::new established port access rights.
        unsafe { p.read() }
    }

    #[inline(always)]
    fn write_u8(&mut self, port: u16, value: u8) {
        let mut p: x86_64::instructions::port::Port<u8> = x86_64::instructions::port::Port::new(port);
        // SAFETY: PortBus::new established port access rights.
        unsafe { p.write(value) }
    }
}
