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

//! The machine's one VGA adapter as a kernel-wide console.
//!
//! Every access takes the lock with interrupts disabled, which serializes the
//! register sequences against interrupt handlers that print.

use core::fmt::{self, Write};
use spin::Mutex;
use x86_64::instructions::interrupts;

use crate::buffer::MappedFrameBuffer;
use crate::device::Vga;
use crate::error::Result;
use crate::io::PortBus;
use crate::log::{log_info, LOGGER};
use crate::terminal::Terminal;

pub type HardwareTerminal = Terminal<PortBus, MappedFrameBuffer>;

static TERMINAL: Mutex<Option<HardwareTerminal>> = Mutex::new(None);

/// Brings up text mode and installs the global terminal.
///
/// # Safety
/// The legacy window must be mapped at `virt_base + phys` (see
/// [`MappedFrameBuffer::new`]) and the caller must have port access to the
/// VGA block (see [`PortBus::new`]).
pub unsafe fn init(virt_base: usize, color: u8) -> Result<()> {
    interrupts::without_interrupts(|| {
        // SAFETY: Forwarded from the caller.
        let (io, mem) = unsafe { (PortBus::new(), MappedFrameBuffer::new(virt_base)) };
        let mut terminal = Terminal::new(Vga::new(io, mem));
        terminal.init(color)?;
        *TERMINAL.lock() = Some(terminal);
        log_info!("vga: console ready");
        Ok(())
    })
}

pub fn is_initialized() -> bool {
    interrupts::without_interrupts(|| TERMINAL.lock().is_some())
}

/// Runs `f` on the global terminal, `None` before `init`.
pub fn with_terminal<R>(f: impl FnOnce(&mut HardwareTerminal) -> R) -> Option<R> {
    interrupts::without_interrupts(|| TERMINAL.lock().as_mut().map(f))
}

/// Records the driver logs while the terminal is held reach a console sink
/// through here; those are dropped instead of spinning on our own lock.
pub fn print(args: fmt::Arguments<'_>) {
    interrupts::without_interrupts(|| {
        let mut guard = if LOGGER.in_sink() {
            TERMINAL.try_lock()
        } else {
            Some(TERMINAL.lock())
        };
        if let Some(terminal) = guard.as_mut().and_then(|g| g.as_mut()) {
            let _ = terminal.write_fmt(args);
        }
    });
}

/// Never spins: drops the text if the terminal is busy (panic paths).
pub fn try_print(s: &str) -> bool {
    interrupts::without_interrupts(|| match TERMINAL.try_lock() {
        Some(mut guard) => guard.as_mut().map_or(false, |t| t.put_string(s).is_ok()),
        None => false,
    })
}

#[macro_export]
macro_rules! vga_print {
    ($($arg:tt)*) => {
        $crate::global::print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! vga_println {
    () => {
        $crate::vga_print!("\n")
    };
    ($($arg:tt)*) => {
        $crate::global::print(format_args!("{}\n", format_args!($($arg)*)))
    };
}
