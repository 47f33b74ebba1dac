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

//! NØNOS legacy VGA adapter driver.
//!
//! Register-level driver for the VGA controller: mode presets, a text-mode
//! plane optimizer, latch-assisted fills, 256-color pixel output, and a
//! small terminal on top. Hardware access goes through the [`PortIo`] and
//! [`FrameBuffer`] traits so the same code runs against a simulated adapter.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use, unused_imports, unused_variables, unused_mut)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod log;

pub mod buffer;
pub mod config;
pub mod constants;
mod cursor;
pub mod device;
pub mod error;
mod fill;
pub mod format;
pub mod io;
pub mod mode;
mod plane;
pub mod preset;
mod raster;
pub mod regs;
pub mod terminal;

#[cfg(target_arch = "x86_64")]
pub mod global;

#[cfg(test)]
mod sim;

pub use buffer::{FrameBuffer, MappedFrameBuffer};
pub use config::{CrtcBase, VgaConfig};
pub use device::Vga;
pub use error::{Result, VgaError};
pub use format::Arg;
pub use io::PortIo;
#[cfg(target_arch = "x86_64")]
pub use io::PortBus;
pub use mode::{DeviceState, Geometry, Mode, VgaStats};
pub use terminal::{CursorState, Terminal};
