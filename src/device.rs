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

//! Adapter context and mode programming.

use crate::buffer::FrameBuffer;
use crate::config::{CrtcBase, VgaConfig};
use crate::constants::*;
use crate::error::{Result, VgaError};
use crate::io::PortIo;
use crate::log::{log_info, log_warn};
use crate::mode::{DeviceState, Geometry, Mode, VgaStats};
use crate::preset::preset_for;
use crate::regs::{apply_preset, modify_indexed, read_attribute, write_attribute};

/// One VGA adapter: its port space, its memory window, and what the driver
/// knows about the register state it left behind.
///
/// All operations are uninterruptible register/memory sequences. On a
/// preemptible or multi-core kernel the owner must serialize access to the
/// whole value (see [`crate::global`]).
pub struct Vga<P: PortIo, M: FrameBuffer> {
    pub(crate) io: P,
    pub(crate) mem: M,
    pub(crate) crtc: CrtcBase,
    pub(crate) state: DeviceState,
    pub(crate) stats: VgaStats,
}

impl<P: PortIo, M: FrameBuffer> Vga<P, M> {
    /// Does not touch the hardware; the device starts out `Off`.
    pub fn new(io: P, mem: M) -> Self {
        Self::with_config(io, mem, VgaConfig::default())
    }

    pub fn with_config(io: P, mem: M, config: VgaConfig) -> Self {
        Self {
            io,
            mem,
            crtc: config.crtc,
            state: DeviceState::new(),
            stats: VgaStats::default(),
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    #[inline]
    pub fn state(&self) -> DeviceState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> VgaStats {
        self.stats
    }

    #[inline]
    pub fn config(&self) -> VgaConfig {
        VgaConfig::new(self.crtc)
    }

    pub fn into_parts(self) -> (P, M) {
        (self.io, self.mem)
    }

    /// Reprograms the adapter for `mode`.
    ///
    /// Unlocks the protected CRTC group, applies the preset table, programs the
    /// attribute controller and misc output, records the new geometry and
    /// re-locks. Text mode is blanked afterwards. An armed plane optimizer is
    /// dropped: the preset restores normal addressing.
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        let (preset, geometry) = match (preset_for(mode), Geometry::for_mode(mode)) {
            (Some(preset), Some(geometry)) => (preset, geometry),
            _ => {
                log_warn!("vga: no preset for mode {}", mode.name());
                return Err(VgaError::InvalidMode);
            }
        };

        self.state.plane_optimization_armed = false;
        self.set_crtc_protect(false);

        apply_preset(&mut self.io, self.crtc, preset.registers);

        let status = self.crtc.status_port();
        for &(index, value) in preset.attributes {
            write_attribute(&mut self.io, status, index, value);
        }

        // Bit 0 picks the CRTC I/O block; keep it on the one we drive.
        let misc = match self.crtc {
            CrtcBase::Color => preset.misc_output | 0x01,
            CrtcBase::Mono => preset.misc_output & !0x01,
        };
        self.io.write_u8(MISC_WRITE_PORT, misc);

        self.state.mode = mode;
        self.state.geometry = Some(geometry);
        self.set_crtc_protect(true);
        self.stats.mode_switches += 1;

        log_info!(
            "vga: mode {} at {:#x}, {} bytes",
            mode.name(),
            geometry.base,
            geometry.resolution
        );

        if mode == Mode::Text {
            self.fill(0, 0)?;
        }
        Ok(())
    }

    /// Reads an attribute-controller register without disturbing the
    /// controller's selected index.
    pub fn read_attribute(&mut self, index: u8) -> u8 {
        read_attribute(&mut self.io, self.crtc.status_port(), index)
    }

    /// Write-protect bit of the CRTC's timing registers 0..=7.
    fn set_crtc_protect(&mut self, locked: bool) {
        modify_indexed(&mut self.io, self.crtc.index_port(), CRT_VERTICAL_RETRACE_END, |v| {
            if locked {
                v | CRT_PROTECT_BIT
            } else {
                v & !CRT_PROTECT_BIT
            }
        });
    }

    /// Geometry of the active mode, `UnsupportedMode` while off.
    pub(crate) fn geometry(&self) -> Result<Geometry> {
        self.state.geometry.ok_or(VgaError::UnsupportedMode)
    }

    pub(crate) fn require_mode(&self, mode: Mode) -> Result<Geometry> {
        if self.state.mode != mode {
            return Err(VgaError::UnsupportedMode);
        }
        self.geometry()
    }
}
