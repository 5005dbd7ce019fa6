// Debugging tools - PPU state capture for trace logs
//
// A `PpuState` is a cheap copy of the externally interesting engine state.
// Its `Display` output is one fixed-width trace line, suitable for diffing
// runs against each other.

use crate::ppu::Ppu;

/// PPU state snapshot
///
/// Captures the register file, internal scroll state and timing counters at
/// one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpuState {
    /// Current scanline (0-261)
    pub scanline: u16,

    /// Current dot (0-340)
    pub cycle: u16,

    /// Frames completed since reset
    pub frame: u64,

    /// PPUCTRL as last written
    pub ctrl: u8,

    /// PPUMASK as last written
    pub mask: u8,

    /// The status flags in PPUSTATUS bit positions (no bus noise)
    pub status: u8,

    /// OAMADDR cursor
    pub oam_addr: u8,

    /// Current VRAM address (v)
    pub v: u16,

    /// Temporary VRAM address (t)
    pub t: u16,

    /// Fine X scroll
    pub fine_x: u8,

    /// Shared write toggle (w)
    pub write_latch: bool,
}

impl std::fmt::Display for PpuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:5},{:3},{:3}  C:{:02X} M:{:02X} S:{:02X} OA:{:02X}  V:{:04X} T:{:04X} X:{} W:{}",
            self.frame,
            self.scanline,
            self.cycle,
            self.ctrl,
            self.mask,
            self.status,
            self.oam_addr,
            self.v,
            self.t,
            self.fine_x,
            u8::from(self.write_latch),
        )
    }
}

impl Ppu {
    /// Capture the current state for tracing
    ///
    /// Reading the snapshot has no side effects; in particular it does not
    /// touch the vblank flag or the write toggle the way STATUS reads do.
    pub fn state(&self) -> PpuState {
        PpuState {
            scanline: self.scanline,
            cycle: self.cycle,
            frame: self.frame,
            ctrl: self.ctrl,
            mask: self.mask,
            status: self.status_bits(),
            oam_addr: self.oam_addr,
            v: self.v,
            t: self.t,
            fine_x: self.fine_x,
            write_latch: self.write_latch,
        }
    }
}
