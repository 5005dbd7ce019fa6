// 2C02 PPU emulation core
// Cycle-driven picture processing unit for the NES, with the CPU, cartridge,
// screen and interrupt line kept behind small traits.

// Public modules
pub mod cartridge;
pub mod debug;
pub mod interrupt;
pub mod ppu;
pub mod screen;
pub mod vram;

// Re-export main types for convenience
pub use cartridge::{ChrRam, Mapper, Mirroring};
pub use debug::PpuState;
pub use interrupt::{InterruptListener, NmiLine};
pub use ppu::{Ppu, CYCLES_PER_FRAME, DEFAULT_RGB_PALETTE};
pub use screen::{FrameBuffer, Rgb, Screen, SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
#[cfg(feature = "screenshot")]
pub use screen::ScreenshotError;
pub use vram::{Vram, ATTRIBUTE_TABLE_OFFSET, NAMETABLE_LENGTH, NAMETABLE_START, PALETTE_START};
