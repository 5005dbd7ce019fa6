// PPU constants

/// Register index mask
///
/// The 8 registers are mirrored through $2008-$3FFF on the CPU side; masking
/// the low 3 bits of any mirrored offset yields the register index.
pub(super) const PPU_REGISTER_MASK: u16 = 0x0007;

/// OAM size in bytes (64 sprites x 4 bytes)
pub(super) const OAM_SIZE: usize = 256;

/// Secondary OAM size in bytes (8 sprites x 4 bytes)
pub(super) const SECONDARY_OAM_SIZE: usize = 32;

/// Maximum sprites rendered per scanline
pub(super) const MAX_SPRITES_PER_LINE: usize = 8;

// ========================================
// Timing (NTSC)
// ========================================

/// PPU cycles (dots) per scanline
pub(super) const CYCLES_PER_SCANLINE: u16 = 341;

/// Scanlines per frame
pub(super) const SCANLINES_PER_FRAME: u16 = 262;

/// Dots per frame before odd-frame shortening
/// 341 x 262 = 89,342
pub const CYCLES_PER_FRAME: u32 = (CYCLES_PER_SCANLINE as u32) * (SCANLINES_PER_FRAME as u32);

/// First visible scanline
pub(super) const FIRST_VISIBLE_SCANLINE: u16 = 0;

/// Last visible scanline
pub(super) const LAST_VISIBLE_SCANLINE: u16 = 239;

/// Post-render scanline (idle)
pub(super) const POSTRENDER_SCANLINE: u16 = 240;

/// First vblank scanline; the vblank flag is set at dot 1 of this line
pub(super) const FIRST_VBLANK_SCANLINE: u16 = 241;

/// Last vblank scanline
pub(super) const LAST_VBLANK_SCANLINE: u16 = 260;

/// Pre-render scanline; flags clear at dot 1, scroll reloads follow
pub(super) const PRERENDER_SCANLINE: u16 = 261;

/// Dots for which CTRL writes are ignored after reset
///
/// The hardware ignores CTRL writes for the first 29,658 CPU cycles; at three
/// dots per CPU cycle that is 88,974 dots.
pub(super) const WARM_UP_DOTS: u64 = 29_658 * 3;

// ========================================
// Register bits
// ========================================

// CTRL
pub(super) const CTRL_NMI_ENABLE: u8 = 0b1000_0000;
pub(super) const CTRL_SPRITE_SIZE: u8 = 0b0010_0000;
pub(super) const CTRL_BKG_TABLE: u8 = 0b0001_0000;
pub(super) const CTRL_SPRITE_TABLE: u8 = 0b0000_1000;
pub(super) const CTRL_VRAM_INCREMENT: u8 = 0b0000_0100;

// MASK
pub(super) const MASK_SHOW_SPRITES: u8 = 0b0001_0000;
pub(super) const MASK_SHOW_BACKGROUND: u8 = 0b0000_1000;
pub(super) const MASK_LEFT8_SPRITES: u8 = 0b0000_0100;
pub(super) const MASK_LEFT8_BACKGROUND: u8 = 0b0000_0010;
pub(super) const MASK_RENDERING_ENABLED: u8 = MASK_SHOW_SPRITES | MASK_SHOW_BACKGROUND;

// STATUS
pub(super) const STATUS_VBLANK: u8 = 0b1000_0000;
pub(super) const STATUS_SPRITE_ZERO_HIT: u8 = 0b0100_0000;
pub(super) const STATUS_SPRITE_OVERFLOW: u8 = 0b0010_0000;

// Sprite attribute byte
pub(super) const ATTR_FLIP_VERTICAL: u8 = 0b1000_0000;
pub(super) const ATTR_FLIP_HORIZONTAL: u8 = 0b0100_0000;
pub(super) const ATTR_BEHIND_BACKGROUND: u8 = 0b0010_0000;
pub(super) const ATTR_PALETTE: u8 = 0b0000_0011;

/// Bytes per tile in the pattern tables (two 8-byte bitplanes)
pub(super) const PATTERN_SIZE_BYTES: u16 = 16;
