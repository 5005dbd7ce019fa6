// VRAM view - the PPU's 14-bit video address space
//
// One object resolves every PPU memory access: pattern tables are delegated
// to the cartridge mapper, nametables live in internal VRAM folded by the
// mirroring mode, and palette RAM sits at the top with its own small mirrors.

use crate::cartridge::{Mapper, Mirroring};
use std::cell::RefCell;
use std::rc::Rc;

/// Start of the nametable region
pub const NAMETABLE_START: u16 = 0x2000;

/// Size of one nametable in bytes (tile indices plus attribute table)
pub const NAMETABLE_LENGTH: u16 = 0x0400;

/// Offset of the attribute table within a nametable
pub const ATTRIBUTE_TABLE_OFFSET: u16 = 0x03C0;

/// Start of palette RAM
pub const PALETTE_START: u16 = 0x3F00;

/// Size of palette RAM in bytes
pub const PALETTE_SIZE: usize = 32;

const NAMETABLE_SIZE: usize = NAMETABLE_LENGTH as usize;

/// The PPU-side memory map
///
/// Owns 4KB of nametable VRAM (enough for true four-screen cartridges; the
/// folding modes simply never address the upper half) and 32 bytes of palette
/// RAM. Pattern-table traffic at $0000-$1FFF goes through the attached
/// mapper; with no mapper attached, reads return 0 and writes are dropped.
pub struct Vram {
    /// Nametable VRAM, four tables worth
    nametables: [u8; NAMETABLE_SIZE * 4],

    /// Palette RAM
    ///
    /// $3F00-$3F0F background palettes, $3F10-$3F1F sprite palettes.
    /// $3F10/$3F14/$3F18/$3F1C mirror $3F00/$3F04/$3F08/$3F0C.
    palette_ram: [u8; PALETTE_SIZE],

    /// Nametable folding mode (from the cartridge)
    mirroring: Mirroring,

    /// Pattern-table provider; None until a cartridge is attached
    mapper: Option<Rc<RefCell<Box<dyn Mapper>>>>,
}

impl Vram {
    /// Create an empty view with horizontal mirroring and no mapper
    pub fn new() -> Self {
        Vram {
            nametables: [0; NAMETABLE_SIZE * 4],
            palette_ram: [0; PALETTE_SIZE],
            mirroring: Mirroring::Horizontal,
            mapper: None,
        }
    }

    /// Attach the cartridge mapper and adopt its mirroring mode
    pub fn set_mapper(&mut self, mapper: Rc<RefCell<Box<dyn Mapper>>>) {
        self.mirroring = mapper.borrow().mirroring();
        self.mapper = Some(mapper);
    }

    /// Override the mirroring mode
    ///
    /// Mappers that switch mirroring at runtime call this when the mode
    /// changes.
    pub fn set_mirroring(&mut self, mirroring: Mirroring) {
        self.mirroring = mirroring;
    }

    /// Current mirroring mode
    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    /// Resolve a nametable address to a physical VRAM index
    fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let mirrored_table = match self.mirroring {
            // $2000=$2400, $2800=$2C00
            Mirroring::Horizontal => table / 2,
            // $2000=$2800, $2400=$2C00
            Mirroring::Vertical => table % 2,
            Mirroring::SingleScreen => 0,
            Mirroring::FourScreen => table,
        };

        mirrored_table * NAMETABLE_SIZE + offset
    }

    /// Resolve a palette address to a physical palette RAM index
    ///
    /// Entry 0 of each sprite palette is a mirror of the corresponding
    /// background entry.
    fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        if addr >= 16 && addr % 4 == 0 {
            addr - 16
        } else {
            addr
        }
    }

    /// Read a byte from the video address space
    pub fn read(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;

        match addr {
            0x0000..=0x1FFF => match &self.mapper {
                Some(mapper) => mapper.borrow().ppu_read(addr),
                None => 0,
            },
            0x2000..=0x2FFF => self.nametables[self.mirror_nametable_addr(addr)],
            // $3000-$3EFF mirrors $2000-$2EFF
            0x3000..=0x3EFF => self.nametables[self.mirror_nametable_addr(addr - 0x1000)],
            0x3F00..=0x3FFF => self.palette_ram[self.mirror_palette_addr(addr)],
            _ => unreachable!("VRAM address {:#06X} escaped the 14-bit mask", addr),
        }
    }

    /// Write a byte into the video address space
    pub fn write(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;

        match addr {
            0x0000..=0x1FFF => {
                if let Some(mapper) = &self.mapper {
                    mapper.borrow_mut().ppu_write(addr, data);
                }
            }
            0x2000..=0x2FFF => {
                let index = self.mirror_nametable_addr(addr);
                self.nametables[index] = data;
            }
            0x3000..=0x3EFF => {
                let index = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[index] = data;
            }
            0x3F00..=0x3FFF => {
                let index = self.mirror_palette_addr(addr);
                self.palette_ram[index] = data;
            }
            _ => unreachable!("VRAM address {:#06X} escaped the 14-bit mask", addr),
        }
    }
}

impl Default for Vram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::ChrRam;

    fn attach_chr(vram: &mut Vram, mirroring: Mirroring) {
        let mapper = Rc::new(RefCell::new(
            Box::new(ChrRam::new(mirroring)) as Box<dyn Mapper>
        ));
        vram.set_mapper(mapper);
    }

    #[test]
    fn test_pattern_reads_without_mapper_return_zero() {
        let mut vram = Vram::new();
        assert_eq!(vram.read(0x0000), 0);
        vram.write(0x1FFF, 0x42); // dropped
        assert_eq!(vram.read(0x1FFF), 0);
    }

    #[test]
    fn test_pattern_reads_go_through_mapper() {
        let mut vram = Vram::new();
        attach_chr(&mut vram, Mirroring::Horizontal);
        vram.write(0x0123, 0x42);
        assert_eq!(vram.read(0x0123), 0x42);
    }

    #[test]
    fn test_horizontal_mirroring() {
        let mut vram = Vram::new();
        vram.set_mirroring(Mirroring::Horizontal);

        vram.write(0x2000, 0x11);
        assert_eq!(vram.read(0x2400), 0x11, "$2000 and $2400 share a table");

        vram.write(0x2800, 0x22);
        assert_eq!(vram.read(0x2C00), 0x22, "$2800 and $2C00 share a table");
        assert_eq!(vram.read(0x2000), 0x11, "top and bottom pairs are distinct");
    }

    #[test]
    fn test_vertical_mirroring() {
        let mut vram = Vram::new();
        vram.set_mirroring(Mirroring::Vertical);

        vram.write(0x2000, 0x11);
        assert_eq!(vram.read(0x2800), 0x11, "$2000 and $2800 share a table");

        vram.write(0x2400, 0x22);
        assert_eq!(vram.read(0x2C00), 0x22, "$2400 and $2C00 share a table");
        assert_eq!(vram.read(0x2000), 0x11);
    }

    #[test]
    fn test_single_screen_mirroring() {
        let mut vram = Vram::new();
        vram.set_mirroring(Mirroring::SingleScreen);

        vram.write(0x2000, 0x33);
        assert_eq!(vram.read(0x2400), 0x33);
        assert_eq!(vram.read(0x2800), 0x33);
        assert_eq!(vram.read(0x2C00), 0x33);
    }

    #[test]
    fn test_four_screen_mirroring_keeps_tables_distinct() {
        let mut vram = Vram::new();
        vram.set_mirroring(Mirroring::FourScreen);

        vram.write(0x2000, 0x01);
        vram.write(0x2400, 0x02);
        vram.write(0x2800, 0x03);
        vram.write(0x2C00, 0x04);

        assert_eq!(vram.read(0x2000), 0x01);
        assert_eq!(vram.read(0x2400), 0x02);
        assert_eq!(vram.read(0x2800), 0x03);
        assert_eq!(vram.read(0x2C00), 0x04);
    }

    #[test]
    fn test_nametable_mirror_region() {
        let mut vram = Vram::new();
        vram.write(0x2005, 0x55);
        assert_eq!(vram.read(0x3005), 0x55, "$3000-$3EFF mirrors $2000-$2EFF");

        vram.write(0x3123, 0x66);
        assert_eq!(vram.read(0x2123), 0x66);
    }

    #[test]
    fn test_palette_mirrors() {
        let mut vram = Vram::new();

        vram.write(0x3F10, 0x0F);
        assert_eq!(vram.read(0x3F00), 0x0F, "$3F10 mirrors $3F00");

        vram.write(0x3F04, 0x2A);
        assert_eq!(vram.read(0x3F14), 0x2A, "$3F14 mirrors $3F04");

        // Non-multiple-of-4 sprite entries are their own storage
        vram.write(0x3F11, 0x16);
        vram.write(0x3F01, 0x27);
        assert_eq!(vram.read(0x3F11), 0x16);
        assert_eq!(vram.read(0x3F01), 0x27);
    }

    #[test]
    fn test_palette_region_mirrors_every_32_bytes() {
        let mut vram = Vram::new();
        vram.write(0x3F01, 0x19);
        assert_eq!(vram.read(0x3F21), 0x19);
        assert_eq!(vram.read(0x3FE1), 0x19);
    }
}
