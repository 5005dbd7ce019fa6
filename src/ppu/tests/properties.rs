//! Property tests for the engine's quantified invariants
//!
//! These cover the laws that should hold for arbitrary inputs rather than
//! hand-picked scenarios: counter ranges under any batch size, the DATA
//! auto-increment step, and the STATUS read postconditions.

use super::*;
use proptest::prelude::*;

proptest! {
    // Batches long enough to cross frame boundaries make these slow per
    // case, so run fewer cases
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn counters_stay_in_range(n in 0u64..200_000) {
        let mut ppu = Ppu::new();
        ppu.run_cycles(n);

        prop_assert!(ppu.cycle() <= 340);
        prop_assert!(ppu.scanline() <= 261);
        prop_assert_eq!(ppu.cycles_since_reset(), n);
    }

    #[test]
    fn counters_stay_in_range_while_rendering(n in 0u64..200_000) {
        let mut ppu = Ppu::new();
        ppu.mask = 0x18;
        ppu.run_cycles(n);

        prop_assert!(ppu.cycle() <= 340);
        prop_assert!(ppu.scanline() <= 261);
        prop_assert_eq!(ppu.cycles_since_reset(), n);
    }
}

proptest! {
    #[test]
    fn data_access_steps_by_the_ctrl_increment(
        wide_step in any::<bool>(),
        high in 0u8..=0x3F,
        low in any::<u8>(),
    ) {
        let mut ppu = Ppu::new();
        ppu.ctrl = if wide_step { 0x04 } else { 0x00 };

        ppu.write_register(PPUADDR, high);
        ppu.write_register(PPUADDR, low);
        let start = ppu.v;

        ppu.write_register(PPUDATA, 0xA5);

        let step = if wide_step { 32 } else { 1 };
        prop_assert_eq!(ppu.v, start.wrapping_add(step) & 0x3FFF);
    }

    #[test]
    fn status_read_postconditions_hold(
        ops in proptest::collection::vec((0u16..8, any::<u8>()), 0..32),
    ) {
        let mut ppu = Ppu::new();
        for (register, value) in ops {
            ppu.write_register(register, value);
        }

        ppu.read_register(PPUSTATUS);

        prop_assert!(!ppu.write_latch);
        prop_assert!(!ppu.in_vblank);
    }

    #[test]
    fn writes_charge_the_io_latch(register in 0u16..8, value in any::<u8>()) {
        let mut ppu = Ppu::new();
        ppu.write_register(register, value);

        // A read of any write-only register returns the latched byte,
        // whichever register the write landed on
        prop_assert_eq!(ppu.read_register(PPUCTRL), value);
    }
}
