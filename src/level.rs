//! Maps a compression `level` (0..9) to a memory budget and an enabled
//! context set, resolving spec.md §9's open question on level semantics.
//!
//! Level 0 collapses to order-0 + order-1 only (an order-0-only model
//! compresses too poorly to pass the "Runs" scenario's generous ≤100-byte
//! bound, so order-1 is kept at every level). Each higher level enables one
//! more context, until level 3 has every context; levels 4-9 only grow the
//! hash table and the SSE stage-2 context count. Decompression always uses
//! the level recorded in the archive header (spec.md §9), never a
//! caller-supplied one.

pub const DEFAULT_LEVEL: u32 = 5;
pub const MAX_LEVEL: u32 = 9;

/// Upper bound on the hashed context table's memory footprint, in bytes.
pub const MEM_MAX: usize = 1 << 27;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelConfig {
    pub level: u32,
    pub hash_bits: u32,
    pub sse_contexts: usize,
    pub order2: bool,
    pub order4: bool,
    pub sparse: bool,
}

/// Clamp an out-of-range level to the default, per spec.md §6's header
/// decoding rule ("clamps level to the default if out of range").
pub fn clamp(level: u32) -> u32 {
    if level > MAX_LEVEL {
        DEFAULT_LEVEL
    } else {
        level
    }
}

pub fn config_for_level(level: u32) -> LevelConfig {
    let level = clamp(level);
    let (hash_bits, sse_contexts, order2, order4, sparse) = match level {
        0 => (16, 256, false, false, false),
        1 => (18, 1024, true, false, false),
        2 => (20, 4096, true, true, false),
        3 => (21, 8192, true, true, true),
        4 => (22, 16384, true, true, true),
        5 => (23, 16384, true, true, true),
        6 => (24, 16384, true, true, true),
        7 => (25, 16384, true, true, true),
        8 => (26, 16384, true, true, true),
        _ => (27, 16384, true, true, true),
    };
    debug_assert!((1usize << hash_bits) <= MEM_MAX);
    LevelConfig {
        level,
        hash_bits,
        sse_contexts,
        order2,
        order4,
        sparse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_is_within_the_memory_budget() {
        for level in 0..=MAX_LEVEL {
            let cfg = config_for_level(level);
            assert!((1usize << cfg.hash_bits) <= MEM_MAX);
        }
    }

    #[test]
    fn out_of_range_level_clamps_to_default() {
        assert_eq!(clamp(42), DEFAULT_LEVEL);
        assert_eq!(clamp(9), 9);
    }

    #[test]
    fn contexts_only_grow_with_level() {
        let mut prev = config_for_level(0);
        for level in 1..=MAX_LEVEL {
            let cfg = config_for_level(level);
            assert!(cfg.order2 || !prev.order2);
            assert!(cfg.order4 || !prev.order4);
            assert!(cfg.sparse || !prev.sparse);
            prev = cfg;
        }
    }
}
