// src/moves/magic/loader.rs
// Single entry point the rest of the engine uses to get a `MagicTables`.
// Generation is randomized and can take a noticeable moment, so the result
// is cached process-wide after the first call.

use super::precompute::{MagicTableSeed, generate_magic_tables};
use super::structs::MagicTables;
use once_cell::sync::OnceCell;

/// Returns a ready-to-use set of rook/bishop magic tables, generating them
/// on first call and cloning the cached copy thereafter.
///
/// Under `deterministic_magic`, the same magic numbers are produced on every
/// run (useful for tests and for diffing engine behavior across builds).
pub fn load_magic_tables() -> MagicTables {
    static TABLES: OnceCell<MagicTables> = OnceCell::new();
    TABLES
        .get_or_init(|| {
            let seed = if cfg!(feature = "deterministic_magic") {
                MagicTableSeed::Fixed(0xC0FF_EE15_CAFE_F00D)
            } else {
                MagicTableSeed::Random
            };
            generate_magic_tables(seed).expect("magic bitboard table generation failed")
        })
        .clone()
}
