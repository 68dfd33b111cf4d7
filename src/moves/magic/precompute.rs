// src/moves/magic/precompute.rs
// Builds rook/bishop magic tables from scratch via randomized search
// (the classic "fancy magic" construction). Runs once at startup; results
// are cached by `loader::load_magic_tables`.

use super::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use super::search::find_magic_number_for_square;
use super::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Where the RNG driving the magic search gets its seed from.
pub enum MagicTableSeed {
    /// Reproducible tables: same magics every run. Used under `deterministic_magic`
    /// and by tests that assert on exact table contents.
    Fixed(u64),
    /// OS-entropy seeded: still correct, just not byte-for-byte reproducible.
    Random,
}

fn seeded_rng(seed: MagicTableSeed) -> StdRng {
    match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::Random => {
            let mut bytes = [0u8; 32];
            rand::rng().fill_bytes(&mut bytes);
            StdRng::from_seed(bytes)
        }
    }
}

/// Relevant occupancy bits for a rook on `square`: its rank and file, excluding
/// the board edge (occupancy there never changes the attack set, since the ray
/// always terminates there whether or not it's occupied).
fn relevant_rook_mask(square: usize) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let mut mask = 0u64;
    for r in (rank + 1)..7 {
        mask |= 1 << (r * 8 + file);
    }
    for r in 1..rank {
        mask |= 1 << (r * 8 + file);
    }
    for f in (file + 1)..7 {
        mask |= 1 << (rank * 8 + f);
    }
    for f in 1..file {
        mask |= 1 << (rank * 8 + f);
    }
    mask
}

/// Relevant occupancy bits for a bishop on `square`: its four diagonals,
/// excluding the outer ring of the board entirely.
fn relevant_bishop_mask(square: usize) -> u64 {
    let rank = (square / 8) as i32;
    let file = (square % 8) as i32;
    let mut mask = 0u64;
    for (dr, df) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        let mut r = rank + dr;
        let mut f = file + df;
        while (1..=6).contains(&r) && (1..=6).contains(&f) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Enumerates every subset of `mask`, including the empty set, via the
/// carry-rippler trick. Used to generate every blocker pattern relevant to a
/// square so the magic search can be validated exhaustively.
fn subsets_of(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1usize << mask.count_ones().min(20));
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

fn build_entry(
    square: usize,
    mask: u64,
    scan: impl Fn(usize, u64) -> u64,
    rng: &mut StdRng,
) -> Result<MagicEntry, String> {
    let blockers = subsets_of(mask);
    let attacks: Vec<u64> = blockers.iter().map(|&b| scan(square, b)).collect();
    let shift = 64 - mask.count_ones();

    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)
        .map_err(|e| format!("square {}: {}", square, e))?;

    let mut table = vec![0u64; 1usize << mask.count_ones()];
    for (&b, &a) in blockers.iter().zip(attacks.iter()) {
        let index = ((b.wrapping_mul(magic)) >> shift) as usize;
        table[index] = a;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

fn build_rook_tables(rng: &mut StdRng) -> Result<RookMagicTables, String> {
    let mut entries = Vec::with_capacity(64);
    for square in 0..64 {
        let mask = relevant_rook_mask(square);
        entries.push(build_entry(square, mask, rook_attacks_per_square, rng)?);
    }
    Ok(RookMagicTables { entries })
}

fn build_bishop_tables(rng: &mut StdRng) -> Result<BishopMagicTables, String> {
    let mut entries = Vec::with_capacity(64);
    for square in 0..64 {
        let mask = relevant_bishop_mask(square);
        entries.push(build_entry(square, mask, bishop_attacks_per_square, rng)?);
    }
    Ok(BishopMagicTables { entries })
}

/// Generates a complete set of rook + bishop magic tables.
pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = seeded_rng(seed);
    let rook = build_rook_tables(&mut rng)?;
    let bishop = build_bishop_tables(&mut rng)?;
    Ok(MagicTables { rook, bishop })
}
