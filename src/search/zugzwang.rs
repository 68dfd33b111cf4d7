// Classifies how risky a null move is in the side-to-move's current material
// configuration, so null-move pruning can back off in positions where "pass"
// is not a safe approximation of a real move (king-and-pawn and other
// low-material endgames, where zugzwang is common).

use crate::board::Board;
use crate::board::Color;
use crate::board::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ZugzwangRisk {
    Low,
    Medium,
    High,
    Extreme,
}

/// Counts the non-pawn, non-king pieces the side to move still has on the
/// board, weighted by how fungible they are for a tempo-losing move.
fn minor_and_major_count(board: &Board, color: Color) -> u32 {
    board.pieces(Piece::Knight, color).count_ones()
        + board.pieces(Piece::Bishop, color).count_ones()
        + board.pieces(Piece::Rook, color).count_ones()
        + board.pieces(Piece::Queen, color).count_ones()
}

/// Rough risk classification for the side to move. King+pawn-only positions
/// are Extreme (never null-move there); a lone minor is High; two minors or
/// a single rook is Medium; anything with a queen or multiple majors is Low.
pub fn classify(board: &Board, color: Color) -> ZugzwangRisk {
    let queens = board.pieces(Piece::Queen, color).count_ones();
    let rooks = board.pieces(Piece::Rook, color).count_ones();
    let minors = board.pieces(Piece::Knight, color).count_ones()
        + board.pieces(Piece::Bishop, color).count_ones();
    let total = minor_and_major_count(board, color);

    if total == 0 {
        ZugzwangRisk::Extreme
    } else if queens == 0 && rooks == 0 && minors <= 1 {
        ZugzwangRisk::High
    } else if queens == 0 && (rooks + minors) <= 2 {
        ZugzwangRisk::Medium
    } else {
        ZugzwangRisk::Low
    }
}

/// Whether null-move pruning should be skipped for the side to move at the
/// current node. Extreme and High risk veto the null move outright; Medium
/// risk is left to the caller's static-eval margin to filter.
pub fn should_avoid_null_move(board: &Board, color: Color) -> bool {
    matches!(
        classify(board, color),
        ZugzwangRisk::Extreme | ZugzwangRisk::High
    )
}
