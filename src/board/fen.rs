// src/board/fen.rs
// Standard 6-field FEN parsing/serialization for `Board`.

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, Piece};
use crate::square::Square;

impl Board {
    /// Resets `self` and loads the position described by `s`, a standard
    /// 6-field FEN string (halfmove clock and fullmove number default to
    /// `0`/`1` if the trailing two fields are omitted).
    pub fn set_fen(&mut self, s: &str) -> Result<(), String> {
        let mut fields = s.split_whitespace();

        let placement = fields.next().ok_or("FEN missing piece placement field")?;
        let side = fields.next().ok_or("FEN missing side-to-move field")?;
        let castling = fields.next().ok_or("FEN missing castling rights field")?;
        let ep = fields.next().ok_or("FEN missing en passant field")?;
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");

        *self = Board::new_empty();
        let mut piece_bb = [[0u64; 6]; 2];

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(format!(
                "FEN piece placement must have 8 ranks, got {}",
                ranks.len()
            ));
        }

        // FEN lists ranks from 8 down to 1; our squares are rank-major from a1.
        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file: u8 = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    if file >= 8 {
                        return Err(format!("FEN rank overflowed 8 files: {}", rank_str));
                    }
                    let (piece, color) = CHAR_TO_PC[c as usize]
                        .ok_or_else(|| format!("invalid FEN piece glyph '{}'", c))?;
                    let sq = Square::from_file_rank(file, rank);
                    piece_bb[color as usize][piece as usize] |= 1u64 << sq.index();
                    file += 1;
                }
            }
            if file != 8 {
                return Err(format!("FEN rank did not cover 8 files: {}", rank_str));
            }
        }

        for &color in &[Color::White, Color::Black] {
            for &piece in &[
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ] {
                let bb = piece_bb[color as usize][piece as usize];
                if bb != 0 {
                    self.set_bb(color, piece, bb);
                }
            }
        }

        self.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("invalid side-to-move field '{}'", other)),
        };

        self.castling_rights = 0;
        if castling != "-" {
            for c in castling.chars() {
                self.castling_rights |= match c {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("invalid castling rights glyph '{}'", other)),
                };
            }
        }

        self.en_passant = match ep {
            "-" => None,
            square => Some(parse_square(square)?),
        };

        self.halfmove_clock = halfmove
            .parse()
            .map_err(|_| format!("invalid halfmove clock '{}'", halfmove))?;
        self.fullmove_number = fullmove
            .parse()
            .map_err(|_| format!("invalid fullmove number '{}'", fullmove))?;

        self.history.clear();
        self.refresh_zobrist();

        Ok(())
    }

    /// Serializes the current position back to a standard 6-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty_run = 0;
            for file in 0..8 {
                let sq = Square::from_file_rank(file, rank);
                match self.piece_at(sq) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            row.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        row.push(PC_TO_CHAR[idx]);
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                row.push_str(&empty_run.to_string());
            }
            ranks.push(row);
        }
        let placement = ranks.join("/");

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.has_castling(CASTLE_WK) {
            castling.push('K');
        }
        if self.has_castling(CASTLE_WQ) {
            castling.push('Q');
        }
        if self.has_castling(CASTLE_BK) {
            castling.push('k');
        }
        if self.has_castling(CASTLE_BQ) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = match self.en_passant {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            placement, side, castling, ep, self.halfmove_clock, self.fullmove_number
        )
    }
}

fn parse_square(s: &str) -> Result<Square, String> {
    let mut chars = s.chars();
    let file_c = chars.next().ok_or("empty square string")?;
    let rank_c = chars.next().ok_or("square string missing rank")?;
    if chars.next().is_some() {
        return Err(format!("square string too long: {}", s));
    }
    if !('a'..='h').contains(&file_c) || !('1'..='8').contains(&rank_c) {
        return Err(format!("invalid square string '{}'", s));
    }
    let file = file_c as u8 - b'a';
    let rank = rank_c as u8 - b'1';
    Ok(Square::from_file_rank(file, rank))
}
