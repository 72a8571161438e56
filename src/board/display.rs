use std::fmt;

use super::position::Position;
use super::Board;

/// Renders the board as an 8x8 grid, rank 8 on top, with file letters beneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        for rank in (0..8).rev() {
            write!(f, " {} |", rank + 1)?;
            for file in 0..8 {
                let position = Position::new(file, rank).map_err(|_| fmt::Error)?;
                match self.get(position) {
                    Some(piece) => {
                        write!(f, " {}{} |", piece.color.to_code(), piece.kind.to_code())?
                    }
                    None => write!(f, "    |")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   |")?;
        for file in b'a'..=b'h' {
            write!(f, " {}  |", file as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::color::Color;
    use crate::board::piece::{Piece, PieceType};
    use crate::board::position::Position;
    use crate::board::Board;

    #[test]
    fn test_render_single_piece() {
        let board = Board::new(vec![Piece::new(
            Color::White,
            PieceType::King,
            Position::new(4, 0).unwrap(),
        )])
        .unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], " 8 |    |    |    |    |    |    |    |    |");
        assert_eq!(lines[8], " 1 |    |    |    |    | wk |    |    |    |");
        assert_eq!(lines[9], "   | a  | b  | c  | d  | e  | f  | g  | h  |");
    }
}
