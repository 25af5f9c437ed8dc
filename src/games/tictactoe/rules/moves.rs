//! Legal move enumeration.

use super::super::{Board, Cell, Move};

/// Lists every empty cell in row-major order.
///
/// The order is load-bearing: the search engine breaks ties in favour
/// of the first move this returns.
pub fn available_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(9);
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if *cell == Cell::Empty {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_lists_all_cells_row_major() {
        let moves = available_moves(&Board::new());
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[3], Move::new(1, 0));
        assert_eq!(moves[8], Move::new(2, 2));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_occupied_cells_are_skipped() {
        let board: Board = "X../.O./..X".parse().unwrap();
        let moves = available_moves(&board);
        assert_eq!(moves.len(), 6);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(1, 1)));
        assert_eq!(moves.first(), Some(&Move::new(0, 1)));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(available_moves(&board).is_empty());
    }
}
