//! Board rendering for the terminal.

use strictly_minimax::{Action, Board, Player, Square};

/// Renders the board with empty squares numbered 1-9 for input.
pub fn render(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let action = Action::new(row, col);
            let symbol = match board.get(action) {
                Some(Square::Occupied(Player::X)) => "X".to_string(),
                Some(Square::Occupied(Player::O)) => "O".to_string(),
                _ => (row * 3 + col + 1).to_string(),
            };
            result.push_str(&symbol);
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbers_empty_squares() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(render(&board), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
