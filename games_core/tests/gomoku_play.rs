#[cfg(test)]
mod tests {
    use games_core::engine::config::GameConfig;
    use games_core::logic::error::MoveError;
    use games_core::logic::gomoku::{Stone, BOARD_SIZE};
    use games_core::logic::gomoku_game::{GomokuGame, Outcome};
    use games_core::logic::grid::Square;

    fn sq(x: usize, y: usize) -> Square {
        Square::new(x, y)
    }

    #[test]
    fn test_five_in_a_row_wins() {
        let mut game = GomokuGame::default();
        let black = [sq(7, 7), sq(7, 8), sq(7, 9), sq(7, 10)];
        let white = [sq(0, 0), sq(0, 2), sq(0, 4), sq(0, 6)];

        for (&b, &w) in black.iter().zip(&white) {
            game.place_stone(b).unwrap();
            assert_eq!(game.is_game_over(), None);
            game.place_stone(w).unwrap();
        }
        assert_eq!(game.winner(), None);
        assert_eq!(game.turn(), Stone::Black);

        game.place_stone(sq(7, 11)).unwrap();
        assert_eq!(game.is_game_over(), Some(Outcome::Won(Stone::Black)));
        assert_eq!(game.winner(), Some(Stone::Black));

        assert_eq!(game.place_stone(sq(1, 1)), Err(MoveError::GameOver));
        assert_eq!(game.opponent_move(), Err(MoveError::GameOver));
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut game = GomokuGame::default();
        for x in 0..4 {
            game.place_stone(sq(x, 14)).unwrap();
            game.place_stone(sq(x, 0)).unwrap();
        }
        game.place_stone(sq(4, 14)).unwrap();
        assert_eq!(game.winner(), Some(Stone::Black));

        let undone = game.undo().unwrap();
        assert_eq!(undone.square, sq(4, 14));
        assert_eq!(game.is_game_over(), None);
        assert_eq!(game.turn(), Stone::Black);
        assert!(game.board().is_empty(sq(4, 14)));
    }

    #[test]
    fn test_rejected_placements() {
        let mut game = GomokuGame::default();
        game.place_stone(sq(7, 7)).unwrap();

        assert_eq!(game.place_stone(sq(7, 7)), Err(MoveError::CellOccupied));
        assert_eq!(game.place_stone(sq(BOARD_SIZE, 3)), Err(MoveError::InvalidSquare));
        assert_eq!(game.apply_player_move(sq(3, 3)), Err(MoveError::NotYourTurn));
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_player_and_computer_alternate() {
        let config = GameConfig {
            gomoku_depth: 2,
            ..GameConfig::default()
        };
        let mut game = GomokuGame::new(&config);
        assert_eq!(game.opponent_move(), Err(MoveError::NotYourTurn));

        game.apply_player_move(sq(7, 7)).unwrap();
        let reply = game.opponent_move().unwrap();
        assert_eq!(reply.stone, Stone::White);
        assert_ne!(reply.square, sq(7, 7));
        assert_eq!(game.board().get(reply.square), Some(Stone::White));
        assert_eq!(game.turn(), Stone::Black);

        // Back to the position before the player's stone.
        let undone = game.undo_turn().unwrap();
        assert_eq!(undone.len(), 2);
        assert_eq!(game.board().stone_count(), 0);
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.undo_turn(), Err(MoveError::NoHistoryToUndo));
    }

    #[test]
    fn test_full_board_without_five_is_a_draw() {
        // Runs never exceed two stones in any direction for this colouring;
        // it has 113 black cells and 112 white ones.
        let colour = |x: usize, y: usize| {
            if (x + 2 * y) % 4 < 2 {
                Stone::Black
            } else {
                Stone::White
            }
        };
        let mut black = Vec::new();
        let mut white = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                match colour(x, y) {
                    Stone::Black => black.push(sq(x, y)),
                    Stone::White => white.push(sq(x, y)),
                }
            }
        }
        assert_eq!((black.len(), white.len()), (113, 112));

        let mut game = GomokuGame::default();
        for (i, &b) in black.iter().enumerate() {
            game.place_stone(b).unwrap();
            if let Some(&w) = white.get(i) {
                game.place_stone(w).unwrap();
            }
        }

        assert!(game.board().is_full());
        assert_eq!(game.is_game_over(), Some(Outcome::Draw));
        assert_eq!(game.winner(), None);
        assert_eq!(game.place_stone(sq(0, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_new_game_clears_everything() {
        let mut game = GomokuGame::default();
        game.place_stone(sq(7, 7)).unwrap();
        game.place_stone(sq(8, 8)).unwrap();

        game.new_game();
        assert_eq!(game.board().stone_count(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.last_move(), None);
    }
}
