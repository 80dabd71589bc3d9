//! Property checks for the board state machine over random games

use noughts::{
    Error,
    tictactoe::{Board, Cell, LineAnalyzer, Player, Status, WINNING_LINES},
};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

fn any_line_complete(board: &Board) -> bool {
    LineAnalyzer::has_won(board.cells(), Player::X)
        || LineAnalyzer::has_won(board.cells(), Player::O)
}

#[test]
fn game_ends_exactly_on_line_or_full_board() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();

        while let Some(&pos) = board.legal_moves().choose(&mut rng) {
            let mover = board.current_player();
            let status = board.apply_move(pos).unwrap();

            let full = !board.cells().contains(&Cell::Empty);
            let line = any_line_complete(&board);
            assert_eq!(
                board.is_over(),
                line || full,
                "seed {seed}: status {status:?} after index {pos}\n{board}"
            );

            match status {
                Status::Won(winner) => {
                    assert_eq!(winner, mover);
                    assert_eq!(board.winner(), Some(mover));
                    assert_eq!(board.current_player(), mover);
                }
                Status::Draw => {
                    assert!(full && !line);
                    assert_eq!(board.winner(), None);
                }
                Status::InProgress => assert_eq!(board.current_player(), mover.opponent()),
            }
        }

        assert!(board.is_over(), "seed {seed}: no legal moves but not over");
    }
}

fn completed_lines(board: &Board) -> Vec<[usize; 3]> {
    WINNING_LINES
        .iter()
        .copied()
        .filter(|line| {
            let first = board.cell(line[0]);
            first != Cell::Empty && line.iter().all(|&idx| board.cell(idx) == first)
        })
        .collect()
}

#[test]
fn completed_lines_belong_to_winner_and_contain_last_move() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut last = None;
        while let Some(&pos) = board.legal_moves().choose(&mut rng) {
            board.apply_move(pos).unwrap();
            last = Some(pos);
        }

        let lines = completed_lines(&board);
        let Some(winner) = board.winner() else {
            assert!(lines.is_empty(), "seed {seed}: lines without a winner\n{board}");
            continue;
        };
        let last = last.unwrap();

        assert!(!lines.is_empty(), "seed {seed}\n{board}");
        for line in &lines {
            assert_eq!(board.cell(line[0]), winner.to_cell(), "seed {seed}\n{board}");
            assert!(line.contains(&last), "seed {seed}: {line:?} misses {last}\n{board}");
        }
        let reported = board.winning_line().unwrap();
        assert!(lines.contains(&reported), "seed {seed}\n{board}");
    }
}

#[test]
fn final_move_closing_two_lines() {
    // X's last move in the corner completes the top row and the left column
    let mut board = Board::new();
    for pos in [1, 4, 2, 5, 3, 7, 6, 8, 0] {
        board.apply_move(pos).unwrap();
    }

    assert_eq!(board.status(), Status::Won(Player::X));
    assert_eq!(board.current_player(), Player::X);
    assert_eq!(completed_lines(&board), vec![[0, 1, 2], [0, 3, 6]]);
    assert_eq!(board.winning_line(), Some([0, 1, 2]));
}

#[test]
fn rejected_moves_leave_board_unchanged() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();

        while let Some(&pos) = board.legal_moves().choose(&mut rng) {
            board.apply_move(pos).unwrap();

            let before = board;
            for occupied in (0..9).filter(|&idx| !before.is_empty(idx)) {
                assert!(board.apply_move(occupied).is_err());
                assert_eq!(board, before);
            }
            assert!(matches!(
                board.apply_move(9),
                Err(Error::InvalidPosition { position: 9 })
            ));
            assert_eq!(board, before);
        }

        let finished = board;
        for idx in 0..9 {
            assert!(board.apply_move(idx).is_err());
        }
        assert_eq!(board, finished);
    }
}

#[test]
#[allow(clippy::clone_on_copy)]
fn clone_is_independent() {
    let mut original = Board::new();
    original.apply_move(4).unwrap();

    let mut copy = original.clone();
    copy.apply_move(0).unwrap();
    copy.apply_move(8).unwrap();

    assert_eq!(original.cell(0), Cell::Empty);
    assert_eq!(original.cell(8), Cell::Empty);
    assert_eq!(original.current_player(), Player::O);
    assert_eq!(copy.occupied_count(), 3);
}

#[test]
fn reset_restores_initial_state() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let moves = 1 + (seed as usize % 9);
        for _ in 0..moves {
            let Some(&pos) = board.legal_moves().choose(&mut rng) else {
                break;
            };
            board.apply_move(pos).unwrap();
        }

        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board.winner(), None);
        assert!(!board.is_over());
        assert_eq!(board.legal_moves().len(), 9);
    }
}
