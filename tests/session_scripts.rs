//! Whole terminal sessions driven by scripted input

use std::io::Cursor;

use noughts::{
    cli::{
        config::{GameConfig, GameMode},
        session::Session,
    },
    tictactoe::{Player, Status},
};

fn plain_config() -> GameConfig {
    GameConfig::default().with_color(false).with_delays(0, 0)
}

fn run_script(script: &str, config: GameConfig) -> (String, Status, usize) {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), config);
    session.run().expect("session should finish cleanly");

    let status = session.board().status();
    let occupied = session.board().occupied_count();
    let output = String::from_utf8(session.into_output()).expect("output is UTF-8");
    (output, status, occupied)
}

#[test]
fn two_player_game_announces_winner() {
    // X: 1 2 3 (top row), O: 4 5
    let (output, status, _) = run_script("1\n1\n4\n2\n5\n3\nn\nq\n", plain_config());

    assert_eq!(status, Status::Won(Player::X));
    assert!(output.contains("Player X wins!"), "{output}");
    assert!(output.contains("Play again? (y/n)"));
    assert!(output.contains("Thanks for playing! Goodbye!"));
    assert!(!output.contains('\u{1b}'));
}

#[test]
fn invalid_moves_are_reported_and_reprompted() {
    let (output, status, occupied) = run_script("1\nabc\n0\n10\n1\n1\n", plain_config());

    assert!(output.contains("Please enter a number between 1-9"), "{output}");
    assert!(output.contains("Invalid position! Use 1-9"), "{output}");
    assert!(output.contains("That cell is already taken!"), "{output}");
    assert_eq!(status, Status::InProgress);
    assert_eq!(occupied, 1);
    // Input ran out mid-game: no farewell
    assert!(!output.contains("Goodbye"));
}

#[test]
fn draw_then_new_round() {
    let script = "1\n1\n2\n3\n5\n4\n6\n8\n7\n9\ny\nq\n";
    let (output, _, occupied) = run_script(script, plain_config());

    assert_eq!(output.matches("It's a draw!").count(), 1, "{output}");
    // The second round was left straight away
    assert_eq!(occupied, 0);
    assert!(!output.contains("Goodbye"));
}

#[test]
fn menu_ignores_unknown_choices() {
    let (output, _, _) = run_script("7\nhello\nquit\n", plain_config());

    assert_eq!(output.matches("Select game mode:").count(), 3);
    assert!(output.contains("Thanks for playing! Goodbye!"));
}

#[test]
fn computer_opens_in_the_first_corner() {
    let config = plain_config()
        .with_mode(Some(GameMode::Computer))
        .with_computer(Player::X);
    let (output, status, occupied) = run_script("q\n", config);

    assert!(output.contains("Computer plays position 1"), "{output}");
    assert!(output.contains("Player O's turn"));
    assert!(!output.contains("Select game mode:"));
    assert!(output.contains("Thanks for playing! Goodbye!"));
    assert_eq!(status, Status::InProgress);
    assert_eq!(occupied, 1);
}

#[test]
fn human_cannot_beat_the_computer() {
    // Trying every cell in order fills the board within nine lines
    let config = plain_config().with_mode(Some(GameMode::Computer));
    let (output, status, _) = run_script("1\n2\n3\n4\n5\n6\n7\n8\n9\nn\n", config);

    assert_ne!(status, Status::Won(Player::X), "{output}");
    assert!(!output.contains("You win!"));
    assert!(output.contains("Computer wins!") || output.contains("It's a draw!"));
    assert!(output.contains("Thanks for playing! Goodbye!"));
}
