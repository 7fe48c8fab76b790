//! Tests for the Gobblet typestate lifecycle.

use gobblet_rules::{
    DrawReason, GameInProgress, GameResult, GameSetup, Move, MoveError, Outcome, Player, Position,
    Size, Source,
};

fn expect_in_progress(result: GameResult) -> GameInProgress {
    match result {
        GameResult::InProgress(game) => game,
        GameResult::Finished(game) => panic!("Game shouldn't finish: {}", game.outcome()),
    }
}

#[test]
fn test_typestate_lifecycle() {
    let game = GameSetup::new().start(Player::Red);
    assert_eq!(game.to_move(), Player::Red);
    assert_eq!(game.legal_moves().len(), 27);

    let action = Move::place(Player::Red, Size::Large, Position::Center);
    let game = expect_in_progress(game.make_move(action).expect("Valid move"));

    assert_eq!(game.to_move(), Player::Yellow);
    assert_eq!(game.history(), &[action]);
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::new().start(Player::Red);
    let action = Move::place(Player::Yellow, Size::Small, Position::Center);
    assert_eq!(
        game.make_move(action),
        Err(MoveError::WrongPlayer(Player::Yellow))
    );
}

#[test]
fn test_large_piece_cannot_be_gobbled() {
    let moves = vec![Move::place(Player::Red, Size::Large, Position::Center)];
    let game = expect_in_progress(GameInProgress::replay(Player::Red, &moves).unwrap());

    assert!(
        game.legal_moves()
            .iter()
            .all(|m| m.destination != Position::Center)
    );
    let result = game.make_move(Move::place(Player::Yellow, Size::Large, Position::Center));
    assert_eq!(
        result,
        Err(MoveError::CannotGobble {
            destination: Position::Center,
            size: Size::Large,
        })
    );
}

#[test]
fn test_win_by_gobbling() {
    let moves = vec![
        Move::place(Player::Red, Size::Small, Position::TopLeft),
        Move::place(Player::Yellow, Size::Small, Position::MiddleLeft),
        Move::place(Player::Red, Size::Small, Position::Center),
        Move::place(Player::Yellow, Size::Small, Position::BottomRight),
        // Red gobbles Yellow's small to complete the diagonal
        Move::place(Player::Red, Size::Medium, Position::BottomRight),
    ];

    match GameInProgress::replay(Player::Red, &moves).expect("Valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(Player::Red));
            assert_eq!(game.history().len(), 5);
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_gobble_opponent_piece_to_win() {
    let moves = vec![
        Move::place(Player::Yellow, Size::Small, Position::TopLeft),
        Move::place(Player::Red, Size::Small, Position::Center),
        Move::place(Player::Yellow, Size::Small, Position::TopCenter),
        Move::place(Player::Red, Size::Small, Position::TopRight),
        Move::place(Player::Yellow, Size::Medium, Position::TopRight),
    ];

    match GameInProgress::replay(Player::Yellow, &moves).expect("Valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome().winner(), Some(Player::Yellow));
            assert_eq!(game.board().cell(Position::TopRight).pieces().len(), 2);
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_finished_game_undo_and_restart() {
    let moves = vec![
        Move::place(Player::Red, Size::Small, Position::TopLeft),
        Move::place(Player::Yellow, Size::Small, Position::BottomLeft),
        Move::place(Player::Red, Size::Small, Position::TopCenter),
        Move::place(Player::Yellow, Size::Small, Position::BottomCenter),
        Move::place(Player::Red, Size::Large, Position::TopRight),
    ];

    let GameResult::Finished(game) = GameInProgress::replay(Player::Red, &moves).unwrap() else {
        panic!("Game should be finished");
    };

    let rewound = game.clone().undo().expect("Undo of deciding move");
    assert_eq!(rewound.to_move(), Player::Red);
    assert_eq!(rewound.history().len(), 4);
    assert_eq!(rewound.reserve(Player::Red).count(Size::Large), 2);

    let fresh = game.restart().start(Player::Yellow);
    assert!(fresh.history().is_empty());
    assert_eq!(fresh.to_move(), Player::Yellow);
}

#[test]
fn test_move_limit_draw() {
    let moves = vec![
        Move::place(Player::Red, Size::Small, Position::TopLeft),
        Move::place(Player::Yellow, Size::Small, Position::BottomRight),
        Move::place(Player::Red, Size::Medium, Position::Center),
    ];
    let result = GameSetup::new()
        .with_move_limit(3)
        .replay(Player::Red, &moves)
        .unwrap();

    match result {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Draw(DrawReason::MoveLimit));
            assert!(game.outcome().is_draw());
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_moves_serialize_for_replay_files() {
    let moves = vec![
        Move::place(Player::Red, Size::Large, Position::Center),
        Move::shift(Player::Yellow, Position::TopLeft, Position::BottomRight),
    ];
    let json = serde_json::to_string(&moves).unwrap();
    assert!(json.contains("\"red\""));
    assert!(json.contains("\"reserve\":\"large\""));

    let parsed: Vec<Move> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, moves);
    assert_eq!(parsed[1].source, Source::Board(Position::TopLeft));
}
