use frametris::core::{GameConfig, GameSnapshot, GameState};
use frametris::types::{Button, GameMode};

#[test]
fn snapshot_json_carries_board_rows_and_mode() {
    let mut game = GameState::new(GameConfig::new(4, 900), 8);
    game.tick(Button::Primary);

    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["mode"], "LevelSelect");
    assert_eq!(json["level"], 4);
    assert_eq!(json["top_score"], 900);
    assert_eq!(json["board"].as_array().unwrap().len(), 18);
    assert_eq!(json["board"][0].as_array().unwrap().len(), 12);
    assert!(json["clearing_frames"].is_null());
    assert_eq!(json["active"]["x"], 5);
}

#[test]
fn snapshot_survives_json() {
    let mut game = GameState::new(GameConfig::new(2, 0), 99);
    game.tick(Button::Primary);
    game.tick(Button::None);
    game.tick(Button::Primary);
    for _ in 0..500 {
        game.tick(Button::None);
    }
    assert_eq!(game.game_mode(), GameMode::Playing);

    let snap = game.snapshot();
    let text = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);
}
