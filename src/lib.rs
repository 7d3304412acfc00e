pub mod uno_game;
