pub mod card;
pub mod controller;
pub mod deck;
pub mod decision;
pub mod player;
pub mod ui;

pub use card::{ActionKind, Card, Color, WildKind};
pub use controller::{Direction, GameController, GameError, GameEvent};
pub use deck::{Deck, DiscardPile};
pub use decision::{Decider, DefaultDecider};
pub use player::{Player, PlayerId};
pub use ui::ConsoleUI;
