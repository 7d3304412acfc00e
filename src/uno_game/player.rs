use serde::{Deserialize, Serialize};

/// Index of a player in the controller's registration order. Also keys the
/// player's hand, which is owned by the controller rather than the player.
pub type PlayerId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self { id, name }
    }
}
