use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// The colors a wild card may be declared as.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Skip,
    Reverse,
    DrawTwo,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Skip => "Skip",
            ActionKind::Reverse => "Reverse",
            ActionKind::DrawTwo => "Draw Two",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WildKind {
    Wild,
    WildDrawFour,
}

impl fmt::Display for WildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WildKind::Wild => "Wild",
            WildKind::WildDrawFour => "Wild Draw Four",
        };
        write!(f, "{}", name)
    }
}

/// One physical card. A number card carries a color and a value, an action
/// card a color and an action kind, and a wild card only its wild kind; a
/// wild card has no color of its own even after being played (the declared
/// color lives on the controller as the wild color override).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Number { color: Color, value: u8 },
    Action { color: Color, kind: ActionKind },
    Wild { kind: WildKind },
}

impl Card {
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Number { color, .. } | Card::Action { color, .. } => Some(*color),
            Card::Wild { .. } => None,
        }
    }

    pub fn number(&self) -> Option<u8> {
        match self {
            Card::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn action(&self) -> Option<ActionKind> {
        match self {
            Card::Action { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn wild(&self) -> Option<WildKind> {
        match self {
            Card::Wild { kind } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild { .. })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number { color, value } => write!(f, "{} {}", color, value),
            Card::Action { color, kind } => write!(f, "{} {}", color, kind),
            Card::Wild { kind } => write!(f, "{}", kind),
        }
    }
}
