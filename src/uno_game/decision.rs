use super::card::{Card, Color};
use super::player::Player;

/// The decision points the turn engine hands to the presentation layer.
/// Implementations are expected to block on external input and return a
/// single value; the controller falls back to [`DefaultDecider`] when the
/// caller supplies nothing.
pub trait Decider {
    /// Choose one of `legal` to play, or `None` to decline and let the turn
    /// pass. Declining is only meaningful after a forced draw; the engine
    /// treats `None` as "no play" in either case.
    fn choose_card(&mut self, player: &Player, top: Option<&Card>, legal: &[Card]) -> Option<Card>;

    /// Declare the color a just-played wild card stands for.
    fn choose_wild_color(&mut self) -> Color;

    /// Whether `player`, now holding exactly one card, calls UNO.
    fn decide_uno_call(&mut self, player: &Player) -> bool;
}

/// Deterministic defaults for headless operation: play the first legal
/// card, declare Red, never call UNO.
#[derive(Debug, Default)]
pub struct DefaultDecider;

impl Decider for DefaultDecider {
    fn choose_card(&mut self, _: &Player, _: Option<&Card>, legal: &[Card]) -> Option<Card> {
        legal.first().copied()
    }

    fn choose_wild_color(&mut self) -> Color {
        Color::Red
    }

    fn decide_uno_call(&mut self, _: &Player) -> bool {
        false
    }
}

#[cfg(test)]
mod scripted;
#[cfg(test)]
pub use scripted::ScriptedDecider;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_decider() {
        let mut decider = DefaultDecider;
        let player = Player::new(0, "Alice".to_string());
        let legal = [
            Card::Number {
                color: Color::Blue,
                value: 4,
            },
            Card::Number {
                color: Color::Blue,
                value: 7,
            },
        ];

        assert_eq!(decider.choose_card(&player, None, &legal), Some(legal[0]));
        assert_eq!(decider.choose_card(&player, None, &[]), None);
        assert_eq!(decider.choose_wild_color(), Color::Red);
        assert!(!decider.decide_uno_call(&player));
    }
}
