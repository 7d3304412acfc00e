use super::card::{ActionKind, Card, Color, WildKind};
use serde::{Deserialize, Serialize};

/// The draw pile. A thin ordered container; cards are drawn from the tail
/// and legality is never checked at this layer.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the full 108-card UNO deck, unshuffled: per color one zero,
    /// two of each number 1-9 and two of each action kind, plus four Wild
    /// and four Wild Draw Four.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(108);

        for color in Color::ALL {
            for value in 0..=9 {
                cards.push(Card::Number { color, value });
                if value != 0 {
                    cards.push(Card::Number { color, value });
                }
            }
            for kind in [ActionKind::Skip, ActionKind::Reverse, ActionKind::DrawTwo] {
                for _ in 0..2 {
                    cards.push(Card::Action { color, kind });
                }
            }
        }

        for kind in [WildKind::Wild, WildKind::WildDrawFour] {
            for _ in 0..4 {
                cards.push(Card::Wild { kind });
            }
        }

        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn card_at(&self, index: usize) -> Card {
        self.cards[index]
    }

    pub fn set_card_at(&mut self, index: usize, card: Card) {
        self.cards[index] = card;
    }

    /// Removes and returns the tail card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The play history. Cards are appended at the tail; the tail card is the
/// top of the pile and determines what may legally be played next.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn card_at(&self, index: usize) -> Card {
        self.cards[index]
    }

    pub fn set_card_at(&mut self, index: usize, card: Card) {
        self.cards[index] = card;
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_composition() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 108);

        for color in Color::ALL {
            let numbers = deck
                .cards()
                .iter()
                .filter(|c| c.color() == Some(color) && c.number().is_some())
                .count();
            let actions = deck
                .cards()
                .iter()
                .filter(|c| c.color() == Some(color) && c.action().is_some())
                .count();
            let zeros = deck
                .cards()
                .iter()
                .filter(|c| c.color() == Some(color) && c.number() == Some(0))
                .count();

            // 1 zero + 2 of each 1-9, and 2 of each of the 3 action kinds.
            assert_eq!(numbers, 19);
            assert_eq!(actions, 6);
            assert_eq!(zeros, 1);
        }

        let wilds = deck
            .cards()
            .iter()
            .filter(|c| c.wild() == Some(WildKind::Wild))
            .count();
        let wild_draw_fours = deck
            .cards()
            .iter()
            .filter(|c| c.wild() == Some(WildKind::WildDrawFour))
            .count();
        assert_eq!(wilds, 4);
        assert_eq!(wild_draw_fours, 4);
    }

    #[test]
    fn test_deck_draws_from_tail() {
        let first = Card::Number {
            color: Color::Red,
            value: 1,
        };
        let second = Card::Number {
            color: Color::Blue,
            value: 2,
        };
        let mut deck = Deck::new();
        deck.set_cards(vec![first, second]);

        assert_eq!(deck.draw(), Some(second));
        assert_eq!(deck.draw(), Some(first));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_discard_pile_top_is_last_pushed() {
        let mut pile = DiscardPile::new();
        assert_eq!(pile.top(), None);

        let first = Card::Number {
            color: Color::Green,
            value: 3,
        };
        let second = Card::Action {
            color: Color::Yellow,
            kind: ActionKind::Reverse,
        };
        pile.push(first);
        pile.push(second);

        assert_eq!(pile.top(), Some(&second));
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.card_at(0), first);
    }
}
