use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::card::{ActionKind, Card, Color, WildKind};
use super::deck::{Deck, DiscardPile};
use super::decision::{Decider, DefaultDecider};
use super::player::{Player, PlayerId};

/// Represents the direction of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// The card does not match the top of the pile under the current rules.
    #[error("{0} cannot be played on the current pile")]
    IllegalPlay(Card),

    /// The player does not actually hold the card they attempted to play.
    #[error("player {player} does not hold {card}")]
    CardNotHeld { player: PlayerId, card: Card },
}

/// Notifications fired by the turn engine. Observers subscribe through
/// [`GameController::subscribe`]; delivery is fire-and-forget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnChanged { player: Player },
    CardPlayed { player: Player, card: Card },
    CardDrawn { player: Player, card: Card },
    UnoViolation { player: Player },
    GameEnded { winner: Player },
}

/// Orchestrates the whole game: owns the deck, the discard pile and every
/// player's hand, enforces legality, applies card effects, advances turns
/// and detects the end of the game.
pub struct GameController {
    players: Vec<Player>,
    hands: Vec<Vec<Card>>,
    deck: Deck,
    discard_pile: DiscardPile,
    current_player_index: usize,
    direction: Direction,
    wild_color: Option<Color>,
    rng: StdRng,
    decider: Box<dyn Decider>,
    observers: Vec<Box<dyn FnMut(&GameEvent)>>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A controller whose shuffles are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            players: Vec::new(),
            hands: Vec::new(),
            deck: Deck::new(),
            discard_pile: DiscardPile::new(),
            current_player_index: 0,
            direction: Direction::Clockwise,
            wild_color: None,
            rng,
            decider: Box::new(DefaultDecider),
            observers: Vec::new(),
        }
    }

    /// Replaces the decision callbacks consumed by the turn engine.
    pub fn set_decider(&mut self, decider: Box<dyn Decider>) {
        self.decider = decider;
    }

    /// Registers an observer for every subsequent [`GameEvent`].
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }

    // --- Setup ---

    /// Registers a player and creates their (empty) hand. Player order is
    /// fixed for the whole game and defines the turn sequence.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.players.len();
        self.players.push(Player::new(id, name.into()));
        self.hands.push(Vec::new());
        id
    }

    /// Builds and shuffles the deck, deals 7 cards to each player in
    /// registration order, then flips one card as the opening discard. The
    /// opening card triggers no effect and is not checked for legality.
    pub fn start_game(&mut self) {
        self.deck = Deck::standard();
        self.shuffle_deck();

        for player in 0..self.players.len() {
            for _ in 0..7 {
                self.draw_to_player(player);
            }
        }

        if let Some(card) = self.draw_from_deck() {
            self.discard_pile.push(card);
        }
    }

    /// In-place Fisher-Yates over the controller's RNG.
    pub fn shuffle_deck(&mut self) {
        let mut cards = self.deck.cards().to_vec();
        cards.shuffle(&mut self.rng);
        self.deck.set_cards(cards);
    }

    // --- Turn engine ---

    /// Drives turns until some player's hand is empty, then fires the
    /// game-ended notification and returns the winner. The game-over check
    /// runs at the start of each iteration, so a winning play is detected
    /// after that turn fully completes (sweep and advance included).
    pub fn game_loop(&mut self) -> Option<Player> {
        while !self.is_game_over() {
            self.take_turn();
        }

        let winner = self.winner().cloned();
        if let Some(winner) = winner.clone() {
            self.emit(GameEvent::GameEnded { winner });
        }
        winner
    }

    /// Processes one complete turn for the current player and advances to
    /// the next one.
    pub fn take_turn(&mut self) {
        let player = self.players[self.current_player_index].clone();
        self.emit(GameEvent::TurnChanged {
            player: player.clone(),
        });

        let top = self.top_discard_card();
        let legal = self.playable_cards(player.id, top.as_ref());

        if !legal.is_empty() {
            self.offer_play(&player, top.as_ref(), &legal);
        } else {
            if let Some(card) = self.draw_to_player(player.id) {
                self.emit(GameEvent::CardDrawn {
                    player: player.clone(),
                    card,
                });
            }
            // Re-checked against the top card fetched before the draw.
            let legal = self.playable_cards(player.id, top.as_ref());
            if !legal.is_empty() {
                self.offer_play(&player, top.as_ref(), &legal);
            }
        }

        self.sweep_uno_states();
        self.next_player();
    }

    fn offer_play(&mut self, player: &Player, top: Option<&Card>, legal: &[Card]) {
        if let Some(card) = self.decider.choose_card(player, top, legal) {
            match self.play_card(player.id, card) {
                Ok(()) => self.enforce_uno_call(player),
                Err(err) => log::warn!("rejected play from {}: {}", player.name, err),
            }
        }
    }

    fn enforce_uno_call(&mut self, player: &Player) {
        if self.hand_size(player.id) != 1 {
            return;
        }
        if self.decider.decide_uno_call(player) {
            log::info!("{} called UNO!", player.name);
        } else {
            log::info!("{} forgot to call UNO, drawing 2 penalty cards", player.name);
            self.draw_to_player(player.id);
            self.draw_to_player(player.id);
            self.emit(GameEvent::UnoViolation {
                player: player.clone(),
            });
        }
    }

    /// Extension point for UNO challenge mechanics between turns; today it
    /// only traces players sitting on one card.
    fn sweep_uno_states(&self) {
        for (id, hand) in self.hands.iter().enumerate() {
            if hand.len() == 1 {
                log::trace!("{} is down to one card", self.players[id].name);
            }
        }
    }

    pub fn next_player(&mut self) {
        let count = self.players.len();
        match self.direction {
            Direction::Clockwise => {
                self.current_player_index = (self.current_player_index + 1) % count;
            }
            Direction::CounterClockwise => {
                self.current_player_index = (self.current_player_index + count - 1) % count;
            }
        }
    }

    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reverse();
    }

    // --- Legality and play ---

    /// Whether `card` may be played on `top`. An empty pile accepts any
    /// card and a wild card is always legal. While a wild color override is
    /// active, only the override color matters; the literal top card is
    /// ignored. Otherwise a play must match the top card's color, number or
    /// action kind.
    pub fn can_play_card(&self, card: &Card, top: Option<&Card>) -> bool {
        let Some(top) = top else { return true };

        if card.is_wild() {
            return true;
        }

        if let Some(override_color) = self.wild_color {
            return card.color() == Some(override_color);
        }

        card.color() == top.color()
            || (card.number().is_some() && card.number() == top.number())
            || (card.action().is_some() && card.action() == top.action())
    }

    /// The current player's legal cards against `top`, in hand order.
    pub fn playable_cards(&self, player: PlayerId, top: Option<&Card>) -> Vec<Card> {
        self.hands[player]
            .iter()
            .filter(|card| self.can_play_card(card, top))
            .copied()
            .collect()
    }

    /// Moves `card` from the player's hand onto the discard pile and applies
    /// its effect. Rejects the play, mutating nothing, when the card is not
    /// legal or not held.
    pub fn play_card(&mut self, player: PlayerId, card: Card) -> Result<(), GameError> {
        let top = self.top_discard_card();
        if !self.can_play_card(&card, top.as_ref()) {
            return Err(GameError::IllegalPlay(card));
        }
        let position = match self.hands[player].iter().position(|held| *held == card) {
            Some(position) => position,
            None => return Err(GameError::CardNotHeld { player, card }),
        };

        self.hands[player].remove(position);
        self.discard_pile.push(card);
        self.execute_card_effect(card);

        let player = self.players[player].clone();
        self.emit(GameEvent::CardPlayed { player, card });
        Ok(())
    }

    /// Skip advances once here and once more in the main loop, skipping
    /// exactly one player. Draw penalties advance first so the new current
    /// player draws, card by card through the recycling path.
    fn execute_card_effect(&mut self, card: Card) {
        match card {
            Card::Number { .. } => {}
            Card::Action { kind, .. } => match kind {
                ActionKind::Skip => self.next_player(),
                ActionKind::Reverse => self.reverse_direction(),
                ActionKind::DrawTwo => {
                    self.next_player();
                    let target = self.current_player_index;
                    for _ in 0..2 {
                        self.draw_to_player(target);
                    }
                }
            },
            Card::Wild { kind } => {
                let color = self.decider.choose_wild_color();
                self.wild_color = Some(color);
                if kind == WildKind::WildDrawFour {
                    self.next_player();
                    let target = self.current_player_index;
                    for _ in 0..4 {
                        self.draw_to_player(target);
                    }
                }
            }
        }
    }

    // --- Drawing and recycling ---

    /// Draws the next card into the player's hand. `None` means the deck is
    /// empty and the discard pile has nothing to recycle; the hand simply
    /// does not grow.
    pub fn draw_to_player(&mut self, player: PlayerId) -> Option<Card> {
        let card = self.draw_from_deck()?;
        self.hands[player].push(card);
        Some(card)
    }

    fn draw_from_deck(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            self.recycle_discard_pile();
        }
        self.deck.draw()
    }

    /// Moves every discard card except the top one back into the deck and
    /// reshuffles. A no-op while the discard pile holds one card or fewer.
    pub fn recycle_discard_pile(&mut self) {
        if self.discard_pile.len() <= 1 {
            return;
        }

        let mut cards = self.discard_pile.cards().to_vec();
        let Some(top) = cards.pop() else { return };

        self.deck.set_cards(cards);
        self.discard_pile.set_cards(vec![top]);
        self.shuffle_deck();
        log::debug!("recycled discard pile into a {}-card deck", self.deck.len());
    }

    // --- Queries ---

    pub fn is_game_over(&self) -> bool {
        self.hands.iter().any(|hand| hand.is_empty())
    }

    /// The lowest-index player with an empty hand.
    pub fn winner(&self) -> Option<&Player> {
        self.hands
            .iter()
            .position(|hand| hand.is_empty())
            .map(|id| &self.players[id])
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    pub fn player_hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    pub fn hand_size(&self, player: PlayerId) -> usize {
        self.hands[player].len()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn top_discard_card(&self) -> Option<Card> {
        self.discard_pile.top().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn wild_color(&self) -> Option<Color> {
        self.wild_color
    }
}
