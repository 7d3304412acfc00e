//! A scripted decider, for testing.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{Card, Color, Decider, Player};

/// Answers decisions from pre-loaded queues. An exhausted queue falls back
/// to the default behavior (first legal card, Red, no UNO call), so a script
/// only needs to cover the turns a test cares about.
#[derive(Debug, Default)]
pub struct ScriptedDecider {
    plays: VecDeque<Option<Card>>,
    colors: VecDeque<Color>,
    uno_calls: VecDeque<bool>,
    uno_prompts: Rc<Cell<usize>>,
}

impl ScriptedDecider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plays(mut self, card: Card) -> Self {
        self.plays.push_back(Some(card));
        self
    }

    pub fn passes(mut self) -> Self {
        self.plays.push_back(None);
        self
    }

    pub fn picks_color(mut self, color: Color) -> Self {
        self.colors.push_back(color);
        self
    }

    pub fn calls_uno(mut self, calls: bool) -> Self {
        self.uno_calls.push_back(calls);
        self
    }

    /// Shared counter of how many times the UNO decision was requested.
    pub fn uno_prompt_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.uno_prompts)
    }
}

impl Decider for ScriptedDecider {
    fn choose_card(&mut self, _: &Player, _: Option<&Card>, legal: &[Card]) -> Option<Card> {
        match self.plays.pop_front() {
            Some(choice) => choice,
            None => legal.first().copied(),
        }
    }

    fn choose_wild_color(&mut self) -> Color {
        self.colors.pop_front().unwrap_or(Color::Red)
    }

    fn decide_uno_call(&mut self, _: &Player) -> bool {
        self.uno_prompts.set(self.uno_prompts.get() + 1);
        self.uno_calls.pop_front().unwrap_or(false)
    }
}
