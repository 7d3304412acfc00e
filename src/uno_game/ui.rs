use super::card::{Card, Color};
use super::controller::{GameController, GameEvent};
use super::decision::Decider;
use super::player::Player;
use std::io::{self, BufRead, BufReader, Write};

/// Interactive console front-end for the decision callbacks. Streams are
/// injectable so prompts can be tested against in-memory buffers.
pub struct ConsoleUI {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Default for ConsoleUI {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleUI {
    pub fn new() -> Self {
        Self {
            input: Box::new(BufReader::new(io::stdin())),
            output: Box::new(io::stdout()),
        }
    }

    pub fn with_streams(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Prompts for player names until 'done' is entered or the table fills
    /// up at 4 players; at least 2 names are required to finish.
    pub fn get_player_names(&mut self) -> Vec<String> {
        let mut player_names = Vec::new();
        loop {
            write!(self.output, "Enter player name (or 'done' to finish): ").unwrap();
            self.output.flush().unwrap();

            let Some(name) = self.read_line() else { break };
            if name.eq_ignore_ascii_case("done") {
                if player_names.len() < 2 {
                    writeln!(
                        self.output,
                        "You need at least 2 players to start the game."
                    )
                    .unwrap();
                    continue;
                }
                break;
            }

            if name.is_empty() {
                continue;
            }
            player_names.push(name);
            if player_names.len() == 4 {
                writeln!(self.output, "The table is full.").unwrap();
                break;
            }
        }
        player_names
    }

    /// Prompts until the user enters a number in `1..=max`, or input ends.
    fn prompt_choice(&mut self, max: usize) -> Option<usize> {
        loop {
            write!(self.output, "Enter your choice: ").unwrap();
            self.output.flush().unwrap();

            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(choice) if (1..=max).contains(&choice) => return Some(choice),
                _ => {
                    writeln!(self.output, "Please enter a number between 1-{}.", max).unwrap();
                }
            }
        }
    }
}

impl Decider for ConsoleUI {
    fn choose_card(&mut self, player: &Player, top: Option<&Card>, legal: &[Card]) -> Option<Card> {
        match top {
            Some(card) => writeln!(self.output, "\nTop card on pile: {}", card).unwrap(),
            None => writeln!(self.output, "\nThe discard pile is empty.").unwrap(),
        }

        writeln!(self.output, "{}, choose a card to play:", player.name).unwrap();
        for (i, card) in legal.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, card).unwrap();
        }
        writeln!(self.output, "{}. Pass this turn", legal.len() + 1).unwrap();

        let choice = self.prompt_choice(legal.len() + 1)?;
        if choice == legal.len() + 1 {
            None
        } else {
            Some(legal[choice - 1])
        }
    }

    fn choose_wild_color(&mut self) -> Color {
        writeln!(self.output, "\nChoose a color for the wild card:").unwrap();
        for (i, color) in Color::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, color).unwrap();
        }

        match self.prompt_choice(Color::ALL.len()) {
            Some(choice) => Color::ALL[choice - 1],
            None => Color::Red,
        }
    }

    fn decide_uno_call(&mut self, player: &Player) -> bool {
        writeln!(self.output, "\n{}, you have 1 card left!", player.name).unwrap();
        writeln!(self.output, "Do you want to call UNO?").unwrap();
        writeln!(self.output, "1. Yes - call UNO!").unwrap();
        writeln!(self.output, "2. No (you'll be penalized!)").unwrap();

        self.prompt_choice(2) == Some(1)
    }
}

/// Renders the table as the current player sees it: the top card, deck
/// size, everyone's hand counts and their own full hand.
pub fn display_game_state(game: &GameController) {
    let player = game.current_player();
    println!("\n--- {}'s Turn ---", player.name);

    match game.top_discard_card() {
        Some(card) => println!("Top card on pile: {}", card),
        None => println!("The discard pile is empty."),
    }
    if let Some(color) = game.wild_color() {
        println!("Active color: {}", color);
    }
    println!("Deck cards remaining: {}", game.deck().len());

    println!("\nOther players:");
    for other in game.players() {
        if other.id != player.id {
            println!("  {}: {} cards", other.name, game.hand_size(other.id));
        }
    }

    println!("\nYour hand ({} cards):", game.hand_size(player.id));
    for (i, card) in game.player_hand(player.id).iter().enumerate() {
        println!("  {}. {}", i + 1, card);
    }

    let top = game.top_discard_card();
    let playable = game.playable_cards(player.id, top.as_ref());
    if playable.is_empty() {
        println!("\nNo playable cards! You must draw a card.");
    } else {
        println!("\nYou have {} playable card(s).", playable.len());
    }
}

/// Renders one game notification for the console observer.
pub fn render_event(event: &GameEvent) {
    match event {
        GameEvent::TurnChanged { player } => {
            println!("\n--- {}'s Turn ---", player.name);
        }
        GameEvent::CardPlayed { player, card } => {
            println!("{} played: {}", player.name, card);
        }
        GameEvent::CardDrawn { player, .. } => {
            println!("{} drew a card.", player.name);
        }
        GameEvent::UnoViolation { player } => {
            println!("{} was penalized for an UNO violation!", player.name);
        }
        GameEvent::GameEnded { winner } => {
            println!("\nGAME OVER! {} wins!", winner.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uno_game::card::WildKind;
    use std::io::Cursor;

    fn ui_with_input(input: &str) -> ConsoleUI {
        ConsoleUI::with_streams(Box::new(Cursor::new(input.to_string())), Box::new(Vec::new()))
    }

    fn legal_cards() -> Vec<Card> {
        vec![
            Card::Number {
                color: Color::Red,
                value: 5,
            },
            Card::Wild {
                kind: WildKind::Wild,
            },
        ]
    }

    #[test]
    fn test_choose_card_by_index() {
        let player = Player::new(0, "Alice".to_string());
        let top = Card::Number {
            color: Color::Red,
            value: 3,
        };
        let legal = legal_cards();

        let mut ui = ui_with_input("2\n");
        assert_eq!(ui.choose_card(&player, Some(&top), &legal), Some(legal[1]));
    }

    #[test]
    fn test_choose_card_pass_option() {
        let player = Player::new(0, "Alice".to_string());
        let legal = legal_cards();

        let mut ui = ui_with_input("3\n");
        assert_eq!(ui.choose_card(&player, None, &legal), None);
    }

    #[test]
    fn test_choose_card_reprompts_on_bad_input() {
        let player = Player::new(0, "Alice".to_string());
        let legal = legal_cards();

        let mut ui = ui_with_input("nope\n9\n1\n");
        assert_eq!(ui.choose_card(&player, None, &legal), Some(legal[0]));
    }

    #[test]
    fn test_choose_card_none_at_end_of_input() {
        let player = Player::new(0, "Alice".to_string());
        let legal = legal_cards();

        let mut ui = ui_with_input("");
        assert_eq!(ui.choose_card(&player, None, &legal), None);
    }

    #[test]
    fn test_choose_wild_color() {
        for (input, expected) in [
            ("1\n", Color::Red),
            ("2\n", Color::Blue),
            ("3\n", Color::Green),
            ("4\n", Color::Yellow),
        ] {
            let mut ui = ui_with_input(input);
            assert_eq!(ui.choose_wild_color(), expected);
        }
    }

    #[test]
    fn test_get_player_names() {
        let mut ui = ui_with_input("Alice\nBob\ndone\n");
        assert_eq!(ui.get_player_names(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_get_player_names_requires_two() {
        // 'done' with a single name re-prompts until a second one arrives.
        let mut ui = ui_with_input("Alice\ndone\nBob\ndone\n");
        assert_eq!(ui.get_player_names(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_get_player_names_stops_at_full_table() {
        let mut ui = ui_with_input("Alice\nBob\nCarol\nDave\nEve\n");
        assert_eq!(ui.get_player_names(), vec!["Alice", "Bob", "Carol", "Dave"]);
    }

    #[test]
    fn test_get_player_names_skips_blank_lines() {
        let mut ui = ui_with_input("\nAlice\n\nBob\nDONE\n");
        assert_eq!(ui.get_player_names(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_display_game_state() {
        let mut game = crate::uno_game::GameController::seeded(3);
        game.add_player("Alice");
        game.add_player("Bob");
        game.start_game();

        // Just verifies that rendering a started game does not panic.
        display_game_state(&game);
    }

    #[test]
    fn test_decide_uno_call() {
        let player = Player::new(0, "Alice".to_string());

        let mut ui = ui_with_input("1\n");
        assert!(ui.decide_uno_call(&player));

        let mut ui = ui_with_input("2\n");
        assert!(!ui.decide_uno_call(&player));
    }
}
