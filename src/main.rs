use clap::Parser;
use std::cell::RefCell;
use std::rc::Rc;

use uno::uno_game::controller::{GameController, GameEvent};
use uno::uno_game::ui::{self, ConsoleUI};

#[derive(Parser)]
#[command(name = "uno", about = "Console UNO for 2-4 players")]
struct Args {
    /// Comma-separated player names. Prompts interactively when omitted.
    #[arg(long, value_delimiter = ',')]
    players: Vec<String>,

    /// Shuffle seed, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the game's event transcript as JSON lines after it ends.
    #[arg(long)]
    transcript: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Welcome to UNO!");

    let mut console = ConsoleUI::new();
    let player_names = if args.players.is_empty() {
        console.get_player_names()
    } else {
        args.players
    };
    if !(2..=4).contains(&player_names.len()) {
        eprintln!("UNO needs 2-4 players.");
        std::process::exit(1);
    }

    let mut game = match args.seed {
        Some(seed) => GameController::seeded(seed),
        None => GameController::new(),
    };
    for name in player_names {
        game.add_player(name);
    }
    game.set_decider(Box::new(console));

    let events: Rc<RefCell<Vec<GameEvent>>> = Rc::default();
    let sink = Rc::clone(&events);
    game.subscribe(move |event| {
        // The turn banner is part of the state render below.
        if !matches!(event, GameEvent::TurnChanged { .. }) {
            ui::render_event(event);
        }
        sink.borrow_mut().push(event.clone());
    });

    game.start_game();
    while !game.is_game_over() {
        ui::display_game_state(&game);
        game.take_turn();
    }
    // The loop is already over; this fires the game-ended notification.
    game.game_loop();

    println!("\nFinal hand sizes:");
    for player in game.players() {
        println!("  {}: {} cards", player.name, game.hand_size(player.id));
    }

    if args.transcript {
        for event in events.borrow().iter() {
            println!("{}", serde_json::to_string(event).unwrap());
        }
    }
}
