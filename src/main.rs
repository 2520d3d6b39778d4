use std::time::Instant;

use anyhow::{Context, Result, bail};
use backgammon_rules::backgammon::{
    Color, Game, Rules, TurnState,
    simulate::{GameSummary, play_random_game},
};
use rand::{rng, seq::IteratorRandom};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

struct Options {
    games: u64,
    seed: u64,
    rules: Rules,
    verbose: bool,
}

fn parse_options() -> Result<Options> {
    let mut positional = Vec::new();
    let mut verbose = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                println!("usage: backgammon-rules [games] [seed] [rules.json] [--verbose]");
                std::process::exit(0);
            }
            _ => positional.push(arg),
        }
    }
    if positional.len() > 3 {
        bail!("expected at most 3 positional arguments, got {}", positional.len());
    }

    let games = match positional.first() {
        Some(s) => s.parse().with_context(|| format!("invalid game count '{}'", s))?,
        None => 1000,
    };
    let seed = match positional.get(1) {
        Some(s) => s.parse().with_context(|| format!("invalid seed '{}'", s))?,
        None => 0,
    };
    let rules = match positional.get(2) {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
            Rules::from_json(&json).with_context(|| format!("parsing {}", path))?
        }
        None => Rules::default(),
    };
    Ok(Options { games, seed, rules, verbose })
}

fn main() -> Result<()> {
    let options = parse_options()?;

    if options.verbose {
        print_sample_game(options.rules)?;
    }

    let start = Instant::now();
    let summaries = (options.seed..options.seed + options.games)
        .into_par_iter()
        .map(|seed| {
            play_random_game(seed, options.rules)
                .with_context(|| format!("game with seed {}", seed))
        })
        .collect::<Result<Vec<GameSummary>>>()?;
    let duration = start.elapsed();

    report(&summaries, duration);
    Ok(())
}

fn report(summaries: &[GameSummary], duration: std::time::Duration) {
    let games = summaries.len().max(1) as f32;
    let wins = |color: Color| summaries.iter().filter(|s| s.winner == Some(color)).count();
    let white_wins = wins(Color::White);
    let black_wins = wins(Color::Black);
    let unfinished = summaries.len() - white_wins - black_wins;
    let moves: u64 = summaries.iter().map(|s| s.moves as u64).sum();
    let turns: u64 = summaries.iter().map(|s| s.turns as u64).sum();
    let hits: u64 = summaries.iter().map(|s| s.hits as u64).sum();

    println!("============================================");
    println!(
        "Games: {}, White Wins: {}, Black Wins: {}, Unfinished: {}",
        summaries.len(),
        white_wins,
        black_wins,
        unfinished
    );
    println!(
        "White Win Rate: {:.2}%, Black Win Rate: {:.2}%",
        white_wins as f32 / games * 100.0,
        black_wins as f32 / games * 100.0
    );
    println!(
        "Average Turns: {:.1}, Average Moves: {:.1}, Average Hits: {:.1}",
        turns as f32 / games,
        moves as f32 / games,
        hits as f32 / games
    );
    println!("Simulation took: {:?}", duration);
    println!("============================================");
}

/// Plays one game with random moves and prints every turn.
fn print_sample_game(rules: Rules) -> Result<()> {
    let mut game = Game::new("White", "Black").with_rules(rules);
    let mut rng = rng();
    loop {
        println!("=========================================================");
        println!("{}", game.board());
        let roll = game.roll()?;
        let start = Instant::now();
        println!("{} rolled {}", game.current_player().name(), roll);
        while game.state() == TurnState::MovesPending {
            let mv = game
                .legal_moves()
                .into_iter()
                .choose(&mut rng)
                .context("no legal move while moves are pending")?;
            let applied = game.make_move(mv.origin(), mv.die())?;
            println!("  {}", applied);
        }
        if let Some(winner) = game.check_winner() {
            println!("{}", game.board());
            println!("Player {} ({}) wins!", winner.name(), winner.color());
            return Ok(());
        }
        if !game.remaining_moves().is_empty() {
            println!("  no legal move for {:?}", game.remaining_moves());
        }
        println!("Turn took: {:?}", start.elapsed());
        game.switch_player()?;
    }
}
