mod names;
mod printer;
mod terminal;

use std::{
    io::{self, BufRead},
    thread,
    time::Duration,
};

use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use unocore::{
    config::GameConfig,
    error::UnoError,
    player::{PlayerId, Seat},
    source::{HeuristicMoveSource, InteractiveMoveSource},
    uno::Uno,
};

use crate::{names::pick_cpu_names, printer::PrintObserver, terminal::TerminalPort};

const MIN_CPU_PLAYERS: usize = 2;
const MAX_CPU_PLAYERS: usize = 6;

/// Play UNO in the terminal against computer players
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of computer players, asked for when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=6))]
    cpus: Option<u8>,

    /// Your name, asked for when omitted
    #[arg(long)]
    name: Option<String>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between turns, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("WELCOME TO UNO!");
    loop {
        if !play_round(&args, &mut rng)? {
            println!("Exiting game at user's request.");
            break;
        }

        let again = terminal::prompt_line(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            "Press y to play again, anything else to quit: ",
        )?;
        if !again.is_some_and(|x| x.eq_ignore_ascii_case("y")) {
            break;
        }
    }

    Ok(())
}

/// Plays one round to the end. `false` if the human left before that.
fn play_round(args: &Args, rng: &mut StdRng) -> Result<bool> {
    let mut input = io::stdin().lock();
    let cpus = match args.cpus {
        Some(cpus) => cpus as usize,
        None => ask_cpu_count(&mut input)?,
    };
    let name = match &args.name {
        Some(name) => name.clone(),
        None => ask_name(&mut input)?,
    };
    drop(input);

    let cpu_names = pick_cpu_names(cpus, rng);
    println!("Your opponents: {}", cpu_names.join(", "));

    let mut seats: Vec<Seat> = cpu_names
        .into_iter()
        .map(|cpu| Seat::new(cpu, HeuristicMoveSource::new(rng.gen())))
        .collect();
    let human = PlayerId(seats.len());
    seats.push(Seat::new(
        name,
        InteractiveMoveSource::new(TerminalPort::new(io::stdin().lock(), io::stdout())),
    ));

    let config = GameConfig::default().with_seed(rng.gen());
    let mut uno =
        Uno::new(config, seats)?.with_observer(PrintObserver::new(io::stdout(), Some(human)));
    uno.setup()?;

    let delay = Duration::from_millis(args.delay_ms);
    loop {
        let outcome = match uno.play_turn() {
            Ok(outcome) => outcome,
            Err(UnoError::PlayerLeft(_)) => return Ok(false),
            Err(err) => return Err(err.into()),
        };
        if outcome.won {
            tracing::info!(winner = %outcome.player, "round finished");
            return Ok(true);
        }
        if outcome.player != human && !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

fn ask<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    terminal::prompt_line(input, &mut io::stdout(), prompt)?
        .ok_or_else(|| eyre!("input closed"))
}

fn ask_cpu_count<R: BufRead>(input: &mut R) -> Result<usize> {
    loop {
        let answer = ask(
            input,
            &format!("How many computer players? ({MIN_CPU_PLAYERS}-{MAX_CPU_PLAYERS}): "),
        )?;
        match answer.parse::<usize>() {
            Ok(count) if (MIN_CPU_PLAYERS..=MAX_CPU_PLAYERS).contains(&count) => return Ok(count),
            Ok(_) => println!("Pick between {MIN_CPU_PLAYERS} and {MAX_CPU_PLAYERS} players."),
            Err(_) => println!("Not an integer! Try again."),
        }
    }
}

fn ask_name<R: BufRead>(input: &mut R) -> Result<String> {
    loop {
        let name = ask(input, "Type your name: ")?;
        if !name.is_empty() {
            return Ok(name);
        }
    }
}
