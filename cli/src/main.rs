use std::io::{self, BufRead, Write};

use clap::Parser;
use hashi::{Difficulty, GameSession, GenerationStatus, Location, Update};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(name = "hashi", version, about = "Play generated Hashiwokakero puzzles in the terminal")]
struct Cli {
    /// easy, medium, hard or expert
    #[arg(long, short, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,
    /// Seed for reproducible boards; random if omitted
    #[arg(long, short)]
    seed: Option<u64>,
    /// Print the board and exit
    #[arg(long)]
    print_only: bool,
}

enum Command {
    Connect(Location, Location),
    Reduce(Location, Location),
    Restart,
    Quit,
}

fn parse_pair(words: &[&str]) -> Option<(Location, Location)> {
    let [ax, ay, bx, by] = words else {
        return None;
    };
    Some((
        Location(ax.parse().ok()?, ay.parse().ok()?),
        Location(bx.parse().ok()?, by.parse().ok()?),
    ))
}

fn parse_command(line: &str) -> Option<Command> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    match words.as_slice() {
        ["q" | "quit"] => Some(Command::Quit),
        ["r" | "restart"] => Some(Command::Restart),
        ["-" | "reduce", rest @ ..] => parse_pair(rest).map(|(a, b)| Command::Reduce(a, b)),
        rest => parse_pair(rest).map(|(a, b)| Command::Connect(a, b)),
    }
}

fn report(session: &GameSession, update: Update) {
    if update.transition.is_none() {
        println!("no change");
    }
    print!("{}", session);
    if let Some(event) = update.solved {
        println!("solved! {} puzzle, score x{}", event.difficulty, event.score_multiplier);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new(cli.difficulty, &mut rng);

    println!("{} puzzle, seed {}", cli.difficulty, seed);
    if session.status() == GenerationStatus::Fallback {
        println!("(generation gave up; this is the fallback board)");
    }
    print!("{}", session);
    if cli.print_only {
        return Ok(());
    }

    println!("moves: `x1 y1 x2 y2` to cycle a bridge, `- x1 y1 x2 y2` to take one away, `restart`, `quit`");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                session.restart();
                print!("{}", session);
            }
            Some(Command::Connect(a, b)) => {
                let update = session.connect(a, b);
                report(&session, update);
            }
            Some(Command::Reduce(a, b)) => {
                let update = session.reduce(a, b);
                report(&session, update);
            }
            None => println!("could not read `{}`", line.trim()),
        }
        io::stdout().flush()?;
    }

    Ok(())
}
