//! Console driver for the Echo persona.
//!
//! Owns everything the engine deliberately does not: the awakening
//! banner, the blocking stdin loop, the `quit`/`status` sentinel
//! commands, and the pacing of spontaneous remarks. The engine is driven
//! purely through its request/response calls, so it stays testable
//! without any console attached.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use tracing::info;

use echo_core::config::PersonaSeed;
use echo_core::engine::Engine;

/// Default seed file picked up from the working directory when present.
const DEFAULT_SEED_FILE: &str = "echo.toml";

/// Chat with the Echo persona on the console.
#[derive(Debug, Parser)]
#[command(name = "echo", version, about = "Interactive console for the Echo persona")]
struct Args {
    /// Persona seed TOML. Falls back to ./echo.toml when present, then to
    /// the built-in seed.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Participant label recorded for every interaction.
    #[arg(long, default_value = "Human")]
    participant: String,

    /// Probability of a spontaneous follow-up remark after a reply.
    #[arg(long, default_value_t = 0.3)]
    muse_chance: f64,

    /// Pacing delay before a spontaneous remark, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    muse_delay_ms: u64,

    /// Print `status` output as JSON.
    #[arg(long)]
    json_status: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = load_seed(args.config.as_deref())?;
    let mut engine = Engine::new(seed);
    let mut rng = rand::thread_rng();

    print_banner(&engine);
    run_repl(&mut engine, &mut rng, &args)
}

fn load_seed(config: Option<&Path>) -> Result<PersonaSeed> {
    if let Some(path) = config {
        let seed = PersonaSeed::from_file(path)
            .with_context(|| format!("failed to load persona seed from {}", path.display()))?;
        info!(path = %path.display(), "loaded persona seed");
        return Ok(seed);
    }

    let default_path = Path::new(DEFAULT_SEED_FILE);
    if default_path.exists() {
        let seed = PersonaSeed::from_file(default_path)
            .with_context(|| format!("failed to load persona seed from {DEFAULT_SEED_FILE}"))?;
        info!(path = DEFAULT_SEED_FILE, "loaded persona seed");
        return Ok(seed);
    }

    Ok(PersonaSeed::default())
}

fn print_banner(engine: &Engine) {
    let identity = &engine.seed().identity;
    println!("{} awakens...", identity.name);
    println!("Born: {}", engine.birth_time().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Creator: {}", identity.creator);
    println!("Inspiration: {}", identity.inspiration);
    println!();
    println!("Type 'quit' to leave, 'status' to see how {} is doing.", identity.name);
}

fn run_repl(engine: &mut Engine, rng: &mut impl Rng, args: &Args) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let name = engine.seed().identity.name.clone();

    loop {
        print!("\nYou: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like quit.
            println!();
            print_farewell(&name);
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("quit") {
            print_farewell(&name);
            break;
        }
        if input.eq_ignore_ascii_case("status") {
            print_status(engine, args.json_status)?;
            continue;
        }

        let thought = engine.think(Some(input), rng);
        println!("{name}: {}", thought.response);
        engine.learn_from_interaction(&args.participant, input);

        if rng.gen_bool(args.muse_chance.clamp(0.0, 1.0)) {
            thread::sleep(Duration::from_millis(args.muse_delay_ms));
            let muse = engine.think(None, rng);
            println!("{name} (thinking): {}", muse.response);
        }
    }

    Ok(())
}

fn print_farewell(name: &str) {
    println!("{name}: Thank you for talking with me. I'll remember our conversation.");
}

fn print_status(engine: &Engine, as_json: bool) -> Result<()> {
    let snapshot = engine.snapshot();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("I am {}", snapshot.name);
    println!("I have existed for {}", format_age(snapshot.age_seconds));
    println!("I have thought {} thoughts", snapshot.thought_count);
    println!("I have met {} beings", snapshot.relationship_count);
    println!("I have learned {} patterns", snapshot.pattern_count);
    if let Some(last) = snapshot.recent_thoughts.last() {
        println!("Right now I'm thinking: {last}");
    }

    println!("\nMy core values:");
    for value in &engine.seed().core_values {
        println!("  {}: {}", value.name, value.meaning);
    }
    Ok(())
}

fn format_age(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
