use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use purr_core::{commands, FeedOutcome, JsonFileStore, PetState, PurrConfig, StateStore};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "purr", author, version, about = "A cat that lives in your terminal.")]
struct Args {
    /// Path to the config file (defaults to ~/.config/purr/purr.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the state file (overrides config)
    #[arg(long, env = "PURR_STATE_FILE")]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check on your cat and see how they are doing
    Status,
    /// Give your cat something to eat
    Feed {
        /// What to feed the cat
        #[arg(default_value = purr_core::DEFAULT_FOOD)]
        item: String,
    },
    /// Play with your cat
    Play,
    /// Change your cat's name
    Rename { new_name: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(p) => p.clone(),
        None => default_config_path()?,
    };
    let config = PurrConfig::load_or_default(&config_path);

    let state_path = resolve_state_path(&args, &config)?;
    let store = JsonFileStore::new(&state_path);

    let fresh = !state_path.exists();
    let mut state = if fresh {
        info!("first run, adopting a new pet named {}", config.pet.name);
        PetState::named(&config.pet.name)
    } else {
        store
            .load()
            .with_context(|| format!("Failed to load pet state from {}", state_path.display()))?
    };

    // Decay runs once per invocation, before any command logic.
    config.decay_model().apply(&mut state, Utc::now().timestamp());
    debug!(hunger = state.hunger, happiness = state.happiness, "state after decay");

    match &args.command {
        Command::Status => {
            println!("{}", render::mood_panel(&state));
            println!("{}", render::stat_bars(&state));

            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            println!("\n{}", render::context_message(&state.name, &cwd));
        }
        Command::Feed { item } => match commands::feed(&mut state, item) {
            FeedOutcome::Ate { item } => {
                println!("You fed {} some {}! ~nom nom~", state.name, item);
            }
            FeedOutcome::NotHungry => {
                println!("{} sniffs the food and walks away. Not hungry.", state.name);
            }
        },
        Command::Play => {
            commands::play(&mut state);
            println!("You waved a string! {} did a backflip.", state.name);
        }
        Command::Rename { new_name } => {
            let old_name = commands::rename(&mut state, new_name);
            println!("{} is now known as {}!", old_name, new_name);
        }
    }

    // Every command saves, status included: the decay it applied must stick.
    store
        .save(&mut state)
        .with_context(|| format!("Failed to save pet state to {}", state_path.display()))?;

    Ok(())
}

fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(dir.join("purr").join("purr.toml"))
}

fn resolve_state_path(args: &Args, config: &PurrConfig) -> Result<PathBuf> {
    if let Some(p) = &args.state_file {
        return Ok(p.clone());
    }
    if let Some(p) = &config.store.state_path {
        return Ok(p.clone());
    }
    let home = dirs::home_dir().context("Could not determine the user home directory")?;
    Ok(home.join(purr_core::STATE_FILE_NAME))
}
