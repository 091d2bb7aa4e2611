use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use dice_match::{GameRng, Match, MatchConfig, PlayerId, StrategyKind};

/// Play a dice match in the console.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with match settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma separated player names
    #[arg(short, long, value_delimiter = ',', default_value = "Juan,María,Pedro")]
    players: Vec<String>,

    #[arg(long)]
    faces: Option<u32>,

    /// Dice rolled per turn
    #[arg(long)]
    dice: Option<usize>,

    /// Score that wins the match
    #[arg(long)]
    target: Option<u32>,

    /// all-equal or highest-sum
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many rounds
    #[arg(long, default_value_t = 1000)]
    max_rounds: usize,

    /// Print the final standings as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => MatchConfig::default(),
    };

    if let Some(faces) = args.faces {
        config.faces_per_die = faces;
    }
    if let Some(dice) = args.dice {
        config.dice_per_turn = dice;
    }
    if let Some(target) = args.target {
        config.target_score = target;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    Ok(config)
}

fn names(game: &Match, ids: &[PlayerId]) -> String {
    let names: Vec<&str> = ids
        .iter()
        .filter_map(|&id| game.player_by_id(id))
        .map(|p| p.name())
        .collect();
    format!("[{}]", names.join(", "))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("seed {}", rng.seed());

    let mut game = Match::new(config, rng)?;
    for name in args.players.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        game.add_player(name)?;
    }
    game.start();

    while !game.is_won() {
        let turn = game.current_turn();
        if turn == 1 {
            if game.round_number() > args.max_rounds {
                bail!("no winner after {} rounds", args.max_rounds);
            }
            println!("Round: {}.", game.round_number());
        }
        let name = game.current_player().map(|p| p.name().to_string()).unwrap_or_default();

        let round_winners = game.take_turn()?;
        let roll = game.last_roll().map(|r| r.to_vec()).unwrap_or_default();
        println!("  {:<30}: {:?}.", name, roll);

        if let Some(ids) = round_winners {
            println!("Round winners: {}.", names(&game, &ids));
        }
    }

    let winners = game.winners().unwrap_or_default();
    println!("Winners: {}", names(&game, winners));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.summary())?);
    }
    Ok(())
}
