//! NameChain - CLI
//!
//! Name chain game with TUI, line-based and JSON-lines modes, plus tools for
//! exploring the name list and the path finder.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use namechain::{
    commands::{SolveConfig, analyze_name, run_benchmark, run_script, run_simple, solve_path},
    config::GameConfig,
    core::Dictionary,
    game::Session,
    names::loader::{embedded_dictionary, load_dictionary_or_empty},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "namechain",
    about = "Chain names from a start name to a target, one second letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Name list: 'all' (default, built-in list) or path to a .json array or text file
    #[arg(short = 'n', long, global = true, default_value = "all")]
    names: String,

    /// Seed for reproducible games and searches
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// JSON-lines mode: one request per stdin line, one response per stdout line
    Script,

    /// Find a chain between two names
    Solve {
        /// Name to start from
        start: String,

        /// Name to reach
        target: String,
    },

    /// Show how a name fits into the chain
    Analyze {
        /// Name to analyze
        name: String,
    },

    /// Benchmark the path finder on random name pairs
    Benchmark {
        /// Number of random searches
        #[arg(short = 'r', long, default_value = "200")]
        runs: usize,
    },
}

/// Load names based on the --names flag
///
/// A list that cannot be loaded leaves the game with no names; starting a
/// game then reports that it is not ready.
fn load_names(names_mode: &str) -> Dictionary {
    match names_mode {
        "all" => embedded_dictionary(),
        path => load_dictionary_or_empty(path),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "namechain=debug"
    } else {
        "namechain=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let dictionary = load_names(&cli.names);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config, cli.seed),
        Commands::Simple => {
            let mut session = Session::new(&dictionary, config, make_rng(cli.seed));
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Script => {
            let mut session = Session::new(&dictionary, config, make_rng(cli.seed));
            run_script(&mut session, io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
        Commands::Solve { start, target } => {
            run_solve_command(start, target, &dictionary, config, cli.seed)
        }
        Commands::Analyze { name } => {
            let result = analyze_name(&name, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { runs } => {
            run_benchmark_command(runs, &dictionary, config, cli.seed);
            Ok(())
        }
    }
}

fn run_solve_command(
    start: String,
    target: String,
    dictionary: &Dictionary,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<()> {
    let solve_config = SolveConfig::new(start, target);
    let result = solve_path(&solve_config, dictionary, config.search, &mut make_rng(seed))
        .map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result);
    Ok(())
}

fn run_benchmark_command(
    runs: usize,
    dictionary: &Dictionary,
    config: GameConfig,
    seed: Option<u64>,
) {
    let seed = seed.unwrap_or_else(rand::random);
    println!(
        "Running benchmark on {runs} random name pairs ({} names, seed {seed})...",
        dictionary.len()
    );

    let result = run_benchmark(dictionary, config.search, runs, seed, true);
    print_benchmark_result(&result);
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use namechain::interactive::{App, run_tui};

    let app = App::new(Session::new(dictionary, config, make_rng(seed)));
    run_tui(app)
}
