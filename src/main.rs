//! Wordle Simulator - CLI
//!
//! Play Wordle on the console, trace the randomized player on one word, or simulate it
//! across the whole answer list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordle_sim::{
    commands::{
        SimulationConfig, SolveConfig, run_play, run_simulation, solve_word, start_game,
    },
    game::{Game, GameConfig},
    output::{print_simulation_report, print_solve_result, write_ranking},
    wordlists::{ALLOWED, ANSWERS, Vocabulary, WordSource, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Wordle game engine and randomized strategy simulator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Allowed guess list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the console (default)
    Play {
        /// Secret word (default: random answer)
        word: Option<String>,

        /// Unlimited guesses
        #[arg(short, long)]
        endless: bool,

        /// Seed for drawing the secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the randomized player solve a specific word
    Solve {
        /// The target word to solve
        word: String,

        /// List to draw guesses from: 'answers' (default) or 'guesses'
        #[arg(short = 'l', long, default_value = "answers")]
        source: String,

        /// Index of the opening word in the source list
        #[arg(short, long, default_value = "0")]
        run_index: usize,

        /// Random seed for later guesses
        #[arg(long)]
        seed: Option<u64>,

        /// Unlimited guesses
        #[arg(short, long)]
        endless: bool,

        /// Show candidate counts after every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate the randomized player on every answer word
    Simulate {
        /// Times the answer list is repeated
        #[arg(short, long, default_value = "1")]
        rounds: usize,

        /// Games per answer entry (default: one per entry of the repeated list)
        #[arg(short, long)]
        trials: Option<usize>,

        /// List to draw guesses from: 'answers' (default) or 'guesses'
        #[arg(short = 'l', long, default_value = "answers")]
        source: String,

        /// Batch seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Limit number of answer entries to play
        #[arg(long)]
        limit: Option<usize>,

        /// Maximum guesses per game (default: unlimited)
        #[arg(short, long)]
        max_guesses: Option<usize>,

        /// Stop at the first game the player cannot finish
        #[arg(long)]
        halt_on_error: bool,

        /// File receiving the ranked opening words
        #[arg(short, long, default_value = "top_initial_word_list.txt")]
        output: PathBuf,

        /// Entries shown per ranking
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let cli = Cli::parse();
    let vocabulary = load_vocabulary(cli.answers.as_deref(), cli.guesses.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Play {
        word: None,
        endless: false,
        seed: None,
    });

    match command {
        Commands::Play {
            word,
            endless,
            seed,
        } => run_play_command(&vocabulary, word.as_deref(), endless, seed),
        Commands::Solve {
            word,
            source,
            run_index,
            seed,
            endless,
            verbose,
        } => {
            let config = SolveConfig {
                source: WordSource::from_name(&source),
                game: game_config(endless),
                run_index,
                seed,
                ..SolveConfig::new(word)
            };
            let result = solve_word(&config, &vocabulary)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Simulate {
            rounds,
            trials,
            source,
            seed,
            limit,
            max_guesses,
            halt_on_error,
            output,
            top,
            no_progress,
        } => {
            let game = max_guesses.map_or_else(GameConfig::endless, |max| {
                GameConfig::standard().with_max_guesses(max)
            });
            let config = SimulationConfig {
                rounds,
                trials,
                source: WordSource::from_name(&source),
                game,
                seed,
                limit,
                halt_on_error,
                show_progress: !no_progress,
            };
            run_simulate_command(&vocabulary, &config, &output, top)
        }
    }
}

/// Load word lists, falling back to the embedded ones
fn load_vocabulary(answers: Option<&Path>, guesses: Option<&Path>) -> Result<Vocabulary> {
    let answers = match answers {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to read answer list {}", path.display()))?,
        None => loader::words_from_slice(ANSWERS),
    };
    let guesses = match guesses {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to read guess list {}", path.display()))?,
        None => loader::words_from_slice(ALLOWED),
    };
    Ok(Vocabulary::new(answers, guesses))
}

const fn game_config(endless: bool) -> GameConfig {
    if endless {
        GameConfig::endless()
    } else {
        GameConfig::standard()
    }
}

fn run_play_command(
    vocabulary: &Vocabulary,
    word: Option<&str>,
    endless: bool,
    seed: Option<u64>,
) -> Result<()> {
    let config = game_config(endless);
    let mut game = match word {
        Some(text) => start_game(vocabulary, config, text)?,
        None => {
            let mut rng = seed.map_or_else(
                || StdRng::from_rng(&mut rand::rng()),
                StdRng::seed_from_u64,
            );
            match Game::random(vocabulary, config, &mut rng) {
                Some(game) => game,
                None => bail!("the answer list is empty"),
            }
        }
    };

    run_play(&mut game, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn run_simulate_command(
    vocabulary: &Vocabulary,
    config: &SimulationConfig,
    output: &Path,
    top: usize,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Wordle Strategy Simulation ");
    println!("{}", "═".repeat(70));
    println!(
        "\nPlaying {} answers x {} rounds, guessing from the {} list",
        vocabulary.answers().len(),
        config.rounds,
        config.source.name()
    );
    println!();

    let report = run_simulation(vocabulary, config)?;
    print_simulation_report(&report, top);

    write_ranking(output, &report.openings).with_context(|| {
        format!("failed to write ranking to {}", output.display())
    })?;
    println!("\nRanked opening words written to {}", output.display());
    Ok(())
}
