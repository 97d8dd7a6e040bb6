//! Console front end for Adaptive Chess

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use adaptive_chess::core::settings::{settings_path, Settings};
use adaptive_chess::game::ai::{AIDifficulty, GameMode};
use adaptive_chess::game::memory::{GameRecord, MemoryTable};
use adaptive_chess::game::rating::RatingTracker;
use adaptive_chess::game::{GameSession, TurnStart};
use anyhow::{Context, Result};
use chess_engine::evaluation::evaluate_material;
use chess_engine::{notation, Color, PieceKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Play chess against an AI that learns from its own games.
#[derive(Parser, Debug)]
#[command(name = "adaptive-chess", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
struct GlobalOpts {
    /// Directory for game records and the rating file
    #[arg(global = true, long)]
    data_dir: Option<PathBuf>,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(global = true, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game at the console (default)
    Play(PlayArgs),
    /// Print the current player rating
    Rating,
    /// Build game memory from saved records and print its size
    Memory,
    /// Replay a saved game record and print the final position
    Replay {
        /// Path to a game_*.txt record
        file: PathBuf,
    },
    /// Print the effective settings as JSON
    Config {
        /// Write them to the settings file
        #[arg(long, default_value_t = false)]
        save: bool,
    },
}

#[derive(Args, Debug, Default)]
struct PlayArgs {
    /// AI difficulty; defaults to the configured difficulty
    #[arg(long, value_enum)]
    difficulty: Option<AIDifficulty>,

    #[arg(long, value_enum, default_value_t = ModeArg::Ai)]
    mode: ModeArg,

    /// Your color in a game against the AI
    #[arg(long, value_enum, default_value_t = ColorArg::White)]
    color: ColorArg,

    /// Do not build game memory for the Hard AI
    #[arg(long, default_value_t = false)]
    no_learning: bool,

    /// Show a suggested move on your turn
    #[arg(long, default_value_t = false)]
    suggest: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ModeArg {
    #[default]
    Ai,
    TwoPlayer,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ColorArg {
    #[default]
    White,
    Black,
}

impl From<ColorArg> for Color {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::White => Color::White,
            ColorArg::Black => Color::Black,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let mut settings = Settings::load();
    if let Some(dir) = cli.global.data_dir {
        settings.data_dir = Some(dir);
    }

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(&settings, args),
        Command::Rating => {
            let tracker = RatingTracker::new(settings.rating_path());
            println!("Current rating: {}", tracker.load());
            Ok(())
        }
        Command::Memory => {
            let games = settings.games_path();
            let table = MemoryTable::build_from_dir(&games);
            println!(
                "Game memory from {}: {} positions, {} observations",
                games.display(),
                table.len(),
                table.total_observations()
            );
            Ok(())
        }
        Command::Replay { file } => {
            let record = GameRecord::read(&file)
                .with_context(|| format!("reading game record {}", file.display()))?;
            let board = record.replay().context("replaying game record")?;
            println!("Players: {}", record.players);
            println!("Result: {}", record.result);
            println!("Moves: {}\n", record.moves.len());
            println!("{}", board);
            Ok(())
        }
        Command::Config { save } => {
            let json =
                serde_json::to_string_pretty(&settings).context("serializing settings")?;
            println!("{}", json);
            if save {
                settings.save().context("saving settings")?;
                println!("Saved to {}", settings_path().display());
            }
            Ok(())
        }
    }
}

/// What a line of human input led to
enum InputOutcome {
    Moved,
    Retry,
    Quit,
}

fn run_play(settings: &Settings, args: PlayArgs) -> Result<()> {
    let difficulty = args.difficulty.unwrap_or(settings.default_difficulty);
    let mode = match args.mode {
        ModeArg::Ai => GameMode::vs_ai(args.color.into()),
        ModeArg::TwoPlayer => GameMode::TwoPlayer,
    };
    let learning = settings.learning && !args.no_learning;
    let suggest = settings.suggested_moves || args.suggest;

    let mut session =
        GameSession::new(mode, difficulty).with_ai_move_attempts(settings.ai_move_attempts);

    println!("Welcome to Chess!");
    if let Some(human) = mode.human_color() {
        println!("You are playing as {} against the {} AI.", human, difficulty);
        println!("  {}", difficulty.description());
        if difficulty == AIDifficulty::Hard && learning {
            let memory = MemoryTable::build_from_dir(&settings.games_path());
            println!(
                "  The AI remembers {} positions from past games.",
                memory.len()
            );
            session = session.with_memory(memory);
        }
    }
    println!("Suggested moves {}", if suggest { "enabled" } else { "disabled" });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut rng = rand::rng();

    'game: loop {
        println!("\n{}", session.board());
        println!("Material (White): {:+.0}", evaluate_material(session.board()));

        match session.begin_turn() {
            TurnStart::Over(reason) => {
                println!("\n*** {} ***", reason);
                break;
            }
            TurnStart::Continue { in_check } => {
                if !in_check.is_empty() {
                    let notices: Vec<String> = in_check
                        .iter()
                        .map(|color| format!("{} king in check!", color))
                        .collect();
                    println!("\n{}", notices.join(" | "));
                }
            }
        }

        if session.is_ai_turn() {
            println!("\n{} AI's turn...", session.to_move());
            if let Some(mv) = session.play_ai_turn(&mut rng)? {
                println!("AI plays {}", mv);
                if let Some(last) = session.history().last_move() {
                    if let Some(captured) = last.captured {
                        println!("AI captured {}!", captured);
                    }
                }
            }
            continue;
        }

        if suggest {
            if let Some(mv) = session.suggest_move() {
                println!("Suggested move: {}", mv);
            }
        }

        loop {
            print!(
                "\n{}'s turn. Enter a move (e2e4), a square (e2), a piece (N) or 'quit': ",
                session.to_move()
            );
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                session.abandon();
                break 'game;
            };
            let input = line?.trim().to_ascii_lowercase();

            match handle_input(&mut session, &input, &mut lines)? {
                InputOutcome::Moved => break,
                InputOutcome::Retry => continue,
                InputOutcome::Quit => {
                    session.abandon();
                    println!("\nGame ended by user request");
                    break 'game;
                }
            }
        }
    }

    finish_game(settings, &mut session)
}

fn handle_input<I>(session: &mut GameSession, input: &str, lines: &mut I) -> Result<InputOutcome>
where
    I: Iterator<Item = io::Result<String>>,
{
    if input == "quit" {
        return Ok(InputOutcome::Quit);
    }

    match input.chars().count() {
        0 => println!("Please enter a valid input"),
        1 => {
            let letter = input.chars().next().unwrap_or(' ');
            match PieceKind::from_letter(letter) {
                Some(kind) => {
                    let moves = session.moves_for_kind(kind);
                    if moves.is_empty() {
                        println!("No moves available for that piece");
                    } else {
                        let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
                        println!("Possible moves: {}", listed.join(", "));
                    }
                }
                None => println!("Unknown piece letter '{}'. Use P, N, B, R, Q or K", letter),
            }
        }
        2 => match session.legal_destinations(input) {
            Ok(destinations) if destinations.is_empty() => {
                println!("No legal moves for the piece on {}", input)
            }
            Ok(destinations) => {
                let listed: Vec<String> = destinations.iter().map(ToString::to_string).collect();
                println!("Legal moves from {}: {}", input, listed.join(", "));
            }
            Err(e) => println!("{}", e),
        },
        _ => {
            if let Err(e) = session.check_move(input) {
                println!("Invalid move: {}", e);
                return Ok(InputOutcome::Retry);
            }

            let promotion = if session.is_promotion(input) {
                match prompt_promotion(lines)? {
                    Some(kind) => Some(kind),
                    None => return Ok(InputOutcome::Quit),
                }
            } else {
                None
            };

            match session.submit_move(input, promotion) {
                Ok(effect) => {
                    if let Some(captured) = effect.captured {
                        println!("Captured {}!", captured);
                    }
                    return Ok(InputOutcome::Moved);
                }
                Err(e) => println!("Invalid move: {}", e),
            }
        }
    }
    Ok(InputOutcome::Retry)
}

/// Ask for Q, R, B or N until a valid letter is given; `None` on end of input
fn prompt_promotion<I>(lines: &mut I) -> Result<Option<PieceKind>>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("Promote pawn to (Q, R, B, N): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match notation::parse_promotion(&line?) {
            Ok(kind) => return Ok(Some(kind)),
            Err(e) => println!("{}", e),
        }
    }
}

fn finish_game(settings: &Settings, session: &mut GameSession) -> Result<()> {
    let reason = session.abandon();
    println!("\n{}", session.stats());

    if let Some(record) = session.record().filter(|r| !r.moves.is_empty()) {
        match record.write_to_dir(&settings.games_path()) {
            Ok(path) => println!("Game saved to {}", path.display()),
            Err(e) => warn!("[GAME] Could not save game record: {}", e),
        }
    }

    if let Some((result, difficulty)) = session.rating_result() {
        let tracker = RatingTracker::new(settings.rating_path());
        let before = tracker.load();
        let after = tracker
            .update(result, difficulty)
            .context("updating player rating")?;
        println!("Rating: {} -> {}", before, after);
    }

    info!("[GAME] Session finished: {}", reason);
    Ok(())
}
