mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hacker::compute::Game;
use hacker::clock::Clock;
use hacker::config::{ConfigOverrides, GameConfig};
use hacker::entities::{Direction, Outcome, ShotKind};
use hacker::error::HackerError;

use crate::display::Status;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Terminal frontend for the hacker game.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file with game settings.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Rows and columns of the board.
    #[arg(long)]
    size: Option<usize>,
    /// Collectables needed to win.
    #[arg(long)]
    target: Option<u32>,
    /// Milliseconds between steps.
    #[arg(long = "step-ms")]
    step_ms: Option<u64>,
    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
    /// Write log output to this file (filtered by RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the config file, then flags.
    fn game_config(&self) -> Result<GameConfig, HackerError> {
        let base = match &self.config {
            Some(path) => GameConfig::load_from_file(path)?,
            None => GameConfig::default(),
        };
        base.with_overrides(&ConfigOverrides {
            grid_size: self.size,
            collection_target: self.target,
            step_interval_ms: self.step_ms,
            seed: self.seed,
        })
    }
}

/// Logs go to a file so they never land on the alternate screen.
fn init_logging(path: &Path) -> Result<(), HackerError> {
    let file = File::create(path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopResult {
    NewGame,
    Quit,
}

/// Poll the end conditions after a mutation; stop the clock when over.
fn check_outcome(game: &mut Game, clock: &mut Clock) {
    if game.has_won() || game.has_lost() {
        clock.stop(Instant::now());
    }
}

/// Runs one game until the player quits or asks for a new one.
///
/// Events are applied strictly one at a time: key presses first, then the
/// step timer, then a redraw.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<LoopResult, HackerError> {
    let mut game = Game::with_target(config.grid_size, config.collection_target);
    let mut clock = Clock::start(Instant::now());
    let mut paused = false;

    info!(
        "new game: size {}, target {}",
        config.grid_size, config.collection_target
    );

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            let in_play = !paused && game.outcome() == Outcome::InProgress;

            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(LoopResult::Quit);
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(LoopResult::Quit);
                }
                KeyCode::Char('n') | KeyCode::Char('N') => return Ok(LoopResult::NewGame),
                KeyCode::Char('p') | KeyCode::Char('P')
                    if game.outcome() == Outcome::InProgress =>
                {
                    paused = !paused;
                    if paused {
                        clock.stop(Instant::now());
                    } else {
                        clock.resume(Instant::now());
                    }
                }
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') if in_play => {
                    game.rotate(Direction::Left);
                    check_outcome(&mut game, &mut clock);
                }
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') if in_play => {
                    game.rotate(Direction::Right);
                    check_outcome(&mut game, &mut clock);
                }
                KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F') if in_play => {
                    game.fire(ShotKind::Destroy);
                    check_outcome(&mut game, &mut clock);
                }
                KeyCode::Char('c') | KeyCode::Char('C') if in_play => {
                    game.fire(ShotKind::Collect);
                    check_outcome(&mut game, &mut clock);
                }
                _ => {}
            }
        }

        // ── Step timer; only advances while the clock runs ────────────────────
        if clock.step_due(Instant::now(), config.step_interval()) {
            game.step(rng);
            check_outcome(&mut game, &mut clock);
        }

        let status = Status {
            elapsed: clock.elapsed(Instant::now()),
            paused,
        };
        display::render(out, &game, &status)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), HackerError> {
    let args = Args::parse();
    let config = args.game_config()?;
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &config, &mut rng, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<(), HackerError> {
    loop {
        match game_loop(out, config, rng, rx)? {
            LoopResult::NewGame => continue,
            LoopResult::Quit => break,
        }
    }
    info!("quit");
    Ok(())
}
