//! Terminal runner (default binary).
//!
//! Owns the clock: one gravity `Tick` per second, input in between, and the
//! row-clear flash before completed rows are removed. Game over flashes once.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, Level};

use blockfall::core::{GameSession, GameSnapshot, SessionEvent};
use blockfall::input::{handle_key_event, InputCommand};
use blockfall::term::{FlashFrame, FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, FLASH_FRAME_MS, ROW_CLEAR_FLASHES, TICK_MS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file (nothing is logged without it)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Most verbose level written to the log file
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!(
        key_release_events = term.key_release_events(),
        "terminal ready"
    );

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal belongs to the renderer, so logs only ever go to a file.
fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn new_session(seed: Option<u64>) -> GameSession {
    match seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

struct Screen<'a> {
    term: &'a mut TerminalRenderer,
    view: GameView,
    snap: GameSnapshot,
    fb: FrameBuffer,
}

impl Screen<'_> {
    fn draw(&mut self, session: &GameSession, flash: FlashFrame) -> Result<()> {
        session.snapshot_into(&mut self.snap);
        self.view
            .render_into(&self.snap, flash, viewport(), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }

    fn flash(&mut self, session: &GameSession, flash: FlashFrame) -> Result<()> {
        self.draw(session, flash)?;
        thread::sleep(Duration::from_millis(FLASH_FRAME_MS as u64));
        Ok(())
    }

    /// Flash the completed rows, then let the session remove them.
    fn row_clear(&mut self, session: &mut GameSession) -> Result<()> {
        for _ in 0..ROW_CLEAR_FLASHES {
            self.flash(session, FlashFrame::Lit)?;
            self.flash(session, FlashFrame::Dark)?;
        }
        session.complete_row_clear();
        Ok(())
    }

    /// Blink the GAME OVER overlay once.
    fn game_over(&mut self, session: &GameSession) -> Result<()> {
        self.flash(session, FlashFrame::Lit)?;
        self.flash(session, FlashFrame::Dark)
    }
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let mut session = new_session(args.seed);
    let mut screen = Screen {
        term,
        view: GameView::default(),
        snap: GameSnapshot::default(),
        fb: FrameBuffer::new(0, 0),
    };

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        screen.draw(&session, FlashFrame::Steady)?;

        match session.take_event() {
            Some(SessionEvent::RowsFilled(_)) => {
                screen.row_clear(&mut session)?;
                last_tick = Instant::now();
                continue;
            }
            Some(SessionEvent::GameOver { .. }) => {
                screen.game_over(&session)?;
                continue;
            }
            None => {}
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(InputCommand::Quit) => {
                        info!(score = session.score(), "quit");
                        return Ok(());
                    }
                    Some(InputCommand::NewGame) if session.is_game_over() => {
                        session = new_session(args.seed);
                        last_tick = Instant::now();
                    }
                    Some(InputCommand::Action(action)) => {
                        session.apply_action(action);
                    }
                    _ => {}
                },
                Event::Resize(..) => screen.term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.apply_action(GameAction::Tick);
        }
    }
}
