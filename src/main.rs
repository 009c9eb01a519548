//! Terminal tetromino runner (default binary).
//!
//! Single-threaded frame loop: poll input until the frame deadline, apply
//! the actions the input handler fires, step gravity when due, render.

use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use tui_tetromino::config::GameConfig;
use tui_tetromino::core::{GameSnapshot, GameState, Gravity};
use tui_tetromino::event_log::{EndReason, EventLog, EventRecord};
use tui_tetromino::input::{should_quit, InputHandler};
use tui_tetromino::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tetromino::types::GAME_OVER_DELAY_MS;

struct Outcome {
    reason: EndReason,
    score: u32,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::load(&args)?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut log = EventLog::open_optional(config.log_path.as_deref());

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();

    let result = run(&mut term, &config, seed, &mut log);

    // Always try to restore terminal state.
    if enhanced {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    let restored = term.exit();

    log.flush();
    if let Some(e) = log.take_error() {
        eprintln!("warning: {:#}", e);
    }

    let outcome = result?;
    restored?;
    if outcome.reason == EndReason::GameOver {
        println!("Game over! Final score: {}", outcome.score);
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    seed: u32,
    log: &mut EventLog,
) -> Result<Outcome> {
    let mut game = GameState::new(seed);
    log.record(&EventRecord::SessionStart {
        seed,
        rows: game.grid().rows(),
        columns: game.grid().columns(),
        fall_interval_ms: config.fall_interval_ms,
    });

    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let frame_ms = config.frame_ms();
    let mut gravity = Gravity::new(config.fall_interval_ms, now_ms());
    let mut next_frame_ms = now_ms();

    loop {
        // Input with timeout until the next frame or gravity step.
        loop {
            let now = now_ms();
            let gravity_left = gravity.remaining_ms(now);
            if now >= next_frame_ms || gravity_left == 0 {
                break;
            }
            let wait = (next_frame_ms - now).min(gravity_left);
            if !event::poll(Duration::from_millis(wait))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(finish(log, &game, EndReason::Quit));
                        }
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Repeat => {
                        input.handle_key_repeat(key.code);
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => term.invalidate(),
                Event::FocusLost => input.reset(),
                _ => {}
            }
        }

        // Input fires on frame ticks only; gravity may wake the loop in between.
        let now = now_ms();
        if now >= next_frame_ms {
            // Skip frames we are too late for instead of bursting to catch up.
            next_frame_ms = (next_frame_ms + frame_ms).max(now);
            for action in input.update() {
                game.apply_action(action);
                log_lock(log, &mut game);
            }
        }
        if gravity.due(now_ms()) {
            game.step();
            log_lock(log, &mut game);
        }

        game.snapshot_into(&mut snap);
        let (w, h) = terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if game.is_game_over() {
            wait_or_quit(Duration::from_millis(GAME_OVER_DELAY_MS as u64))?;
            return Ok(finish(log, &game, EndReason::GameOver));
        }
    }
}

fn log_lock(log: &mut EventLog, game: &mut GameState) {
    if let Some(event) = game.take_last_event() {
        log.record(&EventRecord::lock(event, game.lines()));
    }
}

fn finish(log: &mut EventLog, game: &GameState, reason: EndReason) -> Outcome {
    log.record(&EventRecord::SessionEnd {
        reason,
        score: game.score(),
        lines: game.lines(),
        pieces: game.pieces_locked(),
    });
    Outcome {
        reason,
        score: game.score(),
    }
}

/// Keep the final frame on screen for `delay`; a quit key ends the wait early.
fn wait_or_quit(delay: Duration) -> Result<()> {
    let deadline = Instant::now() + delay;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() || !event::poll(left)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && should_quit(key) {
                return Ok(());
            }
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos as u32) ^ ((nanos >> 32) as u32)
}
