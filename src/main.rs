//! Terminal host (default binary).
//!
//! Plays the role of the device around the engine: it scans the keyboard,
//! runs the fixed-cadence tick, and pushes every frame to a terminal that
//! stands in for the 128x32 OLED.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info, LevelFilter};

use mono_tetris::config::HostConfig;
use mono_tetris::core::{ShapeCatalog, SimpleRng};
use mono_tetris::engine::{BoardView, Engine};
use mono_tetris::input::{handle_key_event, is_restart, should_quit, TickInput};
use mono_tetris::logging;
use mono_tetris::term::{HudStatus, MonoFrameBuffer, TerminalRenderer};
use mono_tetris::types::TICK_MS;

/// Blink period of the topped-out piece while waiting for a restart.
const GAME_OVER_BLINK_MS: u32 = 400;

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init(path, LevelFilter::Debug)?;
    }

    let seed = config.resolve_seed();
    info!("starting with seed {} and gravity {}ms", seed, config.gravity_interval_ms);
    let mut engine = Engine::with_config(
        config.game_config(),
        ShapeCatalog::standard(),
        SimpleRng::new(seed),
        BoardView::default(),
    )
    .inspect_err(|e| error!("configuration rejected: {} ({})", e, e.code()))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, config: &HostConfig) -> Result<()> {
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut input = TickInput::new();
    let mut frame = MonoFrameBuffer::default();
    let mut over_ms: u32 = 0;

    loop {
        // Render.
        engine.render_into(&mut frame);
        let game = engine.game();
        term.draw(
            &frame,
            HudStatus {
                score: game.score(),
                rows_cleared: game.rows_cleared(),
                is_over: game.is_over(),
            },
        )?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        engine.reset();
                        input.clear();
                        over_ms = 0;
                    } else if let Some(ev) = handle_key_event(key) {
                        input.push(ev);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed < tick_duration {
            continue;
        }
        last_tick = Instant::now();
        let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;

        if engine.is_over() {
            if config.auto_restart {
                info!("game over with score {}, restarting", engine.score());
                engine.reset();
                over_ms = 0;
            } else {
                over_ms = over_ms.saturating_add(elapsed_ms);
                engine.set_piece_visible((over_ms / GAME_OVER_BLINK_MS) % 2 == 0);
            }
            input.clear();
            continue;
        }

        engine.tick(input.as_slice(), elapsed_ms);
        input.clear();
    }
}
