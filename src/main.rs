//! Terminal Klotski runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a framebuffer-based
//! renderer. The loop is event driven: a frame is only rebuilt when the
//! puzzle reports a change or the terminal is resized.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use klotski_tui::config::Config;
use klotski_tui::core::{Puzzle, PuzzleSnapshot};
use klotski_tui::input::{click_position, handle_key_event, should_quit};
use klotski_tui::logging;
use klotski_tui::term::{FrameBuffer, TerminalRenderer, Viewport};
use klotski_tui::types::PuzzleAction;

fn main() -> Result<()> {
    let config = Config::parse();
    if logging::init(&config)? {
        log::info!(
            "starting: cell {}x{}, frame {}ms",
            config.cell_size().0,
            config.cell_size().1,
            config.frame_ms
        );
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::error!("terminal restore failed: {:#}", e);
    }
    match &result {
        Ok(()) => log::info!("exiting"),
        Err(e) => log::error!("exiting with error: {:#}", e),
    }
    result
}

fn terminal_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut puzzle = Puzzle::new();
    let view = config.view();
    let timeout = config.frame_timeout();

    let mut snap = PuzzleSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = terminal_viewport();
    let mut dirty = true;

    loop {
        if dirty {
            puzzle.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty |= puzzle.apply_action(action);
                }
            }
            Event::Mouse(mouse) => {
                let cell = click_position(mouse)
                    .and_then(|(col, row)| view.cell_at(&snap, viewport, col, row));
                if let Some(cell) = cell {
                    dirty |= puzzle.apply_action(PuzzleAction::SelectAt(cell));
                }
            }
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
