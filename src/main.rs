use std::io::{self, BufWriter};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orbit_patrol::assets::Assets;
use orbit_patrol::display::TerminalCanvas;
use orbit_patrol::entities::Controls;
use orbit_patrol::scheduler::{Scheduler, SimContext};
use orbit_patrol::tasks::{Craft, GarbageSpawner, InfoPanel, StarBlink, YearCounter};

/// One simulation tick of wall-clock time (≈10 FPS).
const TIC_TIMEOUT: Duration = Duration::from_millis(100);

const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

/// Optional on-disk frame set; the compiled-in art is used when absent.
const ANIMATIONS_DIR: &str = "animations";

// ── Input polling ─────────────────────────────────────────────────────────────

/// Drain every key event since the last tick into one controls snapshot.
/// Later events override earlier ones per axis; fire is sticky for the tick.
fn poll_controls(rx: &mpsc::Receiver<Event>) -> (Controls, bool) {
    let mut controls = Controls::default();
    let mut quit = false;
    while let Ok(event) = rx.try_recv() {
        if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event {
            if !matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            match code {
                KeyCode::Up | KeyCode::Char('w') => controls.rows_direction = -1,
                KeyCode::Down | KeyCode::Char('s') => controls.rows_direction = 1,
                KeyCode::Left | KeyCode::Char('a') => controls.columns_direction = -1,
                KeyCode::Right | KeyCode::Char('d') => controls.columns_direction = 1,
                KeyCode::Char(' ') => controls.fire = true,
                KeyCode::Char('q') | KeyCode::Esc => quit = true,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    quit = true;
                }
                _ => {}
            }
        }
    }
    (controls, quit)
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

fn run(assets: Assets, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let (columns, rows) = terminal::size().context("querying terminal size")?;
    let canvas = TerminalCanvas::new(BufWriter::new(io::stdout()), rows, columns);
    let mut ctx = SimContext::new(Box::new(canvas), StdRng::from_entropy());
    let mut scheduler = Scheduler::new();

    let stars = (u32::from(rows) * u32::from(columns)) / 50;
    for _ in 0..stars {
        let row = ctx.rng.gen_range(1..i32::from(rows) - 1);
        let column = ctx.rng.gen_range(1..i32::from(columns) - 1);
        let symbol = STAR_SYMBOLS[ctx.rng.gen_range(0..STAR_SYMBOLS.len())];
        let delay = ctx.rng.gen_range(1..=30);
        scheduler.admit(Box::new(StarBlink::new(row, column, symbol, delay)));
    }
    scheduler.admit(Box::new(Craft::new(
        assets.craft_animation.clone(),
        assets.game_over.clone(),
        f64::from(rows) / 2.0,
        f64::from(columns) / 2.0,
    )));
    scheduler.admit(Box::new(GarbageSpawner::new(assets.garbage.clone())));
    scheduler.admit(Box::new(InfoPanel));
    scheduler.admit(Box::new(YearCounter));

    loop {
        let tick_started = Instant::now();

        let (controls, quit) = poll_controls(rx);
        if quit {
            return Ok(());
        }
        ctx.controls = controls;

        scheduler.tick(&mut ctx);
        ctx.present().context("flushing the frame")?;

        // Wall-clock pacing lives only here; tasks count ticks, not time
        let elapsed = tick_started.elapsed();
        if elapsed < TIC_TIMEOUT {
            thread::sleep(TIC_TIMEOUT - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let animations = Path::new(ANIMATIONS_DIR);
    let assets = if animations.is_dir() {
        Assets::load(animations)?
    } else {
        Assets::builtin()
    };

    terminal::enable_raw_mode()?;
    let mut bootstrap = io::stdout();
    bootstrap.execute(terminal::EnterAlternateScreen)?;
    bootstrap.execute(cursor::Hide)?;

    // Dedicate a thread to blocking event reads, sending them through a
    // channel so the tick loop never waits on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(event) => {
                if tx.send(event).is_err() {
                    break; // receiver dropped, program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(assets, &rx);

    // Always restore the terminal
    let _ = bootstrap.execute(cursor::Show);
    let _ = bootstrap.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
