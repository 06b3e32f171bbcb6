//! Ambient and one-shot visual tasks: explosions, star blinking, the info
//! panel, the game-over overlay, and the year counter.

use std::rc::Rc;

use crate::assets;
use crate::display::{centered_anchor, CellStyle, Frame};
use crate::scenario::phrase_for;
use crate::scheduler::{SimContext, Task, TaskStatus};

// ── Explosion ────────────────────────────────────────────────────────────────

/// Short fixed animation played at a point, one frame per tick. Shared by
/// craft destruction and projectile impacts; never loops.
pub struct Explosion {
    row: f64,
    column: f64,
    frames: Vec<Frame>,
    next: usize,
}

impl Explosion {
    /// Center the animation on the given cell.
    pub fn at(center_row: f64, center_column: f64) -> Self {
        let frames = assets::explosion_frames();
        let (height, width) = frames[0].size();
        Explosion {
            row: center_row - f64::from(height) / 2.0,
            column: center_column - f64::from(width) / 2.0,
            frames,
            next: 0,
        }
    }
}

impl Task for Explosion {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        if self.next == 0 {
            ctx.beep();
        } else {
            let shown = &self.frames[self.next - 1];
            ctx.erase(self.row, self.column, shown);
        }
        if self.next == self.frames.len() {
            return TaskStatus::Finished;
        }
        let frame = &self.frames[self.next];
        ctx.draw(self.row, self.column, frame);
        self.next += 1;
        TaskStatus::Suspended
    }
}

// ── Star blinking ────────────────────────────────────────────────────────────

const SKY_FRAMES: [(u32, CellStyle); 4] = [
    (20, CellStyle::Dim),
    (3, CellStyle::Normal),
    (5, CellStyle::Bold),
    (3, CellStyle::Normal),
];

/// One background star cycling through dim/normal/bold phases forever, offset
/// by a random initial delay so the sky does not pulse in lockstep.
pub struct StarBlink {
    row: i32,
    column: i32,
    symbol: char,
    wait: u32,
    phase: usize,
    lit: bool,
}

impl StarBlink {
    pub fn new(row: i32, column: i32, symbol: char, initial_delay: u32) -> Self {
        StarBlink { row, column, symbol, wait: initial_delay, phase: 0, lit: false }
    }
}

impl Task for StarBlink {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        if !self.lit {
            self.lit = true;
            ctx.put(self.row, self.column, self.symbol, CellStyle::Normal);
            return TaskStatus::Suspended;
        }
        if self.wait > 0 {
            self.wait -= 1;
            return TaskStatus::Suspended;
        }
        let (duration, style) = SKY_FRAMES[self.phase];
        ctx.put(self.row, self.column, self.symbol, style);
        self.phase = (self.phase + 1) % SKY_FRAMES.len();
        self.wait = duration - 1;
        TaskStatus::Suspended
    }
}

// ── Info panel ───────────────────────────────────────────────────────────────

const PANEL_WIDTH: usize = 55;
const PANEL_COLUMN: i32 = 3;

/// Persistent bottom-left status line: the current year and the most recent
/// historical phrase.
pub struct InfoPanel;

impl Task for InfoPanel {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        let (rows, _) = ctx.playfield();
        let year = ctx.clock.year;
        let line = match phrase_for(year) {
            Some(phrase) => format!("{year}  {phrase}"),
            None => year.to_string(),
        };
        let row = i32::from(rows) - 3;
        // Pad to the panel width so a shorter line fully overwrites the last
        let padded = line.chars().chain(std::iter::repeat(' ')).take(PANEL_WIDTH);
        for (offset, symbol) in padded.enumerate() {
            ctx.put(row, PANEL_COLUMN + offset as i32, symbol, CellStyle::Normal);
        }
        TaskStatus::Suspended
    }
}

// ── Game-over overlay ────────────────────────────────────────────────────────

/// Persistent centered banner shown after the craft is destroyed.
pub struct GameOverScreen {
    frame: Rc<Frame>,
}

impl GameOverScreen {
    pub fn new(frame: Rc<Frame>) -> Self {
        GameOverScreen { frame }
    }
}

impl Task for GameOverScreen {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        let (rows, columns) = ctx.playfield();
        let (row, column) = centered_anchor(rows, columns, &self.frame);
        ctx.draw(row, column, &self.frame);
        TaskStatus::Suspended
    }
}

// ── Year counter ─────────────────────────────────────────────────────────────

/// Sole writer of the clock: counts ticks and rolls the year over.
pub struct YearCounter;

impl Task for YearCounter {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        ctx.clock.advance();
        TaskStatus::Suspended
    }
}
