//! Single-threaded cooperative scheduler.
//!
//! Every logical activity in the scene (the craft, each projectile, each
//! falling obstacle, each blinking star, the clock, the panels) is a
//! [`Task`]: a resumable unit that does one step of work per tick and reports
//! whether it wants to run again. The [`Scheduler`] owns the active set and
//! resumes it once per tick; all shared state travels through [`SimContext`],
//! so tasks never capture shared mutable state.

use std::collections::HashSet;

use rand::rngs::StdRng;

use crate::display::{draw_frame, erase_frame, Canvas, CellStyle, Frame};
use crate::entities::{Clock, Controls, ObstacleArena, ObstacleId};

/// Outcome of one resumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    /// Call again next tick.
    Suspended,
    /// Done; retire the task.
    Finished,
}

/// A resumable unit of simulation logic.
///
/// `resume` runs exactly one step: everything between two suspension points
/// of the activity it models. A panic inside `resume` is deliberately not
/// caught; it is a programming error and aborts the tick loop.
pub trait Task {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus;
}

// ── Shared simulation state ──────────────────────────────────────────────────

/// Everything tasks share: the display surface, the RNG, the clock, the
/// obstacle registry, the hit set, this tick's input snapshot, and the
/// admission queue for newly requested tasks.
///
/// Single-writer rules keep this lock-free: only the year counter writes the
/// clock, and only the task owning an obstacle or projectile writes its
/// position. Execution is strictly cooperative, so no mutation can interleave
/// within a tick step.
pub struct SimContext {
    canvas: Box<dyn Canvas>,
    pub rng: StdRng,
    pub clock: Clock,
    pub obstacles: ObstacleArena,
    /// Obstacles flagged by a projectile this tick; consumed exactly once by
    /// the obstacle's own task.
    pub hits: HashSet<ObstacleId>,
    pub controls: Controls,
    admitted: Vec<Box<dyn Task>>,
}

impl SimContext {
    pub fn new(canvas: Box<dyn Canvas>, rng: StdRng) -> Self {
        SimContext {
            canvas,
            rng,
            clock: Clock::new(),
            obstacles: ObstacleArena::new(),
            hits: HashSet::new(),
            controls: Controls::default(),
            admitted: Vec::new(),
        }
    }

    /// Request a new task. It joins the active set at the end of the current
    /// tick and is first resumed on the next one.
    pub fn admit(&mut self, task: Box<dyn Task>) {
        self.admitted.push(task);
    }

    /// Number of tasks admitted but not yet adopted by the scheduler.
    pub fn pending(&self) -> usize {
        self.admitted.len()
    }

    /// Playfield extents as (rows, columns).
    pub fn playfield(&self) -> (u16, u16) {
        self.canvas.size()
    }

    pub fn draw(&mut self, row: f64, column: f64, frame: &Frame) {
        draw_frame(self.canvas.as_mut(), row, column, frame);
    }

    pub fn erase(&mut self, row: f64, column: f64, frame: &Frame) {
        erase_frame(self.canvas.as_mut(), row, column, frame);
    }

    pub fn put(&mut self, row: i32, column: i32, symbol: char, style: CellStyle) {
        self.canvas.put(row, column, symbol, style);
    }

    pub fn beep(&mut self) {
        self.canvas.beep();
    }

    /// Display-surface readback for assertions in headless tests.
    pub fn char_at(&self, row: i32, column: i32) -> char {
        self.canvas.char_at(row, column)
    }

    /// Finish the frame: draw the border ring and flush the surface.
    pub fn present(&mut self) -> std::io::Result<()> {
        self.canvas.border();
        self.canvas.flush()
    }
}

// ── Scheduler ────────────────────────────────────────────────────────────────

/// Ordered collection of active tasks, resumed in admission order.
#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a task directly; used for the initial seeding before the first
    /// tick.
    pub fn admit(&mut self, task: Box<dyn Task>) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run one tick.
    ///
    /// The active set is snapshotted at entry: exactly the tasks present now
    /// are resumed, each exactly once, in admission order. Tasks admitted via
    /// `ctx` during the tick are adopted at the end and wait for the next
    /// one; tasks reporting [`TaskStatus::Finished`] are retired after the
    /// full pass, keeping the remaining order intact.
    pub fn tick(&mut self, ctx: &mut SimContext) {
        let active = self.tasks.len();
        let mut finished = vec![false; active];

        for (slot, task) in self.tasks[..active].iter_mut().enumerate() {
            if task.resume(ctx) == TaskStatus::Finished {
                finished[slot] = true;
            }
        }

        let mut slot = 0;
        self.tasks.retain(|_| {
            let keep = !finished[slot];
            slot += 1;
            keep
        });
        self.tasks.append(&mut ctx.admitted);
    }
}
