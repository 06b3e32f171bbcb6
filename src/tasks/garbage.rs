//! Garbage tasks: the time-gated spawner and the falling obstacles it admits.

use std::rc::Rc;

use rand::Rng;

use crate::display::Frame;
use crate::entities::{Obstacle, ObstacleId};
use crate::scenario::{garbage_delay_tics, YEAR_DURATION};
use crate::scheduler::{SimContext, Task, TaskStatus};

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Persistent task filling the orbit with garbage.
///
/// Each cycle it waits the year-keyed delay, then admits one falling-garbage
/// task at a random column with a random frame and fall speed. Years with no
/// delay entry wait the fixed fallback and spawn nothing that cycle.
pub struct GarbageSpawner {
    frames: Vec<Rc<Frame>>,
    wait: u32,
    armed: bool,
}

impl GarbageSpawner {
    pub fn new(frames: Vec<Rc<Frame>>) -> Self {
        GarbageSpawner { frames, wait: 0, armed: false }
    }
}

impl Task for GarbageSpawner {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        if self.wait > 0 {
            self.wait -= 1;
            return TaskStatus::Suspended;
        }
        if self.armed {
            let (_, columns) = ctx.playfield();
            let column = ctx.rng.gen_range(1..i32::from(columns));
            let frame = self.frames[ctx.rng.gen_range(0..self.frames.len())].clone();
            let speed = f64::from(ctx.rng.gen_range(1..=3u32)) / 2.0;
            ctx.admit(Box::new(FallingGarbage::new(frame, column, speed)));
        }
        // The admission resumption doubles as the first tick of the next wait
        match garbage_delay_tics(ctx.clock.year) {
            Some(delay) => {
                self.wait = delay - 1;
                self.armed = true;
            }
            None => {
                self.wait = YEAR_DURATION - 1;
                self.armed = false;
            }
        }
        TaskStatus::Suspended
    }
}

// ── Falling garbage ──────────────────────────────────────────────────────────

/// One obstacle flying from top to bottom at a fixed column.
///
/// Registers itself in the obstacle arena on its first resumption and stays
/// there until exactly one of two ends: it consumes its hit flag, or its row
/// passes the playfield bottom.
pub struct FallingGarbage {
    frame: Rc<Frame>,
    row: f64,
    column: i32,
    speed: f64,
    id: Option<ObstacleId>,
}

impl FallingGarbage {
    pub fn new(frame: Rc<Frame>, column: i32, speed: f64) -> Self {
        FallingGarbage { frame, row: 0.0, column, speed, id: None }
    }
}

impl Task for FallingGarbage {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        let (rows, columns) = ctx.playfield();
        let id = match self.id {
            None => {
                self.column = self.column.clamp(0, i32::from(columns) - 1);
                let (height, width) = self.frame.size();
                let id = ctx.obstacles.insert(Obstacle {
                    row: self.row,
                    column: self.column,
                    height,
                    width,
                });
                self.id = Some(id);
                id
            }
            Some(id) => {
                ctx.erase(self.row, f64::from(self.column), &self.frame);
                self.row += self.speed;
                if ctx.hits.remove(&id) {
                    ctx.obstacles.remove(id);
                    return TaskStatus::Finished;
                }
                if self.row >= f64::from(rows) {
                    ctx.obstacles.remove(id);
                    return TaskStatus::Finished;
                }
                id
            }
        };
        if let Some(obstacle) = ctx.obstacles.get_mut(id) {
            obstacle.row = self.row;
        }
        ctx.draw(self.row, f64::from(self.column), &self.frame);
        TaskStatus::Suspended
    }
}
