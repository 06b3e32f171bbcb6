//! The craft controller: input, inertia, boundary clamping, collision, and
//! the Flying → Exploding → GameOver lifecycle.

use std::rc::Rc;

use crate::collision::obstacle_hits_frame;
use crate::display::Frame;
use crate::physics::update_speed;
use crate::scheduler::{SimContext, Task, TaskStatus};
use crate::tasks::effects::{Explosion, GameOverScreen};
use crate::tasks::fire::Volley;

/// The player's craft.
///
/// While flying it reads the tick's input, integrates its speed, moves,
/// clamps to the border, redraws, and fires volleys on demand. Touching any
/// obstacle plays the shared explosion at its position, then it admits the
/// game-over overlay and finishes, taking control with it.
pub struct Craft {
    animation: Vec<Rc<Frame>>,
    game_over: Rc<Frame>,
    row: f64,
    column: f64,
    rows_speed: f64,
    columns_speed: f64,
    frame_index: usize,
    drawn: Option<usize>,
    exploding: Option<Explosion>,
}

impl Craft {
    pub fn new(animation: Vec<Rc<Frame>>, game_over: Rc<Frame>, row: f64, column: f64) -> Self {
        Craft {
            animation,
            game_over,
            row,
            column,
            rows_speed: 0.0,
            columns_speed: 0.0,
            frame_index: 0,
            drawn: None,
            exploding: None,
        }
    }
}

/// Nearest anchor keeping the whole frame inside the playable border
/// (rows and columns 1 ..= edge-1, exclusive of the border ring).
fn keep_frame_inside_border(
    row: f64,
    column: f64,
    frame: &Frame,
    rows: u16,
    columns: u16,
) -> (f64, f64) {
    let (height, width) = frame.size();
    let row = (row + f64::from(height)).min(f64::from(rows - 1)) - f64::from(height);
    let column = (column + f64::from(width)).min(f64::from(columns - 1)) - f64::from(width);
    (row.max(1.0), column.max(1.0))
}

impl Task for Craft {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        if let Some(explosion) = self.exploding.as_mut() {
            return match explosion.resume(ctx) {
                TaskStatus::Suspended => TaskStatus::Suspended,
                TaskStatus::Finished => {
                    ctx.admit(Box::new(GameOverScreen::new(self.game_over.clone())));
                    TaskStatus::Finished
                }
            };
        }

        // Last tick's frame comes off the canvas first; the collision test
        // runs at the position that was actually shown.
        if let Some(index) = self.drawn.take() {
            let frame = &self.animation[index];
            ctx.erase(self.row, self.column, frame);
            let (height, width) = frame.size();
            let hit = ctx
                .obstacles
                .iter()
                .any(|(_, obstacle)| {
                    obstacle_hits_frame(obstacle, self.row, self.column, height, width)
                });
            if hit {
                let mut explosion = Explosion::at(self.row, self.column);
                let _ = explosion.resume(ctx);
                self.exploding = Some(explosion);
                return TaskStatus::Suspended;
            }
        }

        let controls = ctx.controls;
        let (rows_speed, columns_speed) = update_speed(
            self.rows_speed,
            self.columns_speed,
            controls.rows_direction,
            controls.columns_direction,
        );
        self.rows_speed = rows_speed;
        self.columns_speed = columns_speed;
        self.row += rows_speed;
        self.column += columns_speed;

        let frame = &self.animation[self.frame_index];
        let (rows, columns) = ctx.playfield();
        let (row, column) = keep_frame_inside_border(self.row, self.column, frame, rows, columns);
        self.row = row;
        self.column = column;

        ctx.draw(self.row, self.column, frame);
        if controls.fire {
            ctx.admit(Box::new(Volley::new(
                ctx.clock.year,
                self.row,
                self.column,
                frame.width(),
            )));
        }
        self.drawn = Some(self.frame_index);
        self.frame_index = (self.frame_index + 1) % self.animation.len();
        TaskStatus::Suspended
    }
}
