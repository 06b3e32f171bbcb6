//! Weapon tasks: the volley launcher and the projectiles it spawns.

use crate::collision::obstacle_hits_point;
use crate::display::CellStyle;
use crate::entities::Gun;
use crate::scenario::choose_guns;
use crate::scheduler::{SimContext, Task, TaskStatus};
use crate::tasks::effects::Explosion;

// ── Volley ───────────────────────────────────────────────────────────────────

/// Launches one projectile per gun, once per tick, `volley_count` times:
/// a staggered burst rather than simultaneous mass fire.
pub struct Volley {
    row: f64,
    column: f64,
    remaining: u32,
    guns: &'static [Gun],
}

impl Volley {
    /// The gun set is looked up for the year at trigger time; shots leave
    /// from the craft's top edge, offset to its horizontal center.
    pub fn new(year: u32, craft_row: f64, craft_column: f64, craft_width: u16) -> Self {
        let (volley_count, guns) = choose_guns(year);
        Volley {
            row: craft_row,
            column: craft_column + f64::from(craft_width / 2),
            remaining: volley_count,
            guns,
        }
    }
}

impl Task for Volley {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        if self.remaining == 0 {
            return TaskStatus::Finished;
        }
        for gun in self.guns {
            ctx.admit(Box::new(Projectile::new(self.row, self.column, *gun)));
        }
        self.remaining -= 1;
        TaskStatus::Suspended
    }
}

// ── Projectile ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Step {
    FlashStar,
    FlashCircle,
    Launch,
    Cruise,
}

/// One shot in flight. Two muzzle-flash ticks at the launch cell, then it
/// advances by its gun's speeds each tick until it hits an obstacle (flag it,
/// play the shared explosion, finish) or leaves the playfield.
pub struct Projectile {
    row: f64,
    column: f64,
    rows_speed: f64,
    columns_speed: f64,
    symbol: char,
    step: Step,
    explosion: Option<Explosion>,
}

impl Projectile {
    pub fn new(start_row: f64, start_column: f64, gun: Gun) -> Self {
        Projectile {
            row: start_row,
            column: start_column,
            rows_speed: gun.rows_speed,
            columns_speed: gun.columns_speed,
            symbol: if gun.columns_speed != 0.0 { '-' } else { '|' },
            step: Step::FlashStar,
            explosion: None,
        }
    }

    fn cell(&self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }

    fn advance(&mut self) {
        self.row += self.rows_speed;
        self.column += self.columns_speed;
    }

    /// Playfield bounds are exclusive of the border ring on all sides.
    fn out_of_bounds(&self, ctx: &SimContext) -> bool {
        let (rows, columns) = ctx.playfield();
        !(self.row > 0.0
            && self.row < f64::from(rows - 1)
            && self.column > 0.0
            && self.column < f64::from(columns - 1))
    }

    fn put(&self, ctx: &mut SimContext, symbol: char) {
        let (row, column) = self.cell();
        ctx.put(row, column, symbol, CellStyle::Normal);
    }
}

impl Task for Projectile {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        if let Some(explosion) = self.explosion.as_mut() {
            return explosion.resume(ctx);
        }
        match self.step {
            Step::FlashStar => {
                self.put(ctx, '*');
                self.step = Step::FlashCircle;
                TaskStatus::Suspended
            }
            Step::FlashCircle => {
                self.put(ctx, 'O');
                self.step = Step::Launch;
                TaskStatus::Suspended
            }
            Step::Launch => {
                self.put(ctx, ' ');
                ctx.beep();
                self.advance();
                if self.out_of_bounds(ctx) {
                    return TaskStatus::Finished;
                }
                self.put(ctx, self.symbol);
                self.step = Step::Cruise;
                TaskStatus::Suspended
            }
            Step::Cruise => {
                self.put(ctx, ' ');
                let hit = ctx
                    .obstacles
                    .iter()
                    .find(|(_, obstacle)| obstacle_hits_point(obstacle, self.row, self.column))
                    .map(|(id, _)| id);
                if let Some(id) = hit {
                    ctx.hits.insert(id);
                    let mut explosion = Explosion::at(self.row, self.column);
                    // First explosion frame shows in the same tick as the hit
                    let status = explosion.resume(ctx);
                    self.explosion = Some(explosion);
                    return status;
                }
                self.advance();
                if self.out_of_bounds(ctx) {
                    return TaskStatus::Finished;
                }
                self.put(ctx, self.symbol);
                TaskStatus::Suspended
            }
        }
    }
}
