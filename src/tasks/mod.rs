//! Task implementations driven by the scheduler.

pub mod craft;
pub mod effects;
pub mod fire;
pub mod garbage;

pub use craft::Craft;
pub use effects::{Explosion, GameOverScreen, InfoPanel, StarBlink, YearCounter};
pub use fire::{Projectile, Volley};
pub use garbage::{FallingGarbage, GarbageSpawner};
