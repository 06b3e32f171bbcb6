//! Simulation entity types and the obstacle registry: pure data, no I/O.

use crate::scenario::{START_YEAR, YEAR_DURATION};

// ── Obstacles ────────────────────────────────────────────────────────────────

/// One piece of falling orbital garbage, as seen by collision queries.
///
/// The row is the top edge and grows downward; the column is fixed for the
/// obstacle's whole lifetime. Height and width come from its visual frame.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub row: f64,
    pub column: i32,
    pub height: u16,
    pub width: u16,
}

/// Stable handle into the [`ObstacleArena`].
///
/// Carries the slot index plus a generation counter, so a handle kept after
/// removal can never alias a newer occupant of the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObstacleId {
    index: u32,
    generation: u32,
}

struct Slot {
    generation: u32,
    obstacle: Option<Obstacle>,
}

/// The set of obstacles currently in flight.
///
/// Slot-based so membership tests and removal are O(1) and removal by id is
/// idempotent: the second removal attempt for the same id is a no-op.
#[derive(Default)]
pub struct ObstacleArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl ObstacleArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, obstacle: Obstacle) -> ObstacleId {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.obstacle = Some(obstacle);
                ObstacleId { index, generation: slot.generation }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, obstacle: Some(obstacle) });
                ObstacleId { index, generation: 0 }
            }
        }
    }

    /// Remove the obstacle behind `id`. Returns whether it was still present;
    /// stale or repeated ids are ignored.
    pub fn remove(&mut self, id: ObstacleId) -> bool {
        match self.slots.get_mut(id.index as usize) {
            Some(slot) if slot.generation == id.generation && slot.obstacle.is_some() => {
                slot.obstacle = None;
                slot.generation += 1;
                self.free.push(id.index);
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.obstacle.as_ref())
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.obstacle.as_mut())
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let id = ObstacleId { index: index as u32, generation: slot.generation };
            slot.obstacle.as_ref().map(|obstacle| (id, obstacle))
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ── Weapons ──────────────────────────────────────────────────────────────────

/// One projectile trajectory: fixed per-tick row and column speeds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gun {
    pub rows_speed: f64,
    pub columns_speed: f64,
}

// ── Progression clock ────────────────────────────────────────────────────────

/// The in-game calendar. Only the year-counter task may call [`Clock::advance`].
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    pub year: u32,
    ticks: u32,
}

impl Clock {
    pub fn new() -> Self {
        Clock { year: START_YEAR, ticks: 0 }
    }

    /// Count one tick; rolls the year over every [`YEAR_DURATION`] ticks.
    pub fn advance(&mut self) {
        self.ticks += 1;
        if self.ticks == YEAR_DURATION {
            self.ticks = 0;
            self.year += 1;
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

// ── Per-tick input snapshot ──────────────────────────────────────────────────

/// Everything the input source reported since the last poll, collapsed to one
/// direction per axis (later events win) and a sticky fire flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub rows_direction: i8,
    pub columns_direction: i8,
    pub fire: bool,
}
