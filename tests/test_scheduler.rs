use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use orbit_patrol::display::BufferCanvas;
use orbit_patrol::scheduler::{Scheduler, SimContext, Task, TaskStatus};

fn test_ctx() -> SimContext {
    SimContext::new(Box::new(BufferCanvas::new(24, 80)), StdRng::seed_from_u64(7))
}

type Log = Rc<RefCell<Vec<&'static str>>>;

/// Appends its name on every resumption; finishes after `lives` suspensions.
struct Recorder {
    name: &'static str,
    log: Log,
    lives: u32,
}

impl Recorder {
    fn forever(name: &'static str, log: &Log) -> Box<Self> {
        Box::new(Recorder { name, log: log.clone(), lives: u32::MAX })
    }

    fn once(name: &'static str, log: &Log) -> Box<Self> {
        Box::new(Recorder { name, log: log.clone(), lives: 0 })
    }
}

impl Task for Recorder {
    fn resume(&mut self, _ctx: &mut SimContext) -> TaskStatus {
        self.log.borrow_mut().push(self.name);
        if self.lives == 0 {
            return TaskStatus::Finished;
        }
        self.lives -= 1;
        TaskStatus::Suspended
    }
}

/// Admits a forever-recorder on its first resumption only.
struct Admitter {
    log: Log,
    spawned: bool,
}

impl Task for Admitter {
    fn resume(&mut self, ctx: &mut SimContext) -> TaskStatus {
        self.log.borrow_mut().push("admitter");
        if !self.spawned {
            self.spawned = true;
            ctx.admit(Recorder::forever("late", &self.log));
        }
        TaskStatus::Suspended
    }
}

// ── Ordering and once-per-tick ───────────────────────────────────────────────

#[test]
fn resumes_in_admission_order_each_exactly_once() {
    let mut ctx = test_ctx();
    let log: Log = Rc::default();
    let mut scheduler = Scheduler::new();
    scheduler.admit(Recorder::forever("a", &log));
    scheduler.admit(Recorder::forever("b", &log));
    scheduler.admit(Recorder::forever("c", &log));

    scheduler.tick(&mut ctx);
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);

    scheduler.tick(&mut ctx);
    assert_eq!(*log.borrow(), vec!["a", "b", "c", "a", "b", "c"]);
}

#[test]
fn finished_tasks_retire_and_order_survives() {
    let mut ctx = test_ctx();
    let log: Log = Rc::default();
    let mut scheduler = Scheduler::new();
    scheduler.admit(Recorder::forever("a", &log));
    scheduler.admit(Recorder::once("b", &log));
    scheduler.admit(Recorder::forever("c", &log));

    scheduler.tick(&mut ctx);
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]); // b still ran this tick
    assert_eq!(scheduler.len(), 2);

    scheduler.tick(&mut ctx);
    assert_eq!(*log.borrow(), vec!["a", "b", "c", "a", "c"]);
}

// ── Snapshot-before-iterate ──────────────────────────────────────────────────

#[test]
fn tasks_admitted_mid_tick_wait_for_the_next_tick() {
    let mut ctx = test_ctx();
    let log: Log = Rc::default();
    let mut scheduler = Scheduler::new();
    scheduler.admit(Box::new(Admitter { log: log.clone(), spawned: false }));

    scheduler.tick(&mut ctx);
    // The late task joined the active set but was not resumed this tick
    assert_eq!(*log.borrow(), vec!["admitter"]);
    assert_eq!(scheduler.len(), 2);
    assert_eq!(ctx.pending(), 0);

    scheduler.tick(&mut ctx);
    assert_eq!(*log.borrow(), vec!["admitter", "admitter", "late"]);
}

#[test]
fn empty_scheduler_ticks_harmlessly() {
    let mut ctx = test_ctx();
    let mut scheduler = Scheduler::new();
    scheduler.tick(&mut ctx);
    assert!(scheduler.is_empty());
}
