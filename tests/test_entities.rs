use orbit_patrol::entities::{Obstacle, ObstacleArena};

fn obstacle(row: f64, column: i32) -> Obstacle {
    Obstacle { row, column, height: 2, width: 3 }
}

// ── Arena membership ─────────────────────────────────────────────────────────

#[test]
fn insert_then_lookup() {
    let mut arena = ObstacleArena::new();
    let id = arena.insert(obstacle(1.0, 5));
    assert!(arena.contains(id));
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.get(id).unwrap().column, 5);
}

#[test]
fn remove_is_idempotent() {
    let mut arena = ObstacleArena::new();
    let id = arena.insert(obstacle(0.0, 1));
    assert!(arena.remove(id));
    assert!(!arena.remove(id));
    assert!(arena.is_empty());
    assert!(!arena.contains(id));
}

#[test]
fn stale_id_never_touches_the_slot_reuser() {
    let mut arena = ObstacleArena::new();
    let old = arena.insert(obstacle(0.0, 1));
    arena.remove(old);

    // The freed slot is reused, but under a new generation
    let new = arena.insert(obstacle(0.0, 2));
    assert_ne!(old, new);
    assert!(arena.get(old).is_none());
    assert!(!arena.remove(old), "stale handle must not evict the newcomer");
    assert!(arena.contains(new));
    assert_eq!(arena.len(), 1);
}

#[test]
fn iteration_skips_freed_slots() {
    let mut arena = ObstacleArena::new();
    let a = arena.insert(obstacle(0.0, 1));
    let b = arena.insert(obstacle(0.0, 2));
    let c = arena.insert(obstacle(0.0, 3));
    arena.remove(b);

    let seen: Vec<_> = arena.iter().map(|(id, _)| id).collect();
    assert_eq!(seen, vec![a, c]);
}

#[test]
fn positions_update_in_place() {
    let mut arena = ObstacleArena::new();
    let id = arena.insert(obstacle(0.0, 7));
    arena.get_mut(id).unwrap().row = 4.5;
    assert_eq!(arena.get(id).unwrap().row, 4.5);
}
