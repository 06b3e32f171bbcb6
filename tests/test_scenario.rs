use orbit_patrol::entities::{Clock, Gun};
use orbit_patrol::scenario::{
    choose_guns, garbage_delay_tics, phrase_for, START_YEAR, YEAR_DURATION,
};

// ── Garbage spawn delays ─────────────────────────────────────────────────────

#[test]
fn early_years_have_no_garbage() {
    assert_eq!(garbage_delay_tics(1957), None);
    assert_eq!(garbage_delay_tics(1960), None);
}

#[test]
fn delay_table_era_boundaries() {
    assert_eq!(garbage_delay_tics(1961), Some(20));
    assert_eq!(garbage_delay_tics(1968), Some(20));
    assert_eq!(garbage_delay_tics(1969), Some(14));
    assert_eq!(garbage_delay_tics(1980), Some(14));
    assert_eq!(garbage_delay_tics(1981), Some(10));
    assert_eq!(garbage_delay_tics(1994), Some(10));
    assert_eq!(garbage_delay_tics(1995), Some(8));
    assert_eq!(garbage_delay_tics(2009), Some(8));
    assert_eq!(garbage_delay_tics(2010), Some(6));
    assert_eq!(garbage_delay_tics(2019), Some(6));
    assert_eq!(garbage_delay_tics(2020), Some(2));
    assert_eq!(garbage_delay_tics(2100), Some(2));
}

#[test]
fn delays_never_increase_over_time() {
    let mut previous = u32::MAX;
    for year in 1961..=2100 {
        let delay = garbage_delay_tics(year).expect("delay exists from 1961 on");
        assert!(delay <= previous, "spawn rate slowed down in {year}");
        previous = delay;
    }
}

// ── Weapon progression ───────────────────────────────────────────────────────

#[test]
fn single_gun_era() {
    let (volley_count, guns) = choose_guns(2019);
    assert_eq!(volley_count, 2);
    assert_eq!(guns, &[Gun { rows_speed: -2.0, columns_speed: 0.0 }]);
}

#[test]
fn spread_era_unlocks_eleven_guns() {
    let (volley_count, guns) = choose_guns(2020);
    assert_eq!(volley_count, 3);
    assert_eq!(guns.len(), 11);
    for expected in [
        Gun { rows_speed: -2.0, columns_speed: 0.0 },
        Gun { rows_speed: -2.0, columns_speed: -1.0 },
        Gun { rows_speed: -2.0, columns_speed: 1.0 },
    ] {
        assert!(guns.contains(&expected), "missing {expected:?}");
    }
}

#[test]
fn every_spread_gun_fires_forward() {
    let (_, guns) = choose_guns(2020);
    assert!(guns.iter().all(|gun| gun.rows_speed < 0.0));
}

// ── Phrases ──────────────────────────────────────────────────────────────────

#[test]
fn phrase_lookup_keeps_latest_event() {
    assert_eq!(phrase_for(1957), Some("First Sputnik"));
    assert_eq!(phrase_for(1965), Some("Gagarin flew!"));
    assert_eq!(phrase_for(1956), None);
    assert_eq!(
        phrase_for(2050),
        Some("Take the plasma gun! Shoot the garbage!")
    );
}

// ── Clock ────────────────────────────────────────────────────────────────────

#[test]
fn clock_rolls_one_year_per_duration() {
    assert_eq!(YEAR_DURATION, 15);
    let mut clock = Clock::new();
    assert_eq!(clock.year, START_YEAR);
    for _ in 0..45 {
        clock.advance();
    }
    assert_eq!(clock.year, 1960);
}
