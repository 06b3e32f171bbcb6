//! Year-keyed progression tables: garbage spawn cadence, weapon unlocks, and
//! the historical phrases shown in the info panel.

use crate::entities::Gun;

/// The calendar starts here.
pub const START_YEAR: u32 = 1957;

/// Ticks per in-game year; also the spawner's fallback wait for years with no
/// delay entry.
pub const YEAR_DURATION: u32 = 15;

/// From this year on the craft fires the full spread instead of a single gun.
pub const GUN_UPGRADE_YEAR: u32 = 2020;

// ── Garbage spawn delays ─────────────────────────────────────────────────────

/// Ticks between garbage spawns for a given year, monotonically non-increasing.
/// `None` for the early years, before anything was launched into orbit.
pub fn garbage_delay_tics(year: u32) -> Option<u32> {
    match year {
        0..=1960 => None,
        1961..=1968 => Some(20),
        1969..=1980 => Some(14),
        1981..=1994 => Some(10),
        1995..=2009 => Some(8),
        2010..=2019 => Some(6),
        _ => Some(2),
    }
}

// ── Guns ─────────────────────────────────────────────────────────────────────

const FORWARD_GUN: [Gun; 1] = [Gun { rows_speed: -2.0, columns_speed: 0.0 }];

/// Eleven trajectories covering a forward cone.
const SPREAD_GUNS: [Gun; 11] = [
    Gun { rows_speed: -2.0, columns_speed: 0.0 },
    Gun { rows_speed: -2.0, columns_speed: -0.5 },
    Gun { rows_speed: -2.0, columns_speed: 0.5 },
    Gun { rows_speed: -2.0, columns_speed: -1.0 },
    Gun { rows_speed: -2.0, columns_speed: 1.0 },
    Gun { rows_speed: -1.5, columns_speed: -1.5 },
    Gun { rows_speed: -1.5, columns_speed: 1.5 },
    Gun { rows_speed: -1.0, columns_speed: -2.0 },
    Gun { rows_speed: -1.0, columns_speed: 2.0 },
    Gun { rows_speed: -0.5, columns_speed: -2.0 },
    Gun { rows_speed: -0.5, columns_speed: 2.0 },
];

/// Pick the volley count and gun set for a year. Looked up fresh on every
/// trigger, never cached.
pub fn choose_guns(year: u32) -> (u32, &'static [Gun]) {
    if year < GUN_UPGRADE_YEAR {
        (2, &FORWARD_GUN)
    } else {
        (3, &SPREAD_GUNS)
    }
}

// ── Historical phrases ───────────────────────────────────────────────────────

const PHRASES: [(u32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// The most recent phrase dated at or before `year`, if any.
pub fn phrase_for(year: u32) -> Option<&'static str> {
    PHRASES
        .iter()
        .rev()
        .find(|(phrase_year, _)| *phrase_year <= year)
        .map(|(_, phrase)| *phrase)
}
