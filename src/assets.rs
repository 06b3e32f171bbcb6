//! Frame assets: compiled-in defaults, optionally replaced by an
//! `animations/` directory next to the process.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{ensure, Context, Result};

use crate::display::Frame;

// ── Built-in art ─────────────────────────────────────────────────────────────

const CRAFT_FRAME_1: &str = r"
     .
    .'.
    |o|
   .'o'.
   |.-.|
   '   '
    ( )
     )
    ( )";

const CRAFT_FRAME_2: &str = r"
     .
    .'.
    |o|
   .'o'.
   |.-.|
   '   '
     (
    ( )
     (";

const GARBAGE_DUCK: &str = r"
 _
( '>
 )(
/ \";

const GARBAGE_LAMP: &str = r"
  ___
 /   \
|_____|
 | | |
 |_|_|";

const GARBAGE_SATELLITE: &str = r"
 .-.
(   )=8
 `-'";

const GARBAGE_TRASH: &str = r"
 ____
|    |
|____|";

const GAME_OVER: &str = r"
  ____    _    __  __  _____    _____     _______ ____
 / ___|  / \  |  \/  || ____|  / _ \ \   / / ____|  _ \
| |  _  / _ \ | |\/| ||  _|   | | | \ \ / /|  _| | |_) |
| |_| |/ ___ \| |  | || |___  | |_| |\ V / | |___|  _ <
 \____/_/   \_\_|  |_||_____|  \___/  \_/  |_____|_| \_\";

const EXPLOSION_FRAMES: [&str; 4] = [
    r"
     (_)
 (  (   (  (
() (  (  )
  ( )  ()",
    r"
     (_)
 (  (   (
  (  (  )
   ( )  ()",
    r"
      (
    (   (
   (     (
    )  (",
    r"
      (
        (
      (
       (",
];

// ── Asset bundle ─────────────────────────────────────────────────────────────

/// Every text frame the simulation draws. Frames are shared into tasks via
/// `Rc`, so spawning an obstacle never copies frame text.
pub struct Assets {
    /// Craft animation cycle; each visual frame appears twice so it is shown
    /// for two ticks.
    pub craft_animation: Vec<Rc<Frame>>,
    pub garbage: Vec<Rc<Frame>>,
    pub game_over: Rc<Frame>,
}

impl Assets {
    /// The compiled-in frame set.
    pub fn builtin() -> Self {
        let frame_1 = Rc::new(Frame::new(trimmed(CRAFT_FRAME_1)));
        let frame_2 = Rc::new(Frame::new(trimmed(CRAFT_FRAME_2)));
        Assets {
            craft_animation: vec![frame_1.clone(), frame_1, frame_2.clone(), frame_2],
            garbage: [GARBAGE_DUCK, GARBAGE_LAMP, GARBAGE_SATELLITE, GARBAGE_TRASH]
                .iter()
                .map(|text| Rc::new(Frame::new(trimmed(text))))
                .collect(),
            game_over: Rc::new(Frame::new(trimmed(GAME_OVER))),
        }
    }

    /// Load frames from an animation directory laid out as
    /// `spaceship_frame_1.txt`, `spaceship_frame_2.txt`, `game_over.txt` and
    /// `garbage/*.txt`.
    pub fn load(dir: &Path) -> Result<Self> {
        let frame_1 = Rc::new(read_frame(&dir.join("spaceship_frame_1.txt"))?);
        let frame_2 = Rc::new(read_frame(&dir.join("spaceship_frame_2.txt"))?);
        let game_over = Rc::new(read_frame(&dir.join("game_over.txt"))?);

        let garbage_dir = dir.join("garbage");
        let mut paths: Vec<PathBuf> = fs::read_dir(&garbage_dir)
            .with_context(|| format!("reading {}", garbage_dir.display()))?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
            .collect();
        paths.sort();
        ensure!(
            !paths.is_empty(),
            "no garbage frames found in {}",
            garbage_dir.display()
        );
        let garbage = paths
            .iter()
            .map(|path| read_frame(path).map(Rc::new))
            .collect::<Result<Vec<_>>>()?;

        Ok(Assets {
            craft_animation: vec![frame_1.clone(), frame_1, frame_2.clone(), frame_2],
            garbage,
            game_over,
        })
    }
}

/// The shared explosion animation, built fresh per explosion.
pub fn explosion_frames() -> Vec<Frame> {
    EXPLOSION_FRAMES
        .iter()
        .map(|text| Frame::new(trimmed(text)))
        .collect()
}

fn read_frame(path: &Path) -> Result<Frame> {
    fs::read_to_string(path)
        .with_context(|| format!("reading frame {}", path.display()))
        .map(Frame::new)
}

// Built-in art is written as raw strings starting with a newline for
// readability; strip that leading newline so extents match the drawn shape.
fn trimmed(text: &str) -> &str {
    text.strip_prefix('\n').unwrap_or(text)
}
