//! Cosmetic animations: falling-glyph rain and a scripted intrusion log.
//!
//! Commands only return an [`AnimationKind`] sentinel. The session turns it
//! into an [`AnimationProgress`] keyed by [`AnimationId`], so the frame state
//! survives every re-render.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use termfolio_types::config::AnimationConfig;

/// Which animation a command asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Matrix,
    Hack,
}

/// Stable handle of a running animation within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Matrix rain
// ---------------------------------------------------------------------------

/// Half-width katakana and digits: each glyph occupies one terminal cell.
const RAIN_GLYPHS: &[char] = &[
    'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ',
    'ﾃ', 'ﾄ', 'ﾅ', 'ﾆ', 'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', 'ﾏ', 'ﾐ', 'ﾑ', 'ﾒ', 'ﾓ', 'ﾔ',
    'ﾕ', 'ﾖ', 'ﾗ', 'ﾘ', 'ﾙ', 'ﾚ', 'ﾛ', 'ﾜ', 'ﾝ', '0', '1', '2', '3', '4', '5', '6', '7', '8',
    '9',
];

const RAIN_CLOSING: &str = "Wake up, Neo... The Matrix has you.";

struct RainDrop {
    head: i32,
    trail: i32,
    /// Frames per row step; 1 is fastest.
    pace: u32,
}

/// Falling glyph columns over a fixed grid.
pub struct MatrixRain {
    columns: usize,
    rows: usize,
    drops: Vec<RainDrop>,
    grid: Vec<String>,
    frame: u32,
    total_frames: u32,
    rng: StdRng,
}

impl MatrixRain {
    pub fn new(columns: usize, rows: usize, total_frames: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows_i = rows.max(1) as i32;
        let drops = (0..columns)
            .map(|_| RainDrop {
                head: -rng.gen_range(0..rows_i),
                trail: rng.gen_range(3..=rows_i.max(3)),
                pace: rng.gen_range(1..=3),
            })
            .collect();
        let mut rain = Self {
            columns,
            rows,
            drops,
            grid: Vec::new(),
            frame: 0,
            total_frames,
            rng,
        };
        rain.redraw();
        rain
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.total_frames
    }

    pub fn frame_index(&self) -> u32 {
        self.frame
    }

    /// Step every drop and redraw the grid.
    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        self.frame += 1;
        let rows = self.rows as i32;
        for drop in &mut self.drops {
            if self.frame % drop.pace != 0 {
                continue;
            }
            drop.head += 1;
            if drop.head - drop.trail > rows {
                drop.head = -self.rng.gen_range(0..rows.max(1));
                drop.trail = self.rng.gen_range(3..=rows.max(3));
                drop.pace = self.rng.gen_range(1..=3);
            }
        }
        self.redraw();
    }

    fn redraw(&mut self) {
        let mut cells = vec![vec![' '; self.columns]; self.rows];
        for (col, drop) in self.drops.iter().enumerate() {
            let top = (drop.head - drop.trail + 1).max(0);
            let bottom = drop.head.min(self.rows as i32 - 1);
            for row in top..=bottom {
                let glyph = RAIN_GLYPHS[self.rng.gen_range(0..RAIN_GLYPHS.len())];
                cells[row as usize][col] = glyph;
            }
        }
        self.grid = cells.into_iter().map(|row| row.into_iter().collect()).collect();
    }

    /// The lines to draw for the current frame.
    pub fn lines(&self) -> Vec<String> {
        if self.is_finished() {
            vec![RAIN_CLOSING.to_string()]
        } else {
            self.grid.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Hack script
// ---------------------------------------------------------------------------

const HACK_LINES: &[&str] = &[
    "Initializing intrusion toolkit...",
    "Scanning target 10.0.0.42 ...",
    "  port 22/tcp   open   ssh",
    "  port 80/tcp   open   http",
    "  port 443/tcp  open   https",
    "Fingerprinting services... done",
    "Bypassing firewall [##########] 100%",
    "Injecting payload into mainframe...",
    "Decrypting credentials: ********",
    "Escalating privileges... root",
    "Covering tracks... logs wiped",
    "ACCESS GRANTED",
];

/// A fixed log revealed one line per step.
pub struct HackScript {
    shown: usize,
}

impl HackScript {
    pub fn new() -> Self {
        Self { shown: 0 }
    }

    pub fn advance(&mut self) {
        if self.shown < HACK_LINES.len() {
            self.shown += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.shown == HACK_LINES.len()
    }

    pub fn lines(&self) -> Vec<String> {
        HACK_LINES[..self.shown]
            .iter()
            .map(|l| l.to_string())
            .collect()
    }
}

impl Default for HackScript {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

enum Animator {
    Matrix(MatrixRain),
    Hack(HackScript),
}

/// A running animation with its frame timer.
pub struct AnimationProgress {
    kind: AnimationKind,
    animator: Animator,
    interval: Duration,
    due: Option<Instant>,
}

impl AnimationProgress {
    /// Start an animation; its first step is due immediately.
    pub fn new(kind: AnimationKind, id: AnimationId, config: &AnimationConfig, now: Instant) -> Self {
        let (animator, interval) = match kind {
            AnimationKind::Matrix => (
                Animator::Matrix(MatrixRain::new(
                    config.matrix_columns,
                    config.matrix_rows,
                    config.matrix_frames,
                    id.raw(),
                )),
                Duration::from_millis(config.matrix_frame_ms),
            ),
            AnimationKind::Hack => (
                Animator::Hack(HackScript::new()),
                Duration::from_millis(config.hack_line_ms),
            ),
        };
        Self {
            kind,
            animator,
            interval,
            due: Some(now),
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        match &self.animator {
            Animator::Matrix(rain) => rain.is_finished(),
            Animator::Hack(script) => script.is_finished(),
        }
    }

    /// When the next step is due, if any.
    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Advance one step if due. Returns whether the frame changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {},
            _ => return false,
        }
        match &mut self.animator {
            Animator::Matrix(rain) => rain.advance(),
            Animator::Hack(script) => script.advance(),
        }
        self.due = if self.is_finished() {
            None
        } else {
            Some(now + self.interval)
        };
        true
    }

    /// Lines the renderer draws for this animation right now.
    pub fn frame(&self) -> Vec<String> {
        match &self.animator {
            Animator::Matrix(rain) => rain.lines(),
            Animator::Hack(script) => script.lines(),
        }
    }
}
