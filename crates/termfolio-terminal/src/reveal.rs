//! Typed-output reveal: progressive display of a command's output.
//!
//! The full text is split up front into chunk boundaries according to a
//! [`RevealPolicy`]. Each [`Reveal::advance`] publishes one more chunk and
//! reports the delay until the next one. A reveal moves
//! `Idle -> Revealing -> Complete`, or to `Cancelled` when a newer
//! submission forces it to finish early.

use std::time::Duration;

use termfolio_types::config::RevealConfig;

/// How the output was produced, which decides the policy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Ordinary command text.
    Text,
    /// The file listing.
    Listing,
}

/// Chunking and cadence for one reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPolicy {
    /// One character per step.
    Chars { delay: Duration },
    /// One word (plus its trailing whitespace) per step.
    Words { delay: Duration },
    /// One line per step, accelerating from `start` down to `floor`.
    Lines {
        start: Duration,
        step: Duration,
        floor: Duration,
    },
    /// One listing line per step.
    Listing { delay: Duration },
}

impl RevealPolicy {
    /// Pick the policy for `text` from its length.
    ///
    /// Short outputs type character by character. Medium outputs go word by
    /// word, faster the longer they are. Long outputs scroll line by line.
    pub fn select(kind: RevealKind, text: &str, speed: Duration, config: &RevealConfig) -> Self {
        if kind == RevealKind::Listing {
            return Self::Listing {
                delay: speed * config.listing_factor,
            };
        }
        let len = text.chars().count();
        if len < config.short_threshold {
            Self::Chars { delay: speed }
        } else if len <= config.long_threshold {
            let scaled = speed.as_nanos() * config.short_threshold as u128 / len.max(1) as u128;
            let scaled = Duration::from_nanos(u64::try_from(scaled).unwrap_or(u64::MAX));
            Self::Words {
                delay: scaled.max(Duration::from_millis(config.word_floor_ms)),
            }
        } else {
            Self::Lines {
                start: Duration::from_millis(config.line_start_ms),
                step: Duration::from_millis(config.line_step_ms),
                floor: Duration::from_millis(config.line_floor_ms),
            }
        }
    }

    /// Delay after the `applied`-th increment (1-based).
    pub fn delay_after(&self, applied: usize) -> Duration {
        match *self {
            Self::Chars { delay } | Self::Words { delay } | Self::Listing { delay } => delay,
            Self::Lines { start, step, floor } => {
                let n = u32::try_from(applied.saturating_sub(1)).unwrap_or(u32::MAX);
                start
                    .saturating_sub(step.saturating_mul(n))
                    .max(floor)
            },
        }
    }

    /// Byte offsets at which each increment ends. The last one is
    /// `text.len()`; an empty text has no stops.
    pub fn stops(&self, text: &str) -> Vec<usize> {
        match self {
            Self::Chars { .. } => text.char_indices().map(|(i, c)| i + c.len_utf8()).collect(),
            Self::Words { .. } => word_stops(text),
            Self::Lines { .. } | Self::Listing { .. } => line_stops(text),
        }
    }
}

/// A word ends where the next non-whitespace run begins. Leading whitespace
/// rides along with the first word.
fn word_stops(text: &str) -> Vec<usize> {
    let mut stops = Vec::new();
    let mut seen_word = false;
    let mut prev_space = false;
    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        if !space && prev_space && seen_word {
            stops.push(i);
        }
        if !space {
            seen_word = true;
        }
        prev_space = space;
    }
    if !text.is_empty() {
        stops.push(text.len());
    }
    stops
}

fn line_stops(text: &str) -> Vec<usize> {
    let mut stops: Vec<usize> = text.match_indices('\n').map(|(i, _)| i + 1).collect();
    if !text.is_empty() && !text.ends_with('\n') {
        stops.push(text.len());
    }
    stops
}

/// Lifecycle of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Revealing { position: usize },
    Cancelled,
    Complete,
}

/// One published increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Increment<'a> {
    /// Prefix of the full text shown so far.
    pub revealed: &'a str,
    /// Set only on the final increment.
    pub complete: bool,
    /// Time until the next increment; `None` once complete.
    pub delay: Option<Duration>,
}

/// Progressive reveal of one output.
#[derive(Debug, Clone)]
pub struct Reveal {
    full: String,
    stops: Vec<usize>,
    applied: usize,
    policy: RevealPolicy,
    state: RevealState,
}

impl Reveal {
    pub fn new(full: String, kind: RevealKind, speed: Duration, config: &RevealConfig) -> Self {
        let policy = RevealPolicy::select(kind, &full, speed, config);
        log::debug!("reveal {} chars with {policy:?}", full.chars().count());
        Self::with_policy(full, policy)
    }

    pub fn with_policy(full: String, policy: RevealPolicy) -> Self {
        let stops = policy.stops(&full);
        Self {
            full,
            stops,
            applied: 0,
            policy,
            state: RevealState::Idle,
        }
    }

    /// Publish the next chunk. `None` once complete or cancelled.
    pub fn advance(&mut self) -> Option<Increment<'_>> {
        if matches!(self.state, RevealState::Complete | RevealState::Cancelled) {
            return None;
        }
        let end = match self.stops.get(self.applied) {
            Some(&end) => end,
            None => {
                self.state = RevealState::Complete;
                return Some(Increment {
                    revealed: &self.full,
                    complete: true,
                    delay: None,
                });
            },
        };
        self.applied += 1;
        let complete = self.applied == self.stops.len();
        let delay = if complete {
            self.state = RevealState::Complete;
            None
        } else {
            self.state = RevealState::Revealing { position: end };
            Some(self.policy.delay_after(self.applied))
        };
        Some(Increment {
            revealed: &self.full[..end],
            complete,
            delay,
        })
    }

    /// Stop revealing and hand back the full text.
    pub fn cancel(&mut self) -> &str {
        if self.state != RevealState::Complete {
            self.state = RevealState::Cancelled;
        }
        &self.full
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Number of increments needed to finish (at least one).
    pub fn chunk_count(&self) -> usize {
        self.stops.len().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: Duration = Duration::from_millis(15);

    fn drain(reveal: &mut Reveal) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(inc) = reveal.advance() {
            out.push(inc.revealed.to_string());
        }
        out
    }

    #[test]
    fn short_text_types_per_char() {
        let config = RevealConfig::default();
        let policy = RevealPolicy::select(RevealKind::Text, "joseph-hughes", SPEED, &config);
        assert_eq!(policy, RevealPolicy::Chars { delay: SPEED });
    }

    #[test]
    fn listing_uses_listing_factor() {
        let config = RevealConfig::default();
        let policy = RevealPolicy::select(RevealKind::Listing, "[TXT] a\n[TXT] b", SPEED, &config);
        assert_eq!(
            policy,
            RevealPolicy::Listing {
                delay: Duration::from_millis(45)
            }
        );
    }

    #[test]
    fn medium_text_goes_word_by_word_and_speeds_up() {
        let config = RevealConfig::default();
        let at_threshold = "x".repeat(200);
        let longer = "x ".repeat(300);
        let a = RevealPolicy::select(RevealKind::Text, &at_threshold, SPEED, &config);
        let b = RevealPolicy::select(RevealKind::Text, &longer, SPEED, &config);
        assert_eq!(a, RevealPolicy::Words { delay: SPEED });
        assert_eq!(b, RevealPolicy::Words { delay: Duration::from_millis(5) });
    }

    #[test]
    fn word_delay_never_drops_below_floor() {
        let config = RevealConfig::default();
        let text = "y".repeat(1500);
        let policy = RevealPolicy::select(RevealKind::Text, &text, SPEED, &config);
        assert_eq!(policy, RevealPolicy::Words { delay: Duration::from_millis(4) });
    }

    #[test]
    fn long_text_goes_line_by_line() {
        let config = RevealConfig::default();
        let text = "line of text\n".repeat(200);
        let policy = RevealPolicy::select(RevealKind::Text, &text, SPEED, &config);
        assert!(matches!(policy, RevealPolicy::Lines { .. }));
    }

    #[test]
    fn line_delay_accelerates_to_floor() {
        let policy = RevealPolicy::Lines {
            start: Duration::from_millis(30),
            step: Duration::from_millis(1),
            floor: Duration::from_millis(8),
        };
        assert_eq!(policy.delay_after(1), Duration::from_millis(30));
        assert_eq!(policy.delay_after(2), Duration::from_millis(29));
        assert_eq!(policy.delay_after(23), Duration::from_millis(8));
        assert_eq!(policy.delay_after(500), Duration::from_millis(8));
    }

    #[test]
    fn char_reveal_sequence() {
        let mut reveal = Reveal::with_policy("héy".to_string(), RevealPolicy::Chars { delay: SPEED });
        assert_eq!(drain(&mut reveal), vec!["h", "hé", "héy"]);
        assert_eq!(reveal.state(), RevealState::Complete);
    }

    #[test]
    fn word_chunks_keep_trailing_whitespace() {
        let stops = word_stops("  hello big\n world");
        let text = "  hello big\n world";
        let chunks: Vec<&str> = stops.iter().map(|&e| &text[..e]).collect();
        assert_eq!(chunks, vec!["  hello ", "  hello big\n ", "  hello big\n world"]);
    }

    #[test]
    fn line_chunks_include_newline() {
        let text = "a\nb\n\nc";
        let chunks: Vec<&str> = line_stops(text).iter().map(|&e| &text[..e]).collect();
        assert_eq!(chunks, vec!["a\n", "a\nb\n", "a\nb\n\n", "a\nb\n\nc"]);
        assert_eq!(line_stops("x\n"), vec![2]);
    }

    #[test]
    fn only_final_increment_is_complete() {
        let mut reveal = Reveal::with_policy("ab".to_string(), RevealPolicy::Chars { delay: SPEED });
        let first = reveal.advance().unwrap();
        assert!(!first.complete);
        assert_eq!(first.delay, Some(SPEED));
        let second = reveal.advance().unwrap();
        assert!(second.complete);
        assert_eq!(second.delay, None);
        assert!(reveal.advance().is_none());
    }

    #[test]
    fn empty_output_completes_in_one_step() {
        let mut reveal = Reveal::new(String::new(), RevealKind::Text, SPEED, &RevealConfig::default());
        assert_eq!(reveal.chunk_count(), 1);
        let inc = reveal.advance().unwrap();
        assert_eq!(inc.revealed, "");
        assert!(inc.complete);
        assert!(reveal.advance().is_none());
    }

    #[test]
    fn cancel_returns_full_text() {
        let mut reveal = Reveal::with_policy("abcdef".to_string(), RevealPolicy::Chars { delay: SPEED });
        reveal.advance();
        reveal.advance();
        assert_eq!(reveal.state(), RevealState::Revealing { position: 2 });
        assert_eq!(reveal.cancel(), "abcdef");
        assert_eq!(reveal.state(), RevealState::Cancelled);
        assert!(reveal.advance().is_none());
    }

    #[test]
    fn cancel_after_complete_stays_complete() {
        let mut reveal = Reveal::with_policy("a".to_string(), RevealPolicy::Chars { delay: SPEED });
        drain(&mut reveal);
        reveal.cancel();
        assert_eq!(reveal.state(), RevealState::Complete);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn increments_are_monotonic_prefixes(text in "[a-zA-Z .,\n\t]{0,400}", listing in any::<bool>()) {
                let kind = if listing { RevealKind::Listing } else { RevealKind::Text };
                let mut reveal = Reveal::new(text.clone(), kind, SPEED, &RevealConfig::default());
                let mut prev = 0usize;
                let mut last = String::new();
                let mut completes = 0;
                while let Some(inc) = reveal.advance() {
                    prop_assert!(text.starts_with(inc.revealed));
                    prop_assert!(inc.revealed.len() >= prev);
                    prev = inc.revealed.len();
                    if inc.complete {
                        completes += 1;
                    }
                    last = inc.revealed.to_string();
                }
                prop_assert_eq!(completes, 1);
                prop_assert_eq!(last, text);
            }

            #[test]
            fn chunk_count_matches_increments(text in "\\PC{0,120}") {
                let mut reveal = Reveal::new(text, RevealKind::Text, SPEED, &RevealConfig::default());
                let expected = reveal.chunk_count();
                let mut n = 0;
                while reveal.advance().is_some() {
                    n += 1;
                }
                prop_assert_eq!(n, expected);
            }
        }
    }
}
