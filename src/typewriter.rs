pub const TYPE_DELAY_MS: u64 = 100;
pub const DELETE_DELAY_MS: u64 = 50;
pub const PAUSE_DELAY_MS: u64 = 1500;

/// Types out each phrase one character at a time, holds it, erases it, then
/// moves on to the next phrase (wrapping around).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    // visible length in chars, not bytes
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or_default()
    }

    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advances one step and returns how long to wait before the next one.
    pub fn tick(&mut self) -> u64 {
        if self.phrases.is_empty() {
            return PAUSE_DELAY_MS;
        }
        let len = self.phrase().chars().count();
        if self.deleting {
            if self.shown == 0 {
                self.deleting = false;
                self.index = (self.index + 1) % self.phrases.len();
                return TYPE_DELAY_MS;
            }
            self.shown -= 1;
            DELETE_DELAY_MS
        } else if self.shown >= len {
            self.deleting = true;
            PAUSE_DELAY_MS
        } else {
            self.shown += 1;
            TYPE_DELAY_MS
        }
    }
}
