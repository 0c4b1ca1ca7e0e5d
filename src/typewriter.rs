const TYPE_DELAY_MS: u32 = 100;
const DELETE_DELAY_MS: u32 = 50;
const FULL_PHRASE_PAUSE_MS: u32 = 2_000;
const NEXT_PHRASE_PAUSE_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

/// Types and deletes the phrases in turn, one character per tick.
#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|phrase| phrase.as_ref().chars().collect())
                .collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advances one step and returns the text to show plus the delay until
    /// the next tick. `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<Frame> {
        let phrase = self.phrases.get(self.phrase_index)?;
        let len = phrase.len();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = phrase[..self.char_index].iter().collect();

        let mut delay_ms = if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        if !self.deleting && self.char_index == len {
            delay_ms = FULL_PHRASE_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_PAUSE_MS;
        }

        Some(Frame { text, delay_ms })
    }
}
