use t9_core::keypad::is_key_digit;

pub(super) mod key {
    pub const CYCLE: char = '0';
    pub const BACKSPACE: char = '*';
    pub const CONFIRM: char = '#';
}

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Letter key `2`..=`9`.
    Digit(char),
    /// `0`: next alternative.
    Cycle,
    /// `*`: drop the last digit, or the last confirmed word when no digits are pending.
    Backspace,
    /// `#`: commit the selected alternative to the sentence.
    Confirm,
}

impl KeyEvent {
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => d,
            Self::Cycle => key::CYCLE,
            Self::Backspace => key::BACKSPACE,
            Self::Confirm => key::CONFIRM,
        }
    }
}

impl TryFrom<char> for KeyEvent {
    type Error = SessionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            key::CYCLE => Ok(Self::Cycle),
            key::BACKSPACE => Ok(Self::Backspace),
            key::CONFIRM => Ok(Self::Confirm),
            d if is_key_digit(d) => Ok(Self::Digit(d)),
            other => Err(SessionError::InvalidKey(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid key {0:?} (expected 2-9, 0, * or #)")]
    InvalidKey(char),
}

/// Response from `handle_key`, returned to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// Current display string: the selected word, or one placeholder per digit.
    pub display: String,
    /// Word appended to the sentence by this key.
    pub commit: Option<String>,
    /// Word removed from the end of the sentence by this key.
    pub retracted: Option<String>,
}

pub(super) struct CandidateState {
    pub(super) surfaces: Vec<String>,
    pub(super) selected: usize,
}

impl CandidateState {
    pub(super) fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            selected: 0,
        }
    }

    pub(super) fn clear(&mut self) {
        self.surfaces.clear();
        self.selected = 0;
    }

    pub(super) fn replace(&mut self, surfaces: Vec<&str>) {
        self.surfaces.clear();
        self.surfaces.extend(surfaces.into_iter().map(str::to_owned));
        self.selected = 0;
    }

    pub(super) fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub(super) fn current(&self) -> Option<&str> {
        self.surfaces.get(self.selected).map(String::as_str)
    }

    pub(super) fn cycle(&mut self) {
        self.selected = cyclic_index(self.selected, 1, self.surfaces.len());
    }
}

pub(super) fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current as i64;
    let n = count as i64;
    (((c + delta as i64) % n + n) % n) as usize
}
