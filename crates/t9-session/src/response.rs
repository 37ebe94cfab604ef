use t9_core::settings::settings;

use super::InputSession;

impl InputSession {
    /// The selected candidate, or one placeholder per pending digit when
    /// nothing matches (empty when no digits are pending).
    pub fn display(&self) -> String {
        match self.candidates.current() {
            Some(word) => word.to_owned(),
            None => {
                let placeholder = settings().display.placeholder();
                std::iter::repeat(placeholder)
                    .take(self.digits.chars().count())
                    .collect()
            }
        }
    }

    /// Confirmed words joined by the separator, followed by the pending
    /// display if anything is pending. Read-only.
    pub fn build_sentence(&self) -> String {
        let separator = settings().display.separator.as_str();
        let mut out = self.sentence.join(separator);
        if !self.digits.is_empty() || !self.candidates.is_empty() {
            if !out.is_empty() {
                out.push_str(separator);
            }
            out.push_str(&self.display());
        }
        out
    }
}
