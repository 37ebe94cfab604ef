use tracing::{debug, debug_span};

use t9_core::keypad::is_key_digit;

use super::types::{KeyEvent, KeyResponse, SessionError};
use super::InputSession;

impl InputSession {
    /// Re-resolve candidates for the current digits; selection goes back to the first.
    fn refresh_candidates(&mut self) {
        let found = self.index.lookup(&self.digits);
        self.candidates.replace(found);
    }

    /// Process a key event. Returns the display string plus any sentence change.
    pub fn handle_key(&mut self, event: KeyEvent) -> Result<KeyResponse, SessionError> {
        let _span = debug_span!("handle_key", ?event).entered();

        let mut resp = KeyResponse::default();
        match event {
            KeyEvent::Digit(d) => {
                if !is_key_digit(d) {
                    return Err(SessionError::InvalidKey(d));
                }
                self.digits.push(d);
                self.refresh_candidates();
            }

            KeyEvent::Cycle => self.candidates.cycle(),

            KeyEvent::Backspace => resp.retracted = self.handle_backspace(),

            KeyEvent::Confirm => resp.commit = self.handle_confirm(),
        }

        resp.display = self.display();
        Ok(resp)
    }

    fn handle_backspace(&mut self) -> Option<String> {
        if self.digits.pop().is_some() {
            self.refresh_candidates();
            return None;
        }
        let word = self.sentence.pop()?;
        debug!(word = %word, "retracted");
        Some(word)
    }

    fn handle_confirm(&mut self) -> Option<String> {
        let word = self.candidates.current().map(str::to_owned);
        if let Some(ref w) = word {
            debug!(word = %w, "confirmed");
            self.sentence.push(w.clone());
        }
        self.clear();
        word
    }
}
