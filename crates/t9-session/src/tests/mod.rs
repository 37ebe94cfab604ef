mod basic;

use std::sync::Arc;

use t9_core::dict::CandidateIndex;

use super::InputSession;

pub(super) fn make_test_index() -> Arc<CandidateIndex> {
    Arc::new(
        CandidateIndex::build([
            "good", "home", "gone", "hoof", "in", "go", "cat", "act", "bat", "a", "i",
        ])
        .unwrap(),
    )
}

pub(super) fn make_session() -> InputSession {
    InputSession::new(make_test_index())
}

/// Push every key in `keys`, returning the last display string.
pub(super) fn push_keys(session: &mut InputSession, keys: &str) -> String {
    let mut display = String::new();
    for k in keys.chars() {
        display = session.push_key(k).unwrap();
    }
    display
}
