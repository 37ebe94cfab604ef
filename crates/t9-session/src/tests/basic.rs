use super::*;
use crate::types::{cyclic_index, CandidateState};
use crate::{KeyEvent, SessionError};

// --- Digit keys ---

#[test]
fn test_digit_shows_first_candidate() {
    let mut session = make_session();
    assert_eq!(session.push_key('4').unwrap(), "good");
    assert_eq!(session.digits(), "4");
    assert_eq!(
        session.candidates(),
        ["good", "home", "gone", "hoof", "in", "go", "i"]
    );
    assert_eq!(session.selected(), 0);
    assert!(session.is_composing());
}

#[test]
fn test_digit_narrows_candidates() {
    let mut session = make_session();
    push_keys(&mut session, "46");
    assert_eq!(session.candidates().len(), 6);
    push_keys(&mut session, "6");
    assert_eq!(session.candidates(), ["good", "home", "gone", "hoof"]);
}

#[test]
fn test_digit_resets_selection() {
    let mut session = make_session();
    push_keys(&mut session, "400");
    assert_eq!(session.selected(), 2);
    assert_eq!(session.push_key('6').unwrap(), "good");
    assert_eq!(session.selected(), 0);
}

#[test]
fn test_unmatched_digits_show_placeholder() {
    let mut session = make_session();
    assert_eq!(session.push_key('9').unwrap(), "-");
    assert_eq!(session.push_key('9').unwrap(), "--");
    assert!(session.candidates().is_empty());
}

#[test]
fn test_placeholder_after_match_runs_out() {
    let mut session = make_session();
    push_keys(&mut session, "228");
    assert_eq!(session.push_key('2').unwrap(), "----");
}

// --- Cycle (0) ---

#[test]
fn test_cycle_advances_and_wraps() {
    let mut session = make_session();
    push_keys(&mut session, "22");
    assert_eq!(session.push_key('0').unwrap(), "act");
    assert_eq!(session.push_key('0').unwrap(), "bat");
    assert_eq!(session.push_key('0').unwrap(), "cat");
}

#[test]
fn test_cycle_without_candidates_is_noop() {
    let mut session = make_session();
    assert_eq!(session.push_key('0').unwrap(), "");
    assert_eq!(session.selected(), 0);

    push_keys(&mut session, "9");
    assert_eq!(session.push_key('0').unwrap(), "-");
    assert_eq!(session.digits(), "9");
}

// --- Backspace (*) ---

#[test]
fn test_backspace_removes_digit() {
    let mut session = make_session();
    push_keys(&mut session, "466");
    assert_eq!(session.push_key('*').unwrap(), "good");
    assert_eq!(session.digits(), "46");
    assert_eq!(session.candidates().len(), 6);
}

#[test]
fn test_backspace_resets_selection() {
    let mut session = make_session();
    push_keys(&mut session, "4600");
    assert_eq!(session.selected(), 2);
    push_keys(&mut session, "*");
    assert_eq!(session.selected(), 0);
}

#[test]
fn test_backspace_last_digit_empties_candidates() {
    let mut session = make_session();
    push_keys(&mut session, "2");
    assert_eq!(session.push_key('*').unwrap(), "");
    assert!(session.candidates().is_empty());
    assert!(!session.is_composing());
}

#[test]
fn test_backspace_from_unmatched_back_to_match() {
    let mut session = make_session();
    push_keys(&mut session, "2289");
    assert_eq!(session.push_key('*').unwrap(), "cat");
}

#[test]
fn test_backspace_retracts_word_when_idle() {
    let mut session = make_session();
    push_keys(&mut session, "228#");
    assert_eq!(session.sentence(), ["cat"]);

    let resp = session.handle_key(KeyEvent::Backspace).unwrap();
    assert_eq!(resp.retracted.as_deref(), Some("cat"));
    assert_eq!(resp.display, "");
    assert!(session.sentence().is_empty());
}

#[test]
fn test_backspace_prefers_digits_over_sentence() {
    let mut session = make_session();
    push_keys(&mut session, "228#4");
    let resp = session.handle_key(KeyEvent::Backspace).unwrap();
    assert_eq!(resp.retracted, None);
    assert_eq!(session.sentence(), ["cat"]);
    assert_eq!(session.digits(), "");
}

#[test]
fn test_backspace_on_empty_session_is_noop() {
    let mut session = make_session();
    let resp = session.handle_key(KeyEvent::Backspace).unwrap();
    assert_eq!(resp.retracted, None);
    assert_eq!(resp.display, "");
    assert!(session.sentence().is_empty());
}

// --- Confirm (#) ---

#[test]
fn test_confirm_appends_selected() {
    let mut session = make_session();
    push_keys(&mut session, "220");
    let resp = session.handle_key(KeyEvent::Confirm).unwrap();
    assert_eq!(resp.commit.as_deref(), Some("act"));
    assert_eq!(resp.display, "");
    assert_eq!(session.sentence(), ["act"]);
    assert_eq!(session.digits(), "");
    assert!(session.candidates().is_empty());
    assert_eq!(session.selected(), 0);
}

#[test]
fn test_confirm_without_candidates_just_clears() {
    let mut session = make_session();
    push_keys(&mut session, "99");
    let resp = session.handle_key(KeyEvent::Confirm).unwrap();
    assert_eq!(resp.commit, None);
    assert_eq!(resp.display, "");
    assert!(session.sentence().is_empty());
    assert_eq!(session.digits(), "");
}

#[test]
fn test_confirm_on_empty_session() {
    let mut session = make_session();
    assert_eq!(session.push_key('#').unwrap(), "");
    assert!(session.sentence().is_empty());
}

// --- Invalid keys ---

#[test]
fn test_invalid_key_leaves_state_untouched() {
    let mut session = make_session();
    push_keys(&mut session, "228#460");
    let digits = session.digits().to_string();
    let selected = session.selected();
    let sentence = session.sentence().to_vec();

    for bad in ['1', 'a', ' ', '+', '\n'] {
        assert_eq!(session.push_key(bad), Err(SessionError::InvalidKey(bad)));
    }

    assert_eq!(session.digits(), digits);
    assert_eq!(session.selected(), selected);
    assert_eq!(session.sentence(), sentence.as_slice());
    assert_eq!(session.display(), "home");
}

#[test]
fn test_invalid_digit_event_rejected() {
    let mut session = make_session();
    push_keys(&mut session, "4");
    assert_eq!(
        session.handle_key(KeyEvent::Digit('1')),
        Err(SessionError::InvalidKey('1'))
    );
    assert_eq!(session.digits(), "4");
}

// --- Clear ---

#[test]
fn test_clear_keeps_sentence() {
    let mut session = make_session();
    push_keys(&mut session, "228#4660");
    session.clear();
    assert_eq!(session.digits(), "");
    assert!(session.candidates().is_empty());
    assert_eq!(session.selected(), 0);
    assert_eq!(session.sentence(), ["cat"]);
    assert_eq!(session.display(), "");
}

#[test]
fn test_take_sentence() {
    let mut session = make_session();
    push_keys(&mut session, "228#4663#");
    assert_eq!(session.take_sentence(), vec!["cat", "good"]);
    assert!(session.sentence().is_empty());
}

// --- Sentence building ---

#[test]
fn test_build_sentence_empty() {
    let session = make_session();
    assert_eq!(session.build_sentence(), "");
}

#[test]
fn test_build_sentence_pending_only() {
    let mut session = make_session();
    push_keys(&mut session, "99");
    assert_eq!(session.build_sentence(), "--");
}

#[test]
fn test_build_sentence_confirmed_only() {
    let mut session = make_session();
    push_keys(&mut session, "228#4663#");
    assert_eq!(session.build_sentence(), "cat good");
}

#[test]
fn test_build_sentence_with_pending_word() {
    let mut session = make_session();
    push_keys(&mut session, "228#46630");
    assert_eq!(session.build_sentence(), "cat home");
}

#[test]
fn test_build_sentence_with_placeholder() {
    let mut session = make_session();
    push_keys(&mut session, "228#99");
    assert_eq!(session.build_sentence(), "cat --");
}

#[test]
fn test_build_sentence_is_read_only() {
    let mut session = make_session();
    push_keys(&mut session, "228#40");
    let before = session.build_sentence();
    assert_eq!(session.build_sentence(), before);
    assert_eq!(session.selected(), 1);
    assert_eq!(session.digits(), "4");
}

// --- Key events ---

#[test]
fn test_key_event_from_char() {
    assert_eq!(KeyEvent::try_from('0'), Ok(KeyEvent::Cycle));
    assert_eq!(KeyEvent::try_from('*'), Ok(KeyEvent::Backspace));
    assert_eq!(KeyEvent::try_from('#'), Ok(KeyEvent::Confirm));
    for d in '2'..='9' {
        assert_eq!(KeyEvent::try_from(d), Ok(KeyEvent::Digit(d)));
        assert_eq!(KeyEvent::Digit(d).as_char(), d);
    }
    assert_eq!(KeyEvent::try_from('1'), Err(SessionError::InvalidKey('1')));
    assert_eq!(KeyEvent::Confirm.as_char(), '#');
}

#[test]
fn test_cyclic_index() {
    assert_eq!(cyclic_index(0, 1, 3), 1);
    assert_eq!(cyclic_index(2, 1, 3), 0);
    assert_eq!(cyclic_index(0, -1, 3), 2);
    assert_eq!(cyclic_index(5, 1, 0), 0);
}

#[test]
fn test_candidate_state_cycle_on_empty() {
    let mut state = CandidateState::new();
    state.cycle();
    assert_eq!(state.selected, 0);
    assert_eq!(state.current(), None);
}
