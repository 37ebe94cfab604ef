use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use crate::dict_source;
use t9_engine::settings::settings;
use t9_engine::InputSession;

/// Shell command that resets the pending entry.
const CLEAR_COMMAND: &str = "!clear";

/// Run the keypad shell against `dict` (or the configured default word list).
///
/// With `keys`, the script is fed key by key and the shell exits; otherwise
/// each stdin line contributes its first character as one key press.
pub fn shell(dict: Option<&str>, keys: Option<&str>, list: bool) {
    let path = dict.unwrap_or(settings().dictionary.default_path.as_str());
    let index = dict_source::load_index(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error loading {path}: {e}");
        process::exit(1);
    });
    let mut session = InputSession::new(Arc::new(index));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match keys {
        Some(script) => run_script(&mut session, script, list, &mut out),
        None => run_interactive(&mut session, io::stdin().lock(), list, &mut out),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

pub fn run_script<W: Write>(
    session: &mut InputSession,
    script: &str,
    list: bool,
    out: &mut W,
) -> io::Result<()> {
    for key in script.chars().filter(|c| !c.is_whitespace()) {
        step(session, key, list, out)?;
    }
    Ok(())
}

pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut InputSession,
    input: R,
    list: bool,
    out: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == CLEAR_COMMAND {
            session.clear();
            writeln!(out, "{}", session.build_sentence())?;
            continue;
        }
        let Some(key) = line.chars().next() else {
            continue;
        };
        step(session, key, list, out)?;
    }
    Ok(())
}

/// Push one key and print the display string and the sentence.
fn step<W: Write>(session: &mut InputSession, key: char, list: bool, out: &mut W) -> io::Result<()> {
    match session.push_key(key) {
        Ok(display) => {
            writeln!(out, "{display}")?;
            writeln!(out, "{}", session.build_sentence())?;
            if list {
                write_candidates(session, out)?;
            }
        }
        Err(e) => writeln!(out, "! {e}")?,
    }
    Ok(())
}

fn write_candidates<W: Write>(session: &InputSession, out: &mut W) -> io::Result<()> {
    let max = settings().candidates.max_listed;
    let candidates = session.candidates();
    if candidates.is_empty() {
        return Ok(());
    }
    let shown: Vec<String> = candidates
        .iter()
        .enumerate()
        .take(max)
        .map(|(i, w)| {
            if i == session.selected() {
                format!("[{w}]")
            } else {
                w.clone()
            }
        })
        .collect();
    let more = candidates.len().saturating_sub(max);
    if more > 0 {
        writeln!(out, "  {} (+{more})", shown.join(" "))
    } else {
        writeln!(out, "  {}", shown.join(" "))
    }
}
