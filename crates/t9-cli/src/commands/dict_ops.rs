use std::fs;
use std::path::Path;
use std::process;

use serde::Serialize;

use crate::dict_source;
use t9_engine::dict::is_index_file;
use t9_engine::keypad::{encode_word, is_key_digit, try_encode_word};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Serialize)]
struct LookupOutput<'a> {
    digits: &'a str,
    count: usize,
    candidates: Vec<&'a str>,
}

pub fn compile(words_file: &str, output_file: &str) {
    let words = die!(
        dict_source::read_word_list(Path::new(words_file)),
        "Error reading word list: {}"
    );
    eprintln!("Building index from {} words...", words.len());

    let index = die!(
        t9_engine::dict::CandidateIndex::build(words),
        "Error building index: {}"
    );
    die!(
        index.save(Path::new(output_file)),
        "Error writing index: {}"
    );

    let stats = index.stats();
    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({} nodes, {} terminals, {:.1} KB)",
        stats.nodes,
        stats.terminals,
        file_size as f64 / 1024.0
    );
}

pub fn info(file: &str) {
    let path = Path::new(file);
    let bytes = die!(fs::read(path), "Error reading {file}: {}");
    let kind = if is_index_file(&bytes) {
        "compiled index"
    } else {
        "word list"
    };
    let index = die!(dict_source::load_index(path), "Error loading {file}: {}");
    let stats = index.stats();

    println!("File:      {file} ({kind})");
    println!("Words:     {}", stats.words);
    println!("Nodes:     {}", stats.nodes);
    println!("Terminals: {}", stats.terminals);
    if let Some(longest) = index.words().max_by_key(|w| w.len()) {
        println!("Longest:   {longest} ({})", encode_word(longest));
    }
}

pub fn lookup(file: &str, digits: &str, json: bool) {
    if let Some(bad) = digits.chars().find(|&c| !is_key_digit(c)) {
        eprintln!("Error: {bad:?} is not a letter key (expected 2-9)");
        process::exit(1);
    }
    let index = die!(
        dict_source::load_index(Path::new(file)),
        "Error loading {file}: {}"
    );
    let candidates = index.lookup(digits);

    if json {
        let out = LookupOutput {
            digits,
            count: candidates.len(),
            candidates,
        };
        let text = die!(serde_json::to_string_pretty(&out), "Error encoding JSON: {}");
        println!("{text}");
        return;
    }

    if candidates.is_empty() {
        println!("{digits}: (no candidates)");
        return;
    }
    println!("{digits}: {} candidates", candidates.len());
    for (i, word) in candidates.iter().enumerate() {
        println!("  {:>3}  {word}", i);
    }
}

pub fn encode(words: &[String]) {
    for word in words {
        match try_encode_word(word) {
            Ok(digits) => println!("{word}\t{digits}"),
            Err(ch) => {
                eprintln!("Error: {word:?} contains {ch:?} (expected a-z)");
                process::exit(1);
            }
        }
    }
}
