use std::path::PathBuf;

use clap::Parser;

use t9_cli::commands::{config_ops, session_ops};

/// Keypad predictive-text shell.
///
/// Type one key per line: 2-9 to spell, 0 for the next alternative,
/// * to erase, # to confirm. `!clear` drops the pending word.
#[derive(Parser)]
#[command(name = "t9")]
struct Cli {
    /// Word list or compiled index (defaults to dictionary.default_path)
    dict: Option<String>,
    /// Run this key sequence instead of reading stdin
    #[arg(long)]
    keys: Option<String>,
    /// List the alternatives after every key
    #[arg(long)]
    list: bool,
    /// Settings TOML overriding the defaults
    #[arg(long)]
    settings: Option<String>,
    /// Write a JSONL trace into this directory (requires the `trace` feature)
    #[arg(long)]
    trace_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref file) = cli.settings {
        config_ops::settings_load(file);
    }
    if let Some(ref dir) = cli.trace_dir {
        t9_engine::init_tracing(dir);
    }

    session_ops::shell(cli.dict.as_deref(), cli.keys.as_deref(), cli.list);
}
