use clap::{Parser, Subcommand};

use t9_cli::commands::{config_ops, dict_ops};

#[derive(Parser)]
#[command(name = "t9dict", about = "Keypad dictionary build tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a word list (one word per line) into an index file
    Compile {
        /// Input word list
        words_file: String,
        /// Output index file
        output_file: String,
    },
    /// Show word, node and terminal counts for a word list or index file
    Info {
        /// Word list or compiled index
        file: String,
    },
    /// List the words matching a digit prefix, in dictionary order
    Lookup {
        /// Word list or compiled index
        dict_file: String,
        /// Digits typed so far (2-9)
        digits: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the key digits for each word
    Encode {
        /// Lowercase words
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            words_file,
            output_file,
        } => dict_ops::compile(&words_file, &output_file),
        Command::Info { file } => dict_ops::info(&file),
        Command::Lookup {
            dict_file,
            digits,
            json,
        } => dict_ops::lookup(&dict_file, &digits, json),
        Command::Encode { words } => dict_ops::encode(&words),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
