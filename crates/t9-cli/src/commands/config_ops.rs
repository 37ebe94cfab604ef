use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", t9_engine::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        t9_engine::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: display.placeholder={:?}, display.separator={:?}, candidates.max_listed={}",
        s.display.placeholder(),
        s.display.separator,
        s.candidates.max_listed
    );
}

/// Install a custom settings file before anything reads `settings()`.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        t9_engine::settings::init_custom(content),
        "Error in {file}: {}"
    );
}
