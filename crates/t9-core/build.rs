const SETTINGS_PATH: &str = "src/default_settings.toml";
const SETTINGS_SECTIONS: [&str; 3] = ["display", "candidates", "dictionary"];

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS_PATH}");
    check_settings(include_str!("src/default_settings.toml"));
}

fn check_settings(content: &str) {
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("{SETTINGS_PATH} contains invalid TOML: {e}"),
    };
    for section in SETTINGS_SECTIONS {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("{SETTINGS_PATH} is missing the [{section}] table");
        }
    }
}
