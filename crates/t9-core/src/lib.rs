pub mod dict;
pub mod keypad;
pub mod settings;
