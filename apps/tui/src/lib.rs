// Modules shared by the binary and its tests
pub mod config;
pub mod prefs;
