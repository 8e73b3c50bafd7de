pub mod cli;
pub mod command;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod script;
