// Frameworks layer: process setup, page markup, the headless browser and the CLI.

pub mod browser;
pub mod cli;
pub mod config;
pub mod pages;
pub mod runtime;
