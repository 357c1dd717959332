pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::browser::{Action, Browser, BrowserError, Visit};
pub use frameworks::cli::run;
