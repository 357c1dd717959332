// Interface adapters: wire protocol, HTTP client, session storage and view adapters.

pub mod clients;
pub mod document;
pub mod presenters;
pub mod protocol;
pub mod session_store;
