// The clients defined here are reqwest clients for the external back end.

pub mod api;

pub use api::{ApiClient, ApiClientError};
