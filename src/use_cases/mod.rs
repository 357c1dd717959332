// Use cases layer: the page controllers and the auth gate they share.

pub mod auth_gate;
pub mod detail;
pub mod listing;
pub mod login;
pub mod review;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_gate::AuthGate;
pub use detail::DetailController;
pub use listing::ListingController;
pub use login::LoginController;
pub use review::ReviewController;
pub use types::{LoginForm, ReviewForm, SubmitOutcome};
