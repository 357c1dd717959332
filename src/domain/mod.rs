// Domain layer: listing entities, session credential, view tree and ports.

pub mod errors;
pub mod place;
pub mod ports;
pub mod review;
pub mod route;
pub mod session;
pub mod view;

// Re-export the domain boundary types and ports.
pub use errors::{ApiError, NETWORK_ERROR_MESSAGE, ValidationError};
pub use place::{Amenity, Person, PlaceDetail, PlaceSummary, PriceCeiling};
pub use ports::{Clock, Page, PlacesApi, SessionStore};
pub use review::{NewReview, Rating, Review, ReviewAuthor};
pub use route::Route;
pub use session::SessionToken;
pub use view::{Element, Node};
