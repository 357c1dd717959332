// Element ids shared by the page skeletons, renderers and controllers.

pub const LOGIN_LINK: &str = "login-link";
pub const LOGOUT_BUTTON: &str = "logout-button";

pub const PRICE_FILTER: &str = "price-filter";
pub const PLACES_LIST: &str = "places-list";

pub const LOGIN_FORM: &str = "login-form";
pub const EMAIL_INPUT: &str = "email";
pub const PASSWORD_INPUT: &str = "password";
pub const LOGIN_SUBMIT: &str = "login-submit";
pub const ERROR_MESSAGE: &str = "error-message";

pub const PLACE_DETAILS: &str = "place-details";
pub const REVIEWS: &str = "reviews";
pub const ADD_REVIEW: &str = "add-review";

pub const REVIEW_FORM: &str = "review-form";
pub const RATING_INPUT: &str = "rating";
pub const REVIEW_TEXT: &str = "review-text";
pub const REVIEW_SUBMIT: &str = "review-submit";
