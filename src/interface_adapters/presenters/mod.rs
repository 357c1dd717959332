// Pure renderers: domain data in, view nodes out.

pub mod ids;
pub mod nav;
pub mod place_detail;
pub mod places;

pub use nav::render_nav_control;
pub use place_detail::{rating_stars, render_add_review_link, render_place_detail, render_reviews};
pub use places::{
    CardVisibility, format_price, place_card_id, price_filter_visibility, render_place_list,
    render_price_filter,
};
