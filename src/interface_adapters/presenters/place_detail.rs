use crate::domain::{Element, Node, PlaceDetail, Review, Route};
use crate::interface_adapters::presenters::places::format_price;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';
const MAX_STARS: i64 = 5;

/// `rating` filled stars then `5 - rating` empty ones, rating clamped to 0..=5.
pub fn rating_stars(rating: i64) -> String {
    let filled = rating.clamp(0, MAX_STARS) as usize;
    let empty = MAX_STARS as usize - filled;
    let mut stars = String::with_capacity((filled + empty) * FILLED_STAR.len_utf8());
    stars.extend(std::iter::repeat_n(FILLED_STAR, filled));
    stars.extend(std::iter::repeat_n(EMPTY_STAR, empty));
    stars
}

pub fn render_place_detail(place: &PlaceDetail) -> Vec<Node> {
    let summary = &place.summary;
    let host = place
        .owner
        .as_ref()
        .and_then(|owner| owner.full_name())
        .unwrap_or_else(|| "Unknown host".to_string());

    let mut info = Element::new("div")
        .class("place-info")
        .child(Element::new("h1").class("place-title").text(&summary.title))
        .child(
            Element::new("p")
                .class("place-host")
                .text(format!("Host: {host}")),
        )
        .child(
            Element::new("p")
                .class("place-price")
                .text(format!("Price per night: ${}", format_price(summary.price))),
        )
        .child(
            Element::new("p")
                .class("place-description")
                .text(&summary.description),
        );

    if let Some(location) = summary.location_label() {
        info = info.child(
            Element::new("p")
                .class("place-location")
                .text(format!("Location: {location}")),
        );
    }

    let facts = place_facts(place);
    if !facts.is_empty() {
        info = info.child(
            Element::new("p")
                .class("place-facts")
                .text(facts.join(" · ")),
        );
    }

    let amenities: Vec<Node> = if place.amenities.is_empty() {
        vec![Element::new("li").text("No amenities listed.").into()]
    } else {
        place
            .amenities
            .iter()
            .map(|amenity| Element::new("li").text(&amenity.name).into())
            .collect()
    };

    vec![
        info.into(),
        Element::new("div")
            .class("amenities")
            .child(Element::new("h3").text("Amenities"))
            .child(Element::new("ul").children(amenities))
            .into(),
    ]
}

fn place_facts(place: &PlaceDetail) -> Vec<String> {
    let mut facts = Vec::new();
    if let Some(rooms) = place.rooms {
        facts.push(format!("Rooms: {rooms}"));
    }
    if let Some(capacity) = place.capacity {
        facts.push(format!("Capacity: {capacity}"));
    }
    if let Some(surface) = place.surface {
        facts.push(format!("Surface: {} m²", format_price(surface)));
    }
    facts
}

/// Review cards, or an explicit message when there are none.
pub fn render_reviews(reviews: &[Review]) -> Vec<Node> {
    let heading: Node = Element::new("h2").text("Reviews").into();
    if reviews.is_empty() {
        return vec![
            heading,
            Element::new("p")
                .class("no-reviews")
                .text("No reviews yet.")
                .into(),
        ];
    }

    std::iter::once(heading)
        .chain(reviews.iter().map(render_review_card))
        .collect()
}

fn render_review_card(review: &Review) -> Node {
    Element::new("div")
        .class("review-card")
        .child(
            Element::new("p")
                .class("review-author")
                .child(Element::new("strong").text(review.author.display_name())),
        )
        .child(
            Element::new("p")
                .class("review-rating")
                .attr("aria-label", format!("{} out of 5", review.rating.clamp(0, MAX_STARS)))
                .text(rating_stars(review.rating)),
        )
        .child(Element::new("p").class("review-text").text(&review.text))
        .into()
}

pub fn render_add_review_link(place_id: &str) -> Vec<Node> {
    vec![
        Element::new("a")
            .class("add-review-button")
            .attr("href", Route::add_review(place_id).href())
            .text("Add a review")
            .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amenity, Person, PlaceSummary, ReviewAuthor};

    fn review(rating: i64, author: ReviewAuthor) -> Review {
        Review {
            text: "Nice".to_string(),
            rating,
            author,
        }
    }

    fn place() -> PlaceDetail {
        PlaceDetail {
            summary: PlaceSummary {
                id: "p1".to_string(),
                title: "Loft".to_string(),
                description: "Top floor".to_string(),
                price: 90.0,
                location: None,
                latitude: None,
                longitude: None,
            },
            owner: Some(Person {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            }),
            amenities: vec![Amenity {
                id: None,
                name: "Wifi".to_string(),
            }],
            rooms: Some(2),
            capacity: None,
            surface: None,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn rating_stars_has_exactly_rating_filled_glyphs() {
        for rating in 0..=5 {
            let stars = rating_stars(rating);
            assert_eq!(stars.chars().filter(|c| *c == '★').count() as i64, rating);
            assert_eq!(stars.chars().filter(|c| *c == '☆').count() as i64, 5 - rating);
        }
    }

    #[test]
    fn rating_stars_clamps_out_of_range_values() {
        assert_eq!(rating_stars(-3), "☆☆☆☆☆");
        assert_eq!(rating_stars(9), "★★★★★");
    }

    #[test]
    fn when_reviews_are_empty_then_message_and_no_cards_are_rendered() {
        let nodes = render_reviews(&[]);
        let text: String = nodes.iter().map(Node::text_content).collect();
        assert!(text.contains("No reviews yet."));
        assert!(
            nodes
                .iter()
                .filter_map(Node::as_element)
                .all(|node| node.find_all_by_class("review-card").is_empty())
        );
    }

    #[test]
    fn when_reviews_exist_then_one_card_per_review_with_resolved_author() {
        let nodes = render_reviews(&[
            review(4, ReviewAuthor::Person("Alan Turing".to_string())),
            review(2, ReviewAuthor::Anonymous),
        ]);
        let cards: Vec<_> = nodes
            .iter()
            .filter_map(Node::as_element)
            .filter(|node| node.has_class("review-card"))
            .collect();

        assert_eq!(cards.len(), 2);
        assert!(cards[0].text_content().starts_with("Alan Turing★★★★☆"));
        assert!(cards[1].text_content().starts_with("Anonymous★★☆☆☆"));
    }

    #[test]
    fn detail_shows_host_price_amenities_and_facts() {
        let text: String = render_place_detail(&place())
            .iter()
            .map(Node::text_content)
            .collect();
        assert!(text.contains("Loft"));
        assert!(text.contains("Host: Ada Lovelace"));
        assert!(text.contains("Price per night: $90"));
        assert!(text.contains("Wifi"));
        assert!(text.contains("Rooms: 2"));
        assert!(!text.contains("Capacity"));
    }

    #[test]
    fn when_owner_and_amenities_are_missing_then_fallbacks_are_shown() {
        let detail = PlaceDetail {
            owner: None,
            amenities: Vec::new(),
            ..place()
        };
        let text: String = render_place_detail(&detail)
            .iter()
            .map(Node::text_content)
            .collect();
        assert!(text.contains("Host: Unknown host"));
        assert!(text.contains("No amenities listed."));
    }

    #[test]
    fn add_review_link_targets_the_review_page() {
        let nodes = render_add_review_link("p1");
        let link = nodes[0].as_element().expect("expected link");
        assert_eq!(link.get_attr("href"), Some("add_review.html?id=p1"));
    }
}
