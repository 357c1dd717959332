use crate::domain::{Element, Node, PlaceSummary, PriceCeiling, Route};

// Ceilings offered by the price filter, plus "All".
pub const PRICE_FILTER_OPTIONS: &[u32] = &[10, 50, 100];

/// Visibility instruction for one rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardVisibility {
    pub card_id: String,
    pub visible: bool,
}

pub fn place_card_id(place_id: &str) -> String {
    format!("place-{place_id}")
}

/// Whole prices print without decimals, others with two.
pub fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

/// One card per place; the price is attached as `data-price` for filtering.
pub fn render_place_list(places: &[PlaceSummary]) -> Vec<Node> {
    if places.is_empty() {
        return vec![
            Element::new("p")
                .class("empty-message")
                .text("No places available.")
                .into(),
        ];
    }
    places.iter().map(render_place_card).collect()
}

fn render_place_card(place: &PlaceSummary) -> Node {
    let mut card = Element::new("div")
        .id(place_card_id(&place.id))
        .class("place-card")
        .attr("data-price", place.price.to_string())
        .child(Element::new("h2").class("place-title").text(&place.title))
        .child(
            Element::new("p")
                .class("place-price")
                .text(format!("Price per night: ${}", format_price(place.price))),
        );

    if !place.description.trim().is_empty() {
        card = card.child(
            Element::new("p")
                .class("place-description")
                .text(&place.description),
        );
    }
    if let Some(location) = place.location_label() {
        card = card.child(
            Element::new("p")
                .class("place-location")
                .text(format!("Location: {location}")),
        );
    }

    card.child(
        Element::new("a")
            .class("details-button")
            .attr("href", Route::place(&place.id).href())
            .text("View Details"),
    )
    .into()
}

/// Options for the price filter control, "All" selected.
pub fn render_price_filter() -> Vec<Node> {
    let mut options: Vec<Node> = PRICE_FILTER_OPTIONS
        .iter()
        .map(|max| {
            Element::new("option")
                .attr("value", max.to_string())
                .text(format!("${max}"))
                .into()
        })
        .collect();
    options.push(
        Element::new("option")
            .attr("value", "all")
            .attr("selected", "")
            .text("All")
            .into(),
    );
    options
}

/// Visible iff the price fits under the ceiling. Pure: nothing is re-fetched.
pub fn price_filter_visibility(
    places: &[PlaceSummary],
    ceiling: PriceCeiling,
) -> Vec<CardVisibility> {
    places
        .iter()
        .map(|place| CardVisibility {
            card_id: place_card_id(&place.id),
            visible: ceiling.admits(place.price),
        })
        .collect()
}
