use crate::domain::{Element, Node, Rating, Route};
use crate::interface_adapters::document::Document;
use crate::interface_adapters::presenters::ids;

// Static markup of each page before any controller has run.

pub fn open(route: Route) -> Document {
    let root = skeleton(&route);
    Document::new(route, root)
}

pub fn skeleton(route: &Route) -> Element {
    let (title, main) = match route {
        Route::Index => ("HBnB - Places", index_main()),
        Route::Login => ("HBnB - Login", login_main()),
        Route::Place { .. } => ("HBnB - Place Details", place_main()),
        Route::AddReview { .. } => ("HBnB - Add Review", add_review_main()),
    };

    Element::new("html")
        .attr("lang", "en")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "UTF-8"))
                .child(Element::new("title").text(title))
                .child(
                    Element::new("link")
                        .attr("rel", "stylesheet")
                        .attr("href", "styles.css"),
                ),
        )
        .child(Element::new("body").child(header()).child(main).child(footer()))
}

fn header() -> Element {
    Element::new("header").child(
        Element::new("nav")
            .child(
                Element::new("a")
                    .class("logo")
                    .attr("href", Route::Index.href())
                    .text("HBnB"),
            )
            .child(Element::new("div").id(ids::LOGIN_LINK)),
    )
}

fn footer() -> Element {
    Element::new("footer").child(Element::new("p").text("All rights reserved"))
}

fn index_main() -> Element {
    Element::new("main")
        .child(
            Element::new("section").id("filter").child(
                Element::new("label")
                    .attr("for", ids::PRICE_FILTER)
                    .text("Max price:"),
            )
            .child(Element::new("select").id(ids::PRICE_FILTER)),
        )
        .child(Element::new("section").id(ids::PLACES_LIST))
}

fn login_main() -> Element {
    Element::new("main").child(
        Element::new("form")
            .id(ids::LOGIN_FORM)
            .class("form")
            .child(Element::new("label").attr("for", ids::EMAIL_INPUT).text("Email"))
            .child(
                Element::new("input")
                    .id(ids::EMAIL_INPUT)
                    .attr("type", "email")
                    .attr("name", "email")
                    .attr("required", ""),
            )
            .child(
                Element::new("label")
                    .attr("for", ids::PASSWORD_INPUT)
                    .text("Password"),
            )
            .child(
                Element::new("input")
                    .id(ids::PASSWORD_INPUT)
                    .attr("type", "password")
                    .attr("name", "password")
                    .attr("required", ""),
            )
            .child(
                Element::new("button")
                    .id(ids::LOGIN_SUBMIT)
                    .attr("type", "submit")
                    .text("Login"),
            )
            .child(Element::new("p").id(ids::ERROR_MESSAGE).class("error-message")),
    )
}

fn place_main() -> Element {
    Element::new("main")
        .child(Element::new("section").id(ids::PLACE_DETAILS))
        .child(Element::new("section").id(ids::REVIEWS))
        .child(Element::new("section").id(ids::ADD_REVIEW).attr("hidden", ""))
}

fn add_review_main() -> Element {
    let ratings = (Rating::MIN..=Rating::MAX).map(|value| {
        Node::from(
            Element::new("option")
                .attr("value", value.to_string())
                .text(value.to_string()),
        )
    });

    Element::new("main")
        .child(Element::new("h1").text("Add a Review"))
        .child(
            Element::new("form")
                .id(ids::REVIEW_FORM)
                .class("form")
                .child(Element::new("label").attr("for", ids::RATING_INPUT).text("Rating"))
                .child(
                    Element::new("select")
                        .id(ids::RATING_INPUT)
                        .attr("name", "rating")
                        .child(
                            Element::new("option")
                                .attr("value", "")
                                .text("Select a rating"),
                        )
                        .children(ratings),
                )
                .child(
                    Element::new("label")
                        .attr("for", ids::REVIEW_TEXT)
                        .text("Your review"),
                )
                .child(
                    Element::new("textarea")
                        .id(ids::REVIEW_TEXT)
                        .attr("name", "review")
                        .attr("required", ""),
                )
                .child(
                    Element::new("button")
                        .id(ids::REVIEW_SUBMIT)
                        .attr("type", "submit")
                        .text("Submit Review"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Page;

    #[test]
    fn every_page_has_the_nav_slot() {
        for route in [
            Route::Index,
            Route::Login,
            Route::place("p1"),
            Route::add_review("p1"),
        ] {
            let doc = open(route);
            assert!(doc.element(ids::LOGIN_LINK).is_some());
        }
    }

    #[test]
    fn place_page_starts_with_review_link_hidden() {
        let doc = open(Route::place("p1"));
        assert_eq!(doc.location(), &Route::place("p1"));
        assert!(doc.element(ids::ADD_REVIEW).is_some_and(Element::is_hidden));
        assert!(doc.element(ids::PLACE_DETAILS).is_some());
        assert!(doc.element(ids::REVIEWS).is_some());
    }

    #[test]
    fn rating_control_offers_an_empty_choice_and_one_to_five() {
        let doc = open(Route::add_review("p1"));
        let rating = doc.element(ids::RATING_INPUT).expect("expected rating control");
        let values: Vec<&str> = rating
            .children
            .iter()
            .filter_map(Node::as_element)
            .filter_map(|option| option.get_attr("value"))
            .collect();
        assert_eq!(values, ["", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn login_page_has_the_form_controls() {
        let doc = open(Route::Login);
        for id in [
            ids::LOGIN_FORM,
            ids::EMAIL_INPUT,
            ids::PASSWORD_INPUT,
            ids::LOGIN_SUBMIT,
            ids::ERROR_MESSAGE,
        ] {
            assert!(doc.element(id).is_some(), "missing #{id}");
        }
    }
}
