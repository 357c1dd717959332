use std::fmt;

use crate::domain::{Element, Node, Page, PlacesApi, Route, SessionStore};
use crate::frameworks::config::MAX_REDIRECTS;
use crate::frameworks::pages;
use crate::interface_adapters::document::{Document, Navigation};
use crate::use_cases::{
    AuthGate, DetailController, ListingController, LoginController, LoginForm, ReviewController,
    ReviewForm,
};

// User interaction performed once the first page has loaded.
#[derive(Debug, Clone)]
pub enum Action {
    None,
    Login(LoginForm),
    Logout,
    FilterPlaces(String),
    SubmitReview(ReviewForm),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    TooManyRedirects { hops: usize, last: Route },
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::TooManyRedirects { hops, last } => {
                write!(f, "too many redirects ({hops}), last page {}", last.href())
            }
        }
    }
}

impl std::error::Error for BrowserError {}

/// Settled result of a visit.
#[derive(Debug)]
pub struct Visit {
    pub document: Document,
    /// Alerts raised by every page along the way, in order.
    pub alerts: Vec<String>,
    /// Pages loaded, starting with the one requested.
    pub history: Vec<Route>,
}

impl Visit {
    pub fn location(&self) -> &Route {
        self.document.location()
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }

    pub fn to_text(&self) -> String {
        visible_text(self.document.root())
    }
}

// Headless host: runs the controller for each page and follows navigation.
pub struct Browser<A, S> {
    api: A,
    session: S,
    session_ttl_seconds: u64,
}

impl<A, S> Browser<A, S>
where
    A: PlacesApi + Clone,
    S: SessionStore + Clone,
{
    pub fn new(api: A, session: S, session_ttl_seconds: u64) -> Self {
        Self {
            api,
            session,
            session_ttl_seconds,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub async fn open(&self, route: Route) -> Result<Visit, BrowserError> {
        self.visit(route, Action::None).await
    }

    pub async fn login(&self, form: LoginForm) -> Result<Visit, BrowserError> {
        self.visit(Route::Login, Action::Login(form)).await
    }

    pub async fn logout(&self) -> Result<Visit, BrowserError> {
        self.visit(Route::Index, Action::Logout).await
    }

    pub async fn filter_places(&self, value: &str) -> Result<Visit, BrowserError> {
        self.visit(Route::Index, Action::FilterPlaces(value.to_string()))
            .await
    }

    pub async fn submit_review(
        &self,
        place_id: &str,
        form: ReviewForm,
    ) -> Result<Visit, BrowserError> {
        self.visit(Route::add_review(place_id), Action::SubmitReview(form))
            .await
    }

    #[tracing::instrument(skip_all, fields(page = %route.href()))]
    pub async fn visit(&self, route: Route, action: Action) -> Result<Visit, BrowserError> {
        let mut history = vec![route.clone()];
        let mut document = self.load(route, action).await;
        let mut alerts = document.take_alerts();

        while let Some(navigation) = document.take_navigation() {
            let next = match navigation {
                Navigation::Goto(route) => route,
                Navigation::Reload => document.location().clone(),
            };
            if history.len() > MAX_REDIRECTS {
                tracing::error!(hops = history.len(), page = %next.href(), "redirect limit reached");
                return Err(BrowserError::TooManyRedirects {
                    hops: history.len(),
                    last: next,
                });
            }
            tracing::debug!(page = %next.href(), "following navigation");
            history.push(next.clone());
            document = self.load(next, Action::None).await;
            alerts.extend(document.take_alerts());
        }

        Ok(Visit {
            document,
            alerts,
            history,
        })
    }

    async fn load(&self, route: Route, action: Action) -> Document {
        let mut document = pages::open(route.clone());

        // The reload renders the page, so nothing else runs before the clear.
        if matches!(action, Action::Logout) {
            self.gate().logout(&mut document).await;
            return document;
        }

        match route {
            Route::Index => {
                let mut listing = ListingController::new(self.api.clone(), self.session.clone());
                listing.load(&mut document).await;
                if let Action::FilterPlaces(value) = &action {
                    listing.on_filter_change(&mut document, value);
                }
            }
            Route::Login => {
                self.gate().render_nav_control(&mut document).await;
                if let Action::Login(form) = &action {
                    let login = LoginController {
                        api: self.api.clone(),
                        session: self.session.clone(),
                        session_ttl_seconds: self.session_ttl_seconds,
                    };
                    login.on_submit(&mut document, form.clone()).await;
                }
            }
            Route::Place { .. } => {
                DetailController::new(self.api.clone(), self.session.clone())
                    .load(&mut document)
                    .await;
            }
            Route::AddReview { .. } => {
                let mut review = ReviewController::new(self.api.clone(), self.session.clone());
                let ready = review.load(&mut document).await;
                if let (true, Action::SubmitReview(form)) = (ready, &action) {
                    review.on_submit(&mut document, form.clone()).await;
                }
            }
        }
        document
    }

    fn gate(&self) -> AuthGate<S> {
        AuthGate {
            session: self.session.clone(),
        }
    }
}

// Tags that start a new line when the page is printed as text.
const BLOCK_TAGS: &[&str] = &[
    "body", "header", "nav", "main", "footer", "section", "div", "form", "p", "h1", "h2", "h3",
    "ul", "li", "label", "select", "option", "textarea", "button",
];

/// Visible text of a page, one block per line. Hidden elements and the
/// document head are skipped.
pub fn visible_text(root: &Element) -> String {
    let mut lines = vec![String::new()];
    collect_text(root, &mut lines);
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(element: &Element, lines: &mut Vec<String>) {
    if element.is_hidden() || element.tag == "head" {
        return;
    }
    let block = BLOCK_TAGS.contains(&element.tag.as_str());
    if block {
        lines.push(String::new());
    }
    for child in &element.children {
        match child {
            Node::Element(child) => collect_text(child, lines),
            Node::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                if let Some(line) = lines.last_mut() {
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.push_str(text);
                }
            }
        }
    }
    if block {
        lines.push(String::new());
    }
}
