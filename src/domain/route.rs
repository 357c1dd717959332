use url::{Url, form_urlencoded};

// Pages of the site and their query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Login,
    Place { id: Option<String> },
    AddReview { id: Option<String> },
}

impl Route {
    pub fn place(id: impl Into<String>) -> Self {
        Route::Place {
            id: Some(id.into()),
        }
    }

    pub fn add_review(id: impl Into<String>) -> Self {
        Route::AddReview {
            id: Some(id.into()),
        }
    }

    /// Relative link used in anchors and redirects.
    pub fn href(&self) -> String {
        match self {
            Route::Index => "index.html".to_string(),
            Route::Login => "login.html".to_string(),
            Route::Place { id } => with_id("place.html", id.as_deref()),
            Route::AddReview { id } => with_id("add_review.html", id.as_deref()),
        }
    }

    /// Value of the `id` query parameter, if the page carries one.
    pub fn place_id(&self) -> Option<&str> {
        match self {
            Route::Place { id } | Route::AddReview { id } => id.as_deref(),
            Route::Index | Route::Login => None,
        }
    }

    /// Resolve a relative or absolute href to a known page.
    pub fn parse(href: &str) -> Option<Self> {
        let base = Url::parse("http://localhost/").ok()?;
        let url = base.join(href.trim()).ok()?;
        let page = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();
        let id = url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        match page.as_str() {
            "" | "index.html" => Some(Route::Index),
            "login.html" => Some(Route::Login),
            "place.html" => Some(Route::Place { id }),
            "add_review.html" => Some(Route::AddReview { id }),
            _ => None,
        }
    }
}

fn with_id(page: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => {
            let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
            format!("{page}?id={encoded}")
        }
        None => page.to_string(),
    }
}
