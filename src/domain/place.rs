use crate::domain::review::Review;

// Listing entry as returned by the places collection endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PlaceSummary {
    /// Human-readable location: the named location when the back end sends
    /// one, otherwise the coordinates.
    pub fn location_label(&self) -> Option<String> {
        if let Some(location) = self.location.as_deref() {
            let location = location.trim();
            if !location.is_empty() {
                return Some(location.to_string());
            }
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(format!("{lat}, {lon}")),
            _ => None,
        }
    }
}

// Full place record for the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetail {
    pub summary: PlaceSummary,
    pub owner: Option<Person>,
    pub amenities: Vec<Amenity>,
    pub rooms: Option<u32>,
    pub capacity: Option<u32>,
    pub surface: Option<f64>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: Option<String>,
    pub name: String,
}

// Owner or review author as a first/last name pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    /// Trimmed "first last", or None when both parts are blank.
    pub fn full_name(&self) -> Option<String> {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

// Upper bound selected in the price filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceCeiling {
    All,
    Max(f64),
}

impl PriceCeiling {
    /// Parse a filter control value: `all` or a non-negative number.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        let max = value.parse::<f64>().ok()?;
        if !max.is_finite() || max < 0.0 {
            return None;
        }
        Some(Self::Max(max))
    }

    pub fn admits(&self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::Max(max) => price <= *max,
        }
    }
}
