// Wire DTOs for the HBnB REST API and their conversions into domain types.
// Shape differences between endpoints are absorbed here.

use crate::domain::{
    Amenity, NewReview, Person, PlaceDetail, PlaceSummary, Review, ReviewAuthor,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// Error envelope. The API uses `error`, the login route `message`, and the
// JWT layer `msg`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        [self.message, self.error, self.msg]
            .into_iter()
            .flatten()
            .map(|message| message.trim().to_string())
            .find(|message| !message.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewRequest<'a> {
    pub text: &'a str,
    pub rating: u8,
    pub place_id: &'a str,
}

impl<'a> From<&'a NewReview> for ReviewRequest<'a> {
    fn from(review: &'a NewReview) -> Self {
        Self {
            text: &review.text,
            rating: review.rating.value(),
            place_id: &review.place_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceSummaryDto {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl From<PlaceSummaryDto> for PlaceSummary {
    fn from(dto: PlaceSummaryDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            price: dto.price.unwrap_or_default(),
            location: dto.location,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetailDto {
    #[serde(flatten)]
    pub summary: PlaceSummaryDto,
    #[serde(default)]
    pub owner: Option<PersonDto>,
    #[serde(default)]
    pub amenities: Option<Vec<AmenityDto>>,
    #[serde(default)]
    pub rooms: Option<u32>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub surface: Option<f64>,
    #[serde(default)]
    pub reviews: Option<Vec<ReviewDto>>,
}

impl From<PlaceDetailDto> for PlaceDetail {
    fn from(dto: PlaceDetailDto) -> Self {
        Self {
            summary: dto.summary.into(),
            owner: dto.owner.map(Person::from),
            amenities: dto
                .amenities
                .unwrap_or_default()
                .into_iter()
                .map(Amenity::from)
                .collect(),
            rooms: dto.rooms,
            capacity: dto.capacity,
            surface: dto.surface,
            reviews: dto
                .reviews
                .unwrap_or_default()
                .into_iter()
                .map(Review::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PersonDto {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl From<PersonDto> for Person {
    fn from(dto: PersonDto) -> Self {
        Self {
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
        }
    }
}

// Detail responses send objects, list responses bare names.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AmenityDto {
    Object {
        #[serde(default)]
        id: Option<String>,
        name: String,
    },
    Name(String),
}

impl From<AmenityDto> for Amenity {
    fn from(dto: AmenityDto) -> Self {
        match dto {
            AmenityDto::Object { id, name } => Self { id, name },
            AmenityDto::Name(name) => Self { id: None, name },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReviewDto {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default, alias = "author")]
    pub user: Option<AuthorDto>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AuthorDto {
    Person(PersonDto),
    Name(String),
}

impl From<Option<AuthorDto>> for ReviewAuthor {
    fn from(dto: Option<AuthorDto>) -> Self {
        match dto {
            Some(AuthorDto::Person(person)) => Person::from(person)
                .full_name()
                .map_or(ReviewAuthor::Anonymous, ReviewAuthor::Person),
            Some(AuthorDto::Name(name)) => {
                let name = name.trim();
                if name.is_empty() {
                    ReviewAuthor::Anonymous
                } else {
                    ReviewAuthor::Name(name.to_string())
                }
            }
            None => ReviewAuthor::Anonymous,
        }
    }
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Self {
            text: dto.text.unwrap_or_default(),
            rating: dto.rating.unwrap_or_default(),
            author: ReviewAuthor::from(dto.user),
        }
    }
}
