use crate::domain::{ApiError, NewReview, PlaceDetail, PlaceSummary, PlacesApi, SessionToken};
use crate::interface_adapters::protocol::{
    ErrorResponse, LoginRequest, LoginResponse, PlaceDetailDto, PlaceSummaryDto, ReviewRequest,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use url::Url;

// Thin wrapper around reqwest for the HBnB REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

#[derive(Debug)]
pub enum ApiClientError {
    InvalidBaseUrl(String),
    Http(reqwest::Error),
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiClientError::InvalidBaseUrl(url) => write!(f, "invalid api base url: {url}"),
            ApiClientError::Http(err) => write!(f, "failed to build http client: {err}"),
        }
    }
}

impl std::error::Error for ApiClientError {}

impl ApiClient {
    /// `timeout` of None leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiClientError::Http)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Append path segments to the base url; a trailing "" keeps the trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn with_bearer(request: RequestBuilder, token: Option<&SessionToken>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token.as_str()),
        None => request,
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    request.send().await.map_err(|err| {
        tracing::debug!(error = %err, "request did not complete");
        ApiError::Transport(err.to_string())
    })
}

// Keep the upstream status and message so callers can show it.
async fn failure(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(ErrorResponse::into_message);
    ApiError::Application { status, message }
}

// A success body that does not decode is treated like a transport failure.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Transport(format!("malformed response body: {err}")))
}

#[async_trait]
impl PlacesApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<SessionToken, ApiError> {
        let url = self.endpoint(&["auth", "login"]);
        let response = send(
            self.http
                .post(url)
                .json(&LoginRequest { email, password }),
        )
        .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(failure(response).await);
        }

        let body = decode::<LoginResponse>(response).await?;
        body.access_token
            .and_then(SessionToken::new)
            .ok_or(ApiError::Application {
                status: status.as_u16(),
                message: body.message,
            })
    }

    async fn list_places(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Vec<PlaceSummary>, ApiError> {
        let url = self.endpoint(&["places", ""]);
        let response = send(with_bearer(self.http.get(url), token)).await?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }

        let places = decode::<Vec<PlaceSummaryDto>>(response).await?;
        Ok(places.into_iter().map(PlaceSummary::from).collect())
    }

    async fn get_place(
        &self,
        id: &str,
        token: Option<&SessionToken>,
    ) -> Result<PlaceDetail, ApiError> {
        let url = self.endpoint(&["places", id]);
        let response = send(with_bearer(self.http.get(url), token)).await?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }

        decode::<PlaceDetailDto>(response).await.map(PlaceDetail::from)
    }

    async fn submit_review(
        &self,
        token: &SessionToken,
        review: &NewReview,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["reviews", ""]);
        let response = send(
            self.http
                .post(url)
                .bearer_auth(token.as_str())
                .json(&ReviewRequest::from(review)),
        )
        .await?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }

        // The created review is echoed back; nothing in it is needed.
        Ok(())
    }
}
