// Fake HBnB back end shared by the integration tests in this binary.
#![allow(dead_code)]

use std::{
    // `Arc` shares the published url with the server thread; `OnceLock` writes it once.
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "tok-ada";

// Base url of the api (including `/api/v1`) once the server is bound.
static API_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();
// Bodies of every review the fake accepted.
static RECEIVED_REVIEWS: Mutex<Vec<Value>> = Mutex::new(Vec::new());

// Ensure the fake back end is running and return its api base url.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // The server gets its own thread and runtime so it outlives each test runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}"));
                axum::serve(listener, app()).await.expect("fake server failed");
            });
        });
        wait_for_server(published_url);
    });

    API_URL
        .get()
        .expect("api url should be initialized")
        .as_str()
}

// Url of a port nothing listens on, for transport failures.
pub fn unreachable_api_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("get probe addr");
    drop(listener);
    format!("http://{addr}/api/v1")
}

pub fn received_reviews() -> Vec<Value> {
    RECEIVED_REVIEWS
        .lock()
        .expect("review log poisoned")
        .clone()
}

fn wait_for_server(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://")
        .to_string();
    let _ = API_URL.set(format!("{base_url}/api/v1"));

    for _ in 0..100 {
        if std::net::TcpStream::connect(&addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("fake server did not become ready at {addr}");
}

fn app() -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/places/", get(list_places))
        .route("/api/v1/places/{id}", get(get_place))
        .route("/api/v1/reviews/", post(create_review))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        (StatusCode::OK, Json(json!({ "access_token": TOKEN })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
    }
}

fn places() -> Vec<Value> {
    vec![
        json!({
            "id": "p1",
            "title": "Budget Loft",
            "description": "Small but bright",
            "price": 25.0,
            "latitude": 48.85,
            "longitude": 2.35,
        }),
        json!({
            "id": "p2",
            "title": "City Flat",
            "description": "Close to everything",
            "price": 80,
            "location": "Lyon",
        }),
        json!({
            "id": "p3",
            "title": "Seaside Villa",
            "description": "Pool and sea view",
            "price": 150.5,
            "location": "Nice",
        }),
    ]
}

async fn list_places() -> Json<Value> {
    Json(Value::Array(places()))
}

async fn get_place(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    let Some(mut place) = places().into_iter().find(|place| place["id"] == id.as_str()) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Place not found" })),
        );
    };

    place["owner"] = json!({ "first_name": "Grace", "last_name": "Hopper" });
    place["amenities"] = json!(["Wifi", { "id": "a2", "name": "Kitchen" }]);
    place["reviews"] = json!([
        {
            "text": "Spotless and quiet",
            "rating": 5,
            "user": { "first_name": "Alan", "last_name": "Turing" },
        },
        {
            "text": "Fine for a night",
            "rating": 3,
            "user": { "first_name": "", "last_name": " " },
        },
    ]);
    (StatusCode::OK, Json(place))
}

async fn create_review(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "msg": "Missing Authorization Header" })),
        );
    }

    RECEIVED_REVIEWS
        .lock()
        .expect("review log poisoned")
        .push(body.clone());
    let mut created = body;
    created["id"] = json!(uuid::Uuid::new_v4().to_string());
    (StatusCode::CREATED, Json(created))
}
