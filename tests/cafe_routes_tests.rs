use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use cafe_wifi::config::Config;
use cafe_wifi::db::CafeStorage;
use cafe_wifi::router::{CafeState, cafe_router};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{fs, str};
use tower::ServiceExt;

/// Build the app over a throwaway SQLite file under the OS temp dir.
async fn spawn_app(tag: &str) -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "cafe-wifi-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = CafeStorage::open(&database_url)
        .await
        .expect("failed to open test database");
    storage
        .init_schema()
        .await
        .expect("failed to initialize schema");

    let key = Config::default().cookie_key().expect("default cookie key");
    let app = cafe_router(CafeState::new(storage, key));
    (app, temp_path)
}

async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    str::from_utf8(&bytes)
        .expect("response body was not utf-8")
        .to_string()
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

/// GET the add form; return the CSRF cookie pair and the hidden-field token.
async fn fetch_form(app: &Router) -> (String, String) {
    let resp = get(app, "/add_cafe").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("form response carried no set-cookie")
        .to_str()
        .expect("set-cookie was not ascii")
        .split(';')
        .next()
        .expect("empty set-cookie")
        .to_string();
    let body = body_string(resp).await;
    let marker = "name=\"csrf_token\" value=\"";
    let start = body.find(marker).expect("no csrf field in form") + marker.len();
    let end = body[start..].find('"').expect("unterminated csrf value") + start;
    (cookie, body[start..end].to_string())
}

fn urlencode(raw: &str) -> String {
    let mut out = String::new();
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn post_form(app: &Router, cookie: &str, body: String) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add_cafe")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(header::COOKIE, cookie)
                .body(Body::from(body))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

/// Full GET-form-then-POST cycle with the given entry fields.
async fn submit_cafe(app: &Router, fields: &[(&str, &str)]) -> Response<Body> {
    let (cookie, token) = fetch_form(app).await;
    let mut all = vec![("csrf_token", token.as_str())];
    all.extend_from_slice(fields);
    post_form(app, &cookie, form_body(&all)).await
}

const BLUE_BOTTLE: &[(&str, &str)] = &[
    ("cafe_name", "Blue Bottle"),
    ("coffee", "☕☕"),
    ("wifi", "🛜🛜🛜"),
    ("socket", "🔌"),
    ("location", "https://example.com"),
];

#[tokio::test]
async fn home_and_empty_list_render() {
    let (app, db) = spawn_app("home").await;

    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Coffee &amp; Wifi"));

    let resp = get(&app, "/list_of_cafes").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("No cafes yet"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn create_then_list_shows_the_entry() {
    let (app, db) = spawn_app("create").await;

    let resp = submit_cafe(&app, BLUE_BOTTLE).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).map(|v| v.as_bytes()),
        Some("/list_of_cafes".as_bytes())
    );

    let first = body_string(get(&app, "/list_of_cafes").await).await;
    assert!(first.contains("Blue Bottle"));
    assert!(first.contains("☕☕"));
    assert!(first.contains("🛜🛜🛜"));
    assert!(first.contains("🔌"));
    assert!(first.contains("https://example.com"));
    // first entry in an empty store gets id 1
    assert!(first.contains("/delete/1"));

    // list is idempotent and the id is stable across calls
    let second = body_string(get(&app, "/list_of_cafes").await).await;
    assert_eq!(first, second);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn empty_fields_re_render_the_form_with_errors() {
    let (app, db) = spawn_app("empty-fields").await;

    let resp = submit_cafe(
        &app,
        &[
            ("cafe_name", ""),
            ("coffee", " "),
            ("wifi", " "),
            ("socket", " "),
            ("location", ""),
        ],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert_eq!(body.matches("This field is required.").count(), 5);

    // nothing was persisted
    let list = body_string(get(&app, "/list_of_cafes").await).await;
    assert!(list.contains("No cafes yet"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn unknown_rating_value_is_rejected_and_entered_values_kept() {
    let (app, db) = spawn_app("bad-rating").await;

    let resp = submit_cafe(
        &app,
        &[
            ("cafe_name", "Square Mile"),
            ("coffee", "excellent"),
            ("wifi", "🛜"),
            ("socket", "🔌"),
            ("location", "https://example.com/sm"),
        ],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Not a valid choice."));
    // previously entered values survive the re-render
    assert!(body.contains("value=\"Square Mile\""));
    assert!(body.contains("value=\"https://example.com/sm\""));

    let list = body_string(get(&app, "/list_of_cafes").await).await;
    assert!(list.contains("No cafes yet"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn duplicate_name_keeps_exactly_one_entry() {
    let (app, db) = spawn_app("duplicate").await;

    let resp = submit_cafe(&app, BLUE_BOTTLE).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = submit_cafe(&app, BLUE_BOTTLE).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("A cafe with this name is already listed."));

    let list = body_string(get(&app, "/list_of_cafes").await).await;
    assert_eq!(list.matches("Blue Bottle").count(), 1);
    assert_eq!(list.matches("/delete/").count(), 1);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn delete_removes_exactly_the_requested_entry() {
    let (app, db) = spawn_app("delete").await;

    assert_eq!(
        submit_cafe(&app, BLUE_BOTTLE).await.status(),
        StatusCode::SEE_OTHER
    );
    assert_eq!(
        submit_cafe(
            &app,
            &[
                ("cafe_name", "Monmouth"),
                ("coffee", "☕☕☕☕"),
                ("wifi", "🛜"),
                ("socket", "🔌🔌"),
                ("location", "https://example.com/monmouth"),
            ],
        )
        .await
        .status(),
        StatusCode::SEE_OTHER
    );

    let resp = get(&app, "/delete/1").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).map(|v| v.as_bytes()),
        Some("/list_of_cafes".as_bytes())
    );

    let list = body_string(get(&app, "/list_of_cafes").await).await;
    assert!(!list.contains("Blue Bottle"));
    assert!(list.contains("Monmouth"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn deleting_an_unknown_id_is_reported_not_ignored() {
    let (app, db) = spawn_app("delete-missing").await;

    let resp = get(&app, "/delete/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_string(resp).await.contains("No cafe with id 999"));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn malformed_delete_id_is_a_client_error() {
    let (app, db) = spawn_app("delete-malformed").await;

    let resp = get(&app, "/delete/not-a-number").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn submission_without_a_valid_token_is_refused() {
    let (app, db) = spawn_app("csrf").await;

    // valid cookie, wrong hidden field
    let (cookie, _token) = fetch_form(&app).await;
    let mut fields = vec![("csrf_token", "forged")];
    fields.extend_from_slice(BLUE_BOTTLE);
    let resp = post_form(&app, &cookie, form_body(&fields)).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // no cookie at all
    let mut fields = vec![("csrf_token", "forged")];
    fields.extend_from_slice(BLUE_BOTTLE);
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add_cafe")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(&fields)))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let list = body_string(get(&app, "/list_of_cafes").await).await;
    assert!(list.contains("No cafes yet"));

    let _ = fs::remove_file(&db);
}
