use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::PrivateCookieJar;
use tracing::info;

use crate::error::CafeError;
use crate::middleware::csrf;
use crate::router::CafeState;
use crate::types::form::{CafeSubmission, FieldErrors};
use crate::views;

pub async fn show_add_form(jar: PrivateCookieJar) -> (PrivateCookieJar, Html<String>) {
    let (jar, token) = csrf::issue(jar);
    let html = views::add_cafe_page(&CafeSubmission::default(), &FieldErrors::default(), &token);
    (jar, Html(html))
}

/// Validate and persist a submission. Field failures and a taken name both
/// re-render the form with messages and the entered values; success
/// redirects to the list.
pub async fn submit_cafe(
    State(state): State<CafeState>,
    jar: PrivateCookieJar,
    Form(submission): Form<CafeSubmission>,
) -> Result<Response, CafeError> {
    if !csrf::verify(&jar, &submission.csrf_token) {
        return Err(CafeError::TokenMismatch);
    }

    let new_cafe = match submission.validate() {
        Ok(cafe) => cafe,
        Err(errors) => return Ok(rerender(jar, &submission, errors)),
    };

    match state.storage.insert(&new_cafe).await {
        Ok(id) => {
            info!(id, name = %new_cafe.name, "cafe added");
            Ok(Redirect::to("/list_of_cafes").into_response())
        }
        Err(CafeError::NameTaken(_)) => {
            let errors = FieldErrors {
                name: Some("A cafe with this name is already listed."),
                ..FieldErrors::default()
            };
            Ok(rerender(jar, &submission, errors))
        }
        Err(e) => Err(e),
    }
}

fn rerender(jar: PrivateCookieJar, submission: &CafeSubmission, errors: FieldErrors) -> Response {
    let (jar, token) = csrf::issue(jar);
    let html = views::add_cafe_page(submission, &errors, &token);
    (jar, Html(html)).into_response()
}

/// Remove an entry by id. An unknown id is reported, not silently ignored.
pub async fn delete_cafe(
    State(state): State<CafeState>,
    Path(id): Path<i64>,
) -> Result<Redirect, CafeError> {
    let removed = state.storage.delete(id).await?;
    if removed == 0 {
        return Err(CafeError::NotFound(id));
    }
    info!(id, "cafe deleted");
    Ok(Redirect::to("/list_of_cafes"))
}
