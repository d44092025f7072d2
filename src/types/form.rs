//! The add-cafe form: raw submission, validated record, and the pure
//! validation step between them. Rendering is the views module's concern.

use serde::Deserialize;

use crate::types::rating::{Rating, Scale};

/// Raw POST body of the add-cafe form. Every field defaults so an absent
/// key deserializes to an empty string and fails validation rather than
/// rejecting the whole request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CafeSubmission {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub cafe_name: String,
    #[serde(default)]
    pub coffee: String,
    #[serde(default)]
    pub wifi: String,
    #[serde(default)]
    pub socket: String,
    #[serde(default)]
    pub location: String,
}

/// A fully validated entry, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub coffee: Rating,
    pub wifi: Rating,
    pub socket: Rating,
    pub location: String,
}

/// Field-level validation messages for re-rendering the form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub coffee: Option<&'static str>,
    pub wifi: Option<&'static str>,
    pub socket: Option<&'static str>,
    pub location: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.coffee.is_none()
            && self.wifi.is_none()
            && self.socket.is_none()
            && self.location.is_none()
    }
}

const REQUIRED: &str = "This field is required.";
const BAD_CHOICE: &str = "Not a valid choice.";

fn check_rating(scale: Scale, raw: &str) -> Result<Rating, &'static str> {
    if raw.trim().is_empty() {
        return Err(REQUIRED);
    }
    Rating::parse(scale, raw).ok_or(BAD_CHOICE)
}

impl CafeSubmission {
    /// Validate the submission. Pure; collects every field failure at once
    /// so the re-rendered form can mark all of them.
    pub fn validate(&self) -> Result<NewCafe, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.cafe_name.trim();
        if name.is_empty() {
            errors.name = Some(REQUIRED);
        }

        let coffee = check_rating(Scale::Coffee, &self.coffee);
        let wifi = check_rating(Scale::Wifi, &self.wifi);
        let socket = check_rating(Scale::Socket, &self.socket);
        if let Err(e) = coffee {
            errors.coffee = Some(e);
        }
        if let Err(e) = wifi {
            errors.wifi = Some(e);
        }
        if let Err(e) = socket {
            errors.socket = Some(e);
        }

        let location = self.location.trim();
        if location.is_empty() {
            errors.location = Some(REQUIRED);
        }

        match (coffee, wifi, socket) {
            (Ok(coffee), Ok(wifi), Ok(socket)) if errors.is_empty() => Ok(NewCafe {
                name: name.to_string(),
                coffee,
                wifi,
                socket,
                location: location.to_string(),
            }),
            _ => Err(errors),
        }
    }
}
