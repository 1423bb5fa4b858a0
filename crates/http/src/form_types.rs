//! Submitted form fields (Deserialize)
//!
//! Field names match the HTML inputs. Missing fields deserialize as empty
//! strings so they fail validation with a readable message instead of a
//! rejected request.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub phonenumber: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub username: String,
}
