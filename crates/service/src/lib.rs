//! Service layer for contact-list
//!
//! Sits between the HTTP/CLI front ends and storage: validates input, runs
//! the store operation, and turns store rejections into outcome messages.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod contact_service;
mod error;

pub use contact_service::ContactService;
pub use error::ServiceError;
