//! Row-level persistence for every content table.
//!
//! Functions map one HTTP operation onto one statement. Updates and deletes
//! report whether a row matched so handlers can answer 404.

pub mod admin;
pub mod content;
pub mod gallery;
pub mod partner;
pub mod volunteer;
