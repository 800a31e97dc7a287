//! HTTP handlers for the article API.

pub mod article;
pub use article::*;
