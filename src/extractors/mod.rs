//! Request extractors that reject with `AppError` instead of axum's default rejections.

pub mod id;
pub mod json;
pub mod query;

pub use id::IdPath;
pub use json::JsonBody;
pub use query::SearchQuery;
