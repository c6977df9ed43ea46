//! Validation and orchestration between handlers and repositories.

mod country;
mod place;
mod validation;

pub use country::CountryService;
pub use place::PlaceService;
pub use validation::{require_non_empty, require_positive_id};
