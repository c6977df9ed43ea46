//! Entities and request bodies for countries and places.

mod country;
mod place;

pub use country::{Country, CreatedCountry, DeletedCountry, NewCountry};
pub use place::{NewPlace, Place, PlacePhoto, PlaceRow};
