pub mod filter;
pub mod title;

pub use filter::{FilterParams, FilterSpec, RatingRange, SortKey};
pub use title::{CatalogEntry, Genre, Review, TitleCard, TitleDetails, TitleType};
