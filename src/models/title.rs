use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Genre tag attached to a catalog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    #[serde(rename = "TV Movie")]
    TvMovie,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// The complete genre vocabulary, in display order
    pub const ALL: [Genre; 19] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Mystery,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::TvMovie,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    /// Human-readable name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Music => "Music",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::TvMovie => "TV Movie",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Genre {
    type Err = String;

    /// Case-insensitive; `-` and `_` are accepted in place of spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Genre::ALL
            .into_iter()
            .find(|genre| genre.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown genre: {}", s))
    }
}

/// Content type of an entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TitleType {
    /// Feature film
    #[serde(alias = "feature")]
    Movie,
    Series,
}

impl FromStr for TitleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "feature" => Ok(TitleType::Movie),
            "series" => Ok(TitleType::Series),
            other => Err(format!("unknown title type: {}", other)),
        }
    }
}

/// A user review attached to an entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub rating: f64,
    pub comment: String,
    pub date: NaiveDate,
}

/// One movie or series in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Unique within the catalog
    pub id: String,
    pub title: String,
    /// Synopsis text
    pub overview: String,
    pub poster_path: String,
    pub backdrop_path: String,
    pub release_date: NaiveDate,
    /// Average rating on a 0-10 scale
    pub vote_average: f64,
    pub vote_count: u32,
    /// Only meaningful relative to other entries
    pub popularity: f64,
    pub genres: Vec<Genre>,
    #[serde(rename = "type")]
    pub title_type: TitleType,
    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cast: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

impl CatalogEntry {
    /// Calendar year of the release date
    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }

    /// True if the two entries have at least one genre in common
    pub fn shares_genre_with(&self, other: &CatalogEntry) -> bool {
        self.genres.iter().any(|genre| other.genres.contains(genre))
    }
}

/// Compact projection of an entry used by grid listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleCard {
    pub id: String,
    pub title: String,
    pub poster_path: String,
    pub vote_average: f64,
    pub release_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// At most the first two genres of the entry
    pub genres: Vec<Genre>,
}

impl From<&CatalogEntry> for TitleCard {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            poster_path: entry.poster_path.clone(),
            vote_average: entry.vote_average,
            release_year: entry.release_year(),
            runtime: entry.runtime,
            genres: entry.genres.iter().take(2).copied().collect(),
        }
    }
}

/// Full projection of an entry used by the detail page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleDetails {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub release_year: i32,
}

impl From<&CatalogEntry> for TitleDetails {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            entry: entry.clone(),
            release_year: entry.release_year(),
        }
    }
}
