use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

use super::{CatalogEntry, Genre, TitleType};

/// Key a query result is ordered by. Every key sorts descending.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Popularity,
    Rating,
    ReleaseDate,
}

impl SortKey {
    /// Parses a sort key, falling back to `Popularity` for anything unrecognized
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim() {
            "rating" => SortKey::Rating,
            "releaseDate" | "release_date" => SortKey::ReleaseDate,
            _ => SortKey::Popularity,
        }
    }

    /// Orders `a` before `b` when `a` ranks higher on this key
    pub fn compare(&self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortKey::Popularity => descending_f64(a.popularity, b.popularity),
            SortKey::Rating => descending_f64(a.vote_average, b.vote_average),
            SortKey::ReleaseDate => b.release_date.cmp(&a.release_date),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Popularity => write!(f, "popularity"),
            SortKey::Rating => write!(f, "rating"),
            SortKey::ReleaseDate => write!(f, "releaseDate"),
        }
    }
}

// NaN compares equal so the stable sort keeps input order.
fn descending_f64(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Inclusive bounds on an entry's average rating
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

impl RatingRange {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(Self::MIN),
            max: max.unwrap_or(Self::MAX),
        }
    }

    /// True unless the bounds are exactly the full 0-10 scale
    pub fn is_active(&self) -> bool {
        self.min != Self::MIN || self.max != Self::MAX
    }

    pub fn contains(&self, rating: f64) -> bool {
        self.min <= rating && rating <= self.max
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Set of optional constraints plus a sort key.
///
/// An absent field places no constraint on that axis. A spec is built fresh for
/// every request and never modified by the query engine.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FilterSpec {
    pub genre: Option<Genre>,
    /// Four-digit release year, compared as text
    pub year: Option<String>,
    /// `None` covers both "absent" and "all"
    pub content_type: Option<TitleType>,
    pub rating_range: RatingRange,
    pub search_query: Option<String>,
    pub sort_key: SortKey,
}

impl FilterSpec {
    pub fn sorted_by(sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..Self::default()
        }
    }

    /// True if the entry passes every active predicate
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.matches_content_type(entry)
            && self.matches_genre(entry)
            && self.matches_year(entry)
            && self.matches_rating(entry)
            && self.matches_search(entry)
    }

    fn matches_content_type(&self, entry: &CatalogEntry) -> bool {
        self.content_type
            .map_or(true, |wanted| entry.title_type == wanted)
    }

    fn matches_genre(&self, entry: &CatalogEntry) -> bool {
        self.genre.map_or(true, |wanted| entry.genres.contains(&wanted))
    }

    fn matches_year(&self, entry: &CatalogEntry) -> bool {
        self.year
            .as_deref()
            .map_or(true, |wanted| entry.release_year().to_string() == wanted)
    }

    fn matches_rating(&self, entry: &CatalogEntry) -> bool {
        !self.rating_range.is_active() || self.rating_range.contains(entry.vote_average)
    }

    fn matches_search(&self, entry: &CatalogEntry) -> bool {
        match self.search_query.as_deref() {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                entry.title.to_lowercase().contains(&query)
                    || entry.overview.to_lowercase().contains(&query)
            }
        }
    }
}

/// Raw, untyped filter values as they arrive from a caller (e.g. URL query parameters).
///
/// Conversion into a [`FilterSpec`] never fails: empty strings count as absent and
/// unrecognized values fall back to "no constraint" or the default sort.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub genre: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub min_rating: Option<String>,
    pub max_rating: Option<String>,
    #[serde(alias = "search")]
    pub q: Option<String>,
    #[serde(alias = "sort_by", alias = "sortBy")]
    pub sort: Option<String>,
}

impl From<FilterParams> for FilterSpec {
    fn from(params: FilterParams) -> Self {
        let genre = non_empty(params.genre).and_then(|raw| match raw.parse::<Genre>() {
            Ok(genre) => Some(genre),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring genre filter");
                None
            }
        });

        let content_type = non_empty(params.content_type)
            .filter(|raw| !raw.trim().eq_ignore_ascii_case("all"))
            .and_then(|raw| match raw.parse::<TitleType>() {
                Ok(title_type) => Some(title_type),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring type filter");
                    None
                }
            });

        let min = non_empty(params.min_rating).and_then(|raw| parse_bound(&raw));
        let max = non_empty(params.max_rating).and_then(|raw| parse_bound(&raw));

        FilterSpec {
            genre,
            year: non_empty(params.year).map(|year| year.trim().to_string()),
            content_type,
            rating_range: RatingRange::new(min, max),
            search_query: non_empty(params.q).map(|q| q.trim().to_string()),
            sort_key: non_empty(params.sort)
                .map(|raw| SortKey::parse_lenient(&raw))
                .unwrap_or_default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// `NaN` and `inf` parse as f64 but would empty every listing.
fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
