use serde::Serialize;

use crate::{
    models::{CatalogEntry, FilterSpec, Genre, SortKey, TitleCard, TitleDetails},
    services::{query::query, Catalog},
};

/// Sections shown on the landing page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeSections {
    /// Most popular entry in full, for the hero banner. Absent when the catalog is empty.
    pub featured: Option<TitleDetails>,
    pub top_rated: Vec<TitleCard>,
    pub new_releases: Vec<TitleCard>,
}

/// Builds the landing page sections, each holding at most `section_size` cards
pub fn home_sections(catalog: &Catalog, section_size: usize) -> HomeSections {
    let featured = catalog
        .query(&FilterSpec::default())
        .first()
        .map(|entry| TitleDetails::from(*entry));

    HomeSections {
        featured,
        top_rated: cards(catalog.query(&FilterSpec::sorted_by(SortKey::Rating)), section_size),
        new_releases: cards(
            catalog.query(&FilterSpec::sorted_by(SortKey::ReleaseDate)),
            section_size,
        ),
    }
}

/// Other entries sharing at least one genre with `entry`, most popular first
pub fn related_titles(catalog: &Catalog, entry: &CatalogEntry, limit: usize) -> Vec<TitleCard> {
    let candidates = catalog
        .entries()
        .iter()
        .filter(|other| other.id != entry.id && other.shares_genre_with(entry));

    cards(query(candidates, &FilterSpec::default()), limit)
}

/// The full genre vocabulary
pub fn genre_names() -> Vec<&'static str> {
    Genre::ALL.iter().map(Genre::name).collect()
}

/// Distinct release years present in the catalog, most recent first
pub fn release_years(catalog: &Catalog) -> Vec<String> {
    let mut years: Vec<i32> = catalog.entries().iter().map(CatalogEntry::release_year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years.into_iter().map(|year| year.to_string()).collect()
}

fn cards(entries: Vec<&CatalogEntry>, limit: usize) -> Vec<TitleCard> {
    entries.into_iter().take(limit).map(TitleCard::from).collect()
}
