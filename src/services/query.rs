use crate::models::{CatalogEntry, FilterSpec};

/// Filters and orders catalog entries.
///
/// Returns exactly the entries that satisfy every active predicate of `spec`, ordered
/// by its sort key. The sort is stable, so entries with equal keys keep their input
/// order. Neither the entries nor the spec are modified, and an empty result is a
/// normal outcome.
///
/// Accepts any iterator of borrowed entries so a previous result can be queried again.
pub fn query<'a, I>(entries: I, spec: &FilterSpec) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut result: Vec<&CatalogEntry> = entries
        .into_iter()
        .filter(|entry| spec.matches(entry))
        .collect();

    result.sort_by(|a, b| spec.sort_key.compare(a, b));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{title::fixtures::entry, Genre, RatingRange, SortKey, TitleType};

    fn ids(result: &[&CatalogEntry]) -> Vec<String> {
        result.iter().map(|e| e.id.clone()).collect()
    }

    /// A: 2020 Drama 7.5, B: 2021 Comedy 8.2
    fn drama_and_comedy() -> Vec<CatalogEntry> {
        let mut a = entry("A", "Quiet Rooms", "2020-06-12", &[Genre::Drama]);
        a.vote_average = 7.5;
        a.popularity = 30.0;
        a.overview = "A family drama set over one winter.".to_string();

        let mut b = entry("B", "Laugh Track", "2021-02-03", &[Genre::Comedy]);
        b.vote_average = 8.2;
        b.popularity = 55.0;
        b.overview = "A sitcom writer's drama behind the scenes.".to_string();

        vec![a, b]
    }

    fn sample_catalog() -> Vec<CatalogEntry> {
        let mut entries = drama_and_comedy();

        let mut c = entry("C", "Orbit", "2021-09-30", &[Genre::ScienceFiction, Genre::Drama]);
        c.vote_average = 6.4;
        c.popularity = 80.0;
        c.title_type = TitleType::Series;

        let mut d = entry("D", "The Last Outpost", "1999-11-19", &[Genre::Western]);
        d.vote_average = 8.2;
        d.popularity = 30.0;

        entries.push(c);
        entries.push(d);
        entries
    }

    /// Specs covering each axis alone and a few combinations
    fn spec_grid() -> Vec<FilterSpec> {
        vec![
            FilterSpec::default(),
            FilterSpec {
                genre: Some(Genre::Drama),
                ..FilterSpec::default()
            },
            FilterSpec {
                year: Some("2021".to_string()),
                ..FilterSpec::default()
            },
            FilterSpec {
                content_type: Some(TitleType::Series),
                ..FilterSpec::default()
            },
            FilterSpec {
                rating_range: RatingRange::new(Some(7.0), Some(8.0)),
                ..FilterSpec::default()
            },
            FilterSpec {
                search_query: Some("DRAMA".to_string()),
                sort_key: SortKey::Rating,
                ..FilterSpec::default()
            },
            FilterSpec {
                genre: Some(Genre::Drama),
                year: Some("2021".to_string()),
                rating_range: RatingRange::new(Some(6.0), None),
                sort_key: SortKey::ReleaseDate,
                ..FilterSpec::default()
            },
        ]
    }

    #[test]
    fn test_genre_scenario() {
        let entries = drama_and_comedy();
        let spec = FilterSpec {
            genre: Some(Genre::Drama),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&entries, &spec)), vec!["A"]);
    }

    #[test]
    fn test_rating_range_scenario() {
        let entries = drama_and_comedy();
        let spec = FilterSpec {
            rating_range: RatingRange::new(Some(8.0), Some(10.0)),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&entries, &spec)), vec!["B"]);
    }

    #[test]
    fn test_search_sorted_by_rating_scenario() {
        let entries = drama_and_comedy();
        let spec = FilterSpec {
            search_query: Some("drama".to_string()),
            sort_key: SortKey::Rating,
            ..FilterSpec::default()
        };

        let result = query(&entries, &spec);
        assert_eq!(ids(&result), vec!["B", "A"]);
        assert!(result
            .windows(2)
            .all(|pair| pair[0].vote_average >= pair[1].vote_average));
    }

    #[test]
    fn test_unmatched_year_is_empty_not_error() {
        let entries = drama_and_comedy();
        let spec = FilterSpec {
            year: Some("1999".to_string()),
            ..FilterSpec::default()
        };
        assert!(query(&entries, &spec).is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let empty: Vec<CatalogEntry> = Vec::new();
        for spec in spec_grid() {
            assert!(query(&empty, &spec).is_empty());
        }
    }

    #[test]
    fn test_default_spec_returns_everything_by_popularity() {
        let entries = sample_catalog();
        let result = query(&entries, &FilterSpec::default());
        // A and D tie on popularity and keep input order
        assert_eq!(ids(&result), vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn test_release_date_sort_is_most_recent_first() {
        let entries = sample_catalog();
        let result = query(&entries, &FilterSpec::sorted_by(SortKey::ReleaseDate));
        assert_eq!(ids(&result), vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn test_rating_sort_is_stable_for_ties() {
        let entries = sample_catalog();
        let result = query(&entries, &FilterSpec::sorted_by(SortKey::Rating));
        assert_eq!(ids(&result), vec!["B", "D", "A", "C"]);

        let reversed: Vec<CatalogEntry> = entries.iter().rev().cloned().collect();
        let result = query(&reversed, &FilterSpec::sorted_by(SortKey::Rating));
        assert_eq!(ids(&result), vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_content_type_filter() {
        let entries = sample_catalog();
        let series = FilterSpec {
            content_type: Some(TitleType::Series),
            ..FilterSpec::default()
        };
        let movies = FilterSpec {
            content_type: Some(TitleType::Movie),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&entries, &series)), vec!["C"]);
        assert_eq!(ids(&query(&entries, &movies)), vec!["B", "A", "D"]);
    }

    #[test]
    fn test_combined_predicates_are_anded() {
        let entries = sample_catalog();
        let spec = FilterSpec {
            genre: Some(Genre::Drama),
            year: Some("2021".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&entries, &spec)), vec!["C"]);
    }

    #[test]
    fn test_results_are_sound() {
        let entries = sample_catalog();
        for spec in spec_grid() {
            for e in &entries {
                let result = query(std::slice::from_ref(e), &spec);
                if !result.is_empty() {
                    assert!(spec.matches(e), "{} returned for {:?}", e.id, spec);
                }
            }
        }
    }

    #[test]
    fn test_results_are_complete() {
        let entries = sample_catalog();
        for spec in spec_grid() {
            let result = query(&entries, &spec);
            for e in entries.iter().filter(|e| spec.matches(e)) {
                assert!(
                    result.iter().any(|r| r.id == e.id),
                    "{} missing for {:?}",
                    e.id,
                    spec
                );
            }
            assert_eq!(result.len(), entries.iter().filter(|e| spec.matches(e)).count());
        }
    }

    #[test]
    fn test_query_is_idempotent() {
        let entries = sample_catalog();
        for spec in spec_grid() {
            let once = query(&entries, &spec);
            let twice = query(once.iter().copied(), &spec);
            assert_eq!(ids(&once), ids(&twice));
        }
    }

    #[test]
    fn test_query_leaves_inputs_untouched() {
        let entries = sample_catalog();
        let before = entries.clone();
        let spec = FilterSpec {
            search_query: Some("Orbit".to_string()),
            ..FilterSpec::default()
        };
        let spec_before = spec.clone();

        let _ = query(&entries, &spec);

        assert_eq!(entries, before);
        assert_eq!(spec, spec_before);
    }
}
