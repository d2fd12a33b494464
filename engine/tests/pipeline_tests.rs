use engine::recommend::recommend;
use engine::{catalog, similarity, Catalog, ModelState, MovieRecord, Table, TfidfVectorizer, TitleIndex};

fn movies_table(rows: &[(i64, &str, &str)]) -> Table {
    let headers = ["id", "original_title", "overview", "homepage", "title", "status", "production_countries"];
    let mut table = Table::new("movies", headers.iter().map(|s| s.to_string()).collect());
    for &(id, title, overview) in rows {
        table.push_row(vec![
            id.to_string(),
            title.to_string(),
            overview.to_string(),
            String::new(),
            title.to_string(),
            "Released".into(),
            "[]".into(),
        ]);
    }
    table
}

fn credits_table(ids: &[i64]) -> Table {
    let headers = ["movie_id", "title", "cast", "crew"];
    let mut table = Table::new("credits", headers.iter().map(|s| s.to_string()).collect());
    for id in ids {
        table.push_row(vec![id.to_string(), String::new(), "[]".into(), "[]".into()]);
    }
    table
}

/// Four movies, three of which share enough overview terms to clear the
/// default document-frequency floor of 3.
fn space_model() -> ModelState {
    let movies = movies_table(&[
        (1, "Star Raiders", "space war robots battle the fleet"),
        (2, "Iron Fleet", "space war robots defend the fleet"),
        (3, "Void March", "space war robots cross the fleet"),
        (4, "Paris Hearts", "romantic comedy love in paris"),
    ]);
    let credits = credits_table(&[1, 2, 3, 4]);
    ModelState::build(&movies, &credits).unwrap()
}

#[test]
fn join_is_bounded_by_both_tables() {
    let movies = movies_table(&[(1, "A", "x"), (2, "B", "y"), (3, "C", "z")]);
    let credits = credits_table(&[2, 3, 4, 5]);
    let catalog = catalog::build(&movies, &credits).unwrap();
    assert!(catalog.len() <= movies.len().min(credits.len()));
    for record in catalog.records() {
        assert!([1, 2, 3].contains(&record.id));
        assert!([2i64, 3, 4, 5].contains(&record.id));
    }
}

#[test]
fn similarity_matrix_is_square_symmetric_and_diagonally_dominant() {
    let model = space_model();
    let sim = model.similarity();
    let n = model.catalog().len();
    assert_eq!(sim.len(), n);
    for i in 0..n {
        for j in 0..n {
            assert!((sim.score(i, j) - sim.score(j, i)).abs() < 1e-6);
            assert!(sim.score(i, i) >= sim.score(i, j));
            assert!(sim.score(i, j) > -1.0 && sim.score(i, j) < 1.0);
        }
    }
}

#[test]
fn related_overviews_outrank_unrelated_ones() {
    let model = space_model();
    let recs = model.recommend("Star Raiders", 10).unwrap();
    assert_eq!(recs.len(), 3);
    let paris = recs.iter().position(|r| r.title == "Paris Hearts").unwrap();
    assert_eq!(paris, 2, "unrelated movie must rank last");
}

#[test]
fn identical_overviews_rank_highest() {
    // A and B share an overview, C is unrelated.
    let records = vec![
        MovieRecord { id: 1, original_title: "A".into(), overview: "space war robots".into() },
        MovieRecord { id: 2, original_title: "B".into(), overview: "space war robots".into() },
        MovieRecord { id: 3, original_title: "C".into(), overview: "romantic comedy love".into() },
    ];
    let catalog = Catalog::from_records(records);
    let vectorizer = TfidfVectorizer { ngram_max: 3, min_df: 1 };
    let (_, features) = vectorizer.fit_transform(&catalog);
    let sim = similarity::compute(&features).unwrap();
    let titles = TitleIndex::build(&catalog);

    let row = titles.lookup("A").unwrap();
    let recs = recommend(row, &sim, &catalog, 10);
    assert_eq!(recs[0].title, "B");
    assert_eq!(recs[1].title, "C");
}

#[test]
fn lookup_is_case_insensitive_through_the_model() {
    let model = space_model();
    let upper = model.recommend("STAR RAIDERS", 10).unwrap();
    let lower = model.recommend("star raiders", 10).unwrap();
    let upper_rows: Vec<usize> = upper.iter().map(|r| r.row).collect();
    let lower_rows: Vec<usize> = lower.iter().map(|r| r.row).collect();
    assert_eq!(upper_rows, lower_rows);
}

#[test]
fn repeated_queries_are_deterministic() {
    let model = space_model();
    let first = model.recommend("Iron Fleet", 10).unwrap();
    let second = model.recommend("Iron Fleet", 10).unwrap();
    let a: Vec<(usize, String)> = first.into_iter().map(|r| (r.row, r.title)).collect();
    let b: Vec<(usize, String)> = second.into_iter().map(|r| (r.row, r.title)).collect();
    assert_eq!(a, b);
}

#[test]
fn unknown_title_is_a_lookup_miss_not_a_crash() {
    let model = space_model();
    assert!(model.recommend("Nonexistent Movie 9999", 10).is_none());
}

#[test]
fn single_movie_catalog_recommends_nothing() {
    let catalog = Catalog::from_records(vec![MovieRecord {
        id: 1,
        original_title: "Alone".into(),
        overview: "a hermit in the mountains".into(),
    }]);
    let vectorizer = TfidfVectorizer { ngram_max: 3, min_df: 1 };
    let (_, features) = vectorizer.fit_transform(&catalog);
    let sim = similarity::compute(&features).unwrap();
    let titles = TitleIndex::build(&catalog);
    let row = titles.lookup("alone").unwrap();
    assert!(recommend(row, &sim, &catalog, 10).is_empty());
}

#[test]
fn all_empty_overviews_fail_with_degenerate_model() {
    let movies = movies_table(&[(1, "A", ""), (2, "B", ""), (3, "C", "")]);
    let credits = credits_table(&[1, 2, 3]);
    let err = ModelState::build(&movies, &credits).unwrap_err();
    assert!(matches!(err, engine::RecError::DegenerateModel));
}

#[test]
fn duplicate_titles_are_not_deduplicated_in_output() {
    let records = vec![
        MovieRecord { id: 1, original_title: "Query".into(), overview: "space war robots".into() },
        MovieRecord { id: 2, original_title: "Twin".into(), overview: "space war robots again".into() },
        MovieRecord { id: 3, original_title: "Twin".into(), overview: "space war robots once more".into() },
    ];
    let catalog = Catalog::from_records(records);
    let vectorizer = TfidfVectorizer { ngram_max: 3, min_df: 1 };
    let (_, features) = vectorizer.fit_transform(&catalog);
    let sim = similarity::compute(&features).unwrap();
    let recs = recommend(0, &sim, &catalog, 10);
    let twins = recs.iter().filter(|r| r.title == "Twin").count();
    assert_eq!(twins, 2);
}
