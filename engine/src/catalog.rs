use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::RecError;
use crate::table::Table;

/// One merged, cleaned movie. Every field not used for similarity or for
/// display is pruned at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub original_title: String,
    /// May be empty, never absent: missing overviews become `""`.
    pub overview: String,
}

/// Ordered movie catalog. The vector position is the row index used by the
/// feature matrix, the similarity matrix and the title index, and is stable
/// for the lifetime of the built model.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_id(table: &Table, row: usize, col: usize, column: &str) -> Result<i64, RecError> {
    table.cell(row, col).trim().parse().map_err(|_| RecError::Schema {
        table: table.name.clone(),
        column: column.to_string(),
    })
}

/// Inner join of the movies and credits tables on the movie id (`movie_id`
/// on the credits side). Rows present in only one table are dropped, output
/// order follows the movies table, duplicate ids keep their first movies row,
/// and only {id, original_title, overview} survive the join.
pub fn build(movies: &Table, credits: &Table) -> Result<Catalog, RecError> {
    let id_col = movies.require_column("id")?;
    let title_col = movies.require_column("original_title")?;
    let overview_col = movies.require_column("overview")?;
    let credit_id_col = credits.require_column("movie_id")?;

    // Credits contribute only their join key; a duplicated credits id
    // collapses to one entry.
    let mut credit_ids: HashSet<i64> = HashSet::with_capacity(credits.len());
    for row in 0..credits.len() {
        credit_ids.insert(parse_id(credits, row, credit_id_col, "movie_id")?);
    }

    let mut records = Vec::new();
    let mut seen: HashSet<i64> = HashSet::with_capacity(movies.len());
    for row in 0..movies.len() {
        let id = parse_id(movies, row, id_col, "id")?;
        if !credit_ids.contains(&id) || !seen.insert(id) {
            continue;
        }
        records.push(MovieRecord {
            id,
            original_title: movies.cell(row, title_col).to_string(),
            overview: movies.cell(row, overview_col).to_string(),
        });
    }
    tracing::debug!(
        movies = movies.len(),
        credits = credits.len(),
        merged = records.len(),
        "catalog built"
    );
    Ok(Catalog { records })
}
