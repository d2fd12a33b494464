use serde::Serialize;
use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::similarity::SimilarityMatrix;

pub const DEFAULT_K: usize = 10;

/// One ranked recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub row: usize,
    pub title: String,
    pub score: f32,
}

/// Rank every other catalog row by its similarity to `row`: descending
/// score, ties broken by ascending row index. The query row is excluded by
/// index, so a row that ties the query's self-similarity (an identical
/// overview) still appears. Output length is min(k, N - 1) and titles are
/// not de-duplicated.
pub fn recommend(
    row: usize,
    similarity: &SimilarityMatrix,
    catalog: &Catalog,
    k: usize,
) -> Vec<Recommendation> {
    let mut ranked: Vec<(usize, f32)> = similarity
        .row(row)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(other, _)| other != row)
        .collect();
    // Stable sort over the index-ordered vector keeps the ascending-index
    // tie-break.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(k);
    ranked
        .into_iter()
        .map(|(other, score)| Recommendation {
            row: other,
            title: catalog.records()[other].original_title.clone(),
            score,
        })
        .collect()
}
