use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;
use crate::sparse::CsrMatrix;
use crate::tokenizer::tokenize;

/// Retained n-gram terms. Columns are assigned in lexicographic term order,
/// so an identical catalog always produces an identical vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: HashMap<String, usize>,
    df: Vec<u32>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of `term`, if it survived pruning.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    /// Document frequency of the term at `column`.
    pub fn doc_frequency(&self, column: usize) -> u32 {
        self.df[column]
    }
}

/// Word n-gram TF-IDF vectorizer over movie overviews: contiguous n-grams of
/// 1 to `ngram_max` tokens, a document-frequency floor of `min_df`, smoothed
/// IDF `ln((1 + N) / (1 + df)) + 1`, and L2 normalization per document.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    pub ngram_max: usize,
    pub min_df: u32,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self { ngram_max: 3, min_df: 3 }
    }
}

impl TfidfVectorizer {
    /// Fit the vocabulary over all overviews and produce one sparse weight
    /// row per catalog entry. An empty overview yields an all-zero row.
    pub fn fit_transform(&self, catalog: &Catalog) -> (Vocabulary, CsrMatrix) {
        // First pass: n-gram stream per document plus corpus document
        // frequencies.
        let mut doc_terms: Vec<Vec<String>> = Vec::with_capacity(catalog.len());
        let mut df_counts: HashMap<String, u32> = HashMap::new();
        for record in catalog.records() {
            let tokens = tokenize(&record.overview);
            let grams = ngrams(&tokens, self.ngram_max);
            let unique: HashSet<&String> = grams.iter().collect();
            for term in unique {
                *df_counts.entry(term.clone()).or_insert(0) += 1;
            }
            doc_terms.push(grams);
        }

        // Prune rare terms and fix the column order.
        let mut kept: Vec<(String, u32)> =
            df_counts.into_iter().filter(|&(_, df)| df >= self.min_df).collect();
        kept.sort_by(|a, b| a.0.cmp(&b.0));
        let mut terms = HashMap::with_capacity(kept.len());
        let mut df = Vec::with_capacity(kept.len());
        for (col, (term, d)) in kept.into_iter().enumerate() {
            terms.insert(term, col);
            df.push(d);
        }
        let vocab = Vocabulary { terms, df };

        let n = catalog.len() as f32;
        let idf: Vec<f32> =
            vocab.df.iter().map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0).collect();

        // Second pass: raw term frequency times IDF, then divide the row by
        // its L2 norm.
        let mut matrix = CsrMatrix::new(vocab.len());
        for grams in &doc_terms {
            let mut tf: HashMap<usize, f32> = HashMap::new();
            for term in grams {
                if let Some(col) = vocab.column(term) {
                    *tf.entry(col).or_insert(0.0) += 1.0;
                }
            }
            let mut entries: Vec<(usize, f32)> =
                tf.into_iter().map(|(col, t)| (col, t * idf[col])).collect();
            entries.sort_by_key(|e| e.0);
            let norm = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
            if norm > 0.0 {
                for entry in entries.iter_mut() {
                    entry.1 /= norm;
                }
            }
            matrix.push_row(entries);
        }
        tracing::debug!(terms = vocab.len(), nnz = matrix.nnz(), "vectorizer fitted");
        (vocab, matrix)
    }
}

/// Contiguous word n-grams for n = 1..=max_n, space-joined.
fn ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for n in 1..=max_n {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}
