use crate::catalog::{self, Catalog};
use crate::error::RecError;
use crate::recommend::{self, Recommendation};
use crate::similarity::{self, SimilarityMatrix};
use crate::table::Table;
use crate::titles::TitleIndex;
use crate::vectorizer::{TfidfVectorizer, Vocabulary};

/// The fully built recommender: catalog, fitted vocabulary, pairwise
/// similarity matrix and title lookup. Built once, read-only afterwards;
/// it owns all of its data, so shared references can serve queries from any
/// number of threads without locking.
#[derive(Debug)]
pub struct ModelState {
    catalog: Catalog,
    vocabulary: Vocabulary,
    similarity: SimilarityMatrix,
    titles: TitleIndex,
}

impl ModelState {
    /// Run the full pipeline: join the input tables into a catalog, fit the
    /// TF-IDF vectorizer over the overviews, compute the sigmoid-kernel
    /// similarity matrix and derive the title index.
    pub fn build(movies: &Table, credits: &Table) -> Result<Self, RecError> {
        Self::build_with(movies, credits, &TfidfVectorizer::default())
    }

    pub fn build_with(
        movies: &Table,
        credits: &Table,
        vectorizer: &TfidfVectorizer,
    ) -> Result<Self, RecError> {
        let catalog = catalog::build(movies, credits)?;
        tracing::info!(movies = catalog.len(), "catalog built");
        let (vocabulary, features) = vectorizer.fit_transform(&catalog);
        tracing::info!(terms = vocabulary.len(), nnz = features.nnz(), "overviews vectorized");
        let similarity = similarity::compute(&features)?;
        tracing::info!(n = similarity.len(), "similarity matrix computed");
        let titles = TitleIndex::build(&catalog);
        Ok(Self { catalog, vocabulary, similarity, titles })
    }

    /// Top-k titles most similar to `title` (case-insensitive exact match),
    /// or `None` when the title is not in the catalog.
    pub fn recommend(&self, title: &str, k: usize) -> Option<Vec<Recommendation>> {
        let row = self.titles.lookup(title)?;
        Some(recommend::recommend(row, &self.similarity, &self.catalog, k))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn titles(&self) -> &TitleIndex {
        &self.titles
    }
}
