use std::collections::{BTreeMap, HashMap};

use crate::error::{HiveAiError, Result};
use crate::ranking::tokenizer::{TokenPattern, Tokenizer};
use crate::ranking::Ranker;

/// Sparse document vector: term id -> weight, iterated in term order
type SparseVector = BTreeMap<usize, f64>;

/// TF-IDF cosine similarity ranker.
///
/// Every call fits a fresh vector space over `[query] + candidates`, so scores
/// only depend on the documents of that call.
#[derive(Debug, Clone, Default)]
pub struct TfidfRanker {
    tokenizer: Tokenizer,
}

impl TfidfRanker {
    pub fn new(pattern: TokenPattern) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(pattern)?,
        })
    }

    pub fn token_pattern(&self) -> TokenPattern {
        self.tokenizer.pattern()
    }
}

impl Ranker for TfidfRanker {
    fn score(&self, query: &str, candidates: &[&str]) -> Result<Vec<f64>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut corpus = Vec::with_capacity(candidates.len() + 1);
        corpus.push(query);
        corpus.extend_from_slice(candidates);

        let space = VectorSpace::fit(&self.tokenizer, &corpus)?;
        tracing::trace!(
            "Fitted TF-IDF space: {} documents, {} terms",
            corpus.len(),
            space.vocabulary_size
        );

        let (query_vec, candidate_vecs) = space
            .vectors
            .split_first()
            .ok_or(HiveAiError::EmptyVocabulary)?;

        Ok(candidate_vecs
            .iter()
            .map(|candidate| cosine_similarity(query_vec, candidate))
            .collect())
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}

/// L2-normalized TF-IDF vectors of one corpus
#[derive(Debug)]
struct VectorSpace {
    vectors: Vec<SparseVector>,
    vocabulary_size: usize,
}

impl VectorSpace {
    fn fit(tokenizer: &Tokenizer, documents: &[&str]) -> Result<Self> {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut term_counts: Vec<SparseVector> = Vec::with_capacity(documents.len());

        for document in documents {
            let mut counts = SparseVector::new();
            for token in tokenizer.tokenize(document) {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(token).or_insert(next_id);
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
            term_counts.push(counts);
        }

        if vocabulary.is_empty() {
            return Err(HiveAiError::EmptyVocabulary);
        }

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for counts in &term_counts {
            for id in counts.keys() {
                document_frequency[*id] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = term_counts
            .into_iter()
            .map(|mut vector| {
                for (id, weight) in vector.iter_mut() {
                    *weight *= idf[*id];
                }
                normalize(&mut vector);
                vector
            })
            .collect();

        Ok(Self {
            vectors,
            vocabulary_size: vocabulary.len(),
        })
    }
}

fn squared_norm(vector: &SparseVector) -> f64 {
    vector.values().map(|w| w * w).sum()
}

fn norm(vector: &SparseVector) -> f64 {
    squared_norm(vector).sqrt()
}

fn normalize(vector: &mut SparseVector) {
    let length = norm(vector);
    if length > 0.0 {
        for weight in vector.values_mut() {
            *weight /= length;
        }
    }
}

/// Cosine similarity in [0, 1]; 0 when either vector is all-zero.
///
/// Identical vectors score exactly 1.0: the dot product and both squared
/// norms are summed in the same term order.
fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (squared_a, squared_b) = (squared_norm(a), squared_norm(b));
    if squared_a == 0.0 || squared_b == 0.0 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(id, w)| large.get(id).map(|other| w * other))
        .fold(0.0, |acc, x| acc + x);

    (dot / (squared_a * squared_b).sqrt()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_single_token() {
        let ranker = TfidfRanker::default();
        let scores = ranker.score("rust", &["rust"]).unwrap();
        assert_eq!(scores, vec![1.0]);
    }

    #[test]
    fn test_disjoint_vocabulary() {
        let ranker = TfidfRanker::default();
        let scores = ranker.score("alpha", &["beta"]).unwrap();
        assert_eq!(scores, vec![0.0]);
        assert!(scores[0].is_sign_positive());
    }

    #[test]
    fn test_no_shared_terms_is_positive_zero() {
        let ranker = TfidfRanker::default();
        let scores = ranker.score("Guitar", &["guitar lessons", "piano"]).unwrap();
        assert!(scores.iter().all(|s| *s == 0.0 && s.is_sign_positive()));
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let ranker = TfidfRanker::default();
        let scores = ranker.score("rust go", &["", "rust"]).unwrap();
        assert_eq!(scores[0], 0.0);
        assert!(scores[1] > 0.0);
    }

    #[test]
    fn test_no_candidates() {
        let ranker = TfidfRanker::default();
        assert!(ranker.score("rust", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_vocabulary_is_error() {
        let ranker = TfidfRanker::default();
        let err = ranker.score("", &["  ", ""]).unwrap_err();
        assert!(matches!(err, HiveAiError::EmptyVocabulary));
    }

    #[test]
    fn test_smoothed_idf_weights() {
        // corpus: ["a b", "a", "b c"], N = 3
        // idf(a) = idf(b) = ln(4/3) + 1, idf(c) = ln(4/2) + 1
        let ranker = TfidfRanker::default();
        let scores = ranker.score("a b", &["a", "b c"]).unwrap();

        let idf_ab = (4.0f64 / 3.0).ln() + 1.0;
        let idf_c = 2.0f64.ln() + 1.0;

        // query = (idf_ab, idf_ab) normalized -> each component 1/sqrt(2)
        let expected_a = 1.0 / 2.0f64.sqrt();
        let expected_bc = (idf_ab / 2.0f64.sqrt()) / (idf_ab.powi(2) + idf_c.powi(2)).sqrt();

        assert!(approx(scores[0], expected_a));
        assert!(approx(scores[1], expected_bc));
    }

    #[test]
    fn test_identical_multi_token_documents() {
        let ranker = TfidfRanker::default();
        let scores = ranker
            .score("rust python hiking music", &["rust python hiking music", "rust"])
            .unwrap();
        assert_eq!(scores[0], 1.0);
        assert!(scores[1] < 1.0);
    }

    #[test]
    fn test_term_frequency_counts() {
        let ranker = TfidfRanker::default();
        let scores = ranker.score("go", &["go go rust", "go rust"]).unwrap();
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_whitespace_mode_is_case_sensitive() {
        let ranker = TfidfRanker::default();
        assert_eq!(ranker.score("rust", &["Rust"]).unwrap(), vec![0.0]);

        let word = TfidfRanker::new(TokenPattern::Word).unwrap();
        assert_eq!(word.score("rust", &["Rust"]).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_vocabulary_size() {
        let space = VectorSpace::fit(&Tokenizer::default(), &["a b", "b c"]).unwrap();
        assert_eq!(space.vocabulary_size, 3);
        assert_eq!(space.vectors.len(), 2);
        assert!(approx(norm(&space.vectors[0]), 1.0));
    }
}
