//! Nearest-region search over combined age vectors.
//!
//! Two interchangeable metrics are provided:
//! - **Cosine**: angle between the raw vectors, higher is closer
//! - **Hybrid**: Euclidean distance between age-proportion vectors plus the
//!   relative difference in total population, lower is closer
//!
//! The scan is a linear pass with no index; inputs are a few hundred regions.

use agepop_model::{AgeProfile, CombinedVector, Metric, SimilarityResult};

/// A scoring strategy for the similarity scan.
pub trait SimilarityMetric {
    /// Which named metric this is.
    fn metric(&self) -> Metric;

    /// Score `candidate` against `query`. `None` when the score is undefined
    /// (a zero-norm or zero-sum vector).
    fn score(&self, query: &[f64], candidate: &[f64]) -> Option<f64>;

    /// True if `score` strictly beats `best`. Ties keep the earlier candidate.
    fn is_better(&self, score: f64, best: f64) -> bool;
}

/// Cosine similarity strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

/// Ratio + scale distance strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hybrid;

impl SimilarityMetric for Cosine {
    fn metric(&self) -> Metric {
        Metric::Cosine
    }

    fn score(&self, query: &[f64], candidate: &[f64]) -> Option<f64> {
        cosine_similarity(query, candidate)
    }

    fn is_better(&self, score: f64, best: f64) -> bool {
        score > best
    }
}

impl SimilarityMetric for Hybrid {
    fn metric(&self) -> Metric {
        Metric::Hybrid
    }

    fn score(&self, query: &[f64], candidate: &[f64]) -> Option<f64> {
        hybrid_distance(query, candidate).map(|d| d.total())
    }

    fn is_better(&self, score: f64, best: f64) -> bool {
        score < best
    }
}

impl SimilarityMetric for Metric {
    fn metric(&self) -> Metric {
        *self
    }

    fn score(&self, query: &[f64], candidate: &[f64]) -> Option<f64> {
        match self {
            Metric::Cosine => Cosine.score(query, candidate),
            Metric::Hybrid => Hybrid.score(query, candidate),
        }
    }

    fn is_better(&self, score: f64, best: f64) -> bool {
        match self {
            Metric::Cosine => Cosine.is_better(score, best),
            Metric::Hybrid => Hybrid.is_better(score, best),
        }
    }
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// `dot(a, b) / (|a| * |b|)`; `None` if either vector has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    Some(dot / (norm_a * norm_b))
}

/// Components of the hybrid distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridDistance {
    /// Euclidean norm of the difference between the age-proportion vectors.
    pub ratio: f64,
    /// `|sum(a) - sum(b)| / sum(a)`.
    pub scale: f64,
}

impl HybridDistance {
    pub fn total(&self) -> f64 {
        self.ratio + self.scale
    }
}

/// Hybrid distance of `b` from `a`; `None` if either sums to zero.
pub fn hybrid_distance(a: &[f64], b: &[f64]) -> Option<HybridDistance> {
    let sum_a: f64 = a.iter().sum();
    let sum_b: f64 = b.iter().sum();
    if sum_a == 0.0 || sum_b == 0.0 {
        return None;
    }
    let ratio = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x / sum_a - y / sum_b;
            d * d
        })
        .sum::<f64>()
        .sqrt();
    let scale = (sum_a - sum_b).abs() / sum_a;
    Some(HybridDistance { ratio, scale })
}

/// Finds the candidate closest to `query` under `metric`.
///
/// Candidates named `query_name` and candidates with zero total population
/// are skipped. Returns `None` when nothing is eligible, including when the
/// query itself has zero population.
pub fn find_most_similar<P, M>(
    query: &CombinedVector,
    query_name: &str,
    candidates: &[P],
    metric: &M,
) -> Option<SimilarityResult>
where
    P: AgeProfile,
    M: SimilarityMetric + ?Sized,
{
    if query.total() == 0 {
        tracing::warn!(
            region = query_name,
            "query region has zero population; no similarity defined"
        );
        return None;
    }

    let query_name = query_name.trim();
    let query_values = query.to_f64();
    let mut best: Option<(&str, CombinedVector, f64)> = None;
    let mut excluded = 0usize;

    for candidate in candidates {
        if candidate.name() == query_name {
            excluded += 1;
            continue;
        }
        let vector = candidate.combined();
        if vector.total() == 0 {
            excluded += 1;
            continue;
        }
        if vector.len() != query.len() {
            tracing::warn!(
                region = candidate.name(),
                expected = query.len(),
                found = vector.len(),
                "skipping candidate with different age vector length"
            );
            excluded += 1;
            continue;
        }
        let Some(score) = metric.score(&query_values, &vector.to_f64()) else {
            excluded += 1;
            continue;
        };
        let replace = match &best {
            Some((_, _, best_score)) => metric.is_better(score, *best_score),
            None => true,
        };
        if replace {
            best = Some((candidate.name(), vector, score));
        }
    }

    tracing::debug!(
        region = query_name,
        metric = %metric.metric(),
        candidates = candidates.len(),
        excluded,
        found = best.is_some(),
        "similarity scan finished"
    );

    best.map(|(name, vector, score)| SimilarityResult {
        matched_region_name: name.to_string(),
        matched_vector: vector,
        score,
        metric: metric.metric(),
    })
}
