use serde::{Deserialize, Serialize};

use crate::features::ICU;

/// One build-matrix entry derived from a single feature combination.
/// Field order matters: it is the key order of the serialized JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub features: String,
    pub base: String,
    pub suffix: String,
}

impl FeatureSet {
    /// Derives the three matrix fields from one ordered feature subset.
    fn from_combo(combo: &[&str]) -> Self {
        let features = combo.join(",");
        let suffix = if combo.is_empty() {
            String::new()
        } else {
            format!("-{}", combo.join("-"))
        };
        let base = if combo.contains(&ICU) { "icu" } else { "native" };
        FeatureSet {
            features,
            base: base.to_string(),
            suffix,
        }
    }
}

/// Enumerates every subset of `features` and derives a [`FeatureSet`] for
/// each. Subsets are produced by increasing size, and within each size in the
/// order the names appear in the input, so the output is deterministic.
///
/// # Example
/// ```
/// use featuresets::matrix::enumerate;
///
/// let sets = enumerate(&["gcp", "icu"]);
/// assert_eq!(sets.len(), 4);
/// assert_eq!(sets[0].features, "");
/// assert_eq!(sets[3].suffix, "-gcp-icu");
/// ```
pub fn enumerate(features: &[&str]) -> Vec<FeatureSet> {
    let mut sets = Vec::with_capacity(1usize << features.len());
    for k in 0..=features.len() {
        push_combinations(features, k, &mut sets);
    }
    sets
}

/// Appends a [`FeatureSet`] for every k-subset of `features`, choosing
/// indices in increasing order so each size group comes out in the same
/// relative order as the input list.
fn push_combinations(features: &[&str], k: usize, out: &mut Vec<FeatureSet>) {
    let n = features.len();
    if k == 0 {
        out.push(FeatureSet::from_combo(&[]));
        return;
    }

    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        let combo: Vec<&str> = indices.iter().map(|&i| features[i]).collect();
        out.push(FeatureSet::from_combo(&combo));

        // Find the rightmost index that has room to advance.
        let mut i = k;
        while i > 0 && indices[i - 1] == n - k + (i - 1) {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        indices[i - 1] += 1;
        for j in i..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// Returns the matrix serialized as a single-line JSON array, the format the
/// pipeline consumes.
pub fn matrix_json(sets: &[FeatureSet]) -> serde_json::Result<String> {
    serde_json::to_string(sets)
}
