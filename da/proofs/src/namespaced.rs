use serde::{Deserialize, Serialize};

use da_share::Share;

/// Shares of a single row matching a queried namespace, together with the
/// namespaced proof for that row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NamespacedRow<N> {
    pub shares: Vec<Share>,
    pub proof: N,
}

/// All matching rows of a square for one namespace, ordered by row index.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NamespacedShares<N>(pub Vec<NamespacedRow<N>>);

impl<N> NamespacedShares<N> {
    pub fn rows(&self) -> impl Iterator<Item = &NamespacedRow<N>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the rows into shares in square order.
    pub fn flatten(&self) -> Vec<Share> {
        self.0
            .iter()
            .flat_map(|row| row.shares.iter().cloned())
            .collect()
    }
}

impl<N> FromIterator<NamespacedRow<N>> for NamespacedShares<N> {
    fn from_iter<T: IntoIterator<Item = NamespacedRow<N>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
