use std::collections::HashSet;

use crate::model::Recommendation;

/// Accumulates recommendation entries stage by stage.
///
/// Appends and the footwear replacement are separate operations; duplicates
/// are removed once, in [`RecommendationBuilder::build`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct RecommendationBuilder {
    layers: Vec<String>,
    accessories: Vec<String>,
    footwear: Vec<String>,
    considerations: Vec<String>,
}

impl RecommendationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layers<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layers.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_accessories<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accessories.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_footwear(mut self, item: impl Into<String>) -> Self {
        self.footwear.push(item.into());
        self
    }

    /// Discards all footwear gathered so far in favour of `item`.
    pub fn replace_footwear(mut self, item: impl Into<String>) -> Self {
        self.footwear = vec![item.into()];
        self
    }

    pub fn with_considerations<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.considerations.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Recommendation {
        Recommendation {
            layers: dedup(self.layers),
            accessories: dedup(self.accessories),
            footwear: dedup(self.footwear),
            special_considerations: dedup(self.considerations),
        }
    }
}

/// Drops repeated entries, keeping the first occurrence of each.
fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}
