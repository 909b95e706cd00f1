//! Filter evaluators for list operations.
//!
//! A [`FieldFilter`] pairs a field extractor with a query and a
//! [`MatchMode`]. Both modes compare case-insensitively. A [`FilterSet`]
//! combines filters with logical AND and keeps the input order.
//!
//! An empty query builds no filter at all, so an absent filter argument lets
//! the whole collection through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::matching::fold;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Whole-value match after case folding.
    Exact,
    /// Substring match after case folding.
    Contains,
}

/// Predicate over one field of `T`.
pub struct FieldFilter<T> {
    extract: Box<dyn Fn(&T) -> &str + Send + Sync>,
    query: String,
    mode: MatchMode,
}

impl<T> FieldFilter<T> {
    /// Build a filter, or `None` when `query` is empty.
    pub fn new<F>(extract: F, query: &str, mode: MatchMode) -> Option<Self>
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
    {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            extract: Box::new(extract),
            query: fold(query),
            mode,
        })
    }

    pub fn matches(&self, item: &T) -> bool {
        let value = fold((self.extract)(item));
        match self.mode {
            MatchMode::Exact => value == self.query,
            MatchMode::Contains => value.contains(&self.query),
        }
    }
}

impl FieldFilter<Value> {
    /// Filter JSON objects on a top-level string field. Missing or
    /// non-string fields read as empty.
    pub fn json_field(field: impl Into<String>, query: &str, mode: MatchMode) -> Option<Self> {
        let field = field.into();
        Self::new(
            move |item: &Value| item.get(&field).and_then(Value::as_str).unwrap_or(""),
            query,
            mode,
        )
    }
}

impl<T> std::fmt::Debug for FieldFilter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldFilter")
            .field("query", &self.query)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Conjunction of field filters.
#[derive(Debug)]
pub struct FilterSet<T> {
    filters: Vec<FieldFilter<T>>,
}

impl<T> FilterSet<T> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter if one was built (builder pattern).
    pub fn with(mut self, filter: Option<FieldFilter<T>>) -> Self {
        if let Some(filter) = filter {
            self.filters.push(filter);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }

    /// Keep the matching items in their original order.
    pub fn apply(&self, items: Vec<T>) -> Vec<T> {
        if self.is_empty() {
            return items;
        }
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

impl<T> Default for FilterSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Vpc {
        label: String,
        region: String,
    }

    fn vpc(label: &str, region: &str) -> Vpc {
        Vpc {
            label: label.to_string(),
            region: region.to_string(),
        }
    }

    fn labels(items: &[Vpc]) -> Vec<&str> {
        items.iter().map(|v| v.label.as_str()).collect()
    }

    #[test]
    fn test_empty_query_builds_nothing() {
        assert!(FieldFilter::new(|v: &Vpc| v.label.as_str(), "", MatchMode::Contains).is_none());
    }

    #[test]
    fn test_contains_keeps_order() {
        let items = vec![vpc("prod-vpc", "us-east"), vpc("dev-vpc", "us-east"), vpc("staging-prod", "eu-west")];
        let set = FilterSet::new().with(FieldFilter::new(
            |v: &Vpc| v.label.as_str(),
            "prod",
            MatchMode::Contains,
        ));
        let result = set.apply(items);
        assert_eq!(labels(&result), vec!["prod-vpc", "staging-prod"]);
    }

    #[test]
    fn test_exact_is_case_insensitive_and_whole_value() {
        let filter =
            FieldFilter::new(|v: &Vpc| v.region.as_str(), "US-EAST", MatchMode::Exact).unwrap();
        assert!(filter.matches(&vpc("a", "us-east")));
        assert!(!filter.matches(&vpc("a", "us-east-2")));
        assert!(!filter.matches(&vpc("a", "us-eas")));
    }

    #[test]
    fn test_filters_compose_with_and() {
        let items = vec![vpc("prod-vpc", "us-east"), vpc("dev-vpc", "us-east"), vpc("staging-prod", "eu-west")];
        let set = FilterSet::new()
            .with(FieldFilter::new(|v: &Vpc| v.label.as_str(), "PROD", MatchMode::Contains))
            .with(FieldFilter::new(|v: &Vpc| v.region.as_str(), "eu-west", MatchMode::Exact));
        assert_eq!(set.len(), 2);
        assert_eq!(labels(&set.apply(items)), vec!["staging-prod"]);
    }

    #[test]
    fn test_empty_set_passes_everything() {
        let items = vec![vpc("b", "x"), vpc("a", "y")];
        let set: FilterSet<Vpc> = FilterSet::new().with(None);
        assert!(set.is_empty());
        assert_eq!(labels(&set.apply(items)), vec!["b", "a"]);
    }

    #[test]
    fn test_json_field() {
        let domains = vec![
            json!({"domain": "prod-vpc", "type": "master"}),
            json!({"domain": "dev-vpc", "type": "master"}),
            json!({"domain": "staging-prod", "type": "slave"}),
            json!({"id": 7}),
        ];
        let set = FilterSet::new()
            .with(FieldFilter::json_field("domain", "prod", MatchMode::Contains))
            .with(FieldFilter::json_field("type", "Master", MatchMode::Exact));
        let result = set.apply(domains);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["domain"], "prod-vpc");
    }
}
