use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Index;

/// A point in search space: a value for each named variable.
///
/// Variable names are unique keys, iterated in sorted order so that every
/// reduction over an assignment (a gradient norm, a directional derivative)
/// happens in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Assignment {
    values: BTreeMap<String, f64>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a variable, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Returns `true` if `name` has a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variables are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if every value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.values.values().all(|v| v.is_finite())
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Iterates over variable names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns a new assignment with `f` applied to every value.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(&str, f64) -> f64) -> Self {
        self.iter()
            .map(|(name, value)| (name.to_owned(), f(name, value)))
            .collect()
    }
}

impl Index<&str> for Assignment {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `name` is not bound.
    fn index(&self, name: &str) -> &f64 {
        self.values
            .get(name)
            .unwrap_or_else(|| panic!("variable `{name}` is not bound"))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Assignment {
    fn from(pairs: [(K, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Assignment {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_replace_earlier_ones() {
        let values = Assignment::from([("x", 1.0), ("y", 2.0), ("x", 3.0)]);

        assert_eq!(values.len(), 2);
        assert_eq!(values["x"], 3.0);
        assert_eq!(values.get("y"), Some(2.0));
        assert_eq!(values.get("z"), None);
    }

    #[test]
    fn iterates_in_name_order() {
        let values = Assignment::from([("b", 2.0), ("a", 1.0), ("c", 3.0)]);
        let names: Vec<_> = values.names().collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn finiteness() {
        assert!(Assignment::new().is_finite());
        assert!(Assignment::from([("x", 1e300)]).is_finite());
        assert!(!Assignment::from([("x", 1.0), ("y", f64::NAN)]).is_finite());
        assert!(!Assignment::from([("x", f64::NEG_INFINITY)]).is_finite());
    }

    #[test]
    fn map_preserves_names() {
        let values = Assignment::from([("x", 1.0), ("y", -2.0)]);
        let doubled = values.map(|_, v| 2.0 * v);
        assert_eq!(doubled, Assignment::from([("x", 2.0), ("y", -4.0)]));
    }

    #[test]
    #[should_panic(expected = "variable `z` is not bound")]
    fn indexing_unbound_panics() {
        let values = Assignment::from([("x", 1.0)]);
        let _ = values["z"];
    }
}
