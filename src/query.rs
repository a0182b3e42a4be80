use crate::QueryValue;

/// Ordered query-string parameters.
///
/// Pairs are serialized in insertion order. Duplicate names are kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, QueryValue)>,
}

impl Query {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter and returns the updated list.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a parameter in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Returns the first value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, QueryValue)] {
        &self.pairs
    }

    /// Renders pairs into the string form handed to `reqwest`.
    pub(crate) fn to_wire(&self) -> Vec<(&str, String)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.to_string()))
            .collect()
    }
}

impl From<()> for Query {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl<K, V> From<Vec<(K, V)>> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
