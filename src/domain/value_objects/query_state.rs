use std::collections::BTreeMap;

use url::form_urlencoded;

/// Key/value pairs of the current URL's query string.
///
/// A key that appears more than once keeps every value, in order. Callers
/// asking for a single value with [`QueryState::get`] only get an answer when
/// the key is single-valued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string (without the leading `?`).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut state = Self::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            state
                .params
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        state
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.entry(key.into()).or_default().push(value.into());
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match self.params.get(key)?.as_slice() {
            [value] => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.params {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryState
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |state, (key, value)| state.with(key, value))
    }
}
