/// Parameters decoded from a query string.
///
/// Keys are unique. A repeated key keeps the position where it was first seen
/// but takes the value of its last occurrence. Values are stored exactly as
/// they appeared in the query string, without percent or `+` decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => value.clone_into(v),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value stored for `key`, or `default` when the key is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Splits a raw query string (the part of a URL after `?`) into parameters.
///
/// Pairs are separated by `&` and split at their first `=`. Segments with no
/// `=` at all, including empty ones, are dropped. Never fails.
#[must_use]
pub fn parse(raw: &str) -> QueryParams {
    let mut params = QueryParams::default();
    if raw.is_empty() {
        return params;
    }

    for pair in raw.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            params.insert(key, value);
        }
    }
    params
}
