//! Query parameters carried by a navigation request
//!
//! A mini-program address such as `detail?id=42&from=home` is split into a route key and
//! these parameters, which are then handed to the host framework alongside the route key.

use std::borrow::Cow;
use std::collections::HashMap;

/// Ordered query parameters parsed from an address
///
/// Pairs keep the order they appeared in. A key may occur more than once; [`get`] returns
/// the first value and [`get_all`] returns every value.
///
/// # Example
///
/// ```
/// use miniapp_router::QueryParams;
///
/// let query = QueryParams::from_query_string("id=42&tag=a&tag=b");
///
/// assert_eq!(query.get("id"), Some("42"));
/// assert_eq!(query.get_as::<u32>("id"), Some(42));
/// assert_eq!(query.get_all("tag"), vec!["a", "b"]);
/// ```
///
/// [`get`]: QueryParams::get
/// [`get_all`]: QueryParams::get_all
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create new empty query params
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a query string (without the leading `?`)
    ///
    /// Keys without `=` get an empty value, empty segments are skipped, `+` decodes to a
    /// space and percent escapes are decoded. Malformed escapes are kept as written.
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key.is_empty() {
                continue;
            }
            params.insert(decode_component(key), decode_component(value));
        }

        params
    }

    /// Get first value for a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a parameter, in order of appearance
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Get parameter as a specific type
    ///
    /// Returns the first value parsed as type T.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.get(key)?.parse().ok()
    }

    /// Append a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Check if parameter exists
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Iterate over all pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Collapse into a map, keeping the first value of repeated keys
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::with_capacity(self.pairs.len());
        for (key, value) in &self.pairs {
            map.entry(key.clone()).or_insert_with(|| value.clone());
        }
        map
    }

    /// Convert back to an encoded query string
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Check if parameters are empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs, counting repeated keys
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

// ============================================================================
// Tests
// ============================================================================
