//! Ordered multi-valued query string

use std::fmt;

/// Query string as an ordered list of key/value pairs
///
/// Keys may repeat (`?tags=a&tags=b`). Order is preserved so rewriting one
/// key leaves the rest of the string untouched. Pairs read from the original
/// string are written back exactly as they came in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<Pair>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair {
    key: String,
    value: String,
    /// Original segment text, `None` for pairs written by `set_all`
    raw: Option<String>,
}

/// Decode like `URLSearchParams`: `+` is a space, invalid UTF-8 becomes U+FFFD
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `?a=1&b=2`, with or without the leading `?`
    ///
    /// Empty segments are skipped and a segment without `=` is a key with an
    /// empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = match segment.split_once('=') {
                    Some((key, value)) => (decode_component(key), decode_component(value)),
                    None => (decode_component(segment), String::new()),
                };
                Pair {
                    key,
                    value,
                    raw: Some(segment.to_string()),
                }
            })
            .collect();
        Self { pairs }
    }

    /// Every value stored under `key`, in order
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|p| p.key == key)
            .map(|p| p.value.clone())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|p| p.key == key)
    }

    /// Replace all values of `key`
    ///
    /// New values take the position of the first existing occurrence, or go
    /// to the end. An empty `values` removes the key.
    pub fn set_all(&mut self, key: &str, values: &[String]) {
        let position = self.pairs.iter().position(|p| p.key == key);
        self.pairs.retain(|p| p.key != key);

        let insert_at = position.unwrap_or(self.pairs.len());
        let tail = self.pairs.split_off(insert_at);
        self.pairs.extend(values.iter().map(|v| Pair {
            key: key.to_string(),
            value: v.clone(),
            raw: None,
        }));
        self.pairs.extend(tail);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize with a leading `?`, or an empty string when there are no pairs
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        format!("?{}", self)
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, "&")?;
            }
            match pair.raw {
                Some(ref raw) => write!(f, "{}", raw)?,
                None => write!(
                    f,
                    "{}={}",
                    urlencoding::encode(&pair.key),
                    urlencoding::encode(&pair.value)
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_multi_valued_keys() {
        let params = QueryParams::parse("?tags=web&lifecycle=experimental&tags=seo");
        assert_eq!(params.get_all("tags"), strings(&["web", "seo"]));
        assert_eq!(params.get_all("lifecycle"), strings(&["experimental"]));
        assert!(params.get_all("missing").is_empty());
    }

    #[test]
    fn test_parse_decodes_values() {
        let params = QueryParams::parse("tags=code%20review&tags=a+b&flag");
        assert_eq!(params.get_all("tags"), strings(&["code review", "a b"]));
        assert!(params.contains_key("flag"));
        assert_eq!(params.get_all("flag"), strings(&[""]));
    }

    #[test]
    fn test_invalid_utf8_decodes_lossily() {
        let params = QueryParams::parse("?ref=%FF&tags=caf%C3%A9");
        assert_eq!(params.get_all("ref"), strings(&["\u{FFFD}"]));
        assert_eq!(params.get_all("tags"), strings(&["café"]));
    }

    #[test]
    fn test_untouched_pairs_written_verbatim() {
        let mut params = QueryParams::parse("?ref=%FF&flag&q=a+b&tags=x");
        params.set_all("tags", &strings(&["y z"]));
        assert_eq!(params.to_query_string(), "?ref=%FF&flag&q=a+b&tags=y%20z");
    }

    #[test]
    fn test_parse_empty() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert_eq!(QueryParams::parse("?").to_query_string(), "");
    }

    #[test]
    fn test_set_all_keeps_position_of_other_keys() {
        let mut params = QueryParams::parse("?page=2&tags=a&tags=b&sort=asc");
        params.set_all("tags", &strings(&["c"]));
        assert_eq!(params.to_query_string(), "?page=2&tags=c&sort=asc");

        params.set_all("tags", &[]);
        assert_eq!(params.to_query_string(), "?page=2&sort=asc");

        params.set_all("lifecycle", &strings(&["experimental", "production"]));
        assert_eq!(
            params.to_query_string(),
            "?page=2&sort=asc&lifecycle=experimental&lifecycle=production"
        );
    }

    #[test]
    fn test_encoding_survives_reparse() {
        let mut params = QueryParams::new();
        let values = strings(&["a&b", "c=d", "space here", "ünï"]);
        params.set_all("tags", &values);

        let reparsed = QueryParams::parse(&params.to_query_string());
        assert_eq!(reparsed.get_all("tags"), values);
    }
}
