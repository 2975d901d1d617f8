//! Navigation-token codecs
//!
//! The deep-link token can live in the query string
//! (`?contributor=<login>`) or in the hash fragment (`#<login>`). Both
//! forms go through `TokenCodec` so the router control flow is written
//! once and the encoding is a pluggable strategy.

use url::Url;

/// Query parameter carrying the contributor login.
const CONTRIBUTOR_PARAM: &str = "contributor";

pub trait TokenCodec {
  /// Read the token from `url`. Empty or whitespace-only values count
  /// as absent.
  fn extract(&self, url: &Url) -> Option<String>;

  /// Write `login` as the token, leaving the rest of the URL intact.
  fn apply(&self, url: &mut Url, login: &str);

  /// Remove the token from `url`.
  fn clear(&self, url: &mut Url);
}

/// `?contributor=<login>` form. The value is URL-encoded on write and
/// decoded on read; other query parameters are preserved.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryParamCodec;

impl TokenCodec for QueryParamCodec {
  fn extract(&self, url: &Url) -> Option<String> {
    url
      .query_pairs()
      .find(|(key, _)| key == CONTRIBUTOR_PARAM)
      .map(|(_, value)| value.trim().to_string())
      .filter(|value| !value.is_empty())
  }

  fn apply(&self, url: &mut Url, login: &str) {
    let others = other_pairs(url);
    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (key, value) in &others {
      pairs.append_pair(key, value);
    }
    pairs.append_pair(CONTRIBUTOR_PARAM, login);
  }

  fn clear(&self, url: &mut Url) {
    let others = other_pairs(url);
    if others.is_empty() {
      // Drop the trailing '?' along with the last parameter.
      url.set_query(None);
      return;
    }
    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (key, value) in &others {
      pairs.append_pair(key, value);
    }
  }
}

fn other_pairs(url: &Url) -> Vec<(String, String)> {
  url
    .query_pairs()
    .filter(|(key, _)| key != CONTRIBUTOR_PARAM)
    .map(|(key, value)| (key.into_owned(), value.into_owned()))
    .collect()
}

/// `#<login>` form. The token is the fragment taken verbatim after the
/// leading `#`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashFragmentCodec;

impl TokenCodec for HashFragmentCodec {
  fn extract(&self, url: &Url) -> Option<String> {
    url
      .fragment()
      .map(|fragment| fragment.trim().to_string())
      .filter(|fragment| !fragment.is_empty())
  }

  fn apply(&self, url: &mut Url, login: &str) {
    url.set_fragment(Some(login));
  }

  fn clear(&self, url: &mut Url) {
    url.set_fragment(None);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
  }

  #[test]
  fn test_query_extract() {
    let codec = QueryParamCodec;
    assert_eq!(codec.extract(&url("https://a.test/")), None);
    assert_eq!(
      codec.extract(&url("https://a.test/?contributor=alice")),
      Some("alice".to_string())
    );
    // Trimmed, and whitespace-only counts as absent.
    assert_eq!(
      codec.extract(&url("https://a.test/?contributor=%20alice%20")),
      Some("alice".to_string())
    );
    assert_eq!(codec.extract(&url("https://a.test/?contributor=%20%20")), None);
    assert_eq!(codec.extract(&url("https://a.test/?contributor=")), None);
  }

  #[test]
  fn test_query_apply_preserves_other_params() {
    let codec = QueryParamCodec;
    let mut u = url("https://a.test/wall?tab=top&page=2");
    codec.apply(&mut u, "alice");
    assert_eq!(codec.extract(&u), Some("alice".to_string()));
    assert!(u.query().unwrap().contains("tab=top"));
    assert!(u.query().unwrap().contains("page=2"));
  }

  #[test]
  fn test_query_apply_replaces_existing_token() {
    let codec = QueryParamCodec;
    let mut u = url("https://a.test/?contributor=alice");
    codec.apply(&mut u, "bob");
    assert_eq!(codec.extract(&u), Some("bob".to_string()));
    assert_eq!(u.query_pairs().count(), 1);
  }

  #[test]
  fn test_query_apply_encodes_value() {
    let codec = QueryParamCodec;
    let mut u = url("https://a.test/");
    codec.apply(&mut u, "a b&c");
    assert_eq!(codec.extract(&u), Some("a b&c".to_string()));
  }

  #[test]
  fn test_query_clear() {
    let codec = QueryParamCodec;

    let mut u = url("https://a.test/wall?contributor=alice&tab=top");
    codec.clear(&mut u);
    assert_eq!(codec.extract(&u), None);
    assert!(u.query().unwrap().contains("tab=top"));

    // Last parameter removed drops the query entirely.
    let mut u = url("https://a.test/wall?contributor=alice");
    codec.clear(&mut u);
    assert_eq!(u.as_str(), "https://a.test/wall");
  }

  #[test]
  fn test_hash_extract() {
    let codec = HashFragmentCodec;
    assert_eq!(codec.extract(&url("https://a.test/")), None);
    assert_eq!(codec.extract(&url("https://a.test/#")), None);
    assert_eq!(
      codec.extract(&url("https://a.test/#alice")),
      Some("alice".to_string())
    );
  }

  #[test]
  fn test_hash_apply_and_clear() {
    let codec = HashFragmentCodec;
    let mut u = url("https://a.test/wall?tab=top");
    codec.apply(&mut u, "alice");
    assert_eq!(u.as_str(), "https://a.test/wall?tab=top#alice");
    codec.clear(&mut u);
    assert_eq!(u.as_str(), "https://a.test/wall?tab=top");
  }
}
