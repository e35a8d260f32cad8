//! Storage keys for (field, token) pairs.
//!
//! A key is `field + "/" + token`. Fields may themselves contain `/`, so inside
//! the field part `\` is written as `\\` and `/` as `\/`; the first unescaped
//! `/` is the separator and the token is stored verbatim. For the common case of
//! a field without `/` or `\` the key is exactly `field/token`.

use std::fmt;

/// Separator between the field and the token.
pub const SEPARATOR: char = '/';

const ESCAPE: char = '\\';

/// The unique storage identity of one posting list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermKey(String);

impl TermKey {
    /// Build the key for `field` and `token`.
    ///
    /// Both parts are expected to be non-empty; callers filter empty fields and
    /// tokens before building keys.
    pub fn new(field: &str, token: &str) -> Self {
        let mut key = String::with_capacity(field.len() + token.len() + 1);
        push_escaped_field(&mut key, field);
        key.push(SEPARATOR);
        key.push_str(token);
        TermKey(key)
    }

    /// Prefix shared by every key of `field`, separator included.
    pub fn field_prefix(field: &str) -> String {
        let mut prefix = String::with_capacity(field.len() + 1);
        push_escaped_field(&mut prefix, field);
        prefix.push(SEPARATOR);
        prefix
    }

    /// Recover `(field, token)` from a stored key.
    ///
    /// Returns `None` when the key has no unescaped separator.
    pub fn parse(key: &str) -> Option<(String, String)> {
        let mut field = String::new();
        let mut chars = key.char_indices();
        while let Some((idx, c)) = chars.next() {
            match c {
                ESCAPE => field.push(chars.next()?.1),
                SEPARATOR => {
                    let token = &key[idx + SEPARATOR.len_utf8()..];
                    return Some((field, token.to_string()));
                }
                _ => field.push(c),
            }
        }
        None
    }

    /// The key as stored in the `id` column.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn push_escaped_field(out: &mut String, field: &str) {
    for c in field.chars() {
        if c == SEPARATOR || c == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TermKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key() {
        assert_eq!(TermKey::new("name", "amsterdam").as_str(), "name/amsterdam");
        assert_eq!(TermKey::field_prefix("name"), "name/");
    }

    #[test]
    fn test_token_is_not_escaped() {
        let key = TermKey::new("path", "a/b");
        assert_eq!(key.as_str(), "path/a/b");
        assert_eq!(
            TermKey::parse(key.as_str()),
            Some(("path".to_string(), "a/b".to_string()))
        );
    }

    #[test]
    fn test_slash_in_field_does_not_collide() {
        let a = TermKey::new("a/b", "c");
        let b = TermKey::new("a", "b/c");
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "a\\/b/c");
        assert_eq!(b.as_str(), "a/b/c");

        assert_eq!(
            TermKey::parse(a.as_str()),
            Some(("a/b".to_string(), "c".to_string()))
        );
        assert_eq!(
            TermKey::parse(b.as_str()),
            Some(("a".to_string(), "b/c".to_string()))
        );
    }

    #[test]
    fn test_backslash_in_field() {
        let key = TermKey::new("c:\\docs", "x");
        assert_eq!(key.as_str(), "c:\\\\docs/x");
        assert_eq!(
            TermKey::parse(key.as_str()),
            Some(("c:\\docs".to_string(), "x".to_string()))
        );
    }

    #[test]
    fn test_parse_without_separator() {
        assert_eq!(TermKey::parse("nofield"), None);
        assert_eq!(TermKey::parse("dangling\\"), None);
    }
}
