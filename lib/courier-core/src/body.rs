//! JSON body and query-string encoding utilities.

use bytes::Bytes;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::Result;

/// Characters percent-encoded in query keys and values.
///
/// Structural query characters (`&`, `=`, `#`), `%` itself, space, and the
/// characters that are invalid in a URL query are all escaped. `+` is absent
/// on purpose: it passes through the encoder literally and is rewritten by a
/// second pass in [`encode_query`] so the final query never contains a bare
/// `+` that a form-decoding consumer would read as a space.
const QUERY_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'=')
    .add(b'\'')
    .add(b'`')
    .add(b'?');

/// Encode key-value pairs into a query string.
///
/// Pairs are emitted one per entry, in iteration order, as
/// `key=value` joined by `&`. After percent-encoding, any literal `+` left in
/// the output is rewritten to `%2B`; percent-decoding the result therefore
/// recovers the original values exactly, including `+` characters.
///
/// # Example
///
/// ```
/// use courier_core::encode_query;
///
/// let query = encode_query([("q", "a+b"), ("page", "1")]);
/// assert_eq!(query, "q=a%2Bb&page=1");
/// ```
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let encoded = pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_ENCODE),
                utf8_percent_encode(value, QUERY_ENCODE)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    // Second pass over the already-encoded output only; the values themselves
    // were never form-encoded, so every remaining '+' is a literal one.
    encoded.replace('+', "%2B")
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use courier_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: String }
///
/// let user = User { name: "Alice".to_string() };
/// let bytes = to_json(&user).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Alice"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a failed decode reports the exact path to
/// the field that did not match (e.g., "user.address.city").
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if deserialization fails.
///
/// # Example
///
/// ```
/// use courier_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct User { name: String }
///
/// let user: User = from_json(br#"{"name":"Alice"}"#).expect("deserialize");
/// assert_eq!(user, User { name: "Alice".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;

    fn percent_decode(input: &str) -> String {
        percent_encoding::percent_decode_str(input)
            .decode_utf8()
            .expect("utf8")
            .into_owned()
    }

    #[test]
    fn encode_query_plain_pairs() {
        let query = encode_query([("q", "rust"), ("page", "1")]);
        assert_eq!(query, "q=rust&page=1");
    }

    #[test]
    fn encode_query_escapes_space_as_percent_20() {
        let query = encode_query([("q", "hello world")]);
        assert_eq!(query, "q=hello%20world");
    }

    #[test]
    fn encode_query_rewrites_literal_plus() {
        let query = encode_query([("q", "a+b")]);
        assert_eq!(query, "q=a%2Bb");
        assert!(!query.contains('+'));
    }

    #[test]
    fn encode_query_escapes_structural_characters() {
        let query = encode_query([("k", "a&b=c#d")]);
        assert_eq!(query, "k=a%26b%3Dc%23d");
    }

    #[test]
    fn encode_query_escapes_percent() {
        // A pre-escaped '%' must not survive as-is, or decoding would not
        // round-trip.
        let query = encode_query([("k", "100%")]);
        assert_eq!(query, "k=100%25");
        assert_eq!(percent_decode("100%25"), "100%");
    }

    #[test]
    fn encode_query_is_idempotent() {
        let pairs = [("b", "2"), ("a", "1+1")];
        assert_eq!(encode_query(pairs), encode_query(pairs));
    }

    #[test]
    fn encode_query_round_trips_plus_and_space() {
        let original = "a+b c+d";
        let query = encode_query([("q", original)]);

        let encoded_value = query.strip_prefix("q=").expect("has key");
        assert_eq!(percent_decode(encoded_value), original);
    }

    #[test]
    fn encode_query_empty() {
        let query = encode_query(std::iter::empty::<(&str, &str)>());
        assert_eq!(query, "");
    }

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
            age: u32,
        }

        let user = User {
            name: "Alice".to_string(),
            age: 30,
        };

        let bytes = to_json(&user).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"name":"Alice","age":30}"#);
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            name: String,
            age: u32,
        }

        let user: User = from_json(br#"{"name":"Alice","age":30}"#).expect("deserialize");
        assert_eq!(
            user,
            User {
                name: "Alice".to_string(),
                age: 30,
            }
        );
    }

    #[test]
    fn from_json_syntax_error() {
        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            name: String,
        }

        let result: Result<User> = from_json(b"not json");
        let err = result.expect_err("should fail");
        assert!(matches!(err, crate::Error::Decode { .. }));
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        let result: Result<User> = from_json(br#"{"address":{}}"#);
        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("address"), "expected path in error: {msg}");
        assert!(msg.contains("city"), "expected field in error: {msg}");
    }
}
