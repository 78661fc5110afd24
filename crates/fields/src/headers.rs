//! Ordered, case-insensitive header collection with a duplicate policy.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::Index;

use bytes::BytesMut;
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::trace;

use crate::error::FieldError;
use crate::header::Header;
use crate::validate::{allows_duplicates, is_comma_separated};

fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// The set of header fields attached to one HTTP message.
///
/// Entries keep insertion order; lookups fold the name to ASCII lowercase.
/// Whether a field name may appear more than once is fixed when the
/// collection is constructed and never changes afterward. Fields in
/// [`ALLOWED_DUPLICATE_FIELDS`] (`Set-Cookie`) may always repeat,
/// whatever the policy.
///
/// Internally this is an insertion-ordered entry list plus a folded-name
/// index: `get`/`contains` are O(1) average, while `remove` and `set`
/// rebuild the index in O(n). Header sets are small and read-dominated,
/// so mutation cost is the right place to pay.
///
/// A `Headers` value is not internally synchronized: share `&Headers`
/// freely across threads for reads, but mutation requires exclusive
/// access, as the `&mut self` receivers already enforce.
///
/// # Example
///
/// ```
/// use http_fields::Headers;
///
/// let mut headers = Headers::new();
/// headers.add_raw("Content-Type", "text/html")?;
/// headers.add_raw("Set-Cookie", "a=1")?;
/// headers.add_raw("Set-Cookie", "b=2")?;
///
/// assert_eq!(headers.get("content-type"), Some("text/html"));
/// assert_eq!(headers.get_all("SET-COOKIE"), ["a=1", "b=2"]);
/// assert!(headers.add_raw("Content-Type", "text/plain").is_err());
/// # Ok::<(), http_fields::FieldError>(())
/// ```
///
/// [`ALLOWED_DUPLICATE_FIELDS`]: crate::validate::ALLOWED_DUPLICATE_FIELDS
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<Header>,
    index: HashMap<String, Vec<usize>>,
    allow_duplicates: bool,
}

impl Headers {
    /// An empty collection that rejects duplicate field names.
    pub fn new() -> Headers {
        Headers::with_duplicates(false)
    }

    /// An empty collection with an explicit duplicate policy.
    pub fn with_duplicates(allow_duplicates: bool) -> Headers {
        Headers { entries: Vec::new(), index: HashMap::new(), allow_duplicates }
    }

    /// The duplicate policy fixed at construction.
    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Appends a header, enforcing the duplicate policy.
    ///
    /// Under the strict policy, a second entry for a non-exempt folded
    /// name fails with [`FieldError::DuplicateField`]; for the comma
    /// separated list fields the error says the values should have been
    /// combined instead.
    pub fn add(&mut self, header: Header) -> Result<(), FieldError> {
        let folded = header.folded_name();
        if !self.allow_duplicates && self.index.contains_key(&folded) && !allows_duplicates(&folded)
        {
            return Err(FieldError::duplicate_field(header.name(), is_comma_separated(&folded)));
        }
        trace!(name = header.name(), "add header field");
        self.push_entry(folded, header);
        Ok(())
    }

    /// Validates a raw name/value pair and appends it.
    ///
    /// A validation failure and a duplicate failure surface as distinct
    /// [`FieldError`] kinds.
    pub fn add_raw(
        &mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<(), FieldError> {
        self.add(Header::new(name, value)?)
    }

    /// The first inserted value for the name, folding case; `None` when
    /// the field is absent.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let positions = self.index.get(&fold(name.as_ref()))?;
        positions.first().map(|&i| self.entries[i].value())
    }

    /// Every value for the name in insertion order; empty when absent.
    pub fn get_all(&self, name: impl AsRef<str>) -> Vec<&str> {
        match self.index.get(&fold(name.as_ref())) {
            Some(positions) => positions.iter().map(|&i| self.entries[i].value()).collect(),
            None => Vec::new(),
        }
    }

    /// Like [`get`](Headers::get), but the field is expected to exist:
    /// absence is [`FieldError::MissingField`], not `None`.
    pub fn require(&self, name: impl AsRef<str>) -> Result<&str, FieldError> {
        let name = name.as_ref();
        self.get(name).ok_or_else(|| FieldError::missing_field(name))
    }

    /// Replaces every entry for the name with a single validated entry,
    /// inserting if absent.
    ///
    /// This is the one operation that collapses even exempt multi-value
    /// names: assignment means "set to exactly this".
    pub fn set(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<(), FieldError> {
        let header = Header::new(name, value)?;
        let folded = header.folded_name();
        trace!(name = header.name(), "set header field");
        self.drop_name(&folded);
        self.push_entry(folded, header);
        Ok(())
    }

    /// Removes every entry for the name; fails with
    /// [`FieldError::MissingField`] when none existed.
    pub fn remove(&mut self, name: impl AsRef<str>) -> Result<(), FieldError> {
        let name = name.as_ref();
        let folded = fold(name);
        if !self.index.contains_key(&folded) {
            return Err(FieldError::missing_field(name));
        }
        trace!(name, "remove header field");
        self.drop_name(&folded);
        Ok(())
    }

    /// Case-insensitive existence check, O(1) average.
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.index.contains_key(&fold(name.as_ref()))
    }

    /// Number of entries, duplicates counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry; the duplicate policy stays.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Copies every entry of `other` whose folded name is absent from
    /// `self`, in `other`'s order. Names already present are untouched.
    ///
    /// Entries adopted from `other` skip the duplicate re-check: the
    /// donor collection already enforced its own policy over them.
    pub fn merge(&mut self, other: &Headers) {
        let existing: HashSet<String> = self.index.keys().cloned().collect();
        for header in &other.entries {
            let folded = header.folded_name();
            if !existing.contains(&folded) {
                self.push_entry(folded, header.clone());
            }
        }
    }

    /// Appends every entry of `other` under `self`'s duplicate policy.
    ///
    /// Unlike [`merge`](Headers::merge), entries colliding with names
    /// already present fail under the strict policy. All-or-nothing: on
    /// failure `self` is left exactly as it was.
    pub fn extend(&mut self, other: &Headers) -> Result<(), FieldError> {
        let mut staged = self.clone();
        for header in &other.entries {
            staged.add(header.clone())?;
        }
        *self = staged;
        Ok(())
    }

    /// Builds a collection from (name, value) pairs, validating and
    /// policy-checking each in input order.
    ///
    /// All-or-nothing: the first failure aborts the build and no partial
    /// collection is returned.
    pub fn from_pairs<I, N, V>(pairs: I, allow_duplicates: bool) -> Result<Headers, FieldError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut headers = Headers::with_duplicates(allow_duplicates);
        for (name, value) in pairs {
            headers.add_raw(name, value)?;
        }
        Ok(headers)
    }

    /// Builds a collection from a name-to-value mapping.
    ///
    /// Same contract as [`from_pairs`](Headers::from_pairs); entries are
    /// taken in the mapping's iteration order.
    pub fn from_map<I, N, V>(map: I, allow_duplicates: bool) -> Result<Headers, FieldError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        Headers::from_pairs(map, allow_duplicates)
    }

    /// Builds a collection from already-validated headers, re-checking
    /// only the duplicate policy. All-or-nothing.
    pub fn from_list<I>(headers: I, allow_duplicates: bool) -> Result<Headers, FieldError>
    where
        I: IntoIterator<Item = Header>,
    {
        let mut collection = Headers::with_duplicates(allow_duplicates);
        for header in headers {
            collection.add(header)?;
        }
        Ok(collection)
    }

    /// Owned (name, value) pairs in insertion order, duplicates and
    /// original casing preserved.
    pub fn to_tuples(&self) -> Vec<(String, String)> {
        self.entries.iter().map(Header::to_tuple).collect()
    }

    /// Owned copies of every entry in insertion order.
    pub fn to_list(&self) -> Vec<Header> {
        self.entries.clone()
    }

    /// Values grouped by folded name, groups ordered by the name's first
    /// appearance and values in insertion order within each group.
    ///
    /// Grouping loses per-name casing; use
    /// [`to_tuples`](Headers::to_tuples) when casing matters too.
    pub fn to_map(&self) -> Vec<(String, Vec<String>)> {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for header in &self.entries {
            let folded = header.folded_name();
            let value = header.value().to_owned();
            match positions.get(&folded) {
                Some(&i) => groups[i].1.push(value),
                None => {
                    positions.insert(folded.clone(), groups.len());
                    groups.push((folded, vec![value]));
                }
            }
        }
        groups
    }

    /// Iterates entries in insertion order without consuming the
    /// collection; iterating twice yields the same sequence unless the
    /// collection was mutated in between.
    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.entries.iter()
    }

    /// Writes every entry in wire form (`Name: Value\r\n` each) into
    /// `dst`.
    ///
    /// No terminating blank line is written; framing the header block is
    /// the message writer's job. Safe to emit verbatim: no stored value
    /// contains CR or LF.
    pub fn encode(&self, dst: &mut BytesMut) {
        for header in &self.entries {
            header.encode(dst);
        }
    }

    /// Converts into an [`http::HeaderMap`], preserving order and
    /// duplicates.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for header in &self.entries {
            // Safe to unwrap: construction verified the name is a token
            // and the value holds only bytes HeaderValue accepts.
            let name = HeaderName::from_bytes(header.name().as_bytes()).unwrap();
            let value = HeaderValue::from_bytes(header.value().as_bytes()).unwrap();
            map.append(name, value);
        }
        map
    }

    /// Builds a collection from an [`http::HeaderMap`] under the given
    /// duplicate policy.
    ///
    /// Fails with [`FieldError::InvalidValue`] when a value is not valid
    /// UTF-8, or with the usual policy error on disallowed duplicates.
    pub fn from_header_map(map: &HeaderMap, allow_duplicates: bool) -> Result<Headers, FieldError> {
        let mut headers = Headers::with_duplicates(allow_duplicates);
        for (name, value) in map {
            let value = std::str::from_utf8(value.as_bytes()).map_err(|_| {
                FieldError::invalid_value(format!("header value for '{name}' is not valid UTF-8"))
            })?;
            headers.add_raw(name.as_str(), value)?;
        }
        Ok(headers)
    }

    fn push_entry(&mut self, folded: String, header: Header) {
        self.entries.push(header);
        self.index.entry(folded).or_default().push(self.entries.len() - 1);
    }

    // Removes all entries for a folded name and rebuilds the index.
    fn drop_name(&mut self, folded: &str) {
        if self.index.remove(folded).is_none() {
            return;
        }
        self.entries.retain(|h| h.folded_name() != folded);
        self.index.clear();
        for (i, header) in self.entries.iter().enumerate() {
            self.index.entry(header.folded_name()).or_default().push(i);
        }
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Subscript access for fields expected to exist.
///
/// Panics with the [`FieldError::MissingField`] message when the name is
/// absent; use [`get`](Headers::get) or [`require`](Headers::require) for
/// optional lookups.
impl<N: AsRef<str>> Index<N> for Headers {
    type Output = str;

    fn index(&self, name: N) -> &str {
        match self.require(name.as_ref()) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, header) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{header}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::StandardHeader;

    #[test]
    fn test_case_insensitive_lookup() {
        let mut headers = Headers::new();
        headers.add_raw("Content-Type", "text/html").unwrap();

        assert_eq!(headers.get("content-type"), Some("text/html"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("text/html"));
        assert_eq!(headers.get("Content-Type"), Some("text/html"));
        assert!(headers.contains("cOnTeNt-TyPe"));
        assert_eq!(headers.get("Accept"), None);
    }

    #[test]
    fn test_duplicate_rejected_under_strict_policy() {
        let mut headers = Headers::new();
        headers.add_raw("Content-Type", "a").unwrap();

        let err = headers.add_raw("Content-Type", "b").unwrap_err();
        assert!(matches!(err, FieldError::DuplicateField { combinable: false, .. }));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_comma_separated_duplicate_message() {
        let mut headers = Headers::new();
        headers.add_raw("Accept", "text/html").unwrap();

        let err = headers.add_raw("accept", "text/plain").unwrap_err();
        assert!(matches!(err, FieldError::DuplicateField { combinable: true, .. }));
        assert!(err.to_string().contains("comma"));
    }

    #[test]
    fn test_duplicates_allowed_under_permissive_policy() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("Content-Type", "a").unwrap();
        headers.add_raw("Content-Type", "b").unwrap();

        assert_eq!(headers.get_all("content-type"), ["a", "b"]);
        assert_eq!(headers.get("content-type"), Some("a"));
    }

    #[test]
    fn test_set_cookie_exempt_from_strict_policy() {
        let mut headers = Headers::new();
        headers.add_raw(StandardHeader::SetCookie, "a=1").unwrap();
        headers.add_raw("set-cookie", "b=2").unwrap();
        headers.add_raw("SET-COOKIE", "c=3").unwrap();

        assert_eq!(headers.get_all("Set-Cookie"), ["a=1", "b=2", "c=3"]);
    }

    #[test]
    fn test_validation_and_duplicate_failures_distinct() {
        let mut headers = Headers::new();
        headers.add_raw("X-A", "1").unwrap();

        assert!(matches!(headers.add_raw("X-A", "2"), Err(FieldError::DuplicateField { .. })));
        assert!(matches!(headers.add_raw("X-B", "a\nb"), Err(FieldError::InvalidValue { .. })));
        assert!(matches!(headers.add_raw("", "x"), Err(FieldError::InvalidName { .. })));
    }

    #[test]
    fn test_set_collapses_to_single_value() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("X", "1").unwrap();
        headers.add_raw("X", "2").unwrap();

        headers.set("X", "3").unwrap();
        assert_eq!(headers.get_all("X"), ["3"]);
    }

    #[test]
    fn test_set_collapses_exempt_names_too() {
        let mut headers = Headers::new();
        headers.add_raw("Set-Cookie", "a=1").unwrap();
        headers.add_raw("Set-Cookie", "b=2").unwrap();

        headers.set("set-cookie", "c=3").unwrap();
        assert_eq!(headers.get_all("Set-Cookie"), ["c=3"]);
    }

    #[test]
    fn test_set_inserts_when_absent() {
        let mut headers = Headers::new();
        headers.set("Host", "example.com").unwrap();
        assert_eq!(headers.get("host"), Some("example.com"));
    }

    #[test]
    fn test_remove_all_entries_or_fail() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("X", "1").unwrap();
        headers.add_raw("X", "2").unwrap();
        headers.add_raw("Y", "3").unwrap();

        headers.remove("x").unwrap();
        assert!(!headers.contains("X"));
        assert_eq!(headers.get("Y"), Some("3"));

        assert!(matches!(headers.remove("X"), Err(FieldError::MissingField { .. })));
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("A", "1").unwrap();
        headers.add_raw("B", "2").unwrap();
        headers.add_raw("A", "3").unwrap();
        headers.add_raw("C", "4").unwrap();

        headers.remove("A").unwrap();
        assert_eq!(headers.get("B"), Some("2"));
        assert_eq!(headers.get("C"), Some("4"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_require_vs_get_asymmetry() {
        let mut headers = Headers::new();
        headers.add_raw("Host", "example.com").unwrap();

        assert_eq!(headers.get("missing"), None);
        assert!(matches!(headers.require("missing"), Err(FieldError::MissingField { .. })));
        assert_eq!(headers.require("host").unwrap(), "example.com");
    }

    #[test]
    fn test_index_access() {
        let mut headers = Headers::new();
        headers.add_raw("Host", "example.com").unwrap();
        assert_eq!(&headers["host"], "example.com");
        assert_eq!(&headers[StandardHeader::Host], "example.com");
    }

    #[test]
    #[should_panic(expected = "header field not found")]
    fn test_index_access_missing_panics() {
        let headers = Headers::new();
        let _ = &headers["missing"];
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Headers::new();
        original.add_raw("X", "1").unwrap();

        let mut copy = original.clone();
        copy.add_raw("Y", "2").unwrap();
        copy.set("X", "changed").unwrap();

        assert_eq!(original.get("X"), Some("1"));
        assert!(!original.contains("Y"));
        assert_eq!(copy.allows_duplicates(), original.allows_duplicates());
    }

    #[test]
    fn test_merge_existing_wins() {
        let mut first = Headers::new();
        first.add_raw("Content-Type", "text/html").unwrap();
        first.add_raw("Host", "a.example").unwrap();

        let mut second = Headers::with_duplicates(true);
        second.add_raw("content-type", "text/plain").unwrap();
        second.add_raw("Accept", "*/*").unwrap();
        second.add_raw("Set-Cookie", "a=1").unwrap();
        second.add_raw("Set-Cookie", "b=2").unwrap();

        first.merge(&second);

        assert_eq!(first.get("Content-Type"), Some("text/html"));
        assert_eq!(first.get("Accept"), Some("*/*"));
        assert_eq!(first.get_all("Set-Cookie"), ["a=1", "b=2"]);
    }

    #[test]
    fn test_extend_respects_policy() {
        let mut first = Headers::new();
        first.add_raw("X", "1").unwrap();

        let mut second = Headers::new();
        second.add_raw("X", "2").unwrap();

        assert!(matches!(first.extend(&second), Err(FieldError::DuplicateField { .. })));
    }

    #[test]
    fn test_extend_failure_leaves_collection_untouched() {
        let mut first = Headers::new();
        first.add_raw("X", "1").unwrap();

        // "Y" would be accepted before the collision on "X" surfaces
        let mut second = Headers::with_duplicates(true);
        second.add_raw("Y", "2").unwrap();
        second.add_raw("X", "3").unwrap();

        assert!(first.extend(&second).is_err());
        assert_eq!(first.len(), 1);
        assert!(!first.contains("Y"));
        assert_eq!(first.get("X"), Some("1"));
    }

    #[test]
    fn test_extend_success_appends_in_order() {
        let mut first = Headers::new();
        first.add_raw("A", "1").unwrap();

        let mut second = Headers::new();
        second.add_raw("B", "2").unwrap();
        second.add_raw("C", "3").unwrap();

        first.extend(&second).unwrap();
        let names: Vec<_> = first.iter().map(|h| h.name().to_owned()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_builders_all_or_nothing() {
        let pairs = [("Content-Type", "a"), ("Content-Type", "b")];
        assert!(matches!(
            Headers::from_pairs(pairs, false),
            Err(FieldError::DuplicateField { .. })
        ));
        assert!(Headers::from_pairs(pairs, true).is_ok());

        let pairs = [("Good-Name", "ok"), ("bad name", "x")];
        assert!(matches!(Headers::from_pairs(pairs, true), Err(FieldError::InvalidName { .. })));
    }

    #[test]
    fn test_from_map_builder() {
        let mut map = std::collections::BTreeMap::new();
        map.insert("Accept", "*/*");
        map.insert("Host", "example.com");

        let headers = Headers::from_map(map, false).unwrap();
        assert_eq!(headers.get("accept"), Some("*/*"));
        assert_eq!(headers.get("host"), Some("example.com"));
    }

    #[test]
    fn test_from_list_builder() {
        let list = vec![
            Header::new("A", "1").unwrap(),
            Header::new("a", "2").unwrap(),
        ];
        assert!(matches!(
            Headers::from_list(list.clone(), false),
            Err(FieldError::DuplicateField { .. })
        ));

        let headers = Headers::from_list(list, true).unwrap();
        assert_eq!(headers.get_all("a"), ["1", "2"]);
    }

    #[test]
    fn test_round_trip_to_tuples() {
        let pairs =
            vec![("Host", "example.com"), ("Accept", "*/*"), ("X-Trace", "abc")];
        let headers = Headers::from_pairs(pairs.clone(), false).unwrap();

        let tuples = headers.to_tuples();
        assert_eq!(
            tuples,
            pairs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_iteration_order_and_restartability() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("A", "1").unwrap();
        headers.add_raw("B", "2").unwrap();
        headers.add_raw("A", "3").unwrap();

        let first: Vec<_> = headers.iter().map(|h| h.value().to_owned()).collect();
        let second: Vec<_> = (&headers).into_iter().map(|h| h.value().to_owned()).collect();
        assert_eq!(first, ["1", "2", "3"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_map_groups_by_folded_name() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("X-A", "1").unwrap();
        headers.add_raw("x-a", "2").unwrap();

        let map = headers.to_map();
        assert_eq!(map, [("x-a".to_owned(), vec!["1".to_owned(), "2".to_owned()])]);
    }

    #[test]
    fn test_to_map_keeps_first_seen_group_order() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("Zulu", "1").unwrap();
        headers.add_raw("Alpha", "2").unwrap();
        headers.add_raw("zulu", "3").unwrap();
        headers.add_raw("Mike", "4").unwrap();

        let map = headers.to_map();
        let groups: Vec<&str> = map.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(groups, ["zulu", "alpha", "mike"]);

        let map = headers.to_map();
        assert_eq!(map[0].1, ["1", "3"]);
        assert_eq!(map[1].1, ["2"]);
    }

    #[test]
    fn test_display_and_encode() {
        let mut headers = Headers::new();
        headers.add_raw("Host", "example.com").unwrap();
        headers.add_raw("Accept", "*/*").unwrap();

        assert_eq!(headers.to_string(), "Host: example.com\nAccept: */*");

        let mut buf = BytesMut::new();
        headers.encode(&mut buf);
        assert_eq!(&buf[..], b"Host: example.com\r\nAccept: */*\r\n");
    }

    #[test]
    fn test_header_map_round_trip() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("Content-Type", "text/html").unwrap();
        headers.add_raw("Set-Cookie", "a=1").unwrap();
        headers.add_raw("Set-Cookie", "b=2").unwrap();

        let map = headers.to_header_map();
        assert_eq!(map.get("content-type").unwrap(), "text/html");
        assert_eq!(map.get_all("set-cookie").iter().count(), 2);

        let back = Headers::from_header_map(&map, true).unwrap();
        assert_eq!(back.get_all("set-cookie"), ["a=1", "b=2"]);
        assert_eq!(back.get("content-type"), Some("text/html"));
    }

    #[test]
    fn test_clear_keeps_policy() {
        let mut headers = Headers::with_duplicates(true);
        headers.add_raw("X", "1").unwrap();
        headers.clear();

        assert!(headers.is_empty());
        assert!(headers.allows_duplicates());
        headers.add_raw("X", "1").unwrap();
        headers.add_raw("X", "2").unwrap();
        assert_eq!(headers.len(), 2);
    }
}
