use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between relation hops and the terminal field.
pub const PATH_SEPARATOR: char = '.';

///
/// FieldPath
///
/// A dotted filter path split once at construction: every segment before the
/// last names a relation hop, the last segment is the field being compared.
/// Immutable after parsing.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldPath {
    relations: Vec<String>,
    field: String,
}

impl FieldPath {
    /// Split a dotted path. A path without separators is a bare field name
    /// with no relation hops. Empty input is a caller contract violation and
    /// simply yields an empty field name.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        match path.rsplit_once(PATH_SEPARATOR) {
            None => Self {
                relations: Vec::new(),
                field: path.to_string(),
            },
            Some((head, field)) => Self {
                relations: head.split(PATH_SEPARATOR).map(str::to_string).collect(),
                field: field.to_string(),
            },
        }
    }

    /// Relation hops in left-to-right path order.
    #[must_use]
    pub fn relations(&self) -> &[String] {
        &self.relations
    }

    /// The terminal field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// True when the path crosses at least one relation.
    #[must_use]
    pub fn has_relations(&self) -> bool {
        !self.relations.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for relation in &self.relations {
            write!(f, "{relation}{PATH_SEPARATOR}")?;
        }
        write!(f, "{}", self.field)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bare_field_has_no_relations() {
        let path = FieldPath::parse("Name");
        assert_eq!(path.field(), "Name");
        assert!(path.relations().is_empty());
        assert!(!path.has_relations());
    }

    #[test]
    fn dotted_path_preserves_hop_order() {
        let path = FieldPath::parse("Author.Company.Name");
        assert_eq!(path.field(), "Name");
        assert_eq!(path.relations(), ["Author", "Company"]);
    }

    #[test]
    fn display_round_trips() {
        let path = FieldPath::parse("Author.Company.Name");
        assert_eq!(path.to_string(), "Author.Company.Name");
    }

    proptest! {
        #[test]
        fn undotted_input_is_always_a_bare_field(s in "[A-Za-z0-9_]{1,24}") {
            let path = FieldPath::parse(&s);
            prop_assert_eq!(path.field(), s.as_str());
            prop_assert!(path.relations().is_empty());
        }

        #[test]
        fn segment_count_matches_dot_count(
            segments in proptest::collection::vec("[A-Za-z][A-Za-z0-9]{0,8}", 1..6)
        ) {
            let joined = segments.join(".");
            let path = FieldPath::parse(&joined);
            prop_assert_eq!(path.relations().len(), segments.len() - 1);
            prop_assert_eq!(path.field(), segments.last().unwrap().as_str());
            prop_assert_eq!(path.relations(), &segments[..segments.len() - 1]);
        }
    }
}
