// src/catalog.rs
// =============================================================================
// The fixed list of lodash v3 functions we document.
//
// Order matters twice: it is the order fetch results are restored to, and it
// is the order sections appear in the rendered document. Entries of the same
// group must stay next to each other, otherwise the renderer would emit the
// group heading twice.
// =============================================================================

use crate::error::DocError;
use std::fmt;

/// Every documented function, as `group/member`.
pub const CATALOG: &[&str] = &[
    "string/camelCase",
    "string/capitalize",
    "string/deburr",
    "string/endsWith",
    "string/escapeRegExp",
    "string/kebabCase",
    "string/pad",
    "string/padLeft",
    "string/padRight",
    "string/repeat",
    "string/snakeCase",
    "string/startsWith",
    "string/trim",
    "string/trimLeft",
    "string/trimRight",
    "string/trunc",
    "string/words",
    "array/chunk",
    "array/dropRight",
    "array/dropRightWhile",
    "array/dropWhile",
    "array/flattenDeep",
    "array/pullAt",
    "array/slice",
    "array/sortedLastIndex",
    "array/takeRight",
    "array/takeRightWhile",
    "array/takeWhile",
    "function/ary",
    "function/before",
    "function/curryRight",
    "function/flow",
    "function/negate",
    "function/rearg",
    "lang/isError",
    "lang/isMatch",
    "lang/isNative",
    "lang/isTypedArray",
    "lang/toPlainObject",
    "utility/attempt",
    "utility/matches",
    "utility/propertyOf",
    "collection/partition",
    "collection/sortByAll",
    "object/keysIn",
    "object/valuesIn",
    "chain/thru",
];

/// A documented function, split into its group (the lodash category
/// directory) and member (the function name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub group: String,
    pub member: String,
}

impl Identifier {
    /// Parses `"group/member"`. Exactly one `/` with text on both sides.
    pub fn parse(qualified: &str) -> Result<Self, DocError> {
        match qualified.split_once('/') {
            Some((group, member))
                if !group.is_empty() && !member.is_empty() && !member.contains('/') =>
            {
                Ok(Identifier {
                    group: group.to_string(),
                    member: member.to_string(),
                })
            }
            _ => Err(DocError::InvalidIdentifier(qualified.to_string())),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.member)
    }
}

/// Parses the compiled-in catalog, preserving its order.
pub fn catalog() -> Result<Vec<Identifier>, DocError> {
    CATALOG.iter().map(|name| Identifier::parse(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_identifier() {
        let id = Identifier::parse("string/pad").unwrap();
        assert_eq!(id.group, "string");
        assert_eq!(id.member, "pad");
        assert_eq!(id.to_string(), "string/pad");
    }

    #[test]
    fn test_parse_invalid_identifiers() {
        for bad in ["pad", "/pad", "string/", "a/b/c", ""] {
            assert_eq!(
                Identifier::parse(bad),
                Err(DocError::InvalidIdentifier(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_catalog_parses_in_order() {
        let ids = catalog().unwrap();
        assert_eq!(ids.len(), CATALOG.len());
        assert_eq!(ids.first().unwrap().to_string(), "string/camelCase");
        assert_eq!(ids.last().unwrap().to_string(), "chain/thru");
    }

    #[test]
    fn test_catalog_entries_are_unique() {
        let unique: HashSet<_> = CATALOG.iter().collect();
        assert_eq!(unique.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_groups_are_contiguous() {
        let ids = catalog().unwrap();
        let mut seen = HashSet::new();
        let mut last: Option<&str> = None;

        for id in &ids {
            if last != Some(id.group.as_str()) {
                assert!(seen.insert(id.group.as_str()), "group {} is split", id.group);
                last = Some(id.group.as_str());
            }
        }
    }
}
