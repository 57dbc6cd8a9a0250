//! Path representation and normalization
//!
//! A path names a nested location inside a JSON tree. It can be written
//! three ways: the root itself, a dot-delimited string, or an explicit
//! segment list that may mix object keys and array indices. All three
//! normalize to one canonical segment sequence before any tree walking
//! happens.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PathError, Result};

/// One step of a path: an object key or an array index.
///
/// Deserializes untagged, so documents write segments as plain strings
/// and unsigned integers. Anything else is a malformed segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Array index
    Index(usize),
    /// Object key
    Key(String),
}

/// A location inside a JSON tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Path {
    /// The container itself (written as `null` in documents)
    Root,
    /// Dot-delimited keys, e.g. `address.street`
    Dotted(String),
    /// Explicit segments, e.g. `["address", "street"]` or `["items", 0]`
    Segments(Vec<Segment>),
}

impl Path {
    /// Build a segment path from a list of keys
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Path::Segments(keys.into_iter().map(|k| Segment::Key(k.into())).collect())
    }

    /// Whether this is the root path
    pub fn is_root(&self) -> bool {
        matches!(self, Path::Root)
    }

    /// Normalize into the canonical segment sequence.
    ///
    /// The root path has no segments; callers decide what "the container
    /// itself" means before walking down here.
    pub fn segments(&self) -> Result<Vec<Segment>> {
        match self {
            Path::Root => Err(PathError::Root),
            Path::Dotted(dotted) => {
                if dotted.is_empty() {
                    return Err(PathError::EmptySegment {
                        path: dotted.clone(),
                    });
                }
                dotted
                    .split('.')
                    .map(|piece| {
                        if piece.is_empty() {
                            Err(PathError::EmptySegment {
                                path: dotted.clone(),
                            })
                        } else {
                            Ok(Segment::Key(piece.to_string()))
                        }
                    })
                    .collect()
            }
            Path::Segments(segments) => {
                if segments.is_empty() {
                    return Err(PathError::Empty);
                }
                for (index, segment) in segments.iter().enumerate() {
                    if matches!(segment, Segment::Key(key) if key.is_empty()) {
                        return Err(PathError::EmptyKey { index });
                    }
                }
                Ok(segments.clone())
            }
        }
    }
}

impl From<&str> for Path {
    fn from(dotted: &str) -> Self {
        Path::Dotted(dotted.to_string())
    }
}

impl From<String> for Path {
    fn from(dotted: String) -> Self {
        Path::Dotted(dotted)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path::Segments(segments)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{key}"),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Path::Root => write!(f, "$"),
            Path::Dotted(dotted) => write!(f, "{dotted}"),
            Path::Segments(segments) => {
                for (position, segment) in segments.iter().enumerate() {
                    if position > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{segment}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_normalizes_to_keys() {
        let path = Path::from("address.street");
        assert_eq!(
            path.segments().unwrap(),
            vec![
                Segment::Key("address".to_string()),
                Segment::Key("street".to_string())
            ]
        );
    }

    #[test]
    fn test_single_key_dotted() {
        let path = Path::from("name");
        assert_eq!(
            path.segments().unwrap(),
            vec![Segment::Key("name".to_string())]
        );
    }

    #[test]
    fn test_empty_dotted_is_an_error() {
        let err = Path::from("").segments().unwrap_err();
        assert!(matches!(err, PathError::EmptySegment { .. }));
    }

    #[test]
    fn test_doubled_dot_is_an_error() {
        let err = Path::from("a..b").segments().unwrap_err();
        assert!(matches!(err, PathError::EmptySegment { .. }));
    }

    #[test]
    fn test_leading_dot_is_an_error() {
        let err = Path::from(".a").segments().unwrap_err();
        assert!(matches!(err, PathError::EmptySegment { .. }));
    }

    #[test]
    fn test_segment_list_passes_through() {
        let path = Path::Segments(vec![
            Segment::Key("items".to_string()),
            Segment::Index(2),
        ]);
        let segments = path.segments().unwrap();
        assert_eq!(segments[1], Segment::Index(2));
    }

    #[test]
    fn test_empty_key_in_segment_list() {
        let path = Path::Segments(vec![
            Segment::Key("a".to_string()),
            Segment::Key(String::new()),
        ]);
        assert_eq!(path.segments().unwrap_err(), PathError::EmptyKey { index: 1 });
    }

    #[test]
    fn test_empty_segment_list() {
        assert_eq!(Path::Segments(Vec::new()).segments().unwrap_err(), PathError::Empty);
    }

    #[test]
    fn test_root_has_no_segments() {
        assert_eq!(Path::Root.segments().unwrap_err(), PathError::Root);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Path::Root.to_string(), "$");
        assert_eq!(Path::from("a.b").to_string(), "a.b");
        assert_eq!(
            Path::Segments(vec![Segment::Key("items".to_string()), Segment::Index(0)]).to_string(),
            "items.0"
        );
    }

    #[test]
    fn test_deserialize_untagged_variants() {
        let root: Path = serde_json::from_str("null").unwrap();
        assert_eq!(root, Path::Root);

        let dotted: Path = serde_json::from_str("\"address.street\"").unwrap();
        assert_eq!(dotted, Path::from("address.street"));

        let segments: Path = serde_json::from_str("[\"items\", 0]").unwrap();
        assert_eq!(
            segments,
            Path::Segments(vec![Segment::Key("items".to_string()), Segment::Index(0)])
        );
    }

    #[test]
    fn test_deserialize_rejects_illegal_segment() {
        let result: std::result::Result<Path, _> = serde_json::from_str("[\"a\", true]");
        assert!(result.is_err());
    }
}
