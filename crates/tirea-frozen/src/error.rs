//! Errors reported by the fallible read helpers.
//!
//! Projecting a value never fails. Only lookups that take a caller-supplied
//! index or path (`SeqView::try_get`, `ValueView::at`) and typed extraction
//! (`ValueView::deserialize`) can.

use crate::Path;
use thiserror::Error;

/// Result alias for fallible reads through a projection.
pub type FrozenResult<T> = Result<T, FrozenError>;

#[derive(Debug, Error)]
pub enum FrozenError {
    /// An object member named by the path does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was requested.
        path: Path,
    },

    /// An index step ran past the end of a sequence.
    #[error("index {index} out of bounds (len: {len}) at path {path}")]
    IndexOutOfBounds {
        /// The path that was requested.
        path: Path,
        /// The index that was requested.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// A step was applied to a value of the wrong kind.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The path up to and including the offending step.
        path: Path,
        /// The kind the step needed.
        expected: &'static str,
        /// The kind actually present.
        found: &'static str,
    },

    /// Typed extraction from a JSON view failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FrozenError {
    #[inline]
    pub fn path_not_found(path: Path) -> Self {
        FrozenError::PathNotFound { path }
    }

    #[inline]
    pub fn index_out_of_bounds(path: Path, index: usize, len: usize) -> Self {
        FrozenError::IndexOutOfBounds { path, index, len }
    }

    #[inline]
    pub fn type_mismatch(path: Path, expected: &'static str, found: &'static str) -> Self {
        FrozenError::TypeMismatch {
            path,
            expected,
            found,
        }
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FrozenError::PathNotFound { path }
            | FrozenError::IndexOutOfBounds { path, .. }
            | FrozenError::TypeMismatch { path, .. } => Some(path),
            FrozenError::Serialization(_) => None,
        }
    }

    /// Re-root this error under `prefix`.
    ///
    /// Lookups on a nested view report paths relative to that view; callers
    /// that navigated there first use this to report the full path.
    pub fn with_prefix(self, prefix: &Path) -> Self {
        match self {
            FrozenError::PathNotFound { path } => FrozenError::PathNotFound {
                path: prefix.join(&path),
            },
            FrozenError::IndexOutOfBounds { path, index, len } => FrozenError::IndexOutOfBounds {
                path: prefix.join(&path),
                index,
                len,
            },
            FrozenError::TypeMismatch {
                path,
                expected,
                found,
            } => FrozenError::TypeMismatch {
                path: prefix.join(&path),
                expected,
                found,
            },
            other => other,
        }
    }
}

/// Name of the JSON kind of `v`, as used in [`FrozenError::TypeMismatch`].
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_display_includes_path() {
        let err = FrozenError::index_out_of_bounds(path!("users", 4), 4, 2);
        assert_eq!(
            err.to_string(),
            "index 4 out of bounds (len: 2) at path $.users[4]"
        );
    }

    #[test]
    fn test_with_prefix_reroots_path() {
        let err = FrozenError::type_mismatch(path!("port"), "object", "number")
            .with_prefix(&path!("server"));
        assert_eq!(err.path(), Some(&path!("server", "port")));
    }

    #[test]
    fn test_serialization_error_has_no_path() {
        let inner = serde_json::from_value::<u8>(json!("x")).unwrap_err();
        let err = FrozenError::from(inner).with_prefix(&path!("a"));
        assert!(err.path().is_none());
        assert!(err.to_string().starts_with("serialization error"));
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(false)), "boolean");
        assert_eq!(value_type_name(&json!(1.5)), "number");
        assert_eq!(value_type_name(&json!("s")), "string");
        assert_eq!(value_type_name(&json!([])), "array");
        assert_eq!(value_type_name(&json!({})), "object");
    }
}
