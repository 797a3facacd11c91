//! Read-only projection of dynamic JSON documents.

use crate::{value_type_name, DeepReadonly, FrozenError, FrozenResult, Path, Seg};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Read-only view of a [`serde_json::Value`].
///
/// ```
/// use serde_json::json;
/// use tirea_frozen::{path, Frozen};
///
/// let mut doc = Frozen::new(json!({"server": {"flags": ["debug"]}}));
/// doc["server"]["flags"].as_array_mut().unwrap().push(json!("secure"));
///
/// let flag = doc.view().at(&path!("server", "flags", 1)).unwrap();
/// assert_eq!(flag.as_str(), Some("secure"));
/// ```
#[derive(Clone, Copy)]
pub struct ValueView<'a> {
    value: &'a Value,
}

impl<'a> ValueView<'a> {
    #[inline]
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// JSON kind name (`"object"`, `"array"`, ...).
    #[inline]
    pub fn kind(&self) -> &'static str {
        value_type_name(self.value)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        self.value.as_u64()
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// Object member `key`; `None` for missing keys and non-objects.
    pub fn get(&self, key: &str) -> Option<ValueView<'a>> {
        self.value.as_object()?.get(key).map(ValueView::new)
    }

    /// Array element `index`; `None` when out of range or not an array.
    pub fn index(&self, index: usize) -> Option<ValueView<'a>> {
        self.value.as_array()?.get(index).map(ValueView::new)
    }

    /// Element count for arrays, member count for objects, zero otherwise.
    pub fn len(&self) -> usize {
        match self.value {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Array elements; empty for every other kind.
    pub fn items(&self) -> impl Iterator<Item = ValueView<'a>> + 'a {
        self.value
            .as_array()
            .into_iter()
            .flatten()
            .map(ValueView::new)
    }

    /// Object members in document order; empty for every other kind.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, ValueView<'a>)> + 'a {
        self.value
            .as_object()
            .into_iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), ValueView::new(v)))
    }

    /// Resolve an RFC 6901 JSON pointer.
    pub fn pointer(&self, pointer: &str) -> Option<ValueView<'a>> {
        self.value.pointer(pointer).map(ValueView::new)
    }

    /// Resolve `path` relative to this view.
    ///
    /// An index step applied to an object looks up the member named by the
    /// decimal index, as RFC 6901 does. Every error names the full requested
    /// path.
    pub fn at(&self, path: &Path) -> FrozenResult<ValueView<'a>> {
        let mut current = self.value;
        for (depth, seg) in path.iter().enumerate() {
            current = match (seg, current) {
                (Seg::Key(key), Value::Object(map)) => match map.get(key) {
                    Some(next) => next,
                    None => {
                        tracing::trace!(%path, depth, "frozen view lookup missed key");
                        return Err(FrozenError::path_not_found(path.clone()));
                    }
                },
                (Seg::Index(index), Value::Array(items)) => match items.get(*index) {
                    Some(next) => next,
                    None => {
                        tracing::trace!(%path, depth, "frozen view lookup ran past array end");
                        return Err(FrozenError::index_out_of_bounds(
                            path.clone(),
                            *index,
                            items.len(),
                        ));
                    }
                },
                (Seg::Index(index), Value::Object(map)) => match map.get(&index.to_string()) {
                    Some(next) => next,
                    None => {
                        tracing::trace!(%path, depth, "frozen view lookup missed numeric key");
                        return Err(FrozenError::path_not_found(path.clone()));
                    }
                },
                (Seg::Key(_), other) => {
                    tracing::trace!(%path, depth, "frozen view lookup hit a non-object");
                    return Err(FrozenError::type_mismatch(
                        path.clone(),
                        "object",
                        value_type_name(other),
                    ));
                }
                (Seg::Index(_), other) => {
                    tracing::trace!(%path, depth, "frozen view lookup hit a non-array");
                    return Err(FrozenError::type_mismatch(
                        path.clone(),
                        "array",
                        value_type_name(other),
                    ));
                }
            };
        }
        Ok(ValueView::new(current))
    }

    /// Deserialize a typed copy of the viewed value.
    pub fn deserialize<D: DeserializeOwned>(&self) -> FrozenResult<D> {
        Ok(D::deserialize(self.value)?)
    }

    /// Clone the viewed value.
    pub fn to_value(&self) -> Value {
        self.value.clone()
    }

    #[inline]
    pub fn as_value(&self) -> &'a Value {
        self.value
    }
}

impl fmt::Debug for ValueView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.value, f)
    }
}

impl fmt::Display for ValueView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value, f)
    }
}

impl PartialEq<Value> for ValueView<'_> {
    fn eq(&self, other: &Value) -> bool {
        self.value == other
    }
}

impl DeepReadonly for Value {
    type Projection<'a> = ValueView<'a>;

    #[inline]
    fn project(&self) -> ValueView<'_> {
        ValueView::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde::Deserialize;
    use serde_json::json;

    fn config() -> Value {
        json!({
            "server": {"host": "localhost", "port": 3000, "flags": ["verbose"]},
            "users": [{"id": 1, "name": "Admin"}]
        })
    }

    #[test]
    fn test_navigation() {
        let doc = config();
        let view = doc.project();
        assert_eq!(view.kind(), "object");
        assert_eq!(view.len(), 2);
        let server = view.get("server").unwrap();
        assert_eq!(server.get("port").and_then(|p| p.as_u64()), Some(3000));
        assert_eq!(
            server.get("flags").and_then(|f| f.index(0)).and_then(|f| f.as_str()),
            Some("verbose")
        );
        assert!(view.get("missing").is_none());
        assert!(server.get("port").unwrap().get("x").is_none());
        assert_eq!(
            view.pointer("/users/0/name").and_then(|n| n.as_str()),
            Some("Admin")
        );
    }

    #[test]
    fn test_iterators() {
        let doc = config();
        let view = doc.project();
        let keys: Vec<&str> = view.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["server", "users"]);
        let names: Vec<&str> = view
            .get("users")
            .unwrap()
            .items()
            .filter_map(|u| u.get("name").and_then(|n| n.as_str()))
            .collect();
        assert_eq!(names, vec!["Admin"]);
        assert_eq!(view.get("server").unwrap().items().count(), 0);
    }

    #[test]
    fn test_at_resolves_paths() {
        let doc = config();
        let view = doc.project();
        let port = view.at(&path!("server", "port")).unwrap();
        assert_eq!(port, json!(3000));
        let root = view.at(&Path::root()).unwrap();
        assert_eq!(root.as_value(), &doc);
    }

    #[test]
    fn test_at_reports_missing_key() {
        let doc = config();
        let err = doc.project().at(&path!("server", "tls", "cert")).unwrap_err();
        assert!(matches!(&err, FrozenError::PathNotFound { path } if *path == path!("server", "tls", "cert")));
    }

    #[test]
    fn test_at_reports_index_out_of_bounds() {
        let doc = config();
        let err = doc.project().at(&path!("users", 3, "id")).unwrap_err();
        match err {
            FrozenError::IndexOutOfBounds { path, index, len } => {
                assert_eq!(path, path!("users", 3, "id"));
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_at_reports_type_mismatch() {
        let doc = config();
        let err = doc
            .project()
            .at(&path!("server", "port", "value"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at $.server.port.value: expected object, found number"
        );

        let err = doc.project().at(&path!("server", "host", 0)).unwrap_err();
        assert!(matches!(
            err,
            FrozenError::TypeMismatch { expected: "array", found: "string", .. }
        ));
    }

    #[test]
    fn test_type_mismatch_midway_keeps_full_path() {
        let doc = config();
        let requested = path!("server", "port", "value", "deeper");
        let err = doc.project().at(&requested).unwrap_err();
        assert_eq!(err.path(), Some(&requested));
        assert_eq!(
            err.to_string(),
            "type mismatch at $.server.port.value.deeper: expected object, found number"
        );
    }

    #[test]
    fn test_index_step_on_object_reads_numeric_member() {
        let doc = json!({"ports": {"0": "http", "443": "https"}});
        let view = doc.project();

        let pointer = "/ports/0";
        assert_eq!(view.pointer(pointer).and_then(|v| v.as_str()), Some("http"));
        let path = Path::from_pointer(pointer).unwrap();
        assert_eq!(view.at(&path).unwrap().as_str(), Some("http"));
        assert_eq!(view.at(&Path::parse("ports.443")).unwrap().as_str(), Some("https"));

        let err = view.at(&path!("ports", 1)).unwrap_err();
        assert!(matches!(&err, FrozenError::PathNotFound { path } if *path == path!("ports", 1)));
    }

    #[test]
    fn test_deserialize_typed_copy() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct User {
            id: u32,
            name: String,
        }

        let doc = config();
        let user: User = doc.project().at(&path!("users", 0)).unwrap().deserialize().unwrap();
        assert_eq!(
            user,
            User {
                id: 1,
                name: "Admin".into()
            }
        );

        let err = doc
            .project()
            .get("server")
            .unwrap()
            .deserialize::<User>()
            .unwrap_err();
        assert!(matches!(err, FrozenError::Serialization(_)));
    }

    #[test]
    fn test_display_and_to_value() {
        let doc = json!({"a": [1, null]});
        let view = doc.project();
        assert_eq!(view.to_string(), r#"{"a":[1,null]}"#);
        assert_eq!(view.to_value(), doc);
        assert!(view.get("a").unwrap().index(1).unwrap().is_null());
        assert!(!view.is_empty());
    }
}
