//! Read access to the framework configuration being translated.
//!
//! A [`ConfigStore`] answers dotted-path lookups such as `"phpbu.config"` or
//! `"database.connections.mysql"`. [`Block`] is a cursor over one value of the
//! store that remembers where it came from, so every error can name the exact
//! offending path (for example `phpbu.databases[1].source.connection`).

use crate::bridge::result_error::error::Error;
use crate::bridge::result_error::result::Result;
use crate::bridge::result_error::WithMsg;
use crate::bridge::source::Options;
use derive_more::From;
use serde_json::{Map, Value};

/// Key-path-addressable, read-only configuration store.
pub trait ConfigStore {
    /// Resolves a dotted path. `None` means the key is absent, which is
    /// different from a present `null` or empty string.
    fn lookup(&self, path: &str) -> Option<&Value>;

    fn get(&self, path: &str) -> Result<&Value> {
        self.lookup(path).ok_or_else(|| Error::missing_key(path))
    }

    fn block(&self, path: &str) -> Result<Block<'_>> {
        self.get(path).map(|value| Block::new(value, path))
    }
}

/// [`ConfigStore`] backed by an in-memory JSON value tree.
///
/// Numeric path segments index into lists, so `phpbu.directories.0.source`
/// addresses the first directory entry.
#[derive(Clone, Debug, Default, PartialEq, From)]
pub struct JsonStore {
    root: Value,
}

impl JsonStore {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str::<Value>(s)
            .map(Self::new)
            .map_err(Error::from)
            .with_msg("Parse JSON configuration store failed")
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yml::from_str::<Value>(s)
            .map(Self::new)
            .map_err(Error::from)
            .with_msg("Parse YAML configuration store failed")
    }

    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl ConfigStore for JsonStore {
    fn lookup(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.root);
        }

        path.split('.').try_fold(&self.root, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

/// A value read from a [`ConfigStore`] together with its full path.
#[derive(Clone, Debug, PartialEq)]
pub struct Block<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Block<'a> {
    pub fn new<S: Into<String>>(value: &'a Value, path: S) -> Self {
        Self {
            value,
            path: path.into(),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub fn object(&self) -> Result<&'a Map<String, Value>> {
        self.value
            .as_object()
            .ok_or_else(|| Error::invalid_value(self.path.as_str(), "mapping"))
    }

    /// Child block, `None` when the key is absent or explicitly `null`.
    pub fn optional(&self, key: &str) -> Result<Option<Block<'a>>> {
        Ok(self
            .object()?
            .get(key)
            .filter(|value| !value.is_null())
            .map(|value| Block::new(value, self.child_path(key))))
    }

    pub fn required(&self, key: &str) -> Result<Block<'a>> {
        self.optional(key)?
            .ok_or_else(|| Error::missing_key(self.child_path(key)))
    }

    pub fn as_str(&self) -> Result<&'a str> {
        self.value
            .as_str()
            .ok_or_else(|| Error::invalid_value(self.path.as_str(), "string"))
    }

    /// Strings verbatim, numbers and booleans in their JSON spelling.
    pub fn as_scalar_string(&self) -> Result<String> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(Error::invalid_value(self.path.as_str(), "scalar")),
        }
    }

    pub fn optional_str(&self, key: &str) -> Result<Option<&'a str>> {
        self.optional(key)?.map(|block| block.as_str()).transpose()
    }

    pub fn required_str(&self, key: &str) -> Result<&'a str> {
        self.required(key)?.as_str()
    }

    /// Free-form option mapping under `key`. An empty list is accepted as an
    /// empty mapping since that is how an empty keyed array serializes.
    pub fn options(&self, key: &str) -> Result<Option<Options>> {
        match self.optional(key)? {
            None => Ok(None),
            Some(block) => match block.value {
                Value::Object(map) => Ok(Some(
                    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
                )),
                Value::Array(items) if items.is_empty() => Ok(Some(Options::new())),
                _ => Err(Error::invalid_value(block.path(), "mapping")),
            },
        }
    }

    /// List items, each addressed as `path[index]`.
    pub fn entries(&self) -> Result<Vec<Block<'a>>> {
        match self.value {
            Value::Array(items) => Ok(items
                .iter()
                .enumerate()
                .map(|(i, value)| Block::new(value, format!("{}[{}]", self.path, i)))
                .collect()),
            Value::Null => Ok(Vec::new()),
            _ => Err(Error::invalid_value(self.path.as_str(), "list")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> JsonStore {
        JsonStore::new(json!({
            "phpbu": {
                "config": "phpbu.json",
                "empty": "",
                "nothing": null,
                "directories": [
                    {"source": {"path": "/var/www"}},
                    {"source": {"path": "/etc"}}
                ]
            },
            "database": {"connections": {"mysql": {"driver": "mysql"}}}
        }))
    }

    #[test]
    fn test_lookup_dotted_path() {
        let store = store();
        assert_eq!(store.lookup("phpbu.config"), Some(&json!("phpbu.json")));
        assert_eq!(
            store.lookup("database.connections.mysql.driver"),
            Some(&json!("mysql"))
        );
    }

    #[test]
    fn test_lookup_distinguishes_absent_from_empty() {
        let store = store();
        assert_eq!(store.lookup("phpbu.empty"), Some(&json!("")));
        assert_eq!(store.lookup("phpbu.nothing"), Some(&Value::Null));
        assert_eq!(store.lookup("phpbu.missing"), None);
        assert_eq!(store.lookup("phpbu.config.deeper"), None);
    }

    #[test]
    fn test_lookup_indexes_lists() {
        let store = store();
        assert_eq!(
            store.lookup("phpbu.directories.1.source.path"),
            Some(&json!("/etc"))
        );
        assert_eq!(store.lookup("phpbu.directories.7"), None);
        assert_eq!(store.lookup("phpbu.directories.first"), None);
    }

    #[test]
    fn test_lookup_empty_path_returns_root() {
        let store = store();
        assert_eq!(store.lookup(""), Some(store.root()));
    }

    #[test]
    fn test_get_missing_key() {
        let err = store().get("phpbu.databases").unwrap_err();
        assert!(matches!(err, Error::MissingKey { path } if path == "phpbu.databases"));
    }

    #[test]
    fn test_from_yaml_str() {
        let store = JsonStore::from_yaml_str(
            "phpbu:\n  config: phpbu.xml\n  directories:\n    - source:\n        path: /srv\n",
        )
        .unwrap();
        assert_eq!(store.lookup("phpbu.config"), Some(&json!("phpbu.xml")));
        assert_eq!(
            store.lookup("phpbu.directories.0.source.path"),
            Some(&json!("/srv"))
        );
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = JsonStore::from_json_str("{not json").unwrap_err();
        assert!(matches!(err.root_cause(), Error::SerdeJson(_)));
        assert!(err.to_string().starts_with("Parse JSON configuration store failed"));
    }

    #[test]
    fn test_block_entries_carry_indexed_paths() {
        let store = store();
        let list = store.block("phpbu.directories").unwrap();
        let entries = list.entries().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].path(), "phpbu.directories[1]");
        let path = entries[1].required("source").unwrap().required("path").unwrap();
        assert_eq!(path.path(), "phpbu.directories[1].source.path");
        assert_eq!(path.as_str().unwrap(), "/etc");
    }

    #[test]
    fn test_block_entries_rejects_non_list() {
        let store = store();
        let err = store.block("phpbu.config").unwrap().entries().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue { path, expected: "list" } if path == "phpbu.config"
        ));
    }

    #[test]
    fn test_block_optional_treats_null_as_absent() {
        let store = store();
        let phpbu = store.block("phpbu").unwrap();
        assert!(phpbu.optional("nothing").unwrap().is_none());
        assert!(phpbu.optional("missing").unwrap().is_none());
        assert!(phpbu.optional("empty").unwrap().is_some());
    }

    #[test]
    fn test_block_required_reports_full_path() {
        let store = store();
        let err = store.block("phpbu").unwrap().required("nothing").unwrap_err();
        assert!(matches!(err, Error::MissingKey { path } if path == "phpbu.nothing"));
    }

    #[test]
    fn test_block_object_on_scalar_fails() {
        let store = store();
        let err = store.block("phpbu.config").unwrap().optional("x").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue { expected: "mapping", .. }
        ));
    }

    #[test]
    fn test_as_scalar_string() {
        let value = json!({"s": "10M", "n": 42, "b": true, "l": [1]});
        let block = Block::new(&value, "check");

        assert_eq!(block.required("s").unwrap().as_scalar_string().unwrap(), "10M");
        assert_eq!(block.required("n").unwrap().as_scalar_string().unwrap(), "42");
        assert_eq!(block.required("b").unwrap().as_scalar_string().unwrap(), "true");
        assert!(block.required("l").unwrap().as_scalar_string().is_err());
    }

    #[test]
    fn test_options_accepts_empty_list() {
        let value = json!({"a": [], "b": {"k": 1}, "c": [1], "d": null});
        let block = Block::new(&value, "source");

        assert!(block.options("a").unwrap().unwrap().is_empty());
        assert_eq!(block.options("b").unwrap().unwrap().get("k"), Some(&json!(1)));
        assert!(block.options("c").is_err());
        assert!(block.options("d").unwrap().is_none());
        assert!(block.options("e").unwrap().is_none());
    }
}
