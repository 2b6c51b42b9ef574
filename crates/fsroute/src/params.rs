//! Parameters bound by dynamic route segments.
//!
//! A fresh [`BoundParams`] is created for every resolution and owned by its
//! [`Resolution`](crate::Resolution); nothing here is shared between requests.

use serde::Serialize;
use std::collections::BTreeMap;

/// Value bound to one parameter
///
/// `[id]` binds a single request segment, `[...slug]` binds the ordered tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    One(String),
    Many(Vec<String>),
}

impl ParamValue {
    /// The single value, `None` for catch-all values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::One(value) => Some(value),
            ParamValue::Many(_) => None,
        }
    }
}

/// Parameter name → bound value
///
/// # Examples
///
/// ```
/// use fsroute::BoundParams;
///
/// let params = BoundParams::single("id", "42");
/// assert_eq!(params.get_one("id"), Some("42"));
///
/// let params = BoundParams::many("slug", ["a", "b"]);
/// assert_eq!(params.get_many("slug"), Some(&["a".to_string(), "b".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoundParams(BTreeMap<String, ParamValue>);

impl BoundParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = Self::new();
        params.insert(name, ParamValue::One(value.into()));
        params
    }

    pub fn many<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut params = Self::new();
        params.insert(
            name,
            ParamValue::Many(values.into_iter().map(Into::into).collect()),
        );
        params
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn get_one(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Catch-all values; `None` when the parameter is missing or single
    pub fn get_many(&self, name: &str) -> Option<&[String]> {
        match self.get(name)? {
            ParamValue::Many(values) => Some(values),
            ParamValue::One(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}
