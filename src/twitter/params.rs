//! Request parameter types shared by the Twitter API operations.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::error::TwitterError;

/// Identifies a Twitter user either by numeric ID or by screen name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdentifier {
    /// Numeric user ID, sent as `user_id`
    Id(i64),
    /// Screen name (handle without `@`), sent as `screen_name`
    ScreenName(String),
}

impl UserIdentifier {
    /// The query parameter this identifier is sent as.
    pub fn param_name(&self) -> &'static str {
        match self {
            UserIdentifier::Id(_) => "user_id",
            UserIdentifier::ScreenName(_) => "screen_name",
        }
    }

    fn param_value(&self) -> ParamValue {
        match self {
            UserIdentifier::Id(id) => ParamValue::Int(*id),
            UserIdentifier::ScreenName(name) => ParamValue::Str(name.clone()),
        }
    }
}

impl fmt::Display for UserIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserIdentifier::Id(id) => write!(f, "user {}", id),
            UserIdentifier::ScreenName(name) => write!(f, "@{}", name),
        }
    }
}

impl From<i64> for UserIdentifier {
    fn from(id: i64) -> Self {
        UserIdentifier::Id(id)
    }
}

impl From<&str> for UserIdentifier {
    fn from(screen_name: &str) -> Self {
        UserIdentifier::ScreenName(screen_name.to_string())
    }
}

impl From<String> for UserIdentifier {
    fn from(screen_name: String) -> Self {
        UserIdentifier::ScreenName(screen_name)
    }
}

/// Builds an identifier from loosely-typed input such as a decoded JSON
/// document or a scripting bridge.
///
/// Integer-valued numbers (including `12345.0` and negatives) become
/// [`UserIdentifier::Id`], strings become [`UserIdentifier::ScreenName`];
/// anything else (fractional numbers, booleans, null, arrays, objects) is
/// rejected.
impl TryFrom<&Value> for UserIdentifier {
    type Error = TwitterError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => integral_id(n).map(UserIdentifier::Id).ok_or_else(|| {
                TwitterError::InvalidArgument(format!(
                    "The specified user is not in the correct format; must use integer or string, got number {} which is not a 64-bit integer",
                    n
                ))
            }),
            Value::String(s) => Ok(UserIdentifier::ScreenName(s.clone())),
            other => Err(TwitterError::InvalidArgument(format!(
                "The specified user is not in the correct format; must use integer or string, got {}",
                json_type_name(other)
            ))),
        }
    }
}

impl TryFrom<Value> for UserIdentifier {
    type Error = TwitterError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        UserIdentifier::try_from(&value)
    }
}

/// The number as an `i64` if it has no fractional part and is in range.
fn integral_id(n: &serde_json::Number) -> Option<i64> {
    if let Some(id) = n.as_i64() {
        return Some(id);
    }
    let f = n.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

/// Ordered query parameters for one request.
///
/// Keys only appear when a value was actually supplied: [`with`](Self::with)
/// drops `None`, so an unset option never reaches the wire, not even as an
/// empty or default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParameters {
    pairs: Vec<(String, ParamValue)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a parameter set with the `user_id` or `screen_name` key for `user`.
    pub fn for_user(user: &UserIdentifier) -> Self {
        Self::new().insert(user.param_name(), user.param_value())
    }

    /// Appends `key` unconditionally, replacing any earlier value for it.
    pub fn insert(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Appends `key` only when `value` is `Some`.
    pub fn with<V: Into<ParamValue>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.insert(key, v),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, ParamValue)] {
        &self.pairs
    }
}

/// Renders the parameters as a URL-encoded query string.
impl fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = serde_urlencoded::to_string(&self.pairs).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}
