//! <https://www.selenium.dev/documentation/legacy/json_wire_protocol/#command-reference>
//!
//! Every binding resolves its arguments into a [`RequestDescriptor`] and hands it to a
//! [`Dispatcher`](crate::dispatcher::Dispatcher). The helpers here are shared between them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::ProtocolError;

/// Filled in by the dispatcher with the id of the active session.
pub const SESSION_ID_PLACEHOLDER: &str = ":sessionId";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// The http call a binding wants to issue.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: Method,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// `/session/:sessionId/<suffix>`
#[must_use]
pub fn session_path(suffix: &str) -> String {
    format!("/session/{SESSION_ID_PLACEHOLDER}/{suffix}")
}

impl RequestDescriptor {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            payload: Map::new(),
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, payload: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            method: Method::Post,
            payload,
        }
    }

    /// Rejects `POST` descriptors where one of `fields` isn't a number.
    pub fn ensure_numeric(self, command: &str, fields: &[&str]) -> Result<Self, ProtocolError> {
        if self.method == Method::Post
            && fields
                .iter()
                .any(|field| !self.payload.get(*field).is_some_and(Value::is_number))
        {
            return Err(ProtocolError::arguments_mismatch(command));
        }
        Ok(self)
    }

    #[must_use]
    pub fn needs_session(&self) -> bool {
        self.path.contains(SESSION_ID_PLACEHOLDER)
    }

    /// Substitutes the session placeholder. `None` if it is needed but missing.
    #[must_use]
    pub fn resolve_path(&self, session_id: Option<&str>) -> Option<String> {
        if !self.needs_session() {
            return Some(self.path.clone());
        }
        session_id.map(|session_id| self.path.replace(SESSION_ID_PLACEHOLDER, session_id))
    }
}

/// JavaScript truthiness of a json value.
///
/// Zero counts as false, so a size of `0` is treated like an absent one.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().is_some_and(|number| number.abs() > 0.0),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Absolute value of a json number. Anything else is returned unchanged.
#[must_use]
pub fn abs(value: &Value) -> Value {
    let Value::Number(number) = value else {
        return value.clone();
    };
    if let Some(number) = number.as_u64() {
        Value::from(number)
    } else if let Some(number) = number.as_i64() {
        Value::from(number.unsigned_abs())
    } else {
        number
            .as_f64()
            .and_then(|number| Number::from_f64(number.abs()))
            .map_or_else(|| value.clone(), Value::Number)
    }
}
