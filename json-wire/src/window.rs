//! <https://www.selenium.dev/documentation/legacy/json_wire_protocol/#sessionsessionidwindowwindowhandlesize>

use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod handle_size;

/// A browser window, or whichever window currently has focus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum WindowHandle {
    #[default]
    Current,
    Handle(String),
}

impl Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current"),
            Self::Handle(handle) => f.write_str(handle),
        }
    }
}

impl From<String> for WindowHandle {
    fn from(handle: String) -> Self {
        if handle == "current" {
            Self::Current
        } else {
            Self::Handle(handle)
        }
    }
}

impl From<&str> for WindowHandle {
    fn from(handle: &str) -> Self {
        Self::from(handle.to_owned())
    }
}

/// Window dimensions in pixels as reported by the remote end.
///
/// Some drivers report negative sizes, hence the signed fields.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WindowSize {
    pub width: i64,
    pub height: i64,
}

/// A size as handed in by the caller. The fields aren't checked until the
/// request is built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeRequest {
    #[serde(default)]
    pub width: Value,
    #[serde(default)]
    pub height: Value,
}

impl SizeRequest {
    #[must_use]
    pub fn new(width: impl Into<Value>, height: impl Into<Value>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

impl From<WindowSize> for SizeRequest {
    fn from(size: WindowSize) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{SizeRequest, WindowHandle, WindowSize};

    #[test]
    fn current_is_the_sentinel() {
        assert_eq!(WindowHandle::from("current"), WindowHandle::Current);
        assert_eq!(WindowHandle::default().to_string(), "current");
        assert_eq!(
            WindowHandle::from("dc30381e-e2f3-9444-8bf3-12cc44e8372a").to_string(),
            "dc30381e-e2f3-9444-8bf3-12cc44e8372a"
        );
    }

    #[test]
    fn size_request_keeps_raw_values() {
        let size: SizeRequest = serde_json::from_value(json!({ "width": "800" })).unwrap();
        assert_eq!(size, SizeRequest::new("800", json!(null)));
        assert_eq!(
            SizeRequest::from(WindowSize {
                width: 800,
                height: 600
            }),
            SizeRequest::new(800, 600)
        );
    }
}
