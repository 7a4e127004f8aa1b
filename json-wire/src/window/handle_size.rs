//! <https://www.selenium.dev/documentation/legacy/json_wire_protocol/#sessionsessionidwindowwindowhandlesize>
//!
//! Reads the size of a window, or changes it when a new size is given.

use serde_json::{Map, Value};

use super::{SizeRequest, WindowHandle, WindowSize};
use crate::error::ProtocolError;
use crate::protocol::{abs, is_truthy, session_path, Method, RequestDescriptor};

pub const COMMAND: &str = "windowHandleSize";

static ABSENT: Value = Value::Null;

/// The supported call shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Arguments {
    /// Read the size of the current window.
    #[default]
    None,
    /// Read the size of the given window.
    Handle(WindowHandle),
    /// Resize the current window.
    Size(SizeRequest),
    /// Resize the given window.
    HandleAndSize(WindowHandle, SizeRequest),
}

impl Arguments {
    /// Resolves untyped positional arguments.
    ///
    /// An object in first position is taken as the new size of the current window.
    pub fn from_positional(arguments: &[Value]) -> core::result::Result<Self, ProtocolError> {
        let (first, second) = match arguments {
            [] => (&ABSENT, &ABSENT),
            [first] => (first, &ABSENT),
            [first, second] => (first, second),
            _ => return Err(ProtocolError::arguments_mismatch(COMMAND)),
        };
        match first {
            Value::Null => Ok(Self::None),
            Value::Object(size) => Ok(Self::Size(size_request(size))),
            Value::String(handle) => match second {
                Value::Object(size) => Ok(Self::HandleAndSize(
                    handle.as_str().into(),
                    size_request(size),
                )),
                _ => Ok(Self::Handle(handle.as_str().into())),
            },
            // deliberately stricter than loosely typed callers: arrays, numbers and
            // booleans are neither a handle nor a size
            _ => Err(ProtocolError::arguments_mismatch(COMMAND)),
        }
    }

    #[must_use]
    pub fn resolve(self) -> (WindowHandle, Option<SizeRequest>) {
        match self {
            Self::None => (WindowHandle::Current, None),
            Self::Handle(handle) => (handle, None),
            Self::Size(size) => (WindowHandle::Current, Some(size)),
            Self::HandleAndSize(handle, size) => (handle, Some(size)),
        }
    }
}

fn size_request(size: &Map<String, Value>) -> SizeRequest {
    SizeRequest {
        width: size.get("width").cloned().unwrap_or_default(),
        height: size.get("height").cloned().unwrap_or_default(),
    }
}

impl From<()> for Arguments {
    fn from((): ()) -> Self {
        Self::None
    }
}

impl From<WindowHandle> for Arguments {
    fn from(handle: WindowHandle) -> Self {
        Self::Handle(handle)
    }
}

impl From<&str> for Arguments {
    fn from(handle: &str) -> Self {
        Self::Handle(handle.into())
    }
}

impl From<String> for Arguments {
    fn from(handle: String) -> Self {
        Self::Handle(handle.into())
    }
}

impl From<SizeRequest> for Arguments {
    fn from(size: SizeRequest) -> Self {
        Self::Size(size)
    }
}

impl From<WindowSize> for Arguments {
    fn from(size: WindowSize) -> Self {
        Self::Size(size.into())
    }
}

impl<H: Into<WindowHandle>, S: Into<SizeRequest>> From<(H, S)> for Arguments {
    fn from((handle, size): (H, S)) -> Self {
        Self::HandleAndSize(handle.into(), size.into())
    }
}

/// Builds the request for the given call shape.
///
/// Writes only happen when both width and height are truthy, so a zero
/// dimension falls back to reading the size. Negative dimensions are sent as
/// their absolute value.
pub fn request(
    arguments: impl Into<Arguments>,
) -> core::result::Result<RequestDescriptor, ProtocolError> {
    let (handle, size) = arguments.into().resolve();
    let path = session_path(&format!("window/{handle}/size"));

    let descriptor = match size {
        Some(size) if is_truthy(&size.width) && is_truthy(&size.height) => {
            let mut payload = Map::new();
            payload.insert("width".to_owned(), abs(&size.width));
            payload.insert("height".to_owned(), abs(&size.height));
            RequestDescriptor::post(path, payload)
        }
        _ => RequestDescriptor::get(path),
    };

    descriptor.ensure_numeric(COMMAND, &["width", "height"])
}

/// What the remote end answered.
#[derive(Debug, Clone, PartialEq)]
pub enum Result {
    /// The current size of the window.
    Size(WindowSize),
    /// The acknowledgement of a resize, as sent by the remote end.
    Acknowledged(Value),
}

impl Result {
    pub fn from_response(method: Method, value: Value) -> crate::Result<Self> {
        match method {
            Method::Get => Ok(Self::Size(serde_path_to_error::deserialize(value)?)),
            Method::Post => Ok(Self::Acknowledged(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{request, Arguments, Result, COMMAND};
    use crate::protocol::{Method, RequestDescriptor};
    use crate::window::{SizeRequest, WindowHandle, WindowSize};

    const HANDLE: &str = "dc30381e-e2f3-9444-8bf3-12cc44e8372a";

    fn payload(value: &Value) -> serde_json::Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn no_arguments_reads_current_window() {
        assert_eq!(
            request(()).unwrap(),
            RequestDescriptor {
                path: "/session/:sessionId/window/current/size".to_owned(),
                method: Method::Get,
                payload: serde_json::Map::new(),
            }
        );
        assert_eq!(request(()).unwrap(), request("current").unwrap());
    }

    #[test]
    fn handle_reads_that_window() {
        let descriptor = request(HANDLE).unwrap();
        assert_eq!(
            descriptor.path,
            format!("/session/:sessionId/window/{HANDLE}/size")
        );
        assert_eq!(descriptor.method, Method::Get);
        assert!(descriptor.payload.is_empty());
    }

    #[test]
    fn size_alone_targets_current_window() {
        let size = SizeRequest::new(800, 600);
        assert_eq!(
            request(size.clone()).unwrap(),
            request((WindowHandle::Current, size)).unwrap()
        );
    }

    #[test]
    fn negative_sizes_are_sent_as_absolute_values() {
        let descriptor = request((HANDLE, SizeRequest::new(-800, 600))).unwrap();
        assert_eq!(
            descriptor,
            RequestDescriptor {
                path: format!("/session/:sessionId/window/{HANDLE}/size"),
                method: Method::Post,
                payload: payload(&json!({ "width": 800, "height": 600 })),
            }
        );

        let descriptor = request(SizeRequest::new(-1.5, -2)).unwrap();
        assert_eq!(
            descriptor.payload,
            payload(&json!({ "width": 1.5, "height": 2 }))
        );
    }

    // zero is falsy, so this reads instead of resizing to zero
    #[test]
    fn zero_dimension_reads_instead_of_writing() {
        for size in [SizeRequest::new(0, 600), SizeRequest::new(800, 0)] {
            let descriptor = request(size).unwrap();
            assert_eq!(descriptor.method, Method::Get);
            assert!(descriptor.payload.is_empty());
        }
    }

    #[test]
    fn missing_dimension_reads() {
        let descriptor = request(SizeRequest::new(800, Value::Null)).unwrap();
        assert_eq!(descriptor.method, Method::Get);
    }

    #[test]
    fn string_dimension_is_rejected() {
        let error = request(SizeRequest::new("800", 600)).unwrap_err();
        assert_eq!(
            error.message,
            format!("number or type of arguments don't agree with {COMMAND} protocol command")
        );
        assert!(request((HANDLE, SizeRequest::new(800, true))).is_err());
    }

    #[test]
    fn positional_disambiguation() {
        assert_eq!(Arguments::from_positional(&[]).unwrap(), Arguments::None);
        assert_eq!(
            Arguments::from_positional(&[json!(HANDLE)]).unwrap(),
            Arguments::Handle(WindowHandle::Handle(HANDLE.to_owned()))
        );
        assert_eq!(
            Arguments::from_positional(&[json!({ "width": 800, "height": 600 })]).unwrap(),
            Arguments::Size(SizeRequest::new(800, 600))
        );
        assert_eq!(
            Arguments::from_positional(&[json!(HANDLE), json!({ "width": 800, "height": 600 })])
                .unwrap(),
            Arguments::HandleAndSize(
                WindowHandle::Handle(HANDLE.to_owned()),
                SizeRequest::new(800, 600)
            )
        );
        assert_eq!(
            Arguments::from_positional(&[json!(HANDLE), json!(12)]).unwrap(),
            Arguments::Handle(WindowHandle::Handle(HANDLE.to_owned()))
        );
        assert!(Arguments::from_positional(&[json!(12)]).is_err());
        assert!(Arguments::from_positional(&[json!(HANDLE), json!({}), json!({})]).is_err());
    }

    #[test]
    fn responses() {
        assert_eq!(
            Result::from_response(Method::Get, json!({ "width": 1280, "height": 720 })).unwrap(),
            Result::Size(WindowSize {
                width: 1280,
                height: 720
            })
        );
        assert_eq!(
            Result::from_response(Method::Post, Value::Null).unwrap(),
            Result::Acknowledged(Value::Null)
        );
        assert!(Result::from_response(Method::Get, json!({ "width": "wide" })).is_err());
    }
}
