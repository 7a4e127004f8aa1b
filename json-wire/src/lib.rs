//! Bindings for the [Selenium JSON Wire protocol](https://www.selenium.dev/documentation/legacy/json_wire_protocol/).
//!
//! Bindings turn their arguments into a [`RequestDescriptor`](protocol::RequestDescriptor)
//! and hand it to a [`Dispatcher`]. [`HttpDispatcher`] talks to a remote end over http.

pub mod client;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod protocol;
pub mod window;

pub use client::Client;
pub use dispatcher::Dispatcher;
pub use error::{Error, ProtocolError, Result};
pub use http::HttpDispatcher;
