// https://github.com/hyperium/hyper/blob/master/examples/client.rs

use std::future::Future;

use bytes::Bytes;
use http_body_util::{BodyExt as _, Full};
use hyper::header::{CONTENT_TYPE, HOST};
use hyper::{Request, StatusCode, Uri};
use hyper_util::rt::TokioIo;
use json_wire_config::Config;
use serde_json::Value;
use tokio::net::TcpStream;
use tracing::{debug, trace, warn};

use crate::dispatcher::Dispatcher;
use crate::error::Error;
use crate::protocol::{Method, RequestDescriptor};

impl From<Method> for hyper::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}

/// Sends requests to a JSON Wire remote end, one http/1.1 connection per request.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    base: Uri,
    session_id: Option<String>,
}

impl HttpDispatcher {
    pub fn new(url: &str, session_id: Option<String>) -> crate::Result<Self> {
        let base: Uri = url.parse()?;
        // no tls support, only plain http remote ends
        if base.scheme_str() != Some("http") {
            return Err(Error::UnsupportedScheme(url.to_owned()));
        }
        if base.host().is_none() {
            return Err(Error::MissingHost(url.to_owned()));
        }
        Ok(Self { base, session_id })
    }

    pub fn from_config(config: &Config) -> crate::Result<Self> {
        Self::new(&config.url, config.session_id.clone())
    }

    #[must_use]
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    async fn send(&self, descriptor: RequestDescriptor) -> crate::Result<Value> {
        let path = descriptor
            .resolve_path(self.session_id.as_deref())
            .ok_or(Error::NoSession)?;
        let path = format!("{}{path}", self.base.path().trim_end_matches('/'));

        let host = self
            .base
            .host()
            .ok_or_else(|| Error::MissingHost(self.base.to_string()))?;
        let port = self.base.port_u16().unwrap_or(80);
        let authority = self
            .base
            .authority()
            .map_or_else(|| host.to_owned(), |authority| authority.as_str().to_owned());

        let stream = TcpStream::connect((host, port)).await?;
        let io = TokioIo::new(stream);

        let (mut sender, connection) = hyper::client::conn::http1::handshake(io).await?;
        tokio::spawn(async move {
            if let Err(error) = connection.await {
                warn!("connection to remote end failed: {error}");
            }
        });

        let body = match descriptor.method {
            Method::Get => Bytes::new(),
            Method::Post => Bytes::from(serde_json::to_vec(&descriptor.payload)?),
        };

        debug!(method = descriptor.method.as_str(), %path, "sending request");

        let mut request = Request::builder()
            .method(hyper::Method::from(descriptor.method))
            .uri(path)
            .header(HOST, authority);
        if descriptor.method == Method::Post {
            request = request.header(CONTENT_TYPE, "application/json;charset=UTF-8");
        }
        let request = request.body(Full::new(body))?;

        let response = sender.send_request(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();

        trace!(%status, body = %String::from_utf8_lossy(&body), "received response");

        decode(status, &body)
    }
}

impl Dispatcher for HttpDispatcher {
    fn dispatch(
        &self,
        descriptor: RequestDescriptor,
    ) -> impl Future<Output = crate::Result<Value>> + Send {
        self.send(descriptor)
    }
}

/// Unwraps the `{ "status": .., "value": .. }` envelope.
fn decode(status: StatusCode, body: &[u8]) -> crate::Result<Value> {
    let envelope: Value = if body.is_empty() {
        Value::Null
    } else {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        let parsed = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(Error::from)
            .and_then(|envelope: Value| {
                deserializer.end()?;
                Ok(envelope)
            });
        match parsed {
            Ok(envelope) => envelope,
            Err(error) if status.is_success() => return Err(error),
            Err(_) => {
                return Err(Error::HttpStatus {
                    status,
                    body: String::from_utf8_lossy(body).into_owned(),
                })
            }
        }
    };

    if let Some(code) = envelope.get("status").and_then(Value::as_i64) {
        if code != 0 {
            let message = envelope
                .pointer("/value/message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            warn!(status = code, %message, "remote end reported a failure");
            return Err(Error::Remote {
                status: code,
                message,
            });
        }
    }

    if !status.is_success() {
        return Err(Error::HttpStatus {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    Ok(match envelope {
        Value::Object(mut envelope) => match envelope.remove("value") {
            Some(value) => value,
            None => Value::Object(envelope),
        },
        envelope => envelope,
    })
}
