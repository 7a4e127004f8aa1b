use std::future::Future;

use serde_json::Value;

use crate::protocol::RequestDescriptor;

/// Sends resolved requests to the remote end.
///
/// Implementations own the transport, fill in the session id and unwrap the response.
/// Bindings call [`Dispatcher::dispatch`] exactly once per command and pass its
/// errors through unchanged.
pub trait Dispatcher {
    fn dispatch(
        &self,
        descriptor: RequestDescriptor,
    ) -> impl Future<Output = crate::Result<Value>> + Send;
}
