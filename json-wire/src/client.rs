use std::future::Future;

use tracing::debug;

use crate::dispatcher::Dispatcher;
use crate::window::handle_size;

/// Entry point for the protocol bindings.
#[derive(Debug, Clone)]
pub struct Client<D> {
    dispatcher: D,
}

impl<D: Dispatcher> Client<D> {
    pub const fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Gets or changes the size of a window.
    ///
    /// Malformed arguments fail right away, before anything is dispatched. Errors of
    /// the dispatcher are returned by the future as is.
    ///
    /// ```no_run
    /// # async fn example() -> json_wire::Result<()> {
    /// use json_wire::window::SizeRequest;
    /// use json_wire::{Client, HttpDispatcher};
    ///
    /// let client = Client::new(HttpDispatcher::new("http://127.0.0.1:4444/wd/hub", Some("1".to_owned()))?);
    /// let size = client.window_handle_size(())?.await?;
    /// client
    ///     .window_handle_size(("dc30381e-e2f3-9444-8bf3-12cc44e8372a", SizeRequest::new(800, 600)))?
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn window_handle_size(
        &self,
        arguments: impl Into<handle_size::Arguments>,
    ) -> crate::Result<impl Future<Output = crate::Result<handle_size::Result>> + Send + '_> {
        let descriptor = handle_size::request(arguments)?;
        debug!(
            command = handle_size::COMMAND,
            path = %descriptor.path,
            method = descriptor.method.as_str(),
            "dispatching"
        );
        let method = descriptor.method;
        let response = self.dispatcher.dispatch(descriptor);
        Ok(async move { handle_size::Result::from_response(method, response.await?) })
    }
}
