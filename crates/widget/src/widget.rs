//! The events widget.

use std::sync::Arc;

use events_widget_core::filters::{Filters, WidgetOptions};
use events_widget_core::mount::{resolve_mount, MountElement, MountProvider};
use events_widget_core::render::{DefaultRenderer, Renderer};
use events_widget_core::response::decode_response;
use events_widget_core::transport::Transport;
use events_widget_core::url::{build_url, PathEncoding, QueryParams, DEFAULT_API_URL};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::Result;
use crate::transport::{http_request, ErrorDispatch, RequestOptions};

/// What a fetch did to the mount element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The mount element now holds markup for `count` events.
    Rendered { count: usize },
    /// The response carried neither an error nor events; nothing was written.
    NoEvents,
    /// The request completed without a `200`; nothing was written.
    Warned,
    /// The transport could not complete the request; nothing was written.
    Unreachable,
}

/// Fetches events with the configured filters and renders them into its
/// mount element.
pub struct EventsWidget<E> {
    container: E,
    filters: Filters,
    api_url: String,
    path_encoding: PathEncoding,
    error_dispatch: ErrorDispatch,
    transport: Arc<dyn Transport>,
}

impl<E: MountElement> EventsWidget<E> {
    /// Creates a widget, resolving its mount element through `provider`.
    ///
    /// A `container` option that matches an element reuses it; otherwise a new
    /// element is attached to the document. Every option is merged into the
    /// filters.
    pub fn new<P>(
        options: impl Into<WidgetOptions>,
        provider: &P,
        transport: Arc<dyn Transport>,
    ) -> Self
    where
        P: MountProvider<Element = E> + ?Sized,
    {
        let options = options.into();
        let mount = resolve_mount(provider, options.container());
        tracing::debug!(
            created = mount.was_created(),
            container = options.container(),
            "Resolved mount element"
        );

        Self {
            container: mount.into_element(),
            filters: Filters::merge(&options),
            api_url: DEFAULT_API_URL.to_string(),
            path_encoding: PathEncoding::default(),
            error_dispatch: ErrorDispatch::default(),
            transport,
        }
    }

    /// Applies the API URL, path encoding, and error dispatch from `config`.
    pub fn with_config(self, config: &Config) -> Self {
        self.with_api_url(config.api_url.clone())
            .with_path_encoding(config.path_encoding)
            .with_error_dispatch(config.error_dispatch)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_path_encoding(mut self, encoding: PathEncoding) -> Self {
        self.path_encoding = encoding;
        self
    }

    pub fn with_error_dispatch(mut self, dispatch: ErrorDispatch) -> Self {
        self.error_dispatch = dispatch;
        self
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Request URL for the current filters and `params`.
    pub fn url(&self, params: &QueryParams) -> String {
        build_url(&self.api_url, &self.filters, params, self.path_encoding)
    }

    /// Fetches events and writes the rendered markup into the mount element.
    ///
    /// `renderer` replaces the built-in template entirely when given. Errors
    /// from the response (empty body, malformed JSON, a server-reported error)
    /// are returned and leave the mount element untouched.
    pub async fn fetch(
        &self,
        params: &QueryParams,
        renderer: Option<&dyn Renderer>,
    ) -> Result<FetchOutcome> {
        let mut rendered = None;
        let mut warned = false;

        let options = RequestOptions::new(self.url(params))
            .error_dispatch(self.error_dispatch)
            .on_success(|body| {
                rendered = Some(self.render_body(&body, renderer)?);
                Ok(())
            })
            .on_warning(|| warned = true);

        http_request(self.transport.as_ref(), options).await?;

        Ok(match rendered {
            Some(outcome) => outcome,
            None if warned => FetchOutcome::Warned,
            None => FetchOutcome::Unreachable,
        })
    }

    fn render_body(&self, body: &str, renderer: Option<&dyn Renderer>) -> Result<FetchOutcome> {
        let Some(events) = decode_response(body)? else {
            tracing::debug!("Response carried no events");
            return Ok(FetchOutcome::NoEvents);
        };

        let html = match renderer {
            Some(renderer) => renderer.render(&events)?,
            None => DefaultRenderer.render(&events)?,
        };
        self.container.set_inner_html(&html);

        tracing::info!(count = events.len(), "Rendered events");
        Ok(FetchOutcome::Rendered {
            count: events.len(),
        })
    }
}

impl<E: MountElement + 'static> EventsWidget<E> {
    /// Starts a fetch on the tokio runtime without waiting for it.
    ///
    /// Failures are logged. Overlapping fetches are not coordinated: the last
    /// one to complete decides the mount element's content.
    pub fn spawn_fetch(
        self: &Arc<Self>,
        params: QueryParams,
        renderer: Option<Arc<dyn Renderer>>,
    ) -> JoinHandle<Result<FetchOutcome>> {
        let widget = Arc::clone(self);
        tokio::spawn(async move {
            let result = widget.fetch(&params, renderer.as_deref()).await;
            if let Err(err) = &result {
                tracing::error!(error = %err, "Events fetch failed");
            }
            result
        })
    }
}
