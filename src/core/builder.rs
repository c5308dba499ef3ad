use std::sync::Arc;

use crate::events::{EventBus, LogRecord};
use crate::policies::{LevelFilter, TagLevelFilter};
use crate::sinks::{LogSink, TracingSink};
use crate::subscribers::Subscribe;

use super::config::Config;
use super::context::{Inner, LoggingContext};

/// Builder for constructing a [`LoggingContext`] with optional components.
pub struct LoggingContextBuilder {
    cfg: Config,
    filter: Option<Arc<dyn LevelFilter>>,
    sink: Option<Arc<dyn LogSink>>,
    subscribers: Vec<Arc<dyn Subscribe<LogRecord>>>,
}

impl LoggingContextBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            filter: None,
            sink: None,
            subscribers: Vec::new(),
        }
    }

    /// Sets the level filter. Default: [`TagLevelFilter::default`] (`Info`+).
    pub fn with_filter(mut self, filter: impl LevelFilter + 'static) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Sets a shared level filter.
    pub fn with_filter_arc(mut self, filter: Arc<dyn LevelFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the platform sink. Default: [`TracingSink`].
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Sets a shared platform sink.
    pub fn with_sink_arc(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets record subscribers registered at build time, in order.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe<LogRecord>>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the context and registers the initial subscribers.
    pub fn build(self) -> LoggingContext {
        let bus = EventBus::new();
        for sub in self.subscribers {
            let _ = bus.subscribe_arc(sub);
        }

        let ctx = LoggingContext::from_inner(Inner {
            cfg: self.cfg,
            bus,
            filter: self
                .filter
                .unwrap_or_else(|| Arc::new(TagLevelFilter::default())),
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink::new())),
        });
        tracing::debug!(
            subscribers = ctx.bus().len(),
            "logging context ready"
        );
        ctx
    }
}
