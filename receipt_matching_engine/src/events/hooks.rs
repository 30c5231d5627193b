//! Wiring between the engine and whoever wants to hear about its events.
//!
//! Callers describe what should happen on each event with [`EventHooks`], turn those into running
//! [`EventHandlers`], and hand the resulting [`EventProducers`] to the engine. An event with no hook has no producer,
//! so the engine skips publishing it.
use std::{future::Future, pin::Pin, sync::Arc};

use crate::events::{EventHandler, EventProducer, Handler, MatchFoundEvent};

/// The publishing side of every configured hook. Cheap to clone.
#[derive(Default, Clone)]
pub struct EventProducers {
    pub match_found_producer: Vec<EventProducer<MatchFoundEvent>>,
}

/// One [`EventHandler`] per configured hook.
pub struct EventHandlers {
    pub on_match_found: Option<EventHandler<MatchFoundEvent>>,
}

impl EventHandlers {
    /// `buffer_size` bounds each event channel. Publishers wait when it is full.
    pub fn new(buffer_size: usize, hooks: EventHooks) -> Self {
        let on_match_found = hooks.on_match_found.map(|f| EventHandler::new(buffer_size, f));
        Self { on_match_found }
    }

    /// Fresh producers subscribed to every handler. Call this before [`Self::start_handlers`], which consumes `self`.
    pub fn producers(&self) -> EventProducers {
        let mut result = EventProducers::default();
        if let Some(handler) = &self.on_match_found {
            result.match_found_producer.push(handler.subscribe());
        }
        result
    }

    /// Spawns every handler onto the runtime and returns immediately.
    ///
    /// Each handler stops once all of its producers have been dropped.
    pub async fn start_handlers(self) {
        if let Some(handler) = self.on_match_found {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
    }
}

#[derive(Default, Clone)]
pub struct EventHooks {
    pub on_match_found: Option<Handler<MatchFoundEvent>>,
}

impl EventHooks {
    /// Run `f` for every [`MatchFoundEvent`]. Replaces any hook set previously.
    pub fn on_match_found<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(MatchFoundEvent) -> Pin<Box<dyn Future<Output = ()> + Send>>) + Send + Sync + 'static {
        self.on_match_found = Some(Arc::new(f));
        self
    }
}
