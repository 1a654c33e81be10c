use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicU64, Ordering},
};

use tracing::debug;

use crate::{
    config::Config,
    model::LocationQuery,
    render::{RenderTarget, View},
    source::WeatherSource,
};

/// The widget: one injected weather source, one injected output surface,
/// one submission at a time from the user's point of view.
///
/// Each submission runs idle → fetching → (success | error) → idle. The
/// generation counter makes the newest submission win: a response arriving
/// after a newer submission started is dropped instead of overwriting the
/// newer rendering.
pub struct WeatherLookup<T> {
    config: Config,
    source: Box<dyn WeatherSource>,
    surface: Mutex<T>,
    generation: AtomicU64,
}

impl<T: RenderTarget> WeatherLookup<T> {
    pub fn new(config: Config, source: Box<dyn WeatherSource>, surface: T) -> Self {
        Self { config, source, surface: Mutex::new(surface), generation: AtomicU64::new(0) }
    }

    /// Handle one submission end to end.
    ///
    /// Renders the fetching placeholder, then exactly one of a reading or an
    /// error. Empty input and a placeholder credential short-circuit before
    /// the source is consulted, so no request is issued for them.
    pub async fn submit_query(&self, raw_input: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let query = match LocationQuery::parse(raw_input) {
            Ok(query) => query,
            Err(err) => {
                self.render_if_current(generation, &View::Failure(err.to_string()));
                return;
            }
        };

        if let Err(err) = self.config.credential() {
            self.render_if_current(generation, &View::Failure(err.to_string()));
            return;
        }

        self.render_if_current(generation, &View::Fetching);

        let view = match self.source.current(&query).await {
            Ok(reading) => View::Reading(reading),
            Err(err) => {
                debug!(city = query.as_str(), error = %err, "lookup failed");
                View::Failure(err.to_string())
            }
        };

        self.render_if_current(generation, &view);
    }

    /// Render only if `generation` still belongs to the newest submission.
    /// The check happens under the surface lock so a newer submission cannot
    /// be overwritten between check and write.
    fn render_if_current(&self, generation: u64, view: &View) {
        let mut surface = self.lock_surface();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "dropping stale response");
            return;
        }

        surface.render(view);
    }

    fn lock_surface(&self) -> MutexGuard<'_, T> {
        match self.surface.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
