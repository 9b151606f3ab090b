//! Diagnostic events emitted by [`crate::ClothingAdvisor`].

use crate::{
    error::{ClothingError, PrecipitationError},
    model::{PrecipitationInput, PrecipitationKind, Recommendation, Request},
    season::{Season, UnknownSeason},
};

#[derive(Debug)]
pub enum SuggestionEvent<'a> {
    Received(&'a Request),
    PrecipitationUnreadable {
        kind: PrecipitationKind,
        input: &'a PrecipitationInput,
        error: &'a PrecipitationError,
    },
    SeasonUnrecognized {
        raw: &'a str,
        error: &'a UnknownSeason,
        fallback: Season,
    },
    Generated(&'a Recommendation),
    Failed(&'a ClothingError),
}

/// Receives diagnostic events. Implementations must not block and cannot
/// influence the outcome of a request.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &SuggestionEvent<'_>);
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &SuggestionEvent<'_>) {}
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &SuggestionEvent<'_>) {
        match event {
            SuggestionEvent::Received(request) => {
                tracing::info!(?request, "clothing suggestions request");
            }
            SuggestionEvent::PrecipitationUnreadable { kind, input, error } => {
                tracing::warn!(%kind, ?input, %error, "could not parse precipitation data");
            }
            SuggestionEvent::SeasonUnrecognized { raw, error, fallback } => {
                tracing::warn!(raw, %error, %fallback, "ignoring season override");
            }
            SuggestionEvent::Generated(recommendation) => {
                tracing::info!(?recommendation, "generated clothing suggestions");
            }
            SuggestionEvent::Failed(error) => {
                tracing::error!(%error, "error generating clothing suggestions");
            }
        }
    }
}
