//! Core library for the `clothing` CLI.
//!
//! This crate defines:
//! - The request model (flat or `payload`-wrapped) and its validation
//! - Season resolution from an injectable clock
//! - The recommendation generator (temperature bands, weather and regional overlays)
//! - Diagnostic event sinks and on-disk configuration
//!
//! It is used by `clothing-cli`, but can also be embedded in other services.

pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod recommend;
pub mod season;
pub mod service;

pub use config::{Config, OutputFormat};
pub use error::{ClothingError, GenerateError, PrecipitationError};
pub use events::{EventSink, NoopEventSink, SuggestionEvent, TracingEventSink};
pub use model::{
    Conditions, Precipitation, PrecipitationInput, PrecipitationKind, Recommendation, Request,
    RequestFields, TemperatureInput,
};
pub use season::{Clock, FixedClock, Season, SystemClock, current_season};
pub use service::ClothingAdvisor;
