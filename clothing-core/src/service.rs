//! Entry point: request validation, season defaulting and delegation to
//! the recommendation generator.

use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::ClothingError,
    events::{EventSink, NoopEventSink, SuggestionEvent},
    model::{
        Conditions, Precipitation, PrecipitationInput, PrecipitationKind, Recommendation, Request,
        RequestFields,
    },
    recommend,
    season::{Clock, Season, SystemClock, current_season},
};

/// Turns weather requests into clothing recommendations.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent callers.
#[derive(Clone)]
pub struct ClothingAdvisor {
    clock: Arc<dyn Clock>,
    sink: Arc<dyn EventSink>,
}

impl ClothingAdvisor {
    /// Advisor reading the host clock and discarding diagnostics.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            sink: Arc::new(NoopEventSink),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn season_today(&self) -> Season {
        current_season(self.clock.as_ref())
    }

    pub async fn suggest(&self, request: Request) -> Result<Recommendation, ClothingError> {
        self.sink.emit(&SuggestionEvent::Received(&request));

        let result = self
            .validate(request.into_fields())
            .and_then(|conditions| recommend::generate(&conditions).map_err(ClothingError::from));

        match &result {
            Ok(recommendation) => self.sink.emit(&SuggestionEvent::Generated(recommendation)),
            Err(err) => self.sink.emit(&SuggestionEvent::Failed(err)),
        }

        result
    }

    /// Like [`ClothingAdvisor::suggest`], for a request that has not been
    /// deserialized yet.
    pub async fn suggest_json(&self, value: Value) -> Result<Recommendation, ClothingError> {
        match serde_json::from_value::<Request>(value) {
            Ok(request) => self.suggest(request).await,
            Err(err) => {
                let err = ClothingError::validation(format!("malformed request: {err}"));
                self.sink.emit(&SuggestionEvent::Failed(&err));
                Err(err)
            }
        }
    }

    fn validate(&self, fields: RequestFields) -> Result<Conditions, ClothingError> {
        let temperature_c = fields
            .temperature
            .as_ref()
            .and_then(|t| t.as_celsius())
            .ok_or_else(|| ClothingError::validation("temperature must be a number"))?;

        let description = fields
            .description
            .filter(|d| !d.is_empty())
            .ok_or_else(|| ClothingError::validation("description is required"))?;

        let season = self.resolve_season(fields.season.as_deref());
        let lowered = description.to_lowercase();

        Ok(Conditions {
            rain: self.normalize(PrecipitationKind::Rain, fields.rain.as_ref(), &lowered),
            snow: self.normalize(PrecipitationKind::Snow, fields.snow.as_ref(), &lowered),
            temperature_c,
            description,
            season,
            region: fields.region.filter(|r| !r.is_empty()),
        })
    }

    /// Blank or unrecognised overrides fall back to the clock.
    fn resolve_season(&self, season: Option<&str>) -> Season {
        let Some(raw) = season.filter(|s| !s.trim().is_empty()) else {
            return self.season_today();
        };

        raw.parse().unwrap_or_else(|error| {
            let fallback = self.season_today();
            self.sink.emit(&SuggestionEvent::SeasonUnrecognized {
                raw,
                error: &error,
                fallback,
            });
            fallback
        })
    }

    /// Encoded amounts are only read when the overlay will fire; unreadable
    /// ones are reported to the sink and otherwise ignored.
    fn normalize(
        &self,
        kind: PrecipitationKind,
        input: Option<&PrecipitationInput>,
        description: &str,
    ) -> Precipitation {
        let Some(input) = input else {
            return Precipitation::default();
        };

        let precipitation = Precipitation {
            present: input.is_truthy(),
            amount: None,
        };
        if !precipitation.present && !description.contains(kind.as_str()) {
            return precipitation;
        }

        match input.amount() {
            None => precipitation,
            Some(Ok(amount)) => precipitation.with_amount(amount),
            Some(Err(error)) => {
                self.sink.emit(&SuggestionEvent::PrecipitationUnreadable {
                    kind,
                    input,
                    error: &error,
                });
                precipitation
            }
        }
    }
}

impl Default for ClothingAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClothingAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClothingAdvisor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::FixedClock;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<String> {
            self.events.lock().expect("sink lock").clone()
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: &SuggestionEvent<'_>) {
            let label = match event {
                SuggestionEvent::Received(_) => "received".to_string(),
                SuggestionEvent::PrecipitationUnreadable { kind, .. } => format!("unreadable:{kind}"),
                SuggestionEvent::SeasonUnrecognized { raw, .. } => format!("season:{raw}"),
                SuggestionEvent::Generated(_) => "generated".to_string(),
                SuggestionEvent::Failed(_) => "failed".to_string(),
            };
            self.events.lock().expect("sink lock").push(label);
        }
    }

    fn advisor_with(sink: Arc<RecordingSink>) -> ClothingAdvisor {
        let july = NaiveDate::from_ymd_opt(2025, 7, 4).expect("valid date");
        ClothingAdvisor::new()
            .with_clock(Arc::new(FixedClock(july)))
            .with_sink(sink)
    }

    #[test]
    fn season_comes_from_the_clock() {
        let advisor = advisor_with(Arc::default());
        assert_eq!(advisor.season_today(), Season::Summer);
    }

    #[test]
    fn season_override_wins_over_clock() {
        let advisor = advisor_with(Arc::default());
        let fields = RequestFields::new(5.0, "cloudy").with_season("Winter");

        let conditions = advisor.validate(fields).expect("valid request");
        assert_eq!(conditions.season, Season::Winter);
    }

    #[test]
    fn missing_season_uses_clock() {
        let advisor = advisor_with(Arc::default());

        let conditions = advisor.validate(RequestFields::new(5.0, "cloudy")).expect("valid");
        assert_eq!(conditions.season, Season::Summer);
    }

    #[test]
    fn blank_season_uses_clock() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());

        for blank in ["", "   "] {
            let fields = RequestFields::new(12.0, "cloudy").with_season(blank);
            let conditions = advisor.validate(fields).expect("valid request");
            assert_eq!(conditions.season, Season::Summer);
        }
        assert!(sink.events().is_empty());
    }

    #[test]
    fn unknown_season_falls_back_to_clock_with_warning() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());
        let fields = RequestFields::new(5.0, "cloudy").with_season("monsoon");

        let conditions = advisor.validate(fields).expect("valid request");
        assert_eq!(conditions.season, Season::Summer);
        assert_eq!(sink.events(), vec!["season:monsoon"]);
    }

    #[tokio::test]
    async fn empty_season_in_json_is_not_an_error() {
        let rec = advisor_with(Arc::default())
            .suggest_json(json!({ "temperature": 12, "description": "cloudy", "season": "" }))
            .await
            .expect("recommendation");

        assert_eq!(rec.footwear, vec!["Comfortable walking shoes"]);
    }

    #[test]
    fn empty_region_is_ignored() {
        let advisor = advisor_with(Arc::default());
        let fields = RequestFields::new(5.0, "cloudy").with_region("");

        let conditions = advisor.validate(fields).expect("valid request");
        assert_eq!(conditions.region, None);
    }

    #[test]
    fn precipitation_amount_is_normalized() {
        let advisor = advisor_with(Arc::default());
        let fields = RequestFields::new(5.0, "cloudy")
            .with_rain(PrecipitationInput::Encoded(r#"{"3h": 6}"#.into()))
            .with_snow(PrecipitationInput::Flag(false));

        let conditions = advisor.validate(fields).expect("valid request");
        assert_eq!(conditions.rain, Precipitation { present: true, amount: Some(6.0) });
        assert_eq!(conditions.snow, Precipitation::default());
    }

    #[tokio::test]
    async fn success_emits_received_then_generated() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());

        advisor
            .suggest(RequestFields::new(18.0, "partly cloudy").into())
            .await
            .expect("recommendation");

        assert_eq!(sink.events(), vec!["received", "generated"]);
    }

    #[tokio::test]
    async fn unreadable_snow_data_is_a_warning_only() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());
        let fields =
            RequestFields::new(-1.0, "overcast").with_snow(PrecipitationInput::Encoded("{oops".into()));

        let rec = advisor.suggest(fields.into()).await.expect("recommendation");

        assert_eq!(rec.footwear, vec!["Insulated, waterproof boots with good traction"]);
        assert_eq!(sink.events(), vec!["received", "unreadable:snow", "generated"]);
    }

    #[tokio::test]
    async fn encoded_amount_not_read_when_overlay_is_off() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());
        let fields =
            RequestFields::new(24.0, "sunny").with_snow(PrecipitationInput::Encoded(String::new()));

        let rec = advisor.suggest(fields.into()).await.expect("recommendation");

        assert_eq!(rec.footwear, vec!["Comfortable shoes or sneakers"]);
        assert_eq!(sink.events(), vec!["received", "generated"]);
    }

    #[test]
    fn keyword_triggered_overlay_reads_encoded_amount() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());
        let fields = RequestFields::new(14.0, "Heavy Rain")
            .with_rain(PrecipitationInput::Encoded(String::new()));

        let conditions = advisor.validate(fields).expect("valid request");

        assert_eq!(conditions.rain, Precipitation::default());
        assert_eq!(sink.events(), vec!["unreadable:rain"]);
    }

    #[tokio::test]
    async fn validation_failure_emits_failed() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());

        let err = advisor
            .suggest_json(json!({ "temperature": 4 }))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("description is required"));
        assert_eq!(sink.events(), vec!["received", "failed"]);
    }

    #[tokio::test]
    async fn non_object_request_is_malformed() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());

        let err = advisor.suggest_json(json!(42)).await.unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("malformed request"));
        assert_eq!(sink.events(), vec!["failed"]);
    }

    #[tokio::test]
    async fn nan_temperature_is_a_generation_failure() {
        let sink = Arc::new(RecordingSink::default());
        let advisor = advisor_with(sink.clone());

        let err = advisor
            .suggest(RequestFields::new(f64::NAN, "clear").into())
            .await
            .unwrap_err();

        assert!(matches!(err, ClothingError::Generation { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to generate clothing suggestions: no temperature band covers NaN°C"
        );
        assert_eq!(sink.events(), vec!["received", "failed"]);
    }
}
