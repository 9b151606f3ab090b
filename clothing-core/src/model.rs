use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};
use std::{convert::Infallible, fmt, str::FromStr};

use crate::{error::PrecipitationError, season::Season};

/// A clothing request as it arrives from upstream.
///
/// Transports may wrap the fields under a `payload` key; one level of
/// wrapping is removed by [`Request::into_fields`]. A falsy `payload`
/// (`null`, `false`, `0`, `""`) is ignored, any other value must hold the
/// request fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Request {
    Wrapped { payload: RequestFields },
    Flat(RequestFields),
}

impl Request {
    pub fn fields(&self) -> &RequestFields {
        match self {
            Request::Wrapped { payload } => payload,
            Request::Flat(fields) => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut RequestFields {
        match self {
            Request::Wrapped { payload } => payload,
            Request::Flat(fields) => fields,
        }
    }

    pub fn into_fields(self) -> RequestFields {
        match self {
            Request::Wrapped { payload } => payload,
            Request::Flat(fields) => fields,
        }
    }
}

impl<'de> Deserialize<'de> for Request {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;

        match object.remove("payload").filter(is_truthy) {
            Some(payload) => RequestFields::deserialize(payload)
                .map(|payload| Request::Wrapped { payload })
                .map_err(|err| D::Error::custom(format!("payload: {err}"))),
            None => RequestFields::deserialize(Value::Object(object))
                .map(Request::Flat)
                .map_err(D::Error::custom),
        }
    }
}

impl From<RequestFields> for Request {
    fn from(fields: RequestFields) -> Self {
        Request::Flat(fields)
    }
}

/// Unvalidated request fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestFields {
    /// Degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureInput>,

    /// Free-form weather description, e.g. "light rain".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<PrecipitationInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<PrecipitationInput>,

    /// Overrides the clock-derived season when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl RequestFields {
    pub fn new(temperature_c: f64, description: impl Into<String>) -> Self {
        Self {
            temperature: Some(TemperatureInput::Numeric(temperature_c)),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_rain(mut self, rain: PrecipitationInput) -> Self {
        self.rain = Some(rain);
        self
    }

    pub fn with_snow(mut self, snow: PrecipitationInput) -> Self {
        self.snow = Some(snow);
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Temperature as received; anything that is not a JSON number is kept
/// so validation can reject it with a useful message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemperatureInput {
    Numeric(f64),
    Invalid(Value),
}

impl TemperatureInput {
    pub fn as_celsius(&self) -> Option<f64> {
        match self {
            TemperatureInput::Numeric(value) => Some(*value),
            TemperatureInput::Invalid(_) => None,
        }
    }
}

/// Rain or snow input: a plain flag, or encoded JSON such as `{"3h": 6.5}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrecipitationInput {
    Flag(bool),
    Encoded(String),
    Other(Value),
}

impl PrecipitationInput {
    /// Whether the input switches the overlay on by itself.
    pub fn is_truthy(&self) -> bool {
        match self {
            PrecipitationInput::Flag(flag) => *flag,
            PrecipitationInput::Encoded(text) => !text.is_empty(),
            PrecipitationInput::Other(value) => is_truthy(value),
        }
    }

    /// Hourly amount carried by encoded text; `None` for non-text inputs.
    pub fn amount(&self) -> Option<Result<f64, PrecipitationError>> {
        match self {
            PrecipitationInput::Encoded(text) => Some(read_amount(text)),
            _ => None,
        }
    }
}

/// `true`/`false` become flags, everything else is treated as encoded data.
impl FromStr for PrecipitationInput {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let input = match value.trim().to_lowercase().as_str() {
            "true" => PrecipitationInput::Flag(true),
            "false" => PrecipitationInput::Flag(false),
            _ => PrecipitationInput::Encoded(value.to_string()),
        };
        Ok(input)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads `"3h"`, falling back to `"1h"`, from an encoded precipitation object.
/// Numeric strings count as numbers. Zero or non-numeric entries fall
/// through; a non-object yields `0.0`.
fn read_amount(text: &str) -> Result<f64, PrecipitationError> {
    let value: Value = serde_json::from_str(text)?;

    match value {
        Value::Null => Err(PrecipitationError::Null),
        Value::Object(map) => Ok(["3h", "1h"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(as_amount))
            .find(|amount| *amount != 0.0)
            .unwrap_or(0.0)),
        _ => Ok(0.0),
    }
}

fn as_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecipitationKind {
    Rain,
    Snow,
}

impl PrecipitationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrecipitationKind::Rain => "rain",
            PrecipitationKind::Snow => "snow",
        }
    }
}

impl fmt::Display for PrecipitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized rain or snow input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Precipitation {
    pub present: bool,
    pub amount: Option<f64>,
}

impl Precipitation {
    pub fn flagged() -> Self {
        Self { present: true, amount: None }
    }

    pub fn with_amount(self, amount: f64) -> Self {
        Self { amount: Some(amount), ..self }
    }
}

/// Validated input for the recommendation generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub temperature_c: f64,
    pub description: String,
    pub rain: Precipitation,
    pub snow: Precipitation,
    pub season: Season,
    pub region: Option<String>,
}

impl Conditions {
    pub fn new(temperature_c: f64, description: impl Into<String>, season: Season) -> Self {
        Self {
            temperature_c,
            description: description.into(),
            rain: Precipitation::default(),
            snow: Precipitation::default(),
            season,
            region: None,
        }
    }
}

/// Clothing recommendation returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub layers: Vec<String>,
    pub accessories: Vec<String>,
    pub footwear: Vec<String>,
    pub special_considerations: Vec<String>,
}
