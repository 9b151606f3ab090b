//! Weather and regional adjustments applied on top of the temperature band.
//!
//! `description` is expected to be lowercased by the caller.

use super::builder::RecommendationBuilder;
use crate::model::Precipitation;

/// Hourly rain amount above which waterproof pants are suggested.
const HEAVY_RAIN_AMOUNT: f64 = 5.0;
/// Hourly snow amount above which snow pants are suggested.
const HEAVY_SNOW_AMOUNT: f64 = 10.0;

pub(super) fn rain(
    builder: RecommendationBuilder,
    rain: Precipitation,
    description: &str,
) -> RecommendationBuilder {
    if !rain.present && !description.contains("rain") {
        return builder;
    }

    let builder = builder
        .with_layers(["Waterproof jacket or raincoat"])
        .with_accessories(["Umbrella"])
        .replace_footwear("Waterproof boots or shoes with good grip")
        .with_considerations(["Stay dry to maintain body temperature"]);

    if rain.amount.is_some_and(|amount| amount > HEAVY_RAIN_AMOUNT) {
        builder.with_considerations(["Heavy rain expected - consider waterproof pants"])
    } else {
        builder
    }
}

/// Runs after [`rain`], so its footwear wins when both apply.
pub(super) fn snow(
    builder: RecommendationBuilder,
    snow: Precipitation,
    description: &str,
) -> RecommendationBuilder {
    if !snow.present && !description.contains("snow") {
        return builder;
    }

    let builder = builder
        .with_layers(["Waterproof outer layer", "Insulating middle layer"])
        .with_accessories(["Waterproof gloves", "Snow goggles or sunglasses"])
        .replace_footwear("Insulated, waterproof boots with good traction")
        .with_considerations([
            "Layer for warmth and moisture management",
            "Be cautious of slippery surfaces",
        ]);

    if snow.amount.is_some_and(|amount| amount > HEAVY_SNOW_AMOUNT) {
        builder.with_considerations([
            "Heavy snow expected - consider snow pants and extra warm layers",
        ])
    } else {
        builder
    }
}

pub(super) fn wind(builder: RecommendationBuilder, description: &str) -> RecommendationBuilder {
    if !description.contains("wind") {
        return builder;
    }

    builder
        .with_layers(["Windproof outer layer"])
        .with_accessories(["Secure hat or hood"])
        .with_considerations(["Protect against wind chill"])
}

pub(super) fn sun(
    builder: RecommendationBuilder,
    description: &str,
    temperature_c: f64,
) -> RecommendationBuilder {
    if !description.contains("sun") && !description.contains("clear") {
        return builder;
    }

    let builder = builder.with_accessories(["Sunscreen", "Sunglasses"]);

    if temperature_c > 20.0 {
        builder.with_considerations(["UV protection recommended"])
    } else {
        builder
    }
}

/// Only the first matching region applies.
pub(super) fn region(builder: RecommendationBuilder, region: Option<&str>) -> RecommendationBuilder {
    let Some(region) = region else {
        return builder;
    };
    let region = region.to_lowercase();

    if region.contains("tropical") {
        builder.with_considerations(["High humidity - choose moisture-wicking fabrics"])
    } else if region.contains("arctic") || region.contains("polar") {
        builder.with_considerations(["Extreme cold protection essential", "Avoid cotton fabrics"])
    } else if region.contains("desert") {
        builder.with_considerations(["Protect from sun and sand", "Light colors to reflect heat"])
    } else {
        builder
    }
}
