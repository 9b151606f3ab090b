//! Recommendation generator: temperature banding, weather overlays,
//! regional overlay, then deduplication.

use crate::{
    error::GenerateError,
    model::{Conditions, Recommendation},
};

pub mod band;
pub mod builder;
mod overlay;

pub use band::TemperatureBand;
pub use builder::RecommendationBuilder;

pub fn generate(conditions: &Conditions) -> Result<Recommendation, GenerateError> {
    let band = TemperatureBand::for_celsius(conditions.temperature_c)
        .ok_or(GenerateError::NoTemperatureBand(conditions.temperature_c))?;
    let description = conditions.description.to_lowercase();

    let builder = band.apply(RecommendationBuilder::new());
    let builder = overlay::rain(builder, conditions.rain, &description);
    let builder = overlay::snow(builder, conditions.snow, &description);
    let builder = overlay::wind(builder, &description);
    let builder = overlay::sun(builder, &description, conditions.temperature_c);
    let builder = overlay::region(builder, conditions.region.as_deref());

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::Precipitation, season::Season};

    fn conditions(temperature_c: f64, description: &str) -> Conditions {
        Conditions::new(temperature_c, description, Season::Autumn)
    }

    #[test]
    fn overcast_mild_day_is_band_only() {
        let rec = generate(&conditions(22.0, "Overcast clouds")).expect("recommendation");

        assert_eq!(
            rec.layers,
            vec!["T-shirt or short-sleeve shirt", "Light cardigan or jacket (for evening)"]
        );
        assert!(rec.accessories.is_empty());
        assert_eq!(rec.footwear, vec!["Comfortable shoes or sneakers"]);
    }

    #[test]
    fn description_matching_ignores_case() {
        let rec = generate(&conditions(15.0, "Heavy RAIN and Wind")).expect("recommendation");

        assert_eq!(rec.footwear, vec!["Waterproof boots or shoes with good grip"]);
        assert!(rec.layers.contains(&"Windproof outer layer".to_string()));
    }

    #[test]
    fn hot_sunny_day_has_no_duplicate_accessories() {
        let rec = generate(&conditions(35.0, "sunny")).expect("recommendation");

        assert_eq!(rec.accessories, vec!["Wide-brimmed hat", "Sunglasses", "Sunscreen"]);
        assert!(rec.special_considerations.contains(&"UV protection recommended".to_string()));
    }

    #[test]
    fn rain_and_snow_together_keep_snow_boots() {
        let mut input = conditions(1.0, "sleet");
        input.rain = Precipitation::flagged();
        input.snow = Precipitation::flagged();

        let rec = generate(&input).expect("recommendation");
        assert_eq!(rec.footwear, vec!["Insulated, waterproof boots with good traction"]);
        assert!(rec.accessories.contains(&"Umbrella".to_string()));
    }

    #[test]
    fn season_does_not_change_the_outcome() {
        let autumn = generate(&conditions(8.0, "drizzle")).expect("recommendation");
        let mut summer_input = conditions(8.0, "drizzle");
        summer_input.season = Season::Summer;

        assert_eq!(generate(&summer_input).expect("recommendation"), autumn);
    }

    #[test]
    fn generating_twice_gives_identical_output() {
        let mut input = conditions(-2.0, "snow showers, windy");
        input.region = Some("Arctic".into());

        assert_eq!(generate(&input), generate(&input));
    }

    #[test]
    fn nan_temperature_fails() {
        let err = generate(&conditions(f64::NAN, "clear")).unwrap_err();
        assert!(matches!(err, GenerateError::NoTemperatureBand(t) if t.is_nan()));
    }
}
