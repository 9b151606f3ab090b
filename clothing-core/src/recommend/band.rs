use super::builder::RecommendationBuilder;

/// Temperature range selecting the base outfit. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBand {
    /// At or below 0°C.
    Freezing,
    /// Up to 10°C.
    Cold,
    /// Up to 20°C.
    Cool,
    /// Up to 25°C.
    Mild,
    /// Up to 30°C.
    Warm,
    /// Above 30°C.
    Hot,
}

impl TemperatureBand {
    pub const fn all() -> &'static [TemperatureBand] {
        &[
            TemperatureBand::Freezing,
            TemperatureBand::Cold,
            TemperatureBand::Cool,
            TemperatureBand::Mild,
            TemperatureBand::Warm,
            TemperatureBand::Hot,
        ]
    }

    /// Returns `None` only for NaN; every real temperature has a band.
    pub fn for_celsius(temperature_c: f64) -> Option<Self> {
        if temperature_c.is_nan() {
            return None;
        }

        TemperatureBand::all()
            .iter()
            .copied()
            .find(|band| band.upper_bound().is_none_or(|bound| temperature_c <= bound))
    }

    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            TemperatureBand::Freezing => Some(0.0),
            TemperatureBand::Cold => Some(10.0),
            TemperatureBand::Cool => Some(20.0),
            TemperatureBand::Mild => Some(25.0),
            TemperatureBand::Warm => Some(30.0),
            TemperatureBand::Hot => None,
        }
    }

    pub fn layers(&self) -> &'static [&'static str] {
        match self {
            TemperatureBand::Freezing => &[
                "Heavy winter coat or down jacket",
                "Thermal underwear",
                "Wool sweater",
                "Insulated pants",
            ],
            TemperatureBand::Cold => {
                &["Warm jacket or coat", "Long-sleeve shirt", "Sweater or fleece"]
            }
            TemperatureBand::Cool => {
                &["Light jacket or cardigan", "Long-sleeve shirt or light sweater"]
            }
            TemperatureBand::Mild => &[
                "T-shirt or short-sleeve shirt",
                "Light cardigan or jacket (for evening)",
            ],
            TemperatureBand::Warm => &[
                "Light, breathable clothing",
                "T-shirt or tank top",
                "Light pants or shorts",
            ],
            TemperatureBand::Hot => {
                &["Minimal, light-colored clothing", "Loose-fitting shirt", "Shorts"]
            }
        }
    }

    pub fn accessories(&self) -> &'static [&'static str] {
        match self {
            TemperatureBand::Freezing => {
                &["Winter hat", "Insulated gloves", "Scarf", "Face mask"]
            }
            TemperatureBand::Cold => &["Warm hat", "Gloves", "Light scarf"],
            TemperatureBand::Cool => &["Light scarf (optional)"],
            TemperatureBand::Mild => &[],
            TemperatureBand::Warm => &["Sun hat", "Sunglasses"],
            TemperatureBand::Hot => &["Wide-brimmed hat", "Sunglasses", "Sunscreen"],
        }
    }

    pub fn footwear(&self) -> &'static str {
        match self {
            TemperatureBand::Freezing => "Insulated winter boots with good traction",
            TemperatureBand::Cold => "Closed-toe shoes or boots",
            TemperatureBand::Cool => "Comfortable walking shoes",
            TemperatureBand::Mild => "Comfortable shoes or sneakers",
            TemperatureBand::Warm => "Breathable shoes or sandals",
            TemperatureBand::Hot => "Breathable sandals or light shoes",
        }
    }

    pub fn considerations(&self) -> &'static [&'static str] {
        match self {
            TemperatureBand::Freezing => &[
                "Layer clothing to trap warm air",
                "Cover exposed skin to prevent frostbite",
            ],
            TemperatureBand::Cold => &["Layer clothing for temperature regulation"],
            TemperatureBand::Cool => &["Perfect temperature for light layers"],
            TemperatureBand::Mild => &["Comfortable temperature, minimal layering needed"],
            TemperatureBand::Warm => &["Stay hydrated", "Seek shade during peak sun hours"],
            TemperatureBand::Hot => &[
                "Stay in air conditioning when possible",
                "Drink plenty of water",
                "Avoid prolonged sun exposure",
            ],
        }
    }

    /// Seed a builder with this band's base outfit.
    pub fn apply(self, builder: RecommendationBuilder) -> RecommendationBuilder {
        builder
            .with_layers(self.layers().iter().copied())
            .with_accessories(self.accessories().iter().copied())
            .with_footwear(self.footwear())
            .with_considerations(self.considerations().iter().copied())
    }
}
