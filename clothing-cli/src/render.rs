use clothing_core::Recommendation;
use std::fmt;

/// Plain-text rendering, one section per non-empty list.
pub struct TextView<'a>(pub &'a Recommendation);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rec = self.0;
        let sections = [
            ("Layers", &rec.layers),
            ("Accessories", &rec.accessories),
            ("Footwear", &rec.footwear),
            ("Special considerations", &rec.special_considerations),
        ];

        let mut first = true;
        for (title, items) in sections.into_iter().filter(|(_, items)| !items.is_empty()) {
            if !first {
                writeln!(f)?;
            }
            first = false;

            writeln!(f, "{title}:")?;
            for item in items {
                writeln!(f, "  - {item}")?;
            }
        }

        Ok(())
    }
}
