use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of place a user's mood maps to. The display form doubles as the
/// free-text keyword sent to the place search provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Restaurant,
    GasStation,
    Library,
    Mall,
    Hospital,
    Water,
    Atm,
    Cafe,
    #[default]
    Searching,
}

/// Ordered keyword table. Checked top to bottom; the first rule with a
/// keyword contained in the input wins.
const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["food", "hungry", "eat"], Category::Restaurant),
    (&["fuel", "petrol", "gas"], Category::GasStation),
    (&["book", "library", "read", "study"], Category::Library),
    (&["shop", "dress", "mall", "complex"], Category::Mall),
    (
        &["hospital", "sick", "doctor", "medical"],
        Category::Hospital,
    ),
    (&["water", "lake", "beach", "river"], Category::Water),
    (&["atm", "bank", "money", "cash"], Category::Atm),
    (&["cafe", "coffee", "tea", "break"], Category::Cafe),
];

impl Category {
    /// Derive a category from free text. Case-insensitive substring match,
    /// falling back to `Searching`.
    pub fn derive(text: &str) -> Category {
        let text = text.to_lowercase();

        CATEGORY_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }

    /// Search keyword sent to the place provider
    pub fn keyword(&self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::GasStation => "gas station",
            Category::Library => "library",
            Category::Mall => "mall",
            Category::Hospital => "hospital",
            Category::Water => "water",
            Category::Atm => "atm",
            Category::Cafe => "cafe",
            Category::Searching => "searching",
        }
    }

    /// Marker icon drawn for places of this category
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Restaurant => "\u{1F374}",
            Category::GasStation => "\u{26FD}",
            Category::Library => "\u{1F4DA}",
            Category::Mall => "\u{1F6CD}\u{FE0F}",
            Category::Hospital => "\u{1F3E5}",
            Category::Water => "\u{1F4A7}",
            Category::Atm => "\u{1F3E7}",
            Category::Cafe => "\u{2615}",
            Category::Searching => "\u{1F4CD}",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" => Ok(Category::Restaurant),
            "gas station" | "gas_station" => Ok(Category::GasStation),
            "library" => Ok(Category::Library),
            "mall" => Ok(Category::Mall),
            "hospital" => Ok(Category::Hospital),
            "water" => Ok(Category::Water),
            "atm" => Ok(Category::Atm),
            "cafe" => Ok(Category::Cafe),
            "searching" => Ok(Category::Searching),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}
