//! Category tags used to group showcase models.
//!
//! The showcase ships a fixed set of seventeen tags. [`ModelCategory`] is the
//! strict enumeration stored on every record; [`CategoryFilter`] is what the
//! presentation layer selects in its category dropdown (either one tag or
//! `"all"`).

use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Selector string meaning "no category filter".
pub const ALL_SELECTOR: &str = "all";

/// One of the known showcase tags.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ModelCategory {
    Mobs,
    Guns,
    WandsStaffs,
    Sword,
    Hats,
    Backpack,
    Furniture,
    Miscellaneous,
    Vehicles,
    Prefix,
    Brooms,
    Decorations,
    Herbology,
    Food,
    Logos,
    Bundle,
    BundleGamer,
}

impl ModelCategory {
    /// Every tag, in the order the category menu lists them.
    pub const ALL: [ModelCategory; 17] = [
        ModelCategory::Mobs,
        ModelCategory::Guns,
        ModelCategory::WandsStaffs,
        ModelCategory::Sword,
        ModelCategory::Hats,
        ModelCategory::Backpack,
        ModelCategory::Furniture,
        ModelCategory::Miscellaneous,
        ModelCategory::Vehicles,
        ModelCategory::Prefix,
        ModelCategory::Brooms,
        ModelCategory::Decorations,
        ModelCategory::Herbology,
        ModelCategory::Food,
        ModelCategory::Logos,
        ModelCategory::Bundle,
        ModelCategory::BundleGamer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::Mobs => "mobs",
            ModelCategory::Guns => "guns",
            ModelCategory::WandsStaffs => "wands/staffs",
            ModelCategory::Sword => "sword",
            ModelCategory::Hats => "hats",
            ModelCategory::Backpack => "backpack",
            ModelCategory::Furniture => "furniture",
            ModelCategory::Miscellaneous => "miscellaneous",
            ModelCategory::Vehicles => "vehicles",
            ModelCategory::Prefix => "prefix",
            ModelCategory::Brooms => "brooms",
            ModelCategory::Decorations => "decorations",
            ModelCategory::Herbology => "herbology",
            ModelCategory::Food => "food",
            ModelCategory::Logos => "logos",
            ModelCategory::Bundle => "bundle",
            ModelCategory::BundleGamer => "bundle-gamer",
        }
    }

    /// Parses a tag, accepting the legacy `fourniture` / `vehicules` spellings.
    ///
    /// Matching is exact apart from surrounding whitespace; unknown tags yield
    /// `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let category = match value.trim() {
            "mobs" => ModelCategory::Mobs,
            "guns" => ModelCategory::Guns,
            "wands/staffs" => ModelCategory::WandsStaffs,
            "sword" => ModelCategory::Sword,
            "hats" => ModelCategory::Hats,
            "backpack" => ModelCategory::Backpack,
            "furniture" | "fourniture" => ModelCategory::Furniture,
            "miscellaneous" => ModelCategory::Miscellaneous,
            "vehicles" | "vehicules" => ModelCategory::Vehicles,
            "prefix" => ModelCategory::Prefix,
            "brooms" => ModelCategory::Brooms,
            "decorations" => ModelCategory::Decorations,
            "herbology" => ModelCategory::Herbology,
            "food" => ModelCategory::Food,
            "logos" => ModelCategory::Logos,
            "bundle" => ModelCategory::Bundle,
            "bundle-gamer" => ModelCategory::BundleGamer,
            _ => return None,
        };
        Some(category)
    }
}

impl Display for ModelCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ModelCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ModelCategory::parse(&value)
            .ok_or_else(|| D::Error::custom(format!("unknown category: {value}")))
    }
}

/// The category dropdown selection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ModelCategory),
}

impl CategoryFilter {
    /// Parses `"all"` or a known tag.
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim() == ALL_SELECTOR {
            return Some(CategoryFilter::All);
        }
        ModelCategory::parse(value).map(CategoryFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_SELECTOR,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Whether a record tagged `category` passes this filter.
    pub fn matches(&self, category: ModelCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl From<ModelCategory> for CategoryFilter {
    fn from(category: ModelCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        CategoryFilter::parse(&value)
            .ok_or_else(|| D::Error::custom(format!("unknown category selector: {value}")))
    }
}
