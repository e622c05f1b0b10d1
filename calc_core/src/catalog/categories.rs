//! Calculator categories
//!
//! Top-level groupings for the catalog. The [`CategoryId`] enum is the
//! strongly-typed key; [`CATEGORIES`] holds the display metadata, one
//! record per id, in navigation order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category identifier. Serializes as its URL slug (`"finance"`, `"fun"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Extra,
    Finance,
    Health,
    Math,
    Conversion,
    Datetime,
    Education,
    Tech,
    Design,
    Lifestyle,
    Fun,
}

impl CategoryId {
    /// Every category id, in navigation order
    pub const ALL: [CategoryId; 11] = [
        CategoryId::Extra,
        CategoryId::Finance,
        CategoryId::Health,
        CategoryId::Math,
        CategoryId::Conversion,
        CategoryId::Datetime,
        CategoryId::Education,
        CategoryId::Tech,
        CategoryId::Design,
        CategoryId::Lifestyle,
        CategoryId::Fun,
    ];

    /// URL slug used in routes and persisted data
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryId::Extra => "extra",
            CategoryId::Finance => "finance",
            CategoryId::Health => "health",
            CategoryId::Math => "math",
            CategoryId::Conversion => "conversion",
            CategoryId::Datetime => "datetime",
            CategoryId::Education => "education",
            CategoryId::Tech => "tech",
            CategoryId::Design => "design",
            CategoryId::Lifestyle => "lifestyle",
            CategoryId::Fun => "fun",
        }
    }

    /// Parse a slug. Matching is exact; `"Finance"` is not a category.
    pub fn from_slug(slug: &str) -> Option<CategoryId> {
        CategoryId::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::from_slug(s).ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Display metadata for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub id: CategoryId,
    /// Display name (e.g. "Financial Calculators")
    pub name: &'static str,
    pub description: &'static str,
    /// Emoji or glyph
    pub icon: &'static str,
    /// Colour token used by the page shell
    pub color: &'static str,
}

impl CategoryDescriptor {
    pub const fn new(
        id: CategoryId,
        name: &'static str,
        description: &'static str,
        icon: &'static str,
        color: &'static str,
    ) -> Self {
        Self { id, name, description, icon, color }
    }
}

/// All category descriptors in navigation order.
pub const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor::new(CategoryId::Extra, "Extra", "Every Day working tools", "📄", "teal"),
    CategoryDescriptor::new(
        CategoryId::Finance,
        "Financial Calculators",
        "Loan, mortgage, interest, and investment calculators",
        "📊",
        "emerald",
    ),
    CategoryDescriptor::new(
        CategoryId::Health,
        "Health & Fitness",
        "BMI, calorie, and health-related calculators",
        "🏋️‍♂️",
        "blue",
    ),
    CategoryDescriptor::new(
        CategoryId::Math,
        "Math & Geometry",
        "Mathematical calculations and geometric formulas",
        "📐",
        "purple",
    ),
    CategoryDescriptor::new(
        CategoryId::Conversion,
        "Unit Converters",
        "Convert between different units of measurement",
        "⚙️",
        "orange",
    ),
    CategoryDescriptor::new(
        CategoryId::Datetime,
        "Date & Time",
        "Date calculations and time zone tools",
        "📅",
        "red",
    ),
    CategoryDescriptor::new(
        CategoryId::Education,
        "Education & Learning",
        "Academic and educational calculators",
        "📚",
        "indigo",
    ),
    CategoryDescriptor::new(
        CategoryId::Tech,
        "Technical/IT",
        "Programming and technical conversion tools",
        "💻",
        "gray",
    ),
    CategoryDescriptor::new(
        CategoryId::Design,
        "Design & Graphics",
        "Design-related calculations and converters",
        "📏",
        "pink",
    ),
    CategoryDescriptor::new(
        CategoryId::Lifestyle,
        "Lifestyle & Practical",
        "Everyday practical calculators",
        "🛠",
        "teal",
    ),
    CategoryDescriptor::new(
        CategoryId::Fun,
        "Fun Tools",
        "Entertainment and random generators",
        "🎯",
        "yellow",
    ),
];
