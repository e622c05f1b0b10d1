//! # Calculator Catalog
//!
//! The read-only registry of every calculator on the site, plus the
//! lookup, category, featured and search queries the page shell needs.
//!
//! ## Architecture
//!
//! - Per-category tables in [`data`] are authoritative
//! - [`Catalog::from_tables`] unions them in a fixed order and validates
//!   the result once (unique ids, known categories, tables agree with the
//!   declared category)
//! - After construction the catalog never changes; queries are pure
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::catalog::{Catalog, CategoryId};
//!
//! let catalog = Catalog::builtin().unwrap();
//!
//! let bmi = catalog.get_by_id("bmi-calculator").unwrap();
//! assert_eq!(bmi.category, CategoryId::Health);
//!
//! // Empty queries return nothing, not the whole catalog
//! assert!(catalog.search(Some("")).is_empty());
//! assert!(!catalog.search(Some("interest")).is_empty());
//! ```

pub mod categories;
pub mod data;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

pub use categories::{CategoryDescriptor, CategoryId, CATEGORIES};

// ============================================================================
// Calculator Descriptor
// ============================================================================

/// Metadata for one calculator. Immutable once the catalog is built.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "loan-calculator",
///   "name": "Loan Calculator",
///   "description": "Calculate monthly payments, total interest, and loan details",
///   "category": "finance",
///   "keywords": ["loan", "payment", "interest", "finance", "monthly"],
///   "icon": "💰",
///   "featured": true,
///   "requires_api": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorDescriptor {
    /// URL slug, unique across the catalog
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: CategoryId,
    /// Search terms (order irrelevant)
    pub keywords: &'static [&'static str],
    pub icon: &'static str,
    /// Promoted on the homepage
    pub featured: bool,
    /// Depends on a live network call (exchange rates, IP lookup)
    pub requires_api: bool,
}

impl CalculatorDescriptor {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: CategoryId,
        keywords: &'static [&'static str],
        icon: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            keywords,
            icon,
            featured: false,
            requires_api: false,
        }
    }

    /// Mark as featured on the homepage
    pub const fn featured(self) -> Self {
        Self { featured: true, ..self }
    }

    /// Mark as depending on an external API
    pub const fn requires_api(self) -> Self {
        Self { requires_api: true, ..self }
    }

    /// Case-insensitive substring match against name, description and
    /// keywords. `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The validated, ordered calculator catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<CategoryDescriptor>,
    calculators: Vec<CalculatorDescriptor>,
    index: HashMap<&'static str, usize>,
}

static BUILTIN: Lazy<CalcResult<Catalog>> =
    Lazy::new(|| Catalog::from_tables(CATEGORIES, data::TABLES));

impl Catalog {
    /// Build a catalog from category descriptors and an ordered list of
    /// calculators.
    ///
    /// # Errors
    ///
    /// * `DuplicateId` - two categories or two calculators share an id
    /// * `DanglingCategory` - a calculator's category has no descriptor
    pub fn new(
        categories: Vec<CategoryDescriptor>,
        calculators: Vec<CalculatorDescriptor>,
    ) -> CalcResult<Self> {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            if !seen_categories.insert(category.id) {
                return Err(CalcError::duplicate_id("category", category.id.slug()));
            }
        }

        let mut index = HashMap::with_capacity(calculators.len());
        for (position, calc) in calculators.iter().enumerate() {
            if !seen_categories.contains(&calc.category) {
                return Err(CalcError::DanglingCategory {
                    calculator_id: calc.id.to_string(),
                    category: calc.category.slug().to_string(),
                });
            }
            if index.insert(calc.id, position).is_some() {
                return Err(CalcError::duplicate_id("calculator", calc.id));
            }
        }

        tracing::debug!(
            calculators = calculators.len(),
            categories = categories.len(),
            "catalog built"
        );

        Ok(Catalog {
            categories,
            calculators,
            index,
        })
    }

    /// Union per-category tables, in the order given, into one catalog.
    ///
    /// # Errors
    ///
    /// Everything [`Catalog::new`] rejects, plus `CategoryMismatch` when a
    /// table holds a calculator declared for another category.
    pub fn from_tables(
        categories: &[CategoryDescriptor],
        tables: &[(CategoryId, &[CalculatorDescriptor])],
    ) -> CalcResult<Self> {
        let mut calculators = Vec::new();
        for (listed, table) in tables {
            for calc in table.iter() {
                if calc.category != *listed {
                    return Err(CalcError::CategoryMismatch {
                        calculator_id: calc.id.to_string(),
                        declared: calc.category.slug().to_string(),
                        listed: listed.slug().to_string(),
                    });
                }
                calculators.push(*calc);
            }
        }
        Catalog::new(categories.to_vec(), calculators)
    }

    /// The process-wide catalog built from the static tables.
    ///
    /// Built on first use. An integrity error in the tables is returned
    /// to every caller so the host can refuse to start.
    pub fn builtin() -> CalcResult<&'static Catalog> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Every calculator in catalog order
    pub fn all(&self) -> &[CalculatorDescriptor] {
        &self.calculators
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    /// Category descriptors in navigation order
    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by its slug; unknown slugs yield `None`.
    pub fn category_by_slug(&self, slug: &str) -> Option<&CategoryDescriptor> {
        CategoryId::from_slug(slug).and_then(|id| self.category(id))
    }

    /// All calculators in a category, in catalog order.
    pub fn by_category(&self, category: CategoryId) -> Vec<&CalculatorDescriptor> {
        self.calculators
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Like [`Catalog::by_category`] but keyed by slug. An unknown slug is
    /// not an error; it simply has no calculators.
    pub fn by_category_slug(&self, slug: &str) -> Vec<&CalculatorDescriptor> {
        match CategoryId::from_slug(slug) {
            Some(id) => self.by_category(id),
            None => Vec::new(),
        }
    }

    /// Calculators promoted on the homepage, in catalog order.
    pub fn featured(&self) -> Vec<&CalculatorDescriptor> {
        self.calculators.iter().filter(|c| c.featured).collect()
    }

    /// Case-insensitive substring search over name, description and
    /// keywords.
    ///
    /// An absent or empty query returns an empty list rather than the full
    /// catalog; listing pages call [`Catalog::all`] for that.
    pub fn search(&self, query: Option<&str>) -> Vec<&CalculatorDescriptor> {
        let needle = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return Vec::new(),
        };
        self.calculators
            .iter()
            .filter(|c| c.matches(&needle))
            .collect()
    }

    /// Exact, case-sensitive lookup by id.
    pub fn get_by_id(&self, id: &str) -> Option<&CalculatorDescriptor> {
        self.index.get(id).map(|&i| &self.calculators[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of calculators per category, in navigation order.
    /// Categories with no calculators are included with a zero count.
    pub fn category_counts(&self) -> Vec<(CategoryId, usize)> {
        self.categories
            .iter()
            .map(|cat| {
                let count = self
                    .calculators
                    .iter()
                    .filter(|c| c.category == cat.id)
                    .count();
                (cat.id, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = catalog();
        assert!(catalog.len() >= 100);
        assert_eq!(catalog.categories().len(), CategoryId::ALL.len());
    }

    #[test]
    fn test_get_by_id_returns_every_descriptor() {
        let catalog = catalog();
        for calc in catalog.all() {
            assert_eq!(catalog.get_by_id(calc.id), Some(calc));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = catalog();
        let ids: HashSet<_> = catalog.all().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_every_referenced_category_exists() {
        let catalog = catalog();
        for calc in catalog.all() {
            assert!(
                catalog.category(calc.category).is_some(),
                "{} has no category descriptor",
                calc.id
            );
        }
    }

    #[test]
    fn test_get_by_id_is_exact_and_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.get_by_id("bmi-calculator").is_some());
        assert!(catalog.get_by_id("BMI-Calculator").is_none());
        assert!(catalog.get_by_id("bmi").is_none());
        assert!(catalog.get_by_id("").is_none());
    }

    #[test]
    fn test_search_empty_query_returns_nothing() {
        let catalog = catalog();
        assert!(catalog.search(None).is_empty());
        assert!(catalog.search(Some("")).is_empty());
    }

    #[test]
    fn test_search_results_match_query() {
        let catalog = catalog();
        for query in ["Interest", "bmi", "CONVERT", "date", "zzzz-nothing"] {
            let needle = query.to_lowercase();
            for calc in catalog.search(Some(query)) {
                assert!(catalog.contains(calc.id));
                let hit = calc.name.to_lowercase().contains(&needle)
                    || calc.description.to_lowercase().contains(&needle)
                    || calc.keywords.iter().any(|k| k.to_lowercase().contains(&needle));
                assert!(hit, "{} does not match '{}'", calc.id, query);
            }
        }
        assert!(catalog.search(Some("zzzz-nothing")).is_empty());
    }

    #[test]
    fn test_search_matches_keywords_only() {
        let catalog = catalog();
        // "forex" is only a keyword of the currency converter
        let hits = catalog.search(Some("FOREX"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "currency-converter");
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let catalog = catalog();
        let hits = catalog.search(Some("interest"));
        let positions: Vec<_> = hits
            .iter()
            .map(|h| catalog.all().iter().position(|c| c.id == h.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_featured_is_exactly_flagged_in_order() {
        let catalog = catalog();
        let expected: Vec<_> = catalog.all().iter().filter(|c| c.featured).collect();
        assert_eq!(catalog.featured(), expected);
        assert!(catalog.featured().iter().all(|c| c.featured));
        assert_eq!(catalog.featured()[0].id, "loan-calculator");
    }

    #[test]
    fn test_by_category() {
        let catalog = catalog();
        let finance = catalog.by_category(CategoryId::Finance);
        assert!(!finance.is_empty());
        assert!(finance.iter().all(|c| c.category == CategoryId::Finance));
        assert_eq!(finance[0].id, "loan-calculator");
        assert_eq!(catalog.by_category_slug("finance"), finance);
    }

    #[test]
    fn test_unknown_category_slug_is_empty() {
        let catalog = catalog();
        assert!(catalog.by_category_slug("astrology").is_empty());
        assert!(catalog.by_category_slug("Finance").is_empty());
        assert!(catalog.category_by_slug("astrology").is_none());
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let catalog = catalog();
        let total: usize = catalog.category_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_duplicate_calculator_id_rejected() {
        let calc = data::FINANCE[0];
        let err = Catalog::new(CATEGORIES.to_vec(), vec![calc, calc]).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_ID");
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut categories = CATEGORIES.to_vec();
        categories.push(CategoryDescriptor::new(
            CategoryId::Education,
            "road maps",
            "Education for smart people",
            "X",
            "Black",
        ));
        let err = Catalog::new(categories, vec![]).unwrap_err();
        assert_eq!(err, CalcError::duplicate_id("category", "education"));
    }

    #[test]
    fn test_dangling_category_rejected() {
        let categories: Vec<_> = CATEGORIES
            .iter()
            .copied()
            .filter(|c| c.id != CategoryId::Fun)
            .collect();
        let err = Catalog::new(categories, data::FUN.to_vec()).unwrap_err();
        assert_eq!(err.error_code(), "DANGLING_CATEGORY");
    }

    #[test]
    fn test_misfiled_table_rejected() {
        let tables: &[(CategoryId, &[CalculatorDescriptor])] =
            &[(CategoryId::Health, data::FINANCE)];
        let err = Catalog::from_tables(CATEGORIES, tables).unwrap_err();
        assert_eq!(err.error_code(), "CATEGORY_MISMATCH");
    }

    #[test]
    fn test_descriptor_serialization() {
        let catalog = catalog();
        let json = serde_json::to_value(catalog.get_by_id("currency-converter").unwrap()).unwrap();
        assert_eq!(json["category"], "finance");
        assert_eq!(json["requires_api"], true);
        assert_eq!(json["featured"], true);
    }
}
