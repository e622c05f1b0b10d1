//! # Component Resolver
//!
//! Maps a catalog id to the unit that renders and computes it. The mapping
//! is plain data: purpose-built units are mapped directly, and a set of
//! aliases lets related catalog entries borrow an existing unit (a split
//! bill runs on the tip unit). Aliases can be added, replaced or removed
//! through configuration.
//!
//! Every catalog id resolves to exactly one of three outcomes, so listing
//! pages can show a disabled placeholder for calculators whose unit does
//! not exist yet instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::catalog::Catalog;
//! use calc_core::resolver::{ComponentResolver, Resolution};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let resolver = ComponentResolver::builtin(catalog).unwrap();
//!
//! assert!(matches!(resolver.resolve("bmi-calculator"), Resolution::Implemented { .. }));
//! assert!(matches!(resolver.resolve("world-clock"), Resolution::UnderDevelopment(_)));
//! assert!(matches!(resolver.resolve("no-such-thing"), Resolution::Unknown));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::catalog::{CalculatorDescriptor, Catalog};
use crate::errors::{CalcError, CalcResult};
use crate::units::{CalculatorUnit, UnitRegistry};

// ============================================================================
// Mapping
// ============================================================================

const DIRECT: &[(&str, &str)] = &[
    ("loan-calculator", "loan"),
    ("compound-interest", "compound-interest"),
    ("simple-interest", "simple-interest"),
    ("bmi-calculator", "bmi"),
    ("bmr-calculator", "bmr"),
    ("percentage-calculator", "percentage"),
    ("circle-area", "circle"),
    ("triangle-area", "triangle"),
    ("rectangle-area", "rectangle"),
    ("sphere-volume", "sphere"),
    ("cylinder-volume", "cylinder"),
    ("pythagorean-theorem", "pythagorean"),
    ("temperature-converter", "temperature"),
    ("length-converter", "length"),
    ("weight-converter", "weight"),
    ("age-calculator", "age"),
    ("tip-calculator", "tip"),
    ("dice-roller", "dice"),
    ("coin-flip", "coin"),
    ("random-number-generator", "random-number"),
];

/// Entries that reuse a unit built for a neighbouring calculator
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("mortgage-calculator", "loan"),
    ("loan-emi-calculator", "loan"),
    ("credit-card-payoff", "loan"),
    ("loan-to-value", "loan"),
    ("savings-goal", "tip"),
    ("split-bill-calculator", "tip"),
    ("markup-markdown", "percentage"),
];

/// Calculator id to unit key, split into direct entries and aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverMapping {
    direct: BTreeMap<String, String>,
    aliases: BTreeMap<String, String>,
}

impl ResolverMapping {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped mapping: every direct entry plus the default aliases
    pub fn builtin() -> Self {
        let own = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(id, key)| (id.to_string(), key.to_string()))
                .collect::<BTreeMap<_, _>>()
        };
        ResolverMapping {
            direct: own(DIRECT),
            aliases: own(DEFAULT_ALIASES),
        }
    }

    pub fn map(mut self, id: impl Into<String>, unit_key: impl Into<String>) -> Self {
        self.direct.insert(id.into(), unit_key.into());
        self
    }

    pub fn alias(mut self, id: impl Into<String>, unit_key: impl Into<String>) -> Self {
        self.aliases.insert(id.into(), unit_key.into());
        self
    }

    /// Apply configured aliases. An empty unit key removes the alias.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (id, key) in overrides {
            if key.trim().is_empty() {
                self.aliases.remove(id);
            } else {
                self.aliases.insert(id.clone(), key.trim().to_string());
            }
        }
        self
    }

    /// Direct entries win over aliases for the same id.
    pub fn unit_key(&self, id: &str) -> Option<&str> {
        self.direct
            .get(id)
            .or_else(|| self.aliases.get(id))
            .map(String::as_str)
    }

    pub fn is_alias(&self, id: &str) -> bool {
        !self.direct.contains_key(id) && self.aliases.contains_key(id)
    }

    /// Every (id, unit key) pair that takes effect
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let aliases = self
            .aliases
            .iter()
            .filter(move |(id, _)| !self.direct.contains_key(id.as_str()));
        self.direct
            .iter()
            .chain(aliases)
            .map(|(id, key)| (id.as_str(), key.as_str()))
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of looking up a calculator id
pub enum Resolution<'r> {
    Implemented {
        descriptor: &'r CalculatorDescriptor,
        unit: &'r dyn CalculatorUnit,
        /// The unit was borrowed from another calculator
        alias: bool,
    },
    /// Listed in the catalog but no unit exists yet
    UnderDevelopment(&'r CalculatorDescriptor),
    /// Not in the catalog
    Unknown,
}

impl Resolution<'_> {
    pub fn is_implemented(&self) -> bool {
        matches!(self, Resolution::Implemented { .. })
    }
}

impl fmt::Debug for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Implemented {
                descriptor,
                unit,
                alias,
            } => f
                .debug_struct("Implemented")
                .field("id", &descriptor.id)
                .field("unit", &unit.key())
                .field("alias", alias)
                .finish(),
            Resolution::UnderDevelopment(descriptor) => {
                f.debug_tuple("UnderDevelopment").field(&descriptor.id).finish()
            }
            Resolution::Unknown => f.write_str("Unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Active,
    Development,
    Unknown,
}

/// Implementation status of one calculator, as shown on listing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorStatus {
    pub working: bool,
    pub status: StatusKind,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub working: usize,
    pub development: usize,
}

// ============================================================================
// Resolver
// ============================================================================

pub struct ComponentResolver<'c> {
    catalog: &'c Catalog,
    units: UnitRegistry,
    mapping: ResolverMapping,
}

impl<'c> ComponentResolver<'c> {
    /// # Errors
    ///
    /// `UnknownUnit` if the mapping names a unit key the registry does not
    /// have. Mapped ids missing from the catalog are only logged.
    pub fn new(catalog: &'c Catalog, units: UnitRegistry, mapping: ResolverMapping) -> CalcResult<Self> {
        for (id, key) in mapping.iter() {
            if !units.contains(key) {
                return Err(CalcError::UnknownUnit {
                    calculator_id: id.to_string(),
                    unit_key: key.to_string(),
                });
            }
            if !catalog.contains(id) {
                tracing::warn!(id, unit = key, "mapping refers to an id missing from the catalog");
            }
        }
        Ok(ComponentResolver {
            catalog,
            units,
            mapping,
        })
    }

    /// Built-in units with the shipped mapping
    pub fn builtin(catalog: &'c Catalog) -> CalcResult<Self> {
        Self::new(catalog, UnitRegistry::builtin(), ResolverMapping::builtin())
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    pub fn mapping(&self) -> &ResolverMapping {
        &self.mapping
    }

    pub fn resolve(&self, id: &str) -> Resolution<'_> {
        let Some(descriptor) = self.catalog.get_by_id(id) else {
            return Resolution::Unknown;
        };
        match self.mapping.unit_key(id).and_then(|key| self.units.get(key)) {
            Some(unit) => Resolution::Implemented {
                descriptor,
                unit,
                alias: self.mapping.is_alias(id),
            },
            None => Resolution::UnderDevelopment(descriptor),
        }
    }

    /// Unit for a catalog id, if one is implemented
    pub fn unit_for(&self, id: &str) -> Option<&dyn CalculatorUnit> {
        match self.resolve(id) {
            Resolution::Implemented { unit, .. } => Some(unit),
            _ => None,
        }
    }

    pub fn status(&self, id: &str) -> CalculatorStatus {
        match self.resolve(id) {
            Resolution::Implemented { .. } => CalculatorStatus {
                working: true,
                status: StatusKind::Active,
                message: "Calculator is working",
            },
            Resolution::UnderDevelopment(_) => CalculatorStatus {
                working: false,
                status: StatusKind::Development,
                message: "Under development",
            },
            Resolution::Unknown => CalculatorStatus {
                working: false,
                status: StatusKind::Unknown,
                message: "Calculator not found",
            },
        }
    }

    /// Ids with a working unit, in catalog order
    pub fn working_calculators(&self) -> Vec<&'c str> {
        self.catalog
            .all()
            .iter()
            .filter(|c| self.resolve(c.id).is_implemented())
            .map(|c| c.id)
            .collect()
    }

    /// Counts over the whole catalog
    pub fn stats(&self) -> CatalogStats {
        let total = self.catalog.len();
        let working = self.working_calculators().len();
        CatalogStats {
            total,
            working,
            development: total - working,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ComponentResolver<'static> {
        ComponentResolver::builtin(Catalog::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_builtin_mapping_is_consistent() {
        let resolver = resolver();
        for (id, key) in resolver.mapping().iter() {
            assert!(resolver.catalog().contains(id), "mapped id {} missing from catalog", id);
            assert!(resolver.units().contains(key));
        }
    }

    #[test]
    fn test_three_outcomes() {
        let resolver = resolver();
        match resolver.resolve("loan-calculator") {
            Resolution::Implemented { descriptor, unit, alias } => {
                assert_eq!(descriptor.id, "loan-calculator");
                assert_eq!(unit.key(), "loan");
                assert!(!alias);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(resolver.resolve("gpa-calculator"), Resolution::UnderDevelopment(d) if d.id == "gpa-calculator"));
        assert!(matches!(resolver.resolve("GPA-CALCULATOR"), Resolution::Unknown));
    }

    #[test]
    fn test_alias_resolves_to_shared_unit() {
        let resolver = resolver();
        match resolver.resolve("split-bill-calculator") {
            Resolution::Implemented { unit, alias, .. } => {
                assert_eq!(unit.key(), "tip");
                assert!(alias);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("split-bill-calculator".to_string(), String::new());
        overrides.insert("roi-calculator".to_string(), "compound-interest".to_string());
        overrides.insert("bmi-calculator".to_string(), "circle".to_string());

        let mapping = ResolverMapping::builtin().with_overrides(&overrides);
        assert_eq!(mapping.unit_key("split-bill-calculator"), None);
        assert_eq!(mapping.unit_key("roi-calculator"), Some("compound-interest"));
        // direct entries are not replaced by aliases
        assert_eq!(mapping.unit_key("bmi-calculator"), Some("bmi"));

        let resolver =
            ComponentResolver::new(Catalog::builtin().unwrap(), UnitRegistry::builtin(), mapping).unwrap();
        assert!(matches!(resolver.resolve("split-bill-calculator"), Resolution::UnderDevelopment(_)));
        assert!(resolver.resolve("roi-calculator").is_implemented());
    }

    #[test]
    fn test_unknown_unit_key_rejected() {
        let mapping = ResolverMapping::empty().map("loan-calculator", "warp-drive");
        let err = ComponentResolver::new(Catalog::builtin().unwrap(), UnitRegistry::builtin(), mapping)
            .err()
            .unwrap();
        assert_eq!(err.error_code(), "UNKNOWN_UNIT");
    }

    #[test]
    fn test_mapped_id_missing_from_catalog_is_unknown() {
        let mapping = ResolverMapping::empty().map("retired-calculator", "loan");
        let resolver =
            ComponentResolver::new(Catalog::builtin().unwrap(), UnitRegistry::builtin(), mapping).unwrap();
        assert!(matches!(resolver.resolve("retired-calculator"), Resolution::Unknown));
    }

    #[test]
    fn test_status() {
        let resolver = resolver();
        let working = resolver.status("dice-roller");
        assert!(working.working);
        assert_eq!(working.status, StatusKind::Active);

        let pending = resolver.status("world-clock");
        assert_eq!(pending.message, "Under development");

        assert_eq!(resolver.status("nope").status, StatusKind::Unknown);
    }

    #[test]
    fn test_stats_cover_catalog() {
        let resolver = resolver();
        let stats = resolver.stats();
        assert_eq!(stats.total, resolver.catalog().len());
        assert_eq!(stats.working + stats.development, stats.total);
        assert_eq!(stats.working, DIRECT.len() + DEFAULT_ALIASES.len());
        assert_eq!(resolver.working_calculators()[0], "loan-calculator");
    }
}
