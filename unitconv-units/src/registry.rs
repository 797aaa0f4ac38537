//! Unit registry - immutable alias index over the unit catalog

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::catalog::builtin_units;
use crate::{ConvertError, Family, RegistryError, UnitDefinition};

/// Global unit registry, built on first use
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::builtin);

/// Words that may precede a temperature unit ("20 degrees F")
const DEGREE_WORDS: [&str; 3] = ["degrees", "degree", "deg"];

/// Registry of all known units
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: Vec<UnitDefinition>,
    /// normalized alias -> position in `units`
    aliases: HashMap<String, usize>,
}

impl UnitRegistry {
    /// Build a registry, checking that aliases are pairwise disjoint, keys
    /// are unique and every default target exists in the unit's family
    pub fn new(units: Vec<UnitDefinition>) -> Result<Self, RegistryError> {
        let mut keys: HashMap<&str, usize> = HashMap::new();
        for (position, unit) in units.iter().enumerate() {
            if keys.insert(unit.key.as_str(), position).is_some() {
                return Err(RegistryError::DuplicateKey(unit.key.clone()));
            }
            if unit.conversion.scale().is_zero() {
                return Err(RegistryError::ZeroScale(unit.key.clone()));
            }
        }

        for unit in &units {
            let target = keys
                .get(unit.default_target.as_str())
                .map(|&position| &units[position])
                .ok_or_else(|| RegistryError::UnknownDefaultTarget {
                    unit: unit.key.clone(),
                    target: unit.default_target.clone(),
                })?;
            if target.family != unit.family {
                return Err(RegistryError::CrossFamilyDefault {
                    unit: unit.key.clone(),
                    target: target.key.clone(),
                    family: unit.family,
                });
            }
        }

        let mut aliases: HashMap<String, usize> = HashMap::new();
        for (position, unit) in units.iter().enumerate() {
            for form in unit.recognized_forms() {
                let alias = normalize(&form);
                match aliases.get(&alias).copied() {
                    Some(other) if other != position => {
                        return Err(RegistryError::AliasCollision {
                            alias,
                            first: units[other].key.clone(),
                            second: unit.key.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        aliases.insert(alias, position);
                    }
                }
            }
        }

        Ok(UnitRegistry { units, aliases })
    }

    /// The built-in catalog
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in catalog breaks a registry invariant.
    pub fn builtin() -> Self {
        match Self::new(builtin_units()) {
            Ok(registry) => registry,
            Err(e) => panic!("built-in unit catalog is inconsistent: {}", e),
        }
    }

    /// The process-wide built-in registry
    pub fn global() -> &'static UnitRegistry {
        &UNITS
    }

    /// Get a unit by its canonical key
    pub fn get(&self, key: &str) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.key == key)
    }

    /// Resolve a free-form unit token
    ///
    /// Matching is case-insensitive and whitespace-tolerant, accepts a
    /// trailing plural "s" ("flozs") and a leading "degrees"/"deg" word in
    /// front of a temperature unit.
    pub fn find_unit(&self, token: &str) -> Result<&UnitDefinition, ConvertError> {
        let normalized = normalize(token);

        if let Some(unit) = self.lookup(&normalized) {
            return Ok(unit);
        }

        if let Some((first, rest)) = normalized.split_once(' ') {
            if DEGREE_WORDS.contains(&first) {
                if let Some(unit) = self.lookup(rest) {
                    if unit.family == Family::Temperature {
                        return Ok(unit);
                    }
                }
            }
        }

        Err(ConvertError::UnitNotRecognized(token.trim().to_string()))
    }

    /// Exact alias match, then without a trailing plural "s"
    ///
    /// One-letter symbols never take the plural: "ms" is not meters.
    fn lookup(&self, alias: &str) -> Option<&UnitDefinition> {
        if let Some(&position) = self.aliases.get(alias) {
            return Some(&self.units[position]);
        }
        alias
            .strip_suffix('s')
            .filter(|singular| singular.chars().count() > 1)
            .and_then(|singular| self.aliases.get(singular))
            .map(|&position| &self.units[position])
    }

    /// The unit a query converts to when it names no target
    pub fn default_target_for<'a>(&'a self, unit: &'a UnitDefinition) -> &'a UnitDefinition {
        // construction guarantees the target exists
        self.get(&unit.default_target).unwrap_or(unit)
    }

    /// Get all units in a family
    pub fn by_family(&self, family: Family) -> Vec<&UnitDefinition> {
        self.units.iter()
            .filter(|u| u.family == family)
            .collect()
    }

    /// All units, in catalog order
    pub fn units(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.units.iter()
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Lowercase, trim, collapse inner whitespace, and glue a degree sign to
/// its letter ("° C" -> "°c")
pub(crate) fn normalize(token: &str) -> String {
    token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace("° ", "°")
}
