//! Unit definitions with conversion rules and display notation

use serde::{Serialize, Deserialize};
use unitconv_core::Number;
use crate::{ConvertError, Family};

/// How a value in some unit maps onto its family's base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConversionRule {
    /// `base = value * factor`
    Linear { factor: Number },
    /// `base = value * scale + offset` (temperature)
    Affine { scale: Number, offset: Number },
}

impl ConversionRule {
    pub fn linear(factor: Number) -> Self {
        ConversionRule::Linear { factor }
    }

    pub fn affine(scale: Number, offset: Number) -> Self {
        ConversionRule::Affine { scale, offset }
    }

    /// Multiplicative part of the rule
    pub fn scale(&self) -> &Number {
        match self {
            ConversionRule::Linear { factor } => factor,
            ConversionRule::Affine { scale, .. } => scale,
        }
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: &Number) -> Number {
        match self {
            ConversionRule::Linear { factor } => value.mul(factor),
            ConversionRule::Affine { scale, offset } => value.mul(scale).add(offset),
        }
    }

    /// Convert a base-unit value back to this unit
    pub fn from_base(&self, base: &Number) -> Number {
        let shifted = match self {
            ConversionRule::Linear { .. } => base.clone(),
            ConversionRule::Affine { offset, .. } => base.sub(offset),
        };
        // the registry rejects zero scales
        shifted.checked_div(self.scale()).unwrap_or_default()
    }
}

/// How a quantity in this unit is written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// "3 meters", "1 meter"
    Named { singular: String, plural: String },
    /// "300K", "80.33°F"; never pluralized
    Symbol(String),
}

/// A unit known to the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Stable identifier (e.g., "meter", "cubic_centimeter")
    pub key: String,
    /// The family the unit converts within
    pub family: Family,
    /// Display form
    pub notation: Notation,
    /// Extra recognized spellings, abbreviations and symbols
    pub aliases: Vec<String>,
    /// Rule to reach the family's base unit
    pub conversion: ConversionRule,
    /// Key of the unit used when a query gives no target
    pub default_target: String,
}

impl UnitDefinition {
    /// Create a unit written with a singular/plural name
    pub fn named(
        key: &str,
        family: Family,
        singular: &str,
        plural: &str,
        conversion: ConversionRule,
    ) -> Self {
        UnitDefinition {
            key: key.to_string(),
            family,
            notation: Notation::Named {
                singular: singular.to_string(),
                plural: plural.to_string(),
            },
            aliases: Vec::new(),
            conversion,
            default_target: String::new(),
        }
    }

    /// Create a unit written as a symbol glued to the number
    pub fn symbol(key: &str, family: Family, symbol: &str, conversion: ConversionRule) -> Self {
        UnitDefinition {
            key: key.to_string(),
            family,
            notation: Notation::Symbol(symbol.to_string()),
            aliases: Vec::new(),
            conversion,
            default_target: String::new(),
        }
    }

    /// Builder: add aliases
    pub fn with_aliases<S: AsRef<str>>(mut self, aliases: &[S]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.as_ref().to_string()));
        self
    }

    /// Builder: set the default target unit key
    pub fn defaults_to(mut self, key: &str) -> Self {
        self.default_target = key.to_string();
        self
    }

    /// Every form this unit answers to: its key (underscores as spaces),
    /// its display names or symbol, then its aliases
    pub fn recognized_forms(&self) -> Vec<String> {
        let mut forms = vec![self.key.replace('_', " ")];
        match &self.notation {
            Notation::Named { singular, plural } => {
                forms.push(singular.clone());
                forms.push(plural.clone());
            }
            Notation::Symbol(symbol) => forms.push(symbol.clone()),
        }
        forms.extend(self.aliases.iter().cloned());
        forms
    }

    /// Check if two units are in the same family (can be converted)
    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.family == other.family
    }

    /// Convert a value from this unit to another unit
    pub fn convert_to(&self, value: &Number, target: &UnitDefinition) -> Result<Number, ConvertError> {
        if !self.is_compatible(target) {
            return Err(ConvertError::IncompatibleUnits {
                from: self.family,
                to: target.family,
            });
        }

        // Convert to base, then from base to target
        let base = self.conversion.to_base(value);
        Ok(target.conversion.from_base(&base))
    }
}
