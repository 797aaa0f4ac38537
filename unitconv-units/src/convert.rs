//! Resolving parsed queries against a registry and producing conversions

use serde::Serialize;
use unitconv_core::Number;
use crate::format::{render_sentence, RESULT_PLACES};
use crate::{parse_query, ConvertError, Family, ParsedQuery, UnitDefinition, UnitRegistry};

/// A resolved conversion, borrowed from the registry
#[derive(Debug, Clone)]
pub struct ConversionRequest<'r> {
    pub magnitude: Number,
    pub source: &'r UnitDefinition,
    pub target: &'r UnitDefinition,
}

impl ConversionRequest<'_> {
    /// The converted value, rounded to the result precision
    pub fn compute(&self) -> Result<Number, ConvertError> {
        let value = self.source.convert_to(&self.magnitude, self.target)?;
        Ok(value.round_to(RESULT_PLACES))
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub magnitude: Number,
    /// Source unit key
    pub source: String,
    /// Target unit key
    pub target: String,
    pub family: Family,
    /// Rounded result
    pub result: Number,
    /// Rendered sentence, e.g. "3 meters = 300 centimeters"
    pub text: String,
}

/// Converts free-text queries using a unit registry
#[derive(Debug, Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r UnitRegistry,
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Converter { registry }
    }

    /// Resolve the unit texts of a parsed query
    ///
    /// Without an explicit target, a source text that is not a unit by
    /// itself is tried as `<source> <target>` ("1m3 litres", "250g pounds").
    pub fn resolve(&self, query: &ParsedQuery) -> Result<ConversionRequest<'r>, ConvertError> {
        let (source, target) = match &query.target {
            Some(target) => {
                let source = self.registry.find_unit(&query.source)?;
                (source, self.registry.find_unit(target)?)
            }
            None => match self.registry.find_unit(&query.source) {
                Ok(source) => (source, self.registry.default_target_for(source)),
                Err(err) => self.split_source(&query.source).ok_or(err)?,
            },
        };

        if !source.is_compatible(target) {
            return Err(ConvertError::IncompatibleUnits {
                from: source.family,
                to: target.family,
            });
        }

        Ok(ConversionRequest {
            magnitude: query.magnitude.clone(),
            source,
            target,
        })
    }

    /// First split of the words where both halves name a unit
    fn split_source(&self, text: &str) -> Option<(&'r UnitDefinition, &'r UnitDefinition)> {
        let words: Vec<&str> = text.split_whitespace().collect();
        (1..words.len()).find_map(|i| {
            let source = self.registry.find_unit(&words[..i].join(" ")).ok()?;
            let target = self.registry.find_unit(&words[i..].join(" ")).ok()?;
            Some((source, target))
        })
    }

    /// Parse, resolve and compute a query
    pub fn conversion(&self, text: &str) -> Result<Conversion, ConvertError> {
        let query = parse_query(text)?;
        let request = self.resolve(&query)?;
        let result = request.compute()?;

        Ok(Conversion {
            text: render_sentence(request.source, &request.magnitude, request.target, &result),
            source: request.source.key.clone(),
            target: request.target.key.clone(),
            family: request.source.family,
            magnitude: request.magnitude,
            result,
        })
    }

    /// Convert a query to its result sentence
    pub fn convert(&self, text: &str) -> Result<String, ConvertError> {
        self.conversion(text).map(|c| c.text)
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Converter::new(UnitRegistry::global())
    }
}

/// Convert a free-text query with the built-in units
///
/// ```
/// let sentence = unitconv_units::convert("3 meters in cm").unwrap();
/// assert_eq!(sentence, "3 meters = 300 centimeters");
/// ```
pub fn convert(text: &str) -> Result<String, ConvertError> {
    Converter::default().convert(text)
}
