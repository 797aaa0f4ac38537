//! Rendering quantities and conversion sentences

use unitconv_core::Number;
use crate::{Notation, UnitDefinition};

/// Decimal places kept in a conversion result
pub const RESULT_PLACES: u32 = 4;

/// The unit's name for a quantity of `value`
///
/// Singular only for exactly 1; zero, fractions and negatives are plural.
/// Symbols have a single form.
pub fn display_name<'a>(unit: &'a UnitDefinition, value: &Number) -> &'a str {
    match &unit.notation {
        Notation::Named { singular, .. } if value.is_one() => singular.as_str(),
        Notation::Named { plural, .. } => plural.as_str(),
        Notation::Symbol(symbol) => symbol.as_str(),
    }
}

/// "3 meters", "1 US cup", "80.33°F"
pub fn render_quantity(unit: &UnitDefinition, value: &Number) -> String {
    let name = display_name(unit, value);
    match unit.notation {
        Notation::Named { .. } => format!("{} {}", value, name),
        Notation::Symbol(_) => format!("{}{}", value, name),
    }
}

/// "<source quantity> = <target quantity>"
pub fn render_sentence(
    source: &UnitDefinition,
    magnitude: &Number,
    target: &UnitDefinition,
    result: &Number,
) -> String {
    format!(
        "{} = {}",
        render_quantity(source, magnitude),
        render_quantity(target, result)
    )
}
