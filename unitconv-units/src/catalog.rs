//! Built-in unit catalog
//!
//! Factors are exact decimals relative to each family's base unit:
//! meter, square meter, litre, gram, second and kelvin. Square and cubic
//! units are derived from the length table so their names, symbols
//! (`m2`, `cm3`, `sq ft`, `cubic in`) and factors stay in step.

use unitconv_core::Number;
use crate::{ConversionRule, Family, UnitDefinition};

/// A length unit and the spellings its square/cubic forms inherit
struct LengthUnit {
    key: &'static str,
    singular: &'static str,
    plural: &'static str,
    factor: Number,
    aliases: &'static [&'static str],
    symbols: &'static [&'static str],
    /// Extra spellings of the cubic form only
    cube_aliases: &'static [&'static str],
}

impl LengthUnit {
    /// Every spelling that can follow "square"/"sq"/"cubic"
    fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.singular, self.plural]
            .into_iter()
            .chain(self.aliases.iter().copied())
            .chain(self.symbols.iter().copied())
    }

    fn definition(&self) -> UnitDefinition {
        UnitDefinition::named(self.key, Family::Length, self.singular, self.plural, ConversionRule::linear(self.factor.clone()))
            .with_aliases(self.aliases)
            .with_aliases(self.symbols)
    }

    fn square(&self) -> UnitDefinition {
        let mut aliases: Vec<String> = Vec::new();
        for spelling in self.spellings() {
            aliases.push(format!("square {}", spelling));
            aliases.push(format!("sq {}", spelling));
        }
        aliases.extend(self.symbols.iter().map(|s| format!("{}2", s)));

        UnitDefinition::named(
            &format!("square_{}", self.key),
            Family::Area,
            &format!("square {}", self.singular),
            &format!("square {}", self.plural),
            ConversionRule::linear(self.factor.pow(2)),
        )
        .with_aliases(aliases.as_slice())
    }

    fn cube(&self) -> UnitDefinition {
        let mut aliases: Vec<String> = self
            .spellings()
            .map(|spelling| format!("cubic {}", spelling))
            .collect();
        aliases.extend(self.symbols.iter().map(|s| format!("{}3", s)));
        aliases.extend(self.cube_aliases.iter().map(|a| a.to_string()));

        // one cubic meter is a thousand litres
        let litres = self.factor.pow(3).mul(&Number::from_i64(1000));

        UnitDefinition::named(
            &format!("cubic_{}", self.key),
            Family::Volume,
            &format!("cubic {}", self.singular),
            &format!("cubic {}", self.plural),
            ConversionRule::linear(litres),
        )
        .with_aliases(aliases.as_slice())
    }
}

fn length_units() -> Vec<LengthUnit> {
    vec![
        LengthUnit {
            key: "meter",
            singular: "meter",
            plural: "meters",
            factor: Number::from_i64(1),
            aliases: &["metre", "metres"],
            symbols: &["m"],
            cube_aliases: &[],
        },
        LengthUnit {
            key: "centimeter",
            singular: "centimeter",
            plural: "centimeters",
            factor: Number::from_scaled(1, -2),
            aliases: &["centimetre", "centimetres"],
            symbols: &["cm"],
            cube_aliases: &["cc"],
        },
        LengthUnit {
            key: "kilometer",
            singular: "kilometer",
            plural: "kilometers",
            factor: Number::from_i64(1000),
            aliases: &["kilometre", "kilometres"],
            symbols: &["km"],
            cube_aliases: &[],
        },
        LengthUnit {
            key: "inch",
            singular: "inch",
            plural: "inches",
            factor: Number::from_scaled(254, -4),
            aliases: &[],
            symbols: &["in"],
            cube_aliases: &[],
        },
        LengthUnit {
            key: "foot",
            singular: "foot",
            plural: "feet",
            factor: Number::from_scaled(3048, -4),
            aliases: &[],
            symbols: &["ft"],
            cube_aliases: &[],
        },
        LengthUnit {
            key: "yard",
            singular: "yard",
            plural: "yards",
            factor: Number::from_scaled(9144, -4),
            aliases: &[],
            symbols: &["yd"],
            cube_aliases: &[],
        },
        LengthUnit {
            key: "mile",
            singular: "mile",
            plural: "miles",
            factor: Number::from_scaled(1609344, -3),
            aliases: &[],
            symbols: &["mi"],
            cube_aliases: &[],
        },
    ]
}

/// Imperial <-> metric at a similar size; time goes to a smaller, not
/// adjacent unit; temperature goes celsius <-> fahrenheit
const DEFAULT_TARGETS: &[(&str, &str)] = &[
    ("meter", "yard"),
    ("centimeter", "inch"),
    ("kilometer", "mile"),
    ("inch", "centimeter"),
    ("foot", "meter"),
    ("yard", "meter"),
    ("mile", "kilometer"),
    ("square_meter", "square_foot"),
    ("square_centimeter", "square_inch"),
    ("square_kilometer", "square_mile"),
    ("square_inch", "square_centimeter"),
    ("square_foot", "square_meter"),
    ("square_yard", "square_meter"),
    ("square_mile", "square_kilometer"),
    ("are", "square_yard"),
    ("hectare", "square_mile"),
    ("litre", "gallon"),
    ("millilitre", "teaspoon"),
    ("cubic_centimeter", "fluid_ounce"),
    ("cubic_meter", "cubic_yard"),
    ("cubic_kilometer", "cubic_mile"),
    ("cubic_inch", "millilitre"),
    ("cubic_foot", "litre"),
    ("cubic_yard", "cubic_meter"),
    ("cubic_mile", "cubic_kilometer"),
    ("gallon", "litre"),
    ("quart", "litre"),
    ("pint", "litre"),
    ("cup", "millilitre"),
    ("fluid_ounce", "millilitre"),
    ("tablespoon", "millilitre"),
    ("teaspoon", "millilitre"),
    ("gram", "ounce"),
    ("milligram", "gram"),
    ("kilogram", "pound"),
    ("pound", "kilogram"),
    ("ounce", "gram"),
    ("metric_ton", "short_ton"),
    ("short_ton", "metric_ton"),
    ("second", "minute"),
    ("minute", "second"),
    ("hour", "second"),
    ("day", "hour"),
    ("week", "hour"),
    ("month", "day"),
    ("year", "day"),
    ("celsius", "fahrenheit"),
    ("fahrenheit", "celsius"),
    ("kelvin", "celsius"),
];

/// Every built-in unit, with default targets filled in
pub fn builtin_units() -> Vec<UnitDefinition> {
    let lengths = length_units();

    let mut units: Vec<UnitDefinition> = lengths.iter().map(LengthUnit::definition).collect();
    units.extend(lengths.iter().map(LengthUnit::square));
    units.extend(area_units());
    units.extend(lengths.iter().map(LengthUnit::cube));
    units.extend(volume_units());
    units.extend(mass_units());
    units.extend(time_units());
    units.extend(temperature_units());

    for unit in &mut units {
        if let Some((_, target)) = DEFAULT_TARGETS.iter().find(|(key, _)| *key == unit.key) {
            unit.default_target = target.to_string();
        }
    }
    units
}

fn area_units() -> Vec<UnitDefinition> {
    vec![
        UnitDefinition::named("are", Family::Area, "are", "ares", ConversionRule::linear(Number::from_i64(100))),
        UnitDefinition::named("hectare", Family::Area, "hectare", "hectares", ConversionRule::linear(Number::from_i64(10000)))
            .with_aliases(&["ha"]),
    ]
}

fn volume_units() -> Vec<UnitDefinition> {
    let v = |key: &str, singular: &str, plural: &str, factor: Number| {
        UnitDefinition::named(key, Family::Volume, singular, plural, ConversionRule::linear(factor))
    };

    vec![
        v("litre", "litre", "litres", Number::from_i64(1))
            .with_aliases(&["liter", "liters", "l"]),
        v("millilitre", "millilitre", "millilitres", Number::from_scaled(1, -3))
            .with_aliases(&["milliliter", "milliliters", "ml"]),
        v("gallon", "US gallon", "US gallons", Number::from_scaled(3785411784, -9))
            .with_aliases(&["gallons", "gal"]),
        v("quart", "quart", "quarts", Number::from_scaled(946352946, -9))
            .with_aliases(&["qt"]),
        v("pint", "US pint", "US pints", Number::from_scaled(473176473, -9))
            .with_aliases(&["pints", "pt"]),
        v("cup", "US cup", "US cups", Number::from_scaled(2365882365, -10))
            .with_aliases(&["cups"]),
        v("fluid_ounce", "US fluid ounce", "US fluid ounces", Number::from_scaled(295735295625, -13))
            .with_aliases(&["fluid ounces", "floz", "fl oz"]),
        v("tablespoon", "US tablespoon", "US tablespoons", Number::from_scaled(1478676478125, -14))
            .with_aliases(&["tablespoons", "tbsp", "tbs"]),
        v("teaspoon", "US teaspoon", "US teaspoons", Number::from_scaled(492892159375, -14))
            .with_aliases(&["teaspoons", "tsp", "ts"]),
    ]
}

fn mass_units() -> Vec<UnitDefinition> {
    let m = |key: &str, singular: &str, plural: &str, factor: Number| {
        UnitDefinition::named(key, Family::Mass, singular, plural, ConversionRule::linear(factor))
    };

    vec![
        m("gram", "gram", "grams", Number::from_i64(1))
            .with_aliases(&["g"]),
        m("milligram", "milligram", "milligrams", Number::from_scaled(1, -3))
            .with_aliases(&["mg"]),
        m("kilogram", "kilogram", "kilograms", Number::from_i64(1000))
            .with_aliases(&["kg", "kilo", "kilos"]),
        m("pound", "pound", "pounds", Number::from_scaled(45359237, -5))
            .with_aliases(&["lb", "lbs"]),
        m("ounce", "ounce", "ounces", Number::from_scaled(28349523125, -9))
            .with_aliases(&["oz"]),
        m("metric_ton", "metric ton", "metric tons", Number::from_i64(1_000_000))
            .with_aliases(&["tonne", "tonnes", "t"]),
        m("short_ton", "short ton", "short tons", Number::from_scaled(90718474, -2))
            .with_aliases(&["ton", "tons"]),
    ]
}

fn time_units() -> Vec<UnitDefinition> {
    let t = |key: &str, plural: &str, seconds: i64| {
        UnitDefinition::named(key, Family::Time, key, plural, ConversionRule::linear(Number::from_i64(seconds)))
    };

    vec![
        t("second", "seconds", 1).with_aliases(&["s", "sec", "secs"]),
        t("minute", "minutes", 60).with_aliases(&["min", "mins"]),
        t("hour", "hours", 3600).with_aliases(&["h", "hr", "hrs"]),
        t("day", "days", 86400).with_aliases(&["d"]),
        t("week", "weeks", 604800).with_aliases(&["w", "wk", "wks"]),
        // a twelfth of a 365.25 day year
        t("month", "months", 2629800).with_aliases(&["mo"]),
        t("year", "years", 31557600).with_aliases(&["y", "yr", "yrs"]),
    ]
}

fn temperature_units() -> Vec<UnitDefinition> {
    let freezing = Number::from_scaled(27315, -2);
    // 0°F is 273.15 - 32 * 5/9 kelvin
    let fahrenheit_zero = freezing.sub(&Number::from_ratio(160, 9));

    vec![
        UnitDefinition::symbol("kelvin", Family::Temperature, "K", ConversionRule::linear(Number::from_i64(1)))
            .with_aliases(&["kelvins", "°k"]),
        UnitDefinition::symbol("celsius", Family::Temperature, "°C", ConversionRule::affine(Number::from_i64(1), freezing))
            .with_aliases(&["centigrade", "c", "degc"]),
        UnitDefinition::symbol(
            "fahrenheit",
            Family::Temperature,
            "°F",
            ConversionRule::affine(Number::from_ratio(5, 9), fahrenheit_zero),
        )
        .with_aliases(&["f", "degf"]),
    ]
}
