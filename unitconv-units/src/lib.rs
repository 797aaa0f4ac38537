//! unitconv units - Unit registry, query parsing and conversion
//!
//! Turns free text such as `"3 meters in cm"` into
//! `"3 meters = 300 centimeters"`.
//!
//! Families:
//! - Length (m, cm, km, in, ft, yd, mi)
//! - Area (m2, sq ft, hectare, are, etc.)
//! - Volume (litre, ml, m3, cc, US gallon, quart, pint, cup, floz, tbsp, tsp)
//! - Mass (g, mg, kg, lb, oz, metric and short tons)
//! - Time (s, min, h, d, week, month, year)
//! - Temperature (K, °C, °F)
//!
//! The pipeline is parse, resolve, compute, render. Nothing here logs or
//! prints; every failure is a [`ConvertError`].

mod family;
mod unit;
mod error;
mod catalog;
mod registry;
mod query;
mod format;
mod convert;

pub use family::Family;
pub use unit::{ConversionRule, Notation, UnitDefinition};
pub use error::{ConvertError, RegistryError};
pub use registry::{UnitRegistry, UNITS};
pub use query::{parse_query, ParsedQuery};
pub use convert::{convert, Conversion, ConversionRequest, Converter};
pub use format::{display_name, render_quantity, render_sentence, RESULT_PLACES};

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_core::Number;

    fn check(cases: &[(&str, &str)]) {
        for (query, expected) in cases {
            match convert(query) {
                Ok(sentence) => assert_eq!(&sentence, expected, "query {:?}", query),
                Err(e) => panic!("query {:?} failed: {}", query, e),
            }
        }
    }

    fn check_fails(cases: &[&str]) {
        for query in cases {
            assert!(convert(query).is_err(), "query {:?} should fail", query);
        }
    }

    #[test]
    fn test_headline_examples() {
        check(&[
            ("3 meters in cm", "3 meters = 300 centimeters"),
            ("1 meter in cm", "1 meter = 100 centimeters"),
            ("300 yards", "300 yards = 274.32 meters"),
            ("300K in °F", "300K = 80.33°F"),
            ("45mg in ounces", "45 milligrams = 0.0016 ounces"),
        ]);
    }

    #[test]
    fn test_temperature() {
        check(&[
            ("45°C in fahrenheit", "45°C = 113°F"),
            ("20F in C", "20°F = -6.6667°C"),
            ("120K in celsius", "120K = -153.15°C"),
            ("20 degrees F in C", "20°F = -6.6667°C"),
            ("20 deg F in C", "20°F = -6.6667°C"),
            ("20C to f", "20°C = 68°F"),
            ("-40 c in f", "-40°C = -40°F"),
            ("150f in °C", "150°F = 65.5556°C"),
        ]);
    }

    #[test]
    fn test_distance() {
        check(&[
            ("yards 1000 METERS", "1000 meters = 1093.6133 yards"),
            ("20 inches in ft", "20 inches = 1.6667 feet"),
            ("5 feet to in", "5 feet = 60 inches"),
            ("20 inches in foot", "20 inches = 1.6667 feet"),
            ("2 meter in cm", "2 meters = 200 centimeters"),
            ("how many cm in 3 meters", "3 meters = 300 centimeters"),
        ]);
    }

    #[test]
    fn test_area() {
        check(&[
            ("1000 sq feet to sq meter", "1000 square feet = 92.903 square meters"),
            ("1 are square meter", "1 are = 100 square meters"),
            ("100 hectare sq kilometer", "100 hectares = 1 square kilometer"),
            ("hectare 1 sq kilometer", "1 square kilometer = 100 hectares"),
            ("1 sq m in square cm", "1 square meter = 10000 square centimeters"),
            ("10 sq in in sq cm", "10 square inches = 64.516 square centimeters"),
        ]);
    }

    #[test]
    fn test_volume() {
        check(&[
            ("1m3 litres", "1 cubic meter = 1000 litres"),
            ("1 cubic meter litres", "1 cubic meter = 1000 litres"),
            ("1m³ litres", "1 cubic meter = 1000 litres"),
            ("25 floz in litres", "25 US fluid ounces = 0.7393 litres"),
            ("1 litre in cm**3", "1 litre = 1000 cubic centimeters"),
            ("1 cc ml", "1 cubic centimeter = 1 millilitre"),
            ("100 gallons litres", "100 US gallons = 378.5412 litres"),
            (".75 qts in flozs", "0.75 quarts = 24 US fluid ounces"),
            ("5 tsp to tbsp", "5 US teaspoons = 1.6667 US tablespoons"),
            ("1 tablespoons in a cup", "1 US tablespoon = 0.0625 US cups"),
            ("1 gal in pints", "1 US gallon = 8 US pints"),
            ("3 cups in floz", "3 US cups = 24 US fluid ounces"),
        ]);
    }

    #[test]
    fn test_mass() {
        check(&[
            ("1t grams", "1 metric ton = 1000000 grams"),
            ("  1 ton grams", "1 short ton = 907184.74 grams"),
            ("1 tonne grams  ", "1 metric ton = 1000000 grams"),
            ("3lb in mg", "3 pounds = 1360777.11 milligrams"),
            ("250g pounds", "250 grams = 0.5512 pounds"),
            ("20 lbs in kg", "20 pounds = 9.0718 kilograms"),
            ("50 ounce lb", "50 ounces = 3.125 pounds"),
        ]);
    }

    #[test]
    fn test_time() {
        check(&[
            ("1 year days", "1 year = 365.25 days"),
            ("5 days in sec", "5 days = 432000 seconds"),
            ("2200 hours in weeks", "2200 hours = 13.0952 weeks"),
            ("20h in minutes", "20 hours = 1200 minutes"),
            ("1y in weeks", "1 year = 52.1786 weeks"),
            ("1 year in months", "1 year = 12 months"),
        ]);
    }

    #[test]
    fn test_number_formats() {
        check(&[
            ("20.0 inches in feet", "20 inches = 1.6667 feet"),
            (",7 meter in feet", "0.7 meters = 2.2966 feet"),
            ("1234e-2 inches in feet", "12.34 inches = 1.0283 feet"),
            ("1.23455e6 inches in feet", "1234550 inches = 102879.1667 feet"),
        ]);
    }

    #[test]
    fn test_exponent_marks() {
        check(&[
            ("10 ft**2 to m^2", "10 square feet = 0.929 square meters"),
            ("10 ft  **2 to m ^2", "10 square feet = 0.929 square meters"),
            ("10 ft** 2 to m^  2", "10 square feet = 0.929 square meters"),
            ("10 ft ** 2 to m  ^  2", "10 square feet = 0.929 square meters"),
            ("10 ft2 to sq m", "10 square feet = 0.929 square meters"),
            ("1m**3 litres", "1 cubic meter = 1000 litres"),
            ("1m** 3 litres", "1 cubic meter = 1000 litres"),
            ("1m **3 litres", "1 cubic meter = 1000 litres"),
            ("1m  ** 3 litres", "1 cubic meter = 1000 litres"),
            ("1m^3 litres", "1 cubic meter = 1000 litres"),
            ("1m ^ 3 litres", "1 cubic meter = 1000 litres"),
            ("1m^  3 litres", "1 cubic meter = 1000 litres"),
            ("1m ^3 litres", "1 cubic meter = 1000 litres"),
        ]);
    }

    #[test]
    fn test_multiword_units() {
        check(&[
            ("2 fluid ounce in litres", "2 US fluid ounces = 0.0591 litres"),
            ("2 fluid ounces in litres", "2 US fluid ounces = 0.0591 litres"),
            ("3 metric ton in kilograms", "3 metric tons = 3000 kilograms"),
            ("3 metric ton in metric ton", "3 metric tons = 3 metric tons"),
        ]);
    }

    #[test]
    fn test_default_targets() {
        check(&[
            ("120 °f", "120°F = 48.8889°C"),
            ("27 celsius", "27°C = 80.6°F"),
            ("100 hectare", "100 hectares = 0.3861 square miles"),
            (" cm 20  ", "20 centimeters = 7.874 inches"),
            ("2 floz", "2 US fluid ounces = 59.1471 millilitres"),
            ("30 grams", "30 grams = 1.0582 ounces"),
            ("5h    ", "5 hours = 18000 seconds"),
            ("       3 tsp", "3 US teaspoons = 14.7868 millilitres"),
            ("20 yards", "20 yards = 18.288 meters"),
        ]);
    }

    #[test]
    fn test_pluralization() {
        check(&[
            ("0 meters in cm", "0 meters = 0 centimeters"),
            ("0.5 km in m", "0.5 kilometers = 500 meters"),
            ("100 cm in m", "100 centimeters = 1 meter"),
            ("1 K in kelvin", "1K = 1K"),
        ]);
    }

    #[test]
    fn test_failures() {
        check_fails(&[
            "45°C in meters",
            "23 rabbits under pressure",
            "five yards in meters",
            "meters in inches",
            "around the world in 80 days",
            "50 shades of gray",
            "multimeters in yards",
            "1 sq magnolia in square cm",
            "100",
            "100x",
        ]);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            convert("10 frobs in meters").unwrap_err(),
            ConvertError::UnitNotRecognized("frobs".to_string())
        );
        assert_eq!(
            convert("10 meters in kg").unwrap_err(),
            ConvertError::IncompatibleUnits { from: Family::Length, to: Family::Mass }
        );
        assert!(matches!(
            convert("please convert this").unwrap_err(),
            ConvertError::MalformedQuery(_)
        ));
    }

    #[test]
    fn test_plural_of_one_letter_symbol_is_unknown() {
        for (query, token) in [("5 ms", "ms"), ("5 ms in seconds", "ms"), ("2 ks in celsius", "ks")] {
            assert_eq!(
                convert(query).unwrap_err(),
                ConvertError::UnitNotRecognized(token.to_string()),
                "query {:?}",
                query
            );
        }
    }

    #[test]
    fn test_dangling_separator_uses_default_target() {
        check(&[
            ("5 kg to", "5 kilograms = 11.0231 pounds"),
            ("3 meters into", "3 meters = 3.2808 yards"),
        ]);
        assert_eq!(
            convert("5 frobs to").unwrap_err(),
            ConvertError::UnitNotRecognized("frobs".to_string())
        );
    }

    #[test]
    fn test_power_after_number_is_not_a_magnitude() {
        // "10^2" must never read as 102
        check_fails(&["10^2 meters in cm", "10² meters in cm"]);
    }

    #[test]
    fn test_short_forms_are_not_guessed_by_family() {
        // "oz" is always mass and "y" always a year
        assert_eq!(
            convert("1 liter in ozs").unwrap_err(),
            ConvertError::IncompatibleUnits { from: Family::Volume, to: Family::Mass }
        );
        assert_eq!(
            convert("1y in meters").unwrap_err(),
            ConvertError::IncompatibleUnits { from: Family::Time, to: Family::Length }
        );
    }

    #[test]
    fn test_round_trip() {
        // Results are rounded to RESULT_PLACES, so going through a much
        // larger unit loses the source precision (37 cm -> 0.0002 mi ->
        // 32.1869 cm). Only pairs of comparable size can come back within
        // the tolerance.
        let pairs = [
            ("meter", "foot"),
            ("mile", "kilometer"),
            ("kilogram", "pound"),
            ("gallon", "litre"),
            ("litre", "pint"),
            ("square_meter", "square_foot"),
            ("hour", "minute"),
            ("celsius", "fahrenheit"),
            ("kelvin", "fahrenheit"),
        ];
        let tolerance = Number::from_str("0.0001").unwrap();

        for (from, to) in pairs {
            let from = UNITS.get(from).unwrap();
            let to = UNITS.get(to).unwrap();
            for magnitude in ["0.5", "12.5", "37", "1000"] {
                let magnitude = Number::from_str(magnitude).unwrap();
                let forward = ConversionRequest { magnitude: magnitude.clone(), source: from, target: to }
                    .compute()
                    .unwrap();
                let back = ConversionRequest { magnitude: forward, source: to, target: from }
                    .compute()
                    .unwrap();
                assert!(
                    back.sub(&magnitude).abs() <= tolerance,
                    "{} {} -> {} -> {}",
                    magnitude, from.key, to.key, back
                );
            }
        }
    }

    #[test]
    fn test_every_default_target_converts() {
        for unit in UNITS.units() {
            let target = UNITS.default_target_for(unit);
            let request = ConversionRequest { magnitude: Number::from_i64(1), source: unit, target };
            assert!(request.compute().is_ok(), "{}", unit.key);
        }
    }
}
