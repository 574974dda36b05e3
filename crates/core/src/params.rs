//! Total helpers for reading tunables out of a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. A missing key or
//! a value of the wrong type yields the default, matching the rest of the
//! crate: bad input degrades to a usable value instead of failing.

use serde_json::Value;

use crate::mode::ColorMode;

/// Key for the brightness cutoff used by contrast classification.
pub const CUTOFF_KEY: &str = "cutoff";
/// Key for the number of hex characters per output line.
pub const LINE_WIDTH_KEY: &str = "line_width";
/// Key for the output color mode.
pub const MODE_KEY: &str = "mode";

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// JSON integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative JSON integers are accepted.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a [`ColorMode`] by name, returning `default` if missing, wrong type
/// or not a known mode.
pub fn param_color_mode(params: &Value, name: &str, default: ColorMode) -> ColorMode {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"cutoff": 0.6});
        assert!((param_f64(&params, CUTOFF_KEY, 0.51) - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"cutoff": 1});
        assert!((param_f64(&params, CUTOFF_KEY, 0.51) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing_or_null() {
        assert!((param_f64(&json!({}), CUTOFF_KEY, 0.51) - 0.51).abs() < f64::EPSILON);
        let params = json!({"cutoff": null});
        assert!((param_f64(&params, CUTOFF_KEY, 0.51) - 0.51).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, CUTOFF_KEY, 0.3) - 0.3).abs() < f64::EPSILON);
    }

    // -- param_usize --

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"line_width": 64});
        assert_eq!(param_usize(&params, LINE_WIDTH_KEY, 72), 64);
    }

    #[test]
    fn param_usize_returns_default_for_float_or_negative() {
        assert_eq!(param_usize(&json!({"line_width": 2.5}), LINE_WIDTH_KEY, 72), 72);
        assert_eq!(param_usize(&json!({"line_width": -1}), LINE_WIDTH_KEY, 72), 72);
    }

    // -- param_color_mode --

    #[test]
    fn param_color_mode_parses_known_names() {
        let params = json!({"mode": "Grayscale"});
        assert_eq!(
            param_color_mode(&params, MODE_KEY, ColorMode::Rgb),
            ColorMode::Grayscale
        );
    }

    #[test]
    fn param_color_mode_falls_back_on_unknown_name() {
        let params = json!({"mode": "sepia"});
        assert_eq!(
            param_color_mode(&params, MODE_KEY, ColorMode::Cmyk),
            ColorMode::Cmyk
        );
        assert_eq!(
            param_color_mode(&json!({}), MODE_KEY, ColorMode::Rgb),
            ColorMode::Rgb
        );
    }
}
