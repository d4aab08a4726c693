use serde::{Deserialize, Serialize, de::IgnoredAny};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which component of a location a raw coordinate describes
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Hemisphere letter that flips the sign of a textual coordinate on this axis
    const fn negative_marker(self) -> char {
        match self {
            Axis::Latitude => 'S',
            Axis::Longitude => 'W',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A latitude or longitude as it comes from the POI feed, either a plain number or free text
/// like `"~ 15.1588° N"`
pub enum RawCoordinate {
    Number(f64),
    Text(String),
    /// `null`, a boolean, an object, or a missing field. Never normalizes.
    #[serde(skip_serializing)]
    Other(IgnoredAny),
}

impl Default for RawCoordinate {
    fn default() -> Self {
        Self::Other(IgnoredAny)
    }
}

impl RawCoordinate {
    /// Normalize to a signed decimal degree value.
    ///
    /// Numbers pass through untouched. Text is reduced to its digits, `.` and `-` and parsed,
    /// the magnitude is then negated if the text mentions the axis' negative hemisphere (`S` for
    /// latitude, `W` for longitude, case-insensitive). Returns [None] when nothing parsable is
    /// left, or when the value was neither a number nor text.
    ///
    /// The filtered text has to be a number as a whole, `"15.1588 N, approx."` leaves
    /// `"15.1588."` and is rejected rather than read up to the first bad character.
    pub fn normalize(&self, axis: Axis) -> Option<f64> {
        match self {
            RawCoordinate::Number(value) => Some(*value),
            RawCoordinate::Text(text) => {
                let numeric = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect::<String>();
                let value = numeric.parse::<f64>().ok()?;

                let marker = axis.negative_marker();
                let negative = text.chars().any(|c| c.eq_ignore_ascii_case(&marker));

                Some(if negative { -value.abs() } else { value })
            }
            RawCoordinate::Other(_) => None,
        }
    }
}

impl From<f64> for RawCoordinate {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for RawCoordinate {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str, axis: Axis) -> Option<f64> {
        RawCoordinate::from(s).normalize(axis)
    }

    #[test]
    fn test_numbers_pass_through() {
        for v in [0.0, 15.1588, -120.62, 250.0, f64::MAX] {
            assert_eq!(RawCoordinate::Number(v).normalize(Axis::Latitude), Some(v));
            assert_eq!(RawCoordinate::Number(v).normalize(Axis::Longitude), Some(v));
        }
    }

    #[test]
    fn test_hemisphere_suffixes() {
        assert_eq!(text("15.1588° N", Axis::Latitude), Some(15.1588));
        assert_eq!(text("15.1588° S", Axis::Latitude), Some(-15.1588));
        assert_eq!(text("120.62° W", Axis::Longitude), Some(-120.62));
        assert_eq!(text("~ 120.62° W", Axis::Longitude), Some(-120.62));
        assert_eq!(text("120.62° E", Axis::Longitude), Some(120.62));
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        assert_eq!(text("15.5 s", Axis::Latitude), Some(-15.5));
        assert_eq!(text("15.5 w", Axis::Longitude), Some(-15.5));
    }

    #[test]
    fn test_marker_only_applies_to_its_axis() {
        // W says nothing about latitude, S nothing about longitude
        assert_eq!(text("15.5 W", Axis::Latitude), Some(15.5));
        assert_eq!(text("15.5 S", Axis::Longitude), Some(15.5));
    }

    #[test]
    fn test_already_negative_stays_negative() {
        assert_eq!(text("-33.86 S", Axis::Latitude), Some(-33.86));
        assert_eq!(text("-33.86", Axis::Latitude), Some(-33.86));
    }

    #[test]
    fn test_unparsable_text() {
        assert_eq!(text("unknown", Axis::Latitude), None);
        assert_eq!(text("", Axis::Longitude), None);
        assert_eq!(text("1.2.3° N", Axis::Latitude), None);
        assert_eq!(text("--", Axis::Latitude), None);
        assert_eq!(text("15.1588 N, approx.", Axis::Latitude), None);
    }

    #[test]
    fn test_other_json_values_never_normalize() {
        let parsed: Vec<RawCoordinate> =
            serde_json::from_str(r#"[null, true, {"deg": 15}]"#).expect("Failed to parse");
        assert_eq!(parsed.len(), 3);
        for raw in parsed {
            assert!(matches!(raw, RawCoordinate::Other(_)));
            assert_eq!(raw.normalize(Axis::Latitude), None);
        }
        assert_eq!(RawCoordinate::default().normalize(Axis::Longitude), None);
    }

    #[test]
    fn test_deserializes_both_shapes() {
        let parsed: Vec<RawCoordinate> =
            serde_json::from_str(r#"[12.5, "~ 15.1588° N"]"#).expect("Failed to parse");
        assert_eq!(
            parsed,
            vec![
                RawCoordinate::Number(12.5),
                RawCoordinate::Text("~ 15.1588° N".to_string())
            ]
        );
    }
}
