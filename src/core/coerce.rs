use serde_json::Value;

/// Result of typing a raw CSV cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Best-effort typing of a textual cell value.
///
/// A non-empty run of ASCII digits becomes an integer; anything else that
/// parses as a finite float becomes a float; everything else stays text.
/// Note the asymmetry: a leading `-` disqualifies the digit check, so
/// negative integers come out as floats. That behavior is deliberate and
/// relied on by round-trip output, so don't "fix" it.
///
/// Digit runs too large for i64 fall through to the float branch, and
/// non-finite parses (`nan`, `inf`) stay text since JSON cannot carry them.
pub fn coerce(text: &str) -> Scalar {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = text.parse::<i64>() {
            return Scalar::Int(n);
        }
    }

    if let Ok(f) = text.parse::<f64>() {
        if f.is_finite() {
            return Scalar::Float(f);
        }
    }

    Scalar::Text(text.to_string())
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Value {
        match scalar {
            Scalar::Int(n) => Value::from(n),
            Scalar::Float(f) => Value::from(f),
            Scalar::Text(t) => Value::String(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_become_integers() {
        assert_eq!(coerce("42"), Scalar::Int(42));
        assert_eq!(coerce("007"), Scalar::Int(7));
        assert_eq!(coerce("0"), Scalar::Int(0));
    }

    #[test]
    fn test_negative_integers_become_floats() {
        assert_eq!(coerce("-42"), Scalar::Float(-42.0));
    }

    #[test]
    fn test_float_notation() {
        assert_eq!(coerce("3.14"), Scalar::Float(3.14));
        assert_eq!(coerce("1e3"), Scalar::Float(1000.0));
        assert_eq!(coerce("-0.5"), Scalar::Float(-0.5));
    }

    #[test]
    fn test_text_passthrough() {
        assert_eq!(coerce("abc"), Scalar::Text("abc".to_string()));
        assert_eq!(coerce(""), Scalar::Text(String::new()));
        // no whitespace trimming
        assert_eq!(coerce(" 42"), Scalar::Text(" 42".to_string()));
    }

    #[test]
    fn test_i64_overflow_falls_to_float() {
        assert_eq!(
            coerce("99999999999999999999"),
            Scalar::Float(99999999999999999999.0)
        );
    }

    #[test]
    fn test_non_finite_stays_text() {
        assert_eq!(coerce("nan"), Scalar::Text("nan".to_string()));
        assert_eq!(coerce("inf"), Scalar::Text("inf".to_string()));
    }
}
