/// The number of significant digits written by default, enough to
/// distinguish any two `f64` values printed in `%g` style.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 15;

/// How floating point values are rendered as text.
///
/// Every number written into a search file goes through the same policy, so
/// the same value always produces the same text for a given policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatPrecision {
    /// The shortest text that parses back to the exact same `f64`
    Shortest,
    /// `%g`-style: at most this many significant digits, trailing zeros
    /// removed, exponent notation for very large or very small magnitudes
    Significant(usize),
}

impl Default for FloatPrecision {
    fn default() -> Self {
        Self::Significant(DEFAULT_SIGNIFICANT_DIGITS)
    }
}

impl FloatPrecision {
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Shortest => value.to_string(),
            Self::Significant(digits) => format_significant(value, (*digits).max(1)),
        }
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    // The exponent has to come from the rounded representation, 9.9999... may
    // round up into the next decade.
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}
