use std::fmt;

/// The split statistic `intraA * intraB / interAB²` of one cut position.
///
/// A cut with no inter-domain contacts has no defined value; it is reported as
/// [`Discriminator::Undefined`] instead of failing the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discriminator {
    Defined(f64),
    Undefined,
}

impl Discriminator {
    pub fn from_counts(intra_a: u64, intra_b: u64, inter_ab: u64) -> Self {
        if inter_ab == 0 {
            return Self::Undefined;
        }
        let numerator = (intra_a as f64) * (intra_b as f64);
        let denominator = (inter_ab as f64) * (inter_ab as f64);
        Self::Defined(numerator / denominator)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(v) => f.write_str(&shortest_repr(*v)),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

/// Shortest round-trip rendering of `value`: positional for decimal exponents
/// in `-4..16`, otherwise scientific with a signed, two-digit exponent
/// (`6.25e-06`, `1e+16`). Whole positional values keep a trailing `.0`.
fn shortest_repr(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{:?}", value);
    }
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if (-4..16).contains(&exponent) {
        format!("{:?}", value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Contact counts and discriminator for one cut position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitScore {
    pub cut: usize,
    pub intra_a: u64,
    pub intra_b: u64,
    pub inter_ab: u64,
    pub discriminator: Discriminator,
}

impl SplitScore {
    pub(crate) fn new(cut: usize, intra_a: u64, intra_b: u64, inter_ab: u64) -> Self {
        Self {
            cut,
            intra_a,
            intra_b,
            inter_ab,
            discriminator: Discriminator::from_counts(intra_a, intra_b, inter_ab),
        }
    }
}

/// A split score labelled with the native residue number of its cut position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRecord {
    pub residue_number: isize,
    pub score: SplitScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn discriminator_formula_is_product_over_squared_inter() {
        let d = Discriminator::from_counts(6, 4, 2);
        assert!(f64_approx_equal(d.value().unwrap(), 6.0));
        assert_eq!(Discriminator::from_counts(6, 4, 0), Discriminator::Undefined);
    }

    #[test]
    fn discriminator_display_formats() {
        assert_eq!(Discriminator::Defined(0.0).to_string(), "0.0");
        assert_eq!(Discriminator::Defined(1.5).to_string(), "1.5");
        assert_eq!(Discriminator::Undefined.to_string(), "undefined");
    }

    #[test]
    fn discriminator_display_uses_signed_two_digit_exponents() {
        assert_eq!(Discriminator::from_counts(1, 1, 400).to_string(), "6.25e-06");
        assert_eq!(Discriminator::Defined(1e16).to_string(), "1e+16");
        assert_eq!(Discriminator::Defined(1.2345e20).to_string(), "1.2345e+20");
        assert_eq!(Discriminator::Defined(1.5e-5).to_string(), "1.5e-05");
        assert_eq!(Discriminator::Defined(1e-300).to_string(), "1e-300");
    }

    #[test]
    fn discriminator_display_stays_positional_in_mid_range() {
        assert_eq!(Discriminator::Defined(0.0001).to_string(), "0.0001");
        assert_eq!(Discriminator::Defined(3.75).to_string(), "3.75");
        assert_eq!(Discriminator::Defined(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Discriminator::Defined(123456.5).to_string(), "123456.5");
    }
}
