use std::fmt;

/// A value on the extended real line. `f64::INFINITY` and `f64::NEG_INFINITY`
/// are the two infinite values, NaN never appears in a normalized matrix.
pub type Weight = f64;

/// Displays a weight the way the service prints it: `inf`, `-inf` or the
/// shortest decimal representation.
pub struct DisplayWeight(pub Weight);

impl fmt::Display for DisplayWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.0;
        if weight == f64::INFINITY {
            write!(f, "inf")
        } else if weight == f64::NEG_INFINITY {
            write!(f, "-inf")
        } else if weight.fract() == 0.0 && weight.abs() < 1e15 {
            write!(f, "{}", weight as i64)
        } else {
            write!(f, "{weight}")
        }
    }
}
