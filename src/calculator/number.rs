/// A numeric calculation result.
///
/// Integer operations stay in `Integer`; a division whose quotient is not a
/// whole number produces a `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact integer result.
    Integer(i64),
    /// A fractional quotient.
    Real(f64),
}

impl Default for Number {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
