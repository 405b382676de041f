use core::fmt;

/// Error type for group operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// `exponent` was called with a negative power.
    NegativeExponent(i64),
    /// A mapping handed to a validating constructor is not a bijection of the domain.
    NotABijection,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::NegativeExponent(k) => {
                write!(f, "k must be non-negative, got {}", k)
            }
            GroupError::NotABijection => write!(f, "mapping is not a bijection of the domain"),
        }
    }
}

impl std::error::Error for GroupError {}

/// Abstract group with a single binary operation, written multiplicatively.
///
/// Unlike a trait on the element type itself, a `Group` is a value: it
/// carries whatever context its elements need (for the symmetric group, the
/// domain being permuted).
///
/// Laws (you should test these for concrete types):
/// - associativity: (ab)c = a(bc)
/// - identity: e * a = a * e = a
/// - inverse: a * a⁻¹ = a⁻¹ * a = e
pub trait Group {
    /// The carrier type.
    type Element: Clone;

    /// Group operation `a · b`.
    fn binary_operation(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Identity element `e`.
    fn identity(&self) -> Self::Element;

    /// Inverse element a⁻¹.
    fn inverse_of(&self, a: &Self::Element) -> Self::Element;

    /// `a^k`: `a` combined with itself `k` times, with `a^0 = e`.
    ///
    /// Uses square-and-multiply. Powers of a single element commute, so this
    /// agrees with the left fold `a · (a · (... · e))`.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::NegativeExponent` if `k < 0`.
    fn exponent(&self, a: &Self::Element, k: i64) -> Result<Self::Element, GroupError> {
        if k < 0 {
            return Err(GroupError::NegativeExponent(k));
        }

        let mut base = a.clone();
        let mut result = self.identity();

        let mut e = k as u64;
        while e > 0 {
            if e & 1 == 1 {
                result = self.binary_operation(&base, &result);
            }
            e >>= 1;
            if e > 0 {
                base = self.binary_operation(&base, &base);
            }
        }
        Ok(result)
    }

    /// Order of `a`: the smallest `k > 0` with `a^k = e`.
    ///
    /// Returns `None` if no such `k` exists up to `bound`.
    fn order_of(&self, a: &Self::Element, bound: u64) -> Option<u64>
    where
        Self::Element: PartialEq,
    {
        let e = self.identity();
        let mut acc = a.clone();
        for k in 1..=bound {
            if acc == e {
                return Some(k);
            }
            acc = self.binary_operation(a, &acc);
        }
        None
    }
}
