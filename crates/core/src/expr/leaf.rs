use std::hash::{Hash, Hasher};

use thiserror::Error;

use super::Expr;

/// A borrowed view of a leaf expression: a constant or a variable.
///
/// Leaves are the only expressions with an identity. Two leaves are equal when
/// both are constants with the same value or both are variables with the same
/// name. Sums and products have no `Leaf` view, so they can never be compared
/// or used as map keys.
///
/// Constant equality treats `0.0` and `-0.0` as equal and every `NaN` as equal
/// to every other `NaN`, which keeps `Eq` and `Hash` consistent.
#[derive(Debug, Clone, Copy)]
pub enum Leaf<'a> {
    Constant(f64),
    Variable(&'a str),
}

/// Error returned when an expression is not the variant an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct VariantError {
    /// The variant the operation required.
    pub expected: &'static str,

    /// The variant that was found.
    pub found: &'static str,
}

impl<'a> TryFrom<&'a Expr> for Leaf<'a> {
    type Error = VariantError;

    fn try_from(expr: &'a Expr) -> Result<Self, Self::Error> {
        match expr {
            Expr::Constant(value) => Ok(Leaf::Constant(*value)),
            Expr::Variable(name) => Ok(Leaf::Variable(name)),
            Expr::Sum(..) | Expr::Product(..) => Err(VariantError {
                expected: "constant or variable",
                found: expr.kind(),
            }),
        }
    }
}

impl PartialEq for Leaf<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Leaf::Constant(a), Leaf::Constant(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Leaf::Variable(a), Leaf::Variable(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Leaf<'_> {}

impl Hash for Leaf<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Leaf::Constant(value) => {
                0u8.hash(state);
                canonical_bits(*value).hash(state);
            }
            Leaf::Variable(name) => {
                1u8.hash(state);
                name.hash(state);
            }
        }
    }
}

/// Bit pattern with `-0.0` folded into `0.0` and every `NaN` folded together.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}
