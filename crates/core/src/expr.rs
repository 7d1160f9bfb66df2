//! The expression tree and its simplifying constructors.

mod display;
mod leaf;
mod ops;

pub use leaf::{Leaf, VariantError};

/// A symbolic expression over named real variables.
///
/// Each node owns its children exclusively, so an `Expr` is a plain tree with
/// no sharing and no cycles. Trees are never mutated after construction; every
/// combinator consumes its operands and returns a new tree.
///
/// Build expressions with [`Expr::sum`], [`Expr::product`], [`Expr::negate`],
/// and [`Expr::difference`] (or the `+`, `*`, `-` operators) rather than the
/// variants directly. These constructors apply a small, fixed set of
/// simplifications eagerly:
///
/// - `0 + e` and `e + 0` collapse to `e`
/// - `0 * e` and `e * 0` collapse to `0`
/// - `1 * e` and `e * 1` collapse to `e`
/// - an operation on two constants folds to a single constant
///
/// Nothing else is simplified: terms are never reordered or combined.
///
/// `Expr` deliberately does not implement `PartialEq` or `Hash`. Only leaves
/// have an identity; use [`Leaf`] (via [`Expr::leaf`]) to compare or hash them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// The sum of two subexpressions.
    Sum(Box<Expr>, Box<Expr>),

    /// The product of two subexpressions.
    Product(Box<Expr>, Box<Expr>),

    /// A real constant.
    Constant(f64),

    /// A named variable.
    Variable(String),
}

impl Expr {
    /// Creates a constant.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable with the given name.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Returns `lhs + rhs`, simplified.
    #[must_use]
    pub fn sum(lhs: Expr, rhs: Expr) -> Self {
        if lhs.is_constant(0.0) {
            return rhs;
        }
        if rhs.is_constant(0.0) {
            return lhs;
        }
        match (&lhs, &rhs) {
            (Self::Constant(a), Self::Constant(b)) => Self::Constant(a + b),
            _ => Self::Sum(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// Returns `lhs * rhs`, simplified.
    #[must_use]
    pub fn product(lhs: Expr, rhs: Expr) -> Self {
        if lhs.is_constant(0.0) || rhs.is_constant(0.0) {
            return Self::Constant(0.0);
        }
        if lhs.is_constant(1.0) {
            return rhs;
        }
        if rhs.is_constant(1.0) {
            return lhs;
        }
        match (&lhs, &rhs) {
            (Self::Constant(a), Self::Constant(b)) => Self::Constant(a * b),
            _ => Self::Product(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// Returns `-self`.
    ///
    /// The sign is pushed into the tree rather than wrapped around it:
    ///
    /// - a constant is negated in place
    /// - a variable `v` becomes `-1 * v`
    /// - a product negates its left factor only
    /// - a sum negates both of its terms
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Constant(value) => Self::Constant(-value),
            var @ Self::Variable(_) => Self::Product(Box::new(Self::Constant(-1.0)), Box::new(var)),
            Self::Product(lhs, rhs) => Self::product((*lhs).negate(), *rhs),
            Self::Sum(lhs, rhs) => Self::sum((*lhs).negate(), (*rhs).negate()),
        }
    }

    /// Returns `lhs - rhs`, built as `lhs + negate(rhs)`.
    #[must_use]
    pub fn difference(lhs: Expr, rhs: Expr) -> Self {
        Self::sum(lhs, rhs.negate())
    }

    /// Returns the residual of the equation `lhs = rhs`.
    ///
    /// The residual is `lhs - rhs`, which is zero exactly when the equation
    /// holds. Residuals are what [`cost_function`](crate::cost_function)
    /// combines into an objective.
    #[must_use]
    pub fn equation(lhs: Expr, rhs: Expr) -> Self {
        Self::difference(lhs, rhs)
    }

    /// Returns the first term of a sum.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a [`Expr::Sum`].
    #[must_use]
    pub fn addend(&self) -> &Expr {
        match self {
            Self::Sum(lhs, _) => lhs,
            _ => self.wrong_variant("sum"),
        }
    }

    /// Returns the second term of a sum.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a [`Expr::Sum`].
    #[must_use]
    pub fn augend(&self) -> &Expr {
        match self {
            Self::Sum(_, rhs) => rhs,
            _ => self.wrong_variant("sum"),
        }
    }

    /// Returns the first factor of a product.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a [`Expr::Product`].
    #[must_use]
    pub fn multiplier(&self) -> &Expr {
        match self {
            Self::Product(lhs, _) => lhs,
            _ => self.wrong_variant("product"),
        }
    }

    /// Returns the second factor of a product.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a [`Expr::Product`].
    #[must_use]
    pub fn multiplicand(&self) -> &Expr {
        match self {
            Self::Product(_, rhs) => rhs,
            _ => self.wrong_variant("product"),
        }
    }

    /// Returns this node as a [`Leaf`], or `None` for sums and products.
    #[must_use]
    pub fn leaf(&self) -> Option<Leaf<'_>> {
        Leaf::try_from(self).ok()
    }

    /// Returns the value if this is a constant.
    #[must_use]
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the name if this is a variable.
    #[must_use]
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns a short name for this node's variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sum(..) => "sum",
            Self::Product(..) => "product",
            Self::Constant(_) => "constant",
            Self::Variable(_) => "variable",
        }
    }

    #[allow(clippy::float_cmp)]
    fn is_constant(&self, value: f64) -> bool {
        self.as_constant().is_some_and(|c| c == value)
    }

    fn wrong_variant(&self, expected: &'static str) -> ! {
        let error = VariantError {
            expected,
            found: self.kind(),
        };
        panic!("wrong expression variant: {error}")
    }
}
