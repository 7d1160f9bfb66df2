use std::ops::{Add, Mul, Neg, Sub};

use super::Expr;

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::sum(self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::difference(self, rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::product(self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.negate()
    }
}

/// Mixes constants into expressions, so `2.0 * x + 1.0` reads as written.
macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $build:path) => {
        impl $trait<f64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: f64) -> Expr {
                $build(self, Expr::constant(rhs))
            }
        }

        impl $trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                $build(Expr::constant(self), rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add, Expr::sum);
impl_scalar_op!(Sub, sub, Expr::difference);
impl_scalar_op!(Mul, mul, Expr::product);

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::constant(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::variable(name)
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::variable(name)
    }
}
