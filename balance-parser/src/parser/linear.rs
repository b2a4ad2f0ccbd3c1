use std::ops::{Add, Neg, Sub};

/// The value of a parsed expression, `x * coefficient + constant`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear {
    /// The coefficient of `x`.
    pub x: f64,

    /// The constant term.
    pub constant: f64,
}

/// Why two linear forms could not be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineError {
    /// The result would contain `x` squared, or `x` in a denominator.
    NonLinear,

    /// The divisor is the constant zero.
    DivisionByZero,
}

impl Linear {
    /// The variable `x` itself.
    pub const X: Self = Self { x: 1.0, constant: 0.0 };

    /// A constant expression.
    pub fn constant(value: f64) -> Self {
        Self { x: 0.0, constant: value }
    }

    /// Returns true if the expression involves `x`.
    pub fn has_x(&self) -> bool {
        self.x != 0.0
    }

    /// Multiplies two forms; at most one of them may involve `x`.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, CombineError> {
        if self.has_x() && rhs.has_x() {
            return Err(CombineError::NonLinear);
        }

        Ok(Self {
            x: self.x * rhs.constant + rhs.x * self.constant,
            constant: self.constant * rhs.constant,
        })
    }

    /// Divides by a form that must be a nonzero constant.
    pub fn checked_div(self, rhs: Self) -> Result<Self, CombineError> {
        if rhs.has_x() {
            return Err(CombineError::NonLinear);
        }
        if rhs.constant == 0.0 {
            return Err(CombineError::DivisionByZero);
        }

        Ok(Self {
            x: self.x / rhs.constant,
            constant: self.constant / rhs.constant,
        })
    }
}

impl Add for Linear {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, constant: self.constant + rhs.constant }
    }
}

impl Sub for Linear {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, constant: self.constant - rhs.constant }
    }
}

impl Neg for Linear {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, constant: -self.constant }
    }
}
