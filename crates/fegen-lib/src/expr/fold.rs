//! Constant folding.
//!
//! Integer arithmetic is checked: overflow, division by zero and negative
//! exponents make the expression non-foldable instead of wrapping. So does an
//! integer result the node's inferred width cannot hold.

use std::cmp::Ordering;

use fegen_core::Operator;

use super::{Expr, RightValue};

/// Result of folding a constant expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Constant {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl Constant {
    fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Float(_) | Self::String(_) => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            Self::Bool(b) => Some(f64::from(u8::from(*b))),
            Self::String(_) => None,
        }
    }
}

impl RightValue {
    /// Evaluate the expression at compile time.
    ///
    /// `None` when the expression is not constant-foldable (placeholders, calls,
    /// type literals) or when evaluation fails.
    pub fn fold(&self) -> Option<Constant> {
        if !self.is_constant() {
            return None;
        }
        match self.expr() {
            Expr::Integer { value, width: 1 } => Some(Constant::Bool(*value != 0)),
            Expr::Integer { value, .. } => Some(Constant::Int(*value)),
            Expr::Float { value, .. } => Some(Constant::Float(*value)),
            Expr::String(value) => Some(Constant::String(value.clone())),
            Expr::LeftValue(left) => left.binding().fold(),
            Expr::Unary { op, operand } => self.fit(fold_unary(*op, operand.fold()?)?),
            Expr::Binary { op, lhs, rhs } => self.fit(fold_binary(*op, lhs.fold()?, rhs.fold()?)?),
            Expr::PlaceHolder
            | Expr::Type(_)
            | Expr::List(_)
            | Expr::FunctionCall { .. }
            | Expr::OperationCall { .. } => None,
        }
    }

    /// `folded` if this node's integer type can hold it. Width 1 is a boolean.
    fn fit(&self, folded: Constant) -> Option<Constant> {
        let Constant::Int(v) = folded else {
            return Some(folded);
        };
        match self.ty().width() {
            Some(1) if v == 0 || v == 1 => Some(Constant::Bool(v == 1)),
            Some(1) => None,
            Some(width @ 2..64) => {
                let bound = 1i64 << (width - 1);
                (-bound..bound).contains(&v).then_some(folded)
            }
            _ => Some(folded),
        }
    }

    /// Folded integer value, e.g. a type width.
    pub fn as_integer(&self) -> Option<i64> {
        match self.fold()? {
            Constant::Int(v) => Some(v),
            _ => None,
        }
    }
}

fn fold_unary(op: Operator, operand: Constant) -> Option<Constant> {
    match (op, operand) {
        (Operator::Neg, Constant::Int(v)) => v.checked_neg().map(Constant::Int),
        (Operator::Neg, Constant::Float(v)) => Some(Constant::Float(-v)),
        (Operator::Not, Constant::Bool(b)) => Some(Constant::Bool(!b)),
        _ => None,
    }
}

fn fold_binary(op: Operator, lhs: Constant, rhs: Constant) -> Option<Constant> {
    match (op, &lhs, &rhs) {
        (Operator::And, Constant::Bool(a), Constant::Bool(b)) => Some(Constant::Bool(*a && *b)),
        (Operator::Or, Constant::Bool(a), Constant::Bool(b)) => Some(Constant::Bool(*a || *b)),
        _ if op.is_arithmetic() => match (lhs.as_i64(), rhs.as_i64()) {
            (Some(a), Some(b)) => int_arith(op, a, b).map(Constant::Int),
            _ => float_arith(op, lhs.as_f64()?, rhs.as_f64()?).map(Constant::Float),
        },
        _ if op.is_comparison() => compare(op, &lhs, &rhs).map(Constant::Bool),
        _ => None,
    }
}

fn int_arith(op: Operator, a: i64, b: i64) -> Option<i64> {
    match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => a.checked_div(b),
        Operator::Mod => a.checked_rem(b),
        Operator::Power => u32::try_from(b).ok().and_then(|e| a.checked_pow(e)),
        _ => None,
    }
}

fn float_arith(op: Operator, a: f64, b: f64) -> Option<f64> {
    match op {
        Operator::Add => Some(a + b),
        Operator::Sub => Some(a - b),
        Operator::Mul => Some(a * b),
        Operator::Div if b == 0.0 => None,
        Operator::Div => Some(a / b),
        Operator::Mod if b == 0.0 => None,
        Operator::Mod => Some(a % b),
        Operator::Power => Some(a.powf(b)),
        _ => None,
    }
}

fn compare(op: Operator, lhs: &Constant, rhs: &Constant) -> Option<bool> {
    let ordering: Ordering = match (lhs, rhs) {
        (Constant::String(a), Constant::String(b)) => a.cmp(b),
        _ => match (lhs.as_i64(), rhs.as_i64()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => lhs.as_f64()?.partial_cmp(&rhs.as_f64()?)?,
        },
    };
    match op {
        Operator::Equal => Some(ordering.is_eq()),
        Operator::NotEqual => Some(ordering.is_ne()),
        Operator::Less => Some(ordering.is_lt()),
        Operator::LessEqual => Some(ordering.is_le()),
        Operator::Greater => Some(ordering.is_gt()),
        Operator::GreaterEqual => Some(ordering.is_ge()),
        _ => None,
    }
}
