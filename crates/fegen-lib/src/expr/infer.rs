//! Result types of operator applications.

use fegen_core::Operator;

use crate::error::SemanticError;
use crate::types::{Shape, Type};

/// Numeric operand: its kind and constant bit width.
struct Numeric {
    float: bool,
    width: u32,
}

pub(super) fn unary(op: Operator, operand: &Type) -> Result<Type, SemanticError> {
    match op {
        Operator::Not => {
            require_bool(operand)?;
            Ok(Type::bool())
        }
        Operator::Neg => {
            let operand = numeric(operand)?;
            Ok(numeric_type(&operand))
        }
        _ => Err(misapplied(op, 1)),
    }
}

/// Comparisons give `Integer<1>`. Logical operators require `Integer<1>`
/// operands. Arithmetic promotes to `FloatPoint` if either side is one, at the
/// larger width.
pub(super) fn binary(op: Operator, lhs: &Type, rhs: &Type) -> Result<Type, SemanticError> {
    if op.is_unary() {
        return Err(misapplied(op, 2));
    }
    if op.is_comparison() {
        return Ok(Type::bool());
    }
    if op.is_logical() {
        require_bool(lhs)?;
        require_bool(rhs)?;
        return Ok(Type::bool());
    }
    let (lhs, rhs) = (numeric(lhs)?, numeric(rhs)?);
    Ok(numeric_type(&Numeric {
        float: lhs.float || rhs.float,
        width: lhs.width.max(rhs.width),
    }))
}

fn numeric(ty: &Type) -> Result<Numeric, SemanticError> {
    let float = match ty.shape() {
        Shape::Integer { .. } => false,
        Shape::FloatPoint { .. } => true,
        _ => return Err(SemanticError::type_mismatch("numeric type", ty.name())),
    };
    let width = ty
        .width()
        .ok_or_else(|| SemanticError::type_mismatch("numeric type of constant width", ty.name()))?;
    Ok(Numeric { float, width })
}

fn numeric_type(numeric: &Numeric) -> Type {
    if numeric.float {
        Type::float(numeric.width)
    } else {
        Type::int(numeric.width)
    }
}

fn require_bool(ty: &Type) -> Result<(), SemanticError> {
    if ty.is_bool() {
        Ok(())
    } else {
        Err(SemanticError::type_mismatch("Integer<1>", ty.name()))
    }
}

/// A unary operator applied to two operands, or the other way round.
fn misapplied(op: Operator, found: usize) -> SemanticError {
    SemanticError::ArityMismatch {
        name: op.symbol().to_owned(),
        expected: if found == 1 { 2 } else { 1 },
        found,
    }
}
