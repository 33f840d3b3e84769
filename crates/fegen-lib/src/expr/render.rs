use fegen_core::Operator;

use super::{Expr, RightValue};
use crate::error::SemanticError;
use crate::render::{Render, Target, render_joined};
use crate::types::Shape;

impl Render for RightValue {
    fn render(&self, target: Target) -> Result<String, SemanticError> {
        match (self.expr(), target) {
            (Expr::Type(ty), _) => ty.render(target),
            (Expr::List(elements), Target::Cpp) => {
                Ok(format!("{{{}}}", render_joined(elements, target)?))
            }
            (Expr::List(elements), _) => Ok(format!("[{}]", render_joined(elements, target)?)),
            (Expr::Unary { op, operand }, Target::Cpp) if operand.starts_with_sign() => {
                Ok(format!("{}({})", op.symbol(), operand.render(target)?))
            }
            (Expr::Unary { op, operand }, Target::Cpp) => {
                Ok(format!("{}{}", op.symbol(), operand.render(target)?))
            }
            (
                Expr::Binary {
                    op: Operator::Power,
                    lhs,
                    rhs,
                },
                Target::Cpp,
            ) => Ok(format!(
                "std::pow({}, {})",
                lhs.render(target)?,
                rhs.render(target)?
            )),
            (
                Expr::Binary {
                    op: Operator::Mod,
                    lhs,
                    rhs,
                },
                Target::Cpp,
            ) if matches!(self.ty().shape(), Shape::FloatPoint { .. }) => Ok(format!(
                "std::fmod({}, {})",
                lhs.render(target)?,
                rhs.render(target)?
            )),
            (Expr::Binary { op, lhs, rhs }, Target::Cpp) => Ok(format!(
                "({} {} {})",
                lhs.render(target)?,
                op.symbol(),
                rhs.render(target)?
            )),
            (
                Expr::FunctionCall { callee, args } | Expr::OperationCall { callee, args },
                Target::Cpp,
            ) => Ok(format!("{callee}({})", render_joined(args, target)?)),
            (
                Expr::Unary { .. }
                | Expr::Binary { .. }
                | Expr::FunctionCall { .. }
                | Expr::OperationCall { .. },
                _,
            ) => Err(SemanticError::UnsupportedRendering {
                subject: self.to_string(),
                target,
            }),
            (
                Expr::PlaceHolder
                | Expr::Integer { .. }
                | Expr::Float { .. }
                | Expr::String(_)
                | Expr::LeftValue(_),
                _,
            ) => Ok(self.to_string()),
        }
    }
}
