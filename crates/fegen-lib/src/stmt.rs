//! Resolved statements of function bodies, operation bodies and rule actions.

use crate::expr::RightValue;
use crate::value::Value;

#[derive(Clone, Debug)]
pub enum Stmt {
    /// Local declaration, with the initializer as content when present.
    VarDecl(Value),
    Assign {
        target: Value,
        value: RightValue,
    },
    Expr(RightValue),
    If {
        cond: RightValue,
        then: Vec<Stmt>,
        otherwise: Option<Vec<Stmt>>,
    },
    For {
        var: Value,
        iterable: RightValue,
        body: Vec<Stmt>,
    },
    Return(Option<RightValue>),
}
