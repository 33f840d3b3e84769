//! Source-like rendering of parse tree nodes.
//!
//! Used to point diagnostics at the offending construct. Statement bodies of
//! items are elided; expressions and statements render in full on one line.

use std::fmt::{self, Display, Formatter};

use super::{
    Alternative, Expr, FunctionDecl, Item, OperationDecl, Param, RuleDecl, Stmt, TypeDefDecl,
    TypeExpr,
};

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_block(f: &mut Formatter<'_>, stmts: &[Stmt]) -> fmt::Result {
    write!(f, "{{")?;
    for stmt in stmts {
        write!(f, " {stmt}")?;
    }
    write!(f, " }}")
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name { name } => write!(f, "{name}"),
            Self::Instance { template, args } => {
                write!(f, "{template}<")?;
                write_list(f, args)?;
                write!(f, ">")
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int { value, .. } => write!(f, "{value}"),
            Self::Float { value, .. } => write!(f, "{value:?}"),
            Self::Bool { value } => write!(f, "{value}"),
            Self::String { value } => write!(f, "{value:?}"),
            Self::List { elements } => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            }
            Self::Type { ty } => write!(f, "{ty}"),
            Self::Ident { name } => write!(f, "{name}"),
            Self::Unary { op, operand } => {
                write!(f, "{}", op.symbol())?;
                write_operand(f, operand)
            }
            Self::Binary { op, lhs, rhs } => {
                write_operand(f, lhs)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, rhs)
            }
            Self::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_list(f, args)?;
                write!(f, ")")
            }
        }
    }
}

/// Nested operator applications are parenthesized.
fn write_operand(f: &mut Formatter<'_>, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Binary { .. } => write!(f, "({expr})"),
        _ => write!(f, "{expr}"),
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(kind) = self.value_kind {
            write!(f, "{} ", kind.as_str())?;
        }
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(init) = &self.init {
            write!(f, " = {init}")?;
        }
        Ok(())
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::VarDecl {
                name,
                ty,
                value_kind,
                init,
            } => {
                if let Some(kind) = value_kind {
                    write!(f, "{} ", kind.as_str())?;
                }
                write!(f, "{ty} {name}")?;
                if let Some(init) = init {
                    write!(f, " = {init}")?;
                }
                write!(f, ";")
            }
            Self::Assign { name, value } => write!(f, "{name} = {value};"),
            Self::Expr { expr } => write!(f, "{expr};"),
            Self::If {
                cond,
                then,
                otherwise,
            } => {
                write!(f, "if ({cond}) ")?;
                write_block(f, then)?;
                if let Some(otherwise) = otherwise {
                    write!(f, " else ")?;
                    write_block(f, otherwise)?;
                }
                Ok(())
            }
            Self::For {
                var,
                ty,
                iterable,
                body,
            } => {
                write!(f, "for ({ty} {var} : {iterable}) ")?;
                write_block(f, body)
            }
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => write!(f, "return;"),
        }
    }
}

impl Display for TypeDefDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "typedef {}(", self.name)?;
        write_list(f, &self.params)?;
        write!(f, ")")
    }
}

impl Display for FunctionDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "function ")?;
        if let Some(ret) = &self.return_type {
            write!(f, "{ret} ")?;
        }
        write!(f, "{}(", self.name)?;
        write_list(f, &self.params)?;
        write!(f, ")")
    }
}

impl Display for OperationDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "opdef {}(", self.name)?;
        write_list(f, &self.arguments)?;
        write!(f, ") -> (")?;
        write_list(f, &self.results)?;
        write!(f, ")")
    }
}

impl Display for RuleDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} : ", self.name)?;
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", alt.content)?;
        }
        Ok(())
    }
}

impl Display for Alternative {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeDef(decl) => write!(f, "{decl}"),
            Self::Function(decl) => write!(f, "{decl}"),
            Self::Operation(decl) => write!(f, "{decl}"),
            Self::Rule(decl) => write!(f, "{decl}"),
        }
    }
}
