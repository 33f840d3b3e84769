//! Host-language function definitions.

use fegen_core::ValueKind;

use super::EmitConfig;
use super::writer::Writer;
use crate::error::SemanticError;
use crate::manager::{Function, Manager};
use crate::render::Render;
use crate::stmt::Stmt;

pub(super) fn emit(manager: &Manager, config: &EmitConfig) -> crate::Result<String> {
    let mut w = Writer::new(&config.indent);
    for line in config.summary.lines() {
        w.line(&format!("// {line}"));
    }
    w.newline();
    for function in manager.functions() {
        emit_function(&mut w, function).map_err(|e| e.at(&function.name()))?;
        w.newline();
    }
    Ok(w.finish())
}

fn emit_function(w: &mut Writer<'_>, function: &Function) -> Result<(), SemanticError> {
    let ret = match function.return_type() {
        Some(ty) => ty.to_cpp_string()?,
        None => "void".to_owned(),
    };
    let params = function
        .params()
        .iter()
        .map(|param| -> Result<String, SemanticError> {
            Ok(format!("{} {}", param.ty().to_cpp_string()?, param.name()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    w.line(&format!("{ret} {}({}) {{", function.name(), params.join(", ")))
        .indent();
    emit_stmts(w, function.body())?;
    w.dedent().line("}");
    Ok(())
}

fn emit_stmts(w: &mut Writer<'_>, stmts: &[Stmt]) -> Result<(), SemanticError> {
    stmts.iter().try_for_each(|stmt| emit_stmt(w, stmt))
}

fn emit_block(w: &mut Writer<'_>, stmts: &[Stmt]) -> Result<(), SemanticError> {
    w.indent();
    emit_stmts(w, stmts)?;
    w.dedent();
    Ok(())
}

fn emit_stmt(w: &mut Writer<'_>, stmt: &Stmt) -> Result<(), SemanticError> {
    match stmt {
        // Attributes and operands have no host-side storage.
        Stmt::VarDecl(value) if value.ty().value_kind() != ValueKind::Cpp => {}
        Stmt::VarDecl(value) => {
            let ty = value.ty().to_cpp_string()?;
            if value.is_initialized() {
                let init = value.content().to_cpp_string()?;
                w.line(&format!("{ty} {} = {init};", value.name()));
            } else {
                w.line(&format!("{ty} {};", value.name()));
            }
        }
        Stmt::Assign { target, value } => {
            w.line(&format!("{} = {};", target.name(), value.to_cpp_string()?));
        }
        Stmt::Expr(expr) => {
            w.line(&format!("{};", expr.to_cpp_string()?));
        }
        Stmt::If {
            cond,
            then,
            otherwise,
        } => {
            w.line(&format!("if ({}) {{", strip_parens(&cond.to_cpp_string()?)));
            emit_block(w, then)?;
            if let Some(otherwise) = otherwise {
                w.line("} else {");
                emit_block(w, otherwise)?;
            }
            w.line("}");
        }
        Stmt::For {
            var,
            iterable,
            body,
        } => {
            w.line(&format!(
                "for ({} {} : {}) {{",
                var.ty().to_cpp_string()?,
                var.name(),
                iterable.to_cpp_string()?
            ));
            emit_block(w, body)?;
            w.line("}");
        }
        Stmt::Return(None) => {
            w.line("return;");
        }
        Stmt::Return(Some(value)) => {
            w.line(&format!("return {};", value.to_cpp_string()?));
        }
    }
    Ok(())
}

/// `(a < b)` is already parenthesized by the `if`.
fn strip_parens(cond: &str) -> &str {
    match cond.strip_prefix('(').and_then(|c| c.strip_suffix(')')) {
        Some(inner) if balanced(inner) => inner,
        _ => cond,
    }
}

fn balanced(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}
