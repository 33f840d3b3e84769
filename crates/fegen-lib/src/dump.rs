//! Human-readable registry dump for debugging.

use crate::{Colors, Role};
use crate::manager::Manager;
use crate::types::{TypeDef, TypeLevel};
use crate::value::Value;

/// Dump every table of the registry, in registration order.
pub fn dump(manager: &Manager, colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();

    let module = c.paint(Role::Name, manager.module_name());
    out.push_str(&format!("[module]\n{module}\n\n"));

    out.push_str("[types]\n");
    let width = width_for_count(manager.type_defs().count());
    for def in manager.type_defs() {
        let tag = if def.is_custom() { "custom" } else { "builtin" };
        let level = match def_level(manager, def) {
            Some(level) => format!("level {level}"),
            None => "level ?".to_owned(),
        };
        let index = format!("#{:<width$}", def.id().index());
        out.push_str(&format!(
            "{} {}({}) {}\n",
            c.paint(Role::Meta, &index),
            c.paint(Role::Name, def.name()),
            values(def.params()),
            c.paint(Role::Meta, &format!("{level} {tag}")),
        ));
    }
    out.push('\n');

    out.push_str("[operations]\n");
    for op in manager.operations() {
        out.push_str(&format!(
            "{}({}) -> ({})\n",
            c.paint(Role::Name, op.name()),
            values(op.arguments()),
            values(op.results()),
        ));
    }
    out.push('\n');

    out.push_str("[functions]\n");
    for function in manager.functions() {
        let ret = match function.return_type() {
            Some(ty) => format!(" -> {ty}"),
            None => String::new(),
        };
        out.push_str(&format!(
            "{}({}){ret}\n",
            c.paint(Role::Name, function.name()),
            values(function.params()),
        ));
    }
    out.push('\n');

    out.push_str("[rules]\n");
    for node in manager.rule_nodes() {
        let kind = format!("({})", node.kind().as_str());
        out.push_str(&format!(
            "{} {}\n",
            c.paint(Role::Name, node.name()),
            c.paint(Role::Meta, &kind)
        ));
        for (i, rule) in node.rules().iter().enumerate() {
            let lead = if i == 0 { ':' } else { '|' };
            let content = c.paint(Role::Content, rule.content());
            out.push_str(&format!("  {lead} {content}\n"));
        }
    }

    out
}

/// Level of the type a bare reference to `def` denotes.
fn def_level(manager: &Manager, def: &TypeDef) -> Option<TypeLevel> {
    manager
        .resolve_type_name(def.name())
        .ok()
        .map(|ty| ty.level())
}

/// `name: Type` pairs, with the bound content when present.
fn values(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| {
            if value.is_initialized() {
                format!("{}: {} = {}", value.name(), value.ty(), value.content())
            } else {
                format!("{}: {}", value.name(), value.ty())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Digits needed to print indices up to `count - 1`.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).to_string().len()
}
