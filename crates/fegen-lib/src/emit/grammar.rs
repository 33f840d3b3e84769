//! ANTLR grammar file.

use super::EmitConfig;
use super::writer::Writer;
use crate::manager::Manager;

pub(super) fn emit(manager: &Manager, config: &EmitConfig) -> String {
    let mut w = Writer::new(&config.indent);
    w.line(&format!("grammar {};", manager.module_name()));
    w.newline();
    for node in manager.rule_nodes() {
        w.line(node.name()).indent();
        for (i, rule) in node.rules().iter().enumerate() {
            let lead = if i == 0 { ":" } else { "|" };
            w.line(&format!("{lead} {}", rule.content()));
        }
        w.line(";").dedent().newline();
    }
    w.finish()
}
