//! TableGen dialect, type and operation definition files.

use super::EmitConfig;
use super::writer::Writer;
use crate::Result;
use crate::manager::{Manager, Operation};
use crate::render::{Render, quote};
use crate::types::TypeDef;
use crate::value::Value;

fn guard(manager: &Manager, suffix: &str) -> String {
    format!("{}_{suffix}", manager.module_name().to_uppercase())
}

fn open_guard(w: &mut Writer<'_>, guard: &str) {
    w.line(&format!("#ifndef {guard}"));
    w.line(&format!("#define {guard}"));
    w.newline();
}

fn includes(w: &mut Writer<'_>, files: &[&str]) {
    for file in files {
        w.line(&format!("include \"{file}\""));
    }
    w.newline();
}

fn summary(w: &mut Writer<'_>, config: &EmitConfig) {
    w.line(&format!("let summary = {};", quote(&config.summary)));
    w.line(&format!("let description = [{{ {} }}];", config.summary));
}

pub(super) fn emit_dialect(manager: &Manager, config: &EmitConfig) -> String {
    let module = manager.module_name();
    let guard = guard(manager, "DIALECT_TD");
    let mut w = Writer::new(&config.indent);
    open_guard(&mut w, &guard);
    includes(&mut w, &["mlir/IR/OpBase.td"]);

    w.line(&format!("def {module}_Dialect : Dialect {{")).indent();
    w.line(&format!("let name = \"{module}\";"));
    summary(&mut w, config);
    w.line(&format!("let cppNamespace = \"::mlir::{module}\";"));
    w.line("let extraClassDeclaration = [{").indent();
    w.line("/// Register all types.");
    w.line("void registerTypes();");
    w.dedent().line("}];");
    w.dedent().line("}");
    w.newline();

    w.line(&format!("#endif // {guard}"));
    w.finish()
}

pub(super) fn emit_types(manager: &Manager, config: &EmitConfig) -> Result<String> {
    let module = manager.module_name();
    let guard = guard(manager, "TYPE_TD");
    let class = format!("{module}Type");
    let mut w = Writer::new(&config.indent);
    open_guard(&mut w, &guard);
    includes(
        &mut w,
        &["mlir/IR/AttrTypeBase.td", &format!("{module}Dialect.td")],
    );

    w.line(&format!(
        "class {class}<string typename, string typeMnemonic, list<Trait> traits = []>"
    ))
    .indent();
    w.line(&format!(": TypeDef<{module}_Dialect, typename, traits> {{"));
    w.line("let mnemonic = typeMnemonic;");
    w.dedent().line("}");
    w.newline();

    for def in manager.custom_type_defs() {
        emit_type_def(&mut w, config, &class, def)?;
        w.newline();
    }

    w.line(&format!("#endif // {guard}"));
    Ok(w.finish())
}

fn emit_type_def(w: &mut Writer<'_>, config: &EmitConfig, class: &str, def: &TypeDef) -> Result<()> {
    let construct = def.origin().unwrap_or(def.name());
    w.line(&format!(
        "def {} : {class}<\"{}\", \"{}\"> {{",
        def.name(),
        def.name(),
        def.mnemonic()
    ))
    .indent();
    summary(w, config);

    if !def.params().is_empty() {
        w.line("let parameters = (ins").indent();
        let last = def.params().len() - 1;
        for (i, param) in def.params().iter().enumerate() {
            let ty = param
                .ty()
                .to_typedef_string()
                .map_err(|e| e.at(&construct))?;
            let sep = if i == last { "" } else { "," };
            w.line(&format!("{ty}:${}{sep}", param.name()));
        }
        w.dedent().line(");");

        let names: Vec<String> = def
            .params()
            .iter()
            .map(|param| format!("${}", param.name()))
            .collect();
        w.line("let assemblyFormat = [{").indent();
        w.line(&format!("`<` {} `>`", names.join(" `x` ")));
        w.dedent().line("}];");
    }

    w.dedent().line("}");
    Ok(())
}

pub(super) fn emit_ops(manager: &Manager, config: &EmitConfig) -> Result<String> {
    let module = manager.module_name();
    let guard = guard(manager, "OPS_TD");
    let class = format!("{module}Op");
    let mut w = Writer::new(&config.indent);
    open_guard(&mut w, &guard);
    includes(
        &mut w,
        &[
            "mlir/IR/BuiltinAttributes.td",
            "mlir/IR/BuiltinTypes.td",
            "mlir/IR/CommonAttrConstraints.td",
            "mlir/Interfaces/SideEffectInterfaces.td",
            &format!("{module}Dialect.td"),
            &format!("{module}Types.td"),
        ],
    );

    w.line(&format!(
        "class {class}<string mnemonic, list<Trait> traits = []>"
    ))
    .indent();
    w.line(&format!(": Op<{module}_Dialect, mnemonic, traits>;"));
    w.dedent().newline();

    for operation in manager.operations() {
        emit_operation(&mut w, config, &class, operation)?;
        w.newline();
    }

    w.line(&format!("#endif // {guard}"));
    Ok(w.finish())
}

fn emit_operation(
    w: &mut Writer<'_>,
    config: &EmitConfig,
    class: &str,
    operation: &Operation,
) -> Result<()> {
    let name = operation.name();
    w.line(&format!("def {name} : {class}<\"{name}\", [Pure]> {{"))
        .indent();
    summary(w, config);
    operands(w, "let arguments = (ins", operation.arguments(), name)?;
    operands(w, "let results = (outs", operation.results(), name)?;
    w.dedent().line("}");
    Ok(())
}

fn operands(w: &mut Writer<'_>, head: &str, values: &[Value], construct: &str) -> Result<()> {
    w.line(head).indent();
    for (i, value) in values.iter().enumerate() {
        let ty = value
            .ty()
            .to_opdef_string()
            .map_err(|e| e.at(&construct))?;
        let sep = if i + 1 == values.len() { "" } else { "," };
        w.line(&format!("{ty}:${}{sep}", value.name()));
    }
    w.dedent().line(");");
    Ok(())
}
