use std::rc::Rc;

use super::*;
use crate::types::{Type, TypeLevel, builtins};
use crate::value::Value;

fn int32() -> crate::types::TypeRef {
    Rc::new(Type::int(32))
}

#[test]
fn builtins_are_preinstalled() {
    let manager = Manager::new("Toy");

    let names: Vec<&str> = manager.type_defs().map(|def| def.name()).collect();
    assert_eq!(
        names,
        [
            "PlaceHolder",
            "Type",
            "TypeTemplate",
            "Integer",
            "FloatPoint",
            "String",
            "Vector",
            "List",
            "Tensor",
            "Optional",
            "Any",
        ]
    );
    assert_eq!(manager.custom_type_defs().count(), 0);
    assert_eq!(manager.module_name(), "Toy");
}

#[test]
fn type_redefinition_is_rejected() {
    let mut manager = Manager::new("Toy");
    let first = TypeDef::new("Toy", "Foo", vec![Value::uninit("n", int32())]);
    let second = TypeDef::new("Toy", "Foo", vec![]);

    assert!(manager.add_type_def(first));
    assert!(!manager.add_type_def(second));

    let foo = manager.type_def("Foo").unwrap();
    assert_eq!(foo.params().len(), 1);
    assert_eq!(foo.id(), builtins::CUSTOM_START);
    assert_eq!(manager.custom_type_defs().count(), 1);
}

#[test]
fn builtin_names_are_taken() {
    let mut manager = Manager::new("Toy");

    assert!(!manager.add_type_def(TypeDef::new("Toy", "Integer", vec![])));
    assert!(!manager.type_def("Integer").unwrap().is_custom());
}

#[test]
fn unknown_type_name() {
    let manager = Manager::new("Toy");

    let err = manager.type_def("Matrix").unwrap_err();

    assert_eq!(
        err,
        SemanticError::UnknownIdentifier {
            name: "Matrix".to_owned(),
        }
    );
    assert!(manager.get_type_def("Matrix").is_none());
}

#[test]
fn bare_type_names() {
    let manager = Manager::new("Toy");
    let level = |name: &str| manager.resolve_type_name(name).unwrap().level();

    assert_eq!(level("PlaceHolder"), TypeLevel::PlaceHolder);
    assert_eq!(level("TypeTemplate"), TypeLevel::MetaTemplate);
    assert_eq!(level("Type"), TypeLevel::Template);
    assert_eq!(level("List"), TypeLevel::Template);
    assert_eq!(level("String"), TypeLevel::Instance);
}

#[test]
fn operations_keep_first_definition() {
    let mut manager = Manager::new("Toy");
    let result = vec![Value::uninit("result", int32())];

    assert!(manager.add_operation(Operation::new("Toy", "add", vec![], result, vec![])));
    assert!(manager.add_operation(Operation::new("Toy", "mul", vec![], vec![], vec![])));
    assert!(!manager.add_operation(Operation::new("Toy", "add", vec![], vec![], vec![])));

    assert_eq!(manager.get_operation("add").unwrap().results().len(), 1);
    let names: Vec<&str> = manager.operations().map(Operation::name).collect();
    assert_eq!(names, ["add", "mul"]);
}

#[test]
fn function_redefinition_is_rejected() {
    let mut manager = Manager::new("Toy");

    assert!(manager.add_function(Function::new("f", vec![], Some(int32()), vec![])));
    assert!(!manager.add_function(Function::new("f", vec![], None, vec![])));

    assert!(manager.get_function("f").unwrap().return_type().is_some());
    assert_eq!(manager.functions().count(), 1);
}

#[test]
fn rule_redefinition_is_rejected() {
    let mut manager = Manager::new("Toy");
    let rule = |content: &str| Rule::new(content, vec![], vec![], vec![]);

    assert!(manager.add_rule_node(RuleNode::new("expr", RuleKind::Parser, vec![rule("a")])));
    assert!(manager.add_rule_node(RuleNode::new("ID", RuleKind::Lexer, vec![rule("[a-z]+")])));
    assert!(!manager.add_rule_node(RuleNode::new("expr", RuleKind::Parser, vec![rule("b")])));

    let expr = manager.get_rule_node("expr").unwrap();
    assert_eq!(expr.rules()[0].content(), "a");
    let names: Vec<&str> = manager.rule_nodes().map(RuleNode::name).collect();
    assert_eq!(names, ["expr", "ID"]);
}

#[test]
#[should_panic(expected = "is not registered")]
fn unknown_id_panics() {
    let manager = Manager::new("Toy");
    manager.type_def_by_id(TypeDefId::from_index(99));
}
