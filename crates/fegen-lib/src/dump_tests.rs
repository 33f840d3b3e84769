use std::rc::Rc;

use crate::Colors;
use crate::dump::dump;
use crate::manager::{Function, Manager, Operation, Rule, RuleKind, RuleNode};
use crate::types::{Type, TypeDef};
use crate::value::Value;

fn int32(name: &str) -> Value {
    Value::uninit(name, Rc::new(Type::int(32)))
}

fn toy() -> Manager {
    let mut manager = Manager::new("Toy");
    manager.add_type_def(TypeDef::new("Toy", "Matrix", vec![int32("rows"), int32("cols")]));
    manager.add_operation(Operation::new(
        "Toy",
        "add",
        vec![int32("lhs")],
        vec![int32("result")],
        vec![],
    ));
    manager.add_function(Function::new(
        "twice",
        vec![int32("a")],
        Some(Rc::new(Type::int(32))),
        vec![],
    ));
    manager.add_rule_node(RuleNode::new(
        "expr",
        RuleKind::Parser,
        vec![
            Rule::new("a", vec![], vec![], vec![]),
            Rule::new("b", vec![], vec![], vec![]),
        ],
    ));
    manager
}

#[test]
fn dump_registry() {
    let res = dump(&toy(), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    [module]
    Toy

    [types]
    #0  PlaceHolder() level 0 builtin
    #1  Type() level 2 builtin
    #2  TypeTemplate() level 1 builtin
    #3  Integer(size: Integer<32>) level 2 builtin
    #4  FloatPoint(size: Integer<32>) level 2 builtin
    #5  String() level 3 builtin
    #6  Vector(elementType: Type, size: Integer<32>) level 2 builtin
    #7  List(elementType: Type) level 2 builtin
    #8  Tensor(elementType: Type, shape: List<Integer<32>>) level 2 builtin
    #9  Optional(elementType: Type) level 2 builtin
    #10 Any(elementType: List<Type>) level 2 builtin
    #11 Matrix(rows: Integer<32>, cols: Integer<32>) level 2 custom

    [operations]
    add(lhs: Integer<32>) -> (result: Integer<32>)

    [functions]
    twice(a: Integer<32>) -> Integer<32>

    [rules]
    expr (parser)
      : a
      | b
    ");
}

#[test]
fn dump_shows_bound_content() {
    let mut manager = Manager::new("Toy");
    let scale = Value::new(
        "scale",
        Rc::new(Type::int(32)),
        crate::expr::RightValue::integer(2),
    );
    manager.add_function(Function::new("f", vec![scale], None, vec![]));

    let res = dump(&manager, Colors::OFF);

    assert!(res.contains("f(scale: Integer<32> = 2)\n"));
}

#[test]
fn dump_colored() {
    let res = dump(&toy(), Colors::ON);

    assert!(res.contains("\x1b[34mToy\x1b[0m"));
    assert!(res.contains("\x1b[32ma\x1b[0m"));
}
