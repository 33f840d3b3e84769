use super::*;

fn int(value: i64) -> Expr {
    Expr::Int { value, width: None }
}

fn ident(name: &str) -> Expr {
    Expr::Ident {
        name: name.to_owned(),
    }
}

#[test]
fn type_expr() {
    let ty = TypeExpr::Instance {
        template: "Vector".to_owned(),
        args: vec![
            Expr::Type {
                ty: TypeExpr::Instance {
                    template: "Integer".to_owned(),
                    args: vec![int(32)],
                },
            },
            int(4),
        ],
    };

    assert_eq!(ty.to_string(), "Vector<Integer<32>, 4>");
}

#[test]
fn nested_binary_is_parenthesized() {
    let expr = Expr::Binary {
        op: Operator::Mul,
        lhs: Box::new(Expr::Binary {
            op: Operator::Add,
            lhs: Box::new(int(2)),
            rhs: Box::new(ident("x")),
        }),
        rhs: Box::new(Expr::Unary {
            op: Operator::Neg,
            operand: Box::new(Expr::Float {
                value: 3.0,
                width: None,
            }),
        }),
    };

    assert_eq!(expr.to_string(), "(2 + x) * -3.0");
}

#[test]
fn statements() {
    let stmt = Stmt::If {
        cond: Expr::Bool { value: true },
        then: vec![Stmt::Assign {
            name: "x".to_owned(),
            value: Expr::String {
                value: "a".to_owned(),
            },
        }],
        otherwise: Some(vec![Stmt::Return { value: None }]),
    };

    assert_eq!(stmt.to_string(), r#"if (true) { x = "a"; } else { return; }"#);
}

#[test]
fn item_headers() {
    let item = Item::Function(FunctionDecl {
        name: "add".to_owned(),
        params: vec![Param {
            name: "a".to_owned(),
            ty: TypeExpr::Name {
                name: "String".to_owned(),
            },
            value_kind: Some(ValueKind::Operand),
            init: None,
        }],
        return_type: None,
        body: vec![Stmt::Return { value: None }],
    });

    assert_eq!(item.to_string(), "function add(operand String a)");
}
