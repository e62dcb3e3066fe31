use super::*;

use crate::error::ErrKind;


#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

fn render_point(p: &Point, w: &mut dyn fmt::Write) -> fmt::Result {
    write!(w, "<{},{}>", p.x, p.y)
}

fn render_point_alt(p: &Point, w: &mut dyn fmt::Write) -> fmt::Result {
    write!(w, "Point({}, {})", p.x, p.y)
}


#[test]
fn symbol_equality() {
    assert_eq!(Atom::sym("foo").unwrap(), Atom::sym("foo").unwrap());
    assert_ne!(Atom::sym("foo").unwrap(), Atom::sym("bar").unwrap());
}

#[test]
fn variable_differs_from_symbol() {
    let var = Atom::var("x").unwrap();
    let sym = Atom::sym("x").unwrap();
    assert_ne!(var, sym);
    assert_eq!(var, Atom::var("x").unwrap());
    assert_eq!(var.as_variable().unwrap().name(), "x");
    assert!(var.as_symbol().is_none());
}

#[test]
fn invalid_names() {
    for name in &["", "has space", "(paren", "quo\"te", "semi;colon", "tab\t"] {
        let err = Atom::sym(name).unwrap_err();
        assert!(
            matches!(err.kind(), ErrKind::InvalidName(_)),
            "{:?} accepted",
            name
        );
        assert!(matches!(
            Atom::var(name).unwrap_err().kind(),
            ErrKind::InvalidName(_)
        ));
    }
}

#[test]
fn symbol_cannot_look_like_variable() {
    assert!(matches!(
        Atom::sym("$x").unwrap_err().consume(),
        ErrKind::InvalidName(NameError::VariableMarkerPrefix(_))
    ));
}

#[test]
fn unicode_names() {
    assert!(Atom::sym("λ").is_ok());
    assert!(Atom::sym_with("λ", policy_ascii).is_err());
    assert!(Atom::sym_with("lambda", policy_ascii).is_ok());
}

#[test]
fn grounded_equality_ignores_renderer() {
    let a = Atom::grounded(Point { x: 1, y: 2 }, render_point);
    let b = Atom::grounded(Point { x: 1, y: 2 }, render_point_alt);
    let c = Atom::grounded(Point { x: 2, y: 1 }, render_point);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a, a.clone());
}

#[test]
fn grounded_types_do_not_mix() {
    assert_ne!(Atom::value(5i64), Atom::from(Number::Integer(5)));
    assert_ne!(
        Atom::from(Number::Integer(1)),
        Atom::from(Number::Float(1.0))
    );
    assert_ne!(Atom::from(Str::new("True")), Atom::from(Bool(true)));
}

#[test]
fn grounded_downcast() {
    let point = Atom::grounded(Point { x: 3, y: 4 }, render_point);
    assert_eq!(point.as_gnd::<Point>(), Some(&Point { x: 3, y: 4 }));
    assert!(point.as_gnd::<Number>().is_none());

    let num = Atom::from(Number::Integer(42));
    assert_eq!(num.as_gnd::<Number>().and_then(Number::as_i64), Some(42));
    assert!(Atom::sym("42").unwrap().as_gnd::<Number>().is_none());
}

#[test]
fn grounded_type() {
    let undefined = Atom::grounded(Point { x: 0, y: 0 }, render_point);
    assert_eq!(
        undefined.as_grounded().unwrap().type_(),
        Atom::sym("%Undefined%").unwrap()
    );
    assert_eq!(
        Atom::from(Number::Float(0.5)).as_grounded().unwrap().type_(),
        Atom::sym("Number").unwrap()
    );
    assert_eq!(
        Atom::from(Str::new("s")).as_grounded().unwrap().type_(),
        Atom::sym("String").unwrap()
    );
}

#[test]
fn expression_children_and_depth() {
    let inner = Atom::expr(vec![Atom::sym("bar").unwrap(), Atom::sym("baz").unwrap()]).unwrap();
    let outer = Atom::expr(vec![Atom::sym("foo").unwrap(), inner.clone()]).unwrap();

    assert_eq!(outer.children().len(), 2);
    assert_eq!(outer.children()[1], inner);
    assert_eq!(inner.depth(), 1);
    assert_eq!(outer.depth(), 2);
    assert_eq!(Atom::sym("leaf").unwrap().depth(), 0);
    assert!(Atom::sym("leaf").unwrap().children().is_empty());

    assert!(inner.as_expr().unwrap().is_plain());
    assert!(!outer.as_expr().unwrap().is_plain());
}

#[test]
fn empty_expression() {
    let empty = Atom::expr(vec![]).unwrap();
    assert!(empty.as_expr().unwrap().is_empty());
    assert_eq!(empty.depth(), 1);
    assert_eq!(empty.to_string(), "()");
}

#[test]
fn expression_order_matters() {
    let a = Atom::sym("a").unwrap();
    let b = Atom::sym("b").unwrap();
    assert_ne!(
        Atom::expr(vec![a.clone(), b.clone()]).unwrap(),
        Atom::expr(vec![b, a]).unwrap()
    );
}

#[test]
fn expression_depth_limit() {
    let mut atom = Atom::sym("x").unwrap();
    for _ in 0..3 {
        atom = Atom::expr(vec![atom]).unwrap();
    }
    assert_eq!(atom.depth(), 3);

    let limits = Limits::with_max_depth(3);
    let err = Atom::expr_with(vec![atom.clone()], limits).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrKind::ResourceExhausted { depth: 4, limit: 3 }
    ));
    assert!(Atom::expr_with(atom.children().to_vec(), limits).is_ok());
}

#[test]
fn shared_subtrees() {
    let shared = Atom::expr(vec![Atom::sym("s").unwrap()]).unwrap();
    let parent = Atom::expr(vec![shared.clone(), shared.clone()]).unwrap();
    assert_eq!(parent.children()[0], parent.children()[1]);

    let handle = std::thread::spawn(move || parent.to_string());
    assert_eq!(handle.join().unwrap(), "((s) (s))");
    assert_eq!(shared.to_string(), "(s)");
}

#[test]
fn try_from_variants() {
    let sym = Atom::sym("foo").unwrap();
    let symbol = SymbolAtom::try_from(sym.clone()).unwrap();
    assert_eq!(symbol.name(), "foo");
    assert_eq!(Atom::from(symbol), sym);

    let var = Atom::var("v").unwrap();
    assert_eq!(<&SymbolAtom>::try_from(&var), Err(&var));
}

#[test]
fn display_matches_render() {
    let atom = Atom::expr(vec![
        Atom::sym("test").unwrap(),
        Atom::var("var").unwrap(),
        Atom::grounded(Point { x: 1, y: 2 }, render_point),
    ])
    .unwrap();
    assert_eq!(format!("{}", atom), "(test $var <1,2>)");
    assert_eq!(format!("{:?}", atom), "(test $var <1,2>)");
}
