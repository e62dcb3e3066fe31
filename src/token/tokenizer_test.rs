use super::*;

use crate::atom::policy_ascii;


fn kinds(input: &str) -> Vec<TokenKind> {
    Tokenizer::default()
        .tokenize(input)
        .unwrap()
        .into_iter()
        .map(Token::into_kind)
        .collect()
}

fn sym(name: &str) -> TokenKind {
    TokenKind::Atom(Atom::sym(name).unwrap())
}

fn num(n: i64) -> TokenKind {
    TokenKind::Atom(Number::Integer(n).into())
}


#[test]
fn nested() {
    use TokenKind::*;
    assert_eq!(
        kinds("(testing (this (out)))"),
        vec![
            LeftParen,
            sym("testing"),
            LeftParen,
            sym("this"),
            LeftParen,
            sym("out"),
            RightParen,
            RightParen,
            RightParen,
        ]
    );
}

#[test]
fn newlines() {
    assert_eq!(
        kinds("\n(testing\n\n (\nthis (out))\n)"),
        kinds("(testing (this (out)))")
    );
}

#[test]
fn positions() {
    let tokens = Tokenizer::default().tokenize("(a\n  bc)").unwrap();
    let positions = tokens
        .iter()
        .map(|token| (*token.line(), *token.col()))
        .collect::<Vec<_>>();
    assert_eq!(positions, vec![(0, 0), (0, 1), (1, 2), (1, 4)]);
}

#[test]
fn numbers() {
    assert_eq!(
        kinds("1 -4 +33 128"),
        vec![num(1), num(-4), num(33), num(128)]
    );
    assert_eq!(
        kinds("1.5 -0.25 2e3"),
        vec![
            TokenKind::Atom(Number::Float(1.5).into()),
            TokenKind::Atom(Number::Float(-0.25).into()),
            TokenKind::Atom(Number::Float(2000.0).into()),
        ]
    );
    // Not numbers.
    assert_eq!(kinds("- 1a .5"), vec![sym("-"), sym("1a"), sym(".5")]);
    // Non-ASCII digits.
    assert_eq!(kinds("١٢ ٣.٤"), vec![sym("١٢"), sym("٣.٤")]);
}

#[test]
fn bools() {
    assert_eq!(
        kinds("True False true"),
        vec![
            TokenKind::Atom(Bool(true).into()),
            TokenKind::Atom(Bool(false).into()),
            sym("true"),
        ]
    );
}

#[test]
fn variables() {
    assert_eq!(
        kinds("$x x"),
        vec![TokenKind::Atom(Atom::var("x").unwrap()), sym("x")]
    );
    assert!(Tokenizer::default().tokenize("$").is_err());
}

#[test]
fn strings() {
    assert_eq!(
        kinds(r#"("a b" "q\"uote" "esc\\\n")"#),
        vec![
            TokenKind::LeftParen,
            TokenKind::Atom(Str::new("a b").into()),
            TokenKind::Atom(Str::new("q\"uote").into()),
            TokenKind::Atom(Str::new("esc\\\n").into()),
            TokenKind::RightParen,
        ]
    );
    assert_eq!(
        kinds("\"multi\nline\""),
        vec![TokenKind::Atom(Str::new("multi\nline").into())]
    );
    assert_eq!(
        kinds("a\"b\"c"),
        vec![sym("a"), TokenKind::Atom(Str::new("b").into()), sym("c")]
    );
}

#[test]
fn unterminated_string() {
    let err = Tokenizer::default().tokenize("(a \"open").unwrap_err();
    assert!(matches!(err.kind(), TokenizeErrorKind::UnterminatedString));
    assert_eq!((err.line(), err.col()), (0, 3));
}

#[test]
fn comments() {
    assert_eq!(
        kinds("(a ; trailing (\nb)"),
        vec![
            TokenKind::LeftParen,
            sym("a"),
            TokenKind::Comment(" trailing (".to_string()),
            sym("b"),
            TokenKind::RightParen,
        ]
    );
    assert_eq!(
        kinds("\"in ; string\""),
        vec![TokenKind::Atom(Str::new("in ; string").into())]
    );
}

#[test]
fn name_policy() {
    let err = Tokenizer::with_defaults(policy_ascii)
        .tokenize("(ok λ)")
        .unwrap_err();
    assert!(matches!(err.kind(), TokenizeErrorKind::InvalidName(_)));
    assert_eq!(err.col(), 4);
    assert!(Tokenizer::default().tokenize("(ok λ)").is_ok());
}

#[test]
fn register_token() {
    #[derive(Debug, PartialEq)]
    struct Id(u32);

    fn render_id(id: &Id, w: &mut dyn fmt::Write) -> fmt::Result {
        write!(w, "#{}", id.0)
    }

    let mut tokenizer = Tokenizer::default();
    tokenizer
        .register_token(r"#\d+", |s| {
            s[1..]
                .parse::<u32>()
                .map(|id| Atom::grounded(Id(id), render_id))
                .map_err(|err| err.to_string())
        })
        .unwrap();

    let tokens = tokenizer
        .tokenize("#12 x#1")
        .unwrap()
        .into_iter()
        .map(Token::into_kind)
        .collect::<Vec<_>>();
    assert_eq!(tokens[0], TokenKind::Atom(Atom::grounded(Id(12), render_id)));
    assert_eq!(tokens[1], sym("x#1"));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn constructor_failure() {
    let mut tokenizer = Tokenizer::default();
    tokenizer
        .register_token("#.*", |s| Err(format!("rejected {}", s)))
        .unwrap();
    let err = tokenizer.tokenize("(a #b)").unwrap_err();
    assert!(matches!(
        err.kind(),
        TokenizeErrorKind::Constructor { token, .. } if token == "#b"
    ));
}

#[test]
fn later_registration_wins() {
    let mut tokenizer = Tokenizer::default();
    tokenizer
        .register_token(r"\d+", |s| Atom::sym(format!("n{}", s)).map_err(|e| e.to_string()))
        .unwrap();
    assert_eq!(
        tokenizer.tokenize("7").unwrap()[0],
        Token::new(sym("n7"), 0, 0)
    );
    assert!(tokenizer
        .register_token("(unclosed", |s| Atom::sym(s).map_err(|e| e.to_string()))
        .is_err());
}

#[test]
fn depth_of_input() {
    assert_eq!(open_depth("(a (b"), 2);
    assert_eq!(open_depth("(a (b))"), 0);
    assert_eq!(open_depth("(a \"(\""), 1);
    assert_eq!(open_depth("(a ; )"), 1);
    assert_eq!(open_depth("\"open"), 1);
    assert_eq!(open_depth("\"esc\\\"\")"), 0);
}
