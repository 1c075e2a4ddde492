//! Integration tests for the public scanning API.
//!
//! These tests drive the scanner the way a downstream parser or the command
//! line driver would: scan a whole source, then inspect tokens and errors.

use loxscan::{tokenize, ErrorImpl, Lexer, Literal, Token, TokenKind};
use pretty_assertions::assert_eq;

fn summary(tokens: &[Token]) -> Vec<(TokenKind, &str, usize)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.lexeme.as_str(), token.line))
        .collect()
}

const PROGRAM: &str = r#"// Greets everyone in the list.
class Greeter {
  init(name) {
    this.name = name;
  }

  greet() {
    print "Hello, " + this.name + "!";
  }
}

fun count(n) {
  for (var i = 0; i < n; i = i + 1) {
    if (i >= 2.5 and !(i == 3)) return nil;
  }
  while (true or false) { }
}

var greeter = Greeter("lox");
greeter.greet();
count(10 / 2 - 1 * 3);
"#;

#[test]
fn test_parenthesized_sum() {
    let (tokens, errors) = tokenize("(1 + 2)");

    assert!(!errors.has_errors());
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::LeftParen, "(", 1),
            (TokenKind::Number, "1", 1),
            (TokenKind::Plus, "+", 1),
            (TokenKind::Number, "2", 1),
            (TokenKind::RightParen, ")", 1),
            (TokenKind::EOF, "", 1),
        ]
    );
    assert_eq!(tokens[1].literal, Some(Literal::Number(1.0)));
    assert_eq!(tokens[3].literal, Some(Literal::Number(2.0)));
}

#[test]
fn test_comment_then_declaration() {
    let (tokens, errors) = tokenize("// comment\nvar x = 1;");

    assert!(!errors.has_errors());
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Var, "var", 2),
            (TokenKind::Identifier, "x", 2),
            (TokenKind::Equal, "=", 2),
            (TokenKind::Number, "1", 2),
            (TokenKind::Semicolon, ";", 2),
            (TokenKind::EOF, "", 2),
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let (tokens, errors) = tokenize("\"unterminated");

    assert_eq!(summary(&tokens), vec![(TokenKind::EOF, "", 1)]);
    assert_eq!(errors.error_count(), 1);
    assert_eq!(errors.errors()[0].get_kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(errors.errors()[0].get_line(), 1);
    assert_eq!(
        errors.errors()[0].to_string(),
        "[line 1] Error: Unterminated string"
    );
}

#[test]
fn test_bang_and_bang_equal() {
    let (tokens, _) = tokenize("!=");
    assert_eq!(summary(&tokens), vec![(TokenKind::BangEqual, "!=", 1), (TokenKind::EOF, "", 1)]);

    let (tokens, _) = tokenize("!");
    assert_eq!(summary(&tokens), vec![(TokenKind::Bang, "!", 1), (TokenKind::EOF, "", 1)]);
}

#[test]
fn test_unexpected_character() {
    let (tokens, errors) = tokenize("@");

    assert_eq!(summary(&tokens), vec![(TokenKind::EOF, "", 1)]);
    assert_eq!(errors.error_count(), 1);
    assert_eq!(
        errors.errors()[0].get_kind(),
        &ErrorImpl::UnexpectedCharacter { character: '@' }
    );
    assert!(errors.errors()[0].to_string().contains("Unexpected character"));
    assert!(errors.errors()[0].to_string().contains('@'));
}

#[test]
fn test_keyword_prefix_is_not_short_circuited() {
    let (tokens, _) = tokenize("or orchid");

    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Or, "or", 1),
            (TokenKind::Identifier, "orchid", 1),
            (TokenKind::EOF, "", 1),
        ]
    );
}

#[test]
fn test_program_scans_cleanly() {
    let (tokens, errors) = tokenize(PROGRAM);

    assert!(!errors.has_errors());
    assert_eq!(tokens.iter().filter(|token| token.kind == TokenKind::EOF).count(), 1);
    assert_eq!(tokens.last().map(|token| token.line), Some(22));

    let class = &tokens[0];
    assert_eq!((class.kind, class.line), (TokenKind::Class, 2));

    let greeting = tokens
        .iter()
        .find(|token| token.kind == TokenKind::String)
        .cloned();
    assert_eq!(
        greeting,
        Some(Token::new(
            TokenKind::String,
            "\"Hello, \"".to_string(),
            Some(Literal::String("Hello, ".to_string())),
            8,
        ))
    );

    let fraction = tokens
        .iter()
        .find(|token| token.lexeme == "2.5")
        .and_then(|token| token.literal.clone());
    assert_eq!(fraction, Some(Literal::Number(2.5)));
}

#[test]
fn test_last_token_is_eof_with_line_count() {
    let sources = [
        "",
        "\n\n\n",
        "print 1;\nprint 2;",
        "\"a\nb\nc\"",
        "@\n#\n",
        "\"never closed\n\n",
        "// only a comment\n",
        PROGRAM,
    ];

    for source in sources {
        let (tokens, _) = tokenize(source);
        let eof = tokens.last().cloned();
        let newlines = source.matches('\n').count();

        assert_eq!(
            eof,
            Some(Token::new(TokenKind::EOF, String::new(), None, newlines + 1)),
            "source: {:?}",
            source
        );
    }
}

#[test]
fn test_lexemes_appear_in_source_order() {
    let (tokens, _) = tokenize(PROGRAM);

    let mut offset = 0;
    for token in tokens.iter().filter(|token| token.kind != TokenKind::EOF) {
        assert!(!token.lexeme.is_empty());
        let found = PROGRAM[offset..]
            .find(token.lexeme.as_str())
            .unwrap_or_else(|| panic!("{:?} not found after offset {}", token.lexeme, offset));
        offset += found + token.lexeme.len();
    }
}

#[test]
fn test_lines_never_decrease() {
    let (tokens, _) = tokenize(PROGRAM);

    assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));
}

#[test]
fn test_operator_lexemes_rescan_to_same_kind() {
    let (tokens, _) = tokenize("(){},.-+;/*! != = == > >= < <=");

    for token in tokens.iter().filter(|token| token.kind != TokenKind::EOF) {
        let (rescanned, errors) = tokenize(&token.lexeme);

        assert!(!errors.has_errors());
        assert_eq!(rescanned.len(), 2);
        assert_eq!(rescanned[0].kind, token.kind);
    }
}

#[test]
fn test_scanning_is_deterministic() {
    let source = "var a = \"x\";\n@ 1.5 . orchid\n\"open";

    let first = Lexer::new(source).scan_tokens();
    let second = Lexer::new(source).scan_tokens();

    assert_eq!(first, second);
    assert_eq!(first.1.error_count(), 2);
}
