//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Operator precedence and associativity
//! - Unary operator composition
//! - Control flow statements and blocks
//! - The token matching primitives
//! - Syntax errors

use crate::{
    ast::{
        expressions::Expr,
        statements::{Program, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
};

use super::{
    expr::parse_expr,
    parser::{parse, Parser},
    stmt::parse_stmt,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.arith".to_string())).unwrap();
    parse(tokens)
}

fn render_expr(source: &str) -> String {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let mut parser = Parser::new(tokens);
    let expr = parse_expr(&mut parser).unwrap();
    assert!(!parser.has_tokens(), "expression did not consume all input");
    expr.to_string()
}

fn render_program(source: &str) -> Vec<String> {
    parse_source(source)
        .unwrap()
        .iter()
        .map(|stmt| stmt.to_string())
        .collect()
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(render_expr("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(render_expr("1 * 2 + 3"), "((1 * 2) + 3)");
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(render_expr("8 - 3 - 2"), "((8 - 3) - 2)");
    assert_eq!(render_expr("8 / 4 / 2"), "((8 / 4) / 2)");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(render_expr("a = b = 5"), "(a = (b = 5))");
    assert_eq!(render_expr("a += b -= 1"), "(a += (b -= 1))");
}

#[test]
fn test_assignment_has_lowest_precedence() {
    assert_eq!(render_expr("a = b || c"), "(a = (b || c))");
    assert_eq!(render_expr("x |= y & 1"), "(x |= (y & 1))");
}

#[test]
fn test_full_precedence_ladder() {
    assert_eq!(
        render_expr("a || b && c | d ^ e & f == g < h + i * j"),
        "(a || (b && (c | (d ^ (e & (f == (g < (h + (i * j)))))))))"
    );
}

#[test]
fn test_equality_is_looser_than_relational() {
    assert_eq!(render_expr("a < b == c >= d"), "((a < b) == (c >= d))");
    assert_eq!(render_expr("a != b == c"), "((a != b) == c)");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(render_expr("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(render_expr("(a = 1) + 2"), "((a = 1) + 2)");
}

#[test]
fn test_prefix_operators_apply_innermost_first() {
    assert_eq!(render_expr("!-x"), "(!(-x))");
    assert_eq!(render_expr("- ! - x"), "(-(!(-x)))");
}

#[test]
fn test_postfix_binds_tighter_than_prefix() {
    assert_eq!(render_expr("-x++"), "(-(x++))");
    assert_eq!(render_expr("!(a + b)--"), "(!((a + b)--))");
}

#[test]
fn test_unary_structure() {
    let tokens = tokenize("!-x".to_string(), None).unwrap();
    let expr = parse_expr(&mut Parser::new(tokens)).unwrap();

    let Expr::Unary(not) = expr else {
        panic!("expected unary expression");
    };
    assert_eq!(not.operator.kind, TokenKind::Not);

    let Expr::Unary(negate) = *not.operand else {
        panic!("expected nested unary expression");
    };
    assert_eq!(negate.operator.kind, TokenKind::Dash);
    assert!(matches!(*negate.operand, Expr::Variable(ref v) if v.name() == "x"));
}

#[test]
fn test_only_one_postfix_operator() {
    let tokens = tokenize("x++ ++".to_string(), None).unwrap();
    let mut parser = Parser::new(tokens);

    assert_eq!(parse_expr(&mut parser).unwrap().to_string(), "(x++)");
    assert!(parser.has_tokens());
}

#[test]
fn test_number_value() {
    let tokens = tokenize("3.25".to_string(), None).unwrap();
    let expr = parse_expr(&mut Parser::new(tokens)).unwrap();

    match expr {
        Expr::Number(number) => {
            assert_eq!(number.value, 3.25);
            assert_eq!(number.token.value, "3.25");
        }
        _ => panic!("expected number"),
    }
}

#[test]
fn test_parse_print() {
    let program = parse_source("print x;").unwrap();

    assert_eq!(program.len(), 1);
    match &program[0] {
        Stmt::Print(print) => assert_eq!(print.target.name(), "x"),
        other => panic!("expected print, found {:?}", other),
    }
}

#[test]
fn test_dangling_else_binds_to_inner_if() {
    let program = parse_source("if (a) if (b) print x; else print y;").unwrap();

    assert_eq!(program.len(), 1);
    let Stmt::If(outer) = &program[0] else {
        panic!("outer statement should be an if without else");
    };
    assert!(matches!(*outer.then_branch, Stmt::IfElse(_)));
}

#[test]
fn test_if_else() {
    assert_eq!(
        render_program("if (a < 1) print a; else { print b; }"),
        vec!["if ((a < 1)) print a; else { print b; }"]
    );
}

#[test]
fn test_empty_block() {
    let program = parse_source("{ }").unwrap();

    match &program[0] {
        Stmt::Block(block) => assert!(block.is_empty()),
        other => panic!("expected block, found {:?}", other),
    }
}

#[test]
fn test_nested_blocks() {
    assert_eq!(
        render_program("{ a = 1; { b = 2; } ; }"),
        vec!["{ (a = 1); { (b = 2); } ; }"]
    );
}

#[test]
fn test_while() {
    let program = parse_source("while (i < 10) i = i + 1;").unwrap();

    let Stmt::While(stmt) = &program[0] else {
        panic!("expected while");
    };
    assert_eq!(stmt.condition.to_string(), "(i < 10)");
    assert_eq!(stmt.body.to_string(), "(i = (i + 1));");
}

#[test]
fn test_for_header() {
    let program = parse_source("for (i = 0; i < 10; i = i + 1) print i;").unwrap();

    let Stmt::For(stmt) = &program[0] else {
        panic!("expected for");
    };
    assert!(matches!(*stmt.init, Stmt::Expression(_)));
    assert_eq!(stmt.init.to_string(), "(i = 0);");
    assert_eq!(stmt.condition.to_string(), "(i < 10)");
    assert_eq!(stmt.step.expressions.len(), 1);
    assert_eq!(stmt.step.to_string(), "(i = (i + 1))");
    assert!(matches!(*stmt.body, Stmt::Print(_)));
}

#[test]
fn test_for_with_empty_init_and_step_list() {
    let program = parse_source("for (; i; i++, j--) { }").unwrap();

    let Stmt::For(stmt) = &program[0] else {
        panic!("expected for");
    };
    assert_eq!(*stmt.init, Stmt::Empty);
    assert_eq!(stmt.step.expressions.len(), 2);
}

#[test]
fn test_for_rejects_semicolon_after_step() {
    let error = parse_source("for (i = 0; i < 10; i++;) print i;").unwrap_err();

    assert!(error.is_syntax_error());
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: vec![TokenKind::CloseParen],
            found: ";".to_string(),
        }
    );
}

#[test]
fn test_expression_list_statement() {
    let program = parse_source("a = 1, b = 2;").unwrap();

    let Stmt::Expression(stmt) = &program[0] else {
        panic!("expected expression statement");
    };
    let rendered: Vec<String> = stmt.iter().map(|expr| expr.to_string()).collect();
    assert_eq!(rendered, vec!["(a = 1)", "(b = 2)"]);
}

#[test]
fn test_empty_statements() {
    assert_eq!(parse_source(";;").unwrap(), vec![Stmt::Empty, Stmt::Empty]);
}

#[test]
fn test_program_order_is_preserved() {
    assert_eq!(
        render_program("print a; b = 1; { } print c;"),
        vec!["print a;", "(b = 1);", "{ }", "print c;"]
    );
}

#[test]
fn test_empty_program() {
    assert!(parse(vec![]).unwrap().is_empty());
}

#[test]
fn test_print_without_identifier_fails() {
    let error = parse_source("print ;").unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_line(), Some(1));
}

#[test]
fn test_missing_semicolon_at_end_has_no_line() {
    let error = parse_source("x = 42").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: vec![TokenKind::Semicolon],
        }
    );
    assert_eq!(error.get_line(), None);
}

#[test]
fn test_missing_close_paren() {
    let error = parse_source("x = (1 + 2;").unwrap_err();

    assert!(matches!(error.get_impl(), ErrorImpl::UnexpectedToken { .. }));
}

#[test]
fn test_unclosed_block() {
    let error = parse_source("{ print x;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: vec![TokenKind::CloseCurly],
        }
    );
}

#[test]
fn test_operand_expected() {
    let error = parse_source("x = * 2;").unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::ExpectedOperand);

    let error = parse_source("else print x;").unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::ExpectedOperand);
}

#[test]
fn test_error_line_is_offending_token() {
    let error = parse_source("a = 1;\nb = 2;\nprint 3;").unwrap_err();

    assert_eq!(error.get_line(), Some(3));
}

#[test]
fn test_while_requires_parenthesised_condition() {
    let error = parse_source("while x print x;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: vec![TokenKind::OpenParen],
            found: "x".to_string(),
        }
    );
}

#[test]
fn test_invalid_number_token() {
    let tokens = vec![Token {
        kind: TokenKind::Number,
        value: "1.2.3".to_string(),
        line: 5,
    }];

    let error = parse_expr(&mut Parser::new(tokens)).unwrap_err();
    assert!(matches!(error.get_impl(), ErrorImpl::NumberParseError { .. }));
    assert_eq!(error.get_line(), Some(5));
}

#[test]
fn test_match_does_not_move_on_mismatch() {
    let mut parser = Parser::new(vec![Token::symbol(TokenKind::Semicolon, 1)]);

    assert!(parser.match_kinds(&[TokenKind::Comma]).is_none());
    assert_eq!(parser.get_position(), 0);

    let token = parser.match_kinds(&[TokenKind::Comma, TokenKind::Semicolon]).unwrap();
    assert_eq!(token.kind, TokenKind::Semicolon);
    assert_eq!(parser.get_position(), 1);

    assert!(parser.match_kinds(&[TokenKind::Semicolon]).is_none());
    assert_eq!(parser.get_position(), 1);
}

#[test]
fn test_require_at_end_of_stream() {
    let mut parser = Parser::new(vec![]);

    let error = parser.require(&[TokenKind::Identifier]).unwrap_err();
    assert_eq!(error.get_line(), None);
    assert!(error.is_syntax_error());
}

#[test]
fn test_hand_built_tokens() {
    // print x ; built without the tokenizer
    let tokens = vec![
        Token::symbol(TokenKind::Print, 2),
        Token {
            kind: TokenKind::Identifier,
            value: "x".to_string(),
            line: 2,
        },
        Token::symbol(TokenKind::Semicolon, 2),
    ];
    let mut parser = Parser::new(tokens);

    let stmt = parse_stmt(&mut parser).unwrap();
    assert_eq!(stmt.to_string(), "print x;");
    assert!(!parser.has_tokens());
}
