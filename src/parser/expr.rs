//! Expression parsing by precedence climbing.
//!
//! Each precedence level has its own function which parses operands at the
//! next tighter level. From loosest to tightest:
//!
//! | Level          | Operators                                  | Assoc |
//! |----------------|--------------------------------------------|-------|
//! | assignment     | `=` `+=` `-=` `/=` `*=` `&=` `^=` `\|=`    | right |
//! | logical or     | `\|\|`                                     | left  |
//! | logical and    | `&&`                                       | left  |
//! | bitwise or     | `\|`                                       | left  |
//! | bitwise xor    | `^`                                        | left  |
//! | bitwise and    | `&`                                        | left  |
//! | equality       | `==` `!=`                                  | left  |
//! | relational     | `<` `<=` `>` `>=`                          | left  |
//! | additive       | `+` `-`                                    | left  |
//! | multiplicative | `*` `/`                                    | left  |
//! | unary          | prefix `!` `-`, postfix `++` `--`          |       |
//! | grouping       | `( expr )`                                 |       |
//! | primary        | number, identifier                         |       |

use crate::{
    ast::expressions::{BinaryExpr, Expr, NumberExpr, UnaryExpr, VariableExpr, ASSIGNMENT_OPERATORS},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// A single precedence level.
pub type ExprHandler = fn(&mut Parser) -> Result<Expr, Error>;

/// Entry point for a full expression.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// Parses `lhs op rhs` where the right hand side re-enters this level, so
/// `a = b = 1` groups as `a = (b = 1)`. At most one operator is consumed
/// per call.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_logical_or_expr(parser)?;

    match parser.match_kinds(&ASSIGNMENT_OPERATORS) {
        Some(operator) => {
            let right = parse_assignment_expr(parser)?;
            Ok(binary(operator, left, right))
        }
        None => Ok(left),
    }
}

pub fn parse_logical_or_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Or], parse_logical_and_expr)
}

pub fn parse_logical_and_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::And], parse_bitwise_or_expr)
}

pub fn parse_bitwise_or_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Pipe], parse_bitwise_xor_expr)
}

pub fn parse_bitwise_xor_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Caret], parse_bitwise_and_expr)
}

pub fn parse_bitwise_and_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Ampersand], parse_equality_expr)
}

pub fn parse_equality_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(
        parser,
        &[TokenKind::Equals, TokenKind::NotEquals],
        parse_relational_expr,
    )
}

pub fn parse_relational_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(
        parser,
        &[
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
        ],
        parse_additive_expr,
    )
}

pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(
        parser,
        &[TokenKind::Plus, TokenKind::Dash],
        parse_multiplicative_expr,
    )
}

pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Star, TokenKind::Slash], parse_unary_expr)
}

/// Left associative run of `operators`, each operand parsed by `next`.
fn parse_binary_expr(
    parser: &mut Parser,
    operators: &[TokenKind],
    next: ExprHandler,
) -> Result<Expr, Error> {
    let mut left = next(parser)?;

    while let Some(operator) = parser.match_kinds(operators) {
        let right = next(parser)?;
        left = binary(operator, left, right);
    }

    Ok(left)
}

/// Prefix operators wrap whatever the postfix step produced, innermost
/// first: `!-x` is `!(-x)` and `-x++` is `-(x++)`.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut prefixes = vec![];
    while let Some(operator) = parser.match_kinds(&[TokenKind::Not, TokenKind::Dash]) {
        prefixes.push(operator);
    }

    let mut expr = parse_grouping_expr(parser)?;

    if let Some(operator) = parser.match_kinds(&[TokenKind::PlusPlus, TokenKind::MinusMinus]) {
        expr = unary(operator, expr);
    }

    while let Some(operator) = prefixes.pop() {
        expr = unary(operator, expr);
    }

    Ok(expr)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_kinds(&[TokenKind::OpenParen]).is_none() {
        return parse_primary_expr(parser);
    }

    let expr = parse_expr(parser)?;
    parser.require(&[TokenKind::CloseParen])?;

    Ok(expr)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if let Some(token) = parser.match_kinds(&[TokenKind::Number]) {
        return match token.value.parse() {
            Ok(value) => Ok(Expr::Number(NumberExpr { value, token })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value.clone() },
                Some(token.line),
            )),
        };
    }

    if let Some(token) = parser.match_kinds(&[TokenKind::Identifier]) {
        return Ok(Expr::Variable(VariableExpr { token }));
    }

    Err(parser.error_here(ErrorImpl::ExpectedOperand))
}

fn unary(operator: Token, operand: Expr) -> Expr {
    Expr::Unary(UnaryExpr {
        operator,
        operand: Box::new(operand),
    })
}

fn binary(operator: Token, left: Expr, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}
