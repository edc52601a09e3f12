use tracing::debug;

use crate::{
    ast::statements::{
        BlockStmt, ExpressionStmt, ForStmt, IfElseStmt, IfStmt, PrintStmt, Stmt, WhileStmt,
    },
    ast::expressions::{Expr, VariableExpr},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Tokens that introduce a statement other than an expression statement.
const STATEMENT_KEYWORDS: [TokenKind; 5] = [
    TokenKind::Print,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::OpenCurly,
];

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.match_kinds(&STATEMENT_KEYWORDS);

    if let Some(keyword) = &keyword {
        debug!(kind = ?keyword.kind, line = keyword.line, "parsing statement");
    }

    match keyword.map(|token| token.kind) {
        Some(TokenKind::Print) => parse_print_stmt(parser),
        Some(TokenKind::If) => parse_if_stmt(parser),
        Some(TokenKind::While) => parse_while_stmt(parser),
        Some(TokenKind::For) => parse_for_stmt(parser),
        Some(TokenKind::OpenCurly) => parse_block_stmt(parser),
        // Nothing was consumed, so only `;` or an expression can follow.
        _ => parse_fallback_stmt(parser),
    }
}

/// `print <identifier> ;`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.require(&[TokenKind::Identifier])?;
    parser.require(&[TokenKind::Semicolon])?;

    Ok(Stmt::Print(PrintStmt {
        target: VariableExpr { token },
    }))
}

/// `if ( <expr> ) <stmt> [else <stmt>]`
///
/// The else is looked for straight after the then branch, so it always
/// belongs to the innermost open `if`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let condition = parse_condition(parser)?;
    let then_branch = Box::new(parse_stmt(parser)?);

    if parser.match_kinds(&[TokenKind::Else]).is_none() {
        return Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
        }));
    }

    let else_branch = Box::new(parse_stmt(parser)?);

    Ok(Stmt::IfElse(IfElseStmt {
        condition,
        then_branch,
        else_branch,
    }))
}

/// `while ( <expr> ) <stmt>`
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let condition = parse_condition(parser)?;
    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::While(WhileStmt { body, condition }))
}

/// `for ( <stmt> <expr> ; <expr-list> ) <stmt>`
///
/// The initializer is a full statement and brings its own `;`. The step is
/// an expression list closed directly by `)`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.require(&[TokenKind::OpenParen])?;

    let init = Box::new(parse_stmt(parser)?);
    let condition = parse_expr(parser)?;
    parser.require(&[TokenKind::Semicolon])?;
    let step = parse_expression_list(parser)?;

    parser.require(&[TokenKind::CloseParen])?;
    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::For(ForStmt {
        body,
        init,
        condition,
        step,
    }))
}

/// `{ <stmt>* }`, called after the opening brace.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let mut statements = Vec::new();

    while parser.match_kinds(&[TokenKind::CloseCurly]).is_none() {
        if !parser.has_tokens() {
            return Err(parser.unexpected(&[TokenKind::CloseCurly]));
        }

        statements.push(parse_stmt(parser)?);
    }

    Ok(Stmt::Block(BlockStmt { body: statements }))
}

/// A lone `;`, otherwise an expression list terminated by `;`.
fn parse_fallback_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.match_kinds(&[TokenKind::Semicolon]).is_some() {
        return Ok(Stmt::Empty);
    }

    let stmt = parse_expression_list(parser)?;
    parser.require(&[TokenKind::Semicolon])?;

    Ok(Stmt::Expression(stmt))
}

/// One or more comma separated expressions, without a terminator.
pub fn parse_expression_list(parser: &mut Parser) -> Result<ExpressionStmt, Error> {
    let mut expressions = vec![parse_expr(parser)?];

    while parser.match_kinds(&[TokenKind::Comma]).is_some() {
        expressions.push(parse_expr(parser)?);
    }

    Ok(ExpressionStmt { expressions })
}

fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    parser.require(&[TokenKind::OpenParen])?;
    let condition = parse_expr(parser)?;
    parser.require(&[TokenKind::CloseParen])?;

    Ok(condition)
}
