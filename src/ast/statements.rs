use std::slice::Iter;

use super::expressions::{Expr, VariableExpr};

/// Ordered top-level statements; order is execution order.
pub type Program = Vec<Stmt>;

/// Statement node.
///
/// `If` carries no else field at all; a statement with an else branch is
/// always `IfElse`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Print(PrintStmt),
    If(IfStmt),
    IfElse(IfElseStmt),
    While(WhileStmt),
    For(ForStmt),
    Block(BlockStmt),
    Expression(ExpressionStmt),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub target: VariableExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfElseStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub body: Box<Stmt>,
    pub condition: Expr,
}

/// `for (init condition; step) body`
///
/// `init` is a whole statement and owns its terminating `;`. `step` is an
/// expression list closed by the header's `)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub body: Box<Stmt>,
    pub init: Box<Stmt>,
    pub condition: Expr,
    pub step: ExpressionStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// One or more comma separated expressions, evaluated left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expressions: Vec<Expr>,
}

impl ExpressionStmt {
    pub fn iter(&self) -> Iter<'_, Expr> {
        self.expressions.iter()
    }
}
