//! Canonical source rendering.
//!
//! Expressions are fully parenthesised so the rendered text parses back to
//! a tree of the same shape.

use std::fmt::{Display, Formatter, Result};

use super::{
    expressions::{BinaryExpr, Expr, UnaryExpr},
    statements::{ExpressionStmt, Stmt},
};

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number.token),
            Expr::Variable(variable) => write!(f, "{}", variable.token),
            Expr::Unary(unary) => write!(f, "{}", unary),
            Expr::Binary(binary) => write!(f, "{}", binary),
        }
    }
}

impl Display for UnaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_postfix() {
            write!(f, "({}{})", self.operand, self.operator)
        } else {
            write!(f, "({}{})", self.operator, self.operand)
        }
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl Display for ExpressionStmt {
    /// Renders the list without a terminator, as it appears in a `for` step.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, expression) in self.expressions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", expression)?;
        }
        Ok(())
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Print(print) => write!(f, "print {};", print.target.token),
            Stmt::If(stmt) => write!(f, "if ({}) {}", stmt.condition, stmt.then_branch),
            Stmt::IfElse(stmt) => write!(
                f,
                "if ({}) {} else {}",
                stmt.condition, stmt.then_branch, stmt.else_branch
            ),
            Stmt::While(stmt) => write!(f, "while ({}) {}", stmt.condition, stmt.body),
            Stmt::For(stmt) => write!(
                f,
                "for ({} {}; {}) {}",
                stmt.init, stmt.condition, stmt.step, stmt.body
            ),
            Stmt::Block(block) => {
                write!(f, "{{")?;
                for stmt in block.iter() {
                    write!(f, " {}", stmt)?;
                }
                write!(f, " }}")
            }
            Stmt::Expression(stmt) => write!(f, "{};", stmt),
            Stmt::Empty => write!(f, ";"),
        }
    }
}
