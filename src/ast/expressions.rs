use crate::lexer::tokens::{Token, TokenKind};

/// Expression node.
///
/// Every child is owned by exactly one parent, so a parsed tree is a strict
/// forest with no sharing between nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Line of the token the node was built around.
    pub fn line(&self) -> u32 {
        match self {
            Expr::Number(number) => number.token.line,
            Expr::Variable(variable) => variable.token.line,
            Expr::Unary(unary) => unary.operator.line,
            Expr::Binary(binary) => binary.operator.line,
        }
    }
}

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub token: Token,
}

/// Variable Expression
/// Represents an identifier operand.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub token: Token,
}

impl VariableExpr {
    pub fn name(&self) -> &str {
        &self.token.value
    }
}

// OPERATORS

/// Unary Expression
/// Prefix `!` and `-`, or postfix `++` and `--`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

impl UnaryExpr {
    pub fn is_postfix(&self) -> bool {
        self.operator.is_one_of_many(&[TokenKind::PlusPlus, TokenKind::MinusMinus])
    }
}

/// Binary Expression
/// Arithmetic, relational, equality, bitwise, logical and assignment operators.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn is_assignment(&self) -> bool {
        self.operator.is_one_of_many(&ASSIGNMENT_OPERATORS)
    }
}

pub const ASSIGNMENT_OPERATORS: [TokenKind; 8] = [
    TokenKind::Assignment,
    TokenKind::PlusEquals,
    TokenKind::MinusEquals,
    TokenKind::SlashEquals,
    TokenKind::StarEquals,
    TokenKind::AmpersandEquals,
    TokenKind::CaretEquals,
    TokenKind::PipeEquals,
];
