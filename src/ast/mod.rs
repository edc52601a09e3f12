/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Expression node variants
/// - statements: Statement node variants and the Program sequence
/// - display: Canonical source rendering for every node
pub mod display;
pub mod expressions;
pub mod statements;
