/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// The tree is a closed set of node shapes, modelled as enums so consumers
/// pattern-match exhaustively. Nodes borrow their lexemes from the source
/// buffer, own their children and are never mutated after parsing.
///
/// Submodules:
/// - ast: The root `Program` node
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
pub mod ast;
pub mod expressions;
pub mod statements;
