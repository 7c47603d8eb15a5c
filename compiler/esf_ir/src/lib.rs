//! esf IR - Token and Syntax Tree Arenas
//!
//! This crate contains the core data structures shared by the esf lexer,
//! parser, and formatter:
//! - Tokens and the linked `TokenList` arena produced by the lexer
//! - `NodeKind`, `Node`, and the `NodeArena` produced by the parser
//!
//! # Design Philosophy
//!
//! - **Handles, not references**: nodes point into the token stream with
//!   `TokenId(u32)` handles, children with `NodeId(u32)` handles
//! - **Stable identity**: editing the token stream (inserting or removing
//!   whitespace) never invalidates existing `TokenId`s
//! - **Closed node set**: every node kind is a variant of [`NodeKind`], so
//!   kind-level properties are resolved statically

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod node;
mod token;

pub use node::{Node, NodeArena, NodeChildren, NodeId, NodeKind};
pub use token::{Token, TokenId, TokenKind, TokenList};
