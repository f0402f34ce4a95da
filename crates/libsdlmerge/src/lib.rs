//! Combine independently authored GraphQL SDL fragments into one document.
//!
//! A [`SyntaxTree`] owns a single parsed SDL document. Trees can be searched
//! by definition name, merged with SDL text, other ASTs, or other trees, and
//! printed back to SDL:
//!
//! ```
//! use libsdlmerge::SyntaxTree;
//!
//! let mut schema = SyntaxTree::empty_query();
//! schema.append_definitions("type Query { users: [String] }");
//! schema.append_definitions("type Query { posts: [String] }");
//!
//! let sdl = schema.to_sdl().unwrap();
//! assert!(sdl.contains("users"));
//! assert!(sdl.contains("posts"));
//! ```

pub mod ast;
mod ast_fragment;
mod definition_kind;
mod definition_matcher;
pub mod merge;
pub mod sdl_codec;
mod sdl_source;
mod syntax_tree;
mod syntax_tree_error;

pub use ast_fragment::AstFragment;
pub use definition_kind::DefinitionKind;
pub use definition_kind::MergeStrategy;
pub use definition_matcher::DefinitionMatcher;
pub use merge::CollisionPolicy;
pub use merge::MergeOutcome;
pub use sdl_codec::SdlParseError;
pub use sdl_codec::SdlPrintError;
pub use sdl_source::SdlSource;
pub use syntax_tree::SyntaxTree;
pub use syntax_tree::MUTATION_TYPE_NAME;
pub use syntax_tree::QUERY_TYPE_NAME;
pub use syntax_tree::SUBSCRIPTION_TYPE_NAME;
pub use syntax_tree_error::SyntaxTreeError;

#[cfg(test)]
mod tests;
