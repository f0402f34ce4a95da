use crate::ast;
use crate::SyntaxTree;

/// Anything a [`SyntaxTree`] can be built from or merged with.
#[derive(Clone, Copy, Debug)]
pub enum SdlSource<'a> {
    /// An AST built elsewhere. It is normalized through a print/parse round
    /// trip before it is accepted.
    Ast(&'a ast::Document),

    /// Raw SDL text.
    Text(&'a str),

    /// Another tree, whose definitions are copied as they are.
    Tree(&'a SyntaxTree),
}
impl<'a> std::convert::From<&'a str> for SdlSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}
impl<'a> std::convert::From<&'a String> for SdlSource<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}
impl<'a> std::convert::From<&'a ast::Document> for SdlSource<'a> {
    fn from(doc: &'a ast::Document) -> Self {
        Self::Ast(doc)
    }
}
impl<'a> std::convert::From<&'a SyntaxTree> for SdlSource<'a> {
    fn from(tree: &'a SyntaxTree) -> Self {
        Self::Tree(tree)
    }
}
