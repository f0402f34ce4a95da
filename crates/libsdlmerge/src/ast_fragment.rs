use crate::ast;

/// A partial document applied on top of a [`SyntaxTree`]'s document by
/// [`SyntaxTree::update_ast`](crate::SyntaxTree::update_ast).
///
/// Every field that is `Some` overwrites the corresponding part of the
/// document; `None` leaves it as it is.
#[derive(Clone, Debug, Default)]
pub struct AstFragment {
    pub definitions: Option<Vec<ast::Definition>>,
}
impl AstFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definitions(definitions: Vec<ast::Definition>) -> Self {
        Self {
            definitions: Some(definitions),
        }
    }

    pub(crate) fn apply_to(&self, doc: Option<&ast::Document>) -> Option<ast::Document> {
        match (&self.definitions, doc) {
            (Some(definitions), _) => Some(ast::Document {
                definitions: definitions.clone(),
            }),
            (None, doc) => doc.cloned(),
        }
    }
}
