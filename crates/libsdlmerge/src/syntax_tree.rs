use crate::ast;
use crate::merge;
use crate::merge::CollisionPolicy;
use crate::merge::DefinitionKey;
use crate::sdl_codec;
use crate::sdl_codec::SdlPrintError;
use crate::AstFragment;
use crate::DefinitionMatcher;
use crate::SdlSource;
use crate::SyntaxTreeError;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SyntaxTreeError>;

pub const QUERY_TYPE_NAME: &str = "Query";
pub const MUTATION_TYPE_NAME: &str = "Mutation";
pub const SUBSCRIPTION_TYPE_NAME: &str = "Subscription";

/// An SDL document that can be searched, merged with other SDL fragments,
/// and printed back to SDL.
///
/// A tree either holds exactly one [`ast::Document`] or is uninitialized
/// (see [`SyntaxTree::new`]). Methods that mutate the tree in place never
/// leave it holding a document that fails to print; when their input can't
/// be used they log the problem and keep the prior state.
#[derive(Clone, Debug, Default)]
pub struct SyntaxTree {
    document: Option<ast::Document>,
}
impl SyntaxTree {
    /// Creates an uninitialized tree. It has no definitions, iterates as
    /// empty, and fails to print until a document is set.
    pub fn new() -> Self {
        Self {
            document: None,
        }
    }

    /// Builds a tree from any [`SdlSource`], returning `None` if the source
    /// can't be parsed or normalized.
    pub fn from_source<'a>(source: impl Into<SdlSource<'a>>) -> Option<Self> {
        match Self::canonical_document(source.into()) {
            Ok(Some(document)) => Some(Self {
                document: Some(document),
            }),
            Ok(None) => {
                log::debug!("Source syntax tree holds no document.");
                None
            },
            Err(err) => {
                log::debug!("Unable to build a syntax tree: {err}");
                None
            },
        }
    }

    /// Parses SDL text into a new tree.
    pub fn from_schema(schema: &str) -> Result<Self> {
        Ok(Self {
            document: Some(sdl_codec::parse(schema)?),
        })
    }

    /// Normalizes an externally built document into a new tree.
    pub fn from_ast(doc: &ast::Document) -> Result<Self> {
        Ok(Self {
            document: Some(sdl_codec::round_trip(doc)?),
        })
    }

    /// A tree with a document containing no definitions, optionally seeded
    /// through [`SyntaxTree::append_definitions`].
    pub fn empty_document<'a>(seed: Option<SdlSource<'a>>) -> Self {
        let mut tree = Self {
            document: Some(ast::empty_document()),
        };
        if let Some(seed) = seed {
            tree.append_definitions(seed);
        }
        tree
    }

    /// A tree holding only `type Query`.
    pub fn empty_query() -> Self {
        Self::empty_root_type(QUERY_TYPE_NAME)
    }

    /// A tree holding only `type Mutation`.
    pub fn empty_mutation() -> Self {
        Self::empty_root_type(MUTATION_TYPE_NAME)
    }

    /// A tree holding only `type Subscription`.
    pub fn empty_subscription() -> Self {
        Self::empty_root_type(SUBSCRIPTION_TYPE_NAME)
    }

    fn empty_root_type(type_name: &str) -> Self {
        let root_type = ast::ObjectType {
            position: ast::Pos { line: 1, column: 1 },
            description: None,
            name: type_name.to_string(),
            implements_interfaces: vec![],
            directives: vec![],
            fields: vec![],
        };
        Self {
            document: Some(ast::Document {
                definitions: vec![ast::Definition::TypeDefinition(
                    ast::TypeDefinition::Object(root_type),
                )],
            }),
        }
    }

    fn canonical_document(source: SdlSource<'_>) -> Result<Option<ast::Document>> {
        match source {
            SdlSource::Text(text) => Ok(Some(sdl_codec::parse(text)?)),
            SdlSource::Ast(doc) => Ok(Some(sdl_codec::round_trip(doc)?)),
            SdlSource::Tree(tree) => Ok(tree.document.clone()),
        }
    }

    pub fn document(&self) -> Option<&ast::Document> {
        self.document.as_ref()
    }

    pub fn into_document(self) -> Option<ast::Document> {
        self.document
    }

    pub fn definitions(&self) -> &[ast::Definition] {
        self.document
            .as_ref()
            .map(|doc| doc.definitions.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ast::Definition> {
        self.definitions().iter()
    }

    pub fn len(&self) -> usize {
        self.definitions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions().is_empty()
    }

    /// Replaces this tree's document with one built from `source`.
    ///
    /// The previous document is discarded first. If `source` can't be parsed
    /// or normalized the failure is logged and the tree is left
    /// uninitialized.
    pub fn set_ast<'a>(&mut self, source: impl Into<SdlSource<'a>>) -> &mut Self {
        self.document = None;
        match Self::canonical_document(source.into()) {
            Ok(document) => self.document = document,
            Err(err) => log::warn!("Ignoring unusable SDL source: {err}"),
        }
        self
    }

    /// Overlays `fragment` onto the current document.
    ///
    /// The combined document must print before it is committed. Otherwise
    /// the error is logged and the current document is kept.
    pub fn update_ast(&mut self, fragment: AstFragment) -> &mut Self {
        let Some(candidate) = fragment.apply_to(self.document.as_ref()) else {
            return self;
        };

        match sdl_codec::print(&candidate) {
            Ok(_) => self.document = Some(candidate),
            Err(err) => log::error!(
                "Failed to update syntax tree with {fragment:?}: {err}",
            ),
        }
        self
    }

    /// Returns the first definition, in declaration order, whose name matches.
    pub fn find(&self, matcher: impl Into<DefinitionMatcher>) -> Option<&ast::Definition> {
        let matcher = matcher.into();
        self.iter().find(|def| matcher.matches(def))
    }

    fn position(&self, matcher: &DefinitionMatcher) -> Option<usize> {
        self.iter().position(|def| matcher.matches(def))
    }

    /// Removes and returns the first definition whose name matches.
    pub fn remove_definition(
        &mut self,
        matcher: impl Into<DefinitionMatcher>,
    ) -> Option<ast::Definition> {
        let index = self.position(&matcher.into())?;
        self.document
            .as_mut()
            .map(|doc| doc.definitions.remove(index))
    }

    /// An index of definitions by name, in declaration order. When a name
    /// appears more than once the first definition wins.
    pub fn outline(&self) -> IndexMap<&str, &ast::Definition> {
        let mut outline = IndexMap::new();
        for def in self {
            if let Some(name) = ast::definition_name(def) {
                outline.entry(name).or_insert(def);
            }
        }
        outline
    }

    /// Merges every definition from `source` into this tree.
    ///
    /// * Names not yet present are appended in source order.
    /// * A same-named definition of the same object-like kind has the
    ///   incoming interfaces, directives, and fields appended to it.
    /// * Any other same-named definition is replaced in place.
    ///
    /// `source` itself is not modified. A source that can't be parsed is
    /// logged and ignored.
    pub fn append_definitions<'a>(&mut self, source: impl Into<SdlSource<'a>>) -> &mut Self {
        let Some(source) = Self::from_source(source) else {
            log::warn!("Skipping append from an unusable SDL source.");
            return self;
        };
        let Some(incoming) = source.into_document() else {
            return self;
        };

        let doc = self.document.get_or_insert_with(ast::empty_document);
        let mut known_keys: HashSet<DefinitionKey> =
            doc.definitions.iter().map(DefinitionKey::of).collect();

        for theirs in incoming.definitions {
            let key = DefinitionKey::of(&theirs);
            if known_keys.insert(key.clone()) {
                doc.definitions.push(theirs);
                continue;
            }

            let Some(ours) = doc.definitions
                .iter_mut()
                .find(|def| DefinitionKey::of(def) == key) else {
                continue;
            };
            let outcome = merge::merge_definition(
                ours,
                theirs,
                CollisionPolicy::ReplaceWins,
            );
            log::debug!("Merged incoming definition {key:?}: {outcome:?}");
        }

        self
    }

    /// Moves the first definition matching `matcher` out of `source` and into
    /// this tree.
    ///
    /// If this tree has no definition matching `matcher`, the source's
    /// definition is appended. If the local definition is object-like, the
    /// incoming interfaces, directives, and fields (from an object, interface,
    /// or extension of either) are appended to it; otherwise the local
    /// definition is kept. In every case the definition
    /// is removed from `source`.
    ///
    /// Does nothing if this tree is uninitialized or `source` has no match.
    pub fn consume_definition(
        &mut self,
        source: &mut SyntaxTree,
        matcher: impl Into<DefinitionMatcher>,
    ) -> &mut Self {
        let matcher = matcher.into();
        if self.document.is_none() {
            log::debug!("Not consuming {matcher}: syntax tree holds no document.");
            return self;
        }
        let Some(right_index) = source.position(&matcher) else {
            return self;
        };
        let left_index = self.position(&matcher);

        // Both indices are known, so nothing below can fail part-way through.
        let (Some(doc), Some(source_doc)) = (
            self.document.as_mut(),
            source.document.as_mut(),
        ) else {
            return self;
        };
        let right = source_doc.definitions.remove(right_index);
        match left_index {
            Some(left_index) => {
                let outcome = merge::merge_definition(
                    &mut doc.definitions[left_index],
                    right,
                    CollisionPolicy::KeepExisting,
                );
                log::debug!("Consumed {matcher}: {outcome:?}");
            },
            None => doc.definitions.push(right),
        }

        self
    }

    /// Like [`SyntaxTree::consume_definition`], for sources that aren't a
    /// mutable tree. The source is canonicalized into a temporary tree, so the
    /// caller's value is never modified.
    pub fn consume_definition_from<'a>(
        &mut self,
        source: impl Into<SdlSource<'a>>,
        matcher: impl Into<DefinitionMatcher>,
    ) -> &mut Self {
        match Self::from_source(source) {
            Some(mut source) => self.consume_definition(&mut source, matcher),
            None => {
                log::warn!("Skipping consume from an unusable SDL source.");
                self
            },
        }
    }

    /// Prints the document as SDL.
    ///
    /// Unlike the mutating methods this reports failure to the caller: an
    /// uninitialized tree or a document with invalid names is an error.
    pub fn to_sdl(&self) -> std::result::Result<String, SdlPrintError> {
        match &self.document {
            Some(doc) => sdl_codec::print(doc),
            None => Err(SdlPrintError::MissingDocument),
        }
    }
}
impl std::str::FromStr for SyntaxTree {
    type Err = SyntaxTreeError;

    fn from_str(schema: &str) -> Result<Self> {
        Self::from_schema(schema)
    }
}
impl<'a> std::iter::IntoIterator for &'a SyntaxTree {
    type Item = &'a ast::Definition;
    type IntoIter = std::slice::Iter<'a, ast::Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
