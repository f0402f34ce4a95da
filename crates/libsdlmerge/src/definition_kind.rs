use crate::ast;
use graphql_parser::schema::Definition as D;
use graphql_parser::schema::TypeDefinition as TD;
use graphql_parser::schema::TypeExtension as TE;

/// The category of a top-level definition in an SDL document.
///
/// Every kind maps to exactly one [`MergeStrategy`] via
/// [`DefinitionKind::merge_strategy`], which is the only place that decides
/// how two same-named definitions of the same kind combine.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    /// `directive @name on ...`
    Directive,
    Enum,
    EnumExtension,
    InputObject,
    InputObjectExtension,
    Interface,
    InterfaceExtension,
    Object,
    ObjectExtension,
    Scalar,
    ScalarExtension,
    /// `schema { ... }`. The only nameless kind.
    Schema,
    Union,
    UnionExtension,
}
impl DefinitionKind {
    /// The AST node tag for this kind, e.g. `ObjectTypeDefinition`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directive => "DirectiveDefinition",
            Self::Enum => "EnumTypeDefinition",
            Self::EnumExtension => "EnumTypeExtension",
            Self::InputObject => "InputObjectTypeDefinition",
            Self::InputObjectExtension => "InputObjectTypeExtension",
            Self::Interface => "InterfaceTypeDefinition",
            Self::InterfaceExtension => "InterfaceTypeExtension",
            Self::Object => "ObjectTypeDefinition",
            Self::ObjectExtension => "ObjectTypeExtension",
            Self::Scalar => "ScalarTypeDefinition",
            Self::ScalarExtension => "ScalarTypeExtension",
            Self::Schema => "SchemaDefinition",
            Self::Union => "UnionTypeDefinition",
            Self::UnionExtension => "UnionTypeExtension",
        }
    }

    pub fn merge_strategy(&self) -> MergeStrategy {
        match self {
            Self::Interface
                | Self::InterfaceExtension
                | Self::Object
                | Self::ObjectExtension => MergeStrategy::ConcatFields,

            // No field-level rule exists yet for enum values, union members,
            // or input fields; these are replaced wholesale.
            Self::Directive
                | Self::Enum
                | Self::EnumExtension
                | Self::InputObject
                | Self::InputObjectExtension
                | Self::Scalar
                | Self::ScalarExtension
                | Self::Schema
                | Self::Union
                | Self::UnionExtension => MergeStrategy::Replace,
        }
    }
}
impl std::convert::From<&ast::Definition> for DefinitionKind {
    fn from(def: &ast::Definition) -> Self {
        match def {
            D::DirectiveDefinition(_) => Self::Directive,
            D::SchemaDefinition(_) => Self::Schema,
            D::TypeDefinition(TD::Enum(_)) => Self::Enum,
            D::TypeDefinition(TD::InputObject(_)) => Self::InputObject,
            D::TypeDefinition(TD::Interface(_)) => Self::Interface,
            D::TypeDefinition(TD::Object(_)) => Self::Object,
            D::TypeDefinition(TD::Scalar(_)) => Self::Scalar,
            D::TypeDefinition(TD::Union(_)) => Self::Union,
            D::TypeExtension(TE::Enum(_)) => Self::EnumExtension,
            D::TypeExtension(TE::InputObject(_)) => Self::InputObjectExtension,
            D::TypeExtension(TE::Interface(_)) => Self::InterfaceExtension,
            D::TypeExtension(TE::Object(_)) => Self::ObjectExtension,
            D::TypeExtension(TE::Scalar(_)) => Self::ScalarExtension,
            D::TypeExtension(TE::Union(_)) => Self::UnionExtension,
        }
    }
}
impl serde::Serialize for DefinitionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How two same-named, same-kind definitions are combined.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergeStrategy {
    /// Append the incoming `implements`, directives, and fields to the
    /// existing definition. Duplicates are kept.
    ConcatFields,

    /// The incoming definition cannot be folded into the existing one.
    Replace,
}
