//! Owned aliases for the `graphql_parser` schema AST that a
//! [`SyntaxTree`](crate::SyntaxTree) stores.

pub use graphql_parser::Pos;

pub type Definition = graphql_parser::schema::Definition<'static, String>;
pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
pub type Document = graphql_parser::schema::Document<'static, String>;
pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
pub type Field = graphql_parser::schema::Field<'static, String>;
pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
pub type Type = graphql_parser::schema::Type<'static, String>;
pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
pub type Value = graphql_parser::query::Value<'static, String>;

/// A [`Document`] with no definitions.
///
/// `graphql_parser` cannot parse an empty document, so this is the only way
/// to start from a blank one.
pub fn empty_document() -> Document {
    Document {
        definitions: vec![],
    }
}

/// Returns the top-level name of a definition, or `None` for nameless
/// definitions (`schema { ... }` and `extend schema ...`).
pub fn definition_name(def: &Definition) -> Option<&str> {
    use graphql_parser::schema::Definition as D;
    use graphql_parser::schema::TypeDefinition as TD;
    use graphql_parser::schema::TypeExtension as TE;

    match def {
        D::SchemaDefinition(_) => None,
        D::DirectiveDefinition(def) => Some(def.name.as_str()),
        D::TypeDefinition(TD::Enum(def)) => Some(def.name.as_str()),
        D::TypeDefinition(TD::InputObject(def)) => Some(def.name.as_str()),
        D::TypeDefinition(TD::Interface(def)) => Some(def.name.as_str()),
        D::TypeDefinition(TD::Object(def)) => Some(def.name.as_str()),
        D::TypeDefinition(TD::Scalar(def)) => Some(def.name.as_str()),
        D::TypeDefinition(TD::Union(def)) => Some(def.name.as_str()),
        D::TypeExtension(TE::Enum(ext)) => Some(ext.name.as_str()),
        D::TypeExtension(TE::InputObject(ext)) => Some(ext.name.as_str()),
        D::TypeExtension(TE::Interface(ext)) => Some(ext.name.as_str()),
        D::TypeExtension(TE::Object(ext)) => Some(ext.name.as_str()),
        D::TypeExtension(TE::Scalar(ext)) => Some(ext.name.as_str()),
        D::TypeExtension(TE::Union(ext)) => Some(ext.name.as_str()),
    }
}

/// Mutable views of the list-valued parts shared by object-like definitions
/// (objects, interfaces, and their extensions).
pub(crate) struct ObjectLikeParts<'a> {
    pub implements_interfaces: &'a mut Vec<String>,
    pub directives: &'a mut Vec<Directive>,
    pub fields: &'a mut Vec<Field>,
}

pub(crate) fn object_like_parts(def: &mut Definition) -> Option<ObjectLikeParts<'_>> {
    use graphql_parser::schema::Definition as D;
    use graphql_parser::schema::TypeDefinition as TD;
    use graphql_parser::schema::TypeExtension as TE;

    match def {
        D::TypeDefinition(TD::Object(def)) => Some(ObjectLikeParts {
            implements_interfaces: &mut def.implements_interfaces,
            directives: &mut def.directives,
            fields: &mut def.fields,
        }),
        D::TypeDefinition(TD::Interface(def)) => Some(ObjectLikeParts {
            implements_interfaces: &mut def.implements_interfaces,
            directives: &mut def.directives,
            fields: &mut def.fields,
        }),
        D::TypeExtension(TE::Object(ext)) => Some(ObjectLikeParts {
            implements_interfaces: &mut ext.implements_interfaces,
            directives: &mut ext.directives,
            fields: &mut ext.fields,
        }),
        D::TypeExtension(TE::Interface(ext)) => Some(ObjectLikeParts {
            implements_interfaces: &mut ext.implements_interfaces,
            directives: &mut ext.directives,
            fields: &mut ext.fields,
        }),
        _ => None,
    }
}
