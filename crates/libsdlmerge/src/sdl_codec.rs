//! The boundary with `graphql_parser`: SDL text in, owned [`ast::Document`]
//! out, and back again.
//!
//! `graphql_parser`'s printer is infallible, so [`print`] checks the parts
//! of a document the printer cannot represent (names that are not valid
//! GraphQL `Name`s) before handing it over. Anything [`parse`] produces
//! always prints.

use crate::ast;
use crate::SyntaxTreeError;
use graphql_parser::schema::Definition as D;
use graphql_parser::schema::TypeDefinition as TD;
use graphql_parser::schema::TypeExtension as TE;
use thiserror::Error;

pub fn parse(text: &str) -> Result<ast::Document, SdlParseError> {
    if text.trim().is_empty() {
        return Err(SdlParseError::EmptyDocument);
    }

    let doc = graphql_parser::schema::parse_schema::<String>(text)
        .map_err(|err| SdlParseError::Syntax {
            message: err.to_string(),
        })?
        .into_static();

    Ok(doc)
}

pub fn print(doc: &ast::Document) -> Result<String, SdlPrintError> {
    for def in &doc.definitions {
        check_definition(def)?;
    }
    Ok(doc.to_string())
}

/// Normalizes a document by printing it and parsing the result.
///
/// This strips source positions and rejects anything that would not survive
/// a trip through SDL text.
pub fn round_trip(doc: &ast::Document) -> Result<ast::Document, SyntaxTreeError> {
    let text = print(doc)?;
    Ok(parse(text.as_str())?)
}

/// Returns true if `name` matches `/[_A-Za-z][_0-9A-Za-z]*/`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn check_name(context: NameContext, name: &str) -> Result<(), SdlPrintError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(SdlPrintError::InvalidName {
            context,
            name: name.to_string(),
        })
    }
}

fn check_names(context: NameContext, names: &[String]) -> Result<(), SdlPrintError> {
    names.iter().try_for_each(|name| check_name(context, name))
}

fn check_type_annotation(ty: &ast::Type) -> Result<(), SdlPrintError> {
    match ty {
        ast::Type::NamedType(name) => check_name(NameContext::TypeReference, name),
        ast::Type::ListType(inner) | ast::Type::NonNullType(inner) =>
            check_type_annotation(inner),
    }
}

fn check_directives(directives: &[ast::Directive]) -> Result<(), SdlPrintError> {
    for directive in directives {
        check_name(NameContext::Directive, &directive.name)?;
        for (arg_name, _) in &directive.arguments {
            check_name(NameContext::Argument, arg_name)?;
        }
    }
    Ok(())
}

fn check_input_values(values: &[ast::InputValue]) -> Result<(), SdlPrintError> {
    for value in values {
        check_name(NameContext::Argument, &value.name)?;
        check_type_annotation(&value.value_type)?;
        check_directives(&value.directives)?;
    }
    Ok(())
}

fn check_fields(fields: &[ast::Field]) -> Result<(), SdlPrintError> {
    for field in fields {
        check_name(NameContext::Field, &field.name)?;
        check_input_values(&field.arguments)?;
        check_type_annotation(&field.field_type)?;
        check_directives(&field.directives)?;
    }
    Ok(())
}

fn check_enum_values(values: &[ast::EnumValue]) -> Result<(), SdlPrintError> {
    for value in values {
        check_name(NameContext::EnumValue, &value.name)?;
        check_directives(&value.directives)?;
    }
    Ok(())
}

fn check_definition(def: &ast::Definition) -> Result<(), SdlPrintError> {
    use NameContext::Definition as Def;
    use NameContext::Interface as Iface;
    use NameContext::TypeReference as TypeRef;

    match def {
        D::SchemaDefinition(schema_def) => {
            check_directives(&schema_def.directives)?;
            [&schema_def.query, &schema_def.mutation, &schema_def.subscription]
                .into_iter()
                .flatten()
                .try_for_each(|name| check_name(TypeRef, name))
        },

        D::DirectiveDefinition(dir_def) => {
            check_name(Def, &dir_def.name)?;
            check_input_values(&dir_def.arguments)
        },

        D::TypeDefinition(TD::Enum(enum_def)) => {
            check_name(Def, &enum_def.name)?;
            check_directives(&enum_def.directives)?;
            check_enum_values(&enum_def.values)
        },

        D::TypeDefinition(TD::InputObject(input_def)) => {
            check_name(Def, &input_def.name)?;
            check_directives(&input_def.directives)?;
            check_input_values(&input_def.fields)
        },

        D::TypeDefinition(TD::Interface(iface_def)) => {
            check_name(Def, &iface_def.name)?;
            check_names(Iface, &iface_def.implements_interfaces)?;
            check_directives(&iface_def.directives)?;
            check_fields(&iface_def.fields)
        },

        D::TypeDefinition(TD::Object(obj_def)) => {
            check_name(Def, &obj_def.name)?;
            check_names(Iface, &obj_def.implements_interfaces)?;
            check_directives(&obj_def.directives)?;
            check_fields(&obj_def.fields)
        },

        D::TypeDefinition(TD::Scalar(scalar_def)) => {
            check_name(Def, &scalar_def.name)?;
            check_directives(&scalar_def.directives)
        },

        D::TypeDefinition(TD::Union(union_def)) => {
            check_name(Def, &union_def.name)?;
            check_directives(&union_def.directives)?;
            check_names(TypeRef, &union_def.types)
        },

        D::TypeExtension(TE::Enum(ext)) => {
            check_name(Def, &ext.name)?;
            check_directives(&ext.directives)?;
            check_enum_values(&ext.values)
        },

        D::TypeExtension(TE::InputObject(ext)) => {
            check_name(Def, &ext.name)?;
            check_directives(&ext.directives)?;
            check_input_values(&ext.fields)
        },

        D::TypeExtension(TE::Interface(ext)) => {
            check_name(Def, &ext.name)?;
            check_names(Iface, &ext.implements_interfaces)?;
            check_directives(&ext.directives)?;
            check_fields(&ext.fields)
        },

        D::TypeExtension(TE::Object(ext)) => {
            check_name(Def, &ext.name)?;
            check_names(Iface, &ext.implements_interfaces)?;
            check_directives(&ext.directives)?;
            check_fields(&ext.fields)
        },

        D::TypeExtension(TE::Scalar(ext)) => {
            check_name(Def, &ext.name)?;
            check_directives(&ext.directives)
        },

        D::TypeExtension(TE::Union(ext)) => {
            check_name(Def, &ext.name)?;
            check_directives(&ext.directives)?;
            check_names(TypeRef, &ext.types)
        },
    }
}

/// Where in a document an invalid name was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameContext {
    Argument,
    Definition,
    Directive,
    EnumValue,
    Field,
    Interface,
    TypeReference,
}
impl std::fmt::Display for NameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Argument => "argument",
            Self::Definition => "definition",
            Self::Directive => "directive",
            Self::EnumValue => "enum value",
            Self::Field => "field",
            Self::Interface => "implemented interface",
            Self::TypeReference => "type reference",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SdlParseError {
    #[error("SDL source contains no definitions")]
    EmptyDocument,

    #[error("Error parsing SDL: {message}")]
    Syntax {
        message: String,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SdlPrintError {
    #[error("Invalid {context} name `{name}`")]
    InvalidName {
        context: NameContext,
        name: String,
    },

    #[error("Attempted to print a syntax tree that holds no document")]
    MissingDocument,
}
