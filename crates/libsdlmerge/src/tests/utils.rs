use crate::ast;
use crate::DefinitionKind;
use crate::SyntaxTree;
use graphql_parser::schema::Definition as D;
use graphql_parser::schema::TypeDefinition as TD;

pub(super) fn pos() -> ast::Pos {
    ast::Pos { line: 1, column: 1 }
}

pub(super) fn string_field(name: &str) -> ast::Field {
    ast::Field {
        position: pos(),
        description: None,
        name: name.to_string(),
        arguments: vec![],
        field_type: ast::Type::NamedType("String".to_string()),
        directives: vec![],
    }
}

pub(super) fn object_def(name: &str, fields: &[&str]) -> ast::Definition {
    D::TypeDefinition(TD::Object(ast::ObjectType {
        position: pos(),
        description: None,
        name: name.to_string(),
        implements_interfaces: vec![],
        directives: vec![],
        fields: fields.iter().map(|name| string_field(name)).collect(),
    }))
}

pub(super) fn unwrap_object(def: &ast::Definition) -> &ast::ObjectType {
    match def {
        D::TypeDefinition(TD::Object(obj)) => obj,
        other => panic!("Expected an object type definition, found {other:?}"),
    }
}

pub(super) fn field_names(def: &ast::Definition) -> Vec<&str> {
    unwrap_object(def).fields
        .iter()
        .map(|field| field.name.as_str())
        .collect()
}

pub(super) fn names_and_kinds(tree: &SyntaxTree) -> Vec<(Option<String>, DefinitionKind)> {
    tree.iter()
        .map(|def| (
            ast::definition_name(def).map(str::to_string),
            DefinitionKind::from(def),
        ))
        .collect()
}

pub(super) fn tree(schema: &str) -> SyntaxTree {
    SyntaxTree::from_schema(schema).expect("parse error")
}
