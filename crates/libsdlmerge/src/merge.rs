use crate::ast;
use crate::DefinitionKind;
use crate::MergeStrategy;

/// What to do when two definitions share a name but cannot be combined
/// field-by-field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CollisionPolicy {
    /// Keep the existing definition and discard the incoming one.
    KeepExisting,

    /// The incoming definition takes the existing one's place.
    ReplaceWins,
}

/// The result of folding one definition into another.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergeOutcome {
    Concatenated,
    Kept,
    Replaced,
}

/// Folds `theirs` into `ours`, which keeps its position in its document.
///
/// When `ours` uses [`MergeStrategy::ConcatFields`] it gets `ours ++ theirs`
/// for implemented interfaces, directives, and fields. Under
/// [`CollisionPolicy::ReplaceWins`] this needs `theirs` to be the same kind;
/// under [`CollisionPolicy::KeepExisting`] any object-like `theirs` is folded
/// in. Everything else is resolved by `policy`.
pub fn merge_definition(
    ours: &mut ast::Definition,
    mut theirs: ast::Definition,
    policy: CollisionPolicy,
) -> MergeOutcome {
    let our_kind = DefinitionKind::from(&*ours);
    let their_kind = DefinitionKind::from(&theirs);

    // When keeping the existing definition, only its kind decides whether
    // incoming object-like parts are folded in (e.g. an `extend type`).
    let kinds_compatible = match policy {
        CollisionPolicy::KeepExisting => true,
        CollisionPolicy::ReplaceWins => our_kind == their_kind,
    };
    if kinds_compatible
        && our_kind.merge_strategy() == MergeStrategy::ConcatFields
        && let Some(our_parts) = ast::object_like_parts(ours)
        && let Some(their_parts) = ast::object_like_parts(&mut theirs) {
        our_parts.implements_interfaces.append(their_parts.implements_interfaces);
        our_parts.directives.append(their_parts.directives);
        our_parts.fields.append(their_parts.fields);
        return MergeOutcome::Concatenated;
    }

    resolve_collision(ours, theirs, policy)
}

fn resolve_collision(
    ours: &mut ast::Definition,
    theirs: ast::Definition,
    policy: CollisionPolicy,
) -> MergeOutcome {
    match policy {
        CollisionPolicy::KeepExisting => MergeOutcome::Kept,
        CollisionPolicy::ReplaceWins => {
            *ours = theirs;
            MergeOutcome::Replaced
        },
    }
}

/// Identity of a definition within a document: its name, or its kind for
/// nameless definitions.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DefinitionKey {
    Named(String),
    Nameless(DefinitionKind),
}
impl DefinitionKey {
    pub(crate) fn of(def: &ast::Definition) -> Self {
        match ast::definition_name(def) {
            Some(name) => Self::Named(name.to_string()),
            None => Self::Nameless(DefinitionKind::from(def)),
        }
    }
}
