use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Problems with entry identifiers that would break the generated C code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    InvalidIdentifier { kind: &'static str, id: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::InvalidIdentifier { kind, id } => {
                write!(f, "{kind} id '{id}' is not a valid C identifier")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check every enum-producing collection for repeated or non-C identifiers.
///
/// ```
/// use dungeon_data::{DungeonDef, validate_dungeon};
///
/// let dungeon = DungeonDef {
///     arbitrary_messages: [("NO_MESSAGE".to_string(), None)].into_iter().collect(),
///     ..DungeonDef::default()
/// };
/// assert!(validate_dungeon(&dungeon).is_empty());
/// ```
pub fn validate_dungeon(dungeon: &DungeonDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_ids("arbitrary message", dungeon.arbitrary_messages.ids(), &mut errors);
    check_ids("class message", dungeon.class_messages.ids(), &mut errors);
    check_ids("turn threshold message", dungeon.turn_threshold_messages.ids(), &mut errors);
    check_ids("location", dungeon.locations.ids(), &mut errors);
    check_ids("object description", dungeon.object_descriptions.ids(), &mut errors);

    errors
}

fn check_ids<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !is_c_identifier(id) {
            errors.push(ValidationError::InvalidIdentifier {
                kind,
                id: id.to_string(),
            });
        }
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn is_c_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(ids: &[&str]) -> Entries<String> {
        ids.iter().map(|id| (id.to_string(), None)).collect()
    }

    #[test]
    fn clean_dungeon_has_no_errors() {
        let dungeon = DungeonDef {
            arbitrary_messages: entries(&["NO_MESSAGE", "CAVE_NEARBY"]),
            class_messages: entries(&["BEGINNER"]),
            locations: [("LOC_START".to_string(), Some(LocationDef::default()))]
                .into_iter()
                .collect(),
            ..DungeonDef::default()
        };
        assert!(validate_dungeon(&dungeon).is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported_per_collection() {
        let dungeon = DungeonDef {
            arbitrary_messages: entries(&["SAME", "OTHER", "SAME"]),
            // same id in a different collection is fine
            turn_threshold_messages: entries(&["OTHER"]),
            ..DungeonDef::default()
        };
        assert_eq!(
            validate_dungeon(&dungeon),
            vec![ValidationError::DuplicateId {
                kind: "arbitrary message",
                id: "SAME".into(),
            }]
        );
    }

    #[test]
    fn non_c_identifiers_are_reported() {
        let dungeon = DungeonDef {
            class_messages: entries(&["9LIVES", "has space", "_ok", ""]),
            ..DungeonDef::default()
        };
        let errors = validate_dungeon(&dungeon);
        let bad: Vec<_> = errors
            .iter()
            .map(|e| match e {
                ValidationError::InvalidIdentifier { id, .. } => id.as_str(),
                ValidationError::DuplicateId { .. } => panic!("unexpected duplicate: {e}"),
            })
            .collect();
        assert_eq!(bad, vec!["9LIVES", "has space", ""]);
        assert_eq!(errors[0].to_string(), "class message id '9LIVES' is not a valid C identifier");
    }
}
