//! Catalog integrity checks.
//!
//! Reports structural problems in a catalog snapshot. Findings are
//! advisory: the engine tolerates every one of them (unknown references
//! contribute nothing), but callers may want to surface them before
//! persisting an auto-cast result. Detects:
//! - Duplicate IDs
//! - Rows pointing at unknown roles or performers
//! - Roles and rows pointing at unknown scenes
//! - A performer listed twice in one row
//! - Non-stackable rows holding more than one performer

use std::collections::HashSet;

use crate::models::Catalog;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A row references a role that doesn't exist.
    UnknownRole,
    /// A role or row references a scene that doesn't exist.
    UnknownScene,
    /// A row references a performer that doesn't exist.
    UnknownPerformer,
    /// A performer appears more than once in the same row.
    DuplicateOccupant,
    /// A non-stackable row holds more than one performer.
    OverfilledRole,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_duplicates<'a>(
    label: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label} ID: {id}"),
            ));
        }
    }
    seen
}

/// Validates a catalog snapshot.
///
/// Checks:
/// 1. No duplicate performer, role, scene or row IDs
/// 2. Every role's default scenes exist
/// 3. Every row's role exists
/// 4. Every row's scene override entries exist
/// 5. Every row occupant exists and appears once in that row
/// 6. Non-stackable rows hold at most one performer
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every finding.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let performer_ids = check_duplicates(
        "performer",
        catalog.performers.iter().map(|p| p.id.as_str()),
        &mut errors,
    );
    let role_ids = check_duplicates(
        "role",
        catalog.roles.iter().map(|r| r.id.as_str()),
        &mut errors,
    );
    let scene_ids = check_duplicates(
        "scene",
        catalog.scenes.iter().map(|s| s.id.as_str()),
        &mut errors,
    );
    check_duplicates("row", catalog.rows.iter().map(|r| r.id.as_str()), &mut errors);

    for role in &catalog.roles {
        for scene in &role.default_scenes {
            if !scene_ids.contains(scene.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownScene,
                    format!("Role '{}' references unknown scene '{}'", role.id, scene),
                ));
            }
        }
    }

    let index = catalog.index();
    for row in &catalog.rows {
        if !role_ids.contains(row.role_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRole,
                format!("Row '{}' references unknown role '{}'", row.id, row.role_id),
            ));
        }

        for scene in row.scene_override.iter().flatten() {
            if !scene_ids.contains(scene.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownScene,
                    format!("Row '{}' overrides with unknown scene '{}'", row.id, scene),
                ));
            }
        }

        let mut occupants = HashSet::new();
        for performer in &row.performers {
            if !performer_ids.contains(performer.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPerformer,
                    format!("Row '{}' references unknown performer '{}'", row.id, performer),
                ));
            }
            if !occupants.insert(performer.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateOccupant,
                    format!("Performer '{}' appears twice in row '{}'", performer, row.id),
                ));
            }
        }

        if occupants.len() > 1 && index.role(&row.role_id).is_some_and(|r| !r.stackable) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OverfilledRole,
                format!(
                    "Row '{}' holds {} performers but role '{}' is not stackable",
                    row.id,
                    occupants.len(),
                    row.role_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
