//! Random identifier generation and strict UUID format checking.

use uuid::Uuid;

use crate::domain::error::IdentifierError;

/// A fresh random (version 4) UUID in canonical hyphenated form.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}

/// Checks that `id` is a canonical hyphenated UUID.
///
/// Only the 8-4-4-4-12 form is accepted; braced, URN and simple forms are
/// rejected even though they parse. Hex digits may be upper or lower case.
pub fn is_valid(id: &str) -> Result<bool, IdentifierError> {
    if id.trim().is_empty() {
        return Err(IdentifierError::Missing);
    }

    let malformed = || IdentifierError::Malformed {
        value: id.to_string(),
    };

    let parsed = Uuid::parse_str(id).map_err(|_| malformed())?;
    if !parsed.hyphenated().to_string().eq_ignore_ascii_case(id) {
        return Err(malformed());
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid_and_distinct() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
        assert_eq!(is_valid(&a), Ok(true));
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn blank_id_is_missing() {
        assert_eq!(is_valid(""), Err(IdentifierError::Missing));
        assert_eq!(is_valid("   "), Err(IdentifierError::Missing));
    }

    #[test]
    fn uppercase_canonical_form_is_accepted() {
        assert_eq!(is_valid("67E55044-10B1-426F-9247-BB680E5FE0C8"), Ok(true));
    }

    #[test]
    fn non_canonical_forms_are_malformed() {
        for id in [
            "not-a-uuid",
            "67e5504410b1426f9247bb680e5fe0c8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
            "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8",
            "67e55044-10b1-426f-9247-bb680e5fe0c",
        ] {
            assert_eq!(
                is_valid(id),
                Err(IdentifierError::Malformed { value: id.into() }),
                "{id} should be rejected"
            );
        }
    }
}
