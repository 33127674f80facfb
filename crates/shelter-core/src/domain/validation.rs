//! Guard functions shared by every entity and service.
//!
//! Each guard takes the message to report and a caller-supplied failure
//! constructor, so the caller decides which error kind surfaces.

/// Fails when `value` is empty or whitespace-only.
pub fn require_non_blank<'a, E>(
    value: &'a str,
    message: &str,
    fail: impl FnOnce(String) -> E,
) -> Result<&'a str, E> {
    if value.trim().is_empty() {
        return Err(fail(message.to_string()));
    }
    Ok(value)
}

/// Fails when `value` is absent; returns the contained value otherwise.
pub fn require_present<T, E>(
    value: Option<T>,
    message: &str,
    fail: impl FnOnce(String) -> E,
) -> Result<T, E> {
    value.ok_or_else(|| fail(message.to_string()))
}

/// Fails when the list is absent or has no elements.
pub fn require_non_empty<'a, T, E>(
    list: Option<&'a [T]>,
    message: &str,
    fail: impl FnOnce(String) -> E,
) -> Result<&'a [T], E> {
    match list {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(fail(message.to_string())),
    }
}

/// An absent list reads as an empty one.
pub fn or_empty<T>(list: Option<Vec<T>>) -> Vec<T> {
    list.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn blank_strings_fail_with_caller_kind() {
        for input in ["", "   ", "\t\n"] {
            let err = require_non_blank(input, "name required", DomainError::user).unwrap_err();
            assert_eq!(err, DomainError::user("name required"));
        }
    }

    #[test]
    fn non_blank_string_is_returned() {
        let value = require_non_blank(" a ", "unused", DomainError::user).unwrap();
        assert_eq!(value, " a ");
    }

    #[test]
    fn present_value_is_unwrapped() {
        assert_eq!(require_present(Some(3), "missing", DomainError::donation), Ok(3));
        assert_eq!(
            require_present::<i32, _>(None, "missing", DomainError::donation),
            Err(DomainError::donation("missing"))
        );
    }

    #[test]
    fn empty_and_absent_lists_fail() {
        let empty: Vec<u8> = Vec::new();
        assert!(require_non_empty(Some(empty.as_slice()), "empty", DomainError::shelter).is_err());
        assert!(require_non_empty::<u8, _>(None, "empty", DomainError::shelter).is_err());
        assert_eq!(
            require_non_empty(Some(&[1, 2][..]), "empty", DomainError::shelter),
            Ok(&[1, 2][..])
        );
    }

    #[test]
    fn or_empty_defaults_absent_list() {
        assert!(or_empty::<u8>(None).is_empty());
        assert_eq!(or_empty(Some(vec![1])), vec![1]);
    }
}
