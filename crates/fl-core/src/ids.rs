//! Entry identifier generation.
//!
//! Entry IDs are random (version 4) UUIDs rendered in the canonical
//! hyphenated lowercase form, e.g. `3f0c2a9e-5b1d-4c8e-9a7f-1e2d3c4b5a69`.

use uuid::Uuid;

/// Generate a fresh entry identifier.
#[must_use]
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Check whether `value` is a hyphenated version-4 UUID.
#[must_use]
pub fn is_entry_id(value: &str) -> bool {
    value.len() == 36
        && Uuid::parse_str(value).is_ok_and(|id| id.get_version_num() == 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_v4_uuids() {
        let id = new_entry_id();
        assert!(is_entry_id(&id), "not a v4 uuid: {id}");
        assert_eq!(id.chars().nth(14), Some('4'));
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: std::collections::HashSet<String> = (0..512).map(|_| new_entry_id()).collect();
        assert_eq!(ids.len(), 512);
    }

    #[test]
    fn rejects_non_uuid_values() {
        assert!(!is_entry_id("entry_1700000000_abc123def"));
        assert!(!is_entry_id(""));
        // Simple (unhyphenated) form is not accepted.
        assert!(!is_entry_id(&Uuid::new_v4().simple().to_string()));
    }
}
