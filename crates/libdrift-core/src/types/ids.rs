use uuid::Uuid;

/// Generate a fresh project ID (UUID v4, hyphenated)
pub fn generate_project_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a fresh task ID (UUID v4, hyphenated)
pub fn generate_task_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ids_are_unique() {
        let a = generate_project_id();
        let b = generate_project_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_are_hyphenated_uuids() {
        let id = generate_task_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
