use encore_core::{Role, SignalRecord};

// Resolution order matters: a musician flagged as a teacher gets the teacher
// table, and a record with no role flags at all falls back to musician.
pub fn resolve_role(record: &SignalRecord) -> Role {
    if record.is_musician {
        if record.role_type.as_deref() == Some("teacher") {
            return Role::Teacher;
        }
        return Role::Musician;
    }
    if record.is_client {
        return Role::Client;
    }
    if record.is_booker {
        return Role::Booker;
    }
    Role::Musician
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_requires_musician_flag() {
        let mut record = SignalRecord::default();
        record.is_musician = true;
        record.role_type = Some("teacher".to_string());
        assert_eq!(resolve_role(&record), Role::Teacher);

        record.is_musician = false;
        record.is_client = true;
        assert_eq!(resolve_role(&record), Role::Client);
    }

    #[test]
    fn musician_wins_over_other_flags() {
        let mut record = SignalRecord::default();
        record.is_musician = true;
        record.is_client = true;
        record.is_booker = true;
        assert_eq!(resolve_role(&record), Role::Musician);
    }

    #[test]
    fn no_flags_defaults_to_musician() {
        assert_eq!(resolve_role(&SignalRecord::default()), Role::Musician);
    }

    #[test]
    fn booker_resolves_last() {
        let mut record = SignalRecord::default();
        record.is_booker = true;
        assert_eq!(resolve_role(&record), Role::Booker);
    }
}
