// src/models.rs
use serde::Serialize;

/// A generated password together with what was derived from it.
///
/// Records are written once to the chosen sinks and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordRecord {
    pub password: String,
    pub hashed_password: Option<String>,
    pub service_name: Option<String>,
}

impl PasswordRecord {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            hashed_password: None,
            service_name: None,
        }
    }

    pub fn with_hash(mut self, hashed_password: Option<String>) -> Self {
        self.hashed_password = hashed_password;
        self
    }

    // Blank service names are stored as absent
    pub fn with_service(mut self, service_name: Option<&str>) -> Self {
        self.service_name = service_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        self
    }
}

// Options for a single generation run
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_special: bool,
    pub include_letters: bool,
    pub include_digits: bool,
    pub custom_pool: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_service_name_is_dropped() {
        let record = PasswordRecord::new("abc").with_service(Some("   "));
        assert_eq!(record.service_name, None);

        let record = PasswordRecord::new("abc").with_service(Some(" github "));
        assert_eq!(record.service_name.as_deref(), Some("github"));
    }

    #[test]
    fn json_keeps_absent_fields_as_null() {
        let record = PasswordRecord::new("abc123").with_service(Some("mail"));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["password"], "abc123");
        assert!(json["hashed_password"].is_null());
        assert_eq!(json["service_name"], "mail");
    }
}
