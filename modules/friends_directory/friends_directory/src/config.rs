use serde::{Deserialize, Serialize};

/// What `delete_user` does with the edges incident to the deleted user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Remove the user's edges (both directions) together with the user.
    #[default]
    Cascade,
    /// Refuse to delete a user that still has edges.
    Restrict,
}

/// Configuration for the `friends_directory` module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Upper bound for `name`, `surname` and `email`, in characters.
    pub max_field_length: usize,
    pub delete_policy: DeletePolicy,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            max_field_length: 255,
            delete_policy: DeletePolicy::Cascade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: DirectoryConfig =
            serde_json::from_value(serde_json::json!({ "delete_policy": "restrict" })).unwrap();
        assert_eq!(cfg.delete_policy, DeletePolicy::Restrict);
        assert_eq!(cfg.max_field_length, 255);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<DirectoryConfig, _> =
            serde_json::from_value(serde_json::json!({ "max_len": 10 }));
        assert!(res.is_err());
    }
}
