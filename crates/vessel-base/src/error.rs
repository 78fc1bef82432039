/// Raised when a container is asked for a payload its current variant does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AccessError {
    #[error("No value present")]
    NoValuePresent,
    #[error("get() on Left")]
    GetOnLeft,
    #[error("getLeft() on Right")]
    GetLeftOnRight,
    #[error("getCause() on Success")]
    CauseOnSuccess,
    /// Default fault stored by `Attempt::filter` when the predicate rejects the value.
    #[error("Predicate does not hold")]
    PredicateFailed,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: String, value: String },
    #[error("Capture config already installed")]
    AlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_messages_match_the_variant_names() {
        insta::assert_snapshot!(AccessError::NoValuePresent.to_string(), @"No value present");
        insta::assert_snapshot!(AccessError::GetOnLeft.to_string(), @"get() on Left");
        insta::assert_snapshot!(AccessError::GetLeftOnRight.to_string(), @"getLeft() on Right");
        insta::assert_snapshot!(AccessError::CauseOnSuccess.to_string(), @"getCause() on Success");
    }

    #[test]
    fn invalid_env_names_the_variable() {
        let err = ConfigError::InvalidEnv {
            var: "VESSEL_CAPTURE_PANICS".to_string(),
            value: "maybe".to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @r#"Invalid value for VESSEL_CAPTURE_PANICS: "maybe""#);
    }
}
