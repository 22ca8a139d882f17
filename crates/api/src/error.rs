#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown filter profile: '{0}' (expected one of: minimal, clean, all)")]
    UnknownFilterProfile(String),
    #[error("Unknown output format: '{0}'")]
    UnknownOutputFormat(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rejected_value() {
        let err = ApiError::UnknownFilterProfile("verbose".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown filter profile: 'verbose' (expected one of: minimal, clean, all)"
        );
        let err = ApiError::UnknownOutputFormat("pdf".to_string());
        assert_eq!(err.to_string(), "Unknown output format: 'pdf'");
    }
}
