use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("unexpected response status {status} from {url}")]
    FetchStatus { status: u16, url: String },

    #[error("payload parse error: {message}")]
    Parse { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("availability structure missing: {context}")]
    StructureMissing { context: String },

    #[error("configuration error: {field}: {reason}")]
    Config { field: String, reason: String },
}

impl CheckError {
    /// Failure class names used in UNKNOWN verdict reasons and logs.
    pub fn failure_class(&self) -> &'static str {
        match self {
            CheckError::Fetch(_) | CheckError::FetchStatus { .. } => "fetch_failure",
            CheckError::Parse { .. } | CheckError::Json(_) => "parse_failure",
            CheckError::StructureMissing { .. } => "structure_missing",
            CheckError::Config { .. } => "config_error",
            CheckError::Io(_) => "other",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_class_names() {
        let err = CheckError::StructureMissing {
            context: "dailyAvailabilities".to_string(),
        };
        assert_eq!(err.failure_class(), "structure_missing");

        let err = CheckError::Parse {
            message: "marker not found".to_string(),
        };
        assert_eq!(err.failure_class(), "parse_failure");

        let err = CheckError::Config {
            field: "pax".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(err.failure_class(), "config_error");
    }
}
