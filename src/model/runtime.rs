//! Description of the numeric backend the model runs on

use crate::types::InferenceHealthResponse;

/// Backend family and the release line it is built against (`ndarray` 0.16.x).
/// This names the backend, not the exact resolved patch version.
pub const NUMERIC_BACKEND: &str = "ndarray-0.16";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Backend family identifier, see [`NUMERIC_BACKEND`].
    pub backend_version: String,
    pub accelerator_available: bool,
}

impl RuntimeInfo {
    /// Describe the backend this build runs on. ndarray is CPU-only, so no
    /// accelerator is ever reported.
    pub fn detect() -> Self {
        Self {
            backend_version: NUMERIC_BACKEND.to_string(),
            accelerator_available: false,
        }
    }

    pub fn health(&self) -> InferenceHealthResponse {
        InferenceHealthResponse {
            status: "healthy".to_string(),
            torch_version: self.backend_version.clone(),
            cuda_available: self.accelerator_available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_reports_backend_family() {
        let health = RuntimeInfo::detect().health();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.torch_version, NUMERIC_BACKEND);
        assert!(health.torch_version.starts_with("ndarray"));
        assert!(!health.cuda_available);
    }
}
