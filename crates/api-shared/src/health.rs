use crate::types::HealthRes;

/// Simple health service shared by the API binaries.
///
/// This service provides a standardised way to check that the care plan service is up.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Care plan service is alive".into(),
        }
    }
}
