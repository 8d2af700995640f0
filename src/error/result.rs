//! Result type alias for region client operations.

use super::pca_error::PcaError;

/// Type alias for Results using PcaError.
///
/// ```ignore
/// use pca_region::error::PcaResult;
///
/// fn fetch(client: &PcaApiClient, credential: &Credential) -> PcaResult<UserProfile> {
///     client.fetch_profile(credential).await
/// }
/// ```
pub type PcaResult<T> = Result<T, PcaError>;
