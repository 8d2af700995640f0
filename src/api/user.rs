//! `GET /user/`

use super::client::{decode, ensure_authorized, status_error, PcaApiClient};
use crate::auth::Credential;
use crate::error::PcaResult;
use crate::models::UserProfile;
use crate::traits::HttpClient;

pub const USER_PATH: &str = "/user/";

impl<C: HttpClient> PcaApiClient<C> {
    /// Fetch the profile of the credential's owner.
    ///
    /// 401/403 come back as [`crate::error::AuthError::Unauthorized`]; other
    /// failures are network errors.
    pub async fn fetch_profile(&self, credential: &Credential) -> PcaResult<UserProfile> {
        let response = self.get(USER_PATH, Some(credential)).await?;
        ensure_authorized(&response)?;
        if !response.is_success() {
            return Err(status_error(&response).into());
        }
        Ok(decode(&response)?)
    }
}
