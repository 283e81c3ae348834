//! Start operations.

use ims_core::{StartRegionParams, UpdateProgramParams, UpdateTransactionParams, encode};

use crate::{ClientError, ImsRestClient, ResponseEnvelope};

impl ImsRestClient {
    /// Start IMS programs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] before any request when `names`
    /// is missing or blank, otherwise any error of [`Self::put_expect_json`].
    pub async fn start_program(
        &self,
        params: &UpdateProgramParams,
    ) -> Result<ResponseEnvelope, ClientError> {
        let request = encode::start_program(params)?;
        self.put_expect_json(&request).await
    }

    /// Start IMS transactions.
    ///
    /// # Errors
    ///
    /// Same as [`Self::start_program`].
    pub async fn start_transaction(
        &self,
        params: &UpdateTransactionParams,
    ) -> Result<ResponseEnvelope, ClientError> {
        let request = encode::start_transaction(params)?;
        self.put_expect_json(&request).await
    }

    /// Start a dependent region.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] for a blank job name.
    pub async fn start_region(
        &self,
        params: &StartRegionParams,
    ) -> Result<ResponseEnvelope, ClientError> {
        let request = encode::start_region(params)?;
        self.put_expect_json(&request).await
    }
}
