//! Stop operations.

use ims_core::{StopRegionParams, UpdateProgramParams, UpdateTransactionParams, encode};

use crate::{ClientError, ImsRestClient, ResponseEnvelope};

impl ImsRestClient {
    /// Stop IMS programs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] before any request when `names`
    /// is missing or blank, otherwise any error of [`Self::put_expect_json`].
    pub async fn stop_program(
        &self,
        params: &UpdateProgramParams,
    ) -> Result<ResponseEnvelope, ClientError> {
        let request = encode::stop_program(params)?;
        self.put_expect_json(&request).await
    }

    /// Stop IMS transactions.
    ///
    /// # Errors
    ///
    /// Same as [`Self::stop_program`].
    pub async fn stop_transaction(
        &self,
        params: &UpdateTransactionParams,
    ) -> Result<ResponseEnvelope, ClientError> {
        let request = encode::stop_transaction(params)?;
        self.put_expect_json(&request).await
    }

    /// Stop a dependent region by number or job name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] before any request unless
    /// exactly one selector is set.
    pub async fn stop_region(
        &self,
        params: &StopRegionParams,
    ) -> Result<ResponseEnvelope, ClientError> {
        let request = encode::stop_region(params)?;
        self.put_expect_json(&request).await
    }
}
