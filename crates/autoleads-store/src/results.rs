//! Result sink: appends records to the output table.

use autoleads_core::{ResultRecord, ResultSink};

use crate::error::StoreError;
use crate::rest::check_response;
use crate::StoreClient;

impl StoreClient {
    /// Insert one record into the output table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the store answers with a
    /// non-success status.
    pub async fn insert_record(&self, record: &ResultRecord) -> Result<(), StoreError> {
        let url = self.table_url(&self.output_table);
        let request = self
            .authorized(self.http.post(&url))
            .header("Prefer", "return=minimal")
            .json(record);

        check_response(request.send().await?).await?;
        Ok(())
    }

    /// Insert one record, logging the outcome instead of returning it.
    pub async fn save(&self, record: &ResultRecord) -> bool {
        match self.insert_record(record).await {
            Ok(()) => {
                tracing::info!(
                    table = %self.output_table,
                    record_id = %record.id,
                    status = %record.status,
                    "| Status: SUCCESS - saved result"
                );
                true
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    table = %self.output_table,
                    record_id = %record.id,
                    "| Status: FAILED - could not save result"
                );
                false
            }
        }
    }
}

impl ResultSink for StoreClient {
    async fn save(&self, record: &ResultRecord) -> bool {
        Self::save(self, record).await
    }
}
