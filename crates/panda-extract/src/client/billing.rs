//! Best-effort billing usage query.
//!
//! Advisory accounting only: the pipeline never depends on this succeeding.

use chrono::Local;
use tracing::debug;

use super::OpenAiClient;
use crate::error::ClientResult;
use crate::models::BillingUsage;

impl OpenAiClient {
    /// Cumulative spend for today in USD, from the billing dashboard.
    ///
    /// Any failure (network, status, parse) is swallowed, logged at debug
    /// level, and reported as zero. Never propagates as a pipeline error.
    pub async fn daily_spend(&self) -> f64 {
        match self.fetch_daily_spend().await {
            Ok(dollars) => dollars,
            Err(e) => {
                debug!(error = %e, "billing usage query failed, reporting zero");
                0.0
            }
        }
    }

    async fn fetch_daily_spend(&self) -> ClientResult<f64> {
        let today = Local::now().format("%Y-%m-%d").to_string();
        let url = format!("{}/dashboard/billing/usage", self.api_url);
        let params = [("start_date", today.as_str()), ("end_date", today.as_str())];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = self.handle_response(response).await?;
        let usage: BillingUsage = response.json().await?;
        Ok(usage.dollars())
    }
}
