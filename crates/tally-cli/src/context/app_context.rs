use anyhow::Context;
use tally_airtable::AirtableClient;
use tally_config::TallyConfig;
use tally_core::EvaluationRow;
use tally_report::ReportContext;

/// Configuration plus the compiled report context, built once per run.
pub struct AppContext {
    pub config: TallyConfig,
    pub report: ReportContext,
}

impl AppContext {
    pub fn init(config: TallyConfig) -> anyhow::Result<Self> {
        let report = ReportContext::from_config(&config)
            .context("failed to compile evaluator roster and category labels")?;
        Ok(Self { config, report })
    }

    /// Fetch every evaluation row from Airtable.
    pub async fn load_rows(&self) -> anyhow::Result<Vec<EvaluationRow>> {
        let client = AirtableClient::from_config(&self.config.airtable)
            .context("cannot reach the evaluation table (set TALLY_AIRTABLE__API_KEY, __BASE_ID and __TABLE_ID)")?;
        let rows = client
            .load_rows()
            .await
            .context("failed to load evaluation rows from Airtable")?;
        tracing::debug!(rows = rows.len(), "loaded evaluation rows");
        Ok(rows)
    }
}
