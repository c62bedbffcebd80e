use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives one full refresh of the dashboard data: extract both sources,
/// recompute the view, write the exports. Recomputation is cheap and
/// idempotent; a later run simply supersedes an earlier one's output.
pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading employee dataset and reference dictionary...");
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} employee records (dictionary available: {})",
            data.employees.len(),
            data.dictionary.is_some()
        );

        tracing::info!("Computing dashboard view...");
        let view = self.pipeline.transform(data).await?;
        tracing::info!(
            "Enriched {} records across {} companies and {} areas, total salary {}",
            view.records.len(),
            view.summary.companies,
            view.summary.areas,
            view.summary.total_salary
        );

        tracing::info!("Exporting processed records and KPI summary...");
        let output_path = self.pipeline.load(view).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
