use crate::core::aggregate::{self, GroupKey, RecyclingModel};
use crate::core::filter::{distinct_job_titles, filter_by_job_title};
use crate::core::{enrich, export, source};
use crate::domain::model::{DashboardView, SourceData};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{DashboardError, Result};
use reqwest::Client;

pub const RECORDS_FILE: &str = "processed_records.csv";
pub const SUMMARY_FILE: &str = "dashboard_summary.json";

pub struct DashboardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
    recycling_model: RecyclingModel,
}

impl<S: Storage, C: ConfigProvider> DashboardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
            recycling_model: RecyclingModel::default(),
        }
    }

    pub fn with_recycling_model(mut self, model: RecyclingModel) -> Self {
        self.recycling_model = model;
        self
    }

    /// One-shot GET. Loads are never retried; a failure here surfaces as
    /// the "no data available" state in extract.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DashboardError::ProcessingError {
                message: format!("{} returned status {}", url, response.status()),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DashboardPipeline<S, C> {
    async fn extract(&self) -> Result<SourceData> {
        let employees = match self.fetch(self.config.dataset_url()).await {
            Ok(bytes) => match source::parse_employees(&bytes) {
                Ok(employees) => employees,
                Err(e) => {
                    tracing::warn!("Employee dataset unreadable, treating as empty: {}", e);
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!("Employee dataset unavailable: {}", e);
                Vec::new()
            }
        };

        let dictionary = match self.fetch(self.config.dictionary_url()).await {
            Ok(bytes) => match source::parse_dictionary(&bytes) {
                Ok(dictionary) => Some(dictionary),
                Err(e) => {
                    tracing::warn!("Reference dictionary unreadable: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Reference dictionary unavailable: {}", e);
                None
            }
        };

        Ok(SourceData {
            employees,
            dictionary,
        })
    }

    async fn transform(&self, data: SourceData) -> Result<DashboardView> {
        let Some(dictionary) = data.dictionary else {
            tracing::warn!("No reference dictionary loaded, rendering empty dashboard");
            return Ok(DashboardView::empty());
        };
        if data.employees.is_empty() {
            tracing::warn!("Employee dataset is empty, rendering empty dashboard");
            return Ok(DashboardView::empty());
        }

        // Filter applies to the raw rows; everything downstream sees only
        // the filtered subset. The job-title list comes from the full set
        // so the filter widget keeps its options.
        let job_titles = distinct_job_titles(&data.employees);
        let filtered = filter_by_job_title(&data.employees, self.config.job_title());
        let records = enrich::enrich(&filtered, &dictionary);

        let salary_by_company = aggregate::sum_salary_by(&records, GroupKey::Company);
        let salary_by_area = aggregate::sum_salary_by(&records, GroupKey::Area);
        let headcount_by_company = aggregate::headcount_by(&records, GroupKey::Company);
        let headcount_by_area = aggregate::headcount_by(&records, GroupKey::Area);
        let recycling_by_company =
            aggregate::estimate_recycling(&headcount_by_company, &self.recycling_model);

        let financial = aggregate::bucket_statistics(&salary_by_company);
        let environmental = aggregate::bucket_statistics(&recycling_by_company);
        let summary = aggregate::summarize(&records);

        Ok(DashboardView {
            records,
            job_titles,
            summary,
            salary_by_company,
            salary_by_area,
            headcount_by_company,
            headcount_by_area,
            recycling_by_company,
            financial,
            environmental,
        })
    }

    async fn load(&self, view: DashboardView) -> Result<String> {
        let csv_data = export::records_to_csv(&view.records)?;
        tracing::debug!(
            "Writing {} ({} rows, {} bytes)",
            RECORDS_FILE,
            view.records.len(),
            csv_data.len()
        );
        self.storage.write_file(RECORDS_FILE, &csv_data).await?;

        let summary_data = serde_json::to_vec_pretty(&view)?;
        self.storage.write_file(SUMMARY_FILE, &summary_data).await?;

        Ok(self.config.output_path().to_string())
    }
}
