use crate::domain::model::{DashboardView, SourceData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn dataset_url(&self) -> &str;
    fn dictionary_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn job_title(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceData>;
    async fn transform(&self, data: SourceData) -> Result<DashboardView>;
    async fn load(&self, view: DashboardView) -> Result<String>;
}
