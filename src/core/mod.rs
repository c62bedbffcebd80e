pub mod aggregate;
pub mod engine;
pub mod enrich;
pub mod export;
pub mod filter;
pub mod pipeline;
pub mod source;

pub use crate::domain::model::{DashboardView, EmployeeRecord, EnrichedRecord, SourceData};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
