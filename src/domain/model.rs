use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Sentinel written into enriched fields when a dictionary lookup finds
/// nothing. Distinct from an empty cell: aggregation must skip it, never
/// coerce it to 0 outside the documented summation rule.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder filled in at the load boundary for rows without a profession.
pub const DEFAULT_PROFESSION: &str = "Unassigned";

/// One row of the employee spreadsheet. Every field is optional: malformed
/// rows are carried through and degrade to defaults during enrichment
/// instead of being rejected. Columns the schema does not know about are
/// preserved verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "employeeId")]
    pub employee_id: Option<String>,
    #[serde(rename = "employeeName")]
    pub employee_name: Option<String>,
    pub age: Option<f64>,
    pub profession: Option<String>,
    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,
    #[serde(rename = "companyId")]
    pub company_id: Option<i64>,
    #[serde(rename = "areaId")]
    pub area_id: Option<i64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// Reference dictionary: companies, each with its areas and the salary
/// attached to the area. Key casing mirrors the dictionary source exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDictionary {
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub areas: Vec<Area>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub salary: f64,
}

impl ReferenceDictionary {
    /// First company with a matching id; duplicates in the dictionary are
    /// tolerated by taking the earliest entry.
    pub fn company(&self, id: i64) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }
}

impl Company {
    pub fn area(&self, id: i64) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }
}

/// A salary cell after enrichment: either the amount from the matched area
/// or the "N/A" sentinel. Serializes as a number or the literal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Salary {
    Amount(f64),
    NotAvailable,
}

impl Salary {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Salary::Amount(v) => Some(*v),
            Salary::NotAvailable => None,
        }
    }

    /// Summation rule: the sentinel contributes 0 to a sum.
    pub fn or_zero(&self) -> f64 {
        self.amount().unwrap_or(0.0)
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Salary::Amount(v) => serializer.serialize_f64(*v),
            Salary::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value.as_f64() {
            Some(v) => Salary::Amount(v),
            None => Salary::NotAvailable,
        })
    }
}

/// An employee row joined against the reference dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "areaName")]
    pub area_name: String,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<String>,
    #[serde(rename = "employeeName")]
    pub employee_name: Option<String>,
    pub age: Option<f64>,
    pub profession: Option<String>,
    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,
    pub salary: Salary,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// Scalar summary shown in the dashboard header chips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub companies: usize,
    pub areas: usize,
    pub employees: usize,
    #[serde(rename = "totalSalary")]
    pub total_salary: f64,
    #[serde(rename = "averageAge")]
    pub average_age: f64,
}

/// Derived statistics over one aggregate bucket, for the KPI summary cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

/// Output of the extract step. `dictionary` is `None` when the dictionary
/// source failed to load; downstream computation then short-circuits to the
/// empty view instead of enriching everything to "N/A".
#[derive(Debug, Clone, Default)]
pub struct SourceData {
    pub employees: Vec<EmployeeRecord>,
    pub dictionary: Option<ReferenceDictionary>,
}

/// Everything the presentation layer displays, recomputed as a whole
/// whenever the dataset or the active filter changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardView {
    /// Rows for the table and the export; excluded from the serialized KPI
    /// summary, which only carries the aggregate numbers.
    #[serde(skip)]
    pub records: Vec<EnrichedRecord>,
    #[serde(rename = "jobTitles")]
    pub job_titles: Vec<String>,
    pub summary: DashboardSummary,
    #[serde(rename = "salaryByCompany")]
    pub salary_by_company: BTreeMap<String, f64>,
    #[serde(rename = "salaryByArea")]
    pub salary_by_area: BTreeMap<String, f64>,
    #[serde(rename = "headcountByCompany")]
    pub headcount_by_company: BTreeMap<String, u64>,
    #[serde(rename = "headcountByArea")]
    pub headcount_by_area: BTreeMap<String, u64>,
    #[serde(rename = "recyclingByCompany")]
    pub recycling_by_company: BTreeMap<String, f64>,
    pub financial: SummaryStatistics,
    pub environmental: SummaryStatistics,
}

impl DashboardView {
    /// The "no data available" state: empty table, all-zero KPIs.
    pub fn empty() -> Self {
        Self::default()
    }
}
