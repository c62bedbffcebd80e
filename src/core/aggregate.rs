use crate::domain::model::{DashboardSummary, EnrichedRecord, SummaryStatistics};
use std::collections::{BTreeMap, BTreeSet};

/// Which enriched field a bucket groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Company,
    Area,
}

impl GroupKey {
    fn of<'a>(&self, record: &'a EnrichedRecord) -> &'a str {
        match self {
            GroupKey::Company => &record.company_name,
            GroupKey::Area => &record.area_name,
        }
    }
}

/// Salary sum per group. Sentinel salaries contribute 0, not an error.
pub fn sum_salary_by(records: &[EnrichedRecord], key: GroupKey) -> BTreeMap<String, f64> {
    let mut bucket = BTreeMap::new();
    for record in records {
        *bucket.entry(key.of(record).to_string()).or_insert(0.0) += record.salary.or_zero();
    }
    bucket
}

/// Headcount per group, independent of salary validity.
pub fn headcount_by(records: &[EnrichedRecord], key: GroupKey) -> BTreeMap<String, u64> {
    let mut bucket = BTreeMap::new();
    for record in records {
        *bucket.entry(key.of(record).to_string()).or_insert(0u64) += 1;
    }
    bucket
}

/// Scalar summary over the enriched set. Distinct counts include the "N/A"
/// group as its own key. Average age only considers valid positive ages
/// (excluded from numerator and denominator otherwise) and is rounded to
/// one decimal, half away from zero.
pub fn summarize(records: &[EnrichedRecord]) -> DashboardSummary {
    let companies: BTreeSet<&str> = records.iter().map(|r| r.company_name.as_str()).collect();
    let areas: BTreeSet<&str> = records.iter().map(|r| r.area_name.as_str()).collect();
    let total_salary: f64 = records.iter().map(|r| r.salary.or_zero()).sum();

    let ages: Vec<f64> = records
        .iter()
        .filter_map(|r| r.age)
        .filter(|age| *age > 0.0)
        .collect();
    let average_age = if ages.is_empty() {
        0.0
    } else {
        round_one_decimal(ages.iter().sum::<f64>() / ages.len() as f64)
    };

    DashboardSummary {
        companies: companies.len(),
        areas: areas.len(),
        employees: records.len(),
        total_salary,
        average_age,
    }
}

/// Statistics for a KPI summary card. An empty bucket yields all zeroes;
/// the average divides by the number of distinct keys.
pub fn bucket_statistics(bucket: &BTreeMap<String, f64>) -> SummaryStatistics {
    if bucket.is_empty() {
        return SummaryStatistics::default();
    }

    let total: f64 = bucket.values().sum();
    let max = bucket.values().fold(f64::MIN, |acc, v| acc.max(*v));
    let min = bucket.values().fold(f64::MAX, |acc, v| acc.min(*v));

    SummaryStatistics {
        count: bucket.len(),
        total,
        average: total / bucket.len() as f64,
        max,
        min,
    }
}

/// Fictional sustainability metric carried over from the dashboard: each
/// employee is assumed to process a fixed amount of recyclable material per
/// month, scaled by a per-company rate. Purely illustrative, but it shares
/// the grouping machinery with the real KPIs.
#[derive(Debug, Clone)]
pub struct RecyclingModel {
    pub rates: BTreeMap<String, f64>,
    pub default_rate: f64,
    pub kg_per_employee: f64,
}

impl Default for RecyclingModel {
    fn default() -> Self {
        Self {
            rates: BTreeMap::new(),
            default_rate: 0.65,
            kg_per_employee: 200.0,
        }
    }
}

impl RecyclingModel {
    pub fn with_rate(mut self, company: &str, rate: f64) -> Self {
        self.rates.insert(company.to_string(), rate);
        self
    }

    fn rate_for(&self, company: &str) -> f64 {
        self.rates.get(company).copied().unwrap_or(self.default_rate)
    }
}

/// Estimated recycled kilograms per company, rounded to whole kilograms.
pub fn estimate_recycling(
    headcounts: &BTreeMap<String, u64>,
    model: &RecyclingModel,
) -> BTreeMap<String, f64> {
    headcounts
        .iter()
        .map(|(company, count)| {
            let kilograms = *count as f64 * model.kg_per_employee * model.rate_for(company);
            (company.clone(), kilograms.round())
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
