use crate::domain::model::{EnrichedRecord, Salary, NOT_AVAILABLE};
use crate::utils::error::{DashboardError, Result};
use std::collections::BTreeSet;

const BASE_COLUMNS: [&str; 8] = [
    "companyName",
    "areaName",
    "employeeId",
    "employeeName",
    "age",
    "profession",
    "jobTitle",
    "salary",
];

/// Serializes the currently displayed rows as CSV: uniform headers across
/// all rows (the eight enriched columns plus the sorted union of extra
/// columns), one row per record. Missing optional fields export as empty
/// cells; the salary sentinel exports as the literal "N/A".
pub fn records_to_csv(records: &[EnrichedRecord]) -> Result<Vec<u8>> {
    let extra_columns: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.extra.keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(
        BASE_COLUMNS
            .iter()
            .copied()
            .chain(extra_columns.iter().copied()),
    )?;

    for record in records {
        let mut row = vec![
            record.company_name.clone(),
            record.area_name.clone(),
            record.employee_id.clone().unwrap_or_default(),
            record.employee_name.clone().unwrap_or_default(),
            record.age.map(format_number).unwrap_or_default(),
            record.profession.clone().unwrap_or_default(),
            record.job_title.clone().unwrap_or_default(),
            format_salary(record.salary),
        ];
        for column in &extra_columns {
            row.push(record.extra.get(*column).cloned().unwrap_or_default());
        }
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| DashboardError::ProcessingError {
            message: format!("Failed to finalize CSV export: {}", e),
        })
}

fn format_salary(salary: Salary) -> String {
    match salary {
        Salary::Amount(v) => format_number(v),
        Salary::NotAvailable => NOT_AVAILABLE.to_string(),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
