use crate::domain::model::{EmployeeRecord, ReferenceDictionary, DEFAULT_PROFESSION};
use crate::utils::error::Result;

/// Employee dataset columns the schema knows about. Anything else in the
/// sheet passes through unenriched via `extra`.
const COL_EMPLOYEE_ID: &str = "employeeId";
const COL_EMPLOYEE_NAME: &str = "employeeName";
const COL_AGE: &str = "age";
const COL_PROFESSION: &str = "profession";
const COL_JOB_TITLE: &str = "jobTitle";
const COL_COMPANY_ID: &str = "companyId";
const COL_AREA_ID: &str = "areaId";

/// Parses the employee spreadsheet (CSV with a header row). Validation
/// happens here, at the load boundary: empty cells become `None`,
/// unparsable numeric cells degrade to `None` instead of failing the load,
/// and a missing profession gets the placeholder value. Cell text is kept
/// verbatim otherwise; the job-title filter relies on exact values.
pub fn parse_employees(bytes: &[u8]) -> Result<Vec<EmployeeRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers = reader.headers()?.clone();

    let mut employees = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = EmployeeRecord::default();

        for (header, cell) in headers.iter().zip(row.iter()) {
            if cell.is_empty() {
                continue;
            }
            match header {
                COL_EMPLOYEE_ID => record.employee_id = Some(cell.to_string()),
                COL_EMPLOYEE_NAME => record.employee_name = Some(cell.to_string()),
                COL_AGE => record.age = cell.parse::<f64>().ok(),
                COL_PROFESSION => record.profession = Some(cell.to_string()),
                COL_JOB_TITLE => record.job_title = Some(cell.to_string()),
                COL_COMPANY_ID => record.company_id = cell.parse::<i64>().ok(),
                COL_AREA_ID => record.area_id = cell.parse::<i64>().ok(),
                other => {
                    record.extra.insert(other.to_string(), cell.to_string());
                }
            }
        }

        if record.profession.is_none() {
            record.profession = Some(DEFAULT_PROFESSION.to_string());
        }

        employees.push(record);
    }

    Ok(employees)
}

/// Parses the company/area reference dictionary from its JSON source.
pub fn parse_dictionary(bytes: &[u8]) -> Result<ReferenceDictionary> {
    Ok(serde_json::from_slice(bytes)?)
}
