use crate::domain::model::EmployeeRecord;

/// Narrows the raw dataset to rows whose job title matches `selected`
/// exactly (case-sensitive, no trimming). `None` means no filter. Operates
/// on the raw rows, before enrichment.
pub fn filter_by_job_title(
    employees: &[EmployeeRecord],
    selected: Option<&str>,
) -> Vec<EmployeeRecord> {
    match selected {
        Some(title) => employees
            .iter()
            .filter(|e| e.job_title.as_deref() == Some(title))
            .cloned()
            .collect(),
        None => employees.to_vec(),
    }
}

/// Distinct job titles in first-seen order, for the filter widget. Rows
/// without a title are skipped.
pub fn distinct_job_titles(employees: &[EmployeeRecord]) -> Vec<String> {
    let mut titles = Vec::new();
    for employee in employees {
        if let Some(title) = &employee.job_title {
            if !titles.contains(title) {
                titles.push(title.clone());
            }
        }
    }
    titles
}
