use crate::domain::model::{
    EmployeeRecord, EnrichedRecord, ReferenceDictionary, Salary, NOT_AVAILABLE,
};

/// Joins each employee row against the reference dictionary, producing one
/// enriched row per input row in the same order. Lookups that find nothing
/// degrade to the "N/A" sentinel; this function never fails.
pub fn enrich(
    employees: &[EmployeeRecord],
    dictionary: &ReferenceDictionary,
) -> Vec<EnrichedRecord> {
    employees
        .iter()
        .map(|employee| enrich_one(employee, dictionary))
        .collect()
}

fn enrich_one(employee: &EmployeeRecord, dictionary: &ReferenceDictionary) -> EnrichedRecord {
    let company = employee.company_id.and_then(|id| dictionary.company(id));
    // Area lookup only happens inside a matched company.
    let area = match (company, employee.area_id) {
        (Some(company), Some(area_id)) => company.area(area_id),
        _ => None,
    };

    EnrichedRecord {
        company_name: company
            .map(|c| c.name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        area_name: area
            .map(|a| a.name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        employee_id: employee.employee_id.clone(),
        employee_name: employee.employee_name.clone(),
        age: employee.age,
        profession: employee.profession.clone(),
        job_title: employee.job_title.clone(),
        salary: area
            .map(|a| Salary::Amount(a.salary))
            .unwrap_or(Salary::NotAvailable),
        extra: employee.extra.clone(),
    }
}
