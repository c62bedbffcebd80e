use hr_dashboard::{CliConfig, DashboardEngine, DashboardPipeline, LocalStorage};
use httpmock::prelude::*;
use tempfile::TempDir;

const DATASET: &str = "\
employeeId,employeeName,age,profession,jobTitle,companyId,areaId,badge
E-1,Ada,30,Engineer,Lead,1,10,B-7
E-2,Grace,25,Analyst,Analyst,1,99,
E-3,Alan,40,Chemist,Lead,2,10,B-9
";

const DICTIONARY: &str = r#"{"companies":[{"id":1,"name":"Acme","areas":[{"id":10,"name":"Ops","salary":500000}]}]}"#;

fn config(server: &MockServer, output_path: &str, job_title: Option<&str>) -> CliConfig {
    CliConfig {
        dataset_url: server.url("/employees.csv"),
        dictionary_url: server.url("/dictionary.json"),
        output_path: output_path.to_string(),
        job_title: job_title.map(str::to_string),
        verbose: false,
    }
}

fn mount_sources(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/employees.csv");
        then.status(200).body(DATASET);
    });
    server.mock(|when, then| {
        when.method(GET).path("/dictionary.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(DICTIONARY);
    });
}

async fn run_once(server: &MockServer, output_path: &str, job_title: Option<&str>) -> String {
    let storage = LocalStorage::new(output_path.to_string());
    let pipeline = DashboardPipeline::new(storage, config(server, output_path, job_title));
    let engine = DashboardEngine::new(pipeline);
    engine.run().await.unwrap()
}

#[tokio::test]
async fn test_end_to_end_enrichment_and_export() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    mount_sources(&server);

    let result = run_once(&server, &output_path, None).await;
    assert_eq!(result, output_path);

    let csv_path = temp_dir.path().join("processed_records.csv");
    let csv_content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv_content.lines().collect();

    assert_eq!(lines.len(), 4); // header + 3 records
    assert_eq!(
        lines[0],
        "companyName,areaName,employeeId,employeeName,age,profession,jobTitle,salary,badge"
    );
    assert_eq!(lines[1], "Acme,Ops,E-1,Ada,30,Engineer,Lead,500000,B-7");
    assert_eq!(lines[2], "Acme,N/A,E-2,Grace,25,Analyst,Analyst,N/A,");
    assert_eq!(lines[3], "N/A,N/A,E-3,Alan,40,Chemist,Lead,N/A,B-9");

    let summary_path = temp_dir.path().join("dashboard_summary.json");
    let summary: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&summary_path).unwrap()).unwrap();

    assert_eq!(summary["summary"]["employees"], 3);
    assert_eq!(summary["summary"]["companies"], 2);
    assert_eq!(summary["summary"]["areas"], 2);
    assert_eq!(summary["summary"]["totalSalary"], 500000.0);
    assert_eq!(summary["summary"]["averageAge"], 31.7);
    assert_eq!(summary["salaryByCompany"]["Acme"], 500000.0);
    assert_eq!(summary["salaryByCompany"]["N/A"], 0.0);
    assert_eq!(summary["headcountByCompany"]["Acme"], 2);
    assert_eq!(summary["jobTitles"], serde_json::json!(["Lead", "Analyst"]));
    assert_eq!(summary["financial"]["total"], 500000.0);
    // 2 * 200 * 0.65 and 1 * 200 * 0.65.
    assert_eq!(summary["recyclingByCompany"]["Acme"], 260.0);
    assert_eq!(summary["recyclingByCompany"]["N/A"], 130.0);
}

#[tokio::test]
async fn test_end_to_end_with_job_title_filter() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    mount_sources(&server);

    run_once(&server, &output_path, Some("Lead")).await;

    let csv_content =
        std::fs::read_to_string(temp_dir.path().join("processed_records.csv")).unwrap();
    let lines: Vec<&str> = csv_content.lines().collect();

    assert_eq!(lines.len(), 3); // header + the two Lead rows
    assert!(lines.iter().all(|l| !l.contains("Grace")));

    let summary: serde_json::Value = serde_json::from_slice(
        &std::fs::read(temp_dir.path().join("dashboard_summary.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["summary"]["employees"], 2);
    // The filter widget still offers every title from the raw dataset.
    assert_eq!(summary["jobTitles"], serde_json::json!(["Lead", "Analyst"]));
}

#[tokio::test]
async fn test_end_to_end_with_unavailable_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/employees.csv");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/dictionary.json");
        then.status(200).body(DICTIONARY);
    });

    // Load failures degrade to the empty dashboard, never a crash.
    let result = run_once(&server, &output_path, None).await;
    assert_eq!(result, output_path);

    let csv_content =
        std::fs::read_to_string(temp_dir.path().join("processed_records.csv")).unwrap();
    assert_eq!(csv_content.lines().count(), 1); // header only

    let summary: serde_json::Value = serde_json::from_slice(
        &std::fs::read(temp_dir.path().join("dashboard_summary.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["summary"]["employees"], 0);
    assert_eq!(summary["summary"]["totalSalary"], 0.0);
    assert_eq!(summary["financial"]["average"], 0.0);
}

#[tokio::test]
async fn test_repeated_runs_are_byte_identical() {
    let server = MockServer::start();
    mount_sources(&server);

    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    run_once(&server, first_dir.path().to_str().unwrap(), None).await;
    run_once(&server, second_dir.path().to_str().unwrap(), None).await;

    for file in ["processed_records.csv", "dashboard_summary.json"] {
        let first = std::fs::read(first_dir.path().join(file)).unwrap();
        let second = std::fs::read(second_dir.path().join(file)).unwrap();
        assert_eq!(first, second, "{} differs between identical runs", file);
    }
}
