use payflow::RequestReport;

use std::{path::Path, process::Command};

use csv::{ReaderBuilder, Trim};

/// Runs the composer binary against an input file with test credentials,
/// returning the parsed report rows from stdout
fn run_composer(input_file: &Path, host: Option<&str>) -> Vec<RequestReport> {
    let mut command = Command::new("cargo");

    command
        .args(["run", "--", input_file.to_str().unwrap()])
        .env("PAYFLOW_USER", "merchant")
        .env("PAYFLOW_PARTNER", "PayPal")
        .env("PAYFLOW_PWD", "hunter2")
        .env_remove("PAYFLOW_VENDOR")
        .env_remove("PAYFLOW_PORT")
        .env_remove("PAYFLOW_TIMEOUT_SECS");

    match host {
        Some(host) => {
            command.env("PAYFLOW_HOST", host);
        }
        None => {
            command.env_remove("PAYFLOW_HOST");
        }
    }

    // Running command directly to prove everything works as expected
    let output = command.output().unwrap();

    println!("{}", String::from_utf8(output.stderr).unwrap());

    let output = String::from_utf8(output.stdout).unwrap();

    let mut output_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(output.as_bytes());

    let mut actual: Vec<RequestReport> = vec![];

    for record in output_reader.deserialize() {
        actual.push(record.unwrap());
    }

    actual
}

fn read_expected(expected_file: &Path) -> Vec<RequestReport> {
    let mut expected_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(expected_file)
        .unwrap();

    let mut expected: Vec<RequestReport> = vec![];

    for record in expected_reader.deserialize() {
        expected.push(record.unwrap());
    }

    expected
}

#[test]
fn composes_orders_against_ambient_connection() {
    let input_file = Path::new("./resources/test-examples/inputs/orders_1.csv");
    let expected_file = Path::new("./resources/test-examples/expected/requests_1.csv");

    let mut actual = run_composer(input_file, None);
    let mut expected = read_expected(expected_file);

    // Sort to ensure order doesn't matter
    actual.sort();
    expected.sort();

    assert_eq!(actual, expected);
}

#[test]
fn composes_orders_against_explicit_connection() {
    let input_file = Path::new("./resources/test-examples/inputs/orders_2.csv");
    let expected_file = Path::new("./resources/test-examples/expected/requests_2.csv");

    // The row without an amount is warned about and skipped
    let mut actual = run_composer(input_file, Some("pilot-payflowpro.paypal.com"));
    let mut expected = read_expected(expected_file);

    actual.sort();
    expected.sort();

    assert_eq!(actual, expected);
}
