mod args;
mod config;
mod reader;
mod writer;

use payflow::input::OrderRow;
use payflow::{ConnectionConfig, RequestReport, Result, UserInfo};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning compose...");

    let user_info = config::load_user_info()?;
    let connection = ConnectionConfig::from_env()?;

    let reports = compose_requests(&user_info, connection.as_ref())?;

    log::debug!("Compose complete. Beginning report...");

    report_to_std_out(&reports)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read order rows from the input file, compose a request per row, and
/// collect the report rows
fn compose_requests(
    user_info: &UserInfo,
    connection: Option<&ConnectionConfig>,
) -> Result<Vec<RequestReport>> {
    let input_path = args::parse_orders_path()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_orders_reader(input_path)?;

    let mut reports = vec![];

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<OrderRow>() {
        log::debug!("Parsing record into OrderRow: {record:?}");
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing row into OrderTransaction: {row:?}");
        let order = match row.parse_order(user_info, connection) {
            Ok(order) => order,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        reports.push(RequestReport::from_order(&order));
    }

    Ok(reports)
}

/// Build report from composed requests, and write report to stdout
fn report_to_std_out(reports: &[RequestReport]) -> Result {
    let mut wtr = writer::build_report_writer();

    log::debug!("Serializing reports...");
    for report in reports.iter() {
        log::debug!("Serializing report: {report:?}");
        wtr.serialize(report)?;
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    println!("{}", output);

    Ok(())
}
