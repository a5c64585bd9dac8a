//! # Command Bridge
//!
//! Line-oriented JSON invoke loop between the web front end and the catalog
//! commands. One request per line in, one response per line out.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin   {"cmd": "set_price_range", "args": {"lower": 90, "upper": 200}}│
//! │                                                                         │
//! │  stdout  {"ok": true,  "data": {"filters": {...}, "page": {...}}}       │
//! │     or   {"ok": false, "error": {"code": "INVALID_ARGUMENT", ...}}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A line that is not a valid request gets a `BAD_REQUEST` response and the
//! loop keeps reading. Blank lines are skipped.

use std::io::{self, BufRead, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::commands::{catalog, facets, filters};
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// One request line.
#[derive(Debug, Deserialize)]
pub struct Request {
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Deserialize)]
struct ClassArgs {
    class: String,
}

#[derive(Debug, Deserialize)]
struct CapacityArgs {
    capacity: i64,
}

#[derive(Debug, Deserialize)]
struct PriceRangeArgs {
    lower: i64,
    upper: i64,
}

#[derive(Debug, Deserialize)]
struct VehicleArgs {
    id: String,
}

fn args<T: DeserializeOwned>(cmd: &str, args: Value) -> Result<T, ApiError> {
    serde_json::from_value(args)
        .map_err(|e| ApiError::bad_request(format!("Invalid arguments for {}: {}", cmd, e)))
}

fn to_data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Cannot encode response: {}", e)))
}

/// Routes one request to its command.
pub fn dispatch(request: Request, catalog: &CatalogState, config: &ConfigState) -> Result<Value, ApiError> {
    let Request { cmd, args: raw } = request;

    match cmd.as_str() {
        "get_facets" => to_data(facets::get_facets(catalog, config)),
        "enter_catalog" => to_data(filters::enter_catalog(catalog, config)?),
        "leave_catalog" => to_data(json!({ "left": filters::leave_catalog(catalog) })),
        "get_filters" => to_data(filters::get_filters(catalog, config)?),
        "toggle_class" => {
            let a: ClassArgs = args(&cmd, raw)?;
            to_data(filters::toggle_class(catalog, config, &a.class)?)
        }
        "toggle_capacity" => {
            let a: CapacityArgs = args(&cmd, raw)?;
            to_data(filters::toggle_capacity(catalog, config, a.capacity)?)
        }
        "set_price_range" => {
            let a: PriceRangeArgs = args(&cmd, raw)?;
            to_data(filters::set_price_range(catalog, config, a.lower, a.upper)?)
        }
        "reset_filters" => to_data(filters::reset_filters(catalog, config)?),
        "query_catalog" => to_data(catalog::query_catalog(catalog, config)?),
        "get_featured" => to_data(catalog::get_featured(catalog, config)),
        "get_vehicle" => {
            let a: VehicleArgs = args(&cmd, raw)?;
            to_data(catalog::get_vehicle(catalog, config, &a.id)?)
        }
        "list_booking_options" => to_data(catalog::list_booking_options(catalog)),
        other => Err(ApiError::bad_request(format!("Unknown command: {}", other))),
    }
}

/// Handles one raw line and renders the response envelope.
pub fn handle_line(line: &str, catalog: &CatalogState, config: &ConfigState) -> Value {
    let outcome = serde_json::from_str::<Request>(line)
        .map_err(|e| ApiError::bad_request(format!("Malformed request: {}", e)))
        .and_then(|request| {
            debug!(cmd = %request.cmd, "Dispatching command");
            dispatch(request, catalog, config)
        });

    match outcome {
        Ok(data) => json!({ "ok": true, "data": data }),
        Err(error) => json!({ "ok": false, "error": error }),
    }
}

/// Serves requests until the reader is exhausted.
pub fn serve<R, W>(reader: R, mut writer: W, catalog: &CatalogState, config: &ConfigState) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0u64;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(&line, catalog, config);
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        handled += 1;
    }

    info!(handled, "Bridge input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentdrive_core::{fleet, CatalogConfig};
    use std::io::Cursor;
    use std::sync::Arc;

    fn setup() -> (CatalogState, ConfigState) {
        let catalog = CatalogState::new(
            Arc::new(fleet::default_inventory().unwrap()),
            CatalogConfig::default(),
        );
        (catalog, ConfigState::default())
    }

    fn run(input: &str) -> Vec<Value> {
        let (catalog, config) = setup();
        let mut out = Vec::new();
        serve(Cursor::new(input), &mut out, &catalog, &config).unwrap();

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_session_of_filter_commands() {
        let responses = run(concat!(
            r#"{"cmd": "enter_catalog"}"#,
            "\n",
            r#"{"cmd": "toggle_class", "args": {"class": "SUV"}}"#,
            "\n",
            r#"{"cmd": "set_price_range", "args": {"lower": 90, "upper": 200}}"#,
            "\n",
        ));

        assert_eq!(responses.len(), 3);
        assert!(responses.iter().all(|r| r["ok"] == true));

        let page = &responses[2]["data"]["page"];
        assert_eq!(page["summary"], "Showing 3 vehicles");
        assert_eq!(page["vehicles"][0]["name"], "Honda CR-V");
        assert_eq!(responses[2]["data"]["filters"]["selectedClasses"], json!(["SUV"]));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let responses = run(concat!(
            "not json\n",
            "\n",
            r#"{"cmd": "fly"}"#,
            "\n",
            r#"{"cmd": "toggle_capacity", "args": {"seats": 7}}"#,
            "\n",
            r#"{"cmd": "set_price_range", "args": {"lower": 150, "upper": 100}}"#,
            "\n",
            r#"{"cmd": "get_vehicle", "args": {"id": "42"}}"#,
            "\n",
            r#"{"cmd": "query_catalog"}"#,
            "\n",
        ));

        assert_eq!(responses.len(), 6);
        assert_eq!(responses[0]["error"]["code"], "BAD_REQUEST");
        assert_eq!(responses[1]["error"]["code"], "BAD_REQUEST");
        assert_eq!(responses[2]["error"]["code"], "BAD_REQUEST");
        assert_eq!(responses[3]["error"]["code"], "INVALID_ARGUMENT");
        assert_eq!(responses[4]["error"]["code"], "NOT_FOUND");
        assert_eq!(responses[5]["ok"], true);
        assert_eq!(responses[5]["data"]["count"], 9);
    }

    #[test]
    fn test_encoding_failure_is_internal() {
        // JSON object keys must be strings
        let mut unencodable = std::collections::BTreeMap::new();
        unencodable.insert((1u8, 2u8), 3u8);

        let err = to_data(unencodable).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Internal);
    }

    #[test]
    fn test_read_only_commands() {
        let (catalog, config) = setup();

        let facets = handle_line(r#"{"cmd": "get_facets"}"#, &catalog, &config);
        assert_eq!(facets["data"]["capacities"], json!([5, 7]));

        let featured = handle_line(r#"{"cmd": "get_featured"}"#, &catalog, &config);
        assert_eq!(featured["data"].as_array().map(Vec::len), Some(4));

        let options = handle_line(r#"{"cmd": "list_booking_options"}"#, &catalog, &config);
        assert_eq!(options["data"][0], json!({ "id": "1", "name": "Toyota Alphard" }));

        let left = handle_line(r#"{"cmd": "leave_catalog"}"#, &catalog, &config);
        assert_eq!(left["data"]["left"], false);
    }
}
