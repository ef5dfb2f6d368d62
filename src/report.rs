//! Order report serialization

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::CorsoError;

/// Ordered course list written as `{"order": [...]}`
#[derive(Debug, Serialize)]
pub struct OrderReport {
    pub order: Vec<String>,
}

impl OrderReport {
    pub fn from_order(order: &[Arc<str>]) -> Self {
        Self {
            order: order.iter().map(|code| code.to_string()).collect(),
        }
    }
}

/// Write a report as pretty-printed JSON
pub fn write_report(path: &Path, report: &OrderReport) -> Result<(), CorsoError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
