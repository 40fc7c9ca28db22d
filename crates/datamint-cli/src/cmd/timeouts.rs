use anyhow::Result;
use datamint_core::metadata::timeout::TimeoutLabel;
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct TimeoutOut {
    pub label: &'static str,
    pub seconds: u64,
}

pub fn run() -> Result<()> {
    let rows: Vec<TimeoutOut> = TimeoutLabel::ALL
        .iter()
        .map(|l| TimeoutOut {
            label: l.as_str(),
            seconds: l.seconds(),
        })
        .collect();
    output::print(&rows)
}
