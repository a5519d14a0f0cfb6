//! Console rendering of a demo report.

use crate::config::OutputFormat;
use crate::demo::DemoReport;

pub fn render(report: &DemoReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report)?;
            out.push('\n');
            Ok(out)
        }
    }
}

pub fn render_text(report: &DemoReport) -> String {
    report.to_string()
}
