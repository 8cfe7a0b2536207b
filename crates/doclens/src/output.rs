//! Output formatting for coverage reports

use doclens_core::{CategoryReport, ScanResult};
use owo_colors::OwoColorize;
use serde::Serialize;

const SEPARATOR_WIDTH: usize = 80;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a scan result in the specified format
pub fn render_report(result: &ScanResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => render_json(result),
    }
}

fn render_text(result: &ScanResult) -> String {
    let mut output = String::new();

    for report in &result.reports {
        render_category_text(report, &mut output);
        output.push('\n');
    }

    output
}

fn render_category_text(report: &CategoryReport, output: &mut String) {
    let percent = report.coverage_percent();
    let percent_str = format!("{:.1}%", percent);
    let color_percent = if percent >= 80.0 {
        percent_str.green().to_string()
    } else if percent >= 50.0 {
        percent_str.yellow().to_string()
    } else {
        percent_str.red().to_string()
    };

    output.push_str(&format!("{} COVERAGE: {}\n", report.label, color_percent));

    let mut paths: Vec<_> = report.files.keys().collect();
    paths.sort();

    for path in paths {
        let file_report = &report.files[path];
        output.push_str(&"-".repeat(SEPARATOR_WIDTH));
        output.push('\n');
        output.push_str(&format!("FILE: {}\n\n", path.display()));
        for block in &file_report.undocumented {
            output.push_str(&format!("{}: {}\n", block.line, block.signature));
        }
    }
    output.push_str(&"-".repeat(SEPARATOR_WIDTH));
    output.push('\n');

    if !report.skipped.is_empty() {
        output.push_str(&format!(
            "{} {} unreadable file(s) skipped:\n",
            "!".yellow().bold(),
            report.skipped.len()
        ));
        for skipped in &report.skipped {
            output.push_str(&format!(
                "  {} {}: {}\n",
                "-".yellow(),
                skipped.path.display(),
                skipped.reason.dimmed()
            ));
        }
    }
}

#[derive(Serialize)]
struct JsonScan {
    categories: Vec<JsonCategory>,
}

#[derive(Serialize)]
struct JsonCategory {
    label: String,
    coverage_percent: f64,
    total_blocks: usize,
    undocumented_blocks: usize,
    files: Vec<JsonFile>,
    skipped: Vec<JsonSkipped>,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    undocumented: Vec<JsonBlock>,
}

#[derive(Serialize)]
struct JsonBlock {
    line: usize,
    signature: String,
}

#[derive(Serialize)]
struct JsonSkipped {
    path: String,
    reason: String,
}

fn render_json(result: &ScanResult) -> String {
    let categories = result
        .reports
        .iter()
        .map(|report| {
            let mut paths: Vec<_> = report.files.keys().collect();
            paths.sort();

            JsonCategory {
                label: report.label.clone(),
                coverage_percent: report.coverage_percent(),
                total_blocks: report.total_blocks,
                undocumented_blocks: report.undocumented_blocks,
                files: paths
                    .into_iter()
                    .map(|path| {
                        let file_report = &report.files[path];
                        JsonFile {
                            path: path.display().to_string(),
                            undocumented: file_report
                                .undocumented
                                .iter()
                                .map(|block| JsonBlock {
                                    line: block.line,
                                    signature: block.signature.clone(),
                                })
                                .collect(),
                        }
                    })
                    .collect(),
                skipped: report
                    .skipped
                    .iter()
                    .map(|skipped| JsonSkipped {
                        path: skipped.path.display().to_string(),
                        reason: skipped.reason.clone(),
                    })
                    .collect(),
            }
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&JsonScan { categories })
        .expect("JSON serialization failed");
    json.push('\n');
    json
}
