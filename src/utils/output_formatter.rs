/// Output formatter for analysis reports
///
/// This module handles formatting and exporting reports in various formats,
/// including console output, JSON, HTML, and CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::core::report::{RankedEntry, Report};

/// Format a report for console output
///
/// # Arguments
///
/// * `report` - Analysis report
/// * `use_markdown` - Whether to wrap the output in a markdown code block
///
/// # Returns
///
/// Formatted string for console output
pub fn format_report(report: &Report, use_markdown: bool) -> String {
    let mut output = String::new();

    if use_markdown {
        output.push_str("```\n");
    }

    if let Some(source) = &report.source {
        output.push_str(&format!(
            "{} {} ({} bytes, {} lines, sha256 {})\n",
            "Source:".cyan().bold(),
            source.file_name,
            source.file_size,
            source.line_count,
            source.sha256
        ));
    }

    output.push_str(&format!(
        "{} {}\n",
        "Total words in the file:".green(),
        report.total_words
    ));

    output.push_str(&format!(
        "{}\n",
        "Word percentages based on the total number of strings loaded:".yellow().bold()
    ));
    for stat in &report.keywords {
        output.push_str(&format!("  {}: {:.2}%\n", stat.keyword, stat.percentage));
    }

    output.push_str(&format!(
        "{}\n",
        "Occurrences of words or their substrings in the keyword list:".yellow().bold()
    ));
    for stat in &report.keywords {
        output.push_str(&format!("  {}: {}\n", stat.keyword, stat.count));
    }

    output.push_str(&format!(
        "{}\n",
        "Word count by number of characters:".yellow().bold()
    ));
    for bucket in &report.length_histogram {
        output.push_str(&format!(
            "  Words with {} characters: {}\n",
            bucket.length, bucket.count
        ));
    }

    output.push_str(&format!(
        "\n{}\n",
        format!("Top {} most used character sequences:", report.top).yellow().bold()
    ));
    push_ranked(&mut output, &report.top_sequences, "Sequence Count");

    for summary in &report.char_classes {
        output.push_str(&format!(
            "\n{}\n",
            format!(
                "Top {} most frequent {} characters:",
                report.top,
                summary.class.label()
            )
            .yellow()
            .bold()
        ));
        push_ranked(&mut output, &summary.top, "Count");
    }

    output.push_str(&format!("\n{}\n", "Additional Rules:".yellow().bold()));
    for rule in &report.rules {
        output.push_str(&format!(
            "{}: Count: {}, Percentage: {:.2}%\n",
            rule.name.cyan(),
            rule.count,
            rule.percentage
        ));
    }

    if use_markdown {
        output.push_str("```\n");
    }

    output
}

fn push_ranked(output: &mut String, entries: &[RankedEntry], count_label: &str) {
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({}: {}, Percentage: {:.2}%)\n",
            i + 1,
            entry.value,
            count_label,
            entry.count,
            entry.percentage
        ));
    }
}

/// Export a report to a JSON file
///
/// # Arguments
///
/// * `report` - Analysis report
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_report_json(report: &Report, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, report).context("Failed to write JSON data")?;

    Ok(())
}

/// Flatten a report into `(section, label, count, percentage)` rows
///
/// Rows without a percentage carry an empty string in that column.
pub fn report_rows(report: &Report) -> Vec<[String; 4]> {
    let mut rows = Vec::new();

    rows.push([
        "total".to_string(),
        "words".to_string(),
        report.total_words.to_string(),
        String::new(),
    ]);

    for stat in &report.keywords {
        rows.push([
            "keyword".to_string(),
            stat.keyword.clone(),
            stat.count.to_string(),
            format!("{:.2}", stat.percentage),
        ]);
    }

    for bucket in &report.length_histogram {
        rows.push([
            "length".to_string(),
            bucket.length.to_string(),
            bucket.count.to_string(),
            String::new(),
        ]);
    }

    for entry in &report.top_sequences {
        rows.push([
            "sequence".to_string(),
            entry.value.clone(),
            entry.count.to_string(),
            format!("{:.2}", entry.percentage),
        ]);
    }

    for summary in &report.char_classes {
        for entry in &summary.top {
            rows.push([
                format!("{}_char", summary.class.label()),
                entry.value.clone(),
                entry.count.to_string(),
                format!("{:.2}", entry.percentage),
            ]);
        }
    }

    for rule in &report.rules {
        rows.push([
            "rule".to_string(),
            rule.name.clone(),
            rule.count.to_string(),
            format!("{:.2}", rule.percentage),
        ]);
    }

    rows
}

/// Create a CSV report
///
/// # Arguments
///
/// * `report` - Analysis report
/// * `output_path` - Path where the CSV file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_csv_report(report: &Report, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["Section", "Label", "Count", "Percentage"])
        .context("Failed to write CSV header")?;

    for row in report_rows(report) {
        writer.write_record(&row).context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

const HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Corpus Analysis Report</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }
        h1 {
            color: #2c3e50;
            border-bottom: 2px solid #3498db;
            padding-bottom: 10px;
        }
        h2 {
            color: #2980b9;
            margin-top: 30px;
        }
        table {
            border-collapse: collapse;
            margin-bottom: 20px;
        }
        th, td {
            padding: 4px 12px;
            border-bottom: 1px solid #eee;
            text-align: left;
        }
        .timestamp {
            color: #7f8c8d;
            font-size: 0.9em;
            margin-bottom: 30px;
        }
        .summary {
            background-color: #e8f4f8;
            padding: 15px;
            border-radius: 5px;
            margin-bottom: 30px;
        }
    </style>
</head>
<body>
    <h1>Corpus Analysis Report</h1>
    <div class="timestamp">Generated on: {{timestamp}}</div>

    <div class="summary">
        {{#if source}}
        <p>File: {{source.file_name}} ({{source.file_size}} bytes, {{source.line_count}} lines)</p>
        <p>SHA-256: {{source.sha256}}</p>
        {{/if}}
        <p>Total words: {{total_words}}</p>
    </div>

    {{#each sections}}
    <h2>{{title}}</h2>
    {{#if rows}}
    <table>
        <tr><th>{{label}}</th><th>Count</th><th>Percentage</th></tr>
        {{#each rows}}
        <tr><td>{{label}}</td><td>{{count}}</td><td>{{percentage}}</td></tr>
        {{/each}}
    </table>
    {{else}}
    <p>No data.</p>
    {{/if}}
    {{/each}}
</body>
</html>
"#;

fn html_section(title: String, label: &str, rows: Vec<Value>) -> Value {
    json!({ "title": title, "label": label, "rows": rows })
}

fn html_row(label: impl ToString, count: usize, percentage: Option<f64>) -> Value {
    json!({
        "label": label.to_string(),
        "count": count,
        "percentage": percentage.map(|p| format!("{:.2}%", p)).unwrap_or_default(),
    })
}

/// Create an HTML report
///
/// # Arguments
///
/// * `report` - Analysis report
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_html_report(report: &Report, output_path: &Path) -> Result<()> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    let ranked = |entries: &[RankedEntry]| -> Vec<Value> {
        entries
            .iter()
            .map(|entry| html_row(&entry.value, entry.count, Some(entry.percentage)))
            .collect()
    };

    let mut sections = vec![
        html_section(
            "Keywords".to_string(),
            "Keyword",
            report
                .keywords
                .iter()
                .map(|stat| html_row(&stat.keyword, stat.count, Some(stat.percentage)))
                .collect(),
        ),
        html_section(
            "Word count by number of characters".to_string(),
            "Length",
            report
                .length_histogram
                .iter()
                .map(|bucket| html_row(bucket.length, bucket.count, None))
                .collect(),
        ),
        html_section(
            format!("Top {} most used character sequences", report.top),
            "Sequence",
            ranked(&report.top_sequences),
        ),
    ];

    for summary in &report.char_classes {
        sections.push(html_section(
            format!("Top {} most frequent {} characters", report.top, summary.class.label()),
            "Character",
            ranked(&summary.top),
        ));
    }

    sections.push(html_section(
        "Additional rules".to_string(),
        "Rule",
        report
            .rules
            .iter()
            .map(|rule| html_row(&rule.name, rule.count, Some(rule.percentage)))
            .collect(),
    ));

    let template_data = json!({
        "timestamp": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "source": report.source,
        "total_words": report.total_words,
        "sections": sections,
    });

    let html = handlebars
        .render("report", &template_data)
        .context("Failed to render HTML template")?;

    let mut file = File::create(output_path)
        .context(format!("Failed to create HTML output file: {}", output_path.display()))?;

    file.write_all(html.as_bytes())
        .context("Failed to write HTML data")?;

    Ok(())
}
