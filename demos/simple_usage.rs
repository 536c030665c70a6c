/// Simple example demonstrating how to use the Corpus Analyzer library

use anyhow::Result;
use corpus_analyzer::analyze_file;
use std::path::Path;

fn main() -> Result<()> {
    let dir = std::env::temp_dir();
    let file_path = dir.join("corpus_analyzer_sample.txt");

    // Create sample word list
    std::fs::write(
        &file_path,
        "Summer2019!\nsummer2019\nPassword1\nP@ssw0rd!\nmonkey1987\nWelcome2024\nletmein\n",
    )?;

    println!("Analyzing file: {}", file_path.display());

    let report = analyze_file(Path::new(&file_path), &["pass", "summer"])?;

    println!("Total words: {}", report.total_words);
    for stat in &report.keywords {
        println!("  {}: {} ({:.2}%)", stat.keyword, stat.count, stat.percentage);
    }
    for rule in report.rules.iter().filter(|rule| rule.count > 0) {
        println!("  {}: {} ({:.2}%)", rule.name, rule.count, rule.percentage);
    }

    Ok(())
}
