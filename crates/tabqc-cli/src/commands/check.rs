//! Check command - validate two local files without a server.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tabqc::{
    read_table, validate_tables, CheckSet, Issue, SchemaValidator, StructureValidator,
    ValidationReport,
};

use crate::cli::SuiteChoice;

pub fn run(
    dataset: PathBuf,
    datadic: PathBuf,
    suite: SuiteChoice,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for path in [&dataset, &datadic] {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
    }

    match suite {
        SuiteChoice::Both => {
            let dataset_table = read_table(&dataset)?;
            let datadic_table = read_table(&datadic)?;

            if verbose {
                print_table_shape("dataset", &dataset, &dataset_table);
                print_table_shape("datadic", &datadic, &datadic_table);
            }

            let report = validate_tables(&dataset_table, &datadic_table);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report("structure", &dataset, &report.structure);
                println!();
                print_report("schema", &datadic, &report.schema);
                println!();
                print_summary(
                    failing_checks(&report.structure) + failing_checks(&report.schema),
                );
            }
        }

        SuiteChoice::Structure => {
            let table = read_table(&dataset)?;
            if verbose {
                print_table_shape("dataset", &dataset, &table);
            }

            let report = StructureValidator::new().validate(&table, CheckSet::All);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report("structure", &dataset, &report);
                println!();
                print_summary(failing_checks(&report));
            }
        }

        SuiteChoice::Schema => {
            let table = read_table(&datadic)?;
            if verbose {
                print_table_shape("datadic", &datadic, &table);
            }

            let report = SchemaValidator::new().validate(&table, CheckSet::All);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report("schema", &datadic, &report);
                println!();
                print_summary(failing_checks(&report));
            }
        }
    }

    Ok(())
}

fn print_table_shape(label: &str, path: &Path, table: &tabqc::DataTable) {
    println!(
        "Loaded {} from {} ({} columns, {} rows)",
        label,
        path.display(),
        table.column_count(),
        table.row_count()
    );
}

/// One line per check: name, count, offending identifiers.
fn print_report(suite: &str, source: &Path, report: &ValidationReport) {
    println!(
        "{} {}",
        format!("{suite} checks:").cyan().bold(),
        source.display().to_string().white()
    );

    for row in report.to_long_rows() {
        let count = if row.count == 0 {
            row.count.to_string().green()
        } else {
            row.count.to_string().red().bold()
        };

        if row.issue.is_empty() {
            println!("  {:22} {}", row.check, count);
        } else {
            let issues: Vec<String> = row.issue.iter().map(issue_text).collect();
            println!("  {:22} {}  [{}]", row.check, count, issues.join(", "));
        }
    }
}

fn issue_text(issue: &Issue) -> String {
    match issue {
        Issue::Position(position) => position.to_string(),
        Issue::Name(name) => name.clone(),
    }
}

fn failing_checks(report: &ValidationReport) -> usize {
    report.iter().filter(|(_, result)| result.count > 0).count()
}

fn print_summary(failing: usize) {
    if failing == 0 {
        println!("{}", "All checks passed".green().bold());
    } else {
        println!(
            "{} {} {}",
            failing.to_string().red().bold(),
            if failing == 1 { "check" } else { "checks" },
            "reported issues".red()
        );
    }
}
