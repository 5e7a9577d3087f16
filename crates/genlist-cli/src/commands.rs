use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use genlist_cli::diagnostics::{render_file_report, render_skipped};
use genlist_core::{ListMode, RunOptions, RunReport, run};
use genlist_ingest::discover_category;
use genlist_model::{Category, HeaderLayout};
use genlist_validate::{FileReport, validate_category, validate_file};

use crate::cli::{ListArgs, ValidateArgs};
use crate::summary::{apply_table_style, print_run_summary, print_validation_summary};

pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Tag", "Category", "Columns"]);
    apply_table_style(&mut table);
    for category in Category::ALL {
        let header = category.schema().header(HeaderLayout::Flat).join(",");
        table.add_row(vec![
            category.as_str().to_string(),
            category.label().to_string(),
            header,
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Validates the selected files and returns one report per file.
pub fn run_validate(args: &ValidateArgs) -> Result<Vec<FileReport>> {
    if let Some(file) = &args.file {
        let [category] = args.categories.as_slice() else {
            bail!("--file needs exactly one --category");
        };
        let department = match &args.department {
            Some(name) => name.clone(),
            None => file
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let report = validate_file(*category, &department, file)
            .with_context(|| format!("validate {}", file.display()))?;
        return Ok(vec![report]);
    }

    let span = info_span!("validate", root = %args.root.display());
    let _guard = span.enter();
    let mut reports = Vec::new();
    for category in selected(&args.categories) {
        let Some(source) = discover_category(&args.root, category)
            .with_context(|| format!("discover {category} departments"))?
        else {
            info!(category = %category, "no category directory, skipping");
            continue;
        };
        let category_reports = validate_category(&source)
            .with_context(|| format!("validate {category} files"))?;
        reports.extend(category_reports);
    }
    Ok(reports)
}

/// Prints validation results and returns whether any row had a problem.
pub fn print_validation(reports: &[FileReport], json: bool) -> Result<bool> {
    if json {
        let text = serde_json::to_string_pretty(reports).context("serialize reports")?;
        println!("{text}");
    } else {
        for report in reports {
            print!("{}", render_file_report(report));
        }
        print_validation_summary(reports);
    }
    Ok(reports.iter().any(FileReport::has_problems))
}

pub fn run_lists(args: &ListArgs, mode: ListMode) -> RunReport {
    let mut options = RunOptions::new(&args.root).with_categories(args.categories.clone());
    if let Some(name) = &args.output_name {
        options = options.with_output_name(mode, name.clone());
    }
    let report = run(&options, mode);
    for outcome in &report.outcomes {
        print!("{}", render_skipped(&outcome.stats.skipped));
    }
    print_run_summary(mode, &report);
    report
}

fn selected(categories: &[Category]) -> Vec<Category> {
    if categories.is_empty() {
        Category::ALL.to_vec()
    } else {
        categories.to_vec()
    }
}
