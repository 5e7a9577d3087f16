//! Diagnostic text rendered for department maintainers.

use std::fs;
use std::path::PathBuf;

use genlist_cli::diagnostics::{render_file_report, render_skipped};
use genlist_core::{ListMode, RunOptions, run_category};
use genlist_model::Category;
use genlist_validate::{FieldIssue, FileReport, RowProblem, RowReport, validate_file};

fn report(problems: Vec<RowReport>) -> FileReport {
    FileReport {
        category: Category::SingleNucleotideVariant,
        department: "onkologi".to_string(),
        path: PathBuf::from("lists/snv/onkologi/snv.csv"),
        total_rows: 5,
        accepted: Vec::new(),
        problems,
    }
}

#[test]
fn invalid_and_duplicate_rows() {
    let report = report(vec![
        RowReport {
            line: 3,
            text: "NR AS,x,no,,2024-01-05,".to_string(),
            problem: RowProblem::Invalid {
                issues: vec![
                    FieldIssue::new("hugo_name", "NR AS", "Name cannot have spaces: 'NR AS'"),
                    FieldIssue::new(
                        "hgnc_id",
                        "x",
                        "Input should be a valid integer, unable to parse string as an integer",
                    ),
                ],
            },
        },
        RowReport {
            line: 4,
            text: "KRAS,9999,no,,2024-01-06,".to_string(),
            problem: RowProblem::Duplicate,
        },
    ]);

    insta::assert_snapshot!(render_file_report(&report).trim_end(), @r"
    **lists/snv/onkologi/snv.csv**
    Something is wrong with the row:
    **NR AS,x,no,,2024-01-05,**
    * **hugo_name**: Name cannot have spaces: 'NR AS'
    * **hgnc_id**: Input should be a valid integer, unable to parse string as an integer

    Something is wrong with the row:
    **KRAS,9999,no,,2024-01-06,**
    The row is a duplicate
    ");
}

#[test]
fn clean_file_renders_nothing() {
    assert_eq!(render_file_report(&report(Vec::new())), "");
}

#[test]
fn validated_file_lists_each_problem_once() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fusion.csv");
    fs::write(
        &path,
        "hugo_name,hgnc_id,protocol,protocol_specification,date_added,notes\n\
         ALK,427,no,,2024-01-05,\n\
         ALK,428,no,,2024-01-05,\n\
         ROS1,10261,no,,05-01-2024,\n",
    )
    .expect("write file");

    let report = validate_file(Category::Fusion, "patologi", &path).expect("validate");
    let text = render_file_report(&report);
    assert_eq!(text.matches(&format!("**{}**", path.display())).count(), 1);
    assert_eq!(text.matches("Something is wrong with the row:").count(), 2);
    assert!(text.contains("The row is a duplicate"));
    assert!(text.contains(
        "* **date_added**: Input should be a valid date in the format YYYY-MM-DD"
    ));
}

#[test]
fn skipped_rows_are_grouped_per_file() {
    let root = tempfile::tempdir().expect("temp dir");
    for (department, rows) in [
        ("A", "BAD NAME,1,no,,2024-01-01,\nTP53,11998,no,,2024-01-01,\n"),
        ("B", "EGFR,0,no,,2024-01-01,\nEGFR,3236,no,,2024-01-01,\nX,2,maybe,,2024-01-01,\n"),
    ] {
        let dir = root.path().join("snv").join(department);
        fs::create_dir_all(&dir).expect("department dir");
        fs::write(
            dir.join("snv.csv"),
            format!("hugo_name,hgnc_id,protocol,protocol_specification,date_added,notes\n{rows}"),
        )
        .expect("write file");
    }

    let outcome = run_category(
        &RunOptions::new(root.path()),
        Category::SingleNucleotideVariant,
        ListMode::Combined,
    )
    .expect("combine")
    .expect("snv present");

    let text = render_skipped(&outcome.stats.skipped);
    assert_eq!(text.matches("Something is wrong with the row:").count(), 3);
    let a = text.find("A/snv.csv**").expect("file A listed");
    let b = text.find("B/snv.csv**").expect("file B listed");
    assert!(a < b);
    assert_eq!(text.matches("B/snv.csv**").count(), 1);
    assert!(text.contains("* **hgnc_id**: HGNC must be greater than 0: '0'"));
    assert!(text.contains(
        "* **protocol**: Input should be a valid boolean, unable to interpret input"
    ));
}
