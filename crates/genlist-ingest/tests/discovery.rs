//! Tests for department discovery across categories.

use std::fs;
use std::path::Path;

use genlist_ingest::{discover_category, read_rows};
use genlist_model::Category;

fn touch(dir: &Path, name: &str, contents: &str) {
    fs::create_dir_all(dir).expect("create dir");
    fs::write(dir.join(name), contents).expect("write file");
}

#[test]
fn discovers_each_category_independently() {
    let root = tempfile::tempdir().expect("temp dir");
    touch(
        &root.path().join("germline/onkologi"),
        "germline.csv",
        "hugo_name,hgnc_id\nBRCA1,1100\n",
    );
    touch(
        &root.path().join("germline/klinisk_genetik"),
        "germline.csv",
        "hugo_name,hgnc_id\nBRCA2,1101\n",
    );
    touch(
        &root.path().join("snv/onkologi"),
        "snv.csv",
        "hugo_name,hgnc_id\nKRAS,6407\n",
    );

    let germline = discover_category(root.path(), Category::Germline)
        .expect("discover germline")
        .expect("germline present");
    assert_eq!(germline.total_departments(), 2);
    assert_eq!(germline.departments[0].name, "klinisk_genetik");

    let snv = discover_category(root.path(), Category::SingleNucleotideVariant)
        .expect("discover snv")
        .expect("snv present");
    assert_eq!(snv.total_departments(), 1);

    assert!(
        discover_category(root.path(), Category::CopyNumberVariant)
            .expect("discover cnv")
            .is_none()
    );

    let rows: usize = germline
        .files()
        .map(|(_, file)| read_rows(file).expect("read rows").rows.len())
        .sum();
    assert_eq!(rows, 2);
}
