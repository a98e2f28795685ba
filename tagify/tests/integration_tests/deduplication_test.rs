// tests/integration_tests/deduplication_test.rs
use super::common::{create_test_file, lines_of, scan, setup_test_directory};
use anyhow::Result;
use std::collections::HashSet;
use tagify::{CancelToken, ScanConfig, collect_raw, deduplicate};
use tempfile::TempDir;

#[test]
fn test_open_file_inside_root_listed_once() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let open = temp_dir.path().join("a.md");

    let index = scan(&[temp_dir.path()], &[open.as_path()], &ScanConfig::default())?;

    assert_eq!(
        lines_of(&index, "bug"),
        vec![("a.md:3".to_owned(), 3), ("b.md:1".to_owned(), 1)]
    );
    Ok(())
}

#[test]
fn test_repeated_tag_on_one_line_collapses() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "x.md", "#@dup first #@dup second\n#@dup\n")?;

    let (raw, _) = collect_raw(
        &[temp_dir.path().to_path_buf()],
        &[],
        &ScanConfig::default(),
        &CancelToken::new(),
    )?;
    assert_eq!(raw.get("dup").map(<[_]>::len), Some(3));

    let index = deduplicate(raw);
    let dups = index.get("dup").unwrap_or_default();
    assert_eq!(dups.len(), 2);
    assert_eq!(dups[0].byte_range, 2..5, "The first match on the line is kept");
    Ok(())
}

#[test]
fn test_two_tags_on_one_line_stay_independent() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let index = scan(&[temp_dir.path()], &[], &ScanConfig::default())?;

    let todo = index.get("todo").unwrap_or_default();
    let docs = index.get("docs.v2").unwrap_or_default();
    assert!(
        todo.iter()
            .any(|t| docs.iter().any(|d| d.location() == t.location())),
        "guide.md:2 is listed under both tags"
    );
    Ok(())
}

#[test]
fn test_deduplicate_is_a_fixed_point() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let open = temp_dir.path().join("docs").join("guide.md");

    let index = scan(&[temp_dir.path()], &[open.as_path()], &ScanConfig::default())?;
    assert_eq!(deduplicate(index.clone()), index);

    for (_, occurrences) in &index {
        let mut seen = HashSet::new();
        for occurrence in occurrences {
            assert!(
                seen.insert(occurrence.location()),
                "At most one occurrence per (path, line) and tag"
            );
        }
    }
    Ok(())
}
