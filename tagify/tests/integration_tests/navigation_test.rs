// tests/integration_tests/navigation_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tagify::{NavigationRegistry, Settings, TagSession, Trigger, Workspace, render_summary};

#[test]
fn test_summary_document_layout() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut session = TagSession::new(Settings::default());
    let workspace = Workspace::new(vec![temp_dir.path().to_path_buf()], Vec::new());

    let index = session
        .handle(Trigger::Rescan, &workspace)?
        .unwrap_or_default();
    let summary = session.summarize(&index);

    let headings: Vec<&str> = summary
        .text
        .lines()
        .zip(summary.text.lines().skip(1))
        .filter(|(_, next)| !next.is_empty() && next.chars().all(|c| c == '='))
        .map(|(heading, _)| heading)
        .collect();
    assert_eq!(headings, vec!["bug", "docs.v2", "perf_2", "secret", "todo"]);

    assert!(summary.text.starts_with("bug\n===\na.md:3  \nb.md:1  \n\n"));
    for link in &summary.links {
        assert_eq!(&summary.text[link.range.clone()], link.label);
    }
    Ok(())
}

#[test]
fn test_jump_from_summary_link() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut session = TagSession::default();
    let workspace = Workspace::new(vec![temp_dir.path().to_path_buf()], Vec::new());

    let index = session.scan(&workspace)?;
    let summary = session.summarize(&index);

    let link = summary
        .links
        .iter()
        .find(|l| l.label == "b.md:1")
        .map(|l| l.range.start)
        .and_then(|offset| summary.link_at(offset))
        .map(|l| l.label.clone())
        .unwrap_or_default();
    let target = session.navigate(&link).map(|o| (o.path.clone(), o.line));

    assert_eq!(target, Some((temp_dir.path().join("b.md"), 1)));
    Ok(())
}

#[test]
fn test_stale_labels_after_rescan() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut session = TagSession::default();
    let workspace = Workspace::new(vec![temp_dir.path().to_path_buf()], Vec::new());

    let index = session.scan(&workspace)?;
    session.summarize(&index);
    assert!(session.navigate("a.md:3").is_some());

    std::fs::remove_file(temp_dir.path().join("a.md"))?;

    // Scanning alone keeps the previous summary's registry.
    let index = session.scan(&workspace)?;
    assert!(session.navigate("a.md:3").is_some());

    session.summarize(&index);
    assert!(session.navigate("a.md:3").is_none());
    Ok(())
}

#[test]
fn test_registry_owned_by_caller() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut session = TagSession::default();
    let index = session.scan(&Workspace::new(
        vec![temp_dir.path().to_path_buf()],
        Vec::new(),
    ))?;

    let mut registry = NavigationRegistry::new();
    let summary = render_summary(&index, &mut registry);

    let labels: HashSet<&str> = summary.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(registry.len(), labels.len());
    assert!(summary.links.len() > labels.len());

    let guide = format!("{}:2", Path::new("docs").join("guide.md").display());
    assert_eq!(registry.resolve(&guide).map(|o| o.line), Some(2));
    assert!(session.registry().is_empty(), "The session registry is untouched");
    Ok(())
}
