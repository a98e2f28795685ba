// tests/integration_tests/settings_test.rs
use super::common::{create_settings_file, setup_test_directory};
use anyhow::Result;
use tagify::{Extension, Settings, TagSession, Workspace};

#[test]
fn test_discovered_settings_drive_the_scan() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_settings_file(
        temp_dir.path(),
        r#"
        blacklisted_tags = ["secret", "bug"]
        extensions = ["md", "txt"]
        common_tags = ["later"]
        "#,
    )?;

    let settings = Settings::discover(&temp_dir.path().join("docs"))?;
    assert!(settings.extensions.contains(&Extension::from("txt")));

    let mut session = TagSession::new(settings);
    let index = session.scan(&Workspace::new(
        vec![temp_dir.path().to_path_buf()],
        Vec::new(),
    ))?;

    assert_eq!(index.sorted_tag_names(), vec!["docs.v2", "todo", "txtonly"]);
    assert_eq!(
        session.tag_menu(),
        vec!["docs.v2", "later", "todo", "txtonly"]
    );
    Ok(())
}

#[test]
fn test_broken_settings_fall_back_to_defaults() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = create_settings_file(
        temp_dir.path(),
        "blacklisted_tags = 42\nextensions = \"md\"\ntag_anchor = 7\n",
    )?;

    let settings = Settings::load(&path)?;
    assert_eq!(settings, Settings::default());
    Ok(())
}

#[test]
fn test_exclude_setting() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_settings_file(temp_dir.path(), "exclude = [\"src/**\", \"b.md\"]\n")?;

    let mut session = TagSession::new(Settings::discover(temp_dir.path())?);
    let index = session.scan(&Workspace::new(
        vec![temp_dir.path().to_path_buf()],
        Vec::new(),
    ))?;

    assert!(!index.contains_tag("perf_2"));
    assert_eq!(index.get("bug").map(<[_]>::len), Some(1));
    Ok(())
}
