// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tagify::{CancelToken, ScanConfig, TagIndex, build_index};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn create_settings_file(dir: &Path, content: &str) -> Result<PathBuf> {
    create_test_file(dir, ".tagify.toml", content)
}

/// A small notes/project tree:
///
/// * `a.md` with `#@bug` on line 3
/// * `b.md` with `#@bug` on line 1
/// * `docs/guide.md` with two tags on one line
/// * `src/app.js`, `notes.txt`, `Makefile`
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "a.md",
        "# Title\n\n#@bug fix this\n",
    )?;
    create_test_file(temp_dir.path(), "b.md", "#@bug also here\n")?;
    create_test_file(
        temp_dir.path(),
        "docs/guide.md",
        "Intro\nSee #@todo and #@docs.v2 here\n#@secret data\n",
    )?;
    create_test_file(
        temp_dir.path(),
        "src/app.js",
        "// #@todo wire up\nconst x = 1; // #@perf_2\n",
    )?;
    create_test_file(temp_dir.path(), "notes.txt", "#@txtonly\n")?;
    create_test_file(temp_dir.path(), "Makefile", "all: # #@build\n")?;

    Ok(temp_dir)
}

pub fn scan(roots: &[&Path], open_files: &[&Path], config: &ScanConfig) -> Result<TagIndex> {
    let roots: Vec<PathBuf> = roots.iter().map(|p| p.to_path_buf()).collect();
    let open_files: Vec<PathBuf> = open_files.iter().map(|p| p.to_path_buf()).collect();
    Ok(build_index(&roots, &open_files, config, &CancelToken::new())?)
}

pub fn lines_of(index: &TagIndex, tag: &str) -> Vec<(String, usize)> {
    index
        .get(tag)
        .unwrap_or_default()
        .iter()
        .map(|o| (o.label.clone(), o.line))
        .collect()
}
