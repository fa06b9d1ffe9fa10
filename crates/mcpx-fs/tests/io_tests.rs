use mcpx_fs::{Error, NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join(".codex/config.toml");

    io::write_atomic(&path, b"[mcp_servers]\n").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "[mcp_servers]\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(".mcp.json");
    fs::write(&file_path, "original").unwrap();

    io::write_text(&NormalizedPath::new(&file_path), "updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join("opencode.json");

    io::write_text(&path, "{}\n").unwrap();
    io::write_text(&path, "{}\n").unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["opencode.json".to_string()]);
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join("missing.json");

    let err = io::read_text(&path).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_read_text_directory_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = io::read_text(&NormalizedPath::new(temp.path())).unwrap_err();
    assert!(!err.is_not_found());
}

#[test]
fn test_remove_file_reports_presence() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(".idea").join("mcp.json");
    fs::create_dir_all(file_path.parent().unwrap()).unwrap();
    fs::write(&file_path, "{}").unwrap();

    let path = NormalizedPath::new(&file_path);
    assert!(io::remove_file(&path).unwrap());
    assert!(!io::remove_file(&path).unwrap());
    assert!(!file_path.exists());
}
