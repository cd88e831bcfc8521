use std::fs;
use tempfile::TempDir;

use cbo_explorer::config::Settings;

#[test]
fn test_defaults_without_file() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::from_file(&temp.path().join("missing.toml")).unwrap();

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.ui.dist_dir, "ui/dist");
}

#[test]
fn test_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("explorer.toml");
    fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[ui]
dist_dir = "public"
"#,
    )
    .unwrap();

    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.ui.dist_dir, "public");
}
