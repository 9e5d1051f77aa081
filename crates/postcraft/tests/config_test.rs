//! Configuration file loading tests.

use postcraft::PostcraftConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn explicit_file_overrides_bundled_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
[provider]
api_base = "http://localhost:11434/v1"
text_model = "llama3.2"

[history]
path = "/var/tmp/postcraft/history.json"
"#,
    )?;

    let config = PostcraftConfig::from_file(&path)?;

    assert_eq!(config.provider.api_base, "http://localhost:11434/v1");
    assert_eq!(config.provider.text_model, "llama3.2");
    assert_eq!(config.provider.image_model, "deepseek/deepseek-chat-v3-0324:free");
    assert_eq!(config.provider.image_max_tokens, 150);
    assert_eq!(config.history_path(), PathBuf::from("/var/tmp/postcraft/history.json"));
    Ok(())
}

#[test]
fn missing_file_is_config_error() {
    let err = PostcraftConfig::from_file("/definitely/not/here/postcraft.toml").unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("not found"));
}

#[test]
fn malformed_file_is_config_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[provider\napi_base = ")?;

    let err = PostcraftConfig::from_file(&path).unwrap_err();
    assert!(err.is_config());
    Ok(())
}
