//! End-to-end tests: `.env` file on disk to generated constants.

use std::fs;

use scanidcard_config::constants::DOTENV_FILE_NAME;
use scanidcard_config::{BuildConstants, CredentialSources, load, resolve_credentials};
use tempfile::TempDir;

#[test]
fn test_alias_file_to_generated_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(DOTENV_FILE_NAME);
    fs::write(
        &path,
        "TENCENT_SECRET_ID=AKIDalias\nTENCENT_SECRET_KEY=\"alias-key\"\nTENCENT_REGION=ap-beijing\n",
    )
    .unwrap();

    let env = load(&path);
    let sources = CredentialSources::from_env(&env);
    assert_eq!(sources.secret_id, Some("TENCENT_SECRET_ID"));
    assert_eq!(sources.region, Some("TENCENT_REGION"));

    let source = BuildConstants::from_credentials(&resolve_credentials(&env)).to_rust_source();
    assert!(source.contains("pub const TENCENT_SECRET_ID: &str = \"AKIDalias\";"));
    assert!(source.contains("pub const TENCENT_SECRET_KEY: &str = \"alias-key\";"));
    assert!(source.contains("pub const TENCENT_REGION: &str = \"ap-beijing\";"));
}

#[test]
fn test_missing_file_to_generated_source() {
    let temp_dir = TempDir::new().unwrap();
    let env = load(&temp_dir.path().join(DOTENV_FILE_NAME));

    assert_eq!(CredentialSources::from_env(&env), CredentialSources::default());

    let source = BuildConstants::from_credentials(&resolve_credentials(&env)).to_rust_source();
    assert!(source.contains("pub const TENCENT_SECRET_ID: &str = \"\";"));
    assert!(source.contains("pub const TENCENT_REGION: &str = \"ap-guangzhou\";"));
}
