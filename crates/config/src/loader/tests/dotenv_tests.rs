//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests change the process working directory, so every test is `#[serial]`.
//! - Error messages must never contain secret values from `.env` files.

use std::fs;
use std::path::PathBuf;
use serial_test::serial;
use tempfile::TempDir;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
#[serial]
fn test_dotenv_feeds_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    fs::write(
        temp_dir.path().join(".env"),
        "GOCD_SERVER=https://dotenv.example.com/go\nGOCD_USERNAME=dotenv-user\n",
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("GOCD_SERVER", None),
            ("GOCD_USERNAME", None),
        ],
        || {
            let config = ConfigLoader::new()
                .load_dotenv()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.server, "https://dotenv.example.com/go/");
            assert_eq!(config.username.as_deref(), Some("dotenv-user"));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let secret_value = "supersecret_password_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("GOCD_PASSWORD={secret_value}\nINVALID_LINE_WITHOUT_EQUALS"),
    )
    .unwrap();

    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), ("GOCD_PASSWORD", None)],
        || match ConfigLoader::new().load_dotenv() {
            Err(e @ ConfigError::DotenvParse { .. }) => {
                let message = e.to_string();
                assert!(!message.contains(secret_value), "Leaked secret: {message}");
                assert!(message.contains("DOTENV_DISABLED"));
            }
            Err(other) => panic!("Expected DotenvParse, got {other}"),
            Ok(_) => panic!("Expected DotenvParse, got Ok"),
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    for value in ["1", "true"] {
        temp_env::with_var("DOTENV_DISABLED", Some(value), || {
            assert!(
                ConfigLoader::new().load_dotenv().is_ok(),
                "DOTENV_DISABLED={value} should skip .env loading"
            );
        });
    }
}
