use botlift_core::BotliftConfig;
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = BotliftConfig::load(tmp.path()).unwrap();

    assert_eq!(config.project.region, "us-central1");
    assert_eq!(config.project.registry, "gcr.io");
    assert!(config.project.bucket.is_none());
    assert!(config.artifacts.base_url.is_none());
    assert_eq!(
        config.artifacts.files,
        vec!["Dockerfile", "imagen_bot.py", "requirements.txt"]
    );
    assert_eq!(config.naming.image, "{project}-image3-bot-img");
    assert_eq!(config.naming.service_account, "{project}-image3-bot-sa");
    assert_eq!(config.naming.service, "{project}-image3-cloud-run");
    assert_eq!(
        config.services.enable,
        vec!["run.googleapis.com", "aiplatform.googleapis.com"]
    );
    assert_eq!(
        config.iam.roles,
        vec!["roles/aiplatform.user", "roles/storage.objectAdmin"]
    );
    assert!(config.iam.self_impersonation);
    assert_eq!(config.cloud_run.memory, "512Mi");
    assert_eq!(config.cloud_run.port, 8080);
    assert!(config.cloud_run.allow_unauthenticated);
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[project]
region = "asia-northeast1"
registry = "us-docker.pkg.dev"
bucket = "acme-generated-images"

[artifacts]
base_url = "https://artifacts.example.com/imagen-bot"
files = ["Dockerfile", "bot.py"]

[naming]
image = "{project}-img"
service_account = "{project}-sa"
service = "{project}-svc"

[services]
enable = ["run.googleapis.com"]

[iam]
roles = ["roles/aiplatform.user"]
self_impersonation = false

[cloud_run]
memory = "1Gi"
port = 3000
allow_unauthenticated = false
"#;
    std::fs::write(tmp.path().join("botlift.toml"), toml).unwrap();

    let config = BotliftConfig::load(tmp.path()).unwrap();

    assert_eq!(config.project.region, "asia-northeast1");
    assert_eq!(config.project.registry, "us-docker.pkg.dev");
    assert_eq!(config.project.bucket.as_deref(), Some("acme-generated-images"));
    assert_eq!(
        config.artifacts.base_url.as_deref(),
        Some("https://artifacts.example.com/imagen-bot")
    );
    assert_eq!(config.artifacts.files, vec!["Dockerfile", "bot.py"]);
    assert_eq!(config.naming.image, "{project}-img");
    assert_eq!(config.services.enable, vec!["run.googleapis.com"]);
    assert_eq!(config.iam.roles, vec!["roles/aiplatform.user"]);
    assert!(!config.iam.self_impersonation);
    assert_eq!(config.cloud_run.memory, "1Gi");
    assert_eq!(config.cloud_run.port, 3000);
    assert!(!config.cloud_run.allow_unauthenticated);
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[artifacts]
base_url = "https://artifacts.example.com/imagen-bot"
"#;
    std::fs::write(tmp.path().join("botlift.toml"), toml).unwrap();

    let config = BotliftConfig::load(tmp.path()).unwrap();

    assert_eq!(
        config.artifacts.base_url.as_deref(),
        Some("https://artifacts.example.com/imagen-bot")
    );
    // Defaults preserved
    assert_eq!(config.project.region, "us-central1");
    assert_eq!(config.artifacts.files.len(), 3);
    assert!(config.iam.self_impersonation);
}

#[test]
fn load_empty_services_list_is_allowed() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[services]
enable = []
"#;
    std::fs::write(tmp.path().join("botlift.toml"), toml).unwrap();

    let config = BotliftConfig::load(tmp.path()).unwrap();
    assert!(config.services.enable.is_empty());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("botlift.toml"), "not valid {{{{ toml").unwrap();

    let result = BotliftConfig::load(tmp.path());
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("parse"));
}

#[test]
fn load_empty_config_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("botlift.toml"), "").unwrap();

    let config = BotliftConfig::load(tmp.path()).unwrap();
    assert_eq!(config.project.region, "us-central1");
}
