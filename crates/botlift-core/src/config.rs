use serde::{Deserialize, Serialize};

/// botlift.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotliftConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub artifacts: ArtifactConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub iam: IamConfig,
    #[serde(default)]
    pub cloud_run: CloudRunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// GCP region (defaults to us-central1)
    #[serde(default = "default_region")]
    pub region: String,
    /// Container registry host for the image tag
    #[serde(default = "default_registry")]
    pub registry: String,
    /// Storage bucket for generated images; when set, BUCKET_NAME is passed
    /// to the deployed service.
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Remote location the artifact files are fetched from.
    /// Required for a deploy run; there is no default URL.
    pub base_url: Option<String>,
    /// Named files to fetch into the build context.
    #[serde(default = "default_artifact_files")]
    pub files: Vec<String>,
}

/// Resource-name templates; `{project}` expands to the project id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_image_template")]
    pub image: String,
    #[serde(default = "default_service_account_template")]
    pub service_account: String,
    #[serde(default = "default_service_template")]
    pub service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// APIs to enable before provisioning. An empty list skips the
    /// enablement steps entirely.
    #[serde(default = "default_enabled_services")]
    pub enable: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IamConfig {
    /// Project-level roles bound to the service account, one step each.
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    /// Grant the service account token-creator on itself. The bot signs
    /// storage URLs with its own identity, which needs this binding.
    #[serde(default = "default_true")]
    pub self_impersonation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudRunConfig {
    /// Memory allocation
    #[serde(default = "default_memory")]
    pub memory: String,
    /// Port the application listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whether the service is publicly reachable
    #[serde(default = "default_true")]
    pub allow_unauthenticated: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            registry: default_registry(),
            bucket: None,
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            files: default_artifact_files(),
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            image: default_image_template(),
            service_account: default_service_account_template(),
            service: default_service_template(),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled_services(),
        }
    }
}

impl Default for IamConfig {
    fn default() -> Self {
        Self {
            roles: default_roles(),
            self_impersonation: true,
        }
    }
}

impl Default for CloudRunConfig {
    fn default() -> Self {
        Self {
            memory: default_memory(),
            port: default_port(),
            allow_unauthenticated: true,
        }
    }
}

impl BotliftConfig {
    /// Load from botlift.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("botlift.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            tracing::debug!("botlift.toml not found, using defaults");
            Ok(Self::default())
        }
    }
}

fn default_region() -> String {
    "us-central1".to_owned()
}

fn default_registry() -> String {
    "gcr.io".to_owned()
}

fn default_artifact_files() -> Vec<String> {
    vec![
        "Dockerfile".to_owned(),
        "imagen_bot.py".to_owned(),
        "requirements.txt".to_owned(),
    ]
}

fn default_image_template() -> String {
    "{project}-image3-bot-img".to_owned()
}

fn default_service_account_template() -> String {
    "{project}-image3-bot-sa".to_owned()
}

fn default_service_template() -> String {
    "{project}-image3-cloud-run".to_owned()
}

fn default_enabled_services() -> Vec<String> {
    vec![
        "run.googleapis.com".to_owned(),
        "aiplatform.googleapis.com".to_owned(),
    ]
}

fn default_roles() -> Vec<String> {
    vec![
        "roles/aiplatform.user".to_owned(),
        "roles/storage.objectAdmin".to_owned(),
    ]
}

fn default_true() -> bool {
    true
}

fn default_memory() -> String {
    "512Mi".to_owned()
}

fn default_port() -> u16 {
    8080
}
