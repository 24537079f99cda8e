use crate::command::CommandError;
use crate::executor::{CommandExecutor, RealExecutor};
use botlift_core::CloudRunConfig;

/// GCP operations client, parameterized over the executor for testability.
pub struct GcloudClient<E: CommandExecutor = RealExecutor> {
    executor: E,
}

impl GcloudClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for GcloudClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> GcloudClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Service Usage ──

    pub async fn enable_service(
        &self,
        project_id: &str,
        api: &str,
    ) -> Result<(), ServiceUsageError> {
        self.executor
            .exec(
                "gcloud",
                &args(["services", "enable", api, "--project", project_id, "--quiet"]),
            )
            .await
            .map_err(|e| ServiceUsageError::Enable {
                api: api.to_owned(),
                source: e,
            })?;

        Ok(())
    }

    // ── IAM ──

    /// Create the service account. Not idempotent: if the account already
    /// exists gcloud fails, and that failure is surfaced, not masked.
    pub async fn create_service_account(
        &self,
        project_id: &str,
        account: &str,
        display_name: &str,
    ) -> Result<(), IamError> {
        self.executor
            .exec(
                "gcloud",
                &args([
                    "iam",
                    "service-accounts",
                    "create",
                    account,
                    "--project",
                    project_id,
                    "--display-name",
                    display_name,
                    "--quiet",
                ]),
            )
            .await
            .map_err(|e| IamError::CreateAccount {
                account: account.to_owned(),
                source: e,
            })?;

        Ok(())
    }

    pub async fn bind_project_role(
        &self,
        project_id: &str,
        service_account: &str,
        role: &str,
    ) -> Result<(), IamError> {
        let member = format!("serviceAccount:{service_account}");
        self.executor
            .exec(
                "gcloud",
                &args([
                    "projects",
                    "add-iam-policy-binding",
                    project_id,
                    "--member",
                    &member,
                    "--role",
                    role,
                    "--quiet",
                ]),
            )
            .await
            .map_err(|e| IamError::BindRole {
                role: role.to_owned(),
                member,
                source: e,
            })?;

        Ok(())
    }

    /// Grant the service account token-creator on itself, so the deployed
    /// bot can sign storage URLs with its own identity.
    pub async fn bind_self_impersonation(
        &self,
        project_id: &str,
        service_account: &str,
    ) -> Result<(), IamError> {
        let member = format!("serviceAccount:{service_account}");
        self.executor
            .exec(
                "gcloud",
                &args([
                    "iam",
                    "service-accounts",
                    "add-iam-policy-binding",
                    service_account,
                    "--project",
                    project_id,
                    "--member",
                    &member,
                    "--role",
                    "roles/iam.serviceAccountTokenCreator",
                    "--quiet",
                ]),
            )
            .await
            .map_err(|e| IamError::SelfImpersonation {
                account: service_account.to_owned(),
                source: e,
            })?;

        Ok(())
    }

    // ── Cloud Run Deploy ──

    pub async fn deploy_to_cloud_run(
        &self,
        service_name: &str,
        image_tag: &str,
        service_account: &str,
        project_id: &str,
        region: &str,
        config: &CloudRunConfig,
        env: &[(String, String)],
    ) -> Result<String, DeployError> {
        let port = config.port.to_string();

        // Build --set-env-vars value: KEY=VALUE,...
        let env_flag = env
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(",");

        let mut cmd = vec![
            "run",
            "deploy",
            service_name,
            "--image",
            image_tag,
            "--service-account",
            service_account,
            "--project",
            project_id,
            "--region",
            region,
            "--platform",
            "managed",
            "--memory",
            &config.memory,
            "--port",
            &port,
        ];

        if config.allow_unauthenticated {
            cmd.push("--allow-unauthenticated");
        } else {
            cmd.push("--no-allow-unauthenticated");
        }

        if !env_flag.is_empty() {
            cmd.push("--set-env-vars");
            cmd.push(&env_flag);
        }

        cmd.extend(["--quiet", "--format", "value(status.url)"]);

        let cmd_owned: Vec<String> = cmd.iter().map(|s| (*s).to_owned()).collect();

        let output = self
            .executor
            .exec("gcloud", &cmd_owned)
            .await
            .map_err(|e| DeployError::Deploy { source: e })?;

        Ok(output.trim().to_owned())
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum ServiceUsageError {
    #[error("failed to enable {api}")]
    Enable { api: String, source: CommandError },
}

#[derive(Debug, thiserror::Error)]
pub enum IamError {
    #[error("failed to create service account '{account}'")]
    CreateAccount {
        account: String,
        source: CommandError,
    },

    #[error("failed to bind {role} to {member}")]
    BindRole {
        role: String,
        member: String,
        source: CommandError,
    },

    #[error("failed to grant self-impersonation on '{account}'")]
    SelfImpersonation {
        account: String,
        source: CommandError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("cloud run deployment failed")]
    Deploy { source: CommandError },
}
