use botlift_cloud::{ArtifactFetcher, DockerClient, GcloudClient};
use botlift_core::{BotliftConfig, Params, ResourceKind, ResourceNamer};
use botlift_pipeline::{Pipeline, RunResult, Step};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// Directory where fetched artifacts are staged for the image build.
const STAGING_DIR: &str = ".botlift/context";

const SERVICE_ACCOUNT_DISPLAY_NAME: &str = "Imagen bot service account";

/// Resource names derived once from the validated parameters, before any
/// step runs. Never recomputed mid-run, so the steps cannot drift apart.
struct DerivedNames {
    image_tag: String,
    service_account: String,
    service_account_email: String,
    service: String,
}

impl DerivedNames {
    fn derive(params: &Params, config: &BotliftConfig) -> Self {
        let namer = ResourceNamer::new(config.naming.clone());
        let image = namer.name(params, ResourceKind::ImageName);
        Self {
            image_tag: format!(
                "{registry}/{project}/{image}:latest",
                registry = config.project.registry,
                project = params.project_id,
            ),
            service_account: namer.name(params, ResourceKind::ServiceAccountName),
            service_account_email: namer.name(params, ResourceKind::ServiceAccountEmail),
            service: namer.name(params, ResourceKind::CloudServiceName),
        }
    }
}

/// Execute the full provisioning run: derive names, assemble the pipeline,
/// run it, and map the outcome to the process result.
pub async fn run(params: &Params, config: &BotliftConfig) -> anyhow::Result<()> {
    let names = DerivedNames::derive(params, config);
    let gcloud = GcloudClient::new();
    let docker = DockerClient::new();
    let fetcher = config
        .artifacts
        .base_url
        .as_ref()
        .map(|base| ArtifactFetcher::new(base.clone()));
    let staging = PathBuf::from(STAGING_DIR);

    let cancel = CancellationToken::new();
    let signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received — finishing current step, then stopping");
            signal.cancel();
        }
    });

    let pipeline = build_pipeline(
        params,
        config,
        &names,
        &gcloud,
        &docker,
        fetcher.as_ref(),
        &staging,
        cancel,
    )?;

    println!(
        "Provisioning '{service}' in project '{project}' ({steps} steps)",
        service = names.service,
        project = params.project_id,
        steps = pipeline.len(),
    );

    match pipeline.run().await {
        RunResult::Succeeded { completed } => {
            println!("Provisioning complete ({completed} steps)");
            Ok(())
        }
        RunResult::Failed { index, label, cause } => {
            Err(cause.context(format!("step {} '{label}' failed", index + 1)))
        }
        RunResult::Cancelled { label, .. } => {
            anyhow::bail!("run cancelled before step '{label}'")
        }
    }
}

/// Assemble the ordered step sequence. Ordering is significant: artifacts
/// are fetched before the build, the image is pushed before the deploy, and
/// the identity exists before any role is bound to it.
#[allow(clippy::too_many_arguments)]
fn build_pipeline<'a>(
    params: &'a Params,
    config: &'a BotliftConfig,
    names: &'a DerivedNames,
    gcloud: &'a GcloudClient,
    docker: &'a DockerClient,
    fetcher: Option<&'a ArtifactFetcher>,
    staging: &'a Path,
    cancel: CancellationToken,
) -> anyhow::Result<Pipeline<'a>> {
    let mut pipeline = Pipeline::new().with_cancellation(cancel);

    for api in &config.services.enable {
        pipeline.push(Step::new(format!("Enable {api}"), async move {
            gcloud.enable_service(&params.project_id, api).await?;
            Ok(())
        }));
    }

    if !config.artifacts.files.is_empty() {
        let fetcher = fetcher.ok_or_else(|| {
            anyhow::anyhow!("artifacts.base_url not set in botlift.toml — set [artifacts].base_url")
        })?;
        for file in &config.artifacts.files {
            pipeline.push(Step::new(format!("Fetch {file}"), async move {
                fetcher.fetch_to(file, staging).await?;
                Ok(())
            }));
        }
    }

    pipeline.push(Step::new("Docker build", async move {
        docker.build(&names.image_tag, staging).await?;
        Ok(())
    }));
    pipeline.push(Step::new("Docker push", async move {
        docker.push(&names.image_tag).await?;
        Ok(())
    }));

    pipeline.push(Step::new(
        format!("Create service account {}", names.service_account),
        async move {
            gcloud
                .create_service_account(
                    &params.project_id,
                    &names.service_account,
                    SERVICE_ACCOUNT_DISPLAY_NAME,
                )
                .await?;
            Ok(())
        },
    ));

    for role in &config.iam.roles {
        pipeline.push(Step::new(format!("Bind {role}"), async move {
            gcloud
                .bind_project_role(&params.project_id, &names.service_account_email, role)
                .await?;
            Ok(())
        }));
    }

    if config.iam.self_impersonation {
        pipeline.push(Step::new("Bind self-impersonation", async move {
            gcloud
                .bind_self_impersonation(&params.project_id, &names.service_account_email)
                .await?;
            Ok(())
        }));
    }

    let env = runtime_env(params, config);
    pipeline.push(Step::new(format!("Deploy {}", names.service), async move {
        let url = gcloud
            .deploy_to_cloud_run(
                &names.service,
                &names.image_tag,
                &names.service_account_email,
                &params.project_id,
                &config.project.region,
                &config.cloud_run,
                &env,
            )
            .await?;
        tracing::info!(%url, "service deployed");
        Ok(())
    }));

    Ok(pipeline)
}

/// Environment passed into the deployed service. The values are opaque
/// configuration — nothing here interprets them.
fn runtime_env(params: &Params, config: &BotliftConfig) -> Vec<(String, String)> {
    let mut env = vec![
        ("PROJECT_ID".to_owned(), params.project_id.clone()),
        ("LOCATION".to_owned(), config.project.region.clone()),
        ("POE_ACCESS_KEY".to_owned(), params.peo_access_key.clone()),
    ];
    if let Some(bucket) = &config.project.bucket {
        env.push(("BUCKET_NAME".to_owned(), bucket.clone()));
    }
    env
}
