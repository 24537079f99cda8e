use crate::args::Params;
use crate::config::NamingConfig;

/// Which derived resource name to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ImageName,
    ServiceAccountName,
    ServiceAccountEmail,
    CloudServiceName,
}

/// Derives deterministic resource names from validated parameters.
///
/// Templates come from `[naming]` in botlift.toml; `{project}` is replaced
/// with the project id. Pure — identical input always yields identical
/// names, and the fixed distinct suffixes keep the kinds from colliding.
#[derive(Debug, Clone)]
pub struct ResourceNamer {
    naming: NamingConfig,
}

impl ResourceNamer {
    pub fn new(naming: NamingConfig) -> Self {
        Self { naming }
    }

    pub fn name(&self, params: &Params, kind: ResourceKind) -> String {
        match kind {
            ResourceKind::ImageName => expand(&self.naming.image, &params.project_id),
            ResourceKind::ServiceAccountName => {
                expand(&self.naming.service_account, &params.project_id)
            }
            ResourceKind::ServiceAccountEmail => {
                let account = expand(&self.naming.service_account, &params.project_id);
                format!(
                    "{account}@{project}.iam.gserviceaccount.com",
                    project = params.project_id
                )
            }
            ResourceKind::CloudServiceName => expand(&self.naming.service, &params.project_id),
        }
    }
}

fn expand(template: &str, project_id: &str) -> String {
    template.replace("{project}", project_id)
}
