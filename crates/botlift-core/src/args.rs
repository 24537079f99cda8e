use crate::error::{Error, Result};

/// Name of the project-id flag, without the leading dashes.
pub const PROJECT_ID: &str = "project_id";
/// Name of the access-key flag, without the leading dashes.
pub const PEO_ACCESS_KEY: &str = "peo_access_key";

/// Validated provisioning parameters.
///
/// Produced once by [`Params::resolve`] before any step runs and threaded
/// read-only through the rest of the run — never reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub project_id: String,
    pub peo_access_key: String,
}

impl Params {
    /// Resolve raw CLI tokens into validated parameters.
    ///
    /// Both `--flag value` and `--flag=value` forms are accepted. Any token
    /// that is not one of the two required flags fails with
    /// [`Error::UnknownArgument`]; a flag that is absent, valueless, or empty
    /// fails with [`Error::MissingArgument`] naming that flag. No side
    /// effects.
    pub fn resolve(tokens: &[String]) -> Result<Self> {
        let mut project_id: Option<String> = None;
        let mut peo_access_key: Option<String> = None;

        let mut iter = tokens.iter().peekable();
        while let Some(token) = iter.next() {
            let (flag, inline) = match token.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_owned())),
                None => (token.as_str(), None),
            };

            let slot = match flag {
                "--project_id" => &mut project_id,
                "--peo_access_key" => &mut peo_access_key,
                _ => return Err(Error::UnknownArgument(token.clone())),
            };

            *slot = match inline {
                Some(value) => Some(value),
                // A following flag is not a value; leave the slot empty so
                // the missing-argument check below names this flag.
                None => match iter.peek() {
                    Some(next) if !next.starts_with("--") => iter.next().cloned(),
                    _ => None,
                },
            };
        }

        Ok(Self {
            project_id: require(project_id, PROJECT_ID)?,
            peo_access_key: require(peo_access_key, PEO_ACCESS_KEY)?,
        })
    }
}

fn require(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingArgument(name.to_owned())),
    }
}
