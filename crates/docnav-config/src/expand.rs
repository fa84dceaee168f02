//! Expansion of `site.*` path values.
//!
//! A path may start with `~` (the user's home directory) and may embed
//! `${VAR}` or `${VAR:-default}` references. Values with neither are
//! returned unchanged, so a bare `$VAR` on its own is not expanded.

use std::env::VarError;

use shellexpand::LookupError;

use crate::ConfigError;

/// Expand a configured path in place. `None` stays `None`.
pub(crate) fn expand_path(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(path) = value.as_deref() {
        let expanded = expand(path).map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: describe(&e),
        })?;
        *value = Some(expanded);
    }
    Ok(())
}

fn expand(path: &str) -> Result<String, LookupError<VarError>> {
    if !path.contains("${") && !path.starts_with('~') {
        return Ok(path.to_owned());
    }

    shellexpand::full_with_context(path, home_dir, |var| std::env::var(var).map(Some))
        .map(std::borrow::Cow::into_owned)
}

fn home_dir() -> Option<String> {
    std::env::var("HOME").ok()
}

fn describe(err: &LookupError<VarError>) -> String {
    match err.cause {
        VarError::NotPresent => format!("${{{}}} not set", err.var_name),
        VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", err.var_name),
    }
}
