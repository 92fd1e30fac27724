use std::env;
use std::io::{self, Write};

use crate::config::{DEFAULT_DAYS, EnvSnapshot, clamp_days};
use crate::error::AppResult;

/// Prints the configuration resolved from the environment, secrets masked.
pub fn run() -> AppResult<()> {
    let snapshot = EnvSnapshot::from_lookup(|key| env::var(key).ok());
    let mut stdout = io::stdout().lock();
    write_summary(&mut stdout, &snapshot)?;
    Ok(())
}

fn write_summary(out: &mut impl Write, cfg: &EnvSnapshot) -> io::Result<()> {
    writeln!(out, "GitHub token: {}", mask_secret(&cfg.github_token))?;
    writeln!(out, "Gist id: {}", display_value(&cfg.gist_id))?;
    writeln!(out, "Username: {}", display_value(&cfg.username))?;
    writeln!(out, "Days: {}", display_days(&cfg.days))?;
    writeln!(
        out,
        "API URL: {}",
        display_or(&cfg.api_base_url, "https://api.github.com")
    )?;
    writeln!(
        out,
        "Linguist: {}",
        display_or(&cfg.linguist_bin, "github-linguist")
    )?;
    writeln!(out, "Git: {}", display_or(&cfg.git_bin, "git"))?;
    let staging = env::temp_dir().display().to_string();
    writeln!(out, "Staging dir: {}", display_or(&cfg.staging_root, &staging))?;
    Ok(())
}

fn display_days(value: &Option<String>) -> String {
    match value.as_deref().map(|raw| (raw, raw.trim().parse::<i64>())) {
        None => format!("{DEFAULT_DAYS} (default)"),
        Some((_, Ok(days))) => clamp_days(days).to_string(),
        Some((raw, Err(_))) => format!("<invalid: {raw}>"),
    }
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn display_or(value: &Option<String>, default: &str) -> String {
    value
        .clone()
        .unwrap_or_else(|| format!("{default} (default)"))
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars: Vec<char> = token.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
