use std::path::Path;

use tokio::process::Command;

/// Runs `program` in `cwd` and returns its stdout, or a message carrying
/// the exit status and stderr.
pub async fn run(program: &str, args: &[&str], cwd: &Path) -> Result<String, String> {
    tracing::debug!("run > {program} {}", args.join(" "));

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|err| format!("failed to start `{program}`: {err}"))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return Err(format!(
            "`{program} {}` exited with {}: {}",
            args.join(" "),
            output.status,
            stderr.trim()
        ));
    }
    if !stderr.trim().is_empty() {
        tracing::debug!("stderr: {}", stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
