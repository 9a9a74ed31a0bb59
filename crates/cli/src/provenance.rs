use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand, its parameters, and the run tag.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
///
/// Records the git commit, library version, callsite, command parameters, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "lib_version": mathcustom::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "tag": payload.tag,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Provenance block for `report`: no outputs, just where the numbers would come from.
pub fn report_block(tag: Option<&str>) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "lib_version": mathcustom::VERSION,
        "tag": tag,
        "curves": mathcustom::Curve::names().collect::<Vec<_>>(),
    })
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or(Cow::Borrowed("artifact"));
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/samples.csv");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/samples.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_command_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("draws.parquet");
        fs::write(&artifact, b"").unwrap();
        let payload = Payload::new("range", json!({"min": 0.0, "max": 1.0}))
            .with_tag(Some("trial-3".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert_eq!(prov_path, dir.path().join("draws.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "range");
        assert_eq!(parsed["tag"], "trial-3");
        assert_eq!(parsed["params"]["max"], 1.0);
        assert_eq!(parsed["lib_version"], mathcustom::VERSION);
    }

    #[test]
    fn provenance_path_without_extension() {
        let derived = provenance_path(Path::new("runs/draws"));
        assert_eq!(derived, Path::new("runs/draws.provenance.json"));
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }

    #[test]
    fn report_lists_curves() {
        let block = report_block(None);
        assert!(block["tag"].is_null());
        let curves = block["curves"].as_array().unwrap();
        assert!(curves.iter().any(|c| c == "smoothstep"));
    }
}
