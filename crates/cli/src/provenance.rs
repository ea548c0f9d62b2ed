//! `<artifact>.provenance.json` sidecars for files written by the CLI.

use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What was embedded and what came out.
#[derive(Clone, Debug, Serialize)]
pub struct EmbedRun {
    pub input: String,
    pub nodes: usize,
    pub edges: usize,
    pub planar: bool,
    /// Face count of the written rotation system (`V - E + F = 2c`).
    pub faces: usize,
    pub verify_rotations: bool,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    run: &'a EmbedRun,
    outputs: Vec<String>,
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, run: &EmbedRun) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: planarity::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        run,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/k4.json` -> `out/k4.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("rotation"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn k4_run() -> EmbedRun {
        EmbedRun {
            input: "graphs/k4.txt".to_string(),
            nodes: 4,
            edges: 6,
            planar: true,
            faces: 4,
            verify_rotations: false,
        }
    }

    #[test]
    fn sidecar_path_drops_last_extension() {
        let base = Path::new("/tmp/output/k4.rotation.json");
        assert_eq!(
            sidecar_path(base),
            Path::new("/tmp/output/k4.rotation.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_run_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("out").join("k4.json");
        let path = write_sidecar(&artifact, &k4_run()).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["run"]["input"], "graphs/k4.txt");
        assert_eq!(parsed["run"]["planar"], true);
        assert_eq!(parsed["run"]["faces"], 4);
        assert_eq!(parsed["version"], planarity::VERSION);
    }
}
