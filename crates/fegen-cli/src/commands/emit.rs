use std::fs;
use std::path::{Path, PathBuf};

use fegen_lib::{Artifact, EmitConfig, Error, Manager, Result};

use super::fail;
use super::input::load_manager;

pub struct EmitArgs {
    pub input: PathBuf,
    pub artifacts: Vec<Artifact>,
    /// Target directory; stdout when absent.
    pub output: Option<PathBuf>,
    pub summary: Option<String>,
}

pub fn run(args: EmitArgs) {
    let manager = load_manager(&args.input).unwrap_or_else(|err| fail(err));
    let mut config = EmitConfig::new();
    if let Some(summary) = args.summary {
        config = config.summary(summary);
    }

    let result = match &args.output {
        Some(dir) => write_artifacts(&manager, &args.artifacts, &config, dir).map(|_| ()),
        None => render_artifacts(&manager, &args.artifacts, &config).map(|text| print!("{text}")),
    };
    if let Err(err) = result {
        fail(err);
    }
}

/// Generate every artifact before writing any, so a failure leaves `dir` untouched.
pub fn write_artifacts(
    manager: &Manager,
    artifacts: &[Artifact],
    config: &EmitConfig,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let module = manager.module_name();
    let files = artifacts
        .iter()
        .map(|artifact| -> Result<(PathBuf, String)> {
            Ok((dir.join(artifact.file_name(module)), artifact.emit(manager, config)?))
        })
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        fs::write(&path, content).map_err(|source| io_error(&path, source))?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Concatenate the artifacts for stdout. Several files are separated by a
/// `// <file>` banner line.
pub fn render_artifacts(
    manager: &Manager,
    artifacts: &[Artifact],
    config: &EmitConfig,
) -> Result<String> {
    if let [artifact] = artifacts {
        return artifact.emit(manager, config);
    }
    let mut out = String::new();
    for artifact in artifacts {
        let content = artifact.emit(manager, config)?;
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("// {}\n", artifact.file_name(manager.module_name())));
        out.push_str(&content);
    }
    Ok(out)
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.display().to_string(),
        source,
    }
}
