use std::path::{Path, PathBuf};

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

/// Crates that must stay free of I/O.
const PURE_CRATES: &[&str] = &["cochar-domain", "cochar-shared"];

/// Dependencies that bring networking, a runtime or a terminal surface.
const FORBIDDEN_DEPENDENCIES: &[&str] = &[
    "tokio",
    "reqwest",
    "url",
    "async-trait",
    "tracing-subscriber",
    "dotenvy",
    "clap",
    "wiremock",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `null` for normal dependencies, `"dev"` or `"build"` otherwise
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata);
    for package in metadata
        .packages
        .iter()
        .filter(|p| PURE_CRATES.contains(&p.name.as_str()))
    {
        let src = package
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .with_context(|| format!("manifest path of {}", package.name))?;
        violations.extend(source_violations(&package.name, &src, &metadata.workspace_root)?);
    }

    if violations.is_empty() {
        println!("arch-check: ok ({} pure crates)", PURE_CRATES.len());
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn dependency_violations(metadata: &Metadata) -> Vec<String> {
    metadata
        .packages
        .iter()
        .filter(|p| PURE_CRATES.contains(&p.name.as_str()))
        .flat_map(|p| {
            p.dependencies
                .iter()
                .filter(|d| d.kind.is_none())
                .filter(|d| FORBIDDEN_DEPENDENCIES.contains(&d.name.as_str()))
                .map(move |d| format!("{} depends on {}", p.name, d.name))
        })
        .collect()
}

fn io_pattern() -> anyhow::Result<Regex> {
    Regex::new(r"\b(tokio|reqwest|std::net|std::fs|std::process)::").context("compiling pattern")
}

/// Offending `(line number, line)` pairs in one source text.
fn scan_source(pattern: &Regex, text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect()
}

fn source_violations(crate_name: &str, src: &Path, root: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = io_pattern()?;
    let mut violations = Vec::new();
    for file in rust_files(src)? {
        let text = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        let shown = file.strip_prefix(root).unwrap_or(&file).display().to_string();
        for (line_no, line) in scan_source(&pattern, &text) {
            violations.push(format!("{crate_name}: {shown}:{line_no} uses I/O: {line}"));
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in
            std::fs::read_dir(&dir).with_context(|| format!("listing {}", dir.display()))?
        {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}
