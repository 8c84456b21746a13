use anyhow::Context;
use serde::Deserialize;

/// The domain crate must stay pure: no runtime, logging or environment access.
const PURE_CRATE: &str = "tavernkeep-domain";
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &["tokio", "tracing", "dotenvy", "async-trait"];

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
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    #[serde(default)]
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
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
    let violations = domain_violations(&metadata)?;
    if !violations.is_empty() {
        anyhow::bail!(
            "{PURE_CRATE} must not depend on: {}",
            violations.join(", ")
        );
    }

    println!("arch-check passed");
    Ok(())
}

/// Forbidden non-dev dependencies of the domain crate.
fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == PURE_CRATE)
        .with_context(|| format!("{PURE_CRATE} not found in workspace"))?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| d.kind.as_deref() != Some("dev"))
        .filter(|d| FORBIDDEN_DOMAIN_DEPS.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).expect("valid metadata")
    }

    #[test]
    fn clean_domain_passes() {
        let meta = metadata(
            r#"{"packages": [
                {"name": "tavernkeep-domain", "dependencies": [
                    {"name": "serde", "kind": null},
                    {"name": "thiserror", "kind": null}
                ]},
                {"name": "tavernkeep-engine", "dependencies": [
                    {"name": "tokio", "kind": null}
                ]}
            ]}"#,
        );
        assert!(domain_violations(&meta).expect("check").is_empty());
    }

    #[test]
    fn runtime_deps_in_domain_are_reported() {
        let meta = metadata(
            r#"{"packages": [
                {"name": "tavernkeep-domain", "dependencies": [
                    {"name": "tokio", "kind": null},
                    {"name": "tracing", "kind": null},
                    {"name": "serde", "kind": null}
                ]}
            ]}"#,
        );
        assert_eq!(
            domain_violations(&meta).expect("check"),
            vec!["tokio".to_string(), "tracing".to_string()]
        );
    }

    #[test]
    fn dev_dependencies_are_allowed() {
        let meta = metadata(
            r#"{"packages": [
                {"name": "tavernkeep-domain", "dependencies": [
                    {"name": "tokio", "kind": "dev"}
                ]}
            ]}"#,
        );
        assert!(domain_violations(&meta).expect("check").is_empty());
    }

    #[test]
    fn missing_domain_is_an_error() {
        let meta = metadata(r#"{"packages": []}"#);
        assert!(domain_violations(&meta).is_err());
    }
}
