use buildpack::config::Config;
use buildpack::core::{BuildpackError, BuildpackResult};
use buildpack::manifest::Manifest;
use std::path::Path;

pub fn default_version(manifest_path: &Path, name: &str) -> BuildpackResult<()> {
    let manifest = Manifest::load(manifest_path)?;
    println!("{}", manifest.default_version(name)?);
    Ok(())
}

pub fn versions(manifest_path: &Path, name: &str) -> BuildpackResult<()> {
    let manifest = Manifest::load(manifest_path)?;
    let versions = manifest.all_dependency_versions(name);

    if versions.is_empty() {
        println!("No versions of {} in {}", name, manifest_path.display());
        return Ok(());
    }

    for version in versions {
        println!("{}", version);
    }
    Ok(())
}

pub fn buildpack_version(manifest_path: &Path) -> BuildpackResult<()> {
    let manifest = Manifest::load(manifest_path)?;
    println!("{}", manifest.version()?);
    Ok(())
}

pub fn check_stack(
    manifest_path: &Path,
    config: &Config,
    stack: Option<String>,
) -> BuildpackResult<()> {
    let stack = stack.or_else(|| config.stack()).ok_or_else(|| {
        BuildpackError::Config(
            "No stack given. Pass one, set CF_STACK, or set 'stack' in the config file."
                .to_string(),
        )
    })?;

    let manifest = Manifest::load(manifest_path)?;
    manifest.check_stack_support(&stack)?;

    println!("✓ Stack {} is supported", stack);
    Ok(())
}
