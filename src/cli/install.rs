use buildpack::config::Config;
use buildpack::core::BuildpackResult;
use buildpack::manifest::{Dependency, Manifest};
use buildpack::package::DependencyResolver;
use std::path::Path;

pub fn run(
    manifest_path: &Path,
    config: &Config,
    name: &str,
    version: Option<String>,
    dir: &Path,
) -> BuildpackResult<()> {
    let manifest = Manifest::load(manifest_path)?;
    let resolver = DependencyResolver::new(&manifest, config)?;

    let installed = match version {
        Some(version) => resolver.install(&Dependency::new(name, version), dir)?,
        None => resolver.install_only_version(name, dir)?,
    };

    println!("✓ Installed {} into {}", name, installed.display());
    Ok(())
}
