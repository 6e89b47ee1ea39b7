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
    output: &Path,
) -> BuildpackResult<()> {
    let manifest = Manifest::load(manifest_path)?;

    let version = match version {
        Some(v) => v,
        None => manifest.default_version(name)?.to_string(),
    };
    let dependency = Dependency::new(name, version);

    let resolver = DependencyResolver::new(&manifest, config)?;
    resolver.fetch(&dependency, output)?;

    println!("✓ Fetched {} to {}", dependency, output.display());
    Ok(())
}
