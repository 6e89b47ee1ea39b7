use buildpack::core::BuildpackResult;
use buildpack::format_error_with_help;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "buildpack")]
#[command(about = "Resolve buildpack manifest dependencies to verified artifacts")]
#[command(version)]
struct Cli {
    /// Path to the buildpack manifest
    #[arg(short, long, global = true, default_value = "manifest.yml")]
    manifest: PathBuf,

    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a dependency to a file and verify its checksum
    Fetch {
        /// Dependency name
        name: String,
        /// Dependency version (defaults to the manifest's default version)
        version: Option<String>,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Fetch a dependency and unpack it into a directory
    Install {
        /// Dependency name
        name: String,
        /// Dependency version (defaults to the only version in the manifest)
        version: Option<String>,
        /// Install directory
        #[arg(short, long)]
        dir: PathBuf,
    },
    /// Print the default version pinned for a dependency
    DefaultVersion {
        /// Dependency name
        name: String,
    },
    /// List every version of a dependency in the manifest
    Versions {
        /// Dependency name
        name: String,
    },
    /// Print the buildpack version from the VERSION file beside the manifest
    BuildpackVersion,
    /// Check that the manifest supports a stack
    CheckStack {
        /// Stack name (defaults to $CF_STACK, then the config file)
        stack: Option<String>,
    },
}

fn run(cli: Cli) -> BuildpackResult<()> {
    let config = cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Fetch {
            name,
            version,
            output,
        } => cli::fetch::run(&cli.manifest, &config, &name, version, &output),
        Commands::Install { name, version, dir } => {
            cli::install::run(&cli.manifest, &config, &name, version, &dir)
        }
        Commands::DefaultVersion { name } => cli::query::default_version(&cli.manifest, &name),
        Commands::Versions { name } => cli::query::versions(&cli.manifest, &name),
        Commands::BuildpackVersion => cli::query::buildpack_version(&cli.manifest),
        Commands::CheckStack { stack } => cli::query::check_stack(&cli.manifest, &config, stack),
    }
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
