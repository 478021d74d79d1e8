//! wotpack CLI - Build tool for World of Tanks mod packages
//!
//! Commands:
//! - `wotpack build` - Build a .wotmod package from a project
//! - `wotpack check` - Validate a wotpack.toml project manifest
//! - `wotpack list` - Show metadata and contents of an existing package

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod inspect;
mod project;

#[derive(Parser)]
#[command(name = "wotpack")]
#[command(author, version, about = "Build tool for .wotmod packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a .wotmod package
    Build {
        /// Path to the project (default: current directory)
        #[arg(short, long)]
        path: Option<String>,

        /// Developer's nickname or website, e.g. com.example
        /// (default: project author or maintainer)
        #[arg(long)]
        author_id: Option<String>,

        /// Modification identifier (default: project name)
        #[arg(long)]
        mod_id: Option<String>,

        /// Modification version (default: project version)
        #[arg(long)]
        mod_version: Option<String>,

        /// Modification description (default: project description)
        #[arg(long)]
        mod_description: Option<String>,

        /// Zero-padding width for each version component
        #[arg(long, default_value_t = wotpack_bundle::DEFAULT_VERSION_PADDING)]
        version_padding: usize,

        /// Installation directory for script modules
        /// (default: res/scripts/client/gui/mods)
        #[arg(long)]
        install_lib: Option<String>,

        /// Installation directory for data files
        /// (default: res/mods/<author_id>.<mod_id>)
        #[arg(long)]
        install_data: Option<String>,

        /// Path to a Python 2.7 interpreter used for byte compilation
        #[arg(long, env = "WOTPACK_PYTHON27")]
        python27: Option<PathBuf>,

        /// Temporary directory for staging the package contents
        #[arg(long)]
        bdist_dir: Option<PathBuf>,

        /// Directory to put the finished package in (default: <project>/dist)
        #[arg(long)]
        dist_dir: Option<PathBuf>,
    },

    /// Validate a wotpack.toml project manifest
    Check {
        /// Path to wotpack.toml (default: ./wotpack.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Show metadata and contents of a .wotmod package
    List {
        /// Path to the package file
        package: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            path,
            author_id,
            mod_id,
            mod_version,
            mod_description,
            version_padding,
            install_lib,
            install_data,
            python27,
            bdist_dir,
            dist_dir,
        } => {
            build::run(build::BuildOptions {
                path,
                author_id,
                mod_id,
                mod_version,
                mod_description,
                version_padding,
                install_lib,
                install_data,
                python27,
                bdist_dir,
                dist_dir,
            })?;
        }
        Commands::Check { manifest } => {
            project::check(manifest)?;
        }
        Commands::List { package } => {
            inspect::run(&package)?;
        }
    }

    Ok(())
}
