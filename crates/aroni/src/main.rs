use aroni::{helpers::messages, Result};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = cli::run().await {
        tracing::error!(error = %e, "command::failed");
        messages::fail(e.to_string());
    }
    Ok(())
}

mod cli {
    use aroni::{commands, AroniConfig, Result};
    use aroni_logs::Logger;
    use clap::{Parser, Subcommand};
    use std::path::{Path, PathBuf};

    #[derive(Parser, Debug)]
    #[clap(name = "aroni", author, version, about, long_about = None)]
    pub struct Aroni {
        /// Config file to load.
        #[clap(
            short,
            long,
            global = true,
            env = "ARONI_CONFIG",
            default_value = "aroni.toml"
        )]
        config: PathBuf,

        #[clap(subcommand)]
        cmd: Command,
    }

    #[derive(Debug, Subcommand)]
    pub enum Command {
        /// Create a configuration file.
        Init {
            /// Path to the store document.
            #[clap(short, long)]
            path: Option<PathBuf>,
        },
        /// Declare shipment metadata from a JSON file.
        Metadata {
            /// Metadata JSON file.
            file: PathBuf,
        },
        /// Compare a scan with its metadata and log it.
        Scan {
            /// Scan event JSON file.
            file: PathBuf,
        },
        /// Print the scan log entries for a shipment.
        History {
            /// Tracking identifier of the shipment.
            tracking_id: String,
        },
        /// Anchor every logged scan.
        Anchor {
            /// Note stored with the anchor.
            #[clap(short, long)]
            note: Option<String>,
        },
        /// List anchors.
        Anchors,
        /// Print the inclusion proof for a scan hash.
        Proof {
            /// Leaf hash of the scan.
            hash: String,
        },
        /// Print the leaf hash of a scan record JSON file.
        Hash {
            /// Scan record JSON file.
            file: PathBuf,
        },
        /// Print the root of a tree built from leaf hashes.
        Root {
            /// Hexadecimal leaf hashes.
            #[clap(required = true)]
            leaves: Vec<String>,
        },
        /// Verify an inclusion proof.
        Verify {
            /// Leaf hash of the scan.
            #[clap(short, long)]
            leaf: String,

            /// Expected root hash.
            #[clap(short, long)]
            root: String,

            /// Sibling hashes from the leaf to the root.
            proof: Vec<String>,
        },
        /// Print log file status.
        Logs {
            /// Delete log files other than the current one.
            #[clap(short, long)]
            delete: bool,
        },
    }

    pub async fn run() -> Result<()> {
        let args = Aroni::parse();
        match args.cmd {
            Command::Init { path } => {
                Logger::init_subscriber(None)?;
                commands::init(args.config, path).await?;
            }
            Command::Hash { file } => {
                Logger::init_subscriber(None)?;
                commands::hash(file).await?;
            }
            Command::Root { leaves } => {
                Logger::init_subscriber(None)?;
                commands::root(leaves)?;
            }
            Command::Verify { leaf, root, proof } => {
                Logger::init_subscriber(None)?;
                commands::verify(leaf, proof, root)?;
            }
            Command::Metadata { file } => {
                let config = load(&args.config).await?;
                commands::declare_metadata(&config, file).await?;
            }
            Command::Scan { file } => {
                let config = load(&args.config).await?;
                commands::record_scan(&config, file).await?;
            }
            Command::History { tracking_id } => {
                let config = load(&args.config).await?;
                commands::history(&config, tracking_id).await?;
            }
            Command::Anchor { note } => {
                let config = load(&args.config).await?;
                commands::anchor(&config, note).await?;
            }
            Command::Anchors => {
                let config = load(&args.config).await?;
                commands::list_anchors(&config).await?;
            }
            Command::Proof { hash } => {
                let config = load(&args.config).await?;
                commands::proof(&config, hash).await?;
            }
            Command::Logs { delete } => {
                let config = load(&args.config).await?;
                commands::logs(&config, delete)?;
            }
        }
        Ok(())
    }

    /// Load the config and install the file subscriber.
    async fn load(path: &Path) -> Result<AroniConfig> {
        let config = AroniConfig::load(path).await?;
        config
            .logger()
            .init_file_subscriber(config.logs.level.clone())?;
        Ok(config)
    }
}
