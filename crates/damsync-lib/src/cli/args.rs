use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Serve {
        config_path: Option<String>,
        bind_address: Option<String>,
    },
    Mirror {
        config_path: Option<String>,
        path: String,
        base_url: Option<String>,
        output_dir: Option<String>,
        batch_size: Option<usize>,
        batch_delay_ms: Option<u64>,
        alias_tree: bool,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "damsync",
    version,
    about = "Mirror DAM assets from a content-repository API into a local directory tree"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Run the HTTP server exposing the download trigger endpoint
    Serve {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file"
        )]
        config: Option<String>,

        #[arg(
            short = 'b',
            long = "bind",
            value_name = "ADDR",
            help = "Overrides the configured bind address"
        )]
        bind: Option<String>,
    },

    /// Run one mirror batch job without the server
    Mirror {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file"
        )]
        config: Option<String>,

        #[arg(
            short = 'p',
            long = "path",
            value_name = "PATH",
            help = "Manifest path appended to the base URL"
        )]
        path: String,

        #[arg(
            long = "base-url",
            value_name = "URL",
            help = "Overrides the configured repository base URL"
        )]
        base_url: Option<String>,

        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the output directory for mirrored assets"
        )]
        output_dir: Option<String>,

        #[arg(
            long = "batch-size",
            value_name = "N",
            help = "Overrides the number of assets downloaded concurrently per batch"
        )]
        batch_size: Option<usize>,

        #[arg(
            long = "batch-delay-ms",
            value_name = "MS",
            help = "Overrides the pause between batches, in milliseconds"
        )]
        batch_delay_ms: Option<u64>,

        #[arg(
            long = "alias-tree",
            help = "Also mirror every asset into a flat id-keyed alias tree",
            action = ArgAction::SetTrue
        )]
        alias_tree: bool,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("hyper=warn".parse().unwrap()),
        )
        .init();

    let command = match cli.command {
        CliCommand::Serve { config, bind } => Command::Serve {
            config_path: config,
            bind_address: bind,
        },
        CliCommand::Mirror {
            config,
            path,
            base_url,
            output_dir,
            batch_size,
            batch_delay_ms,
            alias_tree,
        } => Command::Mirror {
            config_path: config,
            path,
            base_url,
            output_dir,
            batch_size,
            batch_delay_ms,
            alias_tree,
        },
    };

    Args { command, log_level }
}
