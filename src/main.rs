use clap::{Parser, Subcommand};
use clap_complete::Shell;

mod commands;

use commands::check::CheckArgs;

#[cfg(all(not(target_env = "msvc"), not(target_arch = "wasm32")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(all(target_env = "msvc", not(target_arch = "wasm32")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "mdfence", author, version, about, long_about = None)]
pub struct Cli {
    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report code fences with unrecognized language identifiers
    Check(CheckArgs),

    /// Toggle code formatting of stdin: inline code for one line, a fenced block for several
    Format {
        /// Language of the inserted fence, by name or alias
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List the languages offered by pickers and completions
    Languages {
        /// List the whole catalogue instead of the popular languages
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a code snippet reference for a source file
    Snippet {
        /// Path of the referenced file, relative to the Markdown document
        source: String,

        /// Select the region tagged with this id
        #[arg(long, conflicts_with = "range")]
        id: Option<String>,

        /// Select lines, e.g. 1-15,18,20
        #[arg(long)]
        range: Option<String>,
    },

    /// Start the Language Server Protocol server
    Server {
        /// TCP port to listen on (for debugging)
        #[arg(long)]
        port: Option<u16>,

        /// Use stdio for communication (default)
        #[arg(long)]
        stdio: bool,
    },

    /// Create a default .mdfence.toml
    Init,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for, detected from $SHELL when omitted
        #[arg(value_enum)]
        shell: Option<Shell>,

        /// List the supported shells
        #[arg(long)]
        list: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Check(args) => commands::check::handle_check(&args),
        Commands::Format { language } => commands::format::handle_format(language.as_deref()),
        Commands::Languages { all, json } => commands::languages::handle_languages(all, json),
        Commands::Snippet { source, id, range } => commands::snippet::handle_snippet(&source, id, range),
        Commands::Server { port, stdio } => commands::server::handle_server(port, stdio),
        Commands::Init => commands::init::handle_init(),
        Commands::Completions { shell, list } => commands::completions::handle_completions(shell, list),
        Commands::Version => commands::version::handle_version(),
    }
}
