use std::path::{Path, PathBuf};
use clap::{Parser, Subcommand};

use route_list::config::{load_config, RouteListConfig};
use route_list::observability::init_logging;
use route_list::store::{ArtifactWatcher, RouteTable};
use route_list::RouteArgs;

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect and resolve routes from a route metadata file", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route metadata file; overrides the configured one.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Reject files that declare a route name twice.
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every route as JSON
    List {
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print the path for a named route
    Resolve {
        name: String,

        /// Keyed placeholder value, `key=value` (repeatable).
        #[arg(short = 'a', long = "arg", value_parser = parse_key_val, conflicts_with = "values")]
        keyed: Vec<(String, String)>,

        /// Positional placeholder values, in order.
        values: Vec<String>,

        /// Pass the values positionally even when none are given.
        #[arg(long, conflicts_with = "keyed")]
        positional: bool,

        /// Script name to prefix when `add_script_name` is enabled.
        #[arg(long, default_value = "")]
        script_name: String,
    },
    /// Reload and list routes whenever the file changes
    Watch,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouteListConfig::default(),
    };
    if let Some(file) = cli.file {
        config.file = file;
        config.root = None;
    }
    config.strict_names |= cli.strict;

    init_logging(&config.observability.log_level);

    let table = RouteTable::open(&config)?;

    match cli.command {
        Commands::List { pretty } => {
            let routes = table.all_routes();
            let json = if pretty {
                serde_json::to_string_pretty(&routes)?
            } else {
                serde_json::to_string(&routes)?
            };
            println!("{}", json);
        }
        Commands::Resolve { name, keyed, values, positional, script_name } => {
            let args = if !keyed.is_empty() {
                Some(RouteArgs::keyed(keyed))
            } else if positional || !values.is_empty() {
                Some(RouteArgs::positional(values))
            } else {
                None
            };
            let path = table.resolve_mounted(&script_name, &name, args.as_ref())?;
            println!("{}", path);
        }
        Commands::Watch => {
            let artifact = table.artifact_path().map(Path::to_path_buf).unwrap_or_else(|| config.artifact_path());
            let (watcher, mut updates) = ArtifactWatcher::new(&artifact, table.strict_names());
            let _guard = watcher.run()?;

            print_summary(&table);
            loop {
                tokio::select! {
                    update = updates.recv() => {
                        let Some(index) = update else { break };
                        table.replace(index);
                        print_summary(&table);
                    }
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Interrupted, stopping watcher");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_summary(table: &RouteTable) {
    let index = table.current();
    println!("{} routes, {} named", index.len(), index.names().count());
    for route in index.all() {
        let methods = route.methods.as_ref().map(|m| m.join("|")).unwrap_or_else(|| "*".into());
        match &route.name {
            Some(name) => println!("  {:<10} {} [{}]", methods, route.path, name),
            None => println!("  {:<10} {}", methods, route.path),
        }
    }
}
