use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gamesql::{
    assemble, emit_count_parameterized, emit_count_sql, emit_parameterized, emit_sql, parser, Dialect,
    ExploreRequest, SchemaRegistry,
};

#[derive(Parser)]
#[command(name = "gamesql")]
#[command(about = "Compile a game catalog explore request into SQL")]
#[command(version)]
struct Args {
    /// Explore request JSON file; reads stdin when absent or "-"
    request: Option<PathBuf>,

    /// Registry YAML file; the built-in game catalog is used when absent
    #[arg(long, env = "GAMESQL_REGISTRY")]
    registry: Option<PathBuf>,

    /// Target SQL dialect (postgres, duckdb)
    #[arg(long, env = "GAMESQL_DIALECT", default_value = "postgres")]
    dialect: Dialect,

    /// Emit $n placeholders and print the bound values as JSON on a second line
    #[arg(long)]
    bind: bool,

    /// Emit the total row count query instead of the row query
    #[arg(long)]
    count: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let registry = match &args.registry {
        Some(path) => parser::parse_registry_file(path)
            .with_context(|| format!("loading registry {}", path.display()))?,
        None => SchemaRegistry::game_catalog(),
    };
    info!(table = registry.table(), columns = registry.len(), "registry loaded");

    let request = read_request(args.request.as_deref())?;
    let query = assemble(&registry, &request).context("request rejected")?;

    if args.bind {
        let rendered = if args.count {
            emit_count_parameterized(&query, args.dialect)
        } else {
            emit_parameterized(&query, args.dialect)
        };
        println!("{}", rendered.sql);
        println!("{}", serde_json::to_string(&rendered.params)?);
    } else if args.count {
        println!("{}", emit_count_sql(&query, args.dialect));
    } else {
        println!("{}", emit_sql(&query, args.dialect));
    }

    Ok(())
}

fn read_request(path: Option<&Path>) -> anyhow::Result<ExploreRequest> {
    match path {
        Some(p) if p != Path::new("-") => {
            parser::parse_request_file(p).with_context(|| format!("reading request {}", p.display()))
        }
        _ => parser::parse_request_reader(std::io::stdin().lock()).context("reading request from stdin"),
    }
}
