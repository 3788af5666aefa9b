use std::env;
use std::panic;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use ts_engine::config::EngineConfig;
use ts_engine::model::{FieldDefinition, FieldType, Point, SeriesWrite};
use ts_engine::query::Query;
use ts_engine::store::Store;

use tsdbcli::trace;

#[derive(Debug, Parser)]
#[command(version, author, about = "Time-series storage engine CLI")]
struct Args {
    /// Directory holding the engine's on-disk files.
    #[clap(short = 'p', long = "path", default_value = "./tsdb")]
    path: PathBuf,

    #[clap(short = 'l', long, default_value = "info")]
    log_level: String,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write one or more points into a series.
    Write {
        #[clap(long)]
        db: String,
        #[clap(long)]
        series: String,
        /// A field definition, `name:type` where type is one of
        /// float|integer|string|boolean. Repeatable.
        #[clap(long = "field", required = true)]
        fields: Vec<String>,
        /// A point, `timestamp:sequence:value1,value2,...` positionally
        /// aligned to `--field`. Use `-` for a field with no value at
        /// this point. Repeatable.
        #[clap(long = "point", required = true)]
        points: Vec<String>,
    },
    /// Query a time range over a set of columns and print matching rows.
    Query {
        #[clap(long)]
        db: String,
        #[clap(long)]
        series: String,
        #[clap(long, value_delimiter = ',')]
        columns: Vec<String>,
        #[clap(long)]
        start: i64,
        #[clap(long)]
        end: i64,
    },
}

fn main() -> Result<()> {
    setup_panic_hooks();

    let args = Args::parse();

    let log_dir = format!("{}/.tsdbcli", env::var("HOME").unwrap_or_else(|_| ".".to_string()));
    let _guards = trace::init_logging(&log_dir, &args.log_level)?;
    info!("tsdbcli start args: {:?}", &args);

    let mut store = Store::open(&args.path, &EngineConfig::default())
        .with_context(|| format!("opening store at {}", args.path.display()))?;

    match args.cmd {
        Command::Write { db, series, fields, points } => {
            let fields = parse_fields(&fields)?;
            let points = parse_points(&points, fields.len())?;
            let write = SeriesWrite::new(series, fields, points);
            store.write(&db, &write)?;
            println!("ok");
        }
        Command::Query { db, series, columns, start, end } => {
            let query = Query::new(db, series, columns, start, end);
            let rows = store.query(&query)?;
            for row in &rows {
                let values = row
                    .values
                    .iter()
                    .map(|v| match v {
                        Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                        None => "-".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                println!("{}\t{}\t{}", row.timestamp, row.sequence, values);
            }
        }
    }

    store.close()?;
    Ok(())
}

fn parse_fields(raw: &[String]) -> Result<Vec<FieldDefinition>> {
    raw.iter()
        .map(|entry| {
            let (name, kind) = entry
                .split_once(':')
                .ok_or_else(|| anyhow!("field {:?} must be name:type", entry))?;
            let kind = match kind {
                "float" => FieldType::Float,
                "integer" => FieldType::Integer,
                "string" => FieldType::String,
                "boolean" => FieldType::Boolean,
                other => return Err(anyhow!("unknown field type {:?}", other)),
            };
            Ok(FieldDefinition::new(name, kind))
        })
        .collect()
}

fn parse_points(raw: &[String], field_count: usize) -> Result<Vec<Point>> {
    raw.iter()
        .map(|entry| {
            let mut parts = entry.splitn(3, ':');
            let timestamp: i64 = parts
                .next()
                .ok_or_else(|| anyhow!("point {:?} missing timestamp", entry))?
                .parse()
                .with_context(|| format!("parsing timestamp in point {:?}", entry))?;
            let sequence: u64 = parts
                .next()
                .ok_or_else(|| anyhow!("point {:?} missing sequence", entry))?
                .parse()
                .with_context(|| format!("parsing sequence in point {:?}", entry))?;
            let raw_values = parts.next().unwrap_or("");
            let values: Vec<Option<Vec<u8>>> = raw_values
                .split(',')
                .map(|v| if v == "-" { None } else { Some(v.as_bytes().to_vec()) })
                .collect();
            if values.len() != field_count {
                return Err(anyhow!(
                    "point {:?} has {} value(s), expected {}",
                    entry,
                    values.len(),
                    field_count
                ));
            }
            Ok(Point::new(timestamp, sequence, values))
        })
        .collect()
}

fn setup_panic_hooks() {
    let meta = human_panic::Metadata {
        version: env!("CARGO_PKG_VERSION").into(),
        name: env!("CARGO_PKG_NAME").into(),
        authors: env!("CARGO_PKG_AUTHORS").replace(':', ", ").into(),
        homepage: env!("CARGO_PKG_HOMEPAGE").into(),
    };

    let default_hook = panic::take_hook();

    if env::var("RUST_BACKTRACE").is_err() {
        panic::set_hook(Box::new(move |info: &panic::PanicInfo| {
            default_hook(info);
            let file_path = human_panic::handle_dump(&meta, info);
            human_panic::print_msg(file_path, &meta)
                .expect("human-panic: printing error message to console failed");
        }));
    }
}
