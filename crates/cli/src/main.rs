use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use mathcustom::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "mathcustom")]
#[command(about = "Evaluate and sample the procedural-generation math helpers")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    #[command(flatten)]
    Scalar(ScalarOp),
    /// Draw -1 or 1
    Sign {
        #[command(flatten)]
        replay: ReplayArgs,
    },
    /// Draw from [min, max), optionally exponent-weighted
    #[command(allow_negative_numbers = true)]
    Range {
        min: f64,
        max: f64,
        #[arg(long)]
        exp: Option<f64>,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[command(flatten)]
        replay: ReplayArgs,
        /// Write draws to a .csv or .parquet table (plus provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Count distinct values (from arguments or a table column)
    #[command(allow_negative_numbers = true)]
    Distinct {
        values: Vec<String>,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "value")]
        column: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Pure scalar subcommands, printed as one `Evaluation`.
#[derive(Subcommand)]
enum ScalarOp {
    /// Degrees to radians
    #[command(name = "deg2rad", allow_negative_numbers = true)]
    Deg2rad { x: f64 },
    /// Radians to degrees
    #[command(name = "rad2deg", allow_negative_numbers = true)]
    Rad2deg { x: f64 },
    /// Truncate toward zero, optionally keeping decimal places (0 means none)
    #[command(allow_negative_numbers = true)]
    Fix {
        x: f64,
        #[arg(long)]
        decimals: Option<i32>,
    },
    /// Base-10 logarithm
    #[command(name = "log10", allow_negative_numbers = true)]
    Log10 { x: f64 },
    /// Linear map from [in_min, in_max] to [out_min, out_max]
    #[command(allow_negative_numbers = true)]
    Map {
        #[command(flatten)]
        range: MapArgs,
    },
    /// Curved map; the curve is an exponent or a named easing curve
    #[command(allow_negative_numbers = true)]
    Mapx {
        #[command(flatten)]
        range: MapArgs,
        #[arg(long)]
        curve: String,
    },
}

#[derive(Args)]
struct MapArgs {
    val: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
}

#[derive(Args)]
struct ReplayArgs {
    /// Seed for a reproducible stream; omit to use the thread-local generator
    #[arg(long)]
    seed: Option<u64>,
    /// Stream index mixed with the seed
    #[arg(long, default_value_t = 0)]
    index: u64,
}

impl ReplayArgs {
    fn sampler(&self) -> Option<Sampler> {
        self.seed
            .map(|seed| Sampler::from_replay(ReplayToken::new(seed, self.index)))
    }
}

#[derive(Serialize)]
struct Evaluation {
    op: &'static str,
    input: Value,
    value: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    match cmd.action {
        Action::Sign { replay } => sign(replay, tag),
        Action::Range {
            min,
            max,
            exp,
            count,
            replay,
            out,
        } => range(RangeCfg { min, max, exp }, count, replay, out, tag),
        Action::Distinct {
            values,
            input,
            column,
        } => distinct(values, input, column, tag),
        Action::Report => report(tag),
        Action::Scalar(op) => {
            let eval = evaluate(&op);
            tracing::info!(op = eval.op, value = eval.value, tag = ?tag, "eval");
            println!("{}", serde_json::to_string(&eval)?);
            Ok(())
        }
    }
}

fn evaluate(op: &ScalarOp) -> Evaluation {
    match op {
        ScalarOp::Deg2rad { x } => Evaluation {
            op: "deg2rad",
            input: json!({ "x": x }),
            value: deg_to_rad(*x),
        },
        ScalarOp::Rad2deg { x } => Evaluation {
            op: "rad2deg",
            input: json!({ "x": x }),
            value: rad_to_deg(*x),
        },
        ScalarOp::Fix { x, decimals } => Evaluation {
            op: "fix",
            input: json!({ "x": x, "decimals": decimals }),
            value: truncate(*x, *decimals),
        },
        ScalarOp::Log10 { x } => Evaluation {
            op: "log10",
            input: json!({ "x": x }),
            value: log10(*x),
        },
        ScalarOp::Map { range: r } => Evaluation {
            op: "map",
            input: map_input(r),
            value: map(r.val, r.in_min, r.in_max, r.out_min, r.out_max),
        },
        ScalarOp::Mapx { range: r, curve } => {
            let parsed = Curve::parse(curve);
            if !parsed.is_valid() {
                tracing::warn!(curve = %curve, "unrecognized curve; returning input unchanged");
            }
            let mut input = map_input(r);
            input["curve"] = json!(curve);
            Evaluation {
                op: "mapx",
                input,
                value: map_curved(r.val, r.in_min, r.in_max, r.out_min, r.out_max, parsed),
            }
        }
    }
}

fn map_input(r: &MapArgs) -> Value {
    json!({
        "val": r.val,
        "in_min": r.in_min,
        "in_max": r.in_max,
        "out_min": r.out_min,
        "out_max": r.out_max,
    })
}

fn draw_sign(replay: &ReplayArgs) -> i32 {
    match replay.sampler() {
        Some(mut s) => s.sign(),
        None => random_sign(),
    }
}

fn sign(replay: ReplayArgs, tag: Option<String>) -> Result<()> {
    let value = draw_sign(&replay);
    tracing::info!(value, seed = ?replay.seed, index = replay.index, tag = ?tag, "sign");
    println!("{}", json!({ "op": "sign", "value": value }));
    Ok(())
}

fn draw(cfg: &RangeCfg, count: usize, replay: &ReplayArgs) -> Vec<f64> {
    match replay.sampler() {
        Some(mut s) => s.ranges(count, cfg),
        None => (0..count)
            .map(|_| random_range(cfg.min, cfg.max, cfg.exp))
            .collect(),
    }
}

fn range(
    cfg: RangeCfg,
    count: usize,
    replay: ReplayArgs,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(min = cfg.min, max = cfg.max, exp = ?cfg.exp, count, tag = ?tag, "range");
    let values = draw(&cfg, count, &replay);
    let Some(out) = out else {
        println!("{}", json!({ "op": "range", "values": values }));
        return Ok(());
    };
    let rows = table::write_values(&out, "value", &values)?;
    let params = json!({
        "min": cfg.min,
        "max": cfg.max,
        "exp": cfg.exp,
        "count": count,
        "seed": replay.seed,
        "index": replay.index,
    });
    let payload = provenance::Payload::new("range", params).with_tag(tag);
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(rows, out = %out.display(), provenance = %prov.display(), "range_written");
    Ok(())
}

/// String-keyed counts from positional `values` or one column of `input`.
fn tally(
    values: Vec<String>,
    input: Option<&Path>,
    column: &str,
) -> Result<BTreeMap<String, usize>> {
    let items = match input {
        Some(path) => {
            if !values.is_empty() {
                bail!("pass values or --input, not both");
            }
            table::read_column_strings(path, column)?
        }
        None => values,
    };
    Ok(distinct_map_by_string(items).into_iter().collect())
}

fn distinct(
    values: Vec<String>,
    input: Option<PathBuf>,
    column: String,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        values = values.len(),
        input = ?input,
        column,
        tag = ?tag,
        "distinct"
    );
    let counts = tally(values, input.as_deref(), &column)?;
    println!("{}", serde_json::to_string(&counts)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::report_block(tag.as_deref());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
