//! `graze` — load and query the meat-consumption document store.
//!
//! # Usage
//!
//! ```
//! graze load --csv data/meat_consumption_worldwide.csv --db graze.db
//! graze top --db graze.db --meat POULTRY --from 2014 --to 2019
//! graze growth BRA --db graze.db --meat BEEF
//! graze serve --db graze.db --addr 127.0.0.1:5250
//! ```

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use graze_core::observation::Measure;
use graze_query::{
  Snapshot,
  engine::{self, GroupKey, RowFilter, Trend},
};
use graze_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "graze", about = "Meat-consumption analytics over a document store")]
struct Cli {
  /// Path to the SQLite document store.
  #[arg(long, env = "GRAZE_DB", default_value = "graze.db")]
  db: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run the batch load: CSV → nested documents → replace the collection.
  Load {
    /// Long-form source CSV (OECD export).
    #[arg(long)]
    csv: PathBuf,
  },

  /// List the countries present in the loaded collection.
  Countries,

  /// Grouped means over the filtered rows.
  Mean {
    #[command(flatten)]
    filter: FilterArgs,

    /// Comma-separated grouping columns: country, year, meat_type.
    #[arg(long, default_value = "country")]
    by: String,
  },

  /// Rank countries by mean consumption.
  Top {
    #[command(flatten)]
    filter: FilterArgs,

    /// Ranking length.
    #[arg(short, default_value_t = 20)]
    n: usize,
  },

  /// Per-country composition of the diet across meat types.
  Composition {
    #[command(flatten)]
    filter: FilterArgs,
  },

  /// Growth between the first and last year of the filtered range.
  Growth {
    /// Country code, e.g. BRA.
    code: String,

    #[command(flatten)]
    filter: FilterArgs,
  },

  /// Serve the JSON API.
  Serve {
    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:5250")]
    addr: SocketAddr,
  },
}

/// Filter flags shared by every read command.
#[derive(Args, Debug)]
struct FilterArgs {
  /// Comma-separated country codes, e.g. BRA,USA,CHN.
  #[arg(long)]
  countries: Option<String>,

  /// First year of the analysis range.
  #[arg(long)]
  from: Option<i32>,

  /// Last year of the analysis range.
  #[arg(long)]
  to: Option<i32>,

  /// Meat-type code, e.g. POULTRY.
  #[arg(long)]
  meat: Option<String>,

  /// Measure token: KG_CAP (default) or THND_TONNE.
  #[arg(long, default_value = "KG_CAP")]
  measure: String,
}

impl FilterArgs {
  fn row_filter(&self) -> RowFilter {
    let years = match (self.from, self.to) {
      (None, None) => None,
      (from, to) => Some(from.unwrap_or(i32::MIN)..=to.unwrap_or(i32::MAX)),
    };

    RowFilter {
      countries: self.countries.as_deref().map(|s| {
        s.split(',')
          .map(|t| t.trim().to_owned())
          .filter(|t| !t.is_empty())
          .collect()
      }),
      years,
      meat_type: self.meat.clone(),
    }
  }

  fn measure(&self) -> anyhow::Result<Measure> {
    self
      .measure
      .parse()
      .with_context(|| format!("parsing measure {:?}", self.measure))
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let store = SqliteStore::open(&cli.db)
    .await
    .with_context(|| format!("opening store {}", cli.db.display()))?;

  match cli.command {
    Command::Load { csv } => {
      let observations = graze_pipeline::ingest::read_csv(&csv)
        .with_context(|| format!("reading {}", csv.display()))?;
      let summary = graze_pipeline::run_load(&store, &observations).await?;
      println!(
        "loaded {} observations → {} wide rows → {} country documents",
        summary.observations, summary.wide_rows, summary.documents
      );
    }

    Command::Countries => {
      let snapshot = load_snapshot(&store).await?;
      for (code, name) in snapshot.countries() {
        println!("{code}  {name}");
      }
    }

    Command::Mean { filter, by } => {
      let by = parse_group_keys(&by)?;
      let measure = filter.measure()?;
      let snapshot = load_snapshot(&store).await?;
      let rows = engine::filter(snapshot.rows(), &filter.row_filter());
      let groups = engine::group_mean(&rows, &by, measure);

      if groups.is_empty() {
        println!("no data for this selection");
      }
      for g in groups {
        println!("{:<40} {:>12.2}", g.label.join(" / "), g.value);
      }
    }

    Command::Top { filter, n } => {
      let measure = filter.measure()?;
      let snapshot = load_snapshot(&store).await?;
      let rows = engine::filter(snapshot.rows(), &filter.row_filter());
      let means = engine::group_mean(&rows, &[GroupKey::Country], measure);
      let top = engine::top_n(&means, n);

      if top.is_empty() {
        println!("no data for this selection");
      }
      for (rank, g) in top.iter().enumerate() {
        println!("{:>3}. {:<30} {:>12.2}", rank + 1, g.label[0], g.value);
      }
    }

    Command::Composition { filter } => {
      let snapshot = load_snapshot(&store).await?;
      let rows = engine::filter(snapshot.rows(), &RowFilter {
        meat_type: None,
        ..filter.row_filter()
      });
      let shares = engine::composition_share(&rows);

      if shares.is_empty() {
        println!("no data for this selection");
      }
      for s in shares {
        println!(
          "{:<20} {:<10} {:>6.1}%  ({:.2} kg/capita)",
          s.country_name,
          s.meat_type_label,
          s.share * 100.0,
          s.mean_per_capita_kg
        );
      }
    }

    Command::Growth { code, filter } => {
      let measure = filter.measure()?;
      let snapshot = load_snapshot(&store).await?;
      let rows = engine::filter(snapshot.rows(), &RowFilter {
        countries: Some(vec![code.clone()]),
        ..filter.row_filter()
      });

      match engine::growth_between_endpoints(&rows, measure) {
        Trend::Change { percent, from, to } => println!(
          "{code}: {percent:+.1}%  ({:.2} in {} → {:.2} in {})",
          from.value, from.year, to.value, to.year
        ),
        Trend::Insufficient => println!("{code}: N/A (insufficient data)"),
      }
    }

    Command::Serve { addr } => {
      let state = graze_api::AppState::load(store)
        .await
        .context("loading initial snapshot")?;
      let router = graze_api::api_router(state);

      let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
      tracing::info!(%addr, "serving graze API");
      axum::serve(listener, router).await?;
    }
  }

  Ok(())
}

async fn load_snapshot(store: &SqliteStore) -> anyhow::Result<Snapshot> {
  Snapshot::load(store)
    .await
    .context("loading analysis snapshot (run `graze load` first?)")
}

fn parse_group_keys(s: &str) -> anyhow::Result<Vec<GroupKey>> {
  s.split(',')
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(|t| match t {
      "country" => Ok(GroupKey::Country),
      "year" => Ok(GroupKey::Year),
      "meat_type" => Ok(GroupKey::MeatType),
      other => anyhow::bail!("unknown grouping column: {other:?}"),
    })
    .collect()
}
