use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use eplstats::dashboard::{Dashboard, DashboardView, Query};
use eplstats::data::MatchTable;
use eplstats::domain::ResultFilter;
use eplstats::{export, print};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV file to source the match records from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// team to report on
    #[clap(short = 't', long)]
    team: Option<String>,

    /// season label, e.g. 2000/01
    #[clap(short = 's', long)]
    season: Option<String>,

    /// result filter: all, win, draw or loss
    #[clap(short = 'r', long, value_parser = parse_result_filter, default_value = "all")]
    result: ResultFilter,

    /// list the seasons and teams in the file instead of reporting
    #[clap(long)]
    list: bool,

    /// where to write the filtered match table as CSV
    #[clap(long = "csv")]
    csv: Option<PathBuf>,

    /// print the view as JSON instead of tables
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.file.as_ref().ok_or(anyhow!("match file must be specified"))?;
        if self.list {
            if self.team.is_some() || self.season.is_some() {
                bail!("--list cannot be combined with -t or -s");
            }
        } else if self.team.is_none() || self.season.is_none() {
            bail!("both the -t and the -s flags must be specified");
        }
        Ok(())
    }
}
fn parse_result_filter(s: &str) -> anyhow::Result<ResultFilter> {
    s.parse()
        .map_err(|_| anyhow!("unsupported result filter {s}, expected one of all, win, draw, loss"))
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let file = args.file.as_ref().ok_or(anyhow!("match file must be specified"))?;
    let table = MatchTable::read_from_file(file)
        .with_context(|| format!("loading match records from {}", file.display()))?;

    if args.list {
        println!("Seasons:\n{}", Console::default().render(&print::tabulate_seasons(&table)));
        println!("Teams:\n{}", Console::default().render(&print::tabulate_teams(&table)));
        return Ok(());
    }

    let dashboard = Dashboard::new(Arc::new(table));
    let query = Query::new(
        args.team.unwrap_or_default(),
        args.season.unwrap_or_default(),
        args.result,
    );
    let view = dashboard.query(&query)?;
    info!(
        "{} {} ({}): {} matches",
        query.team,
        query.season,
        query.result,
        view.matches.len()
    );

    if let Some(path) = &args.csv {
        export::write_csv_file(&view, path)?;
        info!("wrote match table to {}", path.display());
    }

    if args.json {
        export::write_json(&view, io::stdout().lock())?;
        println!();
    } else {
        render(&view);
    }
    Ok(())
}

fn render(view: &DashboardView) {
    let console = Console::default();
    println!(
        "{} · {} · {}",
        view.query.team, view.query.season, view.query.result
    );
    println!("KPIs:\n{}", console.render(&print::tabulate_kpis(&view.kpis)));
    println!(
        "By venue:\n{}",
        console.render(&print::tabulate_chart(&view.win_rate_by_venue()))
    );
    println!(
        "{}",
        console.render(&print::tabulate_chart(&view.goals_by_venue()))
    );
    println!("{}", console.render(&print::tabulate_venues(&view.by_venue)));
    println!(
        "By period:\n{}",
        console.render(&print::tabulate_chart(&view.goals_by_period()))
    );
    println!("{}", console.render(&print::tabulate_periods(&view.by_period)));
    println!("Matches:\n{}", console.render(&print::tabulate_matches(&view.matches)));
}
