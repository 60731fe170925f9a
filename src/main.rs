use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use course_catalog::catalog::CatalogStore;
use course_catalog::config::load_settings;
use course_catalog::selection::SelectionController;
use course_catalog::view::{CatalogView, Event};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{parse, preselect, Command, HELP};

#[derive(Parser, Debug)]
#[command(name = "course-catalog", about = "Browse the course catalog and mark courses")]
struct Cli {
    /// Directory holding catalog resources (defaults to the bundled catalog)
    #[arg(long)]
    resources: Option<PathBuf>,
    /// Resource name to load, without extension
    #[arg(long)]
    resource: Option<String>,
    /// Course to select before the first render; repeatable
    #[arg(long = "select", value_name = "ID")]
    select: Vec<String>,
    /// Start with only selected courses shown
    #[arg(long)]
    only_selected: bool,
    /// Print the catalog once and exit
    #[arg(long)]
    once: bool,
    /// With --once, print the visible rows as JSON instead of text
    #[arg(long, requires = "once")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(dir) = cli.resources {
        settings.resources_dir = Some(dir);
    }
    if let Some(name) = cli.resource {
        settings.resource_name = name;
    }

    let mut store = CatalogStore::new(settings.locator());
    store.load(&settings.resource_name);

    let mut controller = SelectionController::new();
    for id in preselect(&store, &mut controller, cli.select) {
        eprintln!("unknown course: {id}");
    }
    controller.set_filter(cli.only_selected);

    let mut view = CatalogView::new(store, controller);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &view.rows())?;
        writeln!(out)?;
        return Ok(());
    }

    write!(out, "{}", view.render())?;
    if cli.once {
        return Ok(());
    }

    writeln!(out, "{HELP}")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        match parse(&line?) {
            Command::Toggle(id) => {
                if view.handle(Event::TapRow(id.clone())) {
                    write!(out, "{}", view.render())?;
                } else {
                    writeln!(out, "no visible course {id}")?;
                }
            }
            Command::Filter(flag) => {
                view.handle(Event::SetShowOnlySelected(flag));
                write!(out, "{}", view.render())?;
            }
            Command::List => write!(out, "{}", view.render())?,
            Command::Reload => {
                view.store_mut().load(&settings.resource_name);
                write!(out, "{}", view.render())?;
            }
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(input) => writeln!(out, "unrecognized: {input}\n{HELP}")?,
        }
        out.flush()?;
    }

    Ok(())
}
