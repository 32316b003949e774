//! `folio` command-line host.
//!
//! # Responsibility
//! - Drive `folio_core` against a content directory and a SQLite
//!   preference store.
//! - Print rendered view fragments and counters for local inspection.

use clap::{Parser, Subcommand, ValueEnum};
use folio_core::config::CONFIG_FILE_NAME;
use folio_core::{
    init_logging, AppConfig, DirContentSource, MemorySurface, PortfolioApp, Region, SortKey,
    SqliteStore, TagFilter, ThemeMode, ViewId,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Render and manage a folio portfolio page")]
struct Cli {
    /// Config file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Override the content directory from the config.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the preference store path from the config.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the HTML regions of the view a fragment routes to.
    Render {
        /// URL fragment such as `#projects`; unknown values show home.
        #[arg(default_value = "#home")]
        fragment: String,
        #[arg(long, default_value = "")]
        search: String,
        /// Tag chip to press (`All` for every project).
        #[arg(long, default_value = "All")]
        tag: String,
        /// `alpha`, `recent` or `stars`.
        #[arg(long, default_value = "")]
        sort: String,
        /// Experience tag filter (`all` for every role).
        #[arg(long, default_value = "all")]
        experience_filter: String,
        /// Also print the case-study modal for this project id.
        #[arg(long)]
        modal: Option<String>,
    },
    /// Print the home view counters.
    Stats,
    /// Toggle one project's favorite flag.
    Favorite { project_id: String },
    /// List favorited project ids.
    Favorites,
    /// Show or toggle the stored theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Render { .. } => "render",
            Self::Stats => "stats",
            Self::Favorite { .. } => "favorite",
            Self::Favorites => "favorites",
            Self::Theme { .. } => "theme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(mut settings) = config.log_settings(true)? {
        if settings.log_dir.is_relative() {
            settings.log_dir = std::env::current_dir()?.join(&settings.log_dir);
        }
        init_logging(&settings)?;
    }

    let store = SqliteStore::open(&config.store_path)?;
    let mut app = PortfolioApp::new(store, MemorySurface::new(), config.app_options());
    info!(
        "event=cli_start module=cli status=ok command={}",
        cli.command.name()
    );

    match cli.command {
        Command::Render {
            fragment,
            search,
            tag,
            sort,
            experience_filter,
            modal,
        } => {
            app.load_content_source(&DirContentSource::new(&config.data_dir))?;
            app.set_search_text(search);
            app.select_tag(TagFilter::from_chip_value(&tag));
            app.set_sort_key(SortKey::from_control_value(&sort));
            app.set_experience_filter(TagFilter::from_experience_value(&experience_filter));
            app.navigate_fragment(&fragment);
            print_view(&app);

            if let Some(project_id) = modal {
                if !app.open_project_modal(&project_id) {
                    return Err(format!("unknown project id `{project_id}`").into());
                }
                print_region(&app, Region::ModalContent);
            }
        }
        Command::Stats => {
            let summary = app.load_content_source(&DirContentSource::new(&config.data_dir))?;
            println!("projects={}", summary.project_count);
            println!("experience_years={}", summary.experience_years_label());
            println!("awards={}", summary.award_count);
        }
        Command::Favorite { project_id } => {
            let favorited = app.toggle_favorite(&project_id);
            println!("{project_id} favorite={favorited}");
        }
        Command::Favorites => {
            for project_id in app.favorites().iter() {
                println!("{project_id}");
            }
        }
        Command::Theme { action } => {
            let mode = match action {
                ThemeAction::Show => app.theme(),
                ThemeAction::Toggle => Some(app.toggle_theme()),
            };
            println!("theme={}", mode.map_or("unset", ThemeMode::as_str));
        }
    }

    Ok(())
}

fn print_view(app: &PortfolioApp<SqliteStore, MemorySurface>) {
    let view: ViewId = app.active_view();
    println!("view={}", view.as_str());
    for region in view.content_regions() {
        print_region(app, *region);
    }
}

fn print_region(app: &PortfolioApp<SqliteStore, MemorySurface>, region: Region) {
    println!("--- #{}", region.element_id());
    println!("{}", app.surface().content(region));
}
