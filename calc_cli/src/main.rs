//! # kceva CLI
//!
//! Terminal front end for the calculator catalog: browse and search the
//! catalog, run implemented calculators, and manage the locally persisted
//! history, preferences and theme.
//!
//! ## Usage
//!
//! ```text
//! kceva list --category finance
//! kceva search interest
//! kceva calc bmi-calculator weight=70 height=175
//! kceva history --favorites
//! kceva prefs set decimal_places 3
//! kceva sitemap > sitemap.xml
//! ```
//!
//! Logs go to stderr; `RUST_LOG=calc_core=debug` shows store activity.

mod render;

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calc_core::offline::{DirectoryFetcher, OfflineCache};
use calc_core::resolver::{ComponentResolver, ResolverMapping};
use calc_core::store::{FileStorage, Preference, Theme};
use calc_core::units::{Evaluation, UnitRegistry};
use calc_core::{sitemap, CalcError, Catalog, ClientState, Resolution, SiteConfig};

#[derive(Parser)]
#[command(name = "kceva")]
#[command(about = "Browse, search and run kceva calculators", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "KCEVA_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for history, preferences and theme (overrides config)
    #[arg(long, env = "KCEVA_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List calculators, optionally for one category
    List {
        /// Category slug (finance, health, math, ...)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List categories with calculator counts
    Categories,

    /// Calculators promoted on the homepage
    Featured,

    /// Search names, descriptions and keywords
    Search { query: String },

    /// Show one calculator: metadata, status and form fields
    Show { id: String },

    /// Run a calculator with `field=value` inputs
    Calc {
        id: String,
        inputs: Vec<String>,
        /// Do not record the result in history
        #[arg(long)]
        no_save: bool,
    },

    /// Show or edit calculation history
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
        /// Only favorites
        #[arg(long)]
        favorites: bool,
        /// Per-calculator usage counts
        #[arg(long)]
        stats: bool,
        /// Toggle the favorite flag on an entry
        #[arg(long, value_name = "ENTRY_ID")]
        toggle: Option<String>,
        /// Remove an entry
        #[arg(long, value_name = "ENTRY_ID")]
        remove: Option<String>,
        /// Remove every entry
        #[arg(long)]
        clear: bool,
    },

    /// Show or change preferences
    #[command(subcommand)]
    Prefs(PrefsCommand),

    /// Show or change the colour theme
    Theme {
        /// light, dark or auto; omit to show the current theme
        value: Option<String>,
        /// Flip between light and dark
        #[arg(long, conflicts_with = "value")]
        toggle: bool,
    },

    /// Implementation status counts across the catalog
    Status,

    /// Print sitemap.xml
    Sitemap {
        /// lastmod date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },

    /// Print robots.txt
    Robots,

    /// Install the offline cache from a built site directory into the
    /// storage dir, dropping older cache generations
    Precache { site_dir: PathBuf },
}

#[derive(Debug, Subcommand)]
enum PrefsCommand {
    /// Print current preferences
    Show,
    /// Set one preference
    Set { key: String, value: String },
    /// Restore defaults
    Reset,
}

/// Offline cache generations live here, under the storage dir
const OFFLINE_DIR: &str = "offline";

/// Everything a command may need
struct App {
    config: SiteConfig,
    catalog: &'static Catalog,
    state: ClientState,
    json: bool,
}

fn init_tracing() {
    // stderr keeps stdout clean for sitemap/json output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calc_cli=info,calc_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = SiteConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }

    let catalog = Catalog::builtin().context("built-in catalog failed validation")?;
    let storage = FileStorage::new(&config.storage_dir)
        .with_context(|| format!("cannot use storage dir {}", config.storage_dir.display()))?;
    let state = ClientState::new(Rc::new(storage));
    state.hydrate(false);

    let ctx = App {
        config,
        catalog,
        state,
        json: cli.json,
    };
    run(&ctx, cli.command)
}

fn resolver(ctx: &App) -> Result<ComponentResolver<'static>> {
    let mapping = ResolverMapping::builtin().with_overrides(&ctx.config.resolver_aliases);
    Ok(ComponentResolver::new(ctx.catalog, UnitRegistry::builtin(), mapping)?)
}

fn run(ctx: &App, command: Command) -> Result<()> {
    match command {
        Command::List { category } => {
            let calculators = match &category {
                Some(slug) => {
                    if ctx.catalog.category_by_slug(slug).is_none() {
                        bail!("unknown category '{}'", slug);
                    }
                    ctx.catalog.by_category_slug(slug)
                }
                None => ctx.catalog.all().iter().collect(),
            };
            render::calculators(ctx.json, &calculators, &resolver(ctx)?)
        }
        Command::Categories => render::categories(ctx.json, ctx.catalog),
        Command::Featured => render::calculators(ctx.json, &ctx.catalog.featured(), &resolver(ctx)?),
        Command::Search { query } => {
            let count = ctx.state.app.search(ctx.catalog, &query);
            info!(query = %query, results = count, "search");
            let ids = ctx.state.app.get().search_results;
            let results: Vec<_> = ids.iter().filter_map(|id| ctx.catalog.get_by_id(id)).collect();
            render::calculators(ctx.json, &results, &resolver(ctx)?)
        }
        Command::Show { id } => {
            let resolver = resolver(ctx)?;
            render::show(ctx.json, &ctx.config, &resolver, &id)
        }
        Command::Calc { id, inputs, no_save } => calc(ctx, &id, &inputs, no_save),
        Command::History {
            count,
            favorites,
            stats,
            toggle,
            remove,
            clear,
        } => {
            let history = &ctx.state.history;
            if clear {
                history.clear_history();
                info!("history cleared");
                return Ok(());
            }
            if let Some(entry) = toggle {
                history.toggle_favorite(&entry);
            }
            if let Some(entry) = remove {
                history.remove_calculation(&entry);
            }
            if stats {
                return render::usage(ctx.json, &history.usage_stats());
            }
            let entries = if favorites {
                history.favorites()
            } else {
                history.recent(count)
            };
            render::history(ctx.json, &entries)
        }
        Command::Prefs(cmd) => {
            let prefs = &ctx.state.preferences;
            match cmd {
                PrefsCommand::Show => {}
                PrefsCommand::Set { key, value } => {
                    prefs.update_preference(Preference::parse(&key, &value)?);
                    info!(key = %key, "preference updated");
                }
                PrefsCommand::Reset => prefs.reset(),
            }
            render::json_or(ctx.json, &prefs.get(), |p| render::preferences(p))
        }
        Command::Theme { value, toggle } => {
            let theme = &ctx.state.theme;
            if toggle {
                theme.toggle();
            } else if let Some(value) = value {
                theme.set_theme(value.parse::<Theme>()?);
            }
            let current = theme.get();
            render::json_or(ctx.json, &current, |t| {
                let colors = theme.colors();
                println!("{} ({})", t.name(), t.as_str());
                println!("  background {}  text {}", colors.background, colors.text);
            })
        }
        Command::Status => {
            let stats = resolver(ctx)?.stats();
            render::json_or(ctx.json, &stats, |s| {
                println!("{} calculators: {} working, {} in development", s.total, s.working, s.development);
            })
        }
        Command::Sitemap { date } => {
            let date = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            print!("{}", sitemap::sitemap_xml(ctx.catalog, &ctx.config, date));
            Ok(())
        }
        Command::Robots => {
            print!("{}", sitemap::robots_txt(&ctx.config));
            Ok(())
        }
        Command::Precache { site_dir } => {
            let root = ctx.config.storage_dir.join(OFFLINE_DIR);
            let mut cache = OfflineCache::open(&root, &ctx.config)?;
            let count = cache.install(&DirectoryFetcher::new(&site_dir))?;
            let removed = cache.activate();
            cache.persist(&root)?;
            info!(cache = cache.name(), entries = count, removed = removed.len(), "offline cache installed");
            for path in cache.allow_list() {
                let size = cache.cached(path).map(|r| r.body.len()).unwrap_or(0);
                println!("{:>8}  {}", size, path);
            }
            Ok(())
        }
    }
}

/// Parse `field=value` arguments into a form
fn parse_inputs(raw: &[String]) -> Result<Map<String, Value>> {
    let mut form = Map::new();
    for pair in raw {
        let Some((field, value)) = pair.split_once('=') else {
            bail!("expected field=value, got '{}'", pair);
        };
        form.insert(field.trim().to_string(), Value::String(value.trim().to_string()));
    }
    Ok(form)
}

fn calc(ctx: &App, id: &str, raw: &[String], no_save: bool) -> Result<()> {
    let resolver = resolver(ctx)?;
    let (descriptor, unit) = match resolver.resolve(id) {
        Resolution::Implemented { descriptor, unit, .. } => (descriptor, unit),
        Resolution::UnderDevelopment(d) => bail!("{} is under development", d.name),
        Resolution::Unknown => return Err(CalcError::calculator_not_found(id).into()),
    };

    let form = parse_inputs(raw)?;
    ctx.state.app.set_current_calculator(Some(descriptor.id));
    ctx.state.app.set_loading(true);

    let started = Instant::now();
    let outcome = unit.evaluate(&form);
    ctx.state.performance.record_calculation(descriptor.id, started.elapsed());
    ctx.state.app.set_loading(false);

    let result = match outcome {
        Ok(Evaluation::Computed(result)) => result,
        Ok(Evaluation::Invalid(check)) => {
            render::json_or(ctx.json, &check, |c| render::form_errors(c))?;
            bail!("{} field(s) failed validation", check.errors.len());
        }
        Err(e) => {
            ctx.state.performance.record_error(e.to_string());
            return Err(e.into());
        }
    };

    let prefs = ctx.state.preferences.get();
    if prefs.auto_save && !no_save {
        let entry = ctx
            .state
            .history
            .add_calculation(descriptor.id, descriptor.name, form, result.clone());
        info!(entry = %entry, "saved to history");
    }
    render::json_or(ctx.json, &result, |r| render::result(descriptor.name, r, &prefs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["kceva", "calc", "bmi-calculator", "weight=70", "height=175"]).unwrap();
        match cli.command {
            Command::Calc { id, inputs, no_save } => {
                assert_eq!(id, "bmi-calculator");
                assert_eq!(inputs.len(), 2);
                assert!(!no_save);
            }
            other => panic!("unexpected {:?}", other),
        }

        let cli = Cli::try_parse_from(["kceva", "--json", "prefs", "set", "currency", "eur"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Prefs(PrefsCommand::Set { .. })));

        assert!(Cli::try_parse_from(["kceva", "theme", "dark", "--toggle"]).is_err());
    }

    #[test]
    fn test_parse_inputs() {
        let form = parse_inputs(&["a=1".to_string(), " b = two ".to_string()]).unwrap();
        assert_eq!(form["a"], "1");
        assert_eq!(form["b"], "two");
        assert!(parse_inputs(&["novalue".to_string()]).is_err());
    }

    fn context(dir: &std::path::Path) -> App {
        let storage = FileStorage::new(dir).unwrap();
        App {
            config: SiteConfig::default(),
            catalog: Catalog::builtin().unwrap(),
            state: ClientState::new(Rc::new(storage)),
            json: true,
        }
    }

    #[test]
    fn test_calc_records_history() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        calc(&ctx, "tip-calculator", &["bill=50".to_string()], false).unwrap();
        assert_eq!(ctx.state.history.len(), 1);
        assert_eq!(ctx.state.performance.metrics().total_calculations, 1);

        // a fresh process sees the saved entry
        let reopened = context(dir.path());
        reopened.state.hydrate(false);
        assert_eq!(reopened.state.history.entries()[0].calculator_id, "tip-calculator");
    }

    #[test]
    fn test_calc_rejections() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        assert!(calc(&ctx, "world-clock", &[], false).is_err());
        let missing = calc(&ctx, "nope", &[], false).unwrap_err();
        assert_eq!(
            missing.downcast_ref::<CalcError>().map(CalcError::error_code),
            Some("CALCULATOR_NOT_FOUND")
        );
        assert!(calc(&ctx, "bmi-calculator", &["weight=70".to_string()], false).is_err());
        assert!(ctx.state.history.is_empty());
    }

    #[test]
    fn test_search_renders_app_state_results() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        run(&ctx, Command::Search { query: "mortgage".to_string() }).unwrap();
        let state = ctx.state.app.get();
        assert_eq!(state.search_query, "mortgage");
        assert!(state.search_results.iter().any(|id| id == "mortgage-calculator"));
    }

    #[test]
    fn test_precache_persists_generation() {
        let storage = tempfile::tempdir().unwrap();
        let site = tempfile::tempdir().unwrap();
        let mut ctx = context(storage.path());
        ctx.config.storage_dir = storage.path().to_path_buf();
        ctx.config.precache_urls = vec!["/".to_string(), "/favicon.svg".to_string()];
        std::fs::write(site.path().join("index.html"), "<h1>kceva</h1>").unwrap();
        std::fs::write(site.path().join("favicon.svg"), "<svg/>").unwrap();

        run(&ctx, Command::Precache { site_dir: site.path().to_path_buf() }).unwrap();

        let root = storage.path().join(OFFLINE_DIR);
        let cache = OfflineCache::open(&root, &ctx.config).unwrap();
        assert_eq!(cache.cached("/").unwrap().body, b"<h1>kceva</h1>");
        assert_eq!(cache.cached("/favicon.svg").unwrap().content_type, "image/svg+xml");
    }
}
