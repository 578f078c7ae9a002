mod args;
mod print;
mod session;

use args::{Cli, Commands};
use clap::Parser;
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;
use print::{print_config, print_lightbox, print_messages, print_photos};
use snapfolio::api::{ConfigAction, FolioApi, PhotoQuery};
use snapfolio::config::FolioConfig;
use snapfolio::error::Result;
use snapfolio::store::fs::FileCatalog;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

/// Overrides the `./.snapfolio` config directory.
const HOME_ENV: &str = "SNAPFOLIO_HOME";

struct AppContext {
    api: FolioApi<FileCatalog>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_env_logger_verbosity(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            category,
            search,
            page,
        }) => handle_list(&ctx, category, search, page),
        Some(Commands::View {
            id,
            category,
            search,
        }) => handle_view(&ctx, id, category, search),
        Some(Commands::Browse) => handle_browse(&ctx),
        Some(Commands::Optimize {
            input,
            output,
            webp,
            quality,
            width,
        }) => handle_optimize(&ctx, input, output, webp, quality, width),
        Some(Commands::Manifest { gallery_dir, .. }) => handle_manifest(&mut ctx, gallery_dir),
        Some(Commands::Formats) => handle_formats(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None, 1),
    }
}

fn init_env_logger(log_level_filter: LevelFilter) {
    let mut logger_builder = LoggerBuilder::new();
    logger_builder.filter(None, log_level_filter);

    if let Ok(rust_log) = env::var("RUST_LOG") {
        logger_builder.parse_filters(&rust_log);
    }

    // A logger may already be installed when embedded
    let _ = logger_builder.try_init();
}

fn init_env_logger_verbosity(verbosity: u8) {
    let log_level_filter = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_env_logger(log_level_filter);
}

fn config_dir() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    cwd.join(".snapfolio")
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir();
    let config = FolioConfig::load(&config_dir)?;
    log::debug!("Using config dir {}", config_dir.display());

    let manifest_path = match &cli.command {
        Some(Commands::Manifest {
            output: Some(output),
            ..
        }) => output.clone(),
        _ => cli
            .manifest
            .clone()
            .unwrap_or_else(|| config.manifest_path.clone()),
    };
    let source = FileCatalog::new(manifest_path);

    Ok(AppContext {
        api: FolioApi::new(source, config, config_dir),
    })
}

fn handle_list(
    ctx: &AppContext,
    category: Option<String>,
    search: Option<String>,
    page: usize,
) -> Result<()> {
    let query = PhotoQuery {
        category,
        search,
        page,
    };
    let result = ctx.api.list_photos(&query)?;

    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    print_photos(&mut out, &result.listed_photos, result.hidden_photos)?;
    Ok(())
}

fn handle_view(
    ctx: &AppContext,
    id: u32,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let query = PhotoQuery {
        category,
        search,
        page: 1,
    };
    let result = ctx.api.view_photo(id, &query)?;

    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    if let Some(view) = &result.lightbox {
        print_lightbox(&mut out, view)?;
    }
    Ok(())
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let (mut gallery, messages) = ctx.api.open_gallery()?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_messages(&mut out, &messages)?;
    session::run_session(&mut gallery, stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn handle_optimize(
    ctx: &AppContext,
    input: PathBuf,
    output: Option<PathBuf>,
    webp: bool,
    quality: Option<u8>,
    width: Option<u32>,
) -> Result<()> {
    let result = ctx
        .api
        .optimize_images(input, output, webp, quality, width)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_manifest(ctx: &mut AppContext, gallery_dir: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.generate_manifest(gallery_dir)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_formats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.formats();
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut out = io::stdout().lock();
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(&mut out, config)?;
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}
