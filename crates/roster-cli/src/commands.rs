use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use roster_cli::render::render_view;
use roster_cli::settings::Settings;
use roster_cli::shell;
use roster_core::{
    Controller, LoadMessage, LoadStatus, Message, NotificationQueue, PaginationMessage,
    TracingSink,
};
use roster_fetch::{RecordClient, RecordSource};

use crate::cli::{Cli, ConfigAction, ListArgs};

/// Settings and source resolved from the command line.
pub struct AppContext {
    pub settings: Settings,
    pub settings_path: PathBuf,
    source: Option<RecordSource>,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Self {
        let settings_path = cli.config.clone().unwrap_or_else(Settings::config_path);
        let settings = Settings::load_or_default(&settings_path);
        let source = settings
            .source
            .resolve(cli.endpoint.as_deref(), cli.file.as_deref());
        Self {
            settings,
            settings_path,
            source,
        }
    }

    fn loader(&self) -> Result<Loader> {
        let source = self.source.clone().ok_or_else(|| {
            anyhow!(
                "no record source: pass --endpoint or --file, or set [source] in {}",
                self.settings_path.display()
            )
        })?;
        Loader::new(
            source,
            Duration::from_secs(self.settings.source.timeout_secs),
        )
    }
}

/// Fetches records on a private runtime; the rest of the CLI is synchronous.
struct Loader {
    runtime: tokio::runtime::Runtime,
    client: RecordClient,
    source: RecordSource,
}

impl Loader {
    fn new(source: RecordSource, timeout: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("start async runtime")?;
        let client = RecordClient::new(timeout).context("create HTTP client")?;
        Ok(Self {
            runtime,
            client,
            source,
        })
    }

    fn load(&self) -> Message {
        let span = info_span!("load", source = %self.source);
        let _guard = span.enter();
        self.runtime.block_on(self.client.load(&self.source))
    }
}

pub fn run_list(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let loader = ctx.loader()?;
    let mut controller = Controller::with_sink(ctx.settings.view.clone(), TracingSink);

    controller.update(Message::Load(LoadMessage::Requested));
    controller.update(loader.load());
    if let LoadStatus::Failed(reason) = controller.state().load_status() {
        bail!("failed to load records from {}: {reason}", loader.source);
    }

    if let Some(rows) = args.rows {
        controller.update(Message::Pagination(PaginationMessage::RowLimitChanged(rows)));
    }
    if let Some(search) = &args.search {
        controller.update(Message::search(search.as_str()));
    }
    controller.update(Message::Pagination(PaginationMessage::GoToPage(args.page)));

    print!("{}", render_view(&controller.table()));
    Ok(())
}

pub fn run_shell(ctx: &AppContext) -> Result<()> {
    let loader = ctx.loader()?;
    let mut controller =
        Controller::with_sink(ctx.settings.view.clone(), NotificationQueue::new());

    controller.update(Message::Load(LoadMessage::Requested));
    controller.update(loader.load());
    info!(source = %loader.source, "Shell started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut controller, stdin.lock(), &mut stdout.lock(), || {
        loader.load()
    })
    .context("shell I/O")
}

pub fn run_config(ctx: &AppContext, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => println!("{}", ctx.settings_path.display()),
        ConfigAction::Show => print!("{}", ctx.settings.to_toml()?),
        ConfigAction::Init { force } => {
            if ctx.settings_path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    ctx.settings_path.display()
                );
            }
            Settings::default().save_to(&ctx.settings_path)?;
            println!("Wrote {}", ctx.settings_path.display());
        }
    }
    Ok(())
}
