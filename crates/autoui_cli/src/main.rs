// autoui - edit a settings object through a generated form
//
// The form is composed from the object's property metadata and driven by
// the console host: each row is printed, and `set`/`open`/`close` commands
// typed at the prompt edit the object through its bindings.

mod demo;

use anyhow::{Context, Result};
use autoui_forms::{
    DefaultControlFactory, FormComposer, FormConfig, NoChrome, Session, Subject, WindowChromeCustomizer,
};
use autoui_ui::{console_window_handle, platform_chrome, ConsoleHost};
use clap::Parser;
use demo::AppSettings;
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Edit application settings through a generated form
#[derive(Parser)]
#[command(name = "autoui")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Form configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the composed layout as JSON and exit
    #[arg(long)]
    layout: bool,

    /// Remove the system menu from the console window
    #[arg(long)]
    strip_chrome: bool,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<FormConfig> {
    match path {
        Some(path) => FormConfig::load(path).with_context(|| format!("failed to load {}", path.display())),
        None => Ok(FormConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = load_config(cli.config.as_ref())?;
    let settings = Rc::new(RefCell::new(AppSettings::default()));

    if cli.layout {
        let window = FormComposer::new(&config, &DefaultControlFactory)
            .compose(Subject::shared(&settings).into_observable())?;
        println!("{}", window.layout().to_json()?);
        return Ok(());
    }

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let (chrome, native): (Box<dyn WindowChromeCustomizer>, _) = if cli.strip_chrome {
        (platform_chrome(), console_window_handle())
    } else {
        (Box::new(NoChrome), None)
    };

    let host = ConsoleHost::new(input, io::stdout()).with_native_handle(native);
    let mut session = Session::new(host).with_config(config).with_boxed_chrome(chrome);
    session.show_dialog(Subject::shared(&settings))?;
    info!("settings form closed");

    println!("{}", serde_json::to_string_pretty(&settings.borrow().snapshot())?);
    Ok(())
}
