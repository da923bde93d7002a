mod args;
mod logging;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ExportService, SessionStore};
use tracing::info;
use ui::{App, UiApp, build_app_context};

use crate::args::{Args, Command, print_usage};

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn session_store(&self) -> Arc<SessionStore> {
        self.services.session_store()
    }

    fn export_service(&self) -> Arc<ExportService> {
        self.services.export()
    }
}

fn launch(args: &Args) {
    let download_dir = args.resolve_download_dir();
    info!(
        event = "app.launch",
        download_dir = %download_dir.display(),
        export_delay_ms = args.export.delay.as_millis()
    );

    let services = AppServices::with_download_dir(Clock::default_clock(), args.export, download_dir);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window; turn that off explicitly.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Sistema PGR")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .inspect_err(|_| print_usage())?;

    match command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Run(args) => {
            logging::init_logging(args.quiet);
            launch(&args);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
