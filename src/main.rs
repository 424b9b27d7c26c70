use clap::Parser;
use menukit::core::config::{load_config, resolve};
use menukit::core::{MenuEvent, RowKind, SkinId};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "menukit", about = "Keyboard and mouse driven terminal menus")]
struct Args {
    /// Layout to draw menus with (overrides config and MENUKIT_SKIN)
    #[arg(short, long, value_enum)]
    skin: Option<SkinId>,

    /// Which demo list to open
    #[arg(short, long, default_value_t, value_enum)]
    rows: RowKind,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize file logger - writes to menukit.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("menukit.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("menukit starting up with {} rows", args.rows);

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("menukit: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = resolve(&config, args.skin);

    match menukit::tui::run(&resolved, args.rows) {
        Ok(MenuEvent::Select { cursor }) => {
            println!("selected row {cursor}");
            ExitCode::SUCCESS
        }
        Ok(event) => {
            println!("{event:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::warn!("menukit failed: {}", e);
            eprintln!("menukit: {e}");
            ExitCode::FAILURE
        }
    }
}
