#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, sync::Arc};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::{error, info};

use sdk_demo_ui::{component::text, theme};

use sdk_demo_gui::{
    app::{config::ConfigError, App, Config},
    args::{datadir, parse_args},
    logger::{parse_log_level, setup_logger},
    sdk::embedded::{EmbeddedBinding, EmbeddedSdk},
    VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let datadir = datadir(&args)?;
    if !datadir.exists() {
        datadir.init()?;
    }

    let config = match Config::from_file(&datadir.config_path()) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => return Err(e.into()),
    };

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();
    info!("Using datadir {}", datadir.path().to_string_lossy());

    let settings = Settings {
        id: Some("SdkDemo".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: sdk_demo_ui::font::REGULAR,
        ..Settings::default()
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 1200.0,
            height: 800.0,
        },
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 600.0,
            height: 500.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "SdkDemo".to_string(),
            ..Default::default()
        };
    }

    let sdk = Arc::new(EmbeddedSdk::new(config.sdk.clone()));
    let binding = Arc::new(EmbeddedBinding);

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(sdk, binding, &config))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
