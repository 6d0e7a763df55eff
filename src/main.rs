#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use tattle::config::Config;
use tattle::model::FeedbackTypeCatalog;
use tattle::services::{Base64FileEncoder, HttpFeedbackApi, Services, XcapCapture};
use tattle::tui::{App, RunnerSettings, TaskRunner};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = tattle::logging::init() {
        eprintln!("tattle: logging disabled: {e}");
    }

    let config = Config::load()?;
    tracing::info!(
        api = %config.api.base_url,
        path = %config.api.feedbacks_path,
        "configuration loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let services = Services::new(
        XcapCapture::new(config.capture.screenshot_dir()),
        Base64FileEncoder,
        HttpFeedbackApi::new(&config.api.base_url, &config.api.feedbacks_path),
    );
    let runner = TaskRunner::new(
        runtime.handle().clone(),
        services,
        RunnerSettings::from_config(&config),
    );

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(FeedbackTypeCatalog::default(), runner);
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
