use anyhow::Result;
use clap::Parser;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use std::io;
use std::panic;

use postview::config::Config;
use postview::model::{load_post, sample_post};
use postview::logging;
use postview::ui::App;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    let post = match &config.post_path {
        Some(path) => load_post(path)?,
        None => sample_post()?,
    };

    // Set up panic hook for cleanup
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Clean up terminal
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        // Call the original panic handler
        original_hook(panic_info);
    }));

    let app = App::new(post);

    if let Err(err) = app.run().await {
        // Clean up terminal before handling the error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log::error!("Exiting with error: {:?}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
