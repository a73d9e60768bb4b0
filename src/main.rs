//! Signup - account signup wizard
//! Copyright Cybex B.V.

mod app;
mod config;
mod constants;
mod form;
mod submit;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;
use config::SignupConfig;
use submit::{SubmitClient, SubmitMessage};

/// Account signup wizard
#[derive(Parser)]
#[command(name = "signup")]
#[command(author = "Cybex B.V.")]
#[command(version = "1.0.0")]
#[command(about = "Account signup wizard - account details, personal info, review and submit")]
struct Cli {
    /// Submission endpoint URL (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Configuration file (default: ~/.config/signup/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an example configuration file
    PrintConfig,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging to file
    let log_dir = constants::signup_data_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("Signup starting");

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::config_file_path);

    match cli.command {
        Some(Commands::PrintConfig) => {
            print!("{}", SignupConfig::example_toml());
            Ok(())
        }
        Some(Commands::InitConfig { force }) => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            SignupConfig::default().save_to(&config_path)?;
            println!("Wrote {}", config_path.display());
            Ok(())
        }
        None => {
            let mut config = SignupConfig::load_from(&config_path);
            if let Some(url) = cli.endpoint {
                config.endpoint.url = url;
            }
            run_tui(config).await
        }
    }
}

async fn run_tui(config: SignupConfig) -> Result<()> {
    let client = SubmitClient::new(&config.endpoint)?;
    tracing::info!("Submission endpoint: {}", client.url());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config, client);

    // Create submission channel
    let (submit_tx, mut submit_rx) =
        mpsc::channel::<SubmitMessage>(constants::SUBMIT_CHANNEL_SIZE);
    app.set_submit_sender(submit_tx);

    // Run the app
    let result = run_app(&mut terminal, &mut app, &mut submit_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        return Err(err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    submit_rx: &mut mpsc::Receiver<SubmitMessage>,
) -> Result<()> {
    // Create async event stream for responsive input
    let mut event_stream = EventStream::new();

    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS);

        tokio::select! {
            biased;  // Prioritize in order: keys, submission results, timeout

            // Terminal key events (instant response)
            Some(Ok(event)) = event_stream.next() => {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }
            // Result from the submission task
            Some(msg) = submit_rx.recv() => {
                app.handle_submit_message(msg);
            }
            // Timeout for spinner animation and redraw
            _ = tokio::time::sleep(timeout) => {}
        }

        // Update spinner animation
        app.tick();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Signup exiting");
    Ok(())
}
