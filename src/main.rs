use color_eyre::Result;
use covtrack::{
    app::App,
    cli::{parse_args, run_cli_command, CliCommand},
    config::TrackerConfig,
    logging::{init_file_logging, init_stderr_logging},
    terminal::{setup_panic_hook, TerminalManager},
    ui,
};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tracing::info;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args());
    let mut config = TrackerConfig::from_env();
    if let Some(url) = &args.api_url {
        config = config.with_api_base_url(url.clone());
    }

    if args.command == CliCommand::Snapshot {
        init_stderr_logging(&config)?;
    }
    if let Some(result) = run_cli_command(&args.command, &config) {
        return result;
    }

    // A missing or read-only cache dir only costs us the log file
    match init_file_logging(&config) {
        Ok(Some(path)) => info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: file logging disabled: {}", e),
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        info!(
            "covtrack {} starting against {}",
            covtrack::cli::VERSION,
            config.api_base_url
        );
        let mut term_manager = TerminalManager::new()?;
        let mut app = App::new(config);
        app.mount();

        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore()?;
        info!("covtrack exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard and mouse input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();
    let mut ticker = tokio::time::interval(app.config.tick_rate);

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key_event(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse_event(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input stream closed
                    None => app.quit(),
                }
            }

            // Fetch results
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
