use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc};
use tokio::sync::Mutex;

use ltv_leaderboard::{
    config::Settings,
    leaderboard::LeaderboardService,
    models::Period,
    ranges::{local_today, PeriodRangeGenerator},
    tui::{ui, App, Event as TuiEvent, EventHandler},
};

pub async fn run_tui(settings: &Settings) -> Result<()> {
    // Log lines would corrupt the alternate screen
    disable_logging_output();

    let service = Arc::new(LeaderboardService::from_settings(settings)?);
    let generator = PeriodRangeGenerator::from_settings(&settings.leaderboard, local_today());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(generator)));
    let events = EventHandler::new(settings.tui.tick_rate_ms);

    terminal.clear()?;

    let res = run_app(&mut terminal, app, events, service).await;

    // Always restore terminal state, even if there was an error
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Application error: {}", err);
        Err(err)
    } else {
        Ok(())
    }
}

fn disable_logging_output() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let null_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::sink)
        .with_filter(tracing_subscriber::filter::LevelFilter::OFF);

    let _ = tracing_subscriber::registry().with(null_layer).try_init();
}

/// Issues one fetch for the app's current period and range, anchored on the
/// current local day. Only the latest fetch is applied when it completes.
async fn spawn_fetch(app: Arc<Mutex<App>>, service: Arc<LeaderboardService>) {
    let (ticket, period, range, today) = {
        let mut app_guard = app.lock().await;
        app_guard.roll_to(local_today());
        let ticket = app_guard.begin_fetch();
        (
            ticket,
            app_guard.period,
            app_guard.active_range.clone(),
            app_guard.today(),
        )
    };

    tokio::spawn(async move {
        let result = service.load(period, range.as_ref(), today).await;
        let mut app_guard = app.lock().await;
        app_guard.complete_fetch(ticket, result);
    });
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
    events: EventHandler,
    service: Arc<LeaderboardService>,
) -> Result<()> {
    spawn_fetch(app.clone(), service.clone()).await;

    loop {
        {
            let app_guard = app.lock().await;
            if app_guard.should_quit {
                return Ok(());
            }
            terminal.draw(|f| ui::draw(f, &app_guard))?;
        }

        let key = match events.next()? {
            TuiEvent::Key(key) => key,
            TuiEvent::Resize(_, _) | TuiEvent::Tick => continue,
        };

        let refetch = {
            let mut app_guard = app.lock().await;
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    app_guard.should_quit = true;
                    false
                }
                KeyCode::Tab => app_guard.cycle_period(),
                KeyCode::Char('w') => app_guard.select_period(Period::Weekly),
                KeyCode::Char('m') => app_guard.select_period(Period::Monthly),
                KeyCode::Char('a') => app_guard.select_period(Period::AllTime),
                KeyCode::Char('[') | KeyCode::Left => app_guard.select_older_range(),
                KeyCode::Char(']') | KeyCode::Right => app_guard.select_newer_range(),
                KeyCode::Up => {
                    app_guard.scroll_up();
                    false
                }
                KeyCode::Down => {
                    app_guard.scroll_down();
                    false
                }
                KeyCode::Char('r') => true,
                _ => false,
            }
        };

        if refetch {
            spawn_fetch(app.clone(), service.clone()).await;
        }
    }
}
