// Event handling and main UI loop

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::api::{ApiClient, ApiWorker};
use crate::ui::{
    LoginScreen, RegisterScreen, ListScreen,
    components::render_notification,
    state::{AppState, Screen},
};

mod api;
mod list;
mod login;
mod register;

pub use api::{LOGIN_REJECTED, REGISTER_UNAVAILABLE, apply_api_message};

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard or other terminal events
    Tick,         // Periodic update for rendering, polling and notification expiry
}

const TICK_RATE: Duration = Duration::from_millis(50);

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            // Calculate timeout until next tick
            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Take over the terminal and run until the user quits
pub fn run_ui(client: ApiClient, mut state: AppState, start: Screen) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(base_url = client.base_url(), route = start.route(), "starting UI");
    let worker = ApiWorker::new(client);

    // Mount the first screen (the list loads its articles on mount)
    state.navigate(start);

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx);

    let result = run_app(&mut terminal, &mut state, &worker, event_rx);
    if let Err(ref e) = result {
        error!("UI loop failed: {}", e);
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    worker: &ApiWorker,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        let mut pending_inputs: Vec<Event> = Vec::new();

        // Always block for at least one event, then drain the queue
        match event_rx.recv() {
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Ok(UiEvent::Tick) => {}
            Err(_) => return Ok(()), // Event thread gone
        }

        while let Ok(evt) = event_rx.try_recv() {
            if let UiEvent::Input(ev) = evt {
                pending_inputs.push(ev);
            }
        }

        for input in pending_inputs {
            if let Event::Key(key) = input {
                if handle_key(key, state) {
                    return Ok(());
                }
            }
        }

        // Hand queued requests to the worker
        for request in state.take_requests() {
            worker.submit(request);
        }

        // Apply finished requests
        while let Ok(msg) = worker.receiver().try_recv() {
            apply_api_message(msg, state);
        }
        // Completions may queue follow-ups (login success mounts the list)
        for request in state.take_requests() {
            worker.submit(request);
        }

        state.in_flight = worker.in_flight();
        state.expire_notification(Instant::now());

        terminal.draw(|frame| draw(frame, state))?;
    }
}

/// Render the current screen plus any overlays
pub fn draw(frame: &mut ratatui::Frame, state: &mut AppState) {
    match state.current_screen {
        Screen::Login => LoginScreen::render(frame, &state.login, state.in_flight),
        Screen::Register => RegisterScreen::render(frame, &state.register, state.in_flight),
        Screen::List => ListScreen::render(frame, &mut state.list, state.in_flight),
    }

    if let Some(ref notification) = state.notification {
        render_notification(frame, notification);
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Route a key press. Returns true when the app should quit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    // Ignore release/repeat events reported by some terminals
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if is_ctrl_c(&key) {
        return true;
    }

    match state.current_screen {
        Screen::Login => login::handle_login_key(key, state),
        Screen::Register => register::handle_register_key(key, state),
        Screen::List => {
            // 'q' quits only from the bare list; inside a modal it's just text
            if state.list.modal.is_closed()
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            {
                return true;
            }
            list::handle_list_key(key, state);
        }
    }

    false
}
