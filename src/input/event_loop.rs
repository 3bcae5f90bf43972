use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use notify::{Event as NotifyEvent, RecommendedWatcher, RecursiveMode, Watcher};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crate::app::{App, InputMode};

use super::{
    command_mode::handle_command_mode, editor_mode::handle_editor_keyboard,
    mouse::handle_mouse_event, normal_mode::handle_normal_mode,
};

fn watch_tables_file(app: &App) -> Result<(RecommendedWatcher, Receiver<NotifyEvent>)> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if let Some(ref path) = app.file_path {
        if let Err(e) = watcher.watch(path, RecursiveMode::NonRecursive) {
            tracing::warn!(path = %path.display(), error = %e, "cannot watch tables file");
        }
    }
    Ok((watcher, rx))
}

pub fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    mut app: App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    app.mount();
    let result = run_loop(terminal, &mut app);
    // Observers and pending flashes never outlive the loop
    app.unmount();
    result
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let (mut _watcher, mut rx) = watch_tables_file(app)?;

    loop {
        terminal.draw(|f| crate::ui::ui(f, app))?;
        app.update_status();
        app.tick(Instant::now());

        // Re-create the watcher when a different file was loaded
        if app.file_path_changed {
            (_watcher, rx) = watch_tables_file(app)?;
            app.file_path_changed = false;
        }

        match rx.try_recv() {
            Ok(event) => {
                if matches!(event.kind, notify::EventKind::Modify(_)) && app.file_path.is_some() {
                    tracing::debug!("tables file changed, reloading");
                    app.reload_file();
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {}
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
                        return Ok(());
                    }

                    let quit = if app.editor.is_some() {
                        handle_editor_keyboard(app, key);
                        false
                    } else {
                        match app.input_mode {
                            InputMode::Normal => handle_normal_mode(app, key)?,
                            InputMode::Command => handle_command_mode(app, key)?,
                        }
                    };
                    if quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                Event::Resize(_, _) => app.clamp_cursor(),
                _ => {}
            }
        }
    }
}
