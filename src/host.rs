//! FILENAME: src/host.rs
// PURPOSE: Tauri realization of the shell's window host.

use std::sync::Mutex;

use tauri::webview::PageLoadEvent;
use tauri::{AppHandle, Manager, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::shell::{HostWindow, Shell, WindowConfig, WindowHost};

/// The lifecycle controller, registered as Tauri managed state.
pub struct ShellState(pub Mutex<Shell<TauriHost>>);

/// Runs a closure against the managed controller, if it is installed yet.
/// Signals arriving before `setup` finished are dropped (best-effort).
pub fn with_shell<T>(app: &AppHandle, f: impl FnOnce(&mut Shell<TauriHost>) -> T) -> Option<T> {
    app.try_state::<ShellState>()
        .map(|state| f(&mut state.0.lock().unwrap()))
}

pub struct TauriHost {
    app: AppHandle,
}

impl TauriHost {
    pub fn new(app: AppHandle) -> Self {
        TauriHost { app }
    }
}

impl WindowHost for TauriHost {
    type Window = TauriWindow;

    fn create_window(&self, config: &WindowConfig) -> Result<TauriWindow, String> {
        let url = Url::parse(config.url).map_err(|e| e.to_string())?;
        let window = WebviewWindowBuilder::new(&self.app, config.label, WebviewUrl::External(url))
            .title(config.title)
            .inner_size(config.width, config.height)
            .resizable(config.resizable)
            .always_on_top(config.always_on_top)
            .decorations(config.decorations)
            .visible(config.visible)
            .on_page_load(|window, payload| {
                if matches!(payload.event(), PageLoadEvent::Finished) {
                    with_shell(window.app_handle(), |shell| shell.on_content_ready());
                }
            })
            .build()
            .map_err(|e| e.to_string())?;
        Ok(TauriWindow { window })
    }
}

pub struct TauriWindow {
    window: WebviewWindow,
}

impl HostWindow for TauriWindow {
    fn is_destroyed(&self) -> bool {
        // The window manager forgets destroyed windows.
        self.window
            .app_handle()
            .get_webview_window(self.window.label())
            .is_none()
    }

    fn is_minimized(&self) -> bool {
        self.window.is_minimized().unwrap_or(false)
    }

    fn show(&self) {
        let _ = self.window.show();
    }

    fn unminimize(&self) {
        let _ = self.window.unminimize();
    }

    fn focus(&self) {
        let _ = self.window.set_focus();
    }
}
