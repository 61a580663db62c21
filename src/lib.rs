//! FILENAME: src/lib.rs
// PURPOSE: Main library entry point (Tauri wiring).
// The whole application is lifecycle plumbing: acquire the single-instance
// lock, open one fixed 400x800 always-on-top window at the chat service,
// show it once the page has loaded, and follow the host platform's
// conventions for closing and reopening it.

use std::sync::Mutex;

use tauri::Manager;

pub mod config;
pub mod host;
pub mod logging;
pub mod shell;

use host::{ShellState, TauriHost};
use shell::{ExitDecision, Platform, Shell};


#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init();
    log::info!(target: "SYS", "claude-dock starting");

    let builder = tauri::Builder::default();

    // The losing process of the single-instance race exits inside the plugin
    // before any window exists; the winner receives the callback instead.
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        host::with_shell(app, |shell| shell.on_second_instance());
    }));

    builder
        .setup(|app| {
            let shell = Shell::new(TauriHost::new(app.handle().clone()), Platform::current());
            app.manage(ShellState(Mutex::new(shell)));
            host::with_shell(app.handle(), |shell| shell.on_ready());
            Ok(())
        })
        .on_window_event(|window, event| {
            if window.label() == config::WINDOW_LABEL
                && matches!(event, tauri::WindowEvent::Destroyed)
            {
                host::with_shell(window.app_handle(), |shell| shell.on_window_destroyed());
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| match event {
            tauri::RunEvent::ExitRequested { code, api, .. } => {
                // code is None exactly when the last window closed; explicit
                // exits are never vetoed.
                if code.is_none() {
                    let decision = host::with_shell(app, |shell| shell.on_all_windows_closed());
                    if let Some(ExitDecision::StayResident) = decision {
                        api.prevent_exit();
                    }
                }
            }
            #[cfg(target_os = "macos")]
            tauri::RunEvent::Reopen { .. } => {
                host::with_shell(app, |shell| shell.on_activate());
            }
            _ => {}
        });
}
