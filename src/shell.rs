//! FILENAME: src/shell.rs
// PURPOSE: Window lifecycle controller.
// Owns the process-wide window handle and decides how each host lifecycle
// signal affects it. The controller never talks to the windowing system
// directly; it goes through the `WindowHost` trait so the lifecycle rules
// can be exercised without a live event loop.

use crate::config;

/// Window attributes applied at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub label: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
    pub always_on_top: bool,
    pub decorations: bool,
    /// Always false: the window stays hidden until the page has loaded.
    pub visible: bool,
}

impl WindowConfig {
    /// The single fixed window this shell ever opens.
    pub fn fixed() -> Self {
        WindowConfig {
            label: config::WINDOW_LABEL,
            title: config::WINDOW_TITLE,
            url: config::CHAT_URL,
            width: config::WINDOW_WIDTH,
            height: config::WINDOW_HEIGHT,
            resizable: config::WINDOW_RESIZABLE,
            always_on_top: config::WINDOW_ALWAYS_ON_TOP,
            decorations: config::WINDOW_DECORATIONS,
            visible: false,
        }
    }
}

/// Operations the shell needs on a live window. All of them are best-effort
/// delegation to the windowing system.
pub trait HostWindow {
    fn is_destroyed(&self) -> bool;
    fn is_minimized(&self) -> bool;
    fn show(&self);
    fn unminimize(&self);
    fn focus(&self);
}

/// The windowing system as seen by the controller.
pub trait WindowHost {
    type Window: HostWindow;

    fn create_window(&self, config: &WindowConfig) -> Result<Self::Window, String>;
}

/// Desktop conventions that affect the exit decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Whether the desktop convention keeps the app alive with no open windows.
    pub fn stays_resident_without_windows(self) -> bool {
        self == Platform::MacOs
    }
}

/// What the process should do once its last window is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Exit,
    StayResident,
}

/// Lifecycle controller. At most one live window handle exists at any time:
/// `window` starts absent, is set by the creation guard below and cleared
/// when the host reports the window destroyed.
pub struct Shell<H: WindowHost> {
    host: H,
    platform: Platform,
    window: Option<H::Window>,
}

impl<H: WindowHost> Shell<H> {
    pub fn new(host: H, platform: Platform) -> Self {
        Shell {
            host,
            platform,
            window: None,
        }
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Host signaled it is ready for windows.
    pub fn on_ready(&mut self) {
        self.create_window();
    }

    /// Creates the window unless a live one already exists, in which case the
    /// existing window is focused instead. Creation failure leaves the handle
    /// absent; there is no retry.
    fn create_window(&mut self) {
        if let Some(window) = &self.window {
            if !window.is_destroyed() {
                log::info!(target: "WIN", "window already open, focusing");
                window.focus();
                return;
            }
        }
        match self.host.create_window(&WindowConfig::fixed()) {
            Ok(window) => {
                log::info!(target: "WIN", "window created, hidden until content is ready");
                self.window = Some(window);
            }
            Err(e) => {
                log::error!(target: "WIN", "window creation failed: {}", e);
            }
        }
    }

    /// The page finished loading; the window may appear now.
    pub fn on_content_ready(&self) {
        if let Some(window) = &self.window {
            log::info!(target: "WIN", "content ready, showing window");
            window.show();
        }
    }

    /// The window was destroyed. Clears the handle; exiting is decided
    /// separately by `on_all_windows_closed`.
    pub fn on_window_destroyed(&mut self) {
        log::info!(target: "WIN", "window closed");
        self.window = None;
    }

    pub fn on_all_windows_closed(&self) -> ExitDecision {
        if self.platform.stays_resident_without_windows() {
            log::info!(target: "SYS", "all windows closed, staying resident");
            ExitDecision::StayResident
        } else {
            log::info!(target: "SYS", "all windows closed, exiting");
            ExitDecision::Exit
        }
    }

    /// Dock activation: reopen the window if none exists.
    pub fn on_activate(&mut self) {
        self.create_window();
    }

    /// Another process tried to start; it hands over to this instance.
    pub fn on_second_instance(&self) {
        if let Some(window) = &self.window {
            log::info!(target: "SYS", "second instance attempted, focusing existing window");
            if window.is_minimized() {
                window.unminimize();
            }
            window.focus();
        }
    }
}
