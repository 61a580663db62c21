//! FILENAME: tests/common/mod.rs
//! Test harness and fakes for the shell lifecycle tests.

use std::cell::RefCell;
use std::rc::Rc;

use claude_dock_lib::shell::{HostWindow, Platform, Shell, WindowConfig, WindowHost};

/// Observable state of one fake window.
#[derive(Debug, Default)]
pub struct WindowState {
    pub visible: bool,
    pub minimized: bool,
    pub destroyed: bool,
    pub focus_count: u32,
    pub restore_count: u32,
}

pub struct FakeWindow {
    state: Rc<RefCell<WindowState>>,
}

impl HostWindow for FakeWindow {
    fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }

    fn is_minimized(&self) -> bool {
        self.state.borrow().minimized
    }

    fn show(&self) {
        self.state.borrow_mut().visible = true;
    }

    fn unminimize(&self) {
        let mut state = self.state.borrow_mut();
        state.minimized = false;
        state.restore_count += 1;
    }

    fn focus(&self) {
        self.state.borrow_mut().focus_count += 1;
    }
}

/// Record of one create_window call.
pub struct CreatedWindow {
    pub config: WindowConfig,
    pub state: Rc<RefCell<WindowState>>,
}

#[derive(Default)]
pub struct HostLog {
    pub created: Vec<CreatedWindow>,
    pub fail_next_create: bool,
}

#[derive(Clone, Default)]
pub struct FakeHost {
    pub log: Rc<RefCell<HostLog>>,
}

impl WindowHost for FakeHost {
    type Window = FakeWindow;

    fn create_window(&self, config: &WindowConfig) -> Result<FakeWindow, String> {
        let mut log = self.log.borrow_mut();
        if log.fail_next_create {
            log.fail_next_create = false;
            return Err("window creation failed".to_string());
        }
        let state = Rc::new(RefCell::new(WindowState {
            visible: config.visible,
            ..WindowState::default()
        }));
        log.created.push(CreatedWindow {
            config: config.clone(),
            state: Rc::clone(&state),
        });
        Ok(FakeWindow { state })
    }
}

/// Drives a shell the way the process lifecycle would.
pub struct TestHarness {
    pub host: FakeHost,
    pub shell: Shell<FakeHost>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::on_platform(Platform::Other)
    }

    pub fn on_platform(platform: Platform) -> Self {
        let host = FakeHost::default();
        let shell = Shell::new(host.clone(), platform);
        TestHarness { host, shell }
    }

    /// Mimics process start: the ready signal only ever fires in the process
    /// that acquired the single-instance lock. Returns whether the shell
    /// started; a losing process exits without creating anything.
    pub fn launch(&mut self, lock_acquired: bool) -> bool {
        if !lock_acquired {
            return false;
        }
        self.shell.on_ready();
        true
    }

    pub fn created_count(&self) -> usize {
        self.host.log.borrow().created.len()
    }

    pub fn window_state(&self, index: usize) -> Rc<RefCell<WindowState>> {
        Rc::clone(&self.host.log.borrow().created[index].state)
    }

    pub fn window_config(&self, index: usize) -> WindowConfig {
        self.host.log.borrow().created[index].config.clone()
    }

    pub fn fail_next_create(&self) {
        self.host.log.borrow_mut().fail_next_create = true;
    }
}
