//! In-memory stand-in for the X server, used by unit tests to drive the
//! search and request paths without a display connection.

use std::cell::RefCell;
use std::collections::HashMap;

use x11rb::protocol::xproto::{Atom, Window};

use crate::wm::error::{WmError, WmResult};
use crate::wm::ewmh::Atoms;
use crate::wm::hints::SizeHints;
use crate::wm::ServerOps;

fn stub_atoms() -> Atoms {
    Atoms {
        net_client_list: 1,
        net_wm_state: 2,
        net_wm_state_fullscreen: 3,
        net_wm_allowed_actions: 4,
        net_wm_action_fullscreen: 5,
        wm_name: 6,
        wm_normal_hints: 7,
        wm_size_hints: 8,
    }
}

/// Scripted property store. Catalog replies are served from a queue so a
/// test can model windows appearing over time; the final entry repeats on
/// every later query. Writes are recorded for assertions.
pub struct FakeServer {
    pub atoms: Atoms,
    pub root_size: (u16, u16),
    pub names: HashMap<Window, Vec<u8>>,
    failing_names: Vec<Window>,
    catalogs: RefCell<Vec<Option<Vec<Window>>>>,
    pub allowed_actions: RefCell<HashMap<Window, Vec<Atom>>>,
    pub normal_hints: RefCell<HashMap<Window, SizeHints>>,
    pub messages: RefCell<Vec<(Window, Atom, [u32; 5])>>,
    pub geometry: RefCell<HashMap<Window, (i32, i32, u32, u32)>>,
    pub raised: RefCell<Vec<Window>>,
}

impl FakeServer {
    pub fn new() -> Self {
        Self {
            atoms: stub_atoms(),
            root_size: (1920, 1080),
            names: HashMap::new(),
            failing_names: Vec::new(),
            catalogs: RefCell::new(Vec::new()),
            allowed_actions: RefCell::new(HashMap::new()),
            normal_hints: RefCell::new(HashMap::new()),
            messages: RefCell::new(Vec::new()),
            geometry: RefCell::new(HashMap::new()),
            raised: RefCell::new(Vec::new()),
        }
    }

    /// A server whose catalog holds `windows`, each with the given name,
    /// on every query.
    pub fn with_windows(windows: &[(Window, &[u8])]) -> Self {
        let mut server = Self::new();
        server.push_catalog(windows.iter().map(|&(window, _)| window).collect());
        for &(window, name) in windows {
            server.names.insert(window, name.to_vec());
        }
        server
    }

    /// Queue a catalog reply for the next query.
    pub fn push_catalog(&mut self, windows: Vec<Window>) {
        self.catalogs.borrow_mut().push(Some(windows));
    }

    /// Queue a "property not set" catalog reply.
    pub fn push_missing_catalog(&mut self) {
        self.catalogs.borrow_mut().push(None);
    }

    /// Add a window that exists but has no WM_NAME.
    pub fn insert_unnamed(&mut self, window: Window) {
        self.names.remove(&window);
    }

    /// Make name queries for `window` fail outright.
    pub fn fail_name_queries_for(&mut self, window: Window) {
        self.failing_names.push(window);
    }
}

impl ServerOps for FakeServer {
    fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    fn client_list(&self) -> WmResult<Option<Vec<Window>>> {
        let mut queue = self.catalogs.borrow_mut();
        match queue.len() {
            0 => Ok(Some(Vec::new())),
            1 => Ok(queue[0].clone()),
            _ => Ok(queue.remove(0)),
        }
    }

    fn window_name(&self, window: Window) -> WmResult<Option<Vec<u8>>> {
        if self.failing_names.contains(&window) {
            return Err(WmError::Query {
                property: "WM_NAME",
                detail: "injected failure".into(),
            });
        }
        Ok(self.names.get(&window).cloned())
    }

    fn append_allowed_actions(&self, window: Window, actions: &[Atom]) -> WmResult<()> {
        self.allowed_actions
            .borrow_mut()
            .entry(window)
            .or_default()
            .extend_from_slice(actions);
        Ok(())
    }

    fn set_normal_hints(&self, window: Window, hints: &SizeHints) -> WmResult<()> {
        self.normal_hints.borrow_mut().insert(window, hints.clone());
        Ok(())
    }

    fn send_wm_message(&self, window: Window, message_type: Atom, data: [u32; 5]) -> WmResult<()> {
        self.messages.borrow_mut().push((window, message_type, data));
        Ok(())
    }

    fn root_size(&self) -> WmResult<(u16, u16)> {
        Ok(self.root_size)
    }

    fn move_resize(&self, window: Window, x: i32, y: i32, width: u32, height: u32) -> WmResult<()> {
        self.geometry
            .borrow_mut()
            .insert(window, (x, y, width, height));
        Ok(())
    }

    fn raise_and_map(&self, window: Window) -> WmResult<()> {
        self.raised.borrow_mut().push(window);
        Ok(())
    }
}
