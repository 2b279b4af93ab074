//! The `_NET_WM_STATE` fullscreen request and its client-side geometry
//! fallback.

use tracing::debug;
use x11rb::protocol::xproto::{Atom, Window};

use crate::wm::error::WmResult;
use crate::wm::ServerOps;

/// `_NET_WM_STATE` action field: add the state.
const ACTION_ADD: u32 = 1;

/// Source indication: the request originates from a normal application,
/// which compliant managers treat as trusted.
const SOURCE_APPLICATION: u32 = 1;

/// An immutable `_NET_WM_STATE` change request for a single state atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenRequest {
    pub window: Window,
    pub state: Atom,
}

impl FullscreenRequest {
    pub fn new(window: Window, state: Atom) -> Self {
        Self { window, state }
    }

    /// The five 32-bit client message words: action, first state atom,
    /// second state atom (none), source indication, unused.
    pub fn data(&self) -> [u32; 5] {
        [ACTION_ADD, self.state, 0, SOURCE_APPLICATION, 0]
    }
}

/// Ask the window manager to fullscreen `window`, then force matching
/// geometry directly.
///
/// The client message is the authoritative request; the protocol carries
/// no acknowledgment, so the move/resize/raise fallback runs
/// unconditionally to cover managers that ignore or delay the event.
/// Success means both requests were transmitted, not that the window is
/// fullscreen now.
pub fn request(server: &impl ServerOps, window: Window) -> WmResult<()> {
    let atoms = server.atoms();
    let request = FullscreenRequest::new(window, atoms.net_wm_state_fullscreen);
    server.send_wm_message(window, atoms.net_wm_state, request.data())?;

    let (width, height) = server.root_size()?;
    debug!(
        "applying geometry fallback {}x{} to window 0x{:x}",
        width, height, window
    );
    server.move_resize(window, 0, 0, u32::from(width), u32::from(height))?;
    server.raise_and_map(window)
}
