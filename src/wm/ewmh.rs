//! EWMH (Extended Window Manager Hints) atoms.
//!
//! Atoms are interned once per connection and cached for its lifetime;
//! they are the only state carried across poll iterations.

use x11rb::connection::Connection;
use x11rb::protocol::xproto::*;

use crate::wm::error::{WmError, WmResult};

/// Holds all interned atoms used by the fullscreen workflow.
#[derive(Debug)]
pub struct Atoms {
    pub net_client_list: Atom,
    pub net_wm_state: Atom,
    pub net_wm_state_fullscreen: Atom,
    pub net_wm_allowed_actions: Atom,
    pub net_wm_action_fullscreen: Atom,
    pub wm_name: Atom,
    pub wm_normal_hints: Atom,
    pub wm_size_hints: Atom,
}

impl Atoms {
    /// Intern all required atoms
    pub fn new<C: Connection>(conn: &C) -> WmResult<Self> {
        // Helper to intern a single atom
        let intern = |name: &'static str| -> WmResult<Atom> {
            Ok(conn
                .intern_atom(false, name.as_bytes())
                .map_err(|e| WmError::query(name, e))?
                .reply()
                .map_err(|e| WmError::query(name, e))?
                .atom)
        };

        Ok(Self {
            net_client_list: intern("_NET_CLIENT_LIST")?,
            net_wm_state: intern("_NET_WM_STATE")?,
            net_wm_state_fullscreen: intern("_NET_WM_STATE_FULLSCREEN")?,
            net_wm_allowed_actions: intern("_NET_WM_ALLOWED_ACTIONS")?,
            net_wm_action_fullscreen: intern("_NET_WM_ACTION_FULLSCREEN")?,
            wm_name: intern("WM_NAME")?,
            wm_normal_hints: intern("WM_NORMAL_HINTS")?,
            wm_size_hints: intern("WM_SIZE_HINTS")?,
        })
    }
}
