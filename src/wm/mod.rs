//! Window Manager Interaction Module
//!
//! Everything needed to find a window by title on a running X server and
//! ask its window manager to fullscreen it: interned atoms, the property
//! seam to the server, the catalog/matcher pair, hint enforcement, the
//! state-change request, and the poll loop that drives them.

pub mod catalog;
pub mod display;
pub mod error;
pub mod ewmh;
pub mod fullscreen;
pub mod hints;
pub mod matcher;
pub mod poll;

#[cfg(test)]
pub(crate) mod fake;

use x11rb::protocol::xproto::{Atom, Window};

pub use error::{WmError, WmResult};
pub use ewmh::Atoms;

use crate::wm::hints::SizeHints;

/// The view of the X server the workflow runs against.
///
/// The live implementation is [`display::DisplayInfo`]; tests substitute
/// an in-memory property store so the poll loop, matcher and request
/// construction can be driven without a display connection. The protocol
/// is fire-and-forget: `Ok` from a write means the request was handed to
/// the server, not that the window manager honored it.
pub trait ServerOps {
    /// Atoms interned for this connection.
    fn atoms(&self) -> &Atoms;

    /// Read `_NET_CLIENT_LIST` from the root window. `Ok(None)` means the
    /// property is not set at all; an empty list is a valid reply.
    fn client_list(&self) -> WmResult<Option<Vec<Window>>>;

    /// Read `WM_NAME` for a window. `Ok(None)` means the window has no
    /// name yet, a normal outcome for a partially initialized window and
    /// distinct from a failed query.
    fn window_name(&self, window: Window) -> WmResult<Option<Vec<u8>>>;

    /// Append entries to `_NET_WM_ALLOWED_ACTIONS` without disturbing
    /// whatever the window manager already put there.
    fn append_allowed_actions(&self, window: Window, actions: &[Atom]) -> WmResult<()>;

    /// Replace `WM_NORMAL_HINTS` with the given record.
    fn set_normal_hints(&self, window: Window, hints: &SizeHints) -> WmResult<()>;

    /// Send a format-32 client message about `window` to the root, with
    /// the mask that redirects it to whoever manages the root's
    /// substructure, i.e. the window manager.
    fn send_wm_message(&self, window: Window, message_type: Atom, data: [u32; 5]) -> WmResult<()>;

    /// Current width and height of the root window.
    fn root_size(&self) -> WmResult<(u16, u16)>;

    /// Move and resize a window directly, bypassing the window manager.
    fn move_resize(&self, window: Window, x: i32, y: i32, width: u32, height: u32) -> WmResult<()>;

    /// Raise a window to the top of the stack and map it.
    fn raise_and_map(&self, window: Window) -> WmResult<()>;
}
