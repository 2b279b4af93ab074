//! Window catalog: the set of top-level windows the window manager is
//! currently managing, re-queried on every poll because membership is
//! volatile.

use x11rb::protocol::xproto::Window;

use crate::wm::error::{WmError, WmResult};
use crate::wm::ServerOps;

/// Query `_NET_CLIENT_LIST` on the root window.
///
/// An empty list is a valid reply (window manager running with nothing
/// managed). A missing property means no EWMH window manager is
/// publishing a client list, which is fatal for the whole search.
pub fn list(server: &impl ServerOps) -> WmResult<Vec<Window>> {
    match server.client_list()? {
        Some(windows) => Ok(windows),
        None => Err(WmError::MissingProperty {
            property: "_NET_CLIENT_LIST",
        }),
    }
}
