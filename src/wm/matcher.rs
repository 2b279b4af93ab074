//! Name matching over a window catalog.

use tracing::debug;
use x11rb::protocol::xproto::Window;

use crate::wm::error::WmResult;
use crate::wm::ServerOps;

/// Scan `windows` in catalog order and return the first whose `WM_NAME`
/// equals `target` byte-for-byte. The comparison is case-sensitive with
/// no normalization; unnamed windows are skipped without matching.
///
/// Catalog order is whatever the server returned (not sorted, not stable
/// across polls), so "first" only promises earliest in this reply.
///
/// A failed name query aborts the scan. The target window may appear
/// later in the list, but a server that cannot answer property reads is
/// not going to honor a fullscreen request either.
pub fn find(server: &impl ServerOps, windows: &[Window], target: &[u8]) -> WmResult<Option<Window>> {
    for &window in windows {
        match server.window_name(window)? {
            Some(name) if name == target => {
                debug!("window 0x{:x} matches target name", window);
                return Ok(Some(window));
            }
            Some(_) | None => {}
        }
    }
    Ok(None)
}
