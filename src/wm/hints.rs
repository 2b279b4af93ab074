//! Hints Module
//!
//! Window hint mutations that make a window manager willing to fullscreen
//! a window: an additive `_NET_WM_ALLOWED_ACTIONS` entry and a relaxed
//! minimum size in `WM_NORMAL_HINTS`. Both are advisory: the manager is
//! free to ignore them, but compliant managers honor them.

use bitflags::bitflags;
use x11rb::protocol::xproto::Window;

use crate::wm::error::WmResult;
use crate::wm::ServerOps;

bitflags! {
    /// `WM_SIZE_HINTS` flags word (ICCCM). Each bit gates whether the
    /// window manager honors the corresponding record fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SizeHintFlags: u32 {
        const US_POSITION   = 1 << 0;
        const US_SIZE       = 1 << 1;
        const P_POSITION    = 1 << 2;
        const P_SIZE        = 1 << 3;
        const P_MIN_SIZE    = 1 << 4;
        const P_MAX_SIZE    = 1 << 5;
        const P_RESIZE_INC  = 1 << 6;
        const P_ASPECT      = 1 << 7;
        const P_BASE_SIZE   = 1 << 8;
        const P_WIN_GRAVITY = 1 << 9;
    }
}

/// Number of 32-bit values in a `WM_SIZE_HINTS` record.
pub const WM_SIZE_HINTS_LEN: usize = 18;

/// Minimum size forced onto the target before the fullscreen request.
pub const FORCED_MIN_SIZE: (u32, u32) = (10, 10);

/// Size hints (XSizeHints equivalent), reduced to the fields this program
/// ever sets. Ungated fields are zeroed on serialization and the flags
/// word keeps the manager from reading them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeHints {
    pub flags: SizeHintFlags,
    pub min_width: u32,
    pub min_height: u32,
}

impl SizeHints {
    /// Minimum-size-only hints. A zero dimension would let the manager
    /// collapse the window entirely, so both are clamped to at least 1.
    pub fn minimum(width: u32, height: u32) -> Self {
        Self {
            flags: SizeHintFlags::P_MIN_SIZE,
            min_width: width.max(1),
            min_height: height.max(1),
        }
    }

    /// Serialize into the on-the-wire property record: flags first, then
    /// x, y, width, height, min/max sizes, increments, aspect ratios,
    /// base size and gravity.
    pub fn to_record(&self) -> [u32; WM_SIZE_HINTS_LEN] {
        let mut record = [0u32; WM_SIZE_HINTS_LEN];
        record[0] = self.flags.bits();
        record[5] = self.min_width;
        record[6] = self.min_height;
        record
    }
}

/// Prepare `window` for the fullscreen request: advertise the fullscreen
/// action and relax the minimum size to [`FORCED_MIN_SIZE`].
///
/// The allowed-actions write appends, so entries already granted by the
/// window manager survive. The normal hints are replaced outright with a
/// minimum-size-only record.
pub fn enforce(server: &impl ServerOps, window: Window) -> WmResult<()> {
    let actions = [server.atoms().net_wm_action_fullscreen];
    server.append_allowed_actions(window, &actions)?;

    let (width, height) = FORCED_MIN_SIZE;
    server.set_normal_hints(window, &SizeHints::minimum(width, height))
}
