//! Poll loop: search the catalog until the target window appears, then
//! drive the hint and fullscreen requests exactly once.

use std::time::Duration;

use tracing::debug;
use x11rb::protocol::xproto::Window;

use crate::wm::error::WmResult;
use crate::wm::{catalog, fullscreen, hints, matcher, ServerOps};

/// Interval between catalog queries while the target is missing.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Outcome of a single poll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Target not in the catalog yet; sleep and retry.
    Searching,
    /// Target found; hints and the fullscreen request have been issued.
    Done(Window),
}

/// Drives catalog → matcher on a fixed interval, then hint enforcement
/// and the fullscreen request once a match appears.
pub struct PollLoop {
    interval: Duration,
}

impl PollLoop {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// One catalog query and match attempt. The window set is queried
    /// fresh each call; membership is volatile and nothing from a
    /// previous iteration can be trusted.
    pub fn step(&self, server: &impl ServerOps, target: &[u8]) -> WmResult<SearchState> {
        let windows = catalog::list(server)?;
        match matcher::find(server, &windows, target)? {
            Some(window) => {
                debug!("matched window 0x{:x}, requesting fullscreen", window);
                // Hints go out before the state-change event so the
                // manager sees them when it processes the request.
                hints::enforce(server, window)?;
                fullscreen::request(server, window)?;
                Ok(SearchState::Done(window))
            }
            None => Ok(SearchState::Searching),
        }
    }

    /// Poll until the target appears. Unbounded: a missing window is not
    /// an error, so the loop ends only on a match or a hard failure.
    /// `wait` is invoked with the configured interval between attempts.
    pub fn run(
        &self,
        server: &impl ServerOps,
        target: &[u8],
        wait: &mut impl FnMut(Duration),
    ) -> WmResult<Window> {
        loop {
            match self.step(server, target)? {
                SearchState::Done(window) => return Ok(window),
                SearchState::Searching => wait(self.interval),
            }
        }
    }
}

impl Default for PollLoop {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}
