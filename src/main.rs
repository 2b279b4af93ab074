//! xfullscreen
//!
//! Waits for an X11 window with the given title to appear, then asks the
//! window manager to fullscreen it via EWMH, with a direct geometry
//! override as fallback for managers that ignore the request.

mod wm;

use std::io::Write as _;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wm::display::DisplayInfo;
use wm::poll::PollLoop;

const SPINNER: [char; 4] = ['-', '\\', '|', '/'];

fn print_usage() {
    println!("xfullscreen {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Forces an X11 window into fullscreen given its name.");
    println!();
    println!("Usage:");
    println!("   xfullscreen WINDOW_NAME");
}

fn main() -> Result<()> {
    // Initialize logging. The default filter stays quiet so the spinner
    // line is not interleaved with log output; RUST_LOG overrides.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "xfullscreen=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(window_name) = std::env::args().nth(1) else {
        print_usage();
        return Ok(());
    };

    let display = DisplayInfo::connect()?;

    let mut frame = 0usize;
    let mut wait = |interval: Duration| {
        print!(
            "\rWaiting for {} window... {}",
            window_name,
            SPINNER[frame % SPINNER.len()]
        );
        let _ = std::io::stdout().flush();
        frame += 1;
        std::thread::sleep(interval);
    };

    match PollLoop::default().run(&display, window_name.as_bytes(), &mut wait) {
        Ok(window) => {
            debug!("fullscreen requested for window 0x{:x}", window);
            println!("\ndone");
            Ok(())
        }
        Err(err) => {
            // Break the spinner line before the error report.
            println!();
            Err(err.into())
        }
    }
}
