//! Display Module
//!
//! Owns the X11 connection and implements the property seam over it.
//! The connection is opened once at startup and closed when the value is
//! dropped, regardless of which path the program exits through.

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::*;
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use crate::wm::error::{WmError, WmResult};
use crate::wm::ewmh::Atoms;
use crate::wm::hints::SizeHints;
use crate::wm::ServerOps;

/// Longest property value read in one request, in 32-bit units.
const PROPERTY_READ_LEN: u32 = 1024;

/// Live X11 connection plus the per-connection state derived from it.
pub struct DisplayInfo {
    conn: RustConnection,
    root: Window,
    atoms: Atoms,
}

impl DisplayInfo {
    /// Connect to the display named by `DISPLAY` and intern the atoms the
    /// workflow needs.
    pub fn connect() -> WmResult<Self> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let root = conn.setup().roots[screen_num].root;
        let atoms = Atoms::new(&conn)?;

        debug!(
            "connected to X server, screen {}, root window 0x{:x}",
            screen_num, root
        );

        Ok(Self { conn, root, atoms })
    }
}

impl ServerOps for DisplayInfo {
    fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    fn client_list(&self) -> WmResult<Option<Vec<Window>>> {
        let reply = self
            .conn
            .get_property(
                false,
                self.root,
                self.atoms.net_client_list,
                AtomEnum::WINDOW,
                0,
                PROPERTY_READ_LEN,
            )
            .map_err(|e| WmError::query("_NET_CLIENT_LIST", e))?
            .reply()
            .map_err(|e| WmError::query("_NET_CLIENT_LIST", e))?;

        if reply.type_ == u32::from(AtomEnum::NONE) {
            return Ok(None);
        }

        // An existing but empty list is a valid state: a window manager is
        // running with no managed windows.
        match reply.value32() {
            Some(values) => Ok(Some(values.collect())),
            None => Ok(None),
        }
    }

    fn window_name(&self, window: Window) -> WmResult<Option<Vec<u8>>> {
        let reply = self
            .conn
            .get_property(
                false,
                window,
                self.atoms.wm_name,
                AtomEnum::STRING,
                0,
                PROPERTY_READ_LEN,
            )
            .map_err(|e| WmError::query("WM_NAME", e))?
            .reply()
            .map_err(|e| WmError::query("WM_NAME", e))?;

        // Unnamed (or not-yet-named) windows are a normal outcome, not an
        // error. The name is a raw byte string: WM_NAME carries no
        // encoding guarantee.
        if reply.type_ == u32::from(AtomEnum::NONE) || reply.format != 8 || reply.value.is_empty() {
            return Ok(None);
        }

        Ok(Some(reply.value))
    }

    fn append_allowed_actions(&self, window: Window, actions: &[Atom]) -> WmResult<()> {
        self.conn
            .change_property32(
                PropMode::APPEND,
                window,
                self.atoms.net_wm_allowed_actions,
                AtomEnum::ATOM,
                actions,
            )
            .map_err(|e| WmError::transmit("_NET_WM_ALLOWED_ACTIONS update", e))?;
        self.conn
            .flush()
            .map_err(|e| WmError::transmit("_NET_WM_ALLOWED_ACTIONS update", e))?;
        Ok(())
    }

    fn set_normal_hints(&self, window: Window, hints: &SizeHints) -> WmResult<()> {
        self.conn
            .change_property32(
                PropMode::REPLACE,
                window,
                self.atoms.wm_normal_hints,
                self.atoms.wm_size_hints,
                &hints.to_record(),
            )
            .map_err(|e| WmError::transmit("WM_NORMAL_HINTS update", e))?;
        self.conn
            .flush()
            .map_err(|e| WmError::transmit("WM_NORMAL_HINTS update", e))?;
        Ok(())
    }

    fn send_wm_message(&self, window: Window, message_type: Atom, data: [u32; 5]) -> WmResult<()> {
        let event = ClientMessageEvent::new(32, window, message_type, data);

        // SubstructureRedirect + SubstructureNotify deliver the message to
        // the window manager and notify listeners of the resulting change.
        self.conn
            .send_event(
                false,
                self.root,
                EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
                event,
            )
            .map_err(|e| WmError::transmit("client message", e))?;
        self.conn
            .flush()
            .map_err(|e| WmError::transmit("client message", e))?;

        debug!(
            "sent client message type {} for window 0x{:x}",
            message_type, window
        );
        Ok(())
    }

    fn root_size(&self) -> WmResult<(u16, u16)> {
        let geometry = self
            .conn
            .get_geometry(self.root)
            .map_err(|e| WmError::query("root geometry", e))?
            .reply()
            .map_err(|e| WmError::query("root geometry", e))?;
        Ok((geometry.width, geometry.height))
    }

    fn move_resize(&self, window: Window, x: i32, y: i32, width: u32, height: u32) -> WmResult<()> {
        self.conn
            .configure_window(
                window,
                &ConfigureWindowAux::new()
                    .x(x)
                    .y(y)
                    .width(width)
                    .height(height),
            )
            .map_err(|e| WmError::transmit("configure request", e))?;
        self.conn
            .flush()
            .map_err(|e| WmError::transmit("configure request", e))?;
        Ok(())
    }

    fn raise_and_map(&self, window: Window) -> WmResult<()> {
        self.conn
            .configure_window(
                window,
                &ConfigureWindowAux::new().stack_mode(StackMode::ABOVE),
            )
            .map_err(|e| WmError::transmit("raise request", e))?;
        self.conn
            .map_window(window)
            .map_err(|e| WmError::transmit("map request", e))?;
        self.conn
            .flush()
            .map_err(|e| WmError::transmit("map request", e))?;
        Ok(())
    }
}
