//! Ownership of the Xlib connection. All FFI lives here; the rest of the
//! crate sees safe wrappers and the [`DisplayEvent`] classification.

use std::ffi::CString;
use std::mem;
use std::os::raw::{c_int, c_uint, c_ulong};
use std::ptr;

use anyhow::bail;
use x11::xlib;

pub type WindowId = xlib::Window;
pub type AtomId = xlib::Atom;

/// A raw X event, classified into the kinds the dispatch loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Pointer button pressed inside the given window.
    PointerPress { window: WindowId },
    /// The given window needs its contents redrawn.
    Expose { window: WindowId },
    /// Window-manager client message; `protocol` is the atom in its first
    /// data slot.
    CloseRequest { protocol: AtomId },
    Other,
}

/// Owns the `*mut Display` for the process. Opened once at startup and
/// closed on drop, which also releases every window created through it.
pub struct DisplayConnection {
    raw: *mut xlib::Display,
    screen: c_int,
}

impl DisplayConnection {
    pub fn open() -> anyhow::Result<Self> {
        let raw = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if raw.is_null() {
            bail!("cannot open X display (is DISPLAY set?)");
        }
        let screen = unsafe { xlib::XDefaultScreen(raw) };
        tracing::debug!(screen, "display connection opened");
        Ok(Self { raw, screen })
    }

    fn root(&self) -> WindowId {
        unsafe { xlib::XRootWindow(self.raw, self.screen) }
    }

    fn black_pixel(&self) -> c_ulong {
        unsafe { xlib::XBlackPixel(self.raw, self.screen) }
    }

    fn white_pixel(&self) -> c_ulong {
        unsafe { xlib::XWhitePixel(self.raw, self.screen) }
    }

    /// Create an unmapped top-level window of the given size, centered on the
    /// screen.
    pub fn create_toplevel(&self, width: u32, height: u32) -> WindowId {
        let x = unsafe { (xlib::XDisplayWidth(self.raw, self.screen) - width as c_int) / 2 };
        let y = unsafe { (xlib::XDisplayHeight(self.raw, self.screen) - height as c_int) / 2 };
        unsafe {
            xlib::XCreateSimpleWindow(
                self.raw,
                self.root(),
                x,
                y,
                width as c_uint,
                height as c_uint,
                0,
                self.black_pixel(),
                self.white_pixel(),
            )
        }
    }

    /// Create an unmapped child window of `parent`.
    pub fn create_child(&self, parent: WindowId, x: i32, y: i32, width: u32, height: u32) -> WindowId {
        unsafe {
            xlib::XCreateSimpleWindow(
                self.raw,
                parent,
                x,
                y,
                width as c_uint,
                height as c_uint,
                0,
                self.black_pixel(),
                self.white_pixel(),
            )
        }
    }

    pub fn set_title(&self, window: WindowId, title: &str) -> anyhow::Result<()> {
        let title = CString::new(title)?;
        unsafe { xlib::XStoreName(self.raw, window, title.as_ptr()) };
        Ok(())
    }

    /// Register for the window manager's delete protocol on `window` and
    /// return the protocol atom, so close requests can be recognised later.
    pub fn set_close_protocol(&self, window: WindowId) -> anyhow::Result<AtomId> {
        let atom = self.intern_atom("WM_DELETE_WINDOW")?;
        let mut protocols = [atom];
        unsafe { xlib::XSetWMProtocols(self.raw, window, protocols.as_mut_ptr(), 1) };
        Ok(atom)
    }

    /// Ask the server to deliver pointer presses and exposures for `window`.
    pub fn select_region_input(&self, window: WindowId) {
        unsafe {
            xlib::XSelectInput(self.raw, window, xlib::ButtonPressMask | xlib::ExposureMask)
        };
    }

    pub fn map_window(&self, window: WindowId) {
        unsafe { xlib::XMapWindow(self.raw, window) };
    }

    pub fn intern_atom(&self, name: &str) -> anyhow::Result<AtomId> {
        let name = CString::new(name)?;
        Ok(unsafe { xlib::XInternAtom(self.raw, name.as_ptr(), xlib::False) })
    }

    /// Current owner of the given selection, if any.
    pub fn selection_owner(&self, selection: AtomId) -> Option<WindowId> {
        let owner = unsafe { xlib::XGetSelectionOwner(self.raw, selection) };
        if owner == 0 {
            None
        } else {
            Some(owner)
        }
    }

    /// Translate a keysym through the server's current keycode mapping.
    /// Returns `None` when the mapping has no keycode for the symbol.
    pub fn keysym_to_keycode(&self, keysym: xlib::KeySym) -> Option<u8> {
        let code = unsafe { xlib::XKeysymToKeycode(self.raw, keysym) };
        if code == 0 {
            None
        } else {
            Some(code)
        }
    }

    /// Send one synthetic key press or release to `target`. Best-effort: the
    /// server queues the event for the target without any acknowledgment, and
    /// an invalid target simply drops it.
    pub fn send_key_event(&self, target: WindowId, keycode: u8, press: bool) {
        let (kind, mask) = if press {
            (xlib::KeyPress, xlib::KeyPressMask)
        } else {
            (xlib::KeyRelease, xlib::KeyReleaseMask)
        };
        let key_event = xlib::XKeyEvent {
            type_: kind,
            serial: 0,
            send_event: xlib::True,
            display: self.raw,
            window: target,
            root: self.root(),
            subwindow: 0,
            time: xlib::CurrentTime,
            x: 0,
            y: 0,
            x_root: 0,
            y_root: 0,
            state: 0,
            keycode: c_uint::from(keycode),
            same_screen: xlib::True,
        };
        let mut event = xlib::XEvent { key: key_event };
        unsafe { xlib::XSendEvent(self.raw, target, xlib::True, mask, &mut event) };
    }

    /// Draw `text` in `window` with the default GC, black on the window
    /// background.
    pub fn draw_text(&self, window: WindowId, x: i32, y: i32, text: &str) {
        let Ok(c_text) = CString::new(text) else {
            return;
        };
        unsafe {
            let gc = xlib::XDefaultGC(self.raw, self.screen);
            xlib::XSetForeground(self.raw, gc, self.black_pixel());
            xlib::XDrawString(self.raw, window, gc, x, y, c_text.as_ptr(), text.len() as c_int);
        }
    }

    pub fn flush(&self) {
        unsafe { xlib::XFlush(self.raw) };
    }

    /// Block until the server delivers the next event. This is the dispatch
    /// loop's only suspension point.
    pub fn next_event(&self) -> DisplayEvent {
        let mut event: xlib::XEvent = unsafe { mem::zeroed() };
        unsafe {
            xlib::XNextEvent(self.raw, &mut event);
            match event.type_ {
                xlib::ButtonPress => DisplayEvent::PointerPress {
                    window: event.button.window,
                },
                // Only the last exposure in a series triggers a redraw.
                xlib::Expose if event.expose.count == 0 => DisplayEvent::Expose {
                    window: event.expose.window,
                },
                xlib::ClientMessage => DisplayEvent::CloseRequest {
                    protocol: event.client_message.data.get_long(0) as AtomId,
                },
                _ => DisplayEvent::Other,
            }
        }
    }
}

impl Drop for DisplayConnection {
    fn drop(&mut self) {
        unsafe { xlib::XCloseDisplay(self.raw) };
        tracing::debug!("display connection closed");
    }
}
