use crate::display::{DisplayConnection, WindowId};

/// The externally-owned window that receives synthetic keystrokes. Unresolved
/// means no owner was found; injections against it are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWindow(Option<WindowId>);

impl TargetWindow {
    pub fn resolved(id: WindowId) -> Self {
        Self(Some(id))
    }

    pub fn unresolved() -> Self {
        Self(None)
    }

    pub fn id(self) -> Option<WindowId> {
        self.0
    }
}

/// One-shot, best-effort lookup of the window owning the active-window
/// selection. Invoked once after the overlay exists and never refreshed;
/// a miss is reported in the log but is not an error.
pub fn resolve_target(conn: &DisplayConnection) -> anyhow::Result<TargetWindow> {
    let selection = conn.intern_atom("_NET_ACTIVE_WINDOW")?;
    match conn.selection_owner(selection) {
        Some(id) => {
            tracing::info!(window = id, "target window resolved");
            Ok(TargetWindow::resolved(id))
        }
        None => {
            tracing::warn!("no owner for _NET_ACTIVE_WINDOW; key sequences will be dropped");
            Ok(TargetWindow::unresolved())
        }
    }
}
