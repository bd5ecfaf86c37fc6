use std::collections::HashMap;

use crate::display::{AtomId, DisplayConnection, WindowId};
use crate::registry::{ButtonRegistry, ButtonSpec};

/// Maps each region window to the button spec it was created for. Each entry
/// owns its spec; window identity is the join key between a live press event
/// and the key sequence to replay.
#[derive(Default)]
pub struct RegionMap {
    regions: HashMap<WindowId, ButtonSpec>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, window: WindowId, spec: ButtonSpec) {
        self.regions.insert(window, spec);
    }

    pub fn spec_for(&self, window: WindowId) -> Option<&ButtonSpec> {
        self.regions.get(&window)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

struct Label {
    text: String,
    baseline: i32,
}

/// The panel window and its button regions. Presentation state only; the
/// dispatch side of the regions lives in the [`RegionMap`] returned from
/// [`Overlay::create`].
pub struct Overlay {
    close_protocol: AtomId,
    labels: HashMap<WindowId, Label>,
}

const LABEL_INSET: i32 = 10;

impl Overlay {
    /// Create the top-level panel centered on the screen and one child region
    /// per button, all mapped and flushed before returning.
    pub fn create(
        conn: &DisplayConnection,
        registry: &ButtonRegistry,
        title: &str,
    ) -> anyhow::Result<(Self, RegionMap)> {
        let window = conn.create_toplevel(registry.panel_width(), registry.panel_height());
        conn.set_title(window, title)?;
        let close_protocol = conn.set_close_protocol(window)?;
        conn.map_window(window);

        let mut regions = RegionMap::new();
        let mut labels = HashMap::new();
        for spec in registry.iter() {
            let b = spec.bounds;
            let region = conn.create_child(window, b.x, b.y, b.width, b.height);
            conn.select_region_input(region);
            conn.map_window(region);
            labels.insert(
                region,
                Label {
                    text: spec.label.clone(),
                    baseline: b.height as i32 / 2 + 5,
                },
            );
            regions.insert(region, spec.clone());
        }
        conn.flush();
        tracing::info!(title, regions = regions.len(), "overlay created");

        Ok((
            Self {
                close_protocol,
                labels,
            },
            regions,
        ))
    }

    /// The atom carried by close requests for this panel.
    pub fn close_protocol(&self) -> AtomId {
        self.close_protocol
    }

    /// Redraw the label of the given region, if it is one of ours.
    pub fn redraw(&self, conn: &DisplayConnection, window: WindowId) {
        if let Some(label) = self.labels.get(&window) {
            conn.draw_text(window, LABEL_INSET, label.baseline, &label.text);
            conn.flush();
        }
    }
}
