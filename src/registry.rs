use anyhow::bail;

use crate::keys::Key;

/// A button's rectangle in panel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the interiors of the two rectangles intersect. Shared edges
    /// do not count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_right = self.x + self.width as i32;
        let a_bottom = self.y + self.height as i32;
        let b_right = other.x + other.width as i32;
        let b_bottom = other.y + other.height as i32;
        self.x < b_right && other.x < a_right && self.y < b_bottom && other.y < a_bottom
    }
}

/// One button: where it sits, what it shows, and the key sequence it replays.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub bounds: Rect,
    pub label: String,
    pub keys: Vec<Key>,
}

impl ButtonSpec {
    pub fn new(bounds: Rect, label: &str, keys: Vec<Key>) -> Self {
        Self {
            bounds,
            label: label.to_string(),
            keys,
        }
    }
}

/// Ordered, immutable collection of buttons plus the panel size that holds
/// them, validated once at construction and never mutated afterwards.
pub struct ButtonRegistry {
    specs: Vec<ButtonSpec>,
    panel_width: u32,
    panel_height: u32,
}

impl ButtonRegistry {
    pub fn new(panel_width: u32, panel_height: u32, specs: Vec<ButtonSpec>) -> anyhow::Result<Self> {
        if panel_width == 0 || panel_height == 0 {
            bail!("panel must have a positive size");
        }
        for spec in &specs {
            let b = &spec.bounds;
            if b.width == 0 || b.height == 0 {
                bail!("button '{}' has an empty rectangle", spec.label);
            }
            if spec.keys.is_empty() {
                bail!("button '{}' has no key sequence", spec.label);
            }
            if b.x < 0
                || b.y < 0
                || i64::from(b.x) + i64::from(b.width) > i64::from(panel_width)
                || i64::from(b.y) + i64::from(b.height) > i64::from(panel_height)
            {
                bail!("button '{}' does not fit inside the panel", spec.label);
            }
        }
        for (i, a) in specs.iter().enumerate() {
            for b in &specs[i + 1..] {
                if a.bounds.overlaps(&b.bounds) {
                    bail!("buttons '{}' and '{}' overlap", a.label, b.label);
                }
            }
        }
        Ok(Self {
            specs,
            panel_width,
            panel_height,
        })
    }

    pub fn panel_width(&self) -> u32 {
        self.panel_width
    }

    pub fn panel_height(&self) -> u32 {
        self.panel_height
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ButtonSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// The compiled-in layout: two rows of three buttons, five single keys and
/// one combo.
pub fn default_layout() -> anyhow::Result<ButtonRegistry> {
    ButtonRegistry::new(
        340,
        130,
        vec![
            ButtonSpec::new(Rect::new(10, 10, 100, 50), "S", vec![Key::S]),
            ButtonSpec::new(Rect::new(120, 10, 100, 50), "D", vec![Key::D]),
            ButtonSpec::new(Rect::new(230, 10, 100, 50), "A", vec![Key::A]),
            ButtonSpec::new(Rect::new(10, 70, 100, 50), "H", vec![Key::H]),
            ButtonSpec::new(Rect::new(120, 70, 100, 50), "L", vec![Key::L]),
            ButtonSpec::new(
                Rect::new(230, 70, 100, 50),
                "Combo",
                vec![Key::L, Key::H, Key::L, Key::H, Key::L, Key::H],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::{default_layout, ButtonRegistry, ButtonSpec, Rect};
    use crate::keys::Key;

    #[test]
    fn default_layout_is_valid() {
        let registry = default_layout().expect("default layout");
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.panel_width(), 340);
        assert_eq!(registry.panel_height(), 130);
        assert!(registry.iter().all(|spec| !spec.keys.is_empty()));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn intersecting_interiors_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn rejects_overlapping_buttons() {
        let result = ButtonRegistry::new(
            200,
            100,
            vec![
                ButtonSpec::new(Rect::new(0, 0, 50, 50), "one", vec![Key::A]),
                ButtonSpec::new(Rect::new(25, 25, 50, 50), "two", vec![Key::B]),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_key_sequence() {
        let result = ButtonRegistry::new(
            200,
            100,
            vec![ButtonSpec::new(Rect::new(0, 0, 50, 50), "mute", vec![])],
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_sized_rectangle() {
        let result = ButtonRegistry::new(
            200,
            100,
            vec![ButtonSpec::new(Rect::new(0, 0, 0, 50), "thin", vec![Key::A])],
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_button_outside_panel() {
        let result = ButtonRegistry::new(
            100,
            100,
            vec![ButtonSpec::new(
                Rect::new(80, 0, 50, 50),
                "wide",
                vec![Key::A],
            )],
        );
        assert!(result.is_err());
    }
}
