#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use easel_geom::{Point, Rect};

/// A placed rectangle tagged with interactive metadata.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub area: Rect,
    pub tooltip: Option<String>,
    pub href: Option<String>,
}

/// Per-render accumulator of entity regions.
///
/// Append-only during one render pass. Insertion order is z-order, so
/// hit-testing returns the last matching entry (the one drawn on top). No
/// spatial index; element counts are small enough for a linear scan.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, area: Rect, tooltip: Option<String>, href: Option<String>) {
        self.entities.push(Entity {
            area,
            tooltip,
            href,
        });
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// The entity drawn on top at `point`, if any.
    pub fn find_containing(&self, point: Point) -> Option<&Entity> {
        self.entities.iter().rev().find(|e| e.area.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_containing_prefers_last_inserted() {
        let mut registry = EntityRegistry::new();
        registry.add(Rect::new(0.0, 0.0, 100.0, 100.0), Some("under".into()), None);
        registry.add(Rect::new(40.0, 40.0, 100.0, 100.0), Some("over".into()), None);

        let hit = registry.find_containing(Point::new(50.0, 50.0)).unwrap();
        assert_eq!(hit.tooltip.as_deref(), Some("over"));

        let hit = registry.find_containing(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(hit.tooltip.as_deref(), Some("under"));

        assert!(registry.find_containing(Point::new(300.0, 300.0)).is_none());
    }
}
