use crate::env::ObjectSource;
use crate::geometry::Rect;

/// An object placed on a map, such as a table, chest or door.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedObject {
    pub name: String,
    pub bounds: Rect,
    /// Whether the object blocks movement.
    pub collision: bool,
}

impl PlacedObject {
    pub fn solid(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
            collision: true,
        }
    }

    pub fn decoration(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
            collision: false,
        }
    }
}

/// Objects placed on one map.
///
/// A map whose placement data is missing is represented by an empty layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectLayer {
    objects: Vec<PlacedObject>,
}

impl ObjectLayer {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(objects: Vec<PlacedObject>) -> Self {
        Self { objects }
    }

    pub fn push(&mut self, object: PlacedObject) {
        self.objects.push(object);
    }

    /// Removes every object called `name`; returns how many were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.objects.len();
        self.objects.retain(|object| object.name != name);
        before - self.objects.len()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectSource for ObjectLayer {
    fn placed(&self) -> &[PlacedObject] {
        &self.objects
    }
}
