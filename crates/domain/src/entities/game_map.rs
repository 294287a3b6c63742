//! A named map board with its markers and annotations

use crate::collections::{HasId, ListWithId};
use crate::ids::GameMapId;

use super::{GameMapDetail, GameMapShape};

pub type GameMapDetailList = ListWithId<GameMapDetail>;
pub type GameMapShapeList = ListWithId<GameMapShape>;

/// A map board
///
/// `image` holds the background as a base64 data URL, or is empty when the
/// map has no background.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMap {
    id: GameMapId,
    name: String,
    details: GameMapDetailList,
    shapes: GameMapShapeList,
    image: String,
}

impl GameMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GameMapId::new(),
            name: name.into(),
            details: GameMapDetailList::new(),
            shapes: GameMapShapeList::new(),
            image: String::new(),
        }
    }

    /// Reconstruct from stored data
    pub fn from_parts(
        id: GameMapId,
        name: String,
        details: GameMapDetailList,
        shapes: GameMapShapeList,
        image: String,
    ) -> Self {
        Self {
            id,
            name,
            details,
            shapes,
            image,
        }
    }

    // Read-only accessors

    pub fn id(&self) -> &GameMapId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &GameMapDetailList {
        &self.details
    }

    pub fn shapes(&self) -> &GameMapShapeList {
        &self.shapes
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    // Builder-style methods

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_details(mut self, details: GameMapDetailList) -> Self {
        self.details = details;
        self
    }

    pub fn with_shapes(mut self, shapes: GameMapShapeList) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Copy with new ids for the map and everything on it.
    ///
    /// Markers that linked back to the original map now link to the copy.
    pub fn duplicated(&self) -> Self {
        let id = GameMapId::new();
        let details = self.details.map_items(|detail| {
            let copy = detail.duplicated();
            if copy.goto() == &self.id {
                copy.with_goto(id.clone())
            } else {
                copy
            }
        });
        Self {
            id,
            name: self.name.clone(),
            details,
            shapes: self.shapes.map_items(GameMapShape::duplicated),
            image: self.image.clone(),
        }
    }
}

impl HasId for GameMap {
    type Id = GameMapId;

    fn id(&self) -> &GameMapId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ShapeKind;

    #[test]
    fn test_new_map_is_empty() {
        let map = GameMap::new("Forest");
        assert_eq!(map.name(), "Forest");
        assert!(map.details().is_empty());
        assert!(map.shapes().is_empty());
        assert!(!map.has_image());
    }

    #[test]
    fn test_builders_keep_id() {
        let map = GameMap::new("Forest");
        let renamed = map.clone().with_name("Dark Forest").with_image("data:image/png;base64,AA");
        assert_eq!(renamed.id(), map.id());
        assert!(renamed.has_image());
    }

    #[test]
    fn test_duplicated_reassigns_all_ids() {
        let map = GameMap::new("Cave");
        let detail = GameMapDetail::new("Entrance").with_goto(map.id().clone());
        let shape = GameMapShape::new(ShapeKind::Circle);
        let map = map
            .clone()
            .with_details(GameMapDetailList::new().added(detail.clone()))
            .with_shapes(GameMapShapeList::new().added(shape.clone()));

        let copy = map.duplicated();
        assert_ne!(copy.id(), map.id());
        assert_eq!(copy.name(), "Cave");

        let copied_detail = copy.details().at(0).unwrap();
        assert_ne!(copied_detail.id(), detail.id());
        assert_eq!(copied_detail.goto(), copy.id());

        let copied_shape = copy.shapes().at(0).unwrap();
        assert_ne!(copied_shape.id(), shape.id());
    }
}
