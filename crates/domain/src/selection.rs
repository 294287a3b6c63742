//! Selection state for the map-detail and map-shape edit surfaces
//!
//! Each surface tracks two id sets: the *board* selection (picked on the
//! canvas) and the *list* selection (picked from the list view). The
//! controller mode is derived from which of them is non-empty; the list
//! selection wins when both are.

use crate::collections::{HasId, IdList, ListWithId};
use crate::ids::{GameMapDetailId, GameMapShapeId};

/// Which selection currently drives the available actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerMode {
    #[default]
    None,
    Board,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id> {
    board: IdList<Id>,
    list: IdList<Id>,
}

pub type DetailSelection = Selection<GameMapDetailId>;
pub type ShapeSelection = Selection<GameMapShapeId>;

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            board: IdList::default(),
            list: IdList::default(),
        }
    }
}

impl<Id: Clone + PartialEq> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &IdList<Id> {
        &self.board
    }

    pub fn list(&self) -> &IdList<Id> {
        &self.list
    }

    pub fn mode(&self) -> ControllerMode {
        if self.list.is_not_empty() {
            ControllerMode::List
        } else if self.board.is_not_empty() {
            ControllerMode::Board
        } else {
            ControllerMode::None
        }
    }

    pub fn with_board(&self, board: IdList<Id>) -> Self {
        Self {
            board,
            list: self.list.clone(),
        }
    }

    pub fn with_list(&self, list: IdList<Id>) -> Self {
        Self {
            board: self.board.clone(),
            list,
        }
    }

    /// Click on the canvas: replace the board selection, or toggle
    /// membership when `multi` is set.
    pub fn selected_on_board(&self, id: Id, multi: bool) -> Self {
        self.with_board(Self::selected(&self.board, id, multi))
    }

    /// Click in the list view, with the same replace/toggle rule.
    pub fn selected_on_list(&self, id: Id, multi: bool) -> Self {
        self.with_list(Self::selected(&self.list, id, multi))
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Drop ids that no longer exist in `items`.
    pub fn retained_in<T>(&self, items: &ListWithId<T>) -> Self
    where
        T: HasId<Id = Id> + Clone,
    {
        Self {
            board: self.board.retained(|id| items.has_id(id)),
            list: self.list.retained(|id| items.has_id(id)),
        }
    }

    fn selected(current: &IdList<Id>, id: Id, multi: bool) -> IdList<Id> {
        if multi {
            current.toggled(id)
        } else {
            IdList::new().added(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GameMapShape, GameMapShapeList};
    use crate::value_objects::ShapeKind;

    fn id(value: &str) -> GameMapShapeId {
        GameMapShapeId::from_string(value)
    }

    #[test]
    fn test_mode_none_when_empty() {
        assert_eq!(ShapeSelection::new().mode(), ControllerMode::None);
    }

    #[test]
    fn test_mode_board() {
        let selection = ShapeSelection::new().selected_on_board(id("a"), false);
        assert_eq!(selection.mode(), ControllerMode::Board);
    }

    #[test]
    fn test_list_takes_priority() {
        let selection = ShapeSelection::new()
            .selected_on_board(id("a"), false)
            .selected_on_list(id("b"), false);
        assert_eq!(selection.mode(), ControllerMode::List);
        assert!(selection.board().has_id(&id("a")));
    }

    #[test]
    fn test_single_select_replaces() {
        let selection = ShapeSelection::new()
            .selected_on_board(id("a"), false)
            .selected_on_board(id("b"), false);
        assert_eq!(selection.board(), &IdList::from_ids([id("b")]));
    }

    #[test]
    fn test_multi_select_toggles() {
        let selection = ShapeSelection::new()
            .selected_on_list(id("a"), true)
            .selected_on_list(id("b"), true)
            .selected_on_list(id("a"), true);
        assert_eq!(selection.list(), &IdList::from_ids([id("b")]));

        let selection = selection.selected_on_list(id("b"), true);
        assert_eq!(selection.mode(), ControllerMode::None);
    }

    #[test]
    fn test_cleared() {
        let selection = ShapeSelection::new()
            .selected_on_board(id("a"), false)
            .selected_on_list(id("b"), false);
        assert_eq!(selection.cleared().mode(), ControllerMode::None);
    }

    #[test]
    fn test_retained_in_drops_deleted_ids() {
        let kept = GameMapShape::new(ShapeKind::Square);
        let shapes = GameMapShapeList::new().added(kept.clone());
        let selection = ShapeSelection::new()
            .selected_on_board(kept.id().clone(), true)
            .selected_on_board(id("gone"), true)
            .selected_on_list(id("gone"), false);
        let pruned = selection.retained_in(&shapes);
        assert_eq!(pruned.board(), &IdList::from_ids([kept.id().clone()]));
        assert_eq!(pruned.mode(), ControllerMode::Board);
    }
}
