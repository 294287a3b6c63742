//! StrategyMemo aggregate - everything recorded about one game
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all state is reached through accessors
//! - **Pure updates**: every mutation takes `&self` and returns a new aggregate
//! - **Stale ids are harmless**: an update naming a missing map, detail,
//!   shape, preparation or memo returns an equal aggregate

use crate::entities::{
    GameMap, GameMapDetail, GameMapDetailList, GameMapList, GameMapShape, GameMapShapeList, Memo,
    MemoList, Preparation, PreparationList,
};
use crate::ids::{
    GameMapDetailId, GameMapId, GameMapShapeId, MemoId, PreparationId, StrategyMemoId,
};

/// Root aggregate and unit of persistence
///
/// # Example
///
/// ```
/// use stratmemo_domain::{GameMap, StrategyMemo};
///
/// let memo = StrategyMemo::new("Dragon Quest");
/// let map = GameMap::new("World");
/// let updated = memo.added_game_map(map.clone());
///
/// assert!(memo.game_maps().is_empty());
/// assert_eq!(updated.game_maps().find(map.id()), Some(&map));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyMemo {
    id: StrategyMemoId,
    game_name: String,
    game_maps: GameMapList,
    preparations: PreparationList,
    memos: MemoList,
}

impl StrategyMemo {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn new(game_name: impl Into<String>) -> Self {
        Self {
            id: StrategyMemoId::new(),
            game_name: game_name.into(),
            game_maps: GameMapList::new(),
            preparations: PreparationList::new(),
            memos: MemoList::new(),
        }
    }

    /// An unnamed, empty memo with a fresh id.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Reconstruct from stored data
    pub fn from_parts(
        id: StrategyMemoId,
        game_name: String,
        game_maps: GameMapList,
        preparations: PreparationList,
        memos: MemoList,
    ) -> Self {
        Self {
            id,
            game_name,
            game_maps,
            preparations,
            memos,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &StrategyMemoId {
        &self.id
    }

    #[inline]
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    #[inline]
    pub fn game_maps(&self) -> &GameMapList {
        &self.game_maps
    }

    #[inline]
    pub fn preparations(&self) -> &PreparationList {
        &self.preparations
    }

    #[inline]
    pub fn memos(&self) -> &MemoList {
        &self.memos
    }

    pub fn is_empty(&self) -> bool {
        self.game_name.is_empty()
            && self.game_maps.is_empty()
            && self.preparations.is_empty()
            && self.memos.is_empty()
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_game_name(&self, game_name: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            ..self.clone()
        }
    }

    pub fn with_game_maps(&self, game_maps: GameMapList) -> Self {
        Self {
            game_maps,
            ..self.clone()
        }
    }

    pub fn with_preparations(&self, preparations: PreparationList) -> Self {
        Self {
            preparations,
            ..self.clone()
        }
    }

    pub fn with_memos(&self, memos: MemoList) -> Self {
        Self {
            memos,
            ..self.clone()
        }
    }

    // =========================================================================
    // Game maps
    // =========================================================================

    pub fn added_game_map(&self, map: GameMap) -> Self {
        self.with_game_maps(self.game_maps.added(map))
    }

    pub fn replaced_game_map(&self, map: GameMap) -> Self {
        self.with_game_maps(self.game_maps.replaced(map))
    }

    pub fn removed_game_map(&self, id: &GameMapId) -> Self {
        self.with_game_maps(self.game_maps.removed(id))
    }

    pub fn moved_up_game_map(&self, id: &GameMapId) -> Self {
        self.with_game_maps(self.game_maps.moved_up(id))
    }

    pub fn moved_down_game_map(&self, id: &GameMapId) -> Self {
        self.with_game_maps(self.game_maps.moved_down(id))
    }

    /// Append a copy of the map with fresh ids.
    pub fn duplicated_game_map(&self, id: &GameMapId) -> Self {
        match self.game_maps.find(id) {
            Some(map) => self.added_game_map(map.duplicated()),
            None => self.clone(),
        }
    }

    fn updated_game_map(&self, id: &GameMapId, f: impl FnOnce(&GameMap) -> GameMap) -> Self {
        self.with_game_maps(self.game_maps.updated(id, f))
    }

    fn updated_details(
        &self,
        map_id: &GameMapId,
        f: impl FnOnce(&GameMapDetailList) -> GameMapDetailList,
    ) -> Self {
        self.updated_game_map(map_id, |map| map.clone().with_details(f(map.details())))
    }

    fn updated_shapes(
        &self,
        map_id: &GameMapId,
        f: impl FnOnce(&GameMapShapeList) -> GameMapShapeList,
    ) -> Self {
        self.updated_game_map(map_id, |map| map.clone().with_shapes(f(map.shapes())))
    }

    // =========================================================================
    // Map details
    // =========================================================================

    pub fn added_game_map_detail(&self, map_id: &GameMapId, detail: GameMapDetail) -> Self {
        self.updated_details(map_id, |details| details.added(detail))
    }

    pub fn replaced_game_map_detail(&self, map_id: &GameMapId, detail: GameMapDetail) -> Self {
        self.updated_details(map_id, |details| details.replaced(detail))
    }

    pub fn removed_game_map_detail(&self, map_id: &GameMapId, id: &GameMapDetailId) -> Self {
        self.updated_details(map_id, |details| details.removed(id))
    }

    pub fn moved_up_game_map_detail(&self, map_id: &GameMapId, id: &GameMapDetailId) -> Self {
        self.updated_details(map_id, |details| details.moved_up(id))
    }

    pub fn moved_down_game_map_detail(&self, map_id: &GameMapId, id: &GameMapDetailId) -> Self {
        self.updated_details(map_id, |details| details.moved_down(id))
    }

    // =========================================================================
    // Map shapes
    // =========================================================================

    pub fn added_game_map_shape(&self, map_id: &GameMapId, shape: GameMapShape) -> Self {
        self.updated_shapes(map_id, |shapes| shapes.added(shape))
    }

    pub fn replaced_game_map_shape(&self, map_id: &GameMapId, shape: GameMapShape) -> Self {
        self.updated_shapes(map_id, |shapes| shapes.replaced(shape))
    }

    pub fn removed_game_map_shape(&self, map_id: &GameMapId, id: &GameMapShapeId) -> Self {
        self.updated_shapes(map_id, |shapes| shapes.removed(id))
    }

    pub fn moved_up_game_map_shape(&self, map_id: &GameMapId, id: &GameMapShapeId) -> Self {
        self.updated_shapes(map_id, |shapes| shapes.moved_up(id))
    }

    pub fn moved_down_game_map_shape(&self, map_id: &GameMapId, id: &GameMapShapeId) -> Self {
        self.updated_shapes(map_id, |shapes| shapes.moved_down(id))
    }

    // =========================================================================
    // Preparations
    // =========================================================================

    pub fn added_preparation(&self, preparation: Preparation) -> Self {
        self.with_preparations(self.preparations.added(preparation))
    }

    pub fn replaced_preparation(&self, preparation: Preparation) -> Self {
        self.with_preparations(self.preparations.replaced(preparation))
    }

    pub fn removed_preparation(&self, id: &PreparationId) -> Self {
        self.with_preparations(self.preparations.removed(id))
    }

    pub fn moved_up_preparation(&self, id: &PreparationId) -> Self {
        self.with_preparations(self.preparations.moved_up(id))
    }

    pub fn moved_down_preparation(&self, id: &PreparationId) -> Self {
        self.with_preparations(self.preparations.moved_down(id))
    }

    // =========================================================================
    // Memos
    // =========================================================================

    pub fn added_memo(&self, memo: Memo) -> Self {
        self.with_memos(self.memos.added(memo))
    }

    pub fn replaced_memo(&self, memo: Memo) -> Self {
        self.with_memos(self.memos.replaced(memo))
    }

    pub fn removed_memo(&self, id: &MemoId) -> Self {
        self.with_memos(self.memos.removed(id))
    }

    pub fn moved_up_memo(&self, id: &MemoId) -> Self {
        self.with_memos(self.memos.moved_up(id))
    }

    pub fn moved_down_memo(&self, id: &MemoId) -> Self {
        self.with_memos(self.memos.moved_down(id))
    }
}

impl Default for StrategyMemo {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ShapeKind;

    fn with_map() -> (StrategyMemo, GameMapId) {
        let map = GameMap::new("Overworld");
        let id = map.id().clone();
        (StrategyMemo::new("Quest").added_game_map(map), id)
    }

    #[test]
    fn test_empty_memo() {
        let memo = StrategyMemo::empty();
        assert!(memo.is_empty());
        assert!(!memo.id().is_empty());
    }

    #[test]
    fn test_updates_do_not_touch_original() {
        let memo = StrategyMemo::new("Quest");
        let renamed = memo.with_game_name("Quest II");
        assert_eq!(memo.game_name(), "Quest");
        assert_eq!(renamed.game_name(), "Quest II");
        assert_eq!(renamed.id(), memo.id());
    }

    #[test]
    fn test_detail_lifecycle() {
        let (memo, map_id) = with_map();
        let detail = GameMapDetail::new("Inn");
        let memo = memo.added_game_map_detail(&map_id, detail.clone());
        let found = memo.game_maps().find(&map_id).and_then(|m| m.details().find(detail.id()));
        assert_eq!(found, Some(&detail));

        let renamed = detail.clone().with_name("Old Inn");
        let memo = memo.replaced_game_map_detail(&map_id, renamed.clone());
        let found = memo.game_maps().find(&map_id).and_then(|m| m.details().find(detail.id()));
        assert_eq!(found, Some(&renamed));

        let memo = memo.removed_game_map_detail(&map_id, detail.id());
        assert!(memo.game_maps().find(&map_id).unwrap().details().is_empty());
    }

    #[test]
    fn test_stale_map_id_is_noop() {
        let (memo, _) = with_map();
        let stale = GameMapId::new();
        assert_eq!(
            memo.added_game_map_detail(&stale, GameMapDetail::new("x")),
            memo
        );
        assert_eq!(
            memo.added_game_map_shape(&stale, GameMapShape::new(ShapeKind::Arrow)),
            memo
        );
        assert_eq!(memo.removed_game_map(&stale), memo);
        assert_eq!(memo.duplicated_game_map(&stale), memo);
    }

    #[test]
    fn test_shape_ordering() {
        let (memo, map_id) = with_map();
        let a = GameMapShape::new(ShapeKind::Square);
        let b = GameMapShape::new(ShapeKind::Circle);
        let memo = memo
            .added_game_map_shape(&map_id, a.clone())
            .added_game_map_shape(&map_id, b.clone())
            .moved_up_game_map_shape(&map_id, b.id());
        let shapes = memo.game_maps().find(&map_id).unwrap().shapes();
        assert_eq!(shapes.at(0), Some(&b));
        assert_eq!(shapes.at(1), Some(&a));
    }

    #[test]
    fn test_duplicated_game_map_appends_copy() {
        let (memo, map_id) = with_map();
        let memo = memo.duplicated_game_map(&map_id);
        assert_eq!(memo.game_maps().len(), 2);
        assert_ne!(memo.game_maps().at(1).map(|m| m.id()), Some(&map_id));
    }

    #[test]
    fn test_preparation_and_memo_lists() {
        let a = Preparation::new("A");
        let b = Preparation::new("B");
        let note = Memo::new("Tip", "Save often");
        let memo = StrategyMemo::new("Quest")
            .added_preparation(a.clone())
            .added_preparation(b.clone())
            .moved_down_preparation(a.id())
            .added_memo(note.clone());
        assert_eq!(memo.preparations().at(0), Some(&b));
        assert_eq!(memo.memos().find(note.id()), Some(&note));

        let memo = memo.removed_memo(note.id()).removed_preparation(b.id());
        assert!(memo.memos().is_empty());
        assert_eq!(memo.preparations().len(), 1);
    }
}
