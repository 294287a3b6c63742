//! Entities - id-bearing domain objects owned by a [`crate::StrategyMemo`]

mod game_map;
mod game_map_detail;
mod game_map_shape;
mod memo;
mod preparation;

use crate::collections::ListWithId;

pub use game_map::{GameMap, GameMapDetailList, GameMapShapeList};
pub use game_map_detail::{DetailInput, GameMapDetail};
pub use game_map_shape::GameMapShape;
pub use memo::Memo;
pub use preparation::Preparation;

pub type GameMapList = ListWithId<GameMap>;
pub type PreparationList = ListWithId<Preparation>;
pub type MemoList = ListWithId<Memo>;
