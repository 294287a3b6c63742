extern crate self as stratmemo_domain;

pub mod aggregates;
pub mod collections;
pub mod common;
pub mod entities;
pub mod error;
pub mod filters;
pub mod ids;
pub mod selection;
pub mod value_objects;

pub use aggregates::StrategyMemo;

pub use collections::{HasId, IdList, ListWithId};

pub use entities::{
    DetailInput, GameMap, GameMapDetail, GameMapDetailList, GameMapList, GameMapShape,
    GameMapShapeList, Memo, MemoList, Preparation, PreparationList,
};

pub use error::DomainError;

pub use filters::{
    filtered_game_map_details, filtered_game_maps, filtered_memos,
    filtered_names_accepting_material, filtered_names_that_can_be_used_as_material,
    filtered_preparations, filtered_preparations_accepting_material,
    filtered_preparations_that_can_be_used_as_material,
};

// Re-export ID types
pub use ids::{
    GameMapDetailId, GameMapId, GameMapShapeId, MemoId, PreparationId, StrategyMemoId,
};

pub use selection::{ControllerMode, DetailSelection, Selection, ShapeSelection};

pub use value_objects::{
    Angle, Point, Progress, Scale, ScaleAxis, ShapeColor, ShapeGeometry, ShapeKind, Thickness,
};
