//! Record <-> domain conversion
//!
//! `convert_to_*_record` and `convert_to_*` are exact inverses for values
//! built through the domain constructors. Going from record to domain runs
//! every number through its value object, so out-of-range stored numbers
//! are normalized, and unknown shape/color keys fall back to the defaults.

use stratmemo_domain::{
    Angle, GameMap, GameMapDetail, GameMapDetailId, GameMapId, GameMapShape, GameMapShapeId,
    ListWithId, Memo, MemoId, Point, Preparation, PreparationId, Progress, Scale, ShapeColor,
    ShapeKind, StrategyMemo, StrategyMemoId, Thickness,
};

use super::{
    GameMapDetailRecord, GameMapRecord, GameMapShapeRecord, MemoRecord, PreparationRecord,
    StrategyMemoRecord,
};

// =============================================================================
// Domain -> Record
// =============================================================================

pub fn convert_to_game_map_detail_record(detail: &GameMapDetail) -> GameMapDetailRecord {
    GameMapDetailRecord {
        name: detail.name().to_string(),
        items: detail.items().to_vec(),
        monsters: detail.monsters().to_vec(),
        memo: detail.memo().to_string(),
        icon: detail.icon().to_string(),
        x: detail.point().x(),
        y: detail.point().y(),
        goto: detail.goto().to_string(),
        checked: detail.checked(),
        id: detail.id().to_string(),
    }
}

pub fn convert_to_game_map_shape_record(shape: &GameMapShape) -> GameMapShapeRecord {
    GameMapShapeRecord {
        name: shape.name().key().to_string(),
        thickness: shape.thickness().value(),
        color: shape.color().key().to_string(),
        fill: shape.fill(),
        scale_x: shape.scale().x(),
        scale_y: shape.scale().y(),
        angle: shape.angle().value(),
        flip: shape.flip(),
        progress: shape.progress().value(),
        x: shape.point().x(),
        y: shape.point().y(),
        id: shape.id().to_string(),
    }
}

pub fn convert_to_game_map_record(map: &GameMap) -> GameMapRecord {
    GameMapRecord {
        name: map.name().to_string(),
        game_map_details: map.details().map(convert_to_game_map_detail_record),
        game_map_shapes: map.shapes().map(convert_to_game_map_shape_record),
        image: map.image().to_string(),
        id: map.id().to_string(),
    }
}

pub fn convert_to_preparation_record(preparation: &Preparation) -> PreparationRecord {
    PreparationRecord {
        name: preparation.name().to_string(),
        materials: preparation.materials().to_vec(),
        categories: preparation.categories().to_vec(),
        checked: preparation.checked(),
        id: preparation.id().to_string(),
    }
}

pub fn convert_to_memo_record(memo: &Memo) -> MemoRecord {
    MemoRecord {
        title: memo.title().to_string(),
        text: memo.text().to_string(),
        checked: memo.checked(),
        id: memo.id().to_string(),
    }
}

pub fn convert_to_strategy_memo_record(memo: &StrategyMemo) -> StrategyMemoRecord {
    StrategyMemoRecord {
        game_name: memo.game_name().to_string(),
        game_maps: memo.game_maps().map(convert_to_game_map_record),
        preparations: memo.preparations().map(convert_to_preparation_record),
        memos: memo.memos().map(convert_to_memo_record),
        id: memo.id().to_string(),
    }
}

// =============================================================================
// Record -> Domain
// =============================================================================

/// Stored id, or a fresh one when the record carries none.
fn id_or_new<Id: Default>(id: &str, from_string: impl FnOnce(String) -> Id) -> Id {
    if id.is_empty() {
        Id::default()
    } else {
        from_string(id.to_string())
    }
}

pub fn convert_to_game_map_detail(record: &GameMapDetailRecord) -> GameMapDetail {
    GameMapDetail::from_parts(
        id_or_new(&record.id, GameMapDetailId::from_string),
        record.name.clone(),
        record.items.clone(),
        record.monsters.clone(),
        record.memo.clone(),
        record.icon.clone(),
        Point::new(record.x, record.y),
        GameMapId::from_string(record.goto.clone()),
        record.checked,
    )
}

pub fn convert_to_game_map_shape(record: &GameMapShapeRecord) -> GameMapShape {
    GameMapShape::from_parts(
        id_or_new(&record.id, GameMapShapeId::from_string),
        record.name.parse::<ShapeKind>().unwrap_or_default(),
        Thickness::new(record.thickness),
        record.color.parse::<ShapeColor>().unwrap_or_default(),
        record.fill,
        Scale::new(record.scale_x, record.scale_y),
        Angle::new(record.angle),
        record.flip,
        Progress::new(record.progress),
        Point::new(record.x, record.y),
    )
}

pub fn convert_to_game_map(record: &GameMapRecord) -> GameMap {
    GameMap::from_parts(
        id_or_new(&record.id, GameMapId::from_string),
        record.name.clone(),
        record
            .game_map_details
            .iter()
            .map(convert_to_game_map_detail)
            .collect::<ListWithId<_>>(),
        record
            .game_map_shapes
            .iter()
            .map(convert_to_game_map_shape)
            .collect::<ListWithId<_>>(),
        record.image.clone(),
    )
}

pub fn convert_to_preparation(record: &PreparationRecord) -> Preparation {
    Preparation::from_parts(
        id_or_new(&record.id, PreparationId::from_string),
        record.name.clone(),
        record.materials.clone(),
        record.categories.clone(),
        record.checked,
    )
}

pub fn convert_to_memo(record: &MemoRecord) -> Memo {
    Memo::from_parts(
        id_or_new(&record.id, MemoId::from_string),
        record.title.clone(),
        record.text.clone(),
        record.checked,
    )
}

pub fn convert_to_strategy_memo(record: &StrategyMemoRecord) -> StrategyMemo {
    StrategyMemo::from_parts(
        id_or_new(&record.id, StrategyMemoId::from_string),
        record.game_name.clone(),
        record.game_maps.iter().map(convert_to_game_map).collect(),
        record.preparations.iter().map(convert_to_preparation).collect(),
        record.memos.iter().map(convert_to_memo).collect(),
    )
}
