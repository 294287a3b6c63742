//! Records - primitive-only mirrors of the domain model
//!
//! Records are what gets written to storage, exported to files and copied
//! to the clipboard. Every field is a string, number, boolean or list of
//! strings; value objects are flattened (a point becomes `x`/`y`, a scale
//! becomes `scaleX`/`scaleY`).
//!
//! Reading is defensive: [`StrategyMemoRecord::copied`] accepts any JSON
//! value and never fails, resetting malformed fields to defaults.

mod convert;
mod migration;

pub use convert::{
    convert_to_game_map, convert_to_game_map_detail, convert_to_game_map_detail_record,
    convert_to_game_map_record, convert_to_game_map_shape, convert_to_game_map_shape_record,
    convert_to_memo, convert_to_memo_record, convert_to_preparation,
    convert_to_preparation_record, convert_to_strategy_memo, convert_to_strategy_memo_record,
};
pub use migration::is_strategy_memo_record;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMapDetailRecord {
    pub name: String,
    pub items: Vec<String>,
    pub monsters: Vec<String>,
    pub memo: String,
    pub icon: String,
    pub x: f64,
    pub y: f64,
    /// Linked map id; empty when the marker links nowhere
    pub goto: String,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMapShapeRecord {
    pub name: String,
    pub thickness: f64,
    pub color: String,
    pub fill: bool,
    pub scale_x: f64,
    pub scale_y: f64,
    pub angle: f64,
    pub flip: bool,
    pub progress: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMapRecord {
    pub name: String,
    pub game_map_details: Vec<GameMapDetailRecord>,
    pub game_map_shapes: Vec<GameMapShapeRecord>,
    /// Background as a base64 data URL, or empty
    pub image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationRecord {
    pub name: String,
    pub materials: Vec<String>,
    pub categories: Vec<String>,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoRecord {
    pub title: String,
    pub text: String,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// Top-level persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyMemoRecord {
    pub game_name: String,
    pub game_maps: Vec<GameMapRecord>,
    pub preparations: Vec<PreparationRecord>,
    pub memos: Vec<MemoRecord>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl StrategyMemoRecord {
    /// The record for export files: list ids are dropped and re-derived on
    /// import. Map ids stay because marker links refer to them.
    pub fn without_list_ids(&self) -> Self {
        Self {
            game_maps: self
                .game_maps
                .iter()
                .map(|map| GameMapRecord {
                    game_map_details: map
                        .game_map_details
                        .iter()
                        .map(|detail| GameMapDetailRecord {
                            id: String::new(),
                            ..detail.clone()
                        })
                        .collect(),
                    game_map_shapes: map
                        .game_map_shapes
                        .iter()
                        .map(|shape| GameMapShapeRecord {
                            id: String::new(),
                            ..shape.clone()
                        })
                        .collect(),
                    ..map.clone()
                })
                .collect(),
            preparations: self
                .preparations
                .iter()
                .map(|preparation| PreparationRecord {
                    id: String::new(),
                    ..preparation.clone()
                })
                .collect(),
            memos: self
                .memos
                .iter()
                .map(|memo| MemoRecord {
                    id: String::new(),
                    ..memo.clone()
                })
                .collect(),
            id: String::new(),
            game_name: self.game_name.clone(),
        }
    }
}
