//! Defensive reconstruction of records from untyped JSON
//!
//! Each field is kept when present with the expected JSON type and replaced
//! by a default otherwise. Entities without an id get a fresh one. Nothing
//! here can fail.

use serde_json::{Map, Value};
use stratmemo_domain::{Angle, Point, Progress, Scale, ShapeColor, ShapeKind, Thickness};
use uuid::Uuid;

use super::{
    GameMapDetailRecord, GameMapRecord, GameMapShapeRecord, MemoRecord, PreparationRecord,
    StrategyMemoRecord,
};

/// Read-only view over a JSON object; non-objects behave like `{}`.
struct Fields<'a> {
    object: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    fn of(value: &'a Value) -> Self {
        Self {
            object: value.as_object(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.and_then(|object| object.get(key))
    }

    fn malformed(&self, key: &str) {
        if self.get(key).is_some() {
            tracing::warn!(field = key, "Resetting malformed record field");
        }
    }

    fn string(&self, key: &str) -> String {
        self.string_or(key, "")
    }

    fn string_or(&self, key: &str, default: &str) -> String {
        match self.get(key).and_then(Value::as_str) {
            Some(value) => value.to_string(),
            None => {
                self.malformed(key);
                default.to_string()
            }
        }
    }

    fn number_or(&self, key: &str, default: f64) -> f64 {
        match self.get(key).and_then(Value::as_f64) {
            Some(value) => value,
            None => {
                self.malformed(key);
                default
            }
        }
    }

    fn bool(&self, key: &str) -> bool {
        match self.get(key).and_then(Value::as_bool) {
            Some(value) => value,
            None => {
                self.malformed(key);
                false
            }
        }
    }

    /// Non-string elements are dropped.
    fn strings(&self, key: &str) -> Vec<String> {
        match self.get(key).and_then(Value::as_array) {
            Some(values) => values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => {
                self.malformed(key);
                Vec::new()
            }
        }
    }

    /// Each element is migrated with `copy`; non-object elements become `{}`.
    fn records<T>(&self, key: &str, copy: impl Fn(&Value) -> T) -> Vec<T> {
        match self.get(key).and_then(Value::as_array) {
            Some(values) => values.iter().map(copy).collect(),
            None => {
                self.malformed(key);
                Vec::new()
            }
        }
    }

    /// The stored id when it is a non-empty string, otherwise a fresh one.
    fn id(&self) -> String {
        match self.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        }
    }
}

impl GameMapDetailRecord {
    pub fn copied(value: &Value) -> Self {
        let fields = Fields::of(value);
        Self {
            name: fields.string("name"),
            items: fields.strings("items"),
            monsters: fields.strings("monsters"),
            memo: fields.string("memo"),
            icon: fields.string("icon"),
            x: fields.number_or("x", 0.0),
            y: fields.number_or("y", 0.0),
            goto: fields.string("goto"),
            checked: fields.bool("checked"),
            id: fields.id(),
        }
    }
}

impl GameMapShapeRecord {
    pub fn copied(value: &Value) -> Self {
        let fields = Fields::of(value);
        let scale = Scale::default();
        let point = Point::center();
        Self {
            name: fields.string_or("name", ShapeKind::default().key()),
            thickness: fields.number_or("thickness", Thickness::default().value()),
            color: fields.string_or("color", ShapeColor::default().key()),
            fill: fields.bool("fill"),
            scale_x: fields.number_or("scaleX", scale.x()),
            scale_y: fields.number_or("scaleY", scale.y()),
            angle: fields.number_or("angle", Angle::default().value()),
            flip: fields.bool("flip"),
            progress: fields.number_or("progress", Progress::default().value()),
            x: fields.number_or("x", point.x()),
            y: fields.number_or("y", point.y()),
            id: fields.id(),
        }
    }
}

impl GameMapRecord {
    pub fn copied(value: &Value) -> Self {
        let fields = Fields::of(value);
        Self {
            name: fields.string("name"),
            game_map_details: fields.records("gameMapDetails", GameMapDetailRecord::copied),
            game_map_shapes: fields.records("gameMapShapes", GameMapShapeRecord::copied),
            image: fields.string("image"),
            id: fields.id(),
        }
    }
}

impl PreparationRecord {
    pub fn copied(value: &Value) -> Self {
        let fields = Fields::of(value);
        Self {
            name: fields.string("name"),
            materials: fields.strings("materials"),
            categories: fields.strings("categories"),
            checked: fields.bool("checked"),
            id: fields.id(),
        }
    }
}

impl MemoRecord {
    pub fn copied(value: &Value) -> Self {
        let fields = Fields::of(value);
        Self {
            title: fields.string("title"),
            text: fields.string("text"),
            checked: fields.bool("checked"),
            id: fields.id(),
        }
    }
}

impl StrategyMemoRecord {
    /// Rebuild a complete record from any JSON value.
    ///
    /// `null`, `{}` or any non-object yield an empty record with a fresh id.
    pub fn copied(value: &Value) -> Self {
        let fields = Fields::of(value);
        Self {
            game_name: fields.string("gameName"),
            game_maps: fields.records("gameMaps", GameMapRecord::copied),
            preparations: fields.records("preparations", PreparationRecord::copied),
            memos: fields.records("memos", MemoRecord::copied),
            id: fields.id(),
        }
    }
}

/// Structural guard applied before accepting imported or pasted data.
///
/// The top level must be an object; `gameName` must be a string and the
/// three entity lists must be arrays whenever they are present.
pub fn is_strategy_memo_record(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    let string_or_absent = |key: &str| object.get(key).map_or(true, Value::is_string);
    let array_or_absent = |key: &str| object.get(key).map_or(true, Value::is_array);
    string_or_absent("gameName")
        && array_or_absent("gameMaps")
        && array_or_absent("preparations")
        && array_or_absent("memos")
}
