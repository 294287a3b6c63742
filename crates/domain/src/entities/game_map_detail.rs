//! Point of interest marked on a map board

use crate::collections::HasId;
use crate::common::split_list;
use crate::ids::{GameMapDetailId, GameMapId};
use crate::value_objects::Point;

/// A named marker with the items, monsters and notes found there
///
/// `goto` optionally links the marker to another map. An empty id, or the id
/// of the map that owns the marker, means "no link".
#[derive(Debug, Clone, PartialEq)]
pub struct GameMapDetail {
    id: GameMapDetailId,
    name: String,
    items: Vec<String>,
    monsters: Vec<String>,
    memo: String,
    icon: String,
    point: Point,
    goto: GameMapId,
    checked: bool,
}

/// Raw form values as typed by the user
///
/// Lists are comma separated and coordinates are unparsed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailInput {
    pub name: String,
    pub items: String,
    pub monsters: String,
    pub memo: String,
    pub icon: String,
    pub x: String,
    pub y: String,
    pub goto: Option<GameMapId>,
}

impl GameMapDetail {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GameMapDetailId::new(),
            name: name.into(),
            items: Vec::new(),
            monsters: Vec::new(),
            memo: String::new(),
            icon: String::new(),
            point: Point::default(),
            goto: GameMapId::from_string(""),
            checked: false,
        }
    }

    /// Reconstruct from stored data
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: GameMapDetailId,
        name: String,
        items: Vec<String>,
        monsters: Vec<String>,
        memo: String,
        icon: String,
        point: Point,
        goto: GameMapId,
        checked: bool,
    ) -> Self {
        Self {
            id,
            name,
            items,
            monsters,
            memo,
            icon,
            point,
            goto,
            checked,
        }
    }

    /// Build a fresh marker from form input.
    pub fn from_input(input: DetailInput) -> Self {
        Self::new("").with_input(input)
    }

    /// Apply form input, keeping the id and checked state.
    ///
    /// Name and icon are trimmed, lists are split on comma variants and
    /// coordinates that do not parse as finite numbers become 0.
    pub fn with_input(self, input: DetailInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            items: split_list(&input.items),
            monsters: split_list(&input.monsters),
            memo: input.memo,
            icon: input.icon.trim().to_string(),
            point: Point::new(parse_coordinate(&input.x), parse_coordinate(&input.y)),
            goto: input.goto.unwrap_or_else(|| GameMapId::from_string("")),
            ..self
        }
    }

    // Read-only accessors

    pub fn id(&self) -> &GameMapDetailId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn monsters(&self) -> &[String] {
        &self.monsters
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn goto(&self) -> &GameMapId {
        &self.goto
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// The linked map, unless the link is empty or points back at `owner`.
    pub fn link_target(&self, owner: &GameMapId) -> Option<&GameMapId> {
        if self.goto.is_empty() || &self.goto == owner {
            None
        } else {
            Some(&self.goto)
        }
    }

    // Builder-style methods

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    pub fn with_monsters(mut self, monsters: Vec<String>) -> Self {
        self.monsters = monsters;
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.point = point;
        self
    }

    pub fn with_goto(mut self, goto: GameMapId) -> Self {
        self.goto = goto;
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Copy with a newly minted id.
    pub fn duplicated(&self) -> Self {
        Self {
            id: GameMapDetailId::new(),
            ..self.clone()
        }
    }
}

impl HasId for GameMapDetail {
    type Id = GameMapDetailId;

    fn id(&self) -> &GameMapDetailId {
        &self.id
    }
}

fn parse_coordinate(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> DetailInput {
        DetailInput {
            name: "  Old Well ".to_string(),
            items: "rope, lantern、key，".to_string(),
            monsters: "bat".to_string(),
            memo: "check at night".to_string(),
            icon: " 🗝 ".to_string(),
            x: "42.5".to_string(),
            y: "oops".to_string(),
            goto: None,
        }
    }

    #[test]
    fn test_from_input_normalizes_fields() {
        let detail = GameMapDetail::from_input(input());
        assert_eq!(detail.name(), "Old Well");
        assert_eq!(detail.items(), ["rope", "lantern", "key"]);
        assert_eq!(detail.monsters(), ["bat"]);
        assert_eq!(detail.icon(), "🗝");
        assert_eq!(detail.point(), Point::new(42.5, 0.0));
        assert!(detail.goto().is_empty());
    }

    #[test]
    fn test_with_input_keeps_identity() {
        let detail = GameMapDetail::new("x").with_checked(true);
        let edited = detail.clone().with_input(input());
        assert_eq!(edited.id(), detail.id());
        assert!(edited.checked());
    }

    #[test]
    fn test_out_of_range_coordinates_clamp() {
        let detail = GameMapDetail::from_input(DetailInput {
            x: "250".to_string(),
            y: "-3".to_string(),
            ..DetailInput::default()
        });
        assert_eq!(detail.point(), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_builders_keep_id() {
        let detail = GameMapDetail::new("Cave");
        let id = detail.id().clone();
        let updated = detail.with_memo("boss inside").with_icon("💀");
        assert_eq!(updated.id(), &id);
        assert_eq!(updated.memo(), "boss inside");
    }

    #[test]
    fn test_duplicated_mints_new_id() {
        let detail = GameMapDetail::new("Cave").with_items(vec!["torch".to_string()]);
        let copy = detail.duplicated();
        assert_ne!(copy.id(), detail.id());
        assert_eq!(copy.items(), detail.items());
    }

    #[test]
    fn test_link_target() {
        let owner = GameMapId::from_string("m1");
        let other = GameMapId::from_string("m2");
        let detail = GameMapDetail::new("Stairs");
        assert_eq!(detail.link_target(&owner), None);
        assert_eq!(detail.clone().with_goto(owner.clone()).link_target(&owner), None);
        assert_eq!(
            detail.with_goto(other.clone()).link_target(&owner),
            Some(&other)
        );
    }
}
