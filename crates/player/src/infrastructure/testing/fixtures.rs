//! Simple test fixtures used across unit tests.

use stratmemo_domain::{GameMap, GameMapDetail, Memo, Preparation, StrategyMemo};

/// A small memo touching every collection.
pub fn sample_strategy_memo(game_name: &str) -> StrategyMemo {
    let map = GameMap::new("World");
    StrategyMemo::new(game_name)
        .added_game_map(map.clone())
        .added_game_map_detail(map.id(), GameMapDetail::new("Castle"))
        .added_preparation(Preparation::new("Potion"))
        .added_memo(Memo::new("Boss", "weak to fire"))
}
