//! Token search over maps, map details, preparations and memos
//!
//! An item matches when any token is a case-sensitive substring of any of
//! its searchable fields. An empty token list matches everything and returns
//! the input unchanged. Tokens come from [`crate::common::query_tokens`].

use crate::entities::{
    GameMapDetail, GameMapDetailList, GameMapList, Memo, MemoList, Preparation, PreparationList,
};

fn any_token_in<'a>(tokens: &[String], fields: impl IntoIterator<Item = &'a str>) -> bool {
    let fields: Vec<&str> = fields.into_iter().collect();
    tokens
        .iter()
        .any(|token| fields.iter().any(|field| field.contains(token.as_str())))
}

fn detail_matches(detail: &GameMapDetail, tokens: &[String]) -> bool {
    let fields = std::iter::once(detail.name())
        .chain(detail.items().iter().map(String::as_str))
        .chain(detail.monsters().iter().map(String::as_str))
        .chain(std::iter::once(detail.memo()));
    any_token_in(tokens, fields)
}

fn preparation_matches(preparation: &Preparation, tokens: &[String]) -> bool {
    let fields = std::iter::once(preparation.name())
        .chain(preparation.materials().iter().map(String::as_str))
        .chain(preparation.categories().iter().map(String::as_str));
    any_token_in(tokens, fields)
}

fn memo_matches(memo: &Memo, tokens: &[String]) -> bool {
    any_token_in(tokens, [memo.title(), memo.text()])
}

pub fn filtered_game_map_details(details: &GameMapDetailList, tokens: &[String]) -> GameMapDetailList {
    if tokens.is_empty() {
        return details.clone();
    }
    details.filter(|detail| detail_matches(detail, tokens))
}

/// Filter every map's details; maps themselves are always kept.
pub fn filtered_game_maps(maps: &GameMapList, tokens: &[String]) -> GameMapList {
    if tokens.is_empty() {
        return maps.clone();
    }
    maps.map_items(|map| {
        map.clone()
            .with_details(filtered_game_map_details(map.details(), tokens))
    })
}

pub fn filtered_preparations(preparations: &PreparationList, tokens: &[String]) -> PreparationList {
    if tokens.is_empty() {
        return preparations.clone();
    }
    preparations.filter(|preparation| preparation_matches(preparation, tokens))
}

pub fn filtered_memos(memos: &MemoList, tokens: &[String]) -> MemoList {
    if tokens.is_empty() {
        return memos.clone();
    }
    memos.filter(|memo| memo_matches(memo, tokens))
}

/// Preparations that carry `category` among their categories, i.e. the ones
/// that can be used as that material.
pub fn filtered_preparations_that_can_be_used_as_material(
    preparations: &PreparationList,
    category: &str,
) -> PreparationList {
    preparations.filter(|preparation| preparation.categories().iter().any(|c| c == category))
}

/// Preparations that list `material` as an input, or are named `material`.
pub fn filtered_preparations_accepting_material(
    preparations: &PreparationList,
    material: &str,
) -> PreparationList {
    preparations.filter(|preparation| {
        preparation.name() == material || preparation.materials().iter().any(|m| m == material)
    })
}

pub fn filtered_names_that_can_be_used_as_material(
    preparations: &PreparationList,
    category: &str,
) -> Vec<String> {
    filtered_preparations_that_can_be_used_as_material(preparations, category)
        .map(|preparation| preparation.name().to_string())
}

pub fn filtered_names_accepting_material(
    preparations: &PreparationList,
    material: &str,
) -> Vec<String> {
    filtered_preparations_accepting_material(preparations, material)
        .map(|preparation| preparation.name().to_string())
}
