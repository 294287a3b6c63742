//! Aggregate roots - domain objects that own their related data
//!
//! Instead of porting Java/C# DDD patterns, we leverage Rust's strengths:
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Private fields + accessors |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Copy-with updates | `&self -> Self` methods |

pub mod strategy_memo;

pub use strategy_memo::StrategyMemo;
