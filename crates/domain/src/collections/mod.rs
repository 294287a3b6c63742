//! Ordered, id-addressed collections
//!
//! Every operation returns a new collection and leaves the receiver untouched.
//! Operations addressed at an id that is not present are silent no-ops that
//! return an equal collection, so stale UI events never fail.

mod id_list;
mod list_with_id;

pub use id_list::IdList;
pub use list_with_id::{HasId, ListWithId};
