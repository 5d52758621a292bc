//! [`HpoTermId`] and [`HpoGroup`], the term identifiers and term sets
//! that everything else in this crate operates on

mod group;
mod hpotermid;
pub(crate) mod internal;

pub use group::{HpoGroup, HpoTermIds};
pub use hpotermid::HpoTermId;
