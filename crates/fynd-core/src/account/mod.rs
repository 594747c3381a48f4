//! User account domain module.
//!
//! # Module Structure
//!
//! - `model`: stored document shape, partial updates and the typed account view
//! - `gender`: the two-valued gender tag used for matching
//! - `dob`: date-of-birth parsing and age derivation
//! - `avatar`: fixed avatar key → asset mapping and random assignment
//! - `language`: selectable language tags
//! - `repository`: the remote document store port
//!
//! # Usage
//!
//! ```ignore
//! use fynd_core::account::{UserAccount, UserDocument, UserStore, UserQuery};
//! ```

pub mod avatar;
mod dob;
mod gender;
pub mod language;
mod model;
mod repository;

pub use dob::{age_on, parse_dob};
pub use gender::Gender;
pub use model::{UserAccount, UserDocument, UserUpdate};
pub use repository::{StoredUser, UserQuery, UserStore};
