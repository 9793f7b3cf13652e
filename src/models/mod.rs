//! Records and request payloads for the admin account and portfolio content.

pub mod admin;
pub mod bio;
pub mod book;
pub mod contact;
pub mod picture;
pub mod project;

pub use admin::*;
pub use bio::*;
pub use book::*;
pub use contact::*;
pub use picture::*;
pub use project::*;
