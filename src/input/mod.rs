//! Input adapters that drive a [`Session`](crate::controllers::interactive::session::Session).

#[cfg(feature = "gui")]
pub mod gui;
