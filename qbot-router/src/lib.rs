//! # qbot-router
//!
//! Message routing and dispatch: [`select`] maps one inbound message to a
//! [`qbot_core::RouteDecision`] (command, key phrase, or fallback), and
//! [`Dispatcher`] executes the sends the decision calls for, isolating per-send
//! failures so the polling loop never stops.

pub mod config;
pub mod dispatch;
pub mod select;

pub use config::{KeyPhrase, RouterConfig};
pub use dispatch::{owner_notification, Dispatcher};
pub use select::{parse_command, select};
