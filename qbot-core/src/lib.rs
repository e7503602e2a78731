//! # qbot-core
//!
//! Core types and traits for the key-phrase bot: [`Bot`], message and user types,
//! [`RouteDecision`], [`DispatchOutcome`], and tracing initialization. Transport-agnostic;
//! used by qbot-router and qbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{QbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, DispatchError, DispatchOutcome, Message, MessageDirection, RouteDecision, SendStage,
    ToCoreMessage, ToCoreUser, User,
};
