//! Use-case services driving the page.
//!
//! # Responsibility
//! - Own application state and route navigation events to renders.
//! - Keep hosts (browser bindings, CLI) decoupled from state details.
//!
//! # Invariants
//! - All state changes happen synchronously inside one `&mut self` call.
//! - Time is an explicit input (`now_ms`), never read from a global clock.

pub mod contact;
pub mod keyboard;
pub mod overlay;
pub mod portfolio_service;
