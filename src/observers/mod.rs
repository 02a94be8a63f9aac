//! # View observers: the render boundary.
//!
//! This module provides the [`Observe`] trait and the non-blocking fan-out
//! that delivers every published [`ViewModel`](crate::ViewModel) to renderers
//! and other interested parties.
//!
//! ## Architecture
//! ```text
//! Controller ── publish(ViewModel) ──► ObserverSet::emit(&view)
//!                                          │ (Arc-clone per observer)
//!                                          ├────► [queue O1] ─► worker O1 ─► on_view()
//!                                          ├────► [queue O2] ─► worker O2 ─► on_view()
//!                                          └────► [queue ON] ─► worker ON ─► on_view()
//! ```
//!
//! ## Observer types
//! - **Renderers** - turn the snapshot into a visual tree
//! - **Passive observers** - logging, metrics, alerts ([`LogWriter`] with the
//!   `logging` feature)
//!
//! ## Implementing custom observers
//! ```no_run
//! use inputvisor::{Observe, ViewModel};
//! use async_trait::async_trait;
//!
//! struct ReadyGauge;
//!
//! #[async_trait]
//! impl Observe for ReadyGauge {
//!     async fn on_view(&self, view: &ViewModel) {
//!         if view.ready {
//!             // set gauge to view.total_count()
//!         }
//!     }
//! }
//! ```

mod observe;
mod set;

#[cfg(feature = "logging")]
mod log;

pub use observe::Observe;
pub use set::ObserverSet;

#[cfg(feature = "logging")]
pub use log::LogWriter;
