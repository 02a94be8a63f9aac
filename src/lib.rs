//! # inputvisor
//!
//! **Inputvisor** is a small event-driven library that maintains the render-ready
//! state for a node's input listing: which data-ingestion inputs are configured,
//! split into **global** (active cluster-wide) and **local** (active only on the
//! viewed node) groups, each sorted in natural title order.
//!
//! It bridges two independent push-based feeds - an input registry and a
//! current-node descriptor - into one consistent snapshot, and gates
//! presentation until all required state has arrived at least once.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌───────────────────┐          ┌───────────────────┐
//!   │  inputs producer  │          │   node producer   │
//!   │ (registry client) │          │ (cluster client)  │
//!   └───────┬───────────┘          └────────┬──────────┘
//!           │ publish(InputsSnapshot)       │ publish(NodeSnapshot)
//!           ▼                               ▼
//!   ┌───────────────────┐          ┌───────────────────┐
//!   │ Feed<InputsSnap.> │          │ Feed<NodeSnapshot>│   (broadcast channels,
//!   │     (FeedBus)     │          │     (FeedBus)     │    refresh side channel)
//!   └───────┬───────────┘          └────────┬──────────┘
//!           │ subscribe / request_refresh   │
//!           └───────────────┬───────────────┘
//!                           ▼
//!             ┌───────────────────────────┐
//!             │   InputListController     │
//!             │   - PartitionedState      │  (tri-state fields,
//!             │   - split + natural sort  │   full recompute per emission)
//!             │   - loading gate          │
//!             └───────┬──────────┬────────┘
//!                     │          │
//!        watch::Receiver     ObserverSet
//!        <ViewModel>         (per-observer queues)
//!                     │          ├──► renderer
//!                     ▼          └──► LogWriter, metrics, ...
//!                  host UI
//! ```
//!
//! ### Lifecycle
//! ```text
//! builder(cfg, inputs_feed, node_feed) ──► InputListController ──► run(token)
//!
//! event loop:
//!   ├─► subscribe to both feeds
//!   ├─► request_refresh() once on each (fire-and-forget)
//!   └─► loop {
//!         select! {
//!           token.cancelled()      ─► release subscriptions, exit
//!           inputs emission        ─► split into global/local, natural sort,
//!                                     publish complete ViewModel
//!           node emission          ─► store node, publish complete ViewModel
//!         }
//!       }
//!
//! loading gate: ready ⇔ global inputs, local inputs, and node all Loaded
//! (an empty input group counts as loaded; only "never received" blocks)
//! ```
//!
//! ## Features
//! | Area           | Description                                                  | Key types / traits                        |
//! |----------------|--------------------------------------------------------------|-------------------------------------------|
//! | **Feeds**      | Push-based sources with subscribe/refresh operations.        | [`Feed`], [`FeedBus`], [`FeedSubscription`] |
//! | **Model**      | Input/node entities and the feed emission payloads.          | [`Input`], [`InputScope`], [`Node`]       |
//! | **Partition**  | Scope split and natural title ordering (pure functions).     | [`split_inputs`], [`natural_cmp`]         |
//! | **Controller** | Two-feed synchronization, loading gate, atomic publication.  | [`InputListController`], [`ViewModel`]    |
//! | **Observers**  | Non-blocking fan-out of view updates to renderers.           | [`Observe`], [`ObserverSet`]              |
//! | **Errors**     | Typed errors for subscriptions and controller lifecycle.     | [`FeedError`], [`ControllerError`]        |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use inputvisor::{
//!     Config, FeedBus, Input, InputListController, InputScope, InputsSnapshot, Node,
//!     NodeSnapshot,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = Config::default();
//!
//!     let inputs_bus = FeedBus::<InputsSnapshot>::new(cfg.bus_capacity_clamped());
//!     let node_bus = FeedBus::<NodeSnapshot>::new(cfg.bus_capacity_clamped());
//!
//!     let controller = InputListController::builder(
//!         cfg,
//!         Arc::new(inputs_bus.clone()),
//!         Arc::new(node_bus.clone()),
//!     )
//!     .build();
//!
//!     let mut view = controller.watch();
//!     let token = CancellationToken::new();
//!     let _loop = controller.run(token.clone())?;
//!
//!     // Producer side: answer the initial refresh requests.
//!     inputs_bus.refresh_requested().await;
//!     inputs_bus.publish(InputsSnapshot::new(vec![Input::new(
//!         "in-1",
//!         "gelf udp",
//!         InputScope::Global,
//!     )]));
//!     node_bus.publish(NodeSnapshot::new(Node::new("node-1")));
//!
//!     // Consumer side: wait until the loading gate opens.
//!     while view.changed().await.is_ok() {
//!         let snapshot = view.borrow_and_update().clone();
//!         if snapshot.ready {
//!             println!("global={} local={}", snapshot.global_count(), snapshot.local_count());
//!             break;
//!         }
//!     }
//!
//!     token.cancel();
//!     Ok(())
//! }
//! ```
mod config;
mod error;
mod feeds;
mod model;
mod observers;
mod partition;

mod core;

// ---- Public re-exports ----

pub use config::{Config, CREATE_INPUTS};
pub use crate::core::{ControllerBuilder, InputListController, Loadable, PartitionedState, ViewModel};
pub use error::{ControllerError, FeedError};
pub use feeds::{Feed, FeedBus, FeedSubscription};
pub use model::{Input, InputScope, InputsSnapshot, Node, NodeSnapshot};
pub use observers::{Observe, ObserverSet};
pub use partition::{natural_cmp, split_inputs};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
