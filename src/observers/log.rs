//! # Simple logging observer for debugging and demos.
//!
//! [`LogWriter`] prints view transitions to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [view] loading
//! [view] ready node=node-1 global=2 local=5 can_create=true
//! ```

use async_trait::async_trait;

use crate::core::ViewModel;

use super::Observe;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints a one-line description of every
/// published view snapshot for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Observe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Observe for LogWriter {
    async fn on_view(&self, view: &ViewModel) {
        if !view.ready {
            println!("[view] loading");
            return;
        }
        println!(
            "[view] ready node={} global={} local={} can_create={}",
            view.node.as_ref().map_or("?", |n| n.id.as_str()),
            view.global_count(),
            view.local_count(),
            view.can_create,
        );
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
