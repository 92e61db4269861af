//! Host-side collaborator of the layout engine
//!
//! The engine never decides on its own which view was used most recently,
//! nor how a fresh root part is named. Both answers come from the host
//! through [`PartsLayoutAccessor`], injected when a layout is created.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default identity of the root part of a fresh layout.
pub const DEFAULT_ROOT_PART_ID: &str = "main";

/// Information the layout engine needs from its host.
///
/// Implementations must be side-effect free from the engine's point of view;
/// both methods may be called in the middle of a mutation.
pub trait PartsLayoutAccessor: Send + Sync {
    /// Returns when the view was last activated.
    ///
    /// Higher values mean more recent activation. Views that were never
    /// activated report 0.
    fn view_activation_instant(&self, view_id: &str) -> u64;

    /// Returns the id to use for the root part of a new or cleared layout.
    fn root_part_identity(&self) -> String;
}

/// In-memory activation history.
///
/// Hands out strictly increasing instants from a logical clock every time a
/// view is recorded as activated. Suitable for hosts without a richer source
/// of activation timestamps.
///
/// # Example
///
/// ```
/// use workbench_core::parts::{ActivationHistory, PartsLayoutAccessor};
///
/// let history = ActivationHistory::new();
/// history.record("view.1");
/// history.record("view.2");
///
/// assert!(history.view_activation_instant("view.2") > history.view_activation_instant("view.1"));
/// assert_eq!(history.view_activation_instant("view.3"), 0);
/// ```
#[derive(Debug)]
pub struct ActivationHistory {
    root_part_id: String,
    clock: AtomicU64,
    instants: Mutex<HashMap<String, u64>>,
}

impl ActivationHistory {
    /// Creates an empty history whose root part is named `main`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root_part_id(DEFAULT_ROOT_PART_ID)
    }

    /// Creates an empty history with a custom root part identity.
    #[must_use]
    pub fn with_root_part_id(root_part_id: impl Into<String>) -> Self {
        Self {
            root_part_id: root_part_id.into(),
            clock: AtomicU64::new(0),
            instants: Mutex::new(HashMap::new()),
        }
    }

    /// Records an activation of the view and returns its new instant.
    pub fn record(&self, view_id: &str) -> u64 {
        let instant = self.clock.fetch_add(1, Ordering::SeqCst) + 1;
        let mut instants = self
            .instants
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        instants.insert(view_id.to_string(), instant);
        tracing::trace!(view_id, instant, "Recorded view activation");
        instant
    }

    /// Records activations in the given order, oldest first.
    pub fn record_all<'a>(&self, view_ids: impl IntoIterator<Item = &'a str>) {
        for view_id in view_ids {
            self.record(view_id);
        }
    }
}

impl Default for ActivationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PartsLayoutAccessor for ActivationHistory {
    fn view_activation_instant(&self, view_id: &str) -> u64 {
        self.instants
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(view_id)
            .copied()
            .unwrap_or(0)
    }

    fn root_part_identity(&self) -> String {
        self.root_part_id.clone()
    }
}
