//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the reconciliation loop: polling, re-scheduling and
//! broadcast fan-out.

pub mod dispatch;
pub mod inbound;
pub mod recipients;
pub mod reconcile;
pub mod schedule;
pub mod state;

pub use dispatch::{DispatchReport, Dispatcher};
pub use inbound::{
    classify_message, handle_inbound, is_membership_added, ChatKind, InboundEvent,
};
pub use recipients::RecipientRegistry;
pub use reconcile::{LoopTiming, Reconciler, ReconcilerHandle, RefreshOutcome};
pub use schedule::{period_of, IntervalScheduler, Trigger, TriggerId};
pub use state::SnapshotStore;
