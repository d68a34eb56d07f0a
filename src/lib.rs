//! # Pickline
//!
//! An order-fulfillment simulator that tails a continuously-appended order
//! stream against a fixed-product inventory.
//!
//! ## Design Principles
//!
//! - **Single-Writer**: one control flow owns the warehouse and log (no locks)
//! - **Parse Once**: each raw line is tokenized exactly once into a tagged
//!   accept/reject result, so validation and application cannot disagree
//! - **All-or-Nothing Allocation**: a product request is fully pulled or
//!   fully backlogged, never split
//! - **Fail Closed**: pulling a never-stocked product rejects without
//!   inserting a phantom zero-stock entry
//!
//! ## Data Flow
//!
//! ```text
//! [Order Stream File] --> [LineFollower] --> [OrderEngine]
//!                                          parse -> allocate -> log
//!                                                     |
//!                                        [Report on depletion/shutdown]
//! ```

pub mod engine;
pub mod order;
pub mod parse;
pub mod tailer;
pub mod warehouse;

// Re-exports for convenience
pub use engine::{LineOutcome, OrderEngine};
pub use order::{Order, OrderLine, OrderLog};
pub use parse::{parse_order_line, parse_stock_line, OrderRequest, RejectReason, MAX_LINE_QTY};
pub use tailer::{follow, FollowConfig, LineFollower, RunOutcome, TailError};
pub use warehouse::{ProductKey, Warehouse};
