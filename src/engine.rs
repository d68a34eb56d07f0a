//! OrderEngine - the processing context for one fulfillment run.
//!
//! Owns the warehouse and the order log explicitly, so the per-line
//! pipeline (parse, allocate, record) is a plain method call that unit
//! tests can drive without any I/O behind it.

use std::io;

use tracing::{debug, trace};

use crate::order::{Order, OrderLine, OrderLog};
use crate::parse::{parse_order_line, parse_stock_line, RejectReason};
use crate::warehouse::Warehouse;

/// What became of one raw input line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Line was valid; an order record was allocated and logged
    Accepted,
    /// Line was discarded without side effects
    Rejected(RejectReason),
}

/// Validates raw order lines and applies them to the live inventory.
pub struct OrderEngine {
    warehouse: Warehouse,
    log: OrderLog,
}

impl OrderEngine {
    /// Engine over a pre-built warehouse
    pub fn with_warehouse(warehouse: Warehouse) -> Self {
        Self {
            warehouse,
            log: OrderLog::new(),
        }
    }

    /// Engine stocked from one initial-inventory line.
    ///
    /// A malformed line stocks whatever parsed before the first bad pair;
    /// an empty line yields an empty warehouse. Neither is an error.
    pub fn with_stock_line(line: &str) -> Self {
        let mut warehouse = Warehouse::new();
        for (product, count) in parse_stock_line(line) {
            warehouse.store(product, count);
        }
        Self::with_warehouse(warehouse)
    }

    /// Process one raw order line end to end.
    ///
    /// A valid line is allocated item by item against the live warehouse,
    /// assembled into an [`Order`], and appended to the log. Each item is
    /// independently all-or-nothing; the order as a whole is not
    /// transactional, so fulfilled and backlogged lines can coexist on one
    /// record. Invalid lines are dropped: no record, no log entry.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let request = match parse_order_line(line, &self.warehouse) {
            Ok(request) => request,
            Err(reason) => {
                debug!(?reason, line, "order line discarded");
                return LineOutcome::Rejected(reason);
            }
        };

        let mut order = Order::new(request.stream, request.header);
        for (product, quantity) in request.items {
            order.push(OrderLine::allocate(product, quantity, &mut self.warehouse));
        }

        trace!(
            stream = %order.stream,
            header = %order.header,
            lines = order.lines.len(),
            remaining = self.warehouse.total(),
            "order applied"
        );
        self.log.add(order);
        LineOutcome::Accepted
    }

    /// True iff the warehouse has been drained; the run's only
    /// data-driven stop condition
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.warehouse.is_empty()
    }

    /// The live inventory
    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    /// The order history so far
    pub fn log(&self) -> &OrderLog {
        &self.log
    }

    /// Write the fulfillment report for every logged order
    pub fn dump_report<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        self.log.dump(w)
    }
}

impl Default for OrderEngine {
    /// Fixed default stocking: two products, three units each
    fn default() -> Self {
        let mut warehouse = Warehouse::new();
        warehouse.store("A", 3);
        warehouse.store("B", 3);
        Self::with_warehouse(warehouse)
    }
}
