//! Order types - line results, order records, and the append-only log.
//!
//! An [`OrderLine`] is the outcome of allocating one (product, quantity)
//! request. An [`Order`] groups the lines of one raw input line. The
//! [`OrderLog`] is the insertion-ordered history dumped at termination.

use std::fmt;
use std::io;

use crate::warehouse::{ProductKey, Warehouse};

/// Result of allocating a single product request against the warehouse.
///
/// Allocation is all-or-nothing: either the full requested quantity was
/// pulled, or the full quantity went to backlog. `pulled + backlog`
/// always equals `requested`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderLine {
    /// Product the request names
    pub product: ProductKey,
    /// Quantity the order asked for
    pub requested: u64,
    /// Quantity actually removed from stock (0 or `requested`)
    pub pulled: u64,
    /// Unfulfilled quantity (`requested` or 0)
    pub backlog: u64,
}

impl OrderLine {
    /// Allocate `requested` units of `product` from `warehouse`.
    ///
    /// On success the line is fully pulled; on shortfall the warehouse is
    /// left untouched and the line is fully backlogged. A shortfall is a
    /// recorded outcome, not an error.
    pub fn allocate(product: impl Into<ProductKey>, requested: u64, warehouse: &mut Warehouse) -> Self {
        let product = product.into();
        if warehouse.pull(&product, requested) {
            Self {
                product,
                requested,
                pulled: requested,
                backlog: 0,
            }
        } else {
            Self {
                product,
                requested,
                pulled: 0,
                backlog: requested,
            }
        }
    }

    /// True iff the full request was pulled from stock
    #[inline]
    pub fn is_fulfilled(&self) -> bool {
        self.pulled == self.requested
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}/{}%{}",
            self.product, self.requested, self.pulled, self.backlog
        )
    }
}

/// A named order: stream id, header id, and its allocated lines.
///
/// Lines sit in parse order. Header reuse across a stream is not policed
/// here; the record only cares what it was asked to hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    /// Stream the order arrived on
    pub stream: String,
    /// Order header id within the stream
    pub header: String,
    /// Allocated line results, in parse order
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Create an empty order record for `stream`/`header`
    pub fn new(stream: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            stream: stream.into(),
            header: header.into(),
            lines: Vec::new(),
        }
    }

    /// Append an allocated line result
    pub fn push(&mut self, line: OrderLine) {
        self.lines.push(line);
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}: ", self.stream, self.header)?;
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Append-only, insertion-ordered history of completed orders.
///
/// Grows monotonically; never trimmed. Dumped once when processing stops.
#[derive(Debug, Default)]
pub struct OrderLog {
    orders: Vec<Order>,
}

impl OrderLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed order
    pub fn add(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Number of recorded orders
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True iff nothing has been recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate recorded orders in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Write the report, one line per order in log order
    pub fn dump<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        for order in &self.orders {
            writeln!(w, "{order}")?;
        }
        Ok(())
    }
}
