//! Line parsing - a single tokenizing pass per raw order line.
//!
//! One scan produces a tagged result: either a structured [`OrderRequest`]
//! ready for allocation, or a [`RejectReason`]. Validation and application
//! therefore cannot drift apart, which they could when each phase
//! re-tokenized the line for itself.

use crate::warehouse::{ProductKey, Warehouse};

/// Maximum quantity a single product request may carry
pub const MAX_LINE_QTY: u64 = 5;

/// A validated order line, ready to allocate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRequest {
    /// Stream token
    pub stream: String,
    /// Header token
    pub header: String,
    /// (product, quantity) pairs in line order
    pub items: Vec<(ProductKey, u64)>,
}

/// Why a raw line was discarded.
///
/// A rejection is a normal, expected outcome of the stream format, not a
/// fault; rejected lines are dropped without side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RejectReason {
    /// Stream or header token missing
    MissingHeader = 0,
    /// A request exceeds [`MAX_LINE_QTY`]
    QuantityTooLarge = 1,
    /// A request names a product the warehouse has never stocked
    UnknownProduct = 2,
    /// No request with a positive quantity was present
    NoPositiveQuantity = 3,
}

/// Parse one raw order line against the warehouse's product catalog.
///
/// Token layout: `<stream> <header> (<product> <quantity>)*`, whitespace
/// separated. Pair scanning stops at the first malformed pair (a trailing
/// odd token or an unparsable quantity); the pairs read up to that point
/// are what gets validated.
///
/// The whole line is rejected if any scanned quantity exceeds
/// [`MAX_LINE_QTY`], if any scanned product is unknown to the warehouse,
/// or if no scanned pair has a positive quantity.
pub fn parse_order_line(line: &str, warehouse: &Warehouse) -> Result<OrderRequest, RejectReason> {
    let mut tokens = line.split_whitespace();

    let stream = tokens.next().ok_or(RejectReason::MissingHeader)?;
    let header = tokens.next().ok_or(RejectReason::MissingHeader)?;

    let mut items: Vec<(ProductKey, u64)> = Vec::new();
    let mut has_positive = false;

    while let Some(product) = tokens.next() {
        // A missing or non-numeric quantity ends the scan, it does not
        // reject what was already read.
        let quantity = match tokens.next().and_then(|t| t.parse::<u64>().ok()) {
            Some(q) => q,
            None => break,
        };

        if quantity > MAX_LINE_QTY {
            return Err(RejectReason::QuantityTooLarge);
        }
        if !warehouse.has_product(product) {
            return Err(RejectReason::UnknownProduct);
        }
        if quantity > 0 {
            has_positive = true;
        }
        items.push((product.to_string(), quantity));
    }

    if !has_positive {
        return Err(RejectReason::NoPositiveQuantity);
    }

    Ok(OrderRequest {
        stream: stream.to_string(),
        header: header.to_string(),
        items,
    })
}

/// Parse an initial-stocking line: `(<product> <quantity>)*`.
///
/// Silently truncates at the first malformed pair; an empty or fully
/// malformed line yields no stock at all.
pub fn parse_stock_line(line: &str) -> Vec<(ProductKey, u64)> {
    let mut tokens = line.split_whitespace();
    let mut pairs = Vec::new();

    while let Some(product) = tokens.next() {
        let quantity = match tokens.next().and_then(|t| t.parse::<u64>().ok()) {
            Some(q) => q,
            None => break,
        };
        pairs.push((product.to_string(), quantity));
    }

    pairs
}
