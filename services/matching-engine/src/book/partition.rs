//! One shard of the order book
//!
//! A partition holds a buy list and a sell list, both singly linked through
//! the partition's arena. New orders are pushed at the head, so each list runs
//! from the most recent submission to the oldest. Lists are not price sorted.

use types::ids::Ticker;
use types::numeric::{Price, Quantity};
use types::order::{OrderRequest, Side};

use super::arena::{OrderArena, OrderHandle, RestingOrder};

/// Price and remaining quantity of a list head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadQuote {
    pub limit_price: Price,
    pub quantity: Quantity,
}

/// Buy and sell lists for every ticker hashing to one index
#[derive(Debug, Clone)]
pub struct Partition {
    index: usize,
    orders: OrderArena,
    buy_head: Option<OrderHandle>,
    sell_head: Option<OrderHandle>,
}

impl Partition {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            orders: OrderArena::new(),
            buy_head: None,
            sell_head: None,
        }
    }

    fn head_slot(&mut self, side: Side) -> &mut Option<OrderHandle> {
        match side {
            Side::BUY => &mut self.buy_head,
            Side::SELL => &mut self.sell_head,
        }
    }

    /// Head handle of a side list
    pub fn head_handle(&self, side: Side) -> Option<OrderHandle> {
        match side {
            Side::BUY => self.buy_head,
            Side::SELL => self.sell_head,
        }
    }

    /// Head order of a side list (the most recent resting order)
    pub fn head(&self, side: Side) -> Option<&RestingOrder> {
        self.head_handle(side).and_then(|h| self.orders.get(h))
    }

    /// Link a new order as the head of its side list
    pub fn push_front(&mut self, request: OrderRequest) -> OrderHandle {
        let side = request.side;
        let next = self.head_handle(side);
        let handle = self.orders.insert(RestingOrder {
            side,
            ticker: request.ticker,
            quantity: request.quantity,
            limit_price: request.limit_price,
            next,
        });
        *self.head_slot(side) = Some(handle);
        handle
    }

    /// Quotes of both heads, if both lists are non-empty
    pub fn top_of_book(&self) -> Option<(HeadQuote, HeadQuote)> {
        let quote = |order: &RestingOrder| HeadQuote {
            limit_price: order.limit_price,
            quantity: order.quantity,
        };
        let bid = self.head(Side::BUY).map(quote)?;
        let ask = self.head(Side::SELL).map(quote)?;
        Some((bid, ask))
    }

    /// Reduce the head of `side` by `quantity`.
    ///
    /// A head that reaches zero is unlinked and its slot reclaimed; the
    /// removed order is returned. `quantity` never exceeds the head quantity
    /// when called from the matching loop.
    pub fn fill_head(&mut self, side: Side, quantity: Quantity) -> Option<RestingOrder> {
        let handle = self.head_handle(side)?;
        let head = self.orders.get_mut(handle)?;
        debug_assert!(quantity <= head.quantity, "Fill would exceed order quantity");
        head.quantity = head.quantity.checked_sub(quantity).unwrap_or_default();

        if !head.quantity.is_zero() {
            return None;
        }
        let next = head.next;
        *self.head_slot(side) = next;
        self.orders.remove(handle)
    }

    /// Resting orders of one side, head first
    pub fn iter(&self, side: Side) -> SideIter<'_> {
        SideIter {
            orders: &self.orders,
            cursor: self.head_handle(side),
        }
    }

    /// Sum of remaining quantity on one side
    pub fn resting_quantity(&self, side: Side) -> Quantity {
        self.iter(side).map(|order| order.quantity).sum()
    }

    /// Number of resting orders on both sides
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// True if the heads could still trade
    pub fn is_crossed(&self) -> bool {
        self.top_of_book()
            .is_some_and(|(bid, ask)| bid.limit_price >= ask.limit_price)
    }

    /// Copy the partition's lists for inspection
    pub fn view(&self) -> PartitionView {
        let collect = |side| self.iter(side).map(RestingOrderView::from).collect();
        PartitionView {
            index: self.index,
            buys: collect(Side::BUY),
            sells: collect(Side::SELL),
        }
    }
}

/// Head-first walk of a side list
pub struct SideIter<'a> {
    orders: &'a OrderArena,
    cursor: Option<OrderHandle>,
}

impl<'a> Iterator for SideIter<'a> {
    type Item = &'a RestingOrder;

    fn next(&mut self) -> Option<Self::Item> {
        let order = self.orders.get(self.cursor?)?;
        self.cursor = order.next;
        Some(order)
    }
}

/// Owned copy of one resting order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestingOrderView {
    pub ticker: Ticker,
    pub quantity: Quantity,
    pub limit_price: Price,
}

impl From<&RestingOrder> for RestingOrderView {
    fn from(order: &RestingOrder) -> Self {
        Self {
            ticker: order.ticker.clone(),
            quantity: order.quantity,
            limit_price: order.limit_price,
        }
    }
}

/// Snapshot of one partition's lists, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionView {
    pub index: usize,
    pub buys: Vec<RestingOrderView>,
    pub sells: Vec<RestingOrderView>,
}

impl PartitionView {
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }
}
