//! Order arena
//!
//! Resting orders of one partition live in a slot vector and are addressed by
//! a stable integer handle. List links (`next`) are handles, never references.
//! Vacated slots go on a free list and are reused by later insertions.

use types::ids::Ticker;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Stable index of an order slot within one partition's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderHandle(usize);

/// An order resting on one side of a partition
#[derive(Debug, Clone, PartialEq)]
pub struct RestingOrder {
    pub side: Side,
    pub ticker: Ticker,
    /// Remaining shares. Zero only transiently, right before unlinking.
    pub quantity: Quantity,
    pub limit_price: Price,
    /// Next order on the same side, towards older submissions
    pub(crate) next: Option<OrderHandle>,
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied(RestingOrder),
    Vacant,
}

/// Slot storage with free-list reuse
#[derive(Debug, Clone, Default)]
pub struct OrderArena {
    slots: Vec<Slot>,
    free: Vec<OrderHandle>,
    live: usize,
}

impl OrderArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an order and return its handle
    pub fn insert(&mut self, order: RestingOrder) -> OrderHandle {
        self.live += 1;
        if let Some(handle) = self.free.pop() {
            self.slots[handle.0] = Slot::Occupied(order);
            return handle;
        }
        let handle = OrderHandle(self.slots.len());
        self.slots.push(Slot::Occupied(order));
        handle
    }

    pub fn get(&self, handle: OrderHandle) -> Option<&RestingOrder> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(order)) => Some(order),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: OrderHandle) -> Option<&mut RestingOrder> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Occupied(order)) => Some(order),
            _ => None,
        }
    }

    /// Vacate a slot, returning the order it held
    pub fn remove(&mut self, handle: OrderHandle) -> Option<RestingOrder> {
        let slot = self.slots.get_mut(handle.0)?;
        match std::mem::replace(slot, Slot::Vacant) {
            Slot::Occupied(order) => {
                self.free.push(handle);
                self.live -= 1;
                Some(order)
            }
            Slot::Vacant => None,
        }
    }

    /// Number of live orders
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots allocated, live or vacant
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
