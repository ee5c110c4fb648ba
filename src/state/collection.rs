// src/state/collection.rs
//
// A fetched list. `items == None` means "never fetched"; `Some(vec![])`
// means "fetched, nothing there". Every fetch gets a ticket and only the
// newest ticket's response may land.

pub type Ticket = u64;

#[derive(Clone, Debug)]
pub struct Collection<T> {
    items: Option<Vec<T>>,
    issued: Ticket,
    settled: Ticket,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: None, issued: 0, settled: 0 }
    }
}

impl<T> Collection<T> {
    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.settled < self.issued
    }

    /// Stamp a new fetch. Earlier outstanding tickets become stale.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        self.issued
    }

    /// Settle `ticket` if it is the newest; stale tickets change nothing.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.settled = ticket;
        true
    }

    /// Wholesale replacement.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = Some(items);
    }
}
