//! Lifecycle event emission
//!
//! A single-payload observable: subscribers are plain `FnMut` closures run
//! in subscription order. The whole system ticks on one cooperative frame
//! clock, so handlers are not required to be `Send`.

/// Dispatches one payload type to registered handlers
///
/// The payload may be unsized (e.g. a trait object), so lifecycle events
/// can carry a borrowed handle to a resource the emitter's owner holds.
pub struct Emitter<T: ?Sized> {
    handlers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T: ?Sized> Emitter<T> {
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Register a handler. Handlers fire in subscription order.
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Fire the event to every handler.
    pub fn emit(&mut self, payload: &T) {
        for handler in &mut self.handlers {
            handler(payload);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<T: ?Sized> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn handlers_fire_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();

        let a = seen.clone();
        emitter.subscribe(move |v: &u32| a.borrow_mut().push(("a", *v)));
        let b = seen.clone();
        emitter.subscribe(move |v: &u32| b.borrow_mut().push(("b", *v)));

        emitter.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn emitting_without_handlers_is_a_noop() {
        let mut emitter: Emitter<()> = Emitter::new();
        emitter.emit(&());
        assert_eq!(emitter.handler_count(), 0);
    }
}
