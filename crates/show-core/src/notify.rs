/// Change listeners for snapshot-style state.
///
/// Handlers run synchronously, in registration order, on the caller's
/// timeline.
pub struct Listeners<T> {
    handlers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<T> Listeners<T> {
    pub fn add(&mut self, handler: impl FnMut(&T) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn notify(&mut self, value: &T) {
        for h in &mut self.handlers {
            h(value);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.handlers.len())
            .finish()
    }
}
