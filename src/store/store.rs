//! State container with dispatch and change subscriptions.

use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Holds the current state of a reducer and is the single dispatch entry point.
///
/// The state is replaced wholesale on every dispatch; subscribers observe the
/// new value after the transition completes.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer and notify every subscriber.
    ///
    /// Returns `true` when the new state differs from the previous one.
    pub fn dispatch(&mut self, action: R::Action) -> bool {
        let previous = std::mem::take(&mut self.state);
        let next = R::reduce(previous.clone(), &action);
        let changed = next != previous;
        self.state = next;

        tracing::debug!(?action, changed, "dispatch");

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        changed
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
