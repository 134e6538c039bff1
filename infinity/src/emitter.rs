use alloc::sync::Arc;
use alloc::vec::Vec;

/// Notification names a tracker publishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topic {
    /// A refresh is about to load one or more views.
    Loading,
    /// A view became visible.
    Load,
    /// A refresh is about to unload one or more views.
    Unloading,
    /// A view stopped being visible.
    Unload,
}

/// A single published notification.
///
/// `Load`/`Unload` borrow the view's element and the arguments it was added with.
#[derive(Debug)]
pub enum Notification<'a, E, A> {
    Loading,
    Load { element: &'a E, args: &'a [A] },
    Unloading,
    Unload { element: &'a E, args: &'a [A] },
}

impl<E, A> Notification<'_, E, A> {
    pub fn topic(&self) -> Topic {
        match self {
            Self::Loading => Topic::Loading,
            Self::Load { .. } => Topic::Load,
            Self::Unloading => Topic::Unloading,
            Self::Unload { .. } => Topic::Unload,
        }
    }
}

/// A subscriber callback.
pub type Subscriber<E, A> = Arc<dyn Fn(&Notification<'_, E, A>) + Send + Sync>;

/// Handle returned by [`Emitter::on`], used to remove that subscriber again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// An owned publish/subscribe registry.
///
/// Subscribers of a topic are invoked in registration order.
pub struct Emitter<E, A> {
    subscribers: Vec<(Topic, SubscriptionId, Subscriber<E, A>)>,
    next_id: u64,
}

impl<E, A> Emitter<E, A> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn on(
        &mut self,
        topic: Topic,
        f: impl Fn(&Notification<'_, E, A>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.on_arc(topic, Arc::new(f))
    }

    /// Registers an already shared subscriber (e.g. one callback for several topics).
    pub fn on_arc(&mut self, topic: Topic, f: Subscriber<E, A>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((topic, id, f));
        id
    }

    /// Removes a subscriber. Returns `false` if it was already gone.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(_, sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Removes every subscriber of `topic`.
    pub fn off_topic(&mut self, topic: Topic) {
        self.subscribers.retain(|(t, _, _)| *t != topic);
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn has_listeners(&self, topic: Topic) -> bool {
        self.subscribers.iter().any(|(t, _, _)| *t == topic)
    }

    pub fn listener_count(&self, topic: Topic) -> usize {
        self.subscribers.iter().filter(|(t, _, _)| *t == topic).count()
    }

    pub fn emit(&self, notification: &Notification<'_, E, A>) {
        let topic = notification.topic();
        for (t, _, f) in &self.subscribers {
            if *t == topic {
                f(notification);
            }
        }
    }
}

impl<E, A> Default for Emitter<E, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Clone for Emitter<E, A> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
            next_id: self.next_id,
        }
    }
}

impl<E, A> core::fmt::Debug for Emitter<E, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Emitter")
            .field("loading", &self.listener_count(Topic::Loading))
            .field("load", &self.listener_count(Topic::Load))
            .field("unloading", &self.listener_count(Topic::Unloading))
            .field("unload", &self.listener_count(Topic::Unload))
            .finish()
    }
}
