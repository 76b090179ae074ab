//! The single owner of the current theme mode.

use super::{ThemeMode, ThemeStorage};
use std::fmt;
use tracing::{debug, warn};

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(ThemeMode)>;

/// Holds the current mode, persists it, and notifies subscribers.
///
/// Construct one at startup and hand it (or a borrow of it) to whatever
/// needs it. Mutation requires `&mut self`, so there is exactly one writer
/// at a time. Persistence is best-effort: storage failures are logged and
/// never change the in-memory mode.
pub struct ThemeStore {
    mode: ThemeMode,
    storage: Box<dyn ThemeStorage>,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    /// Creates the store, reading the persisted mode once.
    ///
    /// A stored `light`/`dark` wins. Nothing stored, an unreadable storage,
    /// or an unrecognised value all fall back to `initial`.
    pub fn new(storage: impl ThemeStorage + 'static, initial: ThemeMode) -> Self {
        let mode = match storage.load() {
            Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
                Ok(mode) => mode,
                Err(_) => {
                    warn!(value = %raw, "ignoring unrecognised persisted theme mode");
                    initial
                }
            },
            Ok(None) => initial,
            Err(e) => {
                warn!("failed to read persisted theme mode: {e:#}");
                initial
            }
        };

        debug!(%mode, "theme store initialised");

        Self {
            mode,
            storage: Box::new(storage),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode, persists it, notifies subscribers, and returns the
    /// new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();

        if let Err(e) = self.storage.save(self.mode.as_str()) {
            warn!(mode = %self.mode, "failed to persist theme mode: {e:#}");
        }

        for (_, listener) in &mut self.listeners {
            listener(self.mode);
        }

        debug!(mode = %self.mode, listeners = self.listeners.len(), "theme toggled");
        self.mode
    }

    /// Registers `listener` to be called with the new mode after every
    /// change. Listeners run in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Removes a listener. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
