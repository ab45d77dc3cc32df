// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login/logout notifications.
//!
//! The hub is owned by the caller and handed to whatever needs to react to
//! session changes; there is no process-wide session.

use crate::auth::{AuthenticatedUser, SessionSnapshot};

/// Receives the new session whenever someone logs in or out.
pub trait SessionObserver {
    /// Called after the session changed.
    fn session_changed(&self, snapshot: &SessionSnapshot);
}

impl<F> SessionObserver for F
where
    F: Fn(&SessionSnapshot),
{
    fn session_changed(&self, snapshot: &SessionSnapshot) {
        self(snapshot);
    }
}

/// Handle returned by [`SessionHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the current session and notifies subscribers of changes.
#[derive(Default)]
pub struct SessionHub {
    snapshot: SessionSnapshot,
    observers: Vec<(SubscriptionId, Box<dyn SessionObserver>)>,
    next_id: u64,
}

impl SessionHub {
    /// Creates a hub with nobody logged in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session.
    #[must_use]
    pub const fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Registers an observer. It is not called for the current session.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: SessionObserver + 'static,
    {
        let id: SubscriptionId = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before: usize = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Logs `user` in and notifies observers.
    pub fn sign_in(&mut self, user: AuthenticatedUser) {
        tracing::info!(user = %user.name, role = ?user.role, "Signed in");
        self.replace(SessionSnapshot::signed_in(user));
    }

    /// Logs out and notifies observers. Does nothing if nobody is logged in.
    pub fn sign_out(&mut self) {
        if !self.snapshot.is_authenticated() {
            return;
        }
        tracing::info!("Signed out");
        self.replace(SessionSnapshot::anonymous());
    }

    fn replace(&mut self, snapshot: SessionSnapshot) {
        self.snapshot = snapshot;
        for (_, observer) in &self.observers {
            observer.session_changed(&self.snapshot);
        }
    }
}

impl std::fmt::Debug for SessionHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHub")
            .field("snapshot", &self.snapshot)
            .field("observers", &self.observers.len())
            .finish()
    }
}
