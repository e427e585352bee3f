//! Per-session borrower profiles.
//!
//! Linking a bank account changes the profile of the session that linked it
//! and nobody else's. Only sessions that linked something are stored; the
//! oldest is forgotten once the registry is full.

use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;

use super::bank_link::LinkedAccount;
use super::fixtures::UserProfile;

pub const SESSION_HEADER: &str = "x-session-id";

pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Default)]
struct Profiles {
    by_session: HashMap<String, UserProfile>,
    /// Insertion order, oldest first.
    order: VecDeque<String>,
}

pub struct SessionRegistry {
    profiles: RwLock<Profiles>,
    max_sessions: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_sessions: usize) -> Self {
        Self {
            profiles: RwLock::new(Profiles::default()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Session id from the request, or a freshly minted one.
    pub fn resolve(&self, requested: Option<&str>) -> String {
        match requested.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => uuid::Uuid::new_v4().to_string(),
        }
    }

    /// The session's profile; the stock profile until something is linked.
    pub fn profile(&self, session: &str) -> UserProfile {
        self.profiles
            .read()
            .by_session
            .get(session)
            .cloned()
            .unwrap_or_default()
    }

    pub fn link_account(&self, session: &str, account: &LinkedAccount) -> UserProfile {
        let mut profiles = self.profiles.write();
        if !profiles.by_session.contains_key(session) {
            while profiles.order.len() >= self.max_sessions {
                let Some(oldest) = profiles.order.pop_front() else {
                    break;
                };
                profiles.by_session.remove(&oldest);
                tracing::debug!(session = %oldest, "Evicted session profile");
            }
            profiles.order.push_back(session.to_string());
        }

        let profile = profiles.by_session.entry(session.to_string()).or_default();
        profile.bank_name = account.bank_name.clone();
        profile.account_holder_name = account.account_holder_name.clone();
        profile.account_number = account.account_number.clone();
        profile.clone()
    }

    pub fn len(&self) -> usize {
        self.profiles.read().by_session.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> LinkedAccount {
        LinkedAccount {
            bank_name: "Plaid Checking".into(),
            account_holder_name: "Alberta Charleson".into(),
            account_number: "acc-1".into(),
        }
    }

    #[test]
    fn linking_is_scoped_to_one_session() {
        let registry = SessionRegistry::new();
        assert!(registry.is_empty());
        registry.link_account("a", &account());

        assert_eq!(registry.profile("a").bank_name, "Plaid Checking");
        assert_eq!(registry.profile("b").bank_name, "Commonwealth Bank");
        assert_eq!(registry.profile("a").first_name, "John");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn oldest_session_is_evicted_when_full() {
        let registry = SessionRegistry::with_capacity(2);
        registry.link_account("a", &account());
        registry.link_account("b", &account());
        registry.link_account("a", &account());
        assert_eq!(registry.len(), 2);

        registry.link_account("c", &account());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.profile("a").bank_name, "Commonwealth Bank");
        assert_eq!(registry.profile("b").bank_name, "Plaid Checking");
        assert_eq!(registry.profile("c").bank_name, "Plaid Checking");
    }

    #[test]
    fn blank_session_ids_get_minted() {
        let registry = SessionRegistry::new();
        assert_eq!(registry.resolve(Some("abc")), "abc");
        let minted = registry.resolve(Some("  "));
        assert_eq!(minted.len(), 36);
        assert_ne!(registry.resolve(None), minted);
    }
}
