//! Immutable page-name → prose table.

use std::collections::HashMap;

const LOREM_IPSUM: &str = "
Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.

";

const PAGE_ONE: &str = "## Synopsis

The Internet has a finite number of publicly routable addresses. Think of one as the street address of an office building: the mail carrier knows how to reach the building, and the mail room inside knows which floor and desk each letter belongs to.

Public addresses are the street, private addresses are the floors and desks, the mail room is the gateway and its directory is the route table.";

const PAGE_TWO: &str = "## The problem

When a block of addresses that used to be internal starts being handed out on the public Internet, routers inside the old owner still believe those addresses live in the building. Replies get routed back upstairs instead of out the door, and traffic that should leave never does.

There is no single fix: renumbering is disruptive, and refusing to talk to the reassigned range cuts off legitimate services. Each case has to be untangled on its own.";

/// Prose bodies keyed by page name.
///
/// Built once at startup and only read afterwards; handlers receive it by
/// reference.
#[derive(Debug, Clone, Default)]
pub struct ContentTable {
    entries: HashMap<String, String>,
}

impl ContentTable {
    /// Table shipped with the server: the landing page filler plus the menu
    /// pages that have something written for them.
    pub fn builtin() -> Self {
        Self::from_entries([("home", LOREM_IPSUM), ("one", PAGE_ONE), ("two", PAGE_TWO)])
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, page: &str) -> Option<&str> {
        self.entries.get(page).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
