//! Top-level pages and tab navigation.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Products,
    Cart,
    Profile,
    Demo,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Products,
        Page::Cart,
        Page::Profile,
        Page::Demo,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Products => "Products",
            Page::Cart => "Cart",
            Page::Profile => "Profile",
            Page::Demo => "Demo",
        }
    }

    /// Digit shortcut shown in the header tabs.
    pub fn key(self) -> char {
        match self {
            Page::Home => '1',
            Page::Products => '2',
            Page::Cart => '3',
            Page::Profile => '4',
            Page::Demo => '5',
        }
    }

    pub fn from_key(key: char) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.key() == key)
    }

    pub fn next(self) -> Page {
        let index = self.index();
        Page::ALL[(index + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Page {
        let index = self.index();
        Page::ALL[(index + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    fn index(self) -> usize {
        Page::ALL
            .iter()
            .position(|page| *page == self)
            .unwrap_or(0)
    }
}

/// Unknown names land on the home page.
impl FromStr for Page {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let page = match s.trim().to_ascii_lowercase().as_str() {
            "products" => Page::Products,
            "cart" => Page::Cart,
            "profile" => Page::Profile,
            "demo" | "hooks" => Page::Demo,
            _ => Page::Home,
        };
        Ok(page)
    }
}
