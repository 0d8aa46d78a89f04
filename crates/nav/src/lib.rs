//! Navigation breadcrumb stack.
//!
//! Tracks where the user has been as an ordered list of places, keeps that
//! list in step with the displayed address, and tells interested UI
//! fragments whenever it changes.
//!
//! The stack is an ordinary owned value. Hosts construct one per session,
//! hand it the [`LocationBridge`] for their address mechanism, and pass it by
//! reference to whatever needs to navigate:
//!
//! ```
//! use trail_location::MemoryLocation;
//! use trail_nav::NavigationStack;
//! use trail_place::factory;
//!
//! let mut stack = NavigationStack::new(MemoryLocation::default(), factory::home()?);
//! let pkg = stack.push_and_navigate(factory::view_pkg("foo")?);
//! stack.push_and_navigate(factory::view_pkg_changelog("foo")?);
//! stack.pop_to_and_navigate(pkg)?;
//!
//! assert_eq!(stack.location().requested().last().map(String::as_str), Some("/pkg/foo"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod notify;
mod stack;


pub use config::{HomePolicy, NavConfig};
pub use error::{ConfigError, NavError, Result};
pub use notify::{Notifier, Subscription};
pub use stack::{Crumb, NavigationStack, PlaceHandle};
pub use trail_location::LocationBridge;
