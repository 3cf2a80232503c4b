//! Lumo Core
//!
//! Foundational primitives shared by the Lumo theme and component crates:
//!
//! - **Paint**: [`Color`] and [`Shadow`] with deterministic CSS-style rendering
//! - **Observers**: [`Observers`], a revocable callback list used by every
//!   reactive value in the workspace
//! - **Events**: input event ids that drive interaction flags
//!
//! # Example
//!
//! ```rust
//! use lumo_core::{Color, Observers};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! let seen = Arc::new(AtomicU32::new(0));
//! let observers: Observers<Color> = Observers::new();
//!
//! let counter = seen.clone();
//! let id = observers.insert(move |_color| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! observers.notify(Color::from_hex(0x2563EB));
//! observers.remove(id);
//! observers.notify(Color::WHITE);
//!
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

pub mod events;
pub mod observer;
pub mod paint;

pub use events::EventType;
pub use observer::{ObserverId, Observers};
pub use paint::{Color, ColorParseError, Shadow};
