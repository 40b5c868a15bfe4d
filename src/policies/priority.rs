//! # Delivery priority for registrations.
//!
//! [`Priority`] orders registrations for the same event type at delivery
//! time. Lower priorities run first; [`Priority::Monitor`] runs last and is
//! meant for observers that must see the final state of an occurrence
//! (including cancellation done by earlier handlers) without changing it.

/// Delivery order of a registration relative to others on the same event type.
///
/// Variants are declared in delivery order, so the derived `Ord` is the
/// delivery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Runs first; later handlers can override its effects.
    Lowest,
    /// Runs early.
    Low,
    /// Default position.
    Normal,
    /// Runs late.
    High,
    /// Runs last among mutating handlers.
    Highest,
    /// Runs after everything else; observe-only by convention.
    Monitor,
}

impl Default for Priority {
    /// Returns [`Priority::Normal`].
    fn default() -> Self {
        Priority::Normal
    }
}
