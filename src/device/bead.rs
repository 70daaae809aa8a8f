//! A single counter on a rod.

// =============================================================================
// BeadKind
// =============================================================================

/// Which deck a bead belongs to.
///
/// A rod carries exactly one heaven bead (worth 5 when counted) above the
/// reckoning bar and four earth beads (worth 1 each) below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeadKind {
    /// The single upper bead, worth 5.
    Heaven,
    /// One of the four lower beads, worth 1.
    Earth,
}

// =============================================================================
// Bead
// =============================================================================

/// One physical counter.
///
/// `order` is the position within the bead's deck: 0 for the heaven bead,
/// 1..=4 for earth beads counting away from the reckoning bar. The order is
/// what the push/release cascades compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bead {
    kind: BeadKind,
    order: u8,
    active: bool,
}

impl Bead {
    /// The heaven bead, inactive.
    pub(crate) fn heaven() -> Self {
        Self {
            kind: BeadKind::Heaven,
            order: 0,
            active: false,
        }
    }

    /// An earth bead of the given order (1..=4), inactive.
    pub(crate) fn earth(order: u8) -> Self {
        debug_assert!((1..=4).contains(&order));
        Self {
            kind: BeadKind::Earth,
            order,
            active: false,
        }
    }

    /// The bead's deck.
    #[inline]
    pub fn kind(&self) -> BeadKind {
        self.kind
    }

    /// Position within the deck (0 for heaven, 1..=4 for earth).
    #[inline]
    pub fn order(&self) -> u8 {
        self.order
    }

    /// Whether the bead is pushed toward the reckoning bar and counted.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this is the heaven bead.
    #[inline]
    pub fn is_heaven(&self) -> bool {
        self.kind == BeadKind::Heaven
    }

    /// Whether this is an earth bead.
    #[inline]
    pub fn is_earth(&self) -> bool {
        self.kind == BeadKind::Earth
    }

    /// The bead's worth when counted: 5 for heaven, 1 for earth.
    #[inline]
    pub fn unit_value(&self) -> u8 {
        match self.kind {
            BeadKind::Heaven => 5,
            BeadKind::Earth => 1,
        }
    }

    /// Current contribution to the rod value.
    #[inline]
    pub fn value(&self) -> u8 {
        if self.active { self.unit_value() } else { 0 }
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

// =============================================================================
// Tests
// =============================================================================
