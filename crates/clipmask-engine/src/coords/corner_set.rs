use core::fmt;
use core::ops::{BitOr, Not};

/// One corner of a rectangle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Every corner, in bit order from most to least significant.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Corner::TopLeft => CornerSet::TOP_LEFT_BIT,
            Corner::TopRight => CornerSet::TOP_RIGHT_BIT,
            Corner::BottomLeft => CornerSet::BOTTOM_LEFT_BIT,
            Corner::BottomRight => CornerSet::BOTTOM_RIGHT_BIT,
        }
    }
}

/// Set of rounded corners, stored as a 4-bit mask.
///
/// Bit layout matches the integer attribute encoding used by hosts:
/// `0b1000` top-left, `0b0100` top-right, `0b0010` bottom-left,
/// `0b0001` bottom-right. A corner missing from the set is drawn sharp.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CornerSet(u8);

impl CornerSet {
    const TOP_LEFT_BIT: u8 = 0b1000;
    const TOP_RIGHT_BIT: u8 = 0b0100;
    const BOTTOM_LEFT_BIT: u8 = 0b0010;
    const BOTTOM_RIGHT_BIT: u8 = 0b0001;
    const MASK: u8 = 0b1111;

    pub const NONE: CornerSet = CornerSet(0);
    pub const ALL: CornerSet = CornerSet(Self::MASK);
    pub const TOP: CornerSet = CornerSet(Self::TOP_LEFT_BIT | Self::TOP_RIGHT_BIT);
    pub const BOTTOM: CornerSet = CornerSet(Self::BOTTOM_LEFT_BIT | Self::BOTTOM_RIGHT_BIT);

    /// Decodes an attribute bit field. Bits above the low four are ignored.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        CornerSet((bits & Self::MASK as u32) as u8)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn from_flags(top_left: bool, top_right: bool, bottom_left: bool, bottom_right: bool) -> Self {
        let mut bits = 0;
        if top_left {
            bits |= Self::TOP_LEFT_BIT;
        }
        if top_right {
            bits |= Self::TOP_RIGHT_BIT;
        }
        if bottom_left {
            bits |= Self::BOTTOM_LEFT_BIT;
        }
        if bottom_right {
            bits |= Self::BOTTOM_RIGHT_BIT;
        }
        CornerSet(bits)
    }

    #[inline]
    pub const fn contains(self, corner: Corner) -> bool {
        self.0 & corner.bit() != 0
    }

    #[inline]
    pub const fn with(self, corner: Corner) -> Self {
        CornerSet(self.0 | corner.bit())
    }

    #[inline]
    pub const fn without(self, corner: Corner) -> Self {
        CornerSet(self.0 & !corner.bit())
    }

    #[inline]
    pub const fn is_all(self) -> bool {
        self.0 == Self::MASK
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Corner> {
        Corner::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl Default for CornerSet {
    #[inline]
    fn default() -> Self {
        CornerSet::ALL
    }
}

impl From<Corner> for CornerSet {
    #[inline]
    fn from(corner: Corner) -> Self {
        CornerSet(corner.bit())
    }
}

impl FromIterator<Corner> for CornerSet {
    fn from_iter<I: IntoIterator<Item = Corner>>(iter: I) -> Self {
        iter.into_iter().fold(CornerSet::NONE, CornerSet::with)
    }
}

impl BitOr for CornerSet {
    type Output = CornerSet;
    #[inline]
    fn bitor(self, rhs: CornerSet) -> CornerSet {
        CornerSet(self.0 | rhs.0)
    }
}

impl Not for CornerSet {
    type Output = CornerSet;
    #[inline]
    fn not(self) -> CornerSet {
        CornerSet(!self.0 & Self::MASK)
    }
}

impl fmt::Debug for CornerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
