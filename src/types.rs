//! Shared primitive types: the color model, SGR attribute flags, and the
//! character cell the whole pipeline trades in.

// =============================================================================
// Color
// =============================================================================

/// An RGBA color with 8-bit channels stored as `i16`.
///
/// Integer channels compare exactly, which the diff renderer relies on, and
/// the spare range below zero encodes two marker colors:
///
/// - `r == -1`: terminal default, the color the user's terminal would pick.
/// - `r == -2`: an ANSI palette entry, with the index carried in `g`.
///
/// Alpha runs from 0 (transparent) to 255 (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Defer to the terminal's configured color.
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Fully transparent; blending leaves the destination as it was.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// An opaque color from its RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// An ANSI palette color by index: 0-7 standard, 8-15 bright, 16-231
    /// the 6x6x6 cube, 232-255 grayscale.
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// An opaque color from a packed `0xRRGGBB` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use soroban_tui::types::Rgba;
    ///
    /// let lacquer = Rgba::from_rgb_int(0x8b2500);
    /// assert_eq!(lacquer, Rgba::rgb(139, 37, 0));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// The palette index of an ANSI marker color. Meaningless unless
    /// [`is_ansi`](Self::is_ansi) holds.
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Source-over composite of `src` onto `dst`.
    ///
    /// Marker colors have no channels to mix: a terminal-default or palette
    /// source wins outright, and either one as destination counts as opaque
    /// black underneath a translucent source.
    pub fn blend(src: Self, dst: Self) -> Self {
        if src.is_opaque() || src.is_terminal_default() || src.is_ansi() {
            return src;
        }
        if src.is_transparent() {
            return dst;
        }

        let dst = if dst.is_terminal_default() || dst.is_ansi() {
            Self::BLACK
        } else {
            dst
        };

        let src_a = i32::from(src.a);
        let dst_a = i32::from(dst.a) * (255 - src_a) / 255;
        let out_a = src_a + dst_a;
        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        let mix = |s: i16, d: i16| {
            let channel = (i32::from(s) * src_a + i32::from(d) * dst_a) / out_a;
            channel.clamp(0, 255) as i16
        };

        Self {
            r: mix(src.r, dst.r),
            g: mix(src.g, dst.g),
            b: mix(src.b, dst.b),
            a: out_a.clamp(0, 255) as i16,
        }
    }

    /// Scale the RGB channels toward black, keeping alpha. Disabled and
    /// hidden rods are drawn this way.
    ///
    /// Terminal-default dims to mid gray; a palette color has no channels
    /// to scale and passes through.
    pub fn dim(self, factor: f32) -> Self {
        if self.is_terminal_default() {
            return Self::GRAY;
        }
        if self.is_ansi() {
            return self;
        }
        let scale = |v: i16| (f32::from(v) * factor).clamp(0.0, 255.0) as i16;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

// =============================================================================
// Attributes
// =============================================================================

bitflags::bitflags! {
    /// SGR text attributes packed into one byte.
    ///
    /// Compose with bitwise OR: `Attr::BOLD | Attr::DIM`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// One character cell of the drawing surface.
///
/// The scene painter fills a grid of these and the terminal presenter
/// writes them out; nothing in between needs anything richer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character shown in the cell.
    pub glyph: char,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// SGR attribute flags.
    pub attrs: Attr,
}

impl Cell {
    /// A blank cell carrying only a background color.
    pub const fn blank(bg: Rgba) -> Self {
        Self {
            glyph: ' ',
            fg: Rgba::TERMINAL_DEFAULT,
            bg,
            attrs: Attr::NONE,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgba::TERMINAL_DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let c = Rgba::rgb(10, 20, 30);
        assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 255));
        assert!(c.is_opaque());
        assert!(!c.is_terminal_default());
    }

    #[test]
    fn test_marker_colors() {
        assert!(Rgba::TERMINAL_DEFAULT.is_terminal_default());
        assert!(Rgba::TRANSPARENT.is_transparent());
        let palette = Rgba::ansi(12);
        assert!(palette.is_ansi());
        assert_eq!(palette.ansi_index(), 12);
        assert!(palette.is_opaque());
    }

    #[test]
    fn test_from_rgb_int_unpacks_channels() {
        assert_eq!(Rgba::from_rgb_int(0x000000), Rgba::BLACK);
        assert_eq!(Rgba::from_rgb_int(0xffffff), Rgba::WHITE);
        assert_eq!(Rgba::from_rgb_int(0x123456), Rgba::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_blend_shortcuts() {
        let red = Rgba::rgb(200, 0, 0);
        let green = Rgba::rgb(0, 200, 0);
        // Opaque source replaces, transparent source vanishes.
        assert_eq!(Rgba::blend(red, green), red);
        assert_eq!(Rgba::blend(Rgba::TRANSPARENT, green), green);
        // Marker sources replace too.
        assert_eq!(Rgba::blend(Rgba::ansi(4), green), Rgba::ansi(4));
    }

    #[test]
    fn test_blend_half_alpha_lands_in_the_middle() {
        let out = Rgba::blend(Rgba::new(255, 0, 0, 128), Rgba::rgb(0, 0, 255));
        assert!(out.r > 100 && out.r < 160, "r = {}", out.r);
        assert!(out.b > 100 && out.b < 160, "b = {}", out.b);
        assert!(out.is_opaque());
    }

    #[test]
    fn test_blend_over_marker_reads_it_as_black() {
        let out = Rgba::blend(Rgba::new(200, 200, 200, 128), Rgba::TERMINAL_DEFAULT);
        assert!(out.r > 80 && out.r < 120, "r = {}", out.r);
        assert!(out.is_opaque());
    }

    #[test]
    fn test_dim_scales_channels() {
        let d = Rgba::rgb(200, 100, 50).dim(0.5);
        assert_eq!((d.r, d.g, d.b, d.a), (100, 50, 25, 255));
        assert_eq!(Rgba::TERMINAL_DEFAULT.dim(0.3), Rgba::GRAY);
        assert_eq!(Rgba::ansi(3).dim(0.5), Rgba::ansi(3));
    }

    #[test]
    fn test_attr_composition() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(!attrs.contains(Attr::DIM));
        assert!(Attr::NONE.is_empty());
    }

    #[test]
    fn test_default_cell_is_a_blank_space() {
        let cell = Cell::default();
        assert_eq!(cell.glyph, ' ');
        assert!(cell.fg.is_terminal_default());
        assert!(cell.bg.is_terminal_default());
        assert!(cell.attrs.is_empty());
    }
}
