//! Piece-symbol classification and the promotion table.

use castellan_core::{Color, Piece, PieceKind};

/// Map a piece glyph to its kind, or `None` if the symbol is not a chess piece.
///
/// ```
/// use castellan_core::PieceKind;
/// use castellan_rules::classify;
///
/// assert_eq!(classify('♞'), Some(PieceKind::Knight));
/// assert_eq!(classify('?'), None);
/// ```
#[inline]
pub fn classify(symbol: char) -> Option<PieceKind> {
    PieceKind::from_symbol(symbol)
}

/// The pieces a pawn of `color` may promote to, in presentation order.
pub const fn promotion_choices(color: Color) -> [Piece; 4] {
    [
        Piece::new(PieceKind::Queen, color),
        Piece::new(PieceKind::Rook, color),
        Piece::new(PieceKind::Bishop, color),
        Piece::new(PieceKind::Knight, color),
    ]
}

/// Glyphs of [`promotion_choices`].
pub fn promotion_symbols(color: Color) -> [char; 4] {
    promotion_choices(color).map(Piece::symbol)
}
