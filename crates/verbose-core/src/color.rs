//! Round-robin name colors

use colored::Color;
use parking_lot::Mutex;

/// Colors handed out when no custom palette is configured
pub const DEFAULT_COLORS: [Color; 7] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
    Color::White,
];

/// A fixed list of colors handed out in turn
///
/// Each new logger gets the next color; after the last one the rotation
/// starts over from the first.
#[derive(Debug)]
pub struct Palette {
    colors: Vec<Color>,
    next: Mutex<usize>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Create the default palette
    pub fn new() -> Self {
        Self::with_colors(DEFAULT_COLORS.to_vec())
    }

    /// Create a palette with custom colors
    ///
    /// An empty list falls back to the default colors.
    pub fn with_colors(colors: Vec<Color>) -> Self {
        let colors = if colors.is_empty() {
            DEFAULT_COLORS.to_vec()
        } else {
            colors
        };

        Self {
            colors,
            next: Mutex::new(0),
        }
    }

    /// Take the next color in the rotation
    pub fn pick(&self) -> Color {
        let mut next = self.next.lock();
        let color = self.colors[*next];
        *next += 1;
        if *next >= self.colors.len() {
            *next = 0;
        }
        color
    }

    /// The colors in rotation order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors before the rotation wraps
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false, an empty list falls back to the default colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_default_palette_order() {
        let palette = Palette::new();
        assert_eq!(palette.len(), 7);
        assert_eq!(palette.pick(), Color::Cyan);
        assert_eq!(palette.pick(), Color::Yellow);
        assert_eq!(palette.pick(), Color::Green);
    }

    #[test]
    fn test_rotation_wraps() {
        let palette = Palette::new();
        let first_cycle: Vec<_> = (0..palette.len()).map(|_| palette.pick()).collect();
        assert_eq!(first_cycle, DEFAULT_COLORS.to_vec());

        // wraps right after the last color
        assert_eq!(palette.pick(), Color::Cyan);

        // many cycles never go out of bounds
        for _ in 0..palette.len() * 5 {
            palette.pick();
        }
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::with_colors(vec![Color::Red, Color::Blue]);
        assert_eq!(palette.pick(), Color::Red);
        assert_eq!(palette.pick(), Color::Blue);
        assert_eq!(palette.pick(), Color::Red);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let palette = Palette::with_colors(Vec::new());
        assert_eq!(palette.colors(), &DEFAULT_COLORS);
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_concurrent_picks() {
        let palette = Arc::new(Palette::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let palette = Arc::clone(&palette);
                std::thread::spawn(move || {
                    (0..7).map(|_| palette.pick()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut total = 0;
        for handle in handles {
            total += handle.join().unwrap().len();
        }
        assert_eq!(total, 56);

        // 56 picks is 8 full cycles, so the rotation is back at the start
        assert_eq!(palette.pick(), Color::Cyan);
    }
}
