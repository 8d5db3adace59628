//! Approximate font metrics used to size overlay fields.

/// Font sizes the host draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    /// Used for slider labels and entry fields
    Tiny,
    #[default]
    Small,
    Medium,
}

impl FontSize {
    /// Pixel size of the font.
    pub fn pixels(self) -> f32 {
        match self {
            FontSize::Tiny => 12.0,
            FontSize::Small => 14.0,
            FontSize::Medium => 18.0,
        }
    }
}

/// Metrics for a specific font/size combination.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
    /// Line height as a ratio of font size
    pub line_height_ratio: f32,
}

impl TextMetrics {
    const LINE_HEIGHT_RATIO: f32 = 1.2;

    /// Metrics for one of the host fonts.
    pub fn for_font(font: FontSize) -> Self {
        Self {
            size: font.pixels(),
            line_height_ratio: Self::LINE_HEIGHT_RATIO,
        }
    }

    /// Get the line height.
    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_ratio
    }
}
