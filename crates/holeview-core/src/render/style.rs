use crate::core::utils::color::Color;

/// Stroke of a drawn element.
///
/// Two elements look alike exactly when their styles compare equal, which is what
/// [`Theme::hole_is_distinct`] relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    /// Stroke width in output pixels.
    pub width: f64,
}

impl Style {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Which vertex table a figure is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureRole {
    Original,
    Posed,
}

/// The style of every kind of element the renderer produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub hole: Style,
    pub triangle: Style,
    pub original_figure: Style,
    pub posed_figure: Style,
    pub stretched_edge: Style,
    pub marker: Style,
    pub marker_radius: f64,
    pub contour_palette: Vec<Color>,
    pub contour_width: f64,
    pub label_size: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            hole: Style::new(Color::rgb(0x00, 0x00, 0xff), 2.0),
            triangle: Style::new(Color::rgb(0x46, 0x82, 0xb4), 1.0),
            original_figure: Style::new(Color::rgb(0xd3, 0xd3, 0xd3), 1.0),
            posed_figure: Style::new(Color::rgb(0x00, 0x00, 0x00), 1.5),
            stretched_edge: Style::new(Color::rgb(0xff, 0xa5, 0x00), 1.5),
            marker: Style::new(Color::rgb(0xff, 0x00, 0x00), 1.0),
            marker_radius: 4.0,
            contour_palette: vec![
                Color::rgb(0x44, 0x01, 0x54),
                Color::rgb(0x3b, 0x52, 0x8b),
                Color::rgb(0x21, 0x90, 0x8d),
                Color::rgb(0x5d, 0xc8, 0x63),
                Color::rgb(0xfd, 0xe7, 0x25),
            ],
            contour_width: 1.0,
            label_size: 10.0,
        }
    }
}

impl Theme {
    pub fn figure(&self, role: FigureRole) -> Style {
        match role {
            FigureRole::Original => self.original_figure,
            FigureRole::Posed => self.posed_figure,
        }
    }

    /// Palette entry for the `index`-th contour level, cycling when levels outnumber colors.
    pub fn contour_color(&self, index: usize) -> Color {
        if self.contour_palette.is_empty() {
            return self.posed_figure.color;
        }
        self.contour_palette[index % self.contour_palette.len()]
    }

    /// Stroke of every contour level the palette can produce.
    pub fn contour_styles(&self) -> impl Iterator<Item = Style> + '_ {
        (0..self.contour_palette.len().max(1))
            .map(|i| Style::new(self.contour_color(i), self.contour_width))
    }

    /// Whether the hole style differs from every other element's style, contour lines included.
    pub fn hole_is_distinct(&self) -> bool {
        [
            self.triangle,
            self.original_figure,
            self.posed_figure,
            self.stretched_edge,
            self.marker,
        ]
        .into_iter()
        .chain(self.contour_styles())
        .all(|s| s != self.hole)
    }
}
