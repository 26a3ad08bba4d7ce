use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
};
use tracing::debug;

/// Average glyph advance relative to the font size, used when no font is loaded.
const FALLBACK_ADVANCE: f64 = 0.6;

/// Drawing backend wrapper that keeps rendering when text cannot be laid out.
///
/// Font errors from the inner backend turn into skipped text and an
/// estimated text box. All other backend errors pass through unchanged.
pub struct FontSafeBackend<DB> {
    inner: DB,
}

impl<DB> FontSafeBackend<DB> {
    pub fn new(inner: DB) -> Self {
        Self { inner }
    }
}

fn estimated_size(text: &str, size: f64) -> (u32, u32) {
    let chars = text.chars().count() as f64;
    let width = (chars * size * FALLBACK_ADVANCE).ceil().max(0.0) as u32;
    (width, size.ceil().max(1.0) as u32)
}

impl<DB: DrawingBackend> DrawingBackend for FontSafeBackend<DB> {
    type ErrorType = DB::ErrorType;

    fn get_size(&self) -> (u32, u32) {
        self.inner.get_size()
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.ensure_prepared()
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.present()
    }

    fn draw_pixel(
        &mut self,
        point: BackendCoord,
        color: BackendColor,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_pixel(point, color)
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_line(from, to, style)
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_rect(upper_left, bottom_right, style, fill)
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_path(path, style)
    }

    fn draw_circle<S: BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_circle(center, radius, style, fill)
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.fill_polygon(vert, style)
    }

    fn blit_bitmap(
        &mut self,
        pos: BackendCoord,
        (iw, ih): (u32, u32),
        src: &[u8],
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.blit_bitmap(pos, (iw, ih), src)
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        match self.inner.draw_text(text, style, pos) {
            Err(DrawingErrorKind::FontError(e)) => {
                debug!(text, error = %e, "Skipping chart text");
                Ok(())
            }
            result => result,
        }
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<Self::ErrorType>> {
        match self.inner.estimate_text_size(text, style) {
            Err(DrawingErrorKind::FontError(_)) => Ok(estimated_size(text, style.size())),
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::font;
    use plotters::style::TextStyle;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct Unavailable;

    impl fmt::Display for Unavailable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unavailable")
        }
    }

    impl Error for Unavailable {}

    /// Backend with no fonts whose pixel writes always fail.
    struct Fontless;

    impl DrawingBackend for Fontless {
        type ErrorType = Unavailable;

        fn get_size(&self) -> (u32, u32) {
            (10, 10)
        }

        fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Unavailable>> {
            Ok(())
        }

        fn present(&mut self) -> Result<(), DrawingErrorKind<Unavailable>> {
            Ok(())
        }

        fn draw_pixel(
            &mut self,
            _: BackendCoord,
            _: BackendColor,
        ) -> Result<(), DrawingErrorKind<Unavailable>> {
            Err(DrawingErrorKind::DrawingError(Unavailable))
        }

        fn draw_text<TStyle: BackendTextStyle>(
            &mut self,
            _: &str,
            _: &TStyle,
            _: BackendCoord,
        ) -> Result<(), DrawingErrorKind<Unavailable>> {
            Err(DrawingErrorKind::FontError(Box::new(Unavailable)))
        }

        fn estimate_text_size<TStyle: BackendTextStyle>(
            &self,
            _: &str,
            _: &TStyle,
        ) -> Result<(u32, u32), DrawingErrorKind<Unavailable>> {
            Err(DrawingErrorKind::FontError(Box::new(Unavailable)))
        }
    }

    #[test]
    fn test_font_errors_are_absorbed() {
        let mut backend = FontSafeBackend::new(Fontless);
        let style = TextStyle::from(font(10.0));

        assert!(backend.draw_text("Fig 1", &style, (0, 0)).is_ok());
        assert_eq!(backend.estimate_text_size("abcde", &style).unwrap(), (30, 10));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let mut backend = FontSafeBackend::new(Fontless);
        let black = BackendColor {
            alpha: 1.0,
            rgb: (0, 0, 0),
        };

        let result = backend.draw_pixel((1, 1), black);

        assert!(matches!(result, Err(DrawingErrorKind::DrawingError(Unavailable))));
    }

    #[test]
    fn test_estimated_size_scales_with_text() {
        assert_eq!(estimated_size("", 10.0), (0, 10));
        assert_eq!(estimated_size("abcde", 10.0), (30, 10));
        assert!(estimated_size("Record Count", 14.0).0 > estimated_size("Count", 14.0).0);
    }
}
