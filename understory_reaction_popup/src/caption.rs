// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect, RoundedRect, Size, Vec2};
use understory_reaction_config::CaptionStyle;

use crate::{Canvas, ChildVisuals, PopupChild, TextMeasure};

/// Text label shown above the magnified reaction.
#[derive(Clone, Debug)]
pub struct Caption {
    style: CaptionStyle,
    text: Option<String>,
    frame: Rect,
    visuals: ChildVisuals,
}

impl Caption {
    /// Creates a hidden caption.
    #[must_use]
    pub fn new(style: CaptionStyle) -> Self {
        Self {
            style,
            text: None,
            frame: Rect::ZERO,
            visuals: ChildVisuals::default(),
        }
    }

    /// Returns `true` while the caption has text to show.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }

    /// Current text, if shown.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Laid-out bounds, padding included.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Shows `text`; it is positioned on the next layout.
    pub fn show(&mut self, text: String) {
        self.text = Some(text);
    }

    /// Hides the caption.
    pub fn hide(&mut self) {
        self.text = None;
    }

    /// Size of the caption for its current text, padding included.
    pub fn measure(&self, measure: &dyn TextMeasure) -> Size {
        let Some(text) = self.text.as_deref() else {
            return Size::ZERO;
        };
        let text = measure.measure(text, &self.style);
        Size::new(
            text.width + 2.0 * self.style.horizontal_padding,
            text.height + 2.0 * self.style.vertical_padding,
        )
    }

    /// Positions the caption above `icon`, horizontally centred on it.
    ///
    /// The caption is raised by its own height times two, but never by more
    /// than the icon's height.
    pub fn layout_above(&mut self, icon: Rect, size: Size) {
        let top = icon.y0 - icon.height().min(2.0 * size.height);
        let left = icon.center().x - size.width / 2.0;
        self.frame = Rect::from_origin_size(Point::new(left, top), size)
            + Vec2::new(0.0, self.visuals.translation_y);
    }
}

impl PopupChild for Caption {
    fn visuals(&self) -> ChildVisuals {
        self.visuals
    }

    fn set_visuals(&mut self, visuals: ChildVisuals) {
        self.visuals = visuals;
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(text) = self.text.as_deref() else {
            return;
        };
        canvas.fill_rounded_rect(
            RoundedRect::from_rect(self.frame, self.frame.height() / 2.0),
            self.style.background.multiply_alpha(self.visuals.alpha),
        );
        let origin = self.frame.origin()
            + Vec2::new(self.style.horizontal_padding, self.style.vertical_padding);
        canvas.draw_text(text, origin, &self.style, self.visuals.alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    fn style() -> CaptionStyle {
        CaptionStyle {
            text_color: Color::WHITE,
            background: Color::BLACK,
            horizontal_padding: 8.0,
            vertical_padding: 4.0,
            text_size: 14.0,
        }
    }

    #[test]
    fn measure_adds_padding() {
        let measure = |text: &str, _: &CaptionStyle| Size::new(10.0 * text.len() as f64, 16.0);
        let mut caption = Caption::new(style());
        assert_eq!(caption.measure(&measure), Size::ZERO);

        caption.show(String::from("Wow"));
        assert_eq!(caption.measure(&measure), Size::new(46.0, 24.0));
    }

    #[test]
    fn caption_sits_above_the_icon() {
        let mut caption = Caption::new(style());
        caption.show(String::from("Love"));

        // Tall icon: raised by twice the caption height.
        caption.layout_above(Rect::new(100.0, 200.0, 196.0, 296.0), Size::new(40.0, 24.0));
        assert_eq!(caption.frame(), Rect::new(128.0, 152.0, 168.0, 176.0));

        // Small icon: raised by the icon height only.
        caption.layout_above(Rect::new(100.0, 200.0, 132.0, 232.0), Size::new(40.0, 24.0));
        assert_eq!(caption.frame().y0, 168.0);
    }
}
