use serde::{Deserialize, Serialize};

/// Style attribute the behavior is allowed to write on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleChannel {
    FillOpacity,
    StrokeOpacity,
}

impl StyleChannel {
    /// CSS property name written on the rendered element.
    #[must_use]
    pub const fn attribute_name(self) -> &'static str {
        match self {
            Self::FillOpacity => "fill-opacity",
            Self::StrokeOpacity => "stroke-opacity",
        }
    }
}

/// Opacity style of one rendered column.
///
/// `None` means the channel has never been written by the behavior, so the
/// renderer's own default applies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementStyle {
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
}

impl ElementStyle {
    #[must_use]
    pub fn channel(self, channel: StyleChannel) -> Option<f64> {
        match channel {
            StyleChannel::FillOpacity => self.fill_opacity,
            StyleChannel::StrokeOpacity => self.stroke_opacity,
        }
    }

    pub fn set_channel(&mut self, channel: StyleChannel, value: f64) {
        match channel {
            StyleChannel::FillOpacity => self.fill_opacity = Some(value),
            StyleChannel::StrokeOpacity => self.stroke_opacity = Some(value),
        }
    }
}
