// src/util/image.rs
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::StatefulWidget,
};
use ratatui_image::{
    picker::Picker,
    StatefulImage,
    protocol::StatefulProtocol,
    Resize,
};
use image::DynamicImage;

use crate::log_error;

/// Font size assumed when the terminal does not answer the capability query.
const FALLBACK_FONT_SIZE: (u16, u16) = (8, 16);

/// Query the terminal for its graphics protocol. Must run before the crossterm
/// event reader starts, since the query reads from stdin.
pub fn query_picker() -> Picker {
    Picker::from_query_stdio().unwrap_or_else(|e| {
        log_error!("Terminal image query failed, using half-blocks: {}", e);
        Picker::from_fontsize(FALLBACK_FONT_SIZE)
    })
}

pub struct ImageRenderer {
    protocol: StatefulProtocol,
}

// Manual Debug implementation since StatefulProtocol doesn't implement Debug
impl std::fmt::Debug for ImageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageRenderer")
            .field("protocol", &"<StatefulProtocol>")
            .finish()
    }
}

impl ImageRenderer {
    pub fn from_dynamic_image(picker: &Picker, img: DynamicImage) -> Self {
        let protocol = picker.new_resize_protocol(img);

        Self { protocol }
    }

    /// Render letterboxed into `area`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let image = StatefulImage::default().resize(Resize::Fit(None));
        image.render(area, buf, &mut self.protocol);

        if let Some(Err(e)) = self.protocol.last_encoding_result() {
            log_error!("Image encoding error: {}", e);
        }
    }
}
