use crate::bitmap::Bitmap;

/// UI surface driven by the page controller
///
/// One text input, one image region, one decoded-text region and a modal
/// notice dialog. Implementations render these however their toolkit does.
pub trait PageView {
    /// Show a blocking notice to the user
    fn show_notice(&mut self, message: &str);

    /// Return keyboard focus to the text input
    fn focus_input(&mut self);

    /// Replace the image region's content
    fn show_image(&mut self, bitmap: &Bitmap);

    /// Replace the decoded-text region's content
    fn show_decoded_text(&mut self, text: &str);
}

/// Everything a view was asked to display, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Modal notice with its message
    Notice(String),
    /// Input focus restored
    FocusInput,
    /// Image shown, with its pixel dimensions
    Image {
        /// Bitmap width
        width: u32,
        /// Bitmap height
        height: u32,
    },
    /// Decoded-text region updated
    DecodedText(String),
}

/// Headless view that records what it was asked to show
///
/// Useful for tests and for hosts without a display.
#[derive(Debug, Default, Clone)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
    image: Option<Bitmap>,
    decoded_text: String,
}

impl RecordingView {
    /// Create an empty recording view
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Image currently displayed, if any
    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }

    /// Current content of the decoded-text region
    pub fn decoded_text(&self) -> &str {
        &self.decoded_text
    }
}

impl PageView for RecordingView {
    fn show_notice(&mut self, message: &str) {
        self.events.push(ViewEvent::Notice(message.to_string()));
    }

    fn focus_input(&mut self) {
        self.events.push(ViewEvent::FocusInput);
    }

    fn show_image(&mut self, bitmap: &Bitmap) {
        self.events.push(ViewEvent::Image {
            width: bitmap.width(),
            height: bitmap.height(),
        });
        self.image = Some(bitmap.clone());
    }

    fn show_decoded_text(&mut self, text: &str) {
        self.events.push(ViewEvent::DecodedText(text.to_string()));
        self.decoded_text = text.to_string();
    }
}
