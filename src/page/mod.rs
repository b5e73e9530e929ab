//! Generate/decode page
//!
//! [`PageController`] holds the last generated image and wires the page's
//! actions to a [`crate::codec::BarcodeCodec`] and a [`PageView`].

/// Page state and the generate, decode and scan actions
pub mod controller;
/// Display surface the controller drives
pub mod view;

pub use controller::{
    DecodeOutcome, EMPTY_INPUT_MESSAGE, NO_IMAGE_MESSAGE, NOT_FOUND_MESSAGE, PageController,
};
pub use view::{PageView, RecordingView, ViewEvent};
