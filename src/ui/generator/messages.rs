// SPDX-License-Identifier: MPL-2.0
//! Generator message/event types re-exported by the facade.

use crate::application::port::{ClipboardError, EncodeError, EncodedImage, SaveError};
use crate::application::request::RequestTicket;
use crate::domain::qr::{ErrorCorrection, HexColor, RenderOptions};
use std::path::PathBuf;

/// Messages emitted by the form widgets and by completed tasks.
#[derive(Debug, Clone)]
pub enum Message {
    UrlChanged(String),
    /// Generate button or Enter in the URL field.
    Submit,
    SizeChanged(u32),
    ErrorCorrectionSelected(ErrorCorrection),
    DarkInputChanged(String),
    LightInputChanged(String),
    PresetDark(HexColor),
    PresetLight(HexColor),
    Reset,
    Download,
    Copy,
    DismissFeedback,
    EncodeFinished {
        ticket: RequestTicket,
        result: Result<EncodedImage, EncodeError>,
    },
    DownloadFinished(Result<PathBuf, SaveError>),
    /// The save dialog was closed without choosing a file.
    DownloadCancelled,
    CopyFinished(Result<(), ClipboardError>),
}

/// Side effects requested from the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    EncodeRequested {
        ticket: RequestTicket,
        text: String,
        options: RenderOptions,
    },
    DownloadRequested(EncodedImage),
    CopyRequested(EncodedImage),
    /// A download completed at this path.
    Downloaded(PathBuf),
    /// An encode result arrived after a newer request and was dropped.
    StaleResultDiscarded(RequestTicket),
}
