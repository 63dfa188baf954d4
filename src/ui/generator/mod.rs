// SPDX-License-Identifier: MPL-2.0
//! QR code generator form.
//!
//! This module follows the "state down, messages up" pattern: [`State::update`]
//! mutates the form and returns an [`Event`] describing the side effect the
//! application must run (encode, save, clipboard). Completed work comes back
//! as a message carrying its result.
//!
//! Encode requests are tagged with a [`RequestTicket`]; only the result of the
//! most recent request is ever applied.

mod messages;
mod view;


pub use messages::{Event, Message};
pub use view::{render, ViewContext};

use crate::application::port::EncodedImage;
use crate::application::request::{RequestSequence, RequestTicket};
use crate::application::validation::validate_url;
use crate::domain::qr::{HexColor, Margin, PixelSize, RenderOptions};
use iced::widget::image;

/// Foreground colors offered as one-click chips.
pub const DARK_PRESETS: [HexColor; 5] = [
    HexColor::BLACK,
    HexColor::rgb(0x67, 0x50, 0xA4),
    HexColor::rgb(0x15, 0x65, 0xC0),
    HexColor::rgb(0x2E, 0x7D, 0x32),
    HexColor::rgb(0xB3, 0x26, 0x1E),
];

/// Background colors offered as one-click chips.
pub const LIGHT_PRESETS: [HexColor; 4] = [
    HexColor::WHITE,
    HexColor::rgb(0xFE, 0xF7, 0xFF),
    HexColor::rgb(0xE8, 0xF5, 0xE9),
    HexColor::rgb(0xFF, 0xF8, 0xE1),
];

/// The single inline message under the form.
///
/// Holding both kinds in one slot keeps them mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Error(&'static str),
    Status(&'static str),
}

impl Feedback {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Feedback::Error(key) | Feedback::Status(key) => key,
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Feedback::Error(_))
    }
}

/// The last applied image together with a decoded handle for display.
#[derive(Debug, Clone)]
pub struct Preview {
    image: EncodedImage,
    handle: image::Handle,
}

impl Preview {
    #[must_use]
    pub fn image(&self) -> &EncodedImage {
        &self.image
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }
}

/// Local UI state for the generator form.
#[derive(Debug, Clone)]
pub struct State {
    input: String,
    options: RenderOptions,
    /// Raw text of the color fields; may hold a partially typed value.
    dark_input: String,
    light_input: String,
    preview: Option<Preview>,
    feedback: Option<Feedback>,
    sequence: RequestSequence,
    /// Latest encode request in flight and the text it encodes.
    pending: Option<(RequestTicket, String)>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Margin::default())
    }
}

impl State {
    /// Creates an empty form. `margin` comes from the configuration and is
    /// kept across resets.
    #[must_use]
    pub fn new(margin: Margin) -> Self {
        let options = RenderOptions {
            margin,
            ..RenderOptions::default()
        };
        Self {
            input: String::new(),
            dark_input: options.dark.to_string(),
            light_input: options.light.to_string(),
            options,
            preview: None,
            feedback: None,
            sequence: RequestSequence::default(),
            pending: None,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::UrlChanged(value) => {
                self.input = value;
                Event::None
            }
            Message::Submit => self.submit(),
            Message::SizeChanged(pixels) => self.set_options(RenderOptions {
                size: PixelSize::new(pixels),
                ..self.options
            }),
            Message::ErrorCorrectionSelected(level) => self.set_options(RenderOptions {
                error_correction: level,
                ..self.options
            }),
            Message::DarkInputChanged(value) => {
                let parsed = value.parse::<HexColor>().ok();
                self.dark_input = value;
                match parsed {
                    Some(dark) => self.set_options(RenderOptions {
                        dark,
                        ..self.options
                    }),
                    None => Event::None,
                }
            }
            Message::LightInputChanged(value) => {
                let parsed = value.parse::<HexColor>().ok();
                self.light_input = value;
                match parsed {
                    Some(light) => self.set_options(RenderOptions {
                        light,
                        ..self.options
                    }),
                    None => Event::None,
                }
            }
            Message::PresetDark(dark) => {
                self.dark_input = dark.to_string();
                self.set_options(RenderOptions {
                    dark,
                    ..self.options
                })
            }
            Message::PresetLight(light) => {
                self.light_input = light.to_string();
                self.set_options(RenderOptions {
                    light,
                    ..self.options
                })
            }
            Message::Reset => {
                self.reset();
                Event::None
            }
            Message::Download => self
                .preview
                .as_ref()
                .map_or(Event::None, |p| Event::DownloadRequested(p.image.clone())),
            Message::Copy => self
                .preview
                .as_ref()
                .map_or(Event::None, |p| Event::CopyRequested(p.image.clone())),
            Message::DismissFeedback => {
                self.feedback = None;
                Event::None
            }
            Message::EncodeFinished { ticket, result } => {
                if !self.sequence.is_current(ticket) {
                    return Event::StaleResultDiscarded(ticket);
                }
                self.pending = None;
                match result.map_err(|e| e.i18n_key()).and_then(Self::decode_preview) {
                    Ok(preview) => {
                        self.preview = Some(preview);
                        self.feedback = Some(Feedback::Status("generator-success-generated"));
                    }
                    Err(key) => {
                        self.preview = None;
                        self.feedback = Some(Feedback::Error(key));
                    }
                }
                Event::None
            }
            Message::DownloadFinished(Ok(path)) => {
                self.feedback = Some(Feedback::Status("generator-success-downloaded"));
                Event::Downloaded(path)
            }
            Message::DownloadFinished(Err(err)) => {
                self.feedback = Some(Feedback::Error(err.i18n_key()));
                Event::None
            }
            Message::DownloadCancelled => Event::None,
            Message::CopyFinished(Ok(())) => {
                self.feedback = Some(Feedback::Status("generator-success-copied"));
                Event::None
            }
            Message::CopyFinished(Err(err)) => {
                self.feedback = Some(Feedback::Error(err.i18n_key()));
                Event::None
            }
        }
    }

    fn submit(&mut self) -> Event {
        self.feedback = None;
        if let Err(err) = validate_url(&self.input) {
            self.feedback = Some(Feedback::Error(err.i18n_key()));
            return Event::None;
        }
        let text = self.input.trim().to_string();
        self.request_encode(text)
    }

    /// Applies new options and re-encodes the text of the request in flight,
    /// or the current preview's URL when nothing is pending.
    fn set_options(&mut self, options: RenderOptions) -> Event {
        if options == self.options {
            return Event::None;
        }
        self.options = options;

        let source = match (&self.pending, &self.preview) {
            (Some((_, text)), _) => Some(text.clone()),
            (None, Some(preview)) => Some(preview.image.source().to_string()),
            (None, None) => None,
        };
        source.map_or(Event::None, |text| self.request_encode(text))
    }

    fn request_encode(&mut self, text: String) -> Event {
        let ticket = self.sequence.issue();
        self.pending = Some((ticket, text.clone()));
        Event::EncodeRequested {
            ticket,
            text,
            options: self.options,
        }
    }

    fn reset(&mut self) {
        let margin = self.options.margin;
        let sequence = std::mem::take(&mut self.sequence);
        *self = Self::new(margin);
        self.sequence = sequence;
        self.sequence.invalidate();
    }

    fn decode_preview(image: EncodedImage) -> Result<Preview, &'static str> {
        let png = image
            .png_bytes()
            .map_err(|_| "generator-error-encode-failed")?;
        Ok(Preview {
            handle: image::Handle::from_bytes(png),
            image,
        })
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    #[must_use]
    pub fn dark_input(&self) -> &str {
        &self.dark_input
    }

    #[must_use]
    pub fn light_input(&self) -> &str {
        &self.light_input
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Whether an encode request is in flight.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Generate stays disabled while the URL field is blank.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.input.trim().is_empty()
    }
}
