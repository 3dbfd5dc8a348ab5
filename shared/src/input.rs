//! The three independent input surfaces. None of them blocks another: a
//! pending image selection survives a text submission and vice versa.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ValidationError;
use crate::model::{ParseRequest, TextAnalysisRequest};

const EXAMPLE_COMPETITOR: &str = "MotionCraft Studio";
const EXAMPLE_LINES: [&str; 17] = [
    "MotionCraft Studio is a leader in 3D animation and motion design for technology companies.",
    "",
    "Our key services:",
    "• Animated product presentation videos",
    "• 3D visualizations for SaaS platforms",
    "• Commercials for IT startups",
    "• Animated infographics",
    "",
    "Technology stack:",
    "- Cinema 4D + Redshift",
    "- After Effects + Lottie",
    "- Blender for 3D modeling",
    "- Figma for pre-production",
    "",
    "Our approach: deep immersion in the client's product, agile delivery, and a focus on \
     explaining complex technical concepts through simple, beautiful animation.",
    "",
    "The portfolio includes projects for Yandex, Tinkoff, VK and other technology giants.",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    pub text: String,
    pub competitor_name: String,
}

impl TextSurface {
    pub fn ready(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn to_request(&self) -> Result<TextAnalysisRequest, ValidationError> {
        if !self.ready() {
            return Err(ValidationError::EmptyText);
        }
        let competitor_name = Some(self.competitor_name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Ok(TextAnalysisRequest { text: self.text.trim().to_string(), competitor_name })
    }

    /// Seeds both fields with a sample agency description.
    pub fn load_example(&mut self) {
        self.text = EXAMPLE_LINES.join("\n");
        self.competitor_name = EXAMPLE_COMPETITOR.to_string();
    }
}

/// An image held entirely in memory, so its preview needs no network trip.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageBlob {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), mime_type: mime_type.into(), bytes }
    }

    pub fn is_image(&self) -> bool {
        is_image_type(&self.mime_type)
    }

    /// `data:` URL of the image, suitable for an `<img src>`.
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

impl fmt::Debug for ImageBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBlob")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

pub fn is_image_type(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// Checks a dropped file's MIME type before its contents are read.
pub fn validate_drop(mime_type: &str) -> Result<(), ValidationError> {
    if is_image_type(mime_type) { Ok(()) } else { Err(ValidationError::NotAnImage) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSurface {
    selected: Option<ImageBlob>,
    /// Encoded once per selection, not per redraw.
    preview: Option<String>,
}

impl ImageSurface {
    pub fn selected(&self) -> Option<&ImageBlob> {
        self.selected.as_ref()
    }

    /// `data:` URL of the current selection.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn ready(&self) -> bool {
        self.selected.is_some()
    }

    /// File picker selection. Replaces any previous image.
    pub fn select(&mut self, image: ImageBlob) {
        self.preview = Some(image.preview_data_url());
        self.selected = Some(image);
    }

    /// Drag-and-drop selection. Non-images are rejected without touching the
    /// current selection.
    pub fn accept_drop(&mut self, image: ImageBlob) -> Result<(), ValidationError> {
        validate_drop(&image.mime_type)?;
        self.select(image);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.preview = None;
    }

    pub fn to_request(&self) -> Result<ImageBlob, ValidationError> {
        self.selected.clone().ok_or(ValidationError::NoImage)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSurface {
    pub url: String,
}

impl UrlSurface {
    pub fn ready(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn to_request(&self) -> Result<ParseRequest, ValidationError> {
        if !self.ready() {
            return Err(ValidationError::EmptyUrl);
        }
        Ok(ParseRequest { url: self.url.trim().to_string() })
    }
}
