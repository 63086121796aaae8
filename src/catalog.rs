//! Fixed template catalog
//!
//! Maps each prompt category to its template string, its ordered field list,
//! and a hint per field. The table is compiled in and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::PromptError;

/// The four supported prompt categories. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Text,
    Image,
    Code,
    Audio,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [Category::Text, Category::Image, Category::Code, Category::Audio];

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Self::Text => "Text models (ChatGPT, Claude, Gemini)",
            Self::Image => "Image models (DALL-E, Midjourney, SDXL)",
            Self::Code => "Code models (Copilot, CodeWhisperer)",
            Self::Audio => "Audio/video models (ElevenLabs, RunwayML)",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
            Self::Code => write!(f, "code"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "code" => Ok(Self::Code),
            "audio" => Ok(Self::Audio),
            other => Err(PromptError::UnknownCategory { name: other.to_string() }),
        }
    }
}

const TEXT_TEMPLATE: &str = "Use this template for Text Models (e.g., ChatGPT, Claude, Gemini):\n\nGoal: {{goal}}\nContext: {{context}}\nTone: {{tone}}\nStyle: {{style}}\nOutput format: {{format}}\nSpecial instructions: {{instructions}}";

const IMAGE_TEMPLATE: &str = "Use this template for Image Models (e.g., DALL\u{b7}E, Midjourney, SDXL):\n\nSubject: {{subject}}\nScene description: {{scene}}\nLighting: {{lighting}}\nArt style: {{style}}\nResolution/aspect: {{resolution}}\nSpecial instructions: {{instructions}}";

const CODE_TEMPLATE: &str = "Use this template for Code Models (e.g., GitHub Copilot, CodeWhisperer):\n\nLanguage: {{language}}\nGoal: {{goal}}\nContext: {{context}}\nConstraints: {{constraints}}\nExpected output: {{output}}\nSpecial instructions: {{instructions}}";

const AUDIO_TEMPLATE: &str = "Use this template for Audio/Video Models (e.g., ElevenLabs, RunwayML):\n\nMedia Type: {{media}}\nGoal: {{goal}}\nVoice/Style: {{style}}\nDuration: {{duration}}\nScript or Scene: {{script}}\nSpecial instructions: {{instructions}}";

/// Get the template string for a category
pub fn template(category: Category) -> &'static str {
    match category {
        Category::Text => TEXT_TEMPLATE,
        Category::Image => IMAGE_TEMPLATE,
        Category::Code => CODE_TEMPLATE,
        Category::Audio => AUDIO_TEMPLATE,
    }
}

/// Get the ordered field names for a category (determines display order)
pub fn field_names(category: Category) -> &'static [&'static str] {
    match category {
        Category::Text => &["goal", "context", "tone", "style", "format", "instructions"],
        Category::Image => &["subject", "scene", "lighting", "style", "resolution", "instructions"],
        Category::Code => &["language", "goal", "context", "constraints", "output", "instructions"],
        Category::Audio => &["media", "goal", "style", "duration", "script", "instructions"],
    }
}

/// Get the hint text for a field within a category
///
/// Returns `None` if the field is not part of the category's field list.
pub fn hint(category: Category, field: &str) -> Option<&'static str> {
    let hint = match (category, field) {
        (Category::Text, "goal") => "What you want the AI to do or create",
        (Category::Text, "context") => "Background info, role-play details, or tone preferences",
        (Category::Text, "tone") => "Formal, casual, professional, friendly etc.",
        (Category::Text, "style") => "Writing style like academic, creative, technical etc.",
        (Category::Text, "format") => "Desired output structure (paragraph, list, table etc.)",
        (Category::Text, "instructions") => "Any additional requirements or preferences",

        (Category::Image, "subject") => "Main subject or focus of the image",
        (Category::Image, "scene") => "Description of the environment or setting",
        (Category::Image, "lighting") => "Lighting conditions and atmosphere",
        (Category::Image, "style") => "Artistic style or visual treatment",
        (Category::Image, "resolution") => "Image dimensions and quality",
        (Category::Image, "instructions") => "Additional details or specifications",

        (Category::Code, "language") => "Programming language to use",
        (Category::Code, "goal") => "Purpose of the code",
        (Category::Code, "context") => "Relevant system or project details",
        (Category::Code, "constraints") => "Technical limitations or requirements",
        (Category::Code, "output") => "Expected code structure or format",
        (Category::Code, "instructions") => "Additional coding guidelines",

        (Category::Audio, "media") => "Type of audio/video content",
        (Category::Audio, "goal") => "Purpose of the audio/video",
        (Category::Audio, "style") => "Voice or production style",
        (Category::Audio, "duration") => "Length of the content",
        (Category::Audio, "script") => "Content or dialogue details",
        (Category::Audio, "instructions") => "Additional production notes",

        _ => return None,
    };
    Some(hint)
}
