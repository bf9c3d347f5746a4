use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteId(pub i64);

impl QuoteId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("quote id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<QuoteId> for i64 {
    fn from(value: QuoteId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteText(String);

impl QuoteText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "quote text cannot be empty".into(),
            ));
        }
        if value.chars().count() > 5000 {
            return Err(DomainError::Validation(
                "quote text must be at most 5000 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<QuoteText> for String {
    fn from(value: QuoteText) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSlug(String);

impl QuoteSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "quote slug cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<QuoteSlug> for String {
    fn from(value: QuoteSlug) -> Self {
        value.0
    }
}

/// Editorial state of a quote. `published_at` is stamped on the first
/// transition into `Published` and survives later status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Published,
    #[default]
    Draft,
    Pending,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Published => "published",
            QuoteStatus::Draft => "draft",
            QuoteStatus::Pending => "pending",
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, QuoteStatus::Published)
    }
}

impl FromStr for QuoteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(QuoteStatus::Published),
            "draft" => Ok(QuoteStatus::Draft),
            "pending" => Ok(QuoteStatus::Pending),
            other => Err(DomainError::Validation(format!(
                "unknown quote status: {other}"
            ))),
        }
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the quoted words were delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteType {
    Spoken,
    Written,
    Testimony,
    Alleged,
    Paraphrased,
    Other,
}

impl QuoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteType::Spoken => "spoken",
            QuoteType::Written => "written",
            QuoteType::Testimony => "testimony",
            QuoteType::Alleged => "alleged",
            QuoteType::Paraphrased => "paraphrased",
            QuoteType::Other => "other",
        }
    }
}

impl FromStr for QuoteType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spoken" => Ok(QuoteType::Spoken),
            "written" => Ok(QuoteType::Written),
            "testimony" => Ok(QuoteType::Testimony),
            "alleged" => Ok(QuoteType::Alleged),
            "paraphrased" => Ok(QuoteType::Paraphrased),
            "other" => Ok(QuoteType::Other),
            other => Err(DomainError::Validation(format!(
                "unknown quote type: {other}"
            ))),
        }
    }
}

impl fmt::Display for QuoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub i64);

impl SourceId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("source id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SourceId> for i64 {
    fn from(value: SourceId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl(String);

impl SourceUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(DomainError::Validation(
                "source url must start with http:// or https://".into(),
            ));
        }
        if value.chars().count() > 2048 {
            return Err(DomainError::Validation(
                "source url must be at most 2048 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SourceUrl> for String {
    fn from(value: SourceUrl) -> Self {
        value.0
    }
}

/// Kind of evidence backing a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Tweet,
    Article,
    Video,
    Speech,
    Interview,
    PressConference,
    Rally,
    SocialMedia,
    Book,
    Other,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Tweet => "tweet",
            SourceType::Article => "article",
            SourceType::Video => "video",
            SourceType::Speech => "speech",
            SourceType::Interview => "interview",
            SourceType::PressConference => "press_conference",
            SourceType::Rally => "rally",
            SourceType::SocialMedia => "social_media",
            SourceType::Book => "book",
            SourceType::Other => "other",
        }
    }
}

impl FromStr for SourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tweet" => Ok(SourceType::Tweet),
            "article" => Ok(SourceType::Article),
            "video" => Ok(SourceType::Video),
            "speech" => Ok(SourceType::Speech),
            "interview" => Ok(SourceType::Interview),
            "press_conference" => Ok(SourceType::PressConference),
            "rally" => Ok(SourceType::Rally),
            "social_media" => Ok(SourceType::SocialMedia),
            "book" => Ok(SourceType::Book),
            "other" => Ok(SourceType::Other),
            other => Err(DomainError::Validation(format!(
                "unknown source type: {other}"
            ))),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
