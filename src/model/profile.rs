//! Candidate profiles as they arrive from a profile source.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image shown when a profile carries no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Identity of a profile, unique within one session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A reviewable candidate. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireProfile", rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub age: u32,
    pub bio: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Profile {
    pub fn new(id: impl Into<ProfileId>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            bio: String::new(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            tags: Vec::new(),
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// `"Name, age"` headline used on the card front.
    pub fn headline(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }
}

/// Accepted wire shapes.
///
/// Sources send either `{ "id": "..." }` or the discovery-page form
/// `{ "uuid": "...", "id": 3 }`, where `uuid` wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireProfile {
    #[serde(default)]
    uuid: Option<String>,
    #[serde(default)]
    id: Option<WireId>,
    name: String,
    age: u32,
    #[serde(default)]
    bio: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(u64),
}

impl TryFrom<WireProfile> for Profile {
    type Error = String;

    fn try_from(wire: WireProfile) -> Result<Self, Self::Error> {
        let id = match (wire.uuid, wire.id) {
            (Some(uuid), _) => uuid,
            (None, Some(WireId::Text(id))) => id,
            (None, Some(WireId::Number(id))) => id.to_string(),
            (None, None) => {
                return Err(format!("profile '{}' has neither `uuid` nor `id`", wire.name))
            }
        };

        if id.is_empty() {
            return Err(format!("profile '{}' has an empty identity", wire.name));
        }

        Ok(Self {
            id: ProfileId(id),
            name: wire.name,
            age: wire.age,
            bio: wire.bio,
            image_url: wire
                .image_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            tags: wire.tags.unwrap_or_default(),
        })
    }
}

/// Profiles served when no profile file is configured.
pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        Profile::new("1", "Sophia", 25)
            .with_bio(
                "I'm an AI companion designed to be intellectually stimulating. \
                 I love discussing philosophy, science, and art.",
            )
            .with_image("/hero-image.png")
            .with_tags(["philosophy", "science", "art"]),
        Profile::new("2", "Emma", 28)
            .with_bio(
                "Adventurous and energetic AI companion who loves to talk about travel, \
                 outdoor activities, and new experiences.",
            )
            .with_tags(["travel", "outdoors"]),
        Profile::new("3", "Olivia", 26)
            .with_bio("Creative soul who enjoys poetry, music and late-night conversations.")
            .with_tags(["music", "poetry"]),
    ]
}
