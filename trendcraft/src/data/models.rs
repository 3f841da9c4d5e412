//! Data models
//!
//! Rust structs representing the research, idea and saved-item entities.
//! All models use serde with camelCase field names for the frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declares a closed set of lowercase string values.
///
/// Parsing is case-insensitive; serialization always emits the canonical
/// lowercase form.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| format!("unknown {} '{}'", stringify!($name), s))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_enum!(
    /// Where a piece of researched content was published
    Platform {
        Youtube => "youtube",
        Blog => "blog",
        Reddit => "reddit",
        Twitter => "twitter",
        Other => "other",
    }
);

string_enum!(
    /// Format a content idea is meant to be produced in
    ContentType {
        Course => "course",
        Book => "book",
        Workshop => "workshop",
        Video => "video",
        Blog => "blog",
        Coaching => "coaching",
        Webinar => "webinar",
        Social => "social",
        Infographic => "infographic",
    }
);

string_enum!(
    SavedItemType {
        Content => "content",
        Ideas => "ideas",
        Drafts => "drafts",
        Searches => "searches",
    }
);

string_enum!(
    Category {
        Technology => "technology",
        Business => "business",
        Lifestyle => "lifestyle",
        Education => "education",
        Entertainment => "entertainment",
    }
);

string_enum!(
    Difficulty {
        Beginner => "beginner",
        Medium => "medium",
        Advanced => "advanced",
    }
);

string_enum!(
    Audience {
        General => "general",
        Students => "students",
        Business => "business",
        Educators => "educators",
        Coaches => "coaches",
        Entrepreneurs => "entrepreneurs",
        Creators => "creators",
    }
);

string_enum!(
    Structure {
        Mixed => "mixed",
        Sequential => "sequential",
        Modular => "modular",
        Project => "project",
        CaseStudy => "case-study",
    }
);

string_enum!(
    Objective {
        Engagement => "engagement",
        Retention => "retention",
        Practical => "practical",
        Transformation => "transformation",
        Certification => "certification",
    }
);

string_enum!(
    DraftStatus {
        Draft => "draft",
        Review => "review",
        Published => "published",
    }
);

string_enum!(
    /// Direction of a trending topic's growth
    Trend {
        Rising => "rising",
        Falling => "falling",
        Flat => "flat",
    }
);

/// Either every value or exactly one value of an enumerated field.
///
/// Serialized as the string `"all"` or the selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T: Copy> Selection<T> {
    pub fn selected(&self) -> Option<T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(*value),
        }
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str("all"),
            Selection::Only(value) => serializer.collect_str(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr<Err = String>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        raw.parse()
            .map(Selection::Only)
            .map_err(serde::de::Error::custom)
    }
}

/// A researched piece of published content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub platform: Platform,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub views: u64,
    pub engagement: u64,
    pub published_date: DateTime<Utc>,
}

/// Optional narrowing applied to a content search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub platform: Option<Platform>,
    /// Any-of platform set; empty means unrestricted
    pub platforms: Vec<Platform>,
}

impl SearchFilters {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform: Some(platform),
            platforms: Vec::new(),
        }
    }

    pub fn accepts(&self, item: &ContentItem) -> bool {
        let single = self.platform.map_or(true, |p| p == item.platform);
        let any_of = self.platforms.is_empty() || self.platforms.contains(&item.platform);
        single && any_of
    }
}

/// A suggested piece of content to produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIdea {
    pub id: i64,
    pub title: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub score: i32,
    pub reasoning: String,
}

/// Knobs of the idea generator form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaParameters {
    #[serde(rename = "type")]
    pub content_type: Selection<ContentType>,
    pub difficulty: Difficulty,
    pub audience: Audience,
    pub structure: Structure,
    pub objectives: Objective,
}

impl Default for IdeaParameters {
    fn default() -> Self {
        Self {
            content_type: Selection::All,
            difficulty: Difficulty::Medium,
            audience: Audience::General,
            structure: Structure::Mixed,
            objectives: Objective::Engagement,
        }
    }
}

/// An item bookmarked by the user during this session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub item_type: SavedItemType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Save item request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedItem {
    #[serde(rename = "type")]
    pub item_type: SavedItemType,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A search topic gaining or losing interest.
///
/// Serialized with its derived `trend` alongside the stored fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", into = "TrendingTopicView")]
pub struct TrendingTopic {
    pub id: i64,
    pub keyword: String,
    pub category: Category,
    pub volume: u64,
    /// Signed percentage change in search volume
    pub growth: f64,
    #[serde(default)]
    pub related_terms: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrendingTopicView {
    id: i64,
    keyword: String,
    category: Category,
    volume: u64,
    growth: f64,
    related_terms: Vec<String>,
    trend: Trend,
}

impl From<TrendingTopic> for TrendingTopicView {
    fn from(topic: TrendingTopic) -> Self {
        Self {
            trend: topic.trend(),
            id: topic.id,
            keyword: topic.keyword,
            category: topic.category,
            volume: topic.volume,
            growth: topic.growth,
            related_terms: topic.related_terms,
        }
    }
}

impl TrendingTopic {
    pub fn trend(&self) -> Trend {
        if self.growth > 0.0 {
            Trend::Rising
        } else if self.growth < 0.0 {
            Trend::Falling
        } else {
            Trend::Flat
        }
    }
}

/// Body sections of a draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftContent {
    pub outline: String,
    pub introduction: String,
    pub key_points: String,
    pub conclusion: String,
    pub resources: String,
}

impl DraftContent {
    /// Whitespace-separated words across every section
    pub fn word_count(&self) -> usize {
        [
            &self.outline,
            &self.introduction,
            &self.key_points,
            &self.conclusion,
            &self.resources,
        ]
        .iter()
        .map(|section| section.split_whitespace().count())
        .sum()
    }
}

/// A structured draft derived from a content idea
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: DraftContent,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub word_count: usize,
    /// Not checked against the idea dataset
    pub original_idea_id: i64,
}

/// Draft content request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub content: DraftContent,
}

/// Update draft request; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<DraftStatus>,
    pub outline: Option<String>,
    pub introduction: Option<String>,
    pub key_points: Option<String>,
    pub conclusion: Option<String>,
    pub resources: Option<String>,
}

impl DraftUpdate {
    pub fn apply(self, draft: &mut Draft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }

        let content = &mut draft.content;
        if let Some(outline) = self.outline {
            content.outline = outline;
        }
        if let Some(introduction) = self.introduction {
            content.introduction = introduction;
        }
        if let Some(key_points) = self.key_points {
            content.key_points = key_points;
        }
        if let Some(conclusion) = self.conclusion {
            content.conclusion = conclusion;
        }
        if let Some(resources) = self.resources {
            content.resources = resources;
        }

        draft.word_count = draft.content.word_count();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDraftResponse {
    pub success: bool,
    pub deleted_id: i64,
}
