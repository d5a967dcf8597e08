//! Idea variant model.
//!
//! # Responsibility
//! - Define the closed set of idea shapes (`BasicIdea`, `ToDo`, `Concept`).
//! - Own per-variant construction, partial-update merge and notify gating.
//!
//! # Invariants
//! - Each variant is a strict field superset of the previous one.
//! - Notify-worthy fields belong to the variant itself and are never
//!   inherited from the shape it extends.
//! - Merge never applies a falsy value (empty string, `false`, empty list).
//!
//! # See also
//! - `crate::service::idea_service` for identity assignment.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Repository-assigned identity. `0` marks an idea that has not been stored.
pub type IdeaId = u64;

/// Id carried by a constructed idea before the service stamps it.
pub const UNSTAMPED_IDEA_ID: IdeaId = 0;

/// Tag string for `IdeaKind::BasicIdea`.
pub const IDEA_KIND_BASIC_IDEA: &str = "BasicIdea";
/// Tag string for `IdeaKind::ToDo`.
pub const IDEA_KIND_TODO: &str = "ToDo";
/// Tag string for `IdeaKind::Concept`.
pub const IDEA_KIND_CONCEPT: &str = "Concept";

/// Closed set of idea variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdeaKind {
    /// Title and description only.
    BasicIdea,
    /// Basic idea plus a completion flag.
    ToDo,
    /// To-do plus an ordered list of references.
    Concept,
}

impl IdeaKind {
    /// All variants in declaration order.
    pub const ALL: [IdeaKind; 3] = [Self::BasicIdea, Self::ToDo, Self::Concept];

    /// Stable tag string used by callers to name a variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BasicIdea => IDEA_KIND_BASIC_IDEA,
            Self::ToDo => IDEA_KIND_TODO,
            Self::Concept => IDEA_KIND_CONCEPT,
        }
    }

    /// Fields whose presence in an update triggers a notification.
    pub fn notify_worthy_fields(self) -> &'static [IdeaField] {
        match self {
            Self::BasicIdea => &[IdeaField::Title],
            Self::ToDo => &[IdeaField::Done],
            Self::Concept => &[IdeaField::References],
        }
    }

    /// Returns whether any of `present_fields` is notify-worthy for this kind.
    ///
    /// `present_fields` is the key set of the update request, not the set of
    /// values that actually changed.
    pub fn should_notify(self, present_fields: &[IdeaField]) -> bool {
        self.notify_worthy_fields()
            .iter()
            .any(|field| present_fields.contains(field))
    }
}

impl Display for IdeaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaKind {
    type Err = UnknownIdeaKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_idea_kind(value)
    }
}

/// Parses one variant tag. Matching is exact and case-sensitive.
pub fn parse_idea_kind(value: &str) -> Result<IdeaKind, UnknownIdeaKind> {
    match value {
        IDEA_KIND_BASIC_IDEA => Ok(IdeaKind::BasicIdea),
        IDEA_KIND_TODO => Ok(IdeaKind::ToDo),
        IDEA_KIND_CONCEPT => Ok(IdeaKind::Concept),
        other => Err(UnknownIdeaKind(other.to_string())),
    }
}

/// Tag names no known idea variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIdeaKind(pub String);

impl Display for UnknownIdeaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown idea type `{}`; expected {}|{}|{}",
            self.0, IDEA_KIND_BASIC_IDEA, IDEA_KIND_TODO, IDEA_KIND_CONCEPT
        )
    }
}

impl Error for UnknownIdeaKind {}

/// Updatable idea field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdeaField {
    Description,
    Title,
    Done,
    References,
}

impl IdeaField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Title => "title",
            Self::Done => "done",
            Self::References => "references",
        }
    }
}

/// Payload of `IdeaKind::BasicIdea`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicIdea {
    pub id: IdeaId,
    pub description: String,
    pub title: String,
}

/// Payload of `IdeaKind::ToDo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDo {
    pub id: IdeaId,
    pub description: String,
    pub title: String,
    pub done: bool,
}

/// Payload of `IdeaKind::Concept`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: IdeaId,
    pub description: String,
    pub title: String,
    pub done: bool,
    pub references: Vec<String>,
}

/// One stored idea, discriminated by variant.
///
/// Serialized as a flat object with the variant name under `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Idea {
    BasicIdea(BasicIdea),
    ToDo(ToDo),
    Concept(Concept),
}

/// Creation parameters shared by every variant.
///
/// Fields the target variant does not carry are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdea {
    pub description: String,
    pub title: String,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub references: Option<Vec<String>>,
}

impl NewIdea {
    pub fn new(description: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            title: title.into(),
            done: None,
            references: None,
        }
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = Some(references.into_iter().map(Into::into).collect());
        self
    }
}

/// Partial update. A `Some` field counts as present in the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
}

impl IdeaUpdate {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    pub fn references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = Some(references.into_iter().map(Into::into).collect());
        self
    }

    /// Key set of the request, regardless of value or target variant.
    pub fn present_fields(&self) -> Vec<IdeaField> {
        let mut fields = Vec::with_capacity(4);
        if self.description.is_some() {
            fields.push(IdeaField::Description);
        }
        if self.title.is_some() {
            fields.push(IdeaField::Title);
        }
        if self.done.is_some() {
            fields.push(IdeaField::Done);
        }
        if self.references.is_some() {
            fields.push(IdeaField::References);
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

impl Idea {
    /// Builds an unstamped idea of `kind`.
    ///
    /// `done` defaults to `false`; missing `references` become an empty list.
    pub fn construct(kind: IdeaKind, params: NewIdea) -> Self {
        let NewIdea {
            description,
            title,
            done,
            references,
        } = params;
        let done = done.unwrap_or(false);

        match kind {
            IdeaKind::BasicIdea => Self::BasicIdea(BasicIdea {
                id: UNSTAMPED_IDEA_ID,
                description,
                title,
            }),
            IdeaKind::ToDo => Self::ToDo(ToDo {
                id: UNSTAMPED_IDEA_ID,
                description,
                title,
                done,
            }),
            IdeaKind::Concept => Self::Concept(Concept {
                id: UNSTAMPED_IDEA_ID,
                description,
                title,
                done,
                references: references.unwrap_or_default(),
            }),
        }
    }

    /// Builds an unstamped idea from a variant tag string.
    pub fn construct_tagged(tag: &str, params: NewIdea) -> Result<Self, UnknownIdeaKind> {
        let kind = parse_idea_kind(tag)?;
        Ok(Self::construct(kind, params))
    }

    pub fn kind(&self) -> IdeaKind {
        match self {
            Self::BasicIdea(_) => IdeaKind::BasicIdea,
            Self::ToDo(_) => IdeaKind::ToDo,
            Self::Concept(_) => IdeaKind::Concept,
        }
    }

    pub fn id(&self) -> IdeaId {
        match self {
            Self::BasicIdea(idea) => idea.id,
            Self::ToDo(idea) => idea.id,
            Self::Concept(idea) => idea.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::BasicIdea(idea) => &idea.title,
            Self::ToDo(idea) => &idea.title,
            Self::Concept(idea) => &idea.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::BasicIdea(idea) => &idea.description,
            Self::ToDo(idea) => &idea.description,
            Self::Concept(idea) => &idea.description,
        }
    }

    /// `None` for variants without a completion flag.
    pub fn done(&self) -> Option<bool> {
        match self {
            Self::BasicIdea(_) => None,
            Self::ToDo(idea) => Some(idea.done),
            Self::Concept(idea) => Some(idea.done),
        }
    }

    /// `None` for variants without references.
    pub fn references(&self) -> Option<&[String]> {
        match self {
            Self::Concept(idea) => Some(&idea.references),
            _ => None,
        }
    }

    /// Returns whether the service has assigned an id yet.
    pub fn is_stamped(&self) -> bool {
        self.id() != UNSTAMPED_IDEA_ID
    }

    pub(crate) fn stamp(&mut self, id: IdeaId) {
        match self {
            Self::BasicIdea(idea) => idea.id = id,
            Self::ToDo(idea) => idea.id = id,
            Self::Concept(idea) => idea.id = id,
        }
    }

    /// Merges a partial update in place.
    ///
    /// Falsy values are skipped, so an update can never set `done` back to
    /// `false`, clear `references`, or blank a text field. Fields the variant
    /// does not carry are ignored.
    // Open question: the falsy skip may be unintended; kept as observed.
    pub fn merge_update(&mut self, update: &IdeaUpdate) {
        match self {
            Self::BasicIdea(idea) => {
                merge_text(&mut idea.description, update.description.as_deref());
                merge_text(&mut idea.title, update.title.as_deref());
            }
            Self::ToDo(idea) => {
                merge_text(&mut idea.description, update.description.as_deref());
                merge_text(&mut idea.title, update.title.as_deref());
                merge_flag(&mut idea.done, update.done);
            }
            Self::Concept(idea) => {
                merge_text(&mut idea.description, update.description.as_deref());
                merge_text(&mut idea.title, update.title.as_deref());
                merge_flag(&mut idea.done, update.done);
                merge_list(&mut idea.references, update.references.as_deref());
            }
        }
    }

    /// Notify decision for `update` against this idea's variant.
    pub fn should_notify(&self, update: &IdeaUpdate) -> bool {
        self.kind().should_notify(&update.present_fields())
    }
}

fn merge_text(target: &mut String, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        *target = value.to_string();
    }
}

fn merge_flag(target: &mut bool, value: Option<bool>) {
    if value == Some(true) {
        *target = true;
    }
}

fn merge_list(target: &mut Vec<String>, value: Option<&[String]>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        *target = value.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_idea_kind, Idea, IdeaField, IdeaKind, IdeaUpdate, NewIdea, UnknownIdeaKind,
    };

    fn concept() -> Idea {
        Idea::construct(
            IdeaKind::Concept,
            NewIdea::new("d", "t").with_references(["www.site.com"]),
        )
    }

    #[test]
    fn parses_all_supported_kinds() {
        for kind in IdeaKind::ALL {
            assert_eq!(parse_idea_kind(kind.as_str()).expect("known tag"), kind);
        }
    }

    #[test]
    fn rejects_non_exact_kind_tags() {
        let err = parse_idea_kind("todo").expect_err("lowercase tag must fail");
        assert_eq!(err, UnknownIdeaKind("todo".to_string()));
        assert!(err.to_string().contains("expected BasicIdea|ToDo|Concept"));
    }

    #[test]
    fn notify_sets_are_not_inherited() {
        assert_eq!(
            IdeaKind::BasicIdea.notify_worthy_fields(),
            &[IdeaField::Title]
        );
        assert_eq!(IdeaKind::ToDo.notify_worthy_fields(), &[IdeaField::Done]);
        assert_eq!(
            IdeaKind::Concept.notify_worthy_fields(),
            &[IdeaField::References]
        );
        assert!(!IdeaKind::ToDo.should_notify(&[IdeaField::Title]));
        assert!(!IdeaKind::Concept.should_notify(&[IdeaField::Done, IdeaField::Title]));
    }

    #[test]
    fn construct_defaults_missing_optional_fields() {
        let todo = Idea::construct(IdeaKind::ToDo, NewIdea::new("d", "t"));
        assert_eq!(todo.done(), Some(false));
        assert!(!todo.is_stamped());

        let concept = Idea::construct(IdeaKind::Concept, NewIdea::new("d", "t"));
        assert_eq!(concept.references(), Some(&[] as &[String]));
    }

    #[test]
    fn merge_skips_falsy_values() {
        let mut idea = concept();
        idea.merge_update(&IdeaUpdate::default().done(true));
        idea.merge_update(
            &IdeaUpdate::default()
                .title("")
                .done(false)
                .references(Vec::<String>::new()),
        );

        assert_eq!(idea.title(), "t");
        assert_eq!(idea.done(), Some(true));
        assert_eq!(idea.references(), Some(&["www.site.com".to_string()][..]));
    }

    #[test]
    fn merge_ignores_fields_the_variant_lacks() {
        let mut idea = Idea::construct(IdeaKind::BasicIdea, NewIdea::new("d", "t"));
        idea.merge_update(&IdeaUpdate::default().done(true).references(["x"]));
        assert_eq!(
            idea,
            Idea::construct(IdeaKind::BasicIdea, NewIdea::new("d", "t"))
        );
    }

    #[test]
    fn present_fields_follow_request_keys() {
        let update = IdeaUpdate::default().references(["a"]).description("");
        assert_eq!(
            update.present_fields(),
            vec![IdeaField::Description, IdeaField::References]
        );
        assert!(IdeaUpdate::default().is_empty());
    }
}
