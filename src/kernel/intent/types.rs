use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Classified purpose of a user utterance.
/// Discriminants are the column indices of the classifier's output vector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    Display, EnumString, EnumIter, EnumCount, FromRepr, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum Intent {
    AskGet = 0,
    InformDisambiguate = 1,
    InformGet = 2,
    InformRefine = 3,
    RequestAddToCart = 4,
    RequestCompare = 5,
    RequestGet = 6,
}

/// How the decider treats an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentClass {
    /// Something we can't do: apologise, then offer to filter or pivot.
    Refusal,
    /// The user is stating or refining what they want: recommend.
    Preference,
    /// No scripted behaviour.
    Other,
}

impl Intent {
    pub fn class(self) -> IntentClass {
        match self {
            Intent::AskGet | Intent::InformDisambiguate | Intent::RequestCompare => {
                IntentClass::Refusal
            }
            Intent::RequestGet | Intent::InformGet | Intent::InformRefine => {
                IntentClass::Preference
            }
            Intent::RequestAddToCart => IntentClass::Other,
        }
    }

    /// Preference dimensions this intent brings into a conversation.
    pub fn dimensions(self) -> &'static [Dimension] {
        use Dimension::*;
        const ATTRIBUTES: &[Dimension] = &[Size, Type, Fabric, Pattern, Color];
        match self {
            Intent::AskGet | Intent::InformGet | Intent::InformRefine | Intent::RequestGet => {
                ATTRIBUTES
            }
            Intent::InformDisambiguate => &[],
            Intent::RequestAddToCart => &[Item],
            Intent::RequestCompare => &[Item, WithItem],
        }
    }
}

/// A named axis of product preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Dimension {
    Size,
    Type,
    Fabric,
    Pattern,
    Color,
    Item,
    WithItem,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Extracted `(value, label)` pair. The label is kept as the extractor's raw
/// string; it only becomes a [`Dimension`] if it names a known one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Entity {
    pub value: String,
    pub label: String,
}

impl Entity {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.label.parse().ok()
    }
}

impl From<(String, String)> for Entity {
    fn from((value, label): (String, String)) -> Self {
        Self { value, label }
    }
}

impl From<Entity> for (String, String) {
    fn from(entity: Entity) -> Self {
        (entity.value, entity.label)
    }
}
