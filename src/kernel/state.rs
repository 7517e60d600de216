use super::action::Action;
use super::intent::types::{Dimension, Entity, Intent};
use super::time::Timestamp;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub Uuid);

impl ConversationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-dimension preference values, kept in the order dimensions were
/// introduced. That order is what clarification tie-breaks rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    entries: Vec<(Dimension, Vec<String>)>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, dimension: Dimension) -> bool {
        self.entries.iter().any(|(d, _)| *d == dimension)
    }

    pub fn get(&self, dimension: Dimension) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, values)| values.as_slice())
    }

    /// Introduces `dimension` as unfilled if it is not tracked yet.
    /// Returns true when the key was added.
    pub fn introduce(&mut self, dimension: Dimension) -> bool {
        if self.contains(dimension) {
            return false;
        }
        self.entries.push((dimension, Vec::new()));
        true
    }

    /// Appends `value` under an already tracked dimension unless it is there.
    /// Returns true when the value was recorded.
    pub fn record(&mut self, dimension: Dimension, value: &str) -> bool {
        match self.entries.iter_mut().find(|(d, _)| *d == dimension) {
            Some((_, values)) if !values.iter().any(|v| v == value) => {
                values.push(value.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &[String])> {
        self.entries.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    /// Tracked dimensions with no value yet, in introduction order.
    pub fn unfilled(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.entries
            .iter()
            .filter(|(_, values)| values.is_empty())
            .map(|(d, _)| *d)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Dimension, Vec<String>)> for Slots {
    fn from_iter<I: IntoIterator<Item = (Dimension, Vec<String>)>>(iter: I) -> Self {
        let mut slots = Slots::new();
        for (dimension, values) in iter {
            slots.introduce(dimension);
            for value in &values {
                slots.record(dimension, value);
            }
        }
        slots
    }
}

impl Serialize for Slots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (dimension, values) in &self.entries {
            map.serialize_entry(dimension, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Slots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlotsVisitor;

        impl<'de> Visitor<'de> for SlotsVisitor {
            type Value = Slots;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of dimension name to value list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Slots, A::Error> {
                let mut slots = Slots::new();
                while let Some((dimension, values)) =
                    access.next_entry::<Dimension, Vec<String>>()?
                {
                    slots.introduce(dimension);
                    for value in &values {
                        slots.record(dimension, value);
                    }
                }
                Ok(slots)
            }
        }

        deserializer.deserialize_map(SlotsVisitor)
    }
}

/// The user's side of a turn as it is logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename = "ask")]
pub struct Utterance {
    pub text: String,
    /// Resolved top intent.
    pub intent: Intent,
    /// Classifier output the intent was resolved from.
    pub distribution: Vec<f32>,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TurnPayload {
    Utterance(Utterance),
    Action(Action),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// True when the system produced this turn.
    #[serde(rename = "self")]
    pub from_system: bool,
    pub time: Timestamp,
    pub data: Vec<TurnPayload>,
}

impl Turn {
    pub fn user(time: Timestamp, utterance: Utterance) -> Self {
        Self {
            from_system: false,
            time,
            data: vec![TurnPayload::Utterance(utterance)],
        }
    }

    pub fn system(time: Timestamp, actions: &[Action]) -> Self {
        Self {
            from_system: true,
            time,
            data: actions.iter().cloned().map(TurnPayload::Action).collect(),
        }
    }
}

/// Everything the policy remembers about one conversation.
///
/// Owned by the session layer. Not safe to share between simultaneous
/// requests; callers serialize access per conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    #[serde(default)]
    pub id: ConversationId,
    #[serde(default)]
    pub slots: Slots,
    #[serde(default)]
    turns: Vec<Turn>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh conversation whose slots are already seeded.
    pub fn with_slots(slots: Slots) -> Self {
        Self {
            slots,
            ..Self::default()
        }
    }

    /// Append-only: turns are never reordered or dropped.
    pub fn push_turn(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Seconds since the previous turn, or 0 on the first turn.
    pub fn elapsed_since_last_turn(&self, now: Timestamp) -> f64 {
        self.last_turn()
            .map(|turn| now.seconds_since(turn.time))
            .unwrap_or(0.0)
    }
}
