use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// FormId
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct FormId(u64);

impl FormId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// PageId
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct PageId(u64);

impl PageId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// FieldId
///
/// Stable integer identity for a field. Reference tokens store this id so
/// renaming a field never breaks persisted content.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct FieldId(u64);

impl FieldId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// FieldType
///
/// Parsing is strict: the authoring layer owns field types, so an unknown
/// type string is a document error, unlike operators and actions which
/// degrade to `Unsupported`.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    Checkbox,
    Date,
    Datetime,
    Email,
    File,
    Multiselect,
    Number,
    Paragraph,
    Phone,
    Radio,
    Rating,
    Select,
    Text,
    Textarea,
}

impl FieldType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Email => "email",
            Self::File => "file",
            Self::Multiselect => "multiselect",
            Self::Number => "number",
            Self::Paragraph => "paragraph",
            Self::Phone => "phone",
            Self::Radio => "radio",
            Self::Rating => "rating",
            Self::Select => "select",
            Self::Text => "text",
            Self::Textarea => "textarea",
        }
    }

    /// Checkbox and multiselect answers are lists of selected values.
    #[must_use]
    pub const fn is_list_valued(self) -> bool {
        matches!(self, Self::Checkbox | Self::Multiselect)
    }

    /// Field types whose options payload is a choice list.
    #[must_use]
    pub const fn is_choice_based(self) -> bool {
        matches!(
            self,
            Self::Checkbox | Self::Multiselect | Self::Radio | Self::Select
        )
    }

    /// Field types whose options payload is a numeric range.
    #[must_use]
    pub const fn is_range_based(self) -> bool {
        matches!(self, Self::Number | Self::Rating)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(Self::Boolean),
            "checkbox" => Ok(Self::Checkbox),
            "date" => Ok(Self::Date),
            "datetime" => Ok(Self::Datetime),
            "email" => Ok(Self::Email),
            "file" => Ok(Self::File),
            "multiselect" => Ok(Self::Multiselect),
            "number" => Ok(Self::Number),
            "paragraph" => Ok(Self::Paragraph),
            "phone" => Ok(Self::Phone),
            "radio" => Ok(Self::Radio),
            "rating" => Ok(Self::Rating),
            "select" => Ok(Self::Select),
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            _ => Err(ParseFieldTypeError(s.to_string())),
        }
    }
}

///
/// ParseFieldTypeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown field type '{0}'")]
pub struct ParseFieldTypeError(String);

///
/// ConditionOperator
///
/// The comparison vocabulary shared by condition and navigation rules.
/// Unknown wire strings deserialize to `Unsupported`, which never matches:
/// junk operators in authored data degrade to inert rules instead of a
/// parse failure.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Contains,
    Equals,
    GreaterEqual,
    GreaterThan,
    In,
    IsEmpty,
    IsNotEmpty,
    LessEqual,
    LessThan,
    NotContains,
    NotEquals,
    NotIn,
    #[default]
    #[serde(other)]
    Unsupported,
}

impl ConditionOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Equals => "equals",
            Self::GreaterEqual => "greater_equal",
            Self::GreaterThan => "greater_than",
            Self::In => "in",
            Self::IsEmpty => "is_empty",
            Self::IsNotEmpty => "is_not_empty",
            Self::LessEqual => "less_equal",
            Self::LessThan => "less_than",
            Self::NotContains => "not_contains",
            Self::NotEquals => "not_equals",
            Self::NotIn => "not_in",
            Self::Unsupported => "unsupported",
        }
    }

    /// Emptiness checks ignore the rule's literal operand.
    #[must_use]
    pub const fn is_emptiness(self) -> bool {
        matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }

    /// Operators that parse both sides as floating point.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::GreaterEqual | Self::GreaterThan | Self::LessEqual | Self::LessThan
        )
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ConditionAction
///
/// What a matching condition rule does to its owning field. Like operators,
/// unknown wire strings degrade to `Unsupported` and are ignored by the
/// resolver.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionAction {
    Disable,
    Enable,
    Hide,
    Require,
    Show,
    Skip,
    #[default]
    #[serde(other)]
    Unsupported,
}

impl ConditionAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Enable => "enable",
            Self::Hide => "hide",
            Self::Require => "require",
            Self::Show => "show",
            Self::Skip => "skip",
            Self::Unsupported => "unsupported",
        }
    }

    /// Show/hide pairs drive the baseline visibility polarity.
    #[must_use]
    pub const fn is_visibility(self) -> bool {
        matches!(self, Self::Hide | Self::Show)
    }
}

impl fmt::Display for ConditionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
