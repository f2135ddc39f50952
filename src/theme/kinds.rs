#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;
use std::str::FromStr;

use enum_assoc::Assoc;
use thiserror::Error;

/// Template family an input type draws its default styling from.
///
/// `Standalone` types (`color`, `file`, `range`) carry their own one-off
/// class groups instead of a shared template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Text,
    Box,
    Button,
    Standalone,
}

/// HTML form input types recognized by the class tables.
///
/// `as_str()` returns the wire name used in markup and in serialized
/// tables (kebab-case, e.g. `datetime-local`).
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn classification(&self) -> Classification)]
pub enum InputType {
    #[assoc(as_str = "button")]
    #[assoc(classification = Classification::Button)]
    Button,
    #[assoc(as_str = "color")]
    #[assoc(classification = Classification::Standalone)]
    Color,
    #[assoc(as_str = "date")]
    #[assoc(classification = Classification::Text)]
    Date,
    #[assoc(as_str = "datetime-local")]
    #[assoc(classification = Classification::Text)]
    DatetimeLocal,
    #[assoc(as_str = "checkbox")]
    #[assoc(classification = Classification::Box)]
    Checkbox,
    #[assoc(as_str = "email")]
    #[assoc(classification = Classification::Text)]
    Email,
    #[assoc(as_str = "file")]
    #[assoc(classification = Classification::Standalone)]
    File,
    #[assoc(as_str = "month")]
    #[assoc(classification = Classification::Text)]
    Month,
    #[assoc(as_str = "number")]
    #[assoc(classification = Classification::Text)]
    Number,
    #[assoc(as_str = "password")]
    #[assoc(classification = Classification::Text)]
    Password,
    #[assoc(as_str = "radio")]
    #[assoc(classification = Classification::Box)]
    Radio,
    #[assoc(as_str = "range")]
    #[assoc(classification = Classification::Standalone)]
    Range,
    #[assoc(as_str = "search")]
    #[assoc(classification = Classification::Text)]
    Search,
    #[assoc(as_str = "select")]
    #[assoc(classification = Classification::Text)]
    Select,
    #[assoc(as_str = "submit")]
    #[assoc(classification = Classification::Button)]
    Submit,
    #[assoc(as_str = "tel")]
    #[assoc(classification = Classification::Text)]
    Tel,
    #[assoc(as_str = "text")]
    #[assoc(classification = Classification::Text)]
    Text,
    #[assoc(as_str = "textarea")]
    #[assoc(classification = Classification::Text)]
    Textarea,
    #[assoc(as_str = "time")]
    #[assoc(classification = Classification::Text)]
    Time,
    #[assoc(as_str = "url")]
    #[assoc(classification = Classification::Text)]
    Url,
    #[assoc(as_str = "week")]
    #[assoc(classification = Classification::Text)]
    Week,
}

impl InputType {
    /// Every recognized input type, in the order table entries are authored.
    pub const ALL: [InputType; 21] = [
        InputType::Button,
        InputType::Color,
        InputType::Date,
        InputType::DatetimeLocal,
        InputType::Checkbox,
        InputType::Email,
        InputType::File,
        InputType::Month,
        InputType::Number,
        InputType::Password,
        InputType::Radio,
        InputType::Range,
        InputType::Search,
        InputType::Select,
        InputType::Submit,
        InputType::Tel,
        InputType::Text,
        InputType::Textarea,
        InputType::Time,
        InputType::Url,
        InputType::Week,
    ];
}

/// Error returned when parsing an unrecognized input type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown input type `{0}`")]
pub struct ParseInputTypeError(pub String);

impl FromStr for InputType {
    type Err = ParseInputTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ParseInputTypeError(s.to_owned()))
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI regions of a rendered form input that may carry classes.
///
/// Not every region applies to every input type; a [`ClassGroup`] holds
/// only the regions its input type styles.
///
/// [`ClassGroup`]: crate::theme::ClassGroup
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum Region {
    /// Outermost wrapper around the whole field.
    #[assoc(as_str = "outer")]
    Outer,
    #[assoc(as_str = "label")]
    Label,
    /// Decorated container directly around the input element.
    #[assoc(as_str = "inner")]
    Inner,
    #[assoc(as_str = "input")]
    Input,
    #[assoc(as_str = "fieldset")]
    Fieldset,
    #[assoc(as_str = "legend")]
    Legend,
    #[assoc(as_str = "wrapper")]
    Wrapper,
    #[assoc(as_str = "help")]
    Help,
    /// List of validation messages.
    #[assoc(as_str = "messages")]
    Messages,
    /// Single validation message.
    #[assoc(as_str = "message")]
    Message,
    /// File input placeholder shown before a selection is made.
    #[assoc(as_str = "noFiles")]
    NoFiles,
    /// One selected file in a file input's list.
    #[assoc(as_str = "fileItem")]
    FileItem,
    /// Control that clears a file input's selection.
    #[assoc(as_str = "removeFiles")]
    RemoveFiles,
}

impl Region {
    /// Every recognized region key.
    pub const ALL: [Region; 13] = [
        Region::Outer,
        Region::Label,
        Region::Inner,
        Region::Input,
        Region::Fieldset,
        Region::Legend,
        Region::Wrapper,
        Region::Help,
        Region::Messages,
        Region::Message,
        Region::NoFiles,
        Region::FileItem,
        Region::RemoveFiles,
    ];
}

/// Error returned when parsing an unrecognized region name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region `{0}`")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ParseRegionError(s.to_owned()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_input_type_as_str_round_trips() {
        for ty in InputType::ALL {
            let parsed: InputType = ty.as_str().parse().unwrap();
            assert_eq!(parsed, ty, "`{}` should parse back to itself", ty);
        }
    }

    #[test]
    fn test_region_as_str_round_trips() {
        for region in Region::ALL {
            let parsed: Region = region.as_str().parse().unwrap();
            assert_eq!(parsed, region, "`{}` should parse back to itself", region);
        }
    }

    #[test]
    fn test_unknown_names_fail_to_parse() {
        assert_eq!(
            "telephone".parse::<InputType>(),
            Err(ParseInputTypeError("telephone".to_owned()))
        );
        assert_eq!(
            "Input".parse::<Region>(),
            Err(ParseRegionError("Input".to_owned()))
        );
    }

    #[test]
    fn test_wire_names_are_unique() {
        let type_names: HashSet<&str> = InputType::ALL.iter().map(|ty| ty.as_str()).collect();
        assert_eq!(type_names.len(), InputType::ALL.len());

        let region_names: HashSet<&str> = Region::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(region_names.len(), Region::ALL.len());
    }

    #[test]
    fn test_classification_families() {
        let count = |classification| {
            InputType::ALL
                .into_iter()
                .filter(|ty| ty.classification() == classification)
                .count()
        };

        assert_eq!(count(Classification::Text), 14);
        assert_eq!(count(Classification::Box), 2);
        assert_eq!(count(Classification::Button), 2);
        assert_eq!(count(Classification::Standalone), 3);
    }

    #[test]
    fn test_datetime_local_uses_kebab_case() {
        assert_eq!(InputType::DatetimeLocal.as_str(), "datetime-local");
    }
}
