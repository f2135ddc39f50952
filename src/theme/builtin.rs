//! The built-in class table.
//!
//! Many input types are styled identically, so the table is authored from
//! three shared templates (text-like, box-like, button-like) plus one-off
//! groups, with targeted overrides for the types that deviate in a single
//! region.

use super::kinds::{Classification, InputType, Region};
use super::schema::{ClassGroup, ClassTable};

/// The `textarea` input swaps the one-line text input for a taller block.
const TEXTAREA_INPUT: &str =
    "block w-full h-32 px-3 border-none text-base text-gray-700 placeholder-gray-400 focus:shadow-outline";

fn defaults_group() -> ClassGroup {
    ClassGroup::new()
        .with(Region::Outer, "mb-5")
        .with(Region::Help, "text-xs text-gray-500")
        .with(Region::Messages, "list-none p-0 mt-1 mb-0")
        .with(Region::Message, "text-red-500 mb-1 text-xs")
}

/// Shared by the thirteen text-like input types, with `textarea` derived
/// from it by an `input` override.
fn text_group() -> ClassGroup {
    ClassGroup::new()
        .with(Region::Label, "block mb-1 font-bold text-sm")
        .with(
            Region::Inner,
            "max-w-md border border-gray-400 rounded-lg mb-1 overflow-hidden focus-within:border-blue-500",
        )
        .with(
            Region::Input,
            "w-full h-10 px-3 border-none text-base text-gray-700 placeholder-gray-400",
        )
}

/// Shared by `checkbox` and `radio`; `radio` swaps the square rounding
/// token for the fully-rounded one.
fn box_group() -> ClassGroup {
    ClassGroup::new()
        .with(Region::Fieldset, "max-w-md border border-gray-400 rounded-md px-2 pb-1")
        .with(Region::Legend, "font-bold text-sm")
        .with(Region::Wrapper, "flex items-center mb-1 cursor-pointer")
        .with(Region::Help, "mb-2")
        .with(
            Region::Input,
            "form-check-input appearance-none h-5 w-5 mr-2 border border-gray-500 rounded-sm bg-white checked:bg-blue-500 focus:outline-none focus:ring-0 transition duration-200",
        )
        .with(Region::Label, "text-sm text-gray-700 mt-1")
}

/// Shared by `button` and `submit`.
fn button_group() -> ClassGroup {
    ClassGroup::new()
        .with(Region::Wrapper, "mb-1")
        .with(
            Region::Input,
            "bg-blue-500 hover:bg-blue-700 text-white text-sm font-normal py-3 px-5 rounded",
        )
}

fn standalone_group(ty: InputType) -> ClassGroup {
    match ty {
        InputType::Color => ClassGroup::new()
            .with(Region::Label, "block mb-1 font-bold text-sm")
            .with(
                Region::Input,
                "w-16 h-8 appearance-none border border-gray-300 rounded-md mb-2 p-1",
            ),
        InputType::File => ClassGroup::new()
            .with(Region::Label, "block mb-1 font-bold text-sm")
            .with(Region::Inner, "max-w-md")
            .with(
                Region::Input,
                "block w-full mb-1 text-sm text-gray-900 bg-gray-50 rounded-lg border border-gray-300 cursor-pointer focus:outline-none focus:border-blue-500",
            )
            .with(Region::NoFiles, "block text-gray-800 text-sm mb-1")
            .with(Region::FileItem, "block flex text-gray-800 text-sm mb-1")
            .with(Region::RemoveFiles, "ml-auto text-blue-500 text-sm"),
        InputType::Range => ClassGroup::new()
            .with(Region::Inner, "max-w-md")
            .with(
                Region::Input,
                "form-range appearance-none w-full h-2 p-0 bg-gray-200 rounded-full focus:outline-none focus:ring-0 focus:shadow-none",
            ),
        _ => ClassGroup::new(),
    }
}

pub(super) fn default_table() -> ClassTable {
    let text = text_group();
    let boxed = box_group();
    let button = button_group();

    let mut table = ClassTable::new(defaults_group());
    for ty in InputType::ALL {
        let group = match ty.classification() {
            Classification::Text => text.clone(),
            Classification::Box => boxed.clone(),
            Classification::Button => button.clone(),
            Classification::Standalone => standalone_group(ty),
        };
        table.insert(ty, group);
    }

    // radio keeps the box styling but fully rounds the check itself
    if let Some(box_input) = boxed.get(Region::Input) {
        table.set_region(
            InputType::Radio,
            Region::Input,
            box_input.replace_first("rounded-sm", "rounded-full"),
        );
    }
    table.set_region(InputType::Textarea, Region::Input, TEXTAREA_INPUT);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT_LIKE: [InputType; 13] = [
        InputType::Date,
        InputType::DatetimeLocal,
        InputType::Email,
        InputType::Month,
        InputType::Number,
        InputType::Password,
        InputType::Search,
        InputType::Select,
        InputType::Tel,
        InputType::Text,
        InputType::Time,
        InputType::Url,
        InputType::Week,
    ];

    #[test]
    fn test_default_table_is_total() {
        let table = default_table();
        assert!(table.is_total(), "every input type should have a non-empty group");
    }

    #[test]
    fn test_defaults_group_has_exactly_the_cross_cutting_regions() {
        let table = default_table();
        let defaults = table.defaults();

        assert_eq!(defaults.len(), 4);
        for region in [Region::Outer, Region::Help, Region::Messages, Region::Message] {
            let classes = defaults.get(region);
            assert!(
                classes.is_some_and(|c| !c.as_str().trim().is_empty()),
                "`{}` should map to a non-empty class string",
                region
            );
        }
    }

    #[test]
    fn test_text_like_types_share_the_text_template() {
        let table = default_table();
        let template = text_group();

        for ty in TEXT_LIKE {
            assert_eq!(
                table.classes_for(ty),
                Some(&template),
                "`{}` should use the text template unchanged",
                ty
            );
        }
    }

    #[test]
    fn test_checkbox_uses_the_box_template() {
        let table = default_table();
        assert_eq!(table.classes_for(InputType::Checkbox), Some(&box_group()));
    }

    #[test]
    fn test_radio_differs_from_checkbox_only_in_input_rounding() {
        let table = default_table();
        let checkbox = table.classes_for(InputType::Checkbox).unwrap();
        let radio = table.classes_for(InputType::Radio).unwrap();

        let checkbox_input = checkbox.get(Region::Input).unwrap();
        let radio_input = radio.get(Region::Input).unwrap();
        assert!(checkbox_input.contains_token("rounded-sm"));
        assert!(radio_input.contains_token("rounded-full"));
        assert!(!radio_input.contains_token("rounded-sm"));

        for region in [
            Region::Fieldset,
            Region::Legend,
            Region::Wrapper,
            Region::Help,
            Region::Label,
        ] {
            assert_eq!(
                checkbox.get(region),
                radio.get(region),
                "`{}` should be identical between checkbox and radio",
                region
            );
        }
    }

    #[test]
    fn test_textarea_differs_from_text_only_in_input() {
        let table = default_table();
        let text = table.classes_for(InputType::Text).unwrap();
        let textarea = table.classes_for(InputType::Textarea).unwrap();

        assert_ne!(text.get(Region::Input), textarea.get(Region::Input));
        assert_eq!(textarea.get(Region::Input).unwrap().as_str(), TEXTAREA_INPUT);
        assert_eq!(text.get(Region::Label), textarea.get(Region::Label));
        assert_eq!(text.get(Region::Inner), textarea.get(Region::Inner));
    }

    #[test]
    fn test_button_and_submit_are_structurally_equal() {
        let table = default_table();
        assert_eq!(
            table.classes_for(InputType::Button),
            table.classes_for(InputType::Submit)
        );
    }

    #[test]
    fn test_file_group_carries_the_file_list_regions() {
        let table = default_table();
        let file = table.classes_for(InputType::File).unwrap();

        for region in [Region::NoFiles, Region::FileItem, Region::RemoveFiles] {
            assert!(file.contains(region), "file group should style `{}`", region);
        }
    }

    #[test]
    fn test_range_group_has_only_inner_and_input() {
        let table = default_table();
        let range = table.classes_for(InputType::Range).unwrap();

        assert_eq!(range.len(), 2);
        assert!(range.contains(Region::Inner));
        assert!(range.contains(Region::Input));
    }

    #[test]
    fn test_box_help_overrides_the_cross_cutting_help() {
        let table = default_table();
        assert_eq!(
            table.resolve(InputType::Checkbox, Region::Help).unwrap().as_str(),
            "mb-2"
        );
        assert_eq!(
            table.resolve(InputType::Text, Region::Help).unwrap().as_str(),
            "text-xs text-gray-500"
        );
    }

    #[test]
    fn test_default_const_matches_construction() {
        let default = ClassTable::DEFAULT;
        assert_eq!(*default, default_table());
    }
}
