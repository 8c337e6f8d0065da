//! Reads value snapshots out of a rendered `<form>` element.

use platform_host::{FormControl, FormControlKind};
use wasm_bindgen::JsCast;

/// Collects a [`FormControl`] snapshot for every input, select, and text area owned by `form`.
///
/// Elements of other types (fieldsets, output, object) are ignored.
pub fn form_controls(form: &web_sys::HtmlFormElement) -> Vec<FormControl> {
    let elements = form.elements();
    (0..elements.length())
        .filter_map(|index| elements.item(index))
        .filter_map(|element| control_snapshot(&element))
        .collect()
}

fn control_snapshot(element: &web_sys::Element) -> Option<FormControl> {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        let kind = FormControlKind::from_input_type(&input.type_());
        return Some(
            FormControl::new(input.name(), input.value(), kind)
                .checked(input.checked())
                .disabled(input.disabled()),
        );
    }

    if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
        let options = select.selected_options();
        let selected = (0..options.length())
            .filter_map(|index| options.item(index))
            .filter_map(|option| option.dyn_into::<web_sys::HtmlOptionElement>().ok())
            .map(|option| option.value())
            .collect::<Vec<_>>();
        let kind = FormControlKind::Select {
            multiple: select.multiple(),
        };
        return Some(
            FormControl::new(select.name(), select.value(), kind)
                .with_selected(selected)
                .disabled(select.disabled()),
        );
    }

    if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(
            FormControl::new(area.name(), area.value(), FormControlKind::TextArea)
                .disabled(area.disabled()),
        );
    }

    None
}
