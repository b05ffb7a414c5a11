use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_alert_icons::MdWarning;

/// Modal dialog shell: title bar, optional body, error list and the
/// cancel / submit buttons. Both buttons are disabled while `loading`.
#[component]
pub fn FormDialog(
    title: String,
    sub_title: String,
    confirm: bool,
    loading: bool,
    errors: Vec<String>,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
    children: Element,
) -> Element {
    let submit_label = match (loading, confirm) {
        (true, _) => "Loading...",
        (false, true) => "Confirm",
        (false, false) => "Submit",
    };

    rsx! {
        div { class: "dialog-overlay",
            div {
                class: "form-dialog",
                role: "dialog",
                aria_modal: "true",
                div { class: "dialog-header",
                    if confirm {
                        Icon { width: 22, height: 22, icon: MdWarning }
                    }
                    h3 { "{title}" }
                }
                if !sub_title.is_empty() {
                    p { class: "dialog-subtitle", "{sub_title}" }
                }
                div { class: "dialog-body", {children} }
                for error in errors.iter() {
                    div { class: "message error", "{error}" }
                }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary",
                        disabled: loading,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: if confirm { "primary danger" } else { "primary" },
                        disabled: loading,
                        onclick: move |_| on_submit.call(()),
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
