use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_alert_icons::MdError;

/// Full-view error surface used when nothing else can be rendered.
#[component]
pub fn GenericError(error: String) -> Element {
    rsx! {
        div { class: "generic-error",
            Icon { width: 40, height: 40, icon: MdError }
            h3 { "Sorry, an error occurred." }
            p { class: "message error", "{error}" }
        }
    }
}
