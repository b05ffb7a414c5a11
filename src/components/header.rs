use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDelete;

#[component]
pub fn Header(override_id: String) -> Element {
    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdDelete
            }
            h1 { "Delete Override" }
            span { class: "header-id", "{override_id}" }
        }
    }
}
