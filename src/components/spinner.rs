use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdHourglassEmpty;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner",
            Icon { width: 32, height: 32, icon: MdHourglassEmpty }
        }
    }
}
