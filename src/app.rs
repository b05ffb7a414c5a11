use crate::components::ScheduleOverrideDeleteDialog;
use crate::schedule::{ScheduleClient, TimeZoneParam};
use dioxus::prelude::*;

/// Everything the window needs, resolved from the command line and config.
#[derive(Clone, Debug)]
pub struct LaunchSettings {
    pub override_id: String,
    pub zone: TimeZoneParam,
    pub client: ScheduleClient,
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    let settings = use_context::<LaunchSettings>();
    use_context_provider(|| settings.client.clone());

    let on_close = move |_| {
        tracing::info!(event = "ui.window.close_requested");
        dioxus::desktop::window().close();
    };

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            div { class: "content",
                ScheduleOverrideDeleteDialog {
                    override_id: settings.override_id.clone(),
                    zone: settings.zone,
                    on_close: on_close
                }
            }
        }
    }
}
