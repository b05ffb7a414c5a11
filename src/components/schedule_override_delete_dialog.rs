use crate::components::{FormDialog, GenericError, Header, Spinner};
use crate::schedule::{ScheduleClient, TimeZoneParam};
use crate::state::{DIALOG_TITLE, DialogPhase, DialogState};
use dioxus::prelude::*;

/// Asks for confirmation before deleting a schedule override.
///
/// Fetches the override on mount and renders a spinner, an error page or the
/// confirmation dialog. `on_close` runs when the user cancels and after a
/// successful delete. Requires a [`ScheduleClient`] in context.
#[component]
pub fn ScheduleOverrideDeleteDialog(
    override_id: String,
    zone: TimeZoneParam,
    on_close: Option<EventHandler<()>>,
) -> Element {
    let client = use_context::<ScheduleClient>();
    let state = use_signal(|| DialogState::new(override_id.clone(), zone));

    use_effect({
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn(async move {
                load_override(state, client).await;
            });
        }
    });

    let on_submit = move |_| {
        let client = client.clone();
        spawn(async move {
            delete_override(state, client, on_close).await;
        });
    };

    let on_dismiss = move |_| {
        dismiss(state, on_close);
    };

    let (header_id, phase) = {
        let state = state.read();
        (state.header_id().map(String::from), state.phase.clone())
    };

    match phase {
        DialogPhase::Loading => rsx! { Spinner {} },
        DialogPhase::Failed(message) => rsx! { GenericError { error: message } },
        DialogPhase::Closed => rsx! {},
        DialogPhase::Ready(confirmation) => {
            let caption = confirmation.details.caption();
            rsx! {
                if let Some(id) = header_id {
                    Header { override_id: id }
                }
                FormDialog {
                    title: "{DIALOG_TITLE}",
                    sub_title: confirmation.details.subtitle(),
                    confirm: true,
                    loading: confirmation.is_submitting,
                    errors: confirmation.errors.clone(),
                    on_close: on_dismiss,
                    on_submit: on_submit,
                    span { class: "caption", "{caption}" }
                }
            }
        }
    }
}

async fn load_override(mut state: Signal<DialogState>, client: ScheduleClient) {
    let override_id = state.read().override_id.clone();
    tracing::info!(event = "ui.override.fetch_started", override_id = %override_id);

    let result = client.user_override(&override_id).await;
    if let Err(e) = &result {
        tracing::warn!(event = "ui.override.fetch_failed", override_id = %override_id, error = %e);
    }

    state.write().finish_fetch(result);
}

async fn delete_override(
    mut state: Signal<DialogState>,
    client: ScheduleClient,
    on_close: Option<EventHandler<()>>,
) {
    // Taken synchronously, so a second click sees the submitting flag.
    let Some(targets) = state.write().begin_delete() else {
        tracing::debug!(event = "ui.override.delete_ignored");
        return;
    };

    let override_id = state.read().override_id.clone();
    tracing::info!(event = "ui.override.delete_started", override_id = %override_id);

    let result = client.delete_all(&targets).await;
    if let Err(e) = &result {
        tracing::warn!(event = "ui.override.delete_failed", override_id = %override_id, error = %e);
    }

    let should_close = state.write().finish_delete(result);
    if should_close {
        tracing::info!(event = "ui.override.delete_completed", override_id = %override_id);
        if let Some(handler) = on_close {
            handler.call(());
        }
    }
}

fn dismiss(mut state: Signal<DialogState>, on_close: Option<EventHandler<()>>) {
    if !state.write().dismiss() {
        return;
    }
    tracing::debug!(event = "ui.override.dismissed");
    if let Some(handler) = on_close {
        handler.call(());
    }
}
