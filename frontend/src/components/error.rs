use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Field messages a server validation error carries under `errors`.
fn detail_messages(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let messages = detail_messages(&e);
                            if messages.is_empty() {
                                ().into_view()
                            } else {
                                view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                                    </ul>
                                }
                                .into_view()
                            }
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_messages_skip_non_strings() {
        let mut error = ApiError::validation("Validation failed");
        error.details = Some(json!({ "errors": ["itemName is required", 3] }));
        assert_eq!(detail_messages(&error), vec!["itemName is required".to_string()]);
        assert!(detail_messages(&ApiError::unknown("x")).is_empty());
    }
}
