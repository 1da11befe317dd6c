use super::{
    repository::{ItemScope, ItemsRepository},
    utils,
};
use crate::{
    api::{ApiError, ClaimRequest, Item},
    config,
    state::session::{use_api, use_session, SessionState, SessionStore},
    utils::debounce::{BrowserTimer, Debounced, Timer},
};
use leptos::*;
use std::{rc::Rc, time::Duration};

type ScopeKey = (Option<ItemScope>, Option<String>);

#[derive(Clone, Copy)]
pub struct ItemsViewModel {
    pub scope: Signal<Option<ItemScope>>,
    pub session: Signal<SessionState>,
    pub items: RwSignal<Vec<Item>>,
    pub search_term: RwSignal<String>,
    pub search_results: RwSignal<Vec<Item>>,
    pub searching: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub selected: RwSignal<Option<Item>>,
    pub displayed: Memo<Vec<Item>>,
    pub items_resource: Resource<ScopeKey, Result<Vec<Item>, ApiError>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
    pub claim_action: Action<(String, String), Result<ClaimRequest, ApiError>>,
    search: StoredValue<Debounced<String>>,
}

impl ItemsViewModel {
    pub fn new(
        scope: Signal<Option<ItemScope>>,
        session: &SessionStore,
        repository: ItemsRepository,
        timer: impl Timer + 'static,
    ) -> Self {
        let session = session.state();
        let items = create_rw_signal(Vec::<Item>::new());
        let search_term = create_rw_signal(String::new());
        let search_results = create_rw_signal(Vec::<Item>::new());
        let searching = create_rw_signal(false);
        let error = create_rw_signal(None::<ApiError>);
        let notice = create_rw_signal(None::<String>);
        let selected = create_rw_signal(None::<Item>);

        let repo_for_load = repository.clone();
        let items_resource = create_resource(
            move || (scope.get(), session.with(|s| s.user_id().map(str::to_string))),
            move |(scope, user_id): ScopeKey| {
                let repo = repo_for_load.clone();
                async move {
                    match scope {
                        Some(scope) => repo.load(scope, user_id.as_deref()).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );

        let repo_for_search = repository.clone();
        let search = store_value(Debounced::new(
            Duration::from_millis(config::SEARCH_DEBOUNCE_MS),
            timer,
            move |term: String| {
                let repo = repo_for_search.clone();
                async move {
                    searching.set(true);
                    let result = repo.search(&term).await;
                    searching.set(false);
                    let still_current = search_term
                        .try_get_untracked()
                        .map(|current| current.trim() == term.trim())
                        .unwrap_or(false);
                    if !still_current {
                        return;
                    }
                    match result {
                        Ok(found) => {
                            error.set(None);
                            search_results.set(found);
                        }
                        Err(err) => {
                            log::warn!("item search for {:?} failed: {}", term, err);
                            search_results.set(Vec::new());
                            error.set(Some(err));
                        }
                    }
                }
            },
        ));
        on_cleanup(move || search.with_value(Debounced::cancel));

        let displayed = create_memo(move |_| {
            if search_term.with(|term| term.trim().is_empty()) {
                items.get()
            } else {
                search_results.get()
            }
        });

        let repo_for_delete = repository.clone();
        let delete_action = create_action(move |item_id: &String| {
            let repo = repo_for_delete.clone();
            let item_id = item_id.clone();
            async move { repo.delete(&item_id).await.map(|_| item_id) }
        });

        let repo_for_claim = repository;
        let claim_action = create_action(move |(item_id, message): &(String, String)| {
            let repo = repo_for_claim.clone();
            let item_id = item_id.clone();
            let message = message.clone();
            async move { repo.request_claim(&item_id, &message).await }
        });

        create_effect(move |_| {
            if let Some(result) = items_resource.get() {
                search_results.set(Vec::new());
                match result {
                    Ok(list) => {
                        error.set(None);
                        items.set(list);
                    }
                    Err(err) => {
                        log::warn!("loading items failed: {}", err);
                        items.set(Vec::new());
                        error.set(Some(err));
                    }
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                match result {
                    Ok(item_id) => {
                        items.update(|list| utils::without_item(list, &item_id));
                        search_results.update(|list| utils::without_item(list, &item_id));
                        selected.set(None);
                    }
                    Err(err) => error.set(Some(err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = claim_action.value().get() {
                match result {
                    Ok(_) => notice.set(Some("Your request has been sent.".into())),
                    Err(err) => error.set(Some(err)),
                }
            }
        });

        Self {
            scope,
            session,
            items,
            search_term,
            search_results,
            searching,
            error,
            notice,
            selected,
            displayed,
            items_resource,
            delete_action,
            claim_action,
            search,
        }
    }

    /// Empty terms cancel the pending search and fall back to the scope list.
    pub fn set_search_term(&self, term: String) {
        let blank = term.trim().is_empty();
        self.search_term.set(term.clone());
        if blank {
            self.search.with_value(Debounced::cancel);
            self.search_results.set(Vec::new());
            self.error.set(None);
        } else {
            self.search.with_value(|search| search.call(term));
        }
    }

    pub fn loading(&self) -> bool {
        self.items_resource.loading().get() || self.searching.get()
    }

    pub fn open(&self, item: Item) {
        self.notice.set(None);
        self.selected.set(Some(item));
    }

    pub fn close(&self) {
        self.selected.set(None);
    }

    pub fn delete_selected(&self) {
        let id = self
            .selected
            .with_untracked(|item| item.as_ref().and_then(|item| item.item_id.clone()));
        if let Some(id) = id {
            self.delete_action.dispatch(id);
        }
    }

    pub fn request_selected(&self, message: String) {
        let id = self
            .selected
            .with_untracked(|item| item.as_ref().and_then(|item| item.item_id.clone()));
        if let Some(id) = id {
            self.claim_action.dispatch((id, message));
        }
    }
}

pub fn use_items_view_model(scope: Signal<Option<ItemScope>>) -> ItemsViewModel {
    let session = use_session();
    let repository = ItemsRepository::new_with_client(Rc::new(use_api()));
    ItemsViewModel::new(scope, &session, repository, BrowserTimer)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::Role;
    use crate::test_support::helpers::{found_item, provide_role};
    use crate::utils::debounce::TokioTimer;
    use serde_json::json;
    use tokio::time::sleep;

    fn view_model(server: &MockServer) -> ItemsViewModel {
        let (session, _) = provide_role(Role::User);
        let api = session.api_client(Some(server.url("/laf/api/v1")));
        let repository = ItemsRepository::new_with_client(Rc::new(api));
        ItemsViewModel::new(
            Signal::derive(|| Some(ItemScope::All)),
            &session,
            repository,
            TokioTimer,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn typing_searches_once_after_the_pause() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let server = MockServer::start_async().await;
                server.mock(|when, then| {
                    when.method(GET).path("/laf/api/v1/item/search/umbrella");
                    then.status(200).json_body(json!([{ "itemId": "I1", "itemName": "Umbrella" }]));
                });
                let vm = view_model(&server);

                vm.set_search_term("umb".into());
                sleep(Duration::from_millis(400)).await;
                vm.set_search_term("umbrella".into());
                sleep(Duration::from_millis(999)).await;
                assert_eq!(server.hits(&GET, "/laf/api/v1/item/search/umbrella"), 0);

                sleep(Duration::from_millis(10)).await;
                assert_eq!(server.hits(&GET, "/laf/api/v1/item/search/umbrella"), 1);
                assert_eq!(server.hits(&GET, "/laf/api/v1/item/search/umb"), 0);
                assert_eq!(vm.displayed.get()[0].item_name, "Umbrella");
                runtime.dispose();
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_term_cancels_and_shows_the_scope_list() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let server = MockServer::start_async().await;
                let vm = view_model(&server);
                vm.items.set(vec![found_item("I1", "Umbrella")]);

                vm.set_search_term("wal".into());
                assert!(vm.displayed.get().is_empty());
                vm.set_search_term("   ".into());
                sleep(Duration::from_millis(2000)).await;

                assert_eq!(server.hits(&GET, "/laf/api/v1/item/search/wal"), 0);
                assert_eq!(vm.displayed.get().len(), 1);
                runtime.dispose();
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn failed_search_surfaces_the_server_message() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let server = MockServer::start_async().await;
                server.mock(|when, then| {
                    when.method(GET).path("/laf/api/v1/item/search/bag");
                    then.status(500).json_body(json!({ "message": "Search index offline" }));
                });
                let vm = view_model(&server);

                vm.set_search_term("bag".into());
                sleep(Duration::from_millis(1100)).await;

                assert!(vm.displayed.get().is_empty());
                assert_eq!(vm.error.get().unwrap().error, "Search index offline");
                runtime.dispose();
            })
            .await;
    }
}
