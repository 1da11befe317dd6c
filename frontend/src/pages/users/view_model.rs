use super::{repository::UsersRepository, utils};
use crate::{
    api::{ApiError, User},
    config,
    state::session::use_api,
    utils::debounce::{BrowserTimer, Debounced, Timer},
};
use leptos::*;
use std::{rc::Rc, time::Duration};

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub users: RwSignal<Vec<User>>,
    pub search_term: RwSignal<String>,
    pub search_results: RwSignal<Vec<User>>,
    pub searching: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    /// Row under inline edit; at most one at a time.
    pub editing: RwSignal<Option<User>>,
    pub saving_id: RwSignal<Option<String>>,
    pub displayed: Memo<Vec<User>>,
    pub users_resource: Resource<(), Result<Vec<User>, ApiError>>,
    pub save_action: Action<User, Result<User, ApiError>>,
    search: StoredValue<Debounced<String>>,
}

impl UsersViewModel {
    pub fn new(repository: UsersRepository, timer: impl Timer + 'static) -> Self {
        let users = create_rw_signal(Vec::<User>::new());
        let search_term = create_rw_signal(String::new());
        let search_results = create_rw_signal(Vec::<User>::new());
        let searching = create_rw_signal(false);
        let error = create_rw_signal(None::<ApiError>);
        let editing = create_rw_signal(None::<User>);
        let saving_id = create_rw_signal(None::<String>);

        let repo_for_load = repository.clone();
        let users_resource = create_resource(
            || (),
            move |_| {
                let repo = repo_for_load.clone();
                async move { repo.fetch_users().await }
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
                            log::warn!("user search for {:?} failed: {}", term, err);
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
                users.get()
            } else {
                search_results.get()
            }
        });

        let save_action = create_action(move |user: &User| {
            let repo = repository.clone();
            let user = user.clone();
            async move {
                saving_id.try_set(Some(user.id.clone()));
                let outcome = repo.save(&user).await;
                match &outcome {
                    Ok(saved) => {
                        users.try_update(|list| utils::replace_user(list, saved));
                        search_results.try_update(|list| utils::replace_user(list, saved));
                        editing.try_set(None);
                    }
                    Err(err) => {
                        error.try_set(Some(err.clone()));
                    }
                }
                saving_id.try_set(None);
                outcome
            }
        });

        create_effect(move |_| {
            if let Some(result) = users_resource.get() {
                match result {
                    Ok(list) => users.set(list),
                    Err(err) => {
                        log::warn!("loading users failed: {}", err);
                        error.set(Some(err));
                    }
                }
            }
        });

        Self {
            users,
            search_term,
            search_results,
            searching,
            error,
            editing,
            saving_id,
            displayed,
            users_resource,
            save_action,
            search,
        }
    }

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
        self.users_resource.loading().get() || self.searching.get()
    }

    pub fn edit(&self, user: User) {
        self.error.set(None);
        self.editing.set(Some(user));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing
            .with(|edit| edit.as_ref().is_some_and(|user| user.id == id))
    }

    pub fn save(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(user) = self.editing.get_untracked() else {
            return;
        };
        match utils::validate_edit(&user) {
            Ok(user) => self.save_action.dispatch(user),
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    let repository = UsersRepository::new_with_client(Rc::new(use_api()));
    UsersViewModel::new(repository, BrowserTimer)
}
