use crate::{
    api::{ApiError, ImageUpload, Item},
    pages::items::{repository::ItemsRepository, utils::ItemFormState},
    state::session::{use_api, use_session},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Copy)]
pub struct ItemFormViewModel {
    pub item_id: StoredValue<Option<String>>,
    pub item_name: RwSignal<String>,
    pub location: RwSignal<String>,
    pub date: RwSignal<String>,
    pub description: RwSignal<String>,
    /// The record being edited; server-owned fields are sent back unchanged.
    pub base: RwSignal<Item>,
    pub image: RwSignal<Option<ImageUpload>>,
    pub error: RwSignal<Option<ApiError>>,
    pub item_resource: Resource<Option<String>, Result<Option<Item>, ApiError>>,
    pub save_action: Action<(Item, Option<ImageUpload>), Result<Item, ApiError>>,
}

impl ItemFormViewModel {
    pub fn new(item_id: Option<String>, repository: ItemsRepository) -> Self {
        let item_name = create_rw_signal(String::new());
        let location = create_rw_signal(String::new());
        let date = create_rw_signal(String::new());
        let description = create_rw_signal(String::new());
        let base = create_rw_signal(Item::default());
        let image = create_rw_signal(None::<ImageUpload>);
        let error = create_rw_signal(None::<ApiError>);

        let repo_for_load = repository.clone();
        let item_resource = create_resource(
            {
                let item_id = item_id.clone();
                move || item_id.clone()
            },
            move |item_id: Option<String>| {
                let repo = repo_for_load.clone();
                async move {
                    match item_id {
                        Some(id) => repo.fetch(&id).await.map(Some),
                        None => Ok(None),
                    }
                }
            },
        );

        let save_action = create_action(move |(item, image): &(Item, Option<ImageUpload>)| {
            let repo = repository.clone();
            let item = item.clone();
            let image = image.clone();
            async move { repo.save(item, image).await }
        });

        let vm = Self {
            item_id: store_value(item_id),
            item_name,
            location,
            date,
            description,
            base,
            image,
            error,
            item_resource,
            save_action,
        };

        create_effect(move |_| match item_resource.get() {
            Some(Ok(Some(item))) => vm.apply_item(item),
            Some(Err(err)) => {
                log::warn!("loading item for edit failed: {}", err);
                error.set(Some(err));
            }
            _ => {}
        });

        vm
    }

    pub fn is_edit(&self) -> bool {
        self.item_id.with_value(Option::is_some)
    }

    pub fn apply_item(&self, item: Item) {
        let form = ItemFormState::from_item(&item);
        self.item_name.set(form.item_name);
        self.location.set(form.location);
        self.date.set(form.date);
        self.description.set(form.description);
        self.base.set(item);
    }

    fn form(&self) -> ItemFormState {
        ItemFormState {
            item_id: self.item_id.get_value(),
            item_name: self.item_name.get_untracked(),
            location: self.location.get_untracked(),
            date: self.date.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let form = self.form();
        let image = self.image.get_untracked();
        if !form.is_edit() && image.is_none() {
            self.error.set(Some(ApiError::validation("Please select an image file")));
            return;
        }
        match form.to_item(self.base.get_untracked()) {
            Ok(item) => {
                self.error.set(None);
                self.save_action.dispatch((item, image));
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    /// Blanks the fields; an edit keeps its target id.
    pub fn reset(&self) {
        self.item_name.set(String::new());
        self.location.set(String::new());
        self.date.set(String::new());
        self.description.set(String::new());
        self.image.set(None);
        self.error.set(None);
    }
}

pub fn use_item_form_view_model(item_id: Option<String>) -> ItemFormViewModel {
    let repository = ItemsRepository::new_with_client(Rc::new(use_api()));
    let vm = ItemFormViewModel::new(item_id, repository);
    let navigator = use_session().navigator();

    create_effect(move |_| {
        if let Some(result) = vm.save_action.value().get() {
            match result {
                Ok(_) => navigator.redirect(navigation::HOME_PATH),
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    vm
}

/// Reads the chosen file into memory for the multipart upload.
pub async fn read_image(file: web_sys::File) -> Result<ImageUpload, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::validation("Could not read the selected image"))?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| ApiError::validation("Could not read the selected image"))?;
    Ok(ImageUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
