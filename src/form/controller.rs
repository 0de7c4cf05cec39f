//! Menu Item Form Controller
//!
//! Drives load, category change and submit of one form session over
//! injected ports. Session state is reached through [`SessionCell`] and is
//! never borrowed across an await point.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::error::AppError;
use crate::form::session::{FormMode, FormSession, SubmitTarget};
use crate::form::normalize::NormalizedItem;
use crate::models::{ItemRecord, ShopRecord, ToastKind};
use crate::routes::Route;

/// Message shown when the store fails without saying why
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Document store operations the form depends on.
///
/// Errors carry the store's message, possibly empty.
#[async_trait(?Send)]
pub trait MenuStore {
    /// Handle of a picked image file
    type File: Clone + 'static;

    async fn fetch_shop_by_username(&self, username: &str) -> Result<Option<ShopRecord>, String>;

    async fn fetch_item(&self, item_id: &str) -> Result<Option<ItemRecord>, String>;

    async fn create_item(&self, shop_id: &str, item: &NormalizedItem, image: Option<&Self::File>) -> Result<(), String>;

    async fn update_item(&self, item_id: &str, item: &NormalizedItem, image: Option<&Self::File>) -> Result<(), String>;
}

/// User-visible toast sink
pub trait Notifier {
    fn notify(&self, kind: ToastKind, title: &str, description: &str);
}

/// Client-side route changes
pub trait Navigator {
    fn navigate_to(&self, route: &Route);
}

/// Short-lived mutable access to a form session.
///
/// Returns `None` when the session is gone (form unmounted or borrowed).
pub trait SessionCell<F> {
    fn with_session<T>(&self, f: impl FnOnce(&mut FormSession<F>) -> T) -> Option<T>;
}

impl<F> SessionCell<F> for RefCell<FormSession<F>> {
    fn with_session<T>(&self, f: impl FnOnce(&mut FormSession<F>) -> T) -> Option<T> {
        self.try_borrow_mut().ok().map(|mut session| f(&mut session))
    }
}

/// Store failure text, or the generic fallback when the store gave none
pub fn failure_message(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_FAILURE
    } else {
        message
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItemFormController<S, N, R> {
    store: S,
    notifier: N,
    navigator: R,
}

impl<S, N, R> MenuItemFormController<S, N, R>
where
    S: MenuStore,
    N: Notifier,
    R: Navigator,
{
    pub fn new(store: S, notifier: N, navigator: R) -> Self {
        Self { store, notifier, navigator }
    }

    fn report(&self, error: &AppError, title: &str) {
        log::warn!("[FORM] {}: {}", title, error);
        self.notifier.notify(ToastKind::Error, title, error.message());
    }

    /// Resolve the shop, then the item in edit mode.
    ///
    /// A missing shop sends the user home. A missing item leaves the form
    /// unpopulated.
    pub async fn load<C>(&self, cell: &C, username: &str)
    where
        C: SessionCell<S::File>,
    {
        let shop = match self.store.fetch_shop_by_username(username).await {
            Ok(Some(shop)) => shop,
            Ok(None) => {
                self.report(&AppError::NotFound(format!("no shop named \"{}\"", username)), "Shop not found");
                self.navigator.navigate_to(&Route::Home);
                return;
            }
            Err(message) => {
                self.report(&AppError::NotFound(failure_message(&message).to_string()), "Could not load shop");
                self.navigator.navigate_to(&Route::Home);
                return;
            }
        };
        log::info!("[FORM] shop {} loaded", shop.username);

        let mode = cell.with_session(|session| {
            session.attach_shop(shop);
            session.mode().clone()
        });
        let Some(FormMode::Edit { item_id }) = mode else { return };

        match self.store.fetch_item(&item_id).await {
            Ok(Some(record)) => {
                cell.with_session(|session| session.populate(record));
            }
            Ok(None) => {
                self.report(&AppError::NotFound(format!("item {} does not exist", item_id)), "Item not found");
            }
            Err(message) => {
                self.report(&AppError::NotFound(failure_message(&message).to_string()), "Could not load item");
            }
        }
    }

    /// Update the category, restarting the create flow under it in create mode
    pub fn change_category<C>(&self, cell: &C, category: &str)
    where
        C: SessionCell<S::File>,
    {
        if let Some(Some(route)) = cell.with_session(|session| session.change_category(category)) {
            self.navigator.navigate_to(&route);
        }
    }

    /// Validate, persist and report. Returns whether the item was saved.
    pub async fn submit<C>(&self, cell: &C) -> bool
    where
        C: SessionCell<S::File>,
    {
        let request = match cell.with_session(|session| session.begin_submit()) {
            None => return false,
            Some(Ok(request)) => request,
            Some(Err(AppError::Conflict(reason))) => {
                log::debug!("[FORM] submit ignored: {}", reason);
                return false;
            }
            Some(Err(error)) => {
                self.report(&error, "Please check the form");
                return false;
            }
        };

        let result = match &request.target {
            SubmitTarget::Create { shop_id } => {
                log::info!("[FORM] creating item \"{}\" in shop {}", request.item.title, shop_id);
                self.store.create_item(shop_id, &request.item, request.image.as_ref()).await
            }
            SubmitTarget::Update { item_id } => {
                log::info!("[FORM] updating item {}", item_id);
                self.store.update_item(item_id, &request.item, request.image.as_ref()).await
            }
        };
        cell.with_session(|session| session.finish_submit(result.is_ok()));

        match result {
            Ok(()) => {
                let title = match request.target {
                    SubmitTarget::Create { .. } => "Item created",
                    SubmitTarget::Update { .. } => "Item updated",
                };
                self.notifier.notify(ToastKind::Success, title, &request.item.title);
                self.navigator.navigate_to(&request.menu_route);
                true
            }
            Err(message) => {
                self.report(&AppError::Persistence(failure_message(&message).to_string()), "Could not save item");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::form::session::FormPhase;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create { shop_id: String, title: String, image: Option<FakeFile> },
        Update { item_id: String, item: NormalizedItem, image: Option<FakeFile> },
    }

    #[derive(Default)]
    struct FakeStore {
        shop: Option<ShopRecord>,
        item: Option<ItemRecord>,
        fail_with: Option<String>,
        calls: RefCell<Vec<Call>>,
    }

    #[async_trait(?Send)]
    impl MenuStore for Rc<FakeStore> {
        type File = FakeFile;

        async fn fetch_shop_by_username(&self, username: &str) -> Result<Option<ShopRecord>, String> {
            Ok(self.shop.clone().filter(|s| s.username == username))
        }

        async fn fetch_item(&self, item_id: &str) -> Result<Option<ItemRecord>, String> {
            Ok(self.item.clone().filter(|i| i.id == item_id))
        }

        async fn create_item(&self, shop_id: &str, item: &NormalizedItem, image: Option<&FakeFile>) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Create {
                shop_id: shop_id.to_string(),
                title: item.title.clone(),
                image: image.cloned(),
            });
            self.fail_with.clone().map_or(Ok(()), Err)
        }

        async fn update_item(&self, item_id: &str, item: &NormalizedItem, image: Option<&FakeFile>) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Update {
                item_id: item_id.to_string(),
                item: item.clone(),
                image: image.cloned(),
            });
            self.fail_with.clone().map_or(Ok(()), Err)
        }
    }

    #[derive(Default, Clone)]
    struct Recorder {
        toasts: Rc<RefCell<Vec<(ToastKind, String, String)>>>,
        routes: Rc<RefCell<Vec<Route>>>,
    }

    impl Notifier for Recorder {
        fn notify(&self, kind: ToastKind, title: &str, description: &str) {
            self.toasts.borrow_mut().push((kind, title.to_string(), description.to_string()));
        }
    }

    impl Navigator for Recorder {
        fn navigate_to(&self, route: &Route) {
            self.routes.borrow_mut().push(route.clone());
        }
    }

    fn shop() -> ShopRecord {
        ShopRecord {
            id: "shop-1".into(),
            username: "luigis".into(),
            name: "Luigi's".into(),
            categories: vec!["Pizza".into(), "Drinks".into()],
            social_links: Default::default(),
            company_info: Default::default(),
        }
    }

    fn setup(store: FakeStore) -> (MenuItemFormController<Rc<FakeStore>, Recorder, Recorder>, Rc<FakeStore>, Recorder) {
        let store = Rc::new(store);
        let recorder = Recorder::default();
        let controller = MenuItemFormController::new(store.clone(), recorder.clone(), recorder.clone());
        (controller, store, recorder)
    }

    fn fill(cell: &RefCell<FormSession<FakeFile>>, title: &str, price: &str) {
        let mut session = cell.borrow_mut();
        let draft = session.draft_mut();
        draft.title = title.into();
        draft.description = "Tomato and basil".into();
        draft.price = price.into();
    }

    #[tokio::test]
    async fn test_create_submit_success_notifies_and_navigates() {
        let (controller, store, recorder) = setup(FakeStore { shop: Some(shop()), ..Default::default() });
        let cell = RefCell::new(FormSession::new(FormMode::Create { category: Some("Pizza".into()) }));

        controller.load(&cell, "luigis").await;
        fill(&cell, "Margherita", "12.50");
        cell.borrow_mut().draft_mut().image.replace(FakeFile("m.png"), "data:image/png;base64,AA".into());

        assert!(controller.submit(&cell).await);
        assert_eq!(
            store.calls.borrow().as_slice(),
            &[Call::Create { shop_id: "shop-1".into(), title: "Margherita".into(), image: Some(FakeFile("m.png")) }]
        );
        assert_eq!(recorder.toasts.borrow()[0].0, ToastKind::Success);
        assert_eq!(recorder.routes.borrow().as_slice(), &[Route::Menu { username: "luigis".into() }]);
        assert_eq!(cell.borrow().phase(), FormPhase::Succeeded);
    }

    #[tokio::test]
    async fn test_empty_title_never_reaches_store() {
        let (controller, store, recorder) = setup(FakeStore { shop: Some(shop()), ..Default::default() });
        let cell = RefCell::new(FormSession::new(FormMode::Create { category: None }));

        controller.load(&cell, "luigis").await;
        fill(&cell, "", "9");

        assert!(!controller.submit(&cell).await);
        assert!(store.calls.borrow().is_empty());
        let toasts = recorder.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, ToastKind::Error);
        assert!(toasts[0].2.contains("Title"));
        assert_eq!(cell.borrow().phase(), FormPhase::Creating);
    }

    #[tokio::test]
    async fn test_store_failure_keeps_draft_and_shows_message() {
        let (controller, store, recorder) = setup(FakeStore {
            shop: Some(shop()),
            fail_with: Some("quota exceeded".into()),
            ..Default::default()
        });
        let cell = RefCell::new(FormSession::new(FormMode::Create { category: Some("Pizza".into()) }));

        controller.load(&cell, "luigis").await;
        fill(&cell, "Diavola", "14");

        assert!(!controller.submit(&cell).await);
        assert_eq!(store.calls.borrow().len(), 1);
        let toasts = recorder.toasts.borrow();
        assert_eq!(toasts.last().map(|t| t.0), Some(ToastKind::Error));
        assert!(toasts.last().unwrap().2.contains("quota exceeded"));
        assert!(recorder.routes.borrow().is_empty());
        assert_eq!(cell.borrow().draft().title, "Diavola");
        assert_eq!(cell.borrow().phase(), FormPhase::Creating);
    }

    #[tokio::test]
    async fn test_blank_store_error_uses_fallback() {
        let (controller, _store, recorder) = setup(FakeStore {
            shop: Some(shop()),
            fail_with: Some(String::new()),
            ..Default::default()
        });
        let cell = RefCell::new(FormSession::new(FormMode::Create { category: None }));
        controller.load(&cell, "luigis").await;
        fill(&cell, "Calzone", "11");

        controller.submit(&cell).await;
        assert_eq!(recorder.toasts.borrow().last().unwrap().2, GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_edit_load_and_update_carries_existing_image() {
        let item: ItemRecord = serde_json::from_str(
            r#"{"id":"item-7","title":"Lasagna","description":"Layers","price":15,
                "category":"Pizza","imageUrl":"https://cdn/lasagna.png"}"#,
        )
        .unwrap();
        let (controller, store, recorder) = setup(FakeStore {
            shop: Some(shop()),
            item: Some(item),
            ..Default::default()
        });
        let cell = RefCell::new(FormSession::new(FormMode::Edit { item_id: "item-7".into() }));

        controller.load(&cell, "luigis").await;
        assert_eq!(cell.borrow().phase(), FormPhase::Editing);
        assert!(cell.borrow().draft().variants.is_empty());
        assert!(!cell.borrow().draft().flags.has_allergens);

        // switching category while editing never navigates
        controller.change_category(&cell, "Drinks");
        assert!(recorder.routes.borrow().is_empty());

        assert!(controller.submit(&cell).await);
        let calls = store.calls.borrow();
        match &calls[0] {
            Call::Update { item_id, item, image } => {
                assert_eq!(item_id, "item-7");
                assert_eq!(item.price, 15.0);
                assert_eq!(item.category, "Drinks");
                assert_eq!(item.image_url.as_deref(), Some("https://cdn/lasagna.png"));
                assert!(image.is_none());
            }
            other => panic!("unexpected call {:?}", other),
        }
        assert_eq!(recorder.toasts.borrow()[0].1, "Item updated");
    }

    #[tokio::test]
    async fn test_missing_shop_notifies_and_leaves() {
        let (controller, _store, recorder) = setup(FakeStore::default());
        let cell = RefCell::new(FormSession::<FakeFile>::new(FormMode::Create { category: None }));

        controller.load(&cell, "ghost").await;

        assert_eq!(cell.borrow().phase(), FormPhase::Initializing);
        assert_eq!(recorder.toasts.borrow()[0].1, "Shop not found");
        assert_eq!(recorder.routes.borrow().as_slice(), &[Route::Home]);
    }

    #[tokio::test]
    async fn test_missing_item_stays_unpopulated_without_navigation() {
        let (controller, store, recorder) = setup(FakeStore { shop: Some(shop()), ..Default::default() });
        let cell = RefCell::new(FormSession::<FakeFile>::new(FormMode::Edit { item_id: "gone".into() }));

        controller.load(&cell, "luigis").await;

        assert_eq!(cell.borrow().phase(), FormPhase::Initializing);
        assert_eq!(recorder.toasts.borrow()[0].1, "Item not found");
        assert!(recorder.routes.borrow().is_empty());
        assert!(!controller.submit(&cell).await);
        assert!(store.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_create_mode_category_change_navigates() {
        let (controller, _store, recorder) = setup(FakeStore { shop: Some(shop()), ..Default::default() });
        let cell = RefCell::new(FormSession::<FakeFile>::new(FormMode::Create { category: Some("Pizza".into()) }));
        controller.load(&cell, "luigis").await;

        controller.change_category(&cell, "Drinks");

        assert_eq!(
            recorder.routes.borrow().as_slice(),
            &[Route::NewItem { username: "luigis".into(), category: Some("Drinks".into()) }]
        );
    }
}
