//! Creation form and product list.

use product_catalog::{
    CatalogError, ClientConfig, FormField, Product, ProductForm, SubmitOutcome,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;

#[hook]
fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_default()
}

/// Product creation form.
#[derive(Properties, PartialEq)]
pub struct CreateProductFormProps {
    /// Fired once per successful creation.
    pub on_created: Callback<()>,
}

#[function_component(CreateProductForm)]
pub fn create_product_form(props: &CreateProductFormProps) -> Html {
    let config = use_config();
    let form = use_state(ProductForm::new);
    let error = use_state(|| None::<String>);

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut new_form = (*form).clone();
            match new_form.set_by_name(&target.name(), target.value()) {
                Ok(()) => form.set(new_form),
                Err(e) => gloo::console::warn!(e.to_string()),
            }
        })
    };

    // The submit button stays enabled while a request is in flight.
    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let product = form.to_product();
            let config = config.clone();
            let error = error.clone();
            let on_created = on_created.clone();

            spawn_local(async move {
                let outcome =
                    SubmitOutcome::from_result(api::create_product(&config, &product).await);
                match &outcome {
                    SubmitOutcome::Created => {
                        error.set(None);
                        gloo::dialogs::alert(&outcome.message());
                        on_created.emit(());
                    }
                    SubmitOutcome::Failed(reason) => {
                        gloo::console::error!(format!("create product failed: {reason}"));
                        error.set(Some(outcome.message()));
                    }
                }
            });
        })
    };

    html! {
        <div class="panel form-panel">
            <div class="panel-header">
                <h2>{ "New Product" }</h2>
            </div>
            <form class="panel-content product-form" onsubmit={on_submit}>
                { for FormField::ALL.iter().map(|field| html! {
                    <input
                        name={field.name()}
                        placeholder={field.placeholder()}
                        value={form.get(*field).to_string()}
                        oninput={on_input.clone()}
                    />
                })}
                <button type="submit" class="create-button">{ "Create" }</button>
                if let Some(message) = &*error {
                    <div class="error">{ message }</div>
                }
            </form>
        </div>
    }
}

/// What the list currently has to show.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

impl ListState {
    pub fn from_result(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => ListState::Loaded(products),
            Err(e) => ListState::Failed(format!("Could not load products: {e}")),
        }
    }
}

/// Hands out one ticket per list fetch so that a slow, older response
/// cannot overwrite the result of a newer one.
#[derive(Debug, Default)]
pub struct FetchTracker {
    latest: u64,
}

impl FetchTracker {
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Price as shown in the list.
pub fn price_label(price: &str) -> String {
    if price.trim().is_empty() {
        "-".to_string()
    } else {
        price.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductListProps {
    /// Refetch whenever this changes.
    #[prop_or_default]
    pub refresh: u32,
}

#[function_component(ProductList)]
pub fn product_list(props: &ProductListProps) -> Html {
    let config = use_config();
    let state = use_state(|| ListState::Loading);
    let tracker = use_mut_ref(FetchTracker::default);

    {
        let state = state.clone();
        use_effect_with(props.refresh, move |_| {
            let ticket = tracker.borrow_mut().begin();
            spawn_local(async move {
                let result = api::list_products(&config).await;
                if let Err(e) = &result {
                    gloo::console::error!(format!("list products failed: {e}"));
                }
                // Superseded by a later refresh.
                if !tracker.borrow().is_current(ticket) {
                    return;
                }
                state.set(ListState::from_result(result));
            });
            || ()
        });
    }

    let body = match &*state {
        ListState::Loading => html! { <p class="hint">{ "Loading..." }</p> },
        ListState::Failed(message) => html! { <div class="error">{ message }</div> },
        ListState::Loaded(products) if products.is_empty() => {
            html! { <p class="hint">{ "No products yet." }</p> }
        }
        ListState::Loaded(products) => html! {
            <ul class="product-list">
                { for products.iter().map(product_item) }
            </ul>
        },
    };

    html! {
        <div class="panel list-panel">
            <div class="panel-header">
                <h2>{ "Products" }</h2>
            </div>
            <div class="panel-content">
                { body }
            </div>
        </div>
    }
}

fn product_item(product: &Product) -> Html {
    html! {
        <li class="product">
            if !product.image_url.is_empty() {
                <img class="product-image" src={product.image_url.clone()} alt={product.name.clone()} />
            }
            <div class="product-details">
                <h3>{ &product.name }</h3>
                <p>{ &product.description }</p>
                <span class="price">{ price_label(&product.price) }</span>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_keeps_order() {
        let products = vec![
            Product::new("B", "", "2", ""),
            Product::new("A", "", "1", ""),
        ];
        match ListState::from_result(Ok(products.clone())) {
            ListState::Loaded(loaded) => assert_eq!(loaded, products),
            other => panic!("Expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_list_state_failure_message() {
        let state = ListState::from_result(Err(CatalogError::Network {
            message: "Failed to fetch".to_string(),
        }));
        assert_eq!(
            state,
            ListState::Failed("Could not load products: Request failed: Failed to fetch".into())
        );
    }

    #[test]
    fn test_fetch_tracker_drops_superseded_fetch() {
        let mut tracker = FetchTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        // The second fetch resolves first; the first one resolves late.
        assert!(tracker.is_current(second));
        assert!(!tracker.is_current(first));
    }

    #[test]
    fn test_fetch_tracker_single_fetch_is_current() {
        let mut tracker = FetchTracker::default();
        let ticket = tracker.begin();
        assert!(tracker.is_current(ticket));
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label("9.99"), "9.99");
        assert_eq!(price_label(""), "-");
        assert_eq!(price_label("  "), "-");
    }
}
