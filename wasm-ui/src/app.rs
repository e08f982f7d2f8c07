//! Root container.

use product_catalog::ClientConfig;
use yew::prelude::*;

use crate::components::{CreateProductForm, ProductList};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ClientConfig,
}

/// Form and list side by side. A successful creation bumps the refresh
/// generation, which makes the list fetch again.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let refresh = use_state(|| 0u32);

    let on_created = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            refresh.set(refresh.wrapping_add(1));
        })
    };

    html! {
        <ContextProvider<ClientConfig> context={props.config.clone()}>
            <div class="app">
                <header class="header">
                    <h1>{ "Product Catalog" }</h1>
                    <p class="subtitle">{ props.config.base_url() }</p>
                </header>
                <main class="main">
                    <div class="panels">
                        <CreateProductForm on_created={on_created} />
                        <ProductList refresh={*refresh} />
                    </div>
                </main>
            </div>
        </ContextProvider<ClientConfig>>
    }
}
