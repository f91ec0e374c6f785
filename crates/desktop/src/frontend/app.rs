//! Leptos application: creation form, search box, inventory table, adjust
//! dialog, and notification stack.

use std::rc::Rc;

use leptos::*;

use stockroom_client::{ClientConfig, ConfigError, HttpProductApi};

use crate::controller::{AdjustPrompt, InventoryController};
use crate::form::CreationForm;
use crate::notify::{NoticeKind, Notifications};
use crate::rows::ProductRow;
use crate::view::InventoryView;

/// Pushes controller output into signals.
#[derive(Clone, Copy)]
struct SignalView {
    rows: RwSignal<Vec<ProductRow>>,
    notices: RwSignal<Notifications>,
}

impl InventoryView for SignalView {
    fn render(&self, rows: &[ProductRow]) {
        self.rows.set(rows.to_vec());
    }

    fn notify(&self, kind: NoticeKind, message: String) {
        self.notices.update(|n| {
            n.push(kind, message);
        });
    }
}

type Controller = Rc<InventoryController<HttpProductApi, SignalView>>;

/// The API is served from the same origin as the page.
fn page_config() -> Result<ClientConfig, ConfigError> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    ClientConfig::new(&origin)
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let rows = create_rw_signal(Vec::<ProductRow>::new());
    let notices = create_rw_signal(Notifications::new());

    let config = match page_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return view! { <p class="fatal">{e.to_string()}</p> }.into_view();
        }
    };

    let controller: Controller = Rc::new(InventoryController::new(
        HttpProductApi::new(config),
        SignalView { rows, notices },
    ));

    let initial = controller.clone();
    spawn_local(async move { initial.refresh().await });

    view! {
        <div class="app">
            <header>
                <h1>"Inventory"</h1>
            </header>

            <main>
                <ProductForm controller=controller.clone()/>
                <SearchBox controller=controller.clone()/>
                <InventoryTable controller=controller rows=rows/>
            </main>

            <NoticeStack notices=notices/>
        </div>
    }
    .into_view()
}

/// Inputs are sent as typed; the controller and backend decide what is valid.
#[component]
fn ProductForm(controller: Controller) -> impl IntoView {
    let form = create_rw_signal(CreationForm::default());
    let submitting = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        submitting.set(true);
        let controller = controller.clone();
        let mut draft = form.get_untracked();
        spawn_local(async move {
            if controller.submit(&mut draft).await {
                form.set(draft);
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="product-form" novalidate=true on:submit=on_submit>
            <label for="name">"Name"</label>
            <input
                id="name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />

            <label for="sku">"SKU"</label>
            <input
                id="sku"
                prop:value=move || form.with(|f| f.sku.clone())
                on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
            />

            <label for="price">"Price"</label>
            <input
                id="price"
                type="number"
                prop:value=move || form.with(|f| f.price.clone())
                on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
            />

            <label for="quantity">"Quantity"</label>
            <input
                id="quantity"
                type="number"
                prop:value=move || form.with(|f| f.quantity.clone())
                on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
            />

            <label for="minStock">"Min stock"</label>
            <input
                id="minStock"
                type="number"
                prop:value=move || form.with(|f| f.min_stock.clone())
                on:input=move |ev| form.update(|f| f.min_stock = event_target_value(&ev))
            />

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Saving..." } else { "Add product" }}
            </button>
        </form>
    }
}

/// Every keystroke refreshes; stale responses are dropped by the controller.
#[component]
fn SearchBox(controller: Controller) -> impl IntoView {
    view! {
        <input
            id="search"
            type="search"
            placeholder="Search by name or SKU"
            on:input=move |ev| {
                let text = event_target_value(&ev);
                let controller = controller.clone();
                spawn_local(async move { controller.set_search(text).await });
            }
        />
    }
}

#[component]
fn InventoryTable(controller: Controller, rows: RwSignal<Vec<ProductRow>>) -> impl IntoView {
    let adjusting = create_rw_signal(None::<AdjustPrompt>);
    let adjust_input = create_rw_signal(String::new());
    let dialog_controller = controller.clone();

    let row_view = move |row: ProductRow| {
        let delete_controller = controller.clone();
        let adjust_controller = controller.clone();
        let delete_id = row.id.clone();
        let adjust_id = row.id.clone();

        view! {
            <tr>
                <td class="name">{row.name.clone()}</td>
                <td class="sku">{row.sku.clone()}</td>
                <td class="price">{row.price.clone()}</td>
                <td class="quantity">{row.quantity}</td>
                <td class="min-stock">{row.min_stock}</td>
                <td class=format!("status {}", row.status_class())>{row.status_label()}</td>
                <td class="actions">
                    <button
                        class="delete"
                        on:click=move |_| {
                            let controller = delete_controller.clone();
                            let id = delete_id.clone();
                            spawn_local(async move { controller.delete(&id).await });
                        }
                    >
                        "Delete"
                    </button>
                    <button
                        class="adjust"
                        on:click=move |_| {
                            if let Some(prompt) = adjust_controller.adjust_prompt(&adjust_id) {
                                adjust_input.set(prompt.default_value());
                                adjusting.set(Some(prompt));
                            }
                        }
                    >
                        "Adjust"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <table class="inventory">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"SKU"</th>
                    <th>"Price"</th>
                    <th>"Quantity"</th>
                    <th>"Min stock"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="inventory-body">
                {move || rows.get().into_iter().map(row_view.clone()).collect_view()}
            </tbody>
        </table>

        {move || {
            rows.with(Vec::is_empty)
                .then(|| view! { <p class="empty">"No products found."</p> })
        }}

        <AdjustDialog controller=dialog_controller adjusting=adjusting input=adjust_input/>
    }
}

/// In-page replacement for a blocking prompt; Cancel behaves like dismissing it.
#[component]
fn AdjustDialog(
    controller: Controller,
    adjusting: RwSignal<Option<AdjustPrompt>>,
    input: RwSignal<String>,
) -> impl IntoView {
    let answer = move |value: Option<String>| {
        let Some(prompt) = adjusting.get_untracked() else {
            return;
        };
        adjusting.set(None);
        let controller = controller.clone();
        spawn_local(async move {
            controller
                .adjust_quantity(&prompt.product_id, value.as_deref())
                .await
        });
    };

    let save = {
        let answer = answer.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            answer(Some(input.get_untracked()));
        }
    };
    let cancel = move |_: ev::MouseEvent| answer(None);

    move || {
        adjusting.get().map(|prompt| {
            view! {
                <div class="modal" role="dialog" aria-modal="true">
                    <form novalidate=true on:submit=save.clone()>
                        <label for="adjust-quantity">{prompt.message()}</label>
                        <input
                            id="adjust-quantity"
                            type="text"
                            inputmode="numeric"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                        />
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=cancel.clone()>"Cancel"</button>
                    </form>
                </div>
            }
        })
    }
}

#[component]
fn NoticeStack(notices: RwSignal<Notifications>) -> impl IntoView {
    view! {
        <div class="notices" aria-live="polite">
            {move || {
                notices.with(|all| {
                    all.iter()
                        .map(|notice| {
                            let id = notice.id;
                            view! {
                                <div class=format!("notice {}", notice.kind.css_class()) role="alert">
                                    <span>{notice.message.clone()}</span>
                                    <button
                                        class="dismiss"
                                        on:click=move |_| {
                                            notices.update(|n| {
                                                n.dismiss(id);
                                            });
                                        }
                                    >
                                        "Dismiss"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
