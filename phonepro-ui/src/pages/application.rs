//! Application Page
//!
//! Signed-in view: phone details search and the recommendation form.

use leptos::*;

use phonepro::catalog::{
    load_details, record_rows, DetailState, ModelPicker, OptionsState, PhoneLookup,
};
use phonepro::recommend::{self, RecommendState, RecommendationForm, ResultView, Slider};
use phonepro::Backend;

use crate::api::BrowserBackend;
use crate::components::{
    KeyValueList, Loading, MessageArea, OutlineButton, PrimaryButton, RangeField, SelectField,
    SectionCard,
};

/// Signed-in view
#[component]
pub fn ApplicationView(
    #[prop(into)]
    username: String,
    on_logout: Callback<()>,
) -> impl IntoView {
    let backend = store_value(BrowserBackend::new());
    let options = create_rw_signal(OptionsState::Loading);
    let picker = create_rw_signal(ModelPicker::default());
    let form = create_rw_signal(RecommendationForm::default());

    // Fetch the option lists once on mount
    spawn_local(async move {
        let result = backend.get_value().options().await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to load options: {}", e).into());
        }
        options.set(OptionsState::from_result(result));
    });

    // Default empty selections to the first entry of each list
    create_effect(move |_| {
        options.with(|state| {
            if let OptionsState::Loaded(catalog) = state {
                form.update(|f| f.apply_defaults(catalog));
                picker.update(|p| p.apply_default(catalog));
            }
        });
    });

    view! {
        <div class="space-y-8">
            <header class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"PhonePro"</h1>
                    <p class="text-gray-400 mt-1">{format!("Signed in as {}", username)}</p>
                </div>
                <div class="w-32">
                    <OutlineButton label="Logout" on_click=Callback::new(move |_: web_sys::MouseEvent| on_logout.call(())) />
                </div>
            </header>

            <AboutCard />

            <PhoneDetails backend=backend options=options picker=picker />

            <RecommendationPanel backend=backend options=options form=form />
        </div>
    }
}

#[component]
fn AboutCard() -> impl IntoView {
    view! {
        <SectionCard title="About">
            <p class="text-gray-300">
                "PhonePro suggests a phone from your budget and the features you care about. \
                 Look up any model's specifications, or describe what you want and get a \
                 recommendation."
            </p>
        </SectionCard>
    }
}

/// Model search and the selected model's detail record
#[component]
fn PhoneDetails(
    backend: StoredValue<BrowserBackend>,
    options: RwSignal<OptionsState>,
    picker: RwSignal<ModelPicker>,
) -> impl IntoView {
    let lookup = store_value(PhoneLookup::new());
    let detail = create_rw_signal(DetailState::Empty);

    let selected = create_memo(move |_| picker.with(|p| p.selected.clone()));

    create_effect(move |_| {
        let model = selected.get();
        let state = lookup.with_value(|l| l.begin(&model));
        let needs_fetch = state == DetailState::Loading;
        detail.set(state);
        if !needs_fetch {
            return;
        }

        let backend = backend.get_value();
        spawn_local(async move {
            let state = load_details(&backend, &model).await;
            settle_detail(lookup, selected, detail, &model, state);
        });
    });

    let visible = Signal::derive(move || {
        options.with(|o| {
            let catalog = o.catalog();
            picker.with(|p| {
                p.visible(&catalog)
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<String>>()
            })
        })
    });

    view! {
        <SectionCard title="Search Phone Details">
            <div class="space-y-1">
                <label for="modelFilter" class="block text-sm text-gray-400">"Filter Models"</label>
                <input
                    id="modelFilter"
                    type="text"
                    placeholder="Type to filter..."
                    class="w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 \
                           focus:outline-none focus:border-primary-500"
                    prop:value=move || picker.with(|p| p.filter.clone())
                    on:input=move |ev| picker.update(|p| p.filter = event_target_value(&ev))
                />
            </div>

            <SelectField
                id="model"
                label="Phone Model"
                options=visible
                value=Signal::derive(move || selected.get())
                on_change=Callback::new(move |model: String| picker.update(|p| p.selected = model))
            />

            {move || detail.with(|state| match state {
                DetailState::Loaded(record) => view! {
                    <KeyValueList rows=record_rows(record) />
                }.into_view(),
                DetailState::Loading => view! {
                    <Loading text=state.status_text().unwrap_or_default() />
                }.into_view(),
                other => view! {
                    <p class="text-gray-400">{other.status_text().unwrap_or_default()}</p>
                }.into_view(),
            })}
        </SectionCard>
    }
}

/// Apply a finished detail fetch. Reads go through `try_*` since the view
/// may have been unmounted (logout) while the request was in flight.
fn settle_detail(
    lookup: StoredValue<PhoneLookup>,
    selected: Memo<String>,
    detail: RwSignal<DetailState>,
    model: &str,
    state: DetailState,
) {
    let current = selected.try_get_untracked();
    let settled = lookup
        .try_update_value(|l| l.settle(model, state, current.as_deref()))
        .flatten();
    if let Some(state) = settled {
        detail.set(state);
    }
}

/// Recommendation controls, submit button and result box
#[component]
fn RecommendationPanel(
    backend: StoredValue<BrowserBackend>,
    options: RwSignal<OptionsState>,
    form: RwSignal<RecommendationForm>,
) -> impl IntoView {
    let state = create_rw_signal(RecommendState::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.loading) {
            return;
        }
        state.update(RecommendState::begin);

        let request = form.get_untracked();
        spawn_local(async move {
            let outcome = recommend::submit(&backend.get_value(), &request).await;
            if let Err(e) = &outcome {
                web_sys::console::warn_1(&format!("Recommendation failed: {}", e).into());
            }
            state.update(|s| s.finish(outcome));
        });
    };

    let catalog = create_memo(move |_| options.with(OptionsState::catalog));

    view! {
        <SectionCard title="Get Phone Recommendation">
            {move || options.with(|o| match o {
                OptionsState::Loading => view! {
                    <Loading text=o.status_text().unwrap_or_default() />
                }.into_view(),
                OptionsState::Failed(_) => view! {
                    <p class="text-red-400">{o.status_text().unwrap_or_default()}</p>
                }.into_view(),
                OptionsState::Loaded(_) => ().into_view(),
            })}

            <form on:submit=on_submit class="space-y-4">
                {Slider::ALL
                    .into_iter()
                    .map(|slider| view! {
                        <RangeField
                            slider=slider
                            value=Signal::derive(move || form.with(|f| f.get(slider)))
                            on_input=Callback::new(move |v: u32| form.update(|f| f.set(slider, v)))
                        />
                    })
                    .collect_view()}

                <div class="grid md:grid-cols-2 gap-4">
                    <SelectField
                        id="brand"
                        label="Brand"
                        options=Signal::derive(move || catalog.with(|c| c.brand_names.clone()))
                        value=Signal::derive(move || form.with(|f| f.brand.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.brand = v))
                    />
                    <SelectField
                        id="fiveG"
                        label="5G Support"
                        options=Signal::derive(|| vec!["Yes".to_string(), "No".to_string()])
                        value=Signal::derive(move || {
                            let label = if form.with(|f| f.support_5g) { "Yes" } else { "No" };
                            label.to_string()
                        })
                        on_change=Callback::new(move |v: String| form.update(|f| f.support_5g = v == "Yes"))
                    />
                    <SelectField
                        id="processor"
                        label="Processor Brand"
                        options=Signal::derive(move || catalog.with(|c| c.processor_brands.clone()))
                        value=Signal::derive(move || form.with(|f| f.processor.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.processor = v))
                    />
                    <SelectField
                        id="os"
                        label="Operating System"
                        options=Signal::derive(move || catalog.with(|c| c.operating_systems.clone()))
                        value=Signal::derive(move || form.with(|f| f.os.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.os = v))
                    />
                </div>

                <PrimaryButton
                    label=Signal::derive(move || state.with(|s| s.button_label().to_string()))
                    busy=Signal::derive(move || state.with(|s| s.loading))
                    button_type="submit"
                />
            </form>

            <MessageArea message=Signal::derive(move || state.with(|s| s.message.clone())) />

            {move || state.with(RecommendState::view).map(|result| view! { <ResultBox result=result /> })}
        </SectionCard>
    }
}

#[component]
fn ResultBox(result: ResultView) -> impl IntoView {
    let ResultView { suggested_model, details, raw } = result;

    view! {
        <div class="bg-gray-900 rounded-lg p-4 space-y-3">
            {suggested_model.map(|model| view! {
                <p class="text-lg">
                    <span class="text-gray-400">"Suggested Model: "</span>
                    <span class="font-semibold text-primary-400">{model}</span>
                </p>
            })}
            {details.map(|rows| view! { <KeyValueList rows=rows /> })}
            {raw.map(|text| view! {
                <pre class="text-sm text-gray-300 whitespace-pre-wrap break-words">{text}</pre>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn picker_on(model: &str) -> RwSignal<ModelPicker> {
        create_rw_signal(ModelPicker {
            selected: model.to_string(),
            ..ModelPicker::default()
        })
    }

    #[wasm_bindgen_test]
    fn test_details_for_old_selection_are_dropped() {
        let runtime = create_runtime();
        let picker = picker_on("Pixel 7");
        let selected = create_memo(move |_| picker.with(|p| p.selected.clone()));
        let lookup = store_value(PhoneLookup::new());
        let detail = create_rw_signal(DetailState::Loading);

        picker.update(|p| p.selected = "Pixel 6a".to_string());
        settle_detail(lookup, selected, detail, "Pixel 7", DetailState::Failed);
        assert_eq!(detail.get_untracked(), DetailState::Loading);

        settle_detail(lookup, selected, detail, "Pixel 6a", DetailState::Failed);
        assert_eq!(detail.get_untracked(), DetailState::Failed);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_details_arriving_after_unmount_do_not_panic() {
        let runtime = create_runtime();
        let picker = picker_on("Pixel 7");
        let selected = create_memo(move |_| picker.with(|p| p.selected.clone()));
        let lookup = store_value(PhoneLookup::new());
        let detail = create_rw_signal(DetailState::Loading);

        selected.dispose();
        settle_detail(lookup, selected, detail, "Pixel 7", DetailState::Failed);
        assert_eq!(detail.get_untracked(), DetailState::Loading);

        runtime.dispose();
    }
}
