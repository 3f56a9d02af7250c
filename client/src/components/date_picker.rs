//! Date picker widget: trigger button plus a month overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Props are the owner's source of truth (`value`, `min`, `occupied_dates`,
//! `disabled`). The component keeps one `calendar::DatePicker` model per
//! instance and only talks back through `on_change`, which fires with a
//! canonical `YYYY-MM-DD` string on a valid click.
//!
//! DESIGN
//! ======
//! Prop changes flow into the model through effects: a new `value` resets
//! the displayed month, new `min`/`occupied_dates` rebuild the constraints,
//! and `disabled` closes the overlay. Clicks on invalid cells are silent
//! no-ops. While open, a window-level pointerdown outside the widget (or
//! Escape inside it) closes the overlay.

#[cfg(test)]
#[path = "date_picker_test.rs"]
mod date_picker_test;

use calendar::{Constraints, DayCell, NaiveDate, OccupiedSet, WEEKDAY_LABELS, format_canonical};
use leptos::prelude::*;

use crate::util::dates::{display_label, parse_prop, today_local};

type PickerModel = calendar::DatePicker;

const DEFAULT_PLACEHOLDER: &str = "Select a date";

/// Validity rules for `today` with the raw `min` and occupied props.
pub(crate) fn build_constraints(today: NaiveDate, min: Option<&str>, occupied: &[String]) -> Constraints {
    let min = min.and_then(|raw| parse_prop(raw, "min"));
    Constraints::new(today).with_min(min).with_occupied(OccupiedSet::from_canonical(occupied))
}

/// Text shown on the closed trigger.
pub(crate) fn trigger_text(selected: Option<NaiveDate>, placeholder: Option<String>) -> String {
    match selected {
        Some(date) => display_label(date),
        None => placeholder.filter(|p| !p.trim().is_empty()).unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned()),
    }
}

#[component]
pub fn DatePicker(
    /// Canonical `YYYY-MM-DD`, or empty for no selection.
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] min: MaybeProp<String>,
    #[prop(optional, into)] occupied_dates: MaybeProp<Vec<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] label: MaybeProp<String>,
) -> impl IntoView {
    let today = today_local();
    let initial = {
        let occupied = occupied_dates.get_untracked().unwrap_or_default();
        let constraints = build_constraints(today, min.get_untracked().as_deref(), &occupied);
        PickerModel::new(parse_prop(&value.get_untracked(), "value"), constraints)
    };
    let model = RwSignal::new(initial);
    let root = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let selected = parse_prop(&value.get(), "value");
        model.update(|m| m.sync_displayed_month_to_value(selected));
    });

    Effect::new(move || {
        let occupied = occupied_dates.get().unwrap_or_default();
        let constraints = build_constraints(today, min.get().as_deref(), &occupied);
        model.update(|m| m.set_constraints(constraints));
    });

    Effect::new(move || {
        let disabled = disabled.get().unwrap_or(false);
        model.update(|m| m.set_disabled(disabled));
    });

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::pointerdown, move |ev| {
            if !model.with_untracked(PickerModel::is_open) {
                return;
            }
            let inside = root.get_untracked().zip(ev.target()).is_some_and(|(el, target)| {
                target.dyn_ref::<web_sys::Node>().is_some_and(|node| el.contains(Some(node)))
            });
            if !inside {
                model.update(|m| {
                    m.close_on_outside_interaction();
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && model.with_untracked(PickerModel::is_open) {
            ev.prevent_default();
            model.update(|m| {
                m.close_on_outside_interaction();
            });
        }
    };

    let select = move |date: NaiveDate| {
        if let Some(canonical) = model.try_update(|m| m.select_date(date)).flatten() {
            on_change.run(canonical);
        }
    };

    let render_cell = move |cell: DayCell| {
        let canonical = format_canonical(cell.date);
        view! {
            <button
                type="button"
                class=cell.class.css_class()
                data-date=canonical.clone()
                aria-label=canonical
                disabled=!cell.interactive
                on:click=move |_| select(cell.date)
            >
                {cell.date.format("%-d").to_string()}
            </button>
        }
    };

    view! {
        <div
            class="date-picker"
            class:date-picker--open=move || model.with(PickerModel::is_open)
            class:date-picker--disabled=move || model.with(PickerModel::is_disabled)
            node_ref=root
            on:keydown=on_keydown
        >
            <Show when=move || label.get().is_some()>
                <span class="date-picker__label">{move || label.get().unwrap_or_default()}</span>
            </Show>
            <button
                type="button"
                class="date-picker__trigger"
                class:date-picker__trigger--empty=move || model.with(|m| m.selected().is_none())
                disabled=move || model.with(PickerModel::is_disabled)
                aria-haspopup="dialog"
                aria-expanded=move || model.with(PickerModel::is_open).to_string()
                on:click=move |_| {
                    model.update(|m| {
                        m.toggle_open();
                    });
                }
            >
                {move || trigger_text(model.with(PickerModel::selected), placeholder.get())}
            </button>
            <Show when=move || model.with(PickerModel::is_open)>
                <div class="date-picker__overlay" role="dialog">
                    <div class="date-picker__header">
                        <button
                            type="button"
                            class="date-picker__nav"
                            aria-label="Previous month"
                            on:click=move |_| model.update(|m| m.navigate_month(-1))
                        >
                            "‹"
                        </button>
                        <span class="date-picker__title">{move || model.with(|m| m.displayed().title())}</span>
                        <button
                            type="button"
                            class="date-picker__nav"
                            aria-label="Next month"
                            on:click=move |_| model.update(|m| m.navigate_month(1))
                        >
                            "›"
                        </button>
                    </div>
                    <div class="date-picker__weekdays">
                        {WEEKDAY_LABELS.iter().map(|day| view! { <span>{*day}</span> }).collect_view()}
                    </div>
                    <div class="date-picker__grid">
                        {move || model.with(PickerModel::cells).into_iter().map(render_cell).collect_view()}
                    </div>
                    <button
                        type="button"
                        class="date-picker__today"
                        on:click=move |_| model.update(PickerModel::go_to_today)
                    >
                        "Today"
                    </button>
                </div>
            </Show>
        </div>
    }
}
