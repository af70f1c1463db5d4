//! Support analytics dashboard (admin).
//!
//! SYSTEM CONTEXT
//! ==============
//! Conversation logs picked here are sent in one batch analysis with the
//! default agent; the dashboard is fetched once the batch completes. Picked
//! `File` handles live in a local stored value beside the names in
//! `AnalyticsState` since they cannot leave the browser thread.

use leptos::prelude::*;

use crate::net::api::BrowserApi;
use crate::state::analytics::{AnalyticsState, LOG_ACCEPT_ATTR, Score};

fn score_text(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.1}"))
}

fn score_rows(scores: Vec<Score>) -> impl IntoView {
    scores
        .into_iter()
        .map(|score| {
            view! {
                <tr>
                    <td>{score.label}</td>
                    <td>{score_text(score.value)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let analytics = RwSignal::new(AnalyticsState::default());

    #[cfg(feature = "hydrate")]
    let picked = StoredValue::new_local(Vec::<web_sys::File>::new());

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let files: Vec<web_sys::File> = crate::util::files::selected(&input)
                .into_iter()
                .filter(|f| crate::state::analytics::is_log_file(&f.name()))
                .collect();
            let names: Vec<String> = files.iter().map(web_sys::File::name).collect();
            analytics.update(|a| {
                a.select(names.iter().map(String::as_str));
            });
            picked.update_value(|p| p.extend(files));
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let remove = move |index: usize| {
        analytics.update(|a| a.deselect(index));
        #[cfg(feature = "hydrate")]
        picked.update_value(|p| {
            if index < p.len() {
                p.remove(index);
            }
        });
    };

    let on_analyze = move |_| {
        if !analytics.try_update(AnalyticsState::start).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        let files = picked.get_value();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            #[cfg(feature = "hydrate")]
            let uploads = {
                let mut uploads = Vec::with_capacity(files.len());
                for file in &files {
                    match crate::util::files::read(file).await {
                        Ok(upload) => uploads.push(upload),
                        Err(e) => {
                            analytics.update(|a| a.failed(e));
                            return;
                        }
                    }
                }
                uploads
            };
            #[cfg(not(feature = "hydrate"))]
            let uploads = Vec::new();

            let result = match api.analyze_batch(uploads, crate::net::api::DEFAULT_AGENT).await {
                Ok(_) => api.dashboard().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(data) => analytics.update(|a| a.loaded(&data)),
                Err(e) => {
                    leptos::logging::warn!("analysis failed: {e}");
                    analytics.update(|a| a.failed(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="analytics-page">
            <h1>"Support Analytics"</h1>
            <p class="analytics-page__subtitle">
                "Analyze agent performance, identify improvement opportunities, and optimize your customer support."
            </p>

            <section class="analytics-upload">
                <label class="upload-drop">
                    <input type="file" multiple accept=LOG_ACCEPT_ATTR on:change=on_pick/>
                    <span>"Add conversation logs (PDF, TXT, DOCX)"</span>
                </label>
                <ul class="upload-list">
                    {move || {
                        analytics
                            .with(|a| a.selected.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, name)| {
                                view! {
                                    <li class="upload-item">
                                        <span class="upload-item__name">{name}</span>
                                        <button class="btn btn--ghost" on:click=move |_| remove(index)>"Remove"</button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <button
                    class="btn btn--primary"
                    on:click=on_analyze
                    disabled=move || analytics.with(|a| a.processing || a.selected.is_empty())
                >
                    {move || if analytics.with(|a| a.processing) { "Analyzing..." } else { "Analyze Logs" }}
                </button>
                {move || analytics.with(|a| a.error.clone()).map(|e| view! { <p class="analytics-page__error">{e}</p> })}
            </section>

            {move || {
                analytics.with(|a| a.dashboard.clone()).map(|dashboard| {
                    view! {
                        <section class="kpi-grid">
                            {dashboard
                                .kpis
                                .into_iter()
                                .map(|card| view! {
                                    <div class="kpi-card">
                                        <div class="kpi-card__title">{card.title}</div>
                                        <div class="kpi-card__value">{card.value}</div>
                                    </div>
                                })
                                .collect::<Vec<_>>()}
                        </section>

                        <section class="analytics-panel">
                            <h2>"Performance by Metric"</h2>
                            <table class="score-table"><tbody>{score_rows(dashboard.performance)}</tbody></table>
                        </section>

                        <section class="analytics-panel">
                            <h2>"Agent Satisfaction"</h2>
                            <table class="score-table"><tbody>{score_rows(dashboard.agents)}</tbody></table>
                        </section>

                        <section class="analytics-panel">
                            <h2>"Monthly Trends"</h2>
                            {dashboard
                                .trends
                                .into_iter()
                                .map(|trend| view! {
                                    <div class="trend">
                                        <h3>{trend.month}</h3>
                                        <table class="score-table"><tbody>{score_rows(trend.values)}</tbody></table>
                                    </div>
                                })
                                .collect::<Vec<_>>()}
                        </section>

                        <section class="analytics-panel">
                            <h2>"Improvement Suggestions"</h2>
                            {dashboard
                                .improvements
                                .into_iter()
                                .map(|item| {
                                    let high = item.is_high_priority();
                                    let width = format!("width: {}%", item.progress.unwrap_or(0.0));
                                    view! {
                                        <div class="improvement">
                                            <div class="improvement__header">
                                                <h3>{item.area}</h3>
                                                <span class="badge" class:badge--high=high>
                                                    {format!("{} priority", item.priority)}
                                                </span>
                                                <span class="improvement__values">
                                                    {format!("{} → {}", item.current, item.target)}
                                                </span>
                                            </div>
                                            <div class="progress"><div class="progress__bar" style=width></div></div>
                                            <p>{item.recommendation}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </section>
                    }
                })
            }}
        </div>
    }
}
