//! Chat with the support assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route: signed-out visitors use the anonymous endpoint and get no
//! history drawer. Signed-in users continue conversations through the id the
//! backend returns and can open, rename or delete stored conversations.

use leptos::prelude::*;

use crate::net::api::BrowserApi;
use crate::state::chat::{ChatState, Feedback, Sender};
use crate::state::session::BrowserSession;
use crate::util::markdown::render_html;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let api = expect_context::<BrowserApi>();

    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let rename_target = RwSignal::new(None::<(String, String)>);
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let signed_in = move || session.with(BrowserSession::is_authenticated);

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.typing));
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let send = {
        let api = api.clone();
        move || {
            let Some(question) = chat.try_update(|c| c.begin_question(&input.get_untracked())).flatten() else {
                return;
            };
            input.set(String::new());
            let conversation_id = chat.with_untracked(|c| c.conversation_id.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.chat(&question, conversation_id.as_deref()).await {
                    Ok(reply) => chat.update(|c| c.receive_answer(reply)),
                    Err(e) => chat.update(|c| c.receive_error(&e.to_string())),
                }
            });
        }
    };
    let send_on_click = send.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    let load_history = {
        let api = api.clone();
        move || {
            chat.update(|c| c.history_open = !c.history_open);
            if !chat.with_untracked(|c| c.history_open) {
                return;
            }
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.conversations().await {
                    Ok(history) => chat.update(|c| c.set_history(history)),
                    Err(e) => chat.update(|c| c.history_error = Some(e.to_string())),
                }
            });
        }
    };

    let open_conversation = Callback::new({
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.conversation(&id).await {
                    Ok(detail) => chat.update(|c| c.open_conversation(&id, detail)),
                    Err(e) => chat.update(|c| c.history_error = Some(e.to_string())),
                }
            });
        }
    });

    let delete_conversation = Callback::new({
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_conversation(&id).await {
                    Ok(()) => chat.update(|c| c.remove_from_history(&id)),
                    Err(e) => chat.update(|c| c.history_error = Some(e.to_string())),
                }
            });
        }
    });

    let commit_rename = Callback::new(move |()| {
        let Some((id, name)) = rename_target.get_untracked() else {
            return;
        };
        let name = name.trim().to_owned();
        rename_target.set(None);
        if name.is_empty() {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.rename_conversation(&id, &name).await {
                Ok(()) => chat.update(|c| c.rename_in_history(&id, &name)),
                Err(e) => chat.update(|c| c.history_error = Some(e.to_string())),
            }
        });
    });

    view! {
        <div class="chat-page">
            <div class="chat-page__toolbar">
                <h1>"Support Chat"</h1>
                <Show when=signed_in>
                    <button class="btn btn--ghost" on:click={
                        let load_history = load_history.clone();
                        move |_| load_history()
                    }>"Old Conversations"</button>
                    <button class="btn btn--ghost" on:click=move |_| chat.update(ChatState::new_conversation)>
                        "New Conversation"
                    </button>
                </Show>
            </div>

            <Show when=move || signed_in() && chat.with(|c| c.history_open)>
                <aside class="chat-history">
                    {move || chat.with(|c| c.history_error.clone()).map(|e| view! { <p class="chat-history__error">{e}</p> })}
                    {move || {
                        let history = chat.with(|c| c.history.clone());
                        if history.is_empty() {
                            return view! { <p class="chat-history__empty">"No saved conversations."</p> }.into_any();
                        }
                        history
                            .into_iter()
                            .filter_map(|entry| {
                                let id = entry.id.clone()?;
                                let label = entry.label().to_owned();
                                let open_id = id.clone();
                                let delete_id = id.clone();
                                let rename_seed = (id.clone(), label.clone());
                                let renaming = {
                                    let id = id.clone();
                                    move || rename_target.with(|t| t.as_ref().is_some_and(|(tid, _)| *tid == id))
                                };
                                Some(view! {
                                    <div class="chat-history__item">
                                        <Show
                                            when=renaming
                                            fallback={
                                                let label = label.clone();
                                                let open_id = open_id.clone();
                                                move || {
                                                    let open_id = open_id.clone();
                                                    view! {
                                                        <button
                                                            class="chat-history__open"
                                                            on:click=move |_| open_conversation.run(open_id.clone())
                                                        >
                                                            {label.clone()}
                                                        </button>
                                                    }
                                                }
                                            }
                                        >
                                            <input
                                                class="chat-history__rename"
                                                prop:value=move || rename_target.with(|t| t.as_ref().map(|(_, n)| n.clone()).unwrap_or_default())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    rename_target.update(|t| {
                                                        if let Some((_, name)) = t.as_mut() {
                                                            *name = value;
                                                        }
                                                    });
                                                }
                                                on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                                                    "Enter" => commit_rename.run(()),
                                                    "Escape" => rename_target.set(None),
                                                    _ => {}
                                                }
                                            />
                                        </Show>
                                        <button
                                            class="chat-history__action"
                                            on:click=move |_| rename_target.set(Some(rename_seed.clone()))
                                        >
                                            "Rename"
                                        </button>
                                        <button
                                            class="chat-history__action chat-history__action--danger"
                                            on:click=move |_| delete_conversation.run(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                })
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </aside>
            </Show>

            <div class="chat-page__messages" node_ref=messages_ref>
                {move || {
                    chat.with(|c| c.messages.clone())
                        .into_iter()
                        .map(|message| {
                            let is_assistant = message.sender == Sender::Assistant;
                            let is_error = message.sender == Sender::Error;
                            let rateable = is_assistant && !message.is_welcome();
                            let feedback = message.feedback;
                            let up_id = message.id.clone();
                            let down_id = message.id.clone();
                            let sources = message.sources.join(", ");
                            view! {
                                <div
                                    class="chat-message"
                                    class:chat-message--assistant=is_assistant
                                    class:chat-message--error=is_error
                                >
                                    {if is_assistant {
                                        let rendered = render_html(&message.content);
                                        view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
                                    } else {
                                        view! { <span>{message.content}</span> }.into_any()
                                    }}
                                    {(!sources.is_empty()).then(|| view! { <div class="chat-message__sources">{sources}</div> })}
                                    {rateable.then(|| view! {
                                        <div class="chat-message__feedback">
                                            <button
                                                class="feedback-btn"
                                                class:feedback-btn--active=feedback == Some(Feedback::Positive)
                                                on:click=move |_| { chat.update(|c| { c.set_feedback(&up_id, Feedback::Positive); }); }
                                            >
                                                "👍"
                                            </button>
                                            <button
                                                class="feedback-btn"
                                                class:feedback-btn--active=feedback == Some(Feedback::Negative)
                                                on:click=move |_| { chat.update(|c| { c.set_feedback(&down_id, Feedback::Negative); }); }
                                            >
                                                "👎"
                                            </button>
                                        </div>
                                    })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || chat.with(|c| c.typing).then(|| view! { <div class="chat-message chat-message--typing">"Thinking..."</div> })}
            </div>

            <div class="chat-page__input-row">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Ask a question about your documents..."
                    disabled=move || chat.with(|c| c.typing)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    on:click=move |_| send_on_click()
                    disabled=move || input.with(|i| i.trim().is_empty()) || chat.with(|c| c.typing)
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
