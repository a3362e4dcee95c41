use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::content::TECH_TAGS;

const WORDMARK: [&str; 4] = ["A", "O", "J", "U"];
const CAROUSEL_TAGS: usize = 6;
const LETTER_STAGGER_SECONDS: f64 = 0.15;
const LAUNCH_NOTICE: &str = "正在初始化神经连接...\nConnecting to Neural Network...";

#[function_component(Hero)]
pub fn hero() -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(win) = window() {
            let _ = win.alert_with_message(LAUNCH_NOTICE);
        }
    });

    html! {
        <div class="hero">
            <div class="orb orb-top" aria-hidden="true" />
            <div class="orb orb-bottom" aria-hidden="true" />

            <main class="hero-main">
                <div class="tag-row">
                    { for TECH_TAGS.iter().take(CAROUSEL_TAGS).map(|tag| html! {
                        <span class="tech-tag">{*tag}</span>
                    }) }
                </div>

                <div class="wordmark">
                    <div class="wordmark-glow" aria-hidden="true" />
                    <div class="wordmark-letters">
                        { for WORDMARK.iter().enumerate().map(|(i, letter)| {
                            let style = format!(
                                "animation-delay: {:.2}s;",
                                i as f64 * LETTER_STAGGER_SECONDS
                            );
                            html! { <span class="wordmark-letter" {style}>{*letter}</span> }
                        }) }
                    </div>
                    <div class="wordmark-frame" aria-hidden="true" />
                </div>

                <h2 class="hero-subtitle">{"Artificial Intelligence Frontier"}</h2>

                <div class="glass-panel">
                    <div class="glass-panel-body">
                        <div class="glass-panel-copy">
                            <h3>{"聚万象 · 演奥义"}</h3>
                            <div class="accent-rule" />
                            <p>
                                {"纳数据之形，穷逻辑之理。"}
                                <br />
                                {"从感知世界的广度，到认知推理的深度，"}
                                {"在比特的洪流中，构建通往通用人工智能的实证之路。"}
                            </p>
                        </div>

                        <button
                            class="launch-button"
                            type="button"
                            onclick={onclick}
                            onmouseenter={onmouseenter}
                            onmouseleave={onmouseleave}
                        >
                            <span class="launch-label">{"Launch Platform"}</span>
                            <svg
                                class={classes!("launch-arrow", (*hovered).then_some("is-nudged"))}
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                                aria-hidden="true"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M13 7l5 5m0 0l-5 5m5-5H6"
                                />
                            </svg>
                        </button>
                    </div>

                    <div class="glass-panel-footer">
                        <span>{"System Status: Optimal"}</span>
                        <span class="live-indicator">
                            <span class="live-dot" aria-hidden="true" />
                            {"Live Connected"}
                        </span>
                    </div>
                </div>
            </main>

            <footer class="hero-footer">
                {"AOJU INTELLIGENCE DIVISION // EST. 2025 // SECURE PROTOCOL"}
            </footer>
        </div>
    }
}
