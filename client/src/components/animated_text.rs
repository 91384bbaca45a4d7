//! Heading text revealed one word at a time.

use leptos::prelude::*;

use crate::util::text_reveal::reveal_words;

/// Renders `text` as masked word spans; the stylesheet staggers each word
/// by its `--word-index`.
#[component]
pub fn AnimatedText(#[prop(into)] text: String) -> impl IntoView {
    reveal_words(&text)
        .into_iter()
        .map(|word| {
            let style = word.style();
            let word = word.word.to_owned();
            view! {
                <span class="animated-text">
                    <span class="animated-text__word" style=style>
                        {word}
                    </span>
                </span>
            }
        })
        .collect_view()
}
