use yew::prelude::*;

use crate::config;
use crate::reveal::use_reveal_on_view;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum BlockTone {
    #[default]
    Plain,
    Soft,
    White,
}

impl BlockTone {
    fn shell(self) -> &'static str {
        match self {
            BlockTone::Soft => "rounded-2xl border border-zinc-200 bg-zinc-50 p-6 sm:p-7",
            BlockTone::White => "rounded-2xl border border-zinc-200 bg-white p-6 sm:p-7",
            BlockTone::Plain => "rounded-2xl p-0",
        }
    }
}

fn block_classes(tone: BlockTone, motion: &'static str) -> Classes {
    classes!(tone.shell(), "transition-all", "duration-700", "ease-out", motion)
}

#[derive(Properties, PartialEq)]
pub struct RevealBlockProps {
    pub title: String,
    #[prop_or_default]
    pub tone: BlockTone,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealBlockProps) -> Html {
    let reveal = use_reveal_on_view(config::block_reveal());

    html! {
        <section
            ref={reveal.node_ref.clone()}
            class={block_classes(props.tone, reveal.motion_classes())}
            style={format!("transition-delay: {}ms", props.delay_ms)}
        >
            <div class="flex items-center gap-3">
                <div class="h-7 w-1.5 rounded-full bg-zinc-900/80"></div>
                <h3 class="text-base sm:text-lg font-semibold tracking-tight text-zinc-900">
                    { &props.title }
                </h3>
            </div>
            <div class="mt-4 space-y-4 text-sm sm:text-base leading-relaxed text-zinc-700">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_classes_combine_tone_and_motion() {
        let hidden = block_classes(BlockTone::Soft, "opacity-0 translate-y-4");
        assert!(hidden.contains("bg-zinc-50"));
        assert!(hidden.contains("duration-700"));
        assert!(hidden.contains("opacity-0"));
        assert!(hidden.contains("translate-y-4"));

        let plain = block_classes(BlockTone::default(), "opacity-100 translate-y-0");
        assert!(plain.contains("p-0"));
        assert!(plain.contains("opacity-100"));
        assert!(!plain.contains("border"));
    }
}
