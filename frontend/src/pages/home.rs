use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::campaign::{self, yen, Progress};
use crate::config;
use crate::pages::returns::ReturnsBand;
use crate::pages::story::StoryFold;
use crate::reveal::use_reveal_on_view;

#[function_component(Home)]
pub fn home() -> Html {
    let progress = use_memo(|_| campaign::progress(), ());
    let returns = use_memo(|_| campaign::returns(), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().map_or(true, |hash| hash.is_empty()) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="min-h-screen bg-zinc-50 text-zinc-900">
            <Header />
            <Hero />
            <ProgressBand progress={(*progress).clone()} />
            <StoryBand />
            <PhilosophyBand />
            <ReturnsBand items={(*returns).clone()} />
            <MessageBand />
            <footer class="border-t border-zinc-200 bg-white">
                <div class="mx-auto max-w-6xl px-4 py-10 text-xs text-zinc-500">
                    { format!("© {} HikariNiwa. All rights reserved.", Utc::now().year()) }
                </div>
            </footer>
            <style>{ PAGE_STYLES }</style>
        </main>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="sticky top-0 z-50 border-b border-zinc-200/70 bg-white/80 backdrop-blur">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-4 py-3">
                <div class="flex items-center gap-3">
                    <div class="grid h-9 w-9 place-items-center rounded-full border border-zinc-200 bg-white text-sm font-semibold">
                        {"光"}
                    </div>
                    <div class="leading-tight">
                        <div class="text-sm font-semibold">{ config::SITE_NAME }</div>
                        <div class="text-xs text-zinc-500">{"Invite-only private funding"}</div>
                    </div>
                </div>
                <nav class="flex items-center gap-2 text-sm">
                    <a href="#progress" class="rounded-full px-4 py-2 text-zinc-700 hover:bg-zinc-100">{"進捗"}</a>
                    <a href="#returns" class="rounded-full bg-zinc-900 px-4 py-2 text-white hover:bg-zinc-800">{"リターン"}</a>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let facts = [
        ("場所", "都内／完全会員制"),
        ("完成予定", "2027年1月"),
        ("参加条件", "招待制（知り合い限定）"),
    ];

    html! {
        <section class="mx-auto max-w-6xl px-4 pt-10 sm:pt-14">
            <div class="overflow-hidden rounded-3xl border border-zinc-200 bg-white shadow-sm">
                <div class="relative aspect-[16/6] w-full">
                    <img
                        src="/images/hikariniwa-header.jpg"
                        alt="光庭のイメージ"
                        class="absolute inset-0 h-full w-full object-cover"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/55 via-black/20 to-transparent"></div>
                </div>
                <div class="px-6 py-8 sm:px-10 sm:py-10">
                    <p class="text-xs font-semibold tracking-[0.18em] text-zinc-500">{"PRIVATE CROWDFUNDING"}</p>
                    <h1 class="mt-3 text-2xl font-semibold tracking-tight sm:text-4xl">
                        {"光庭 -HikariNiwa- プロジェクト"}
                    </h1>
                    <div class="mt-5 space-y-4 text-zinc-800 whitespace-pre-line">
                        <p class="text-lg sm:text-xl">
                            {"光庭は、\n訪れる度に、“内側の状態”が整い、\n判断の質が変わり、\n行動が自然と強くなっていく場所。"}
                        </p>
                        <p class="text-lg sm:text-xl">
                            {"努力で前に進むのではなく、\n状態が上がることで、人生が前に進み出す。"}
                        </p>
                        <p class="text-lg sm:text-xl font-medium">{"そんな完全会員制のプライベートスペースです。"}</p>
                    </div>
                    <div class="mt-7 grid gap-3 rounded-2xl border border-zinc-200 bg-zinc-50 px-4 py-4 text-sm text-zinc-700 sm:grid-cols-3 sm:gap-4 sm:px-6">
                        { for facts.iter().map(|(label, value)| html! {
                            <div class="rounded-xl bg-white px-4 py-3">
                                <div class="text-xs font-semibold text-zinc-500">{ *label }</div>
                                <div class="mt-1 font-medium">{ *value }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProgressBandProps {
    progress: Progress,
}

#[function_component(ProgressBand)]
fn progress_band(props: &ProgressBandProps) -> Html {
    let p = &props.progress;
    let remaining_days = p.remaining_days(Utc::now());
    let pct = p.percent();

    html! {
        <section id="progress" class="mt-10 bg-white">
            <div class="mx-auto max-w-6xl px-4">
                <div class="rounded-3xl border border-zinc-200 bg-white p-6 shadow-sm sm:p-8">
                    <div class="flex flex-col gap-4 sm:flex-row sm:items-end sm:justify-between">
                        <div>
                            <h2 class="text-lg font-semibold">{"現在の支援総額"}</h2>
                            <p class="mt-1 text-sm text-zinc-600">
                                {"招待制・少人数のため、数字は“透明性”として提示します（仮データ）。"}
                            </p>
                        </div>
                        <div class="text-xs text-zinc-500">
                            { format!("募集終了：{}（JST）", p.end_at_label()) }
                        </div>
                    </div>

                    <div class="mt-6 grid gap-3 sm:grid-cols-3">
                        <div class="rounded-2xl bg-zinc-50 px-5 py-4">
                            <div class="text-xs font-semibold text-zinc-500">{"現在の支援総額"}</div>
                            <div class="mt-1 text-xl font-semibold text-zinc-900">{ format!("¥{}", yen(p.current)) }</div>
                        </div>
                        <div class="rounded-2xl bg-zinc-50 px-5 py-4">
                            <div class="text-xs font-semibold text-zinc-500">{"支援者数"}</div>
                            <div class="mt-1 text-xl font-semibold text-zinc-900">{ format!("{}人", p.backers) }</div>
                            if let Some(last_24h) = p.backers_last_24h {
                                <div class="mt-1 text-xs text-zinc-500">
                                    { format!("24時間以内に{}人からの支援がありました", last_24h) }
                                </div>
                            }
                        </div>
                        <div class="rounded-2xl bg-zinc-50 px-5 py-4">
                            <div class="text-xs font-semibold text-zinc-500">{"募集終了まで残り"}</div>
                            <div class="mt-1 text-xl font-semibold text-zinc-900">{ format!("{}日", remaining_days) }</div>
                        </div>
                    </div>

                    <div class="mt-6 rounded-2xl border border-zinc-200 bg-white p-5">
                        <div class="flex items-end justify-between gap-4">
                            <div>
                                <div class="text-xs text-zinc-500">{"目標"}</div>
                                <div class="mt-1 text-sm font-semibold text-zinc-900">{ format!("¥{}", yen(p.goal)) }</div>
                            </div>
                            <div class="text-right">
                                <div class="text-xs text-zinc-500">{"残り"}</div>
                                <div class="mt-1 text-sm font-semibold text-zinc-900">
                                    { format!("¥{}", yen(p.remaining_amount())) }
                                </div>
                            </div>
                        </div>
                        <div class="mt-4 h-3 overflow-hidden rounded-full bg-zinc-100">
                            <div
                                class="h-full rounded-full bg-zinc-900 transition-all"
                                style={format!("width: {}%", pct)}
                                aria-label="progress bar"
                            ></div>
                        </div>
                        <div class="mt-3 flex items-center justify-between text-xs text-zinc-500">
                            <span>{"0%"}</span>
                            <span>{"100%"}</span>
                        </div>
                        <div class="mt-3 text-xs text-zinc-500">
                            {"募集終了まで残り "}
                            <span class="font-semibold text-zinc-900">{ format!("{}日", remaining_days) }</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(StoryBand)]
fn story_band() -> Html {
    let reveal = use_reveal_on_view(config::section_reveal());

    html! {
        <section class="mt-10 bg-zinc-50">
            <div class="mx-auto max-w-6xl px-4">
                <div
                    ref={reveal.node_ref.clone()}
                    class={classes!(
                        "rounded-3xl", "border", "border-zinc-200", "bg-white", "p-6", "shadow-sm", "sm:p-8",
                        "transition-all", "duration-700", "ease-out",
                        reveal.motion_classes(),
                    )}
                >
                    <div class="mt-8">
                        <div class="mx-auto max-w-3xl overflow-hidden rounded-3xl border border-zinc-200 bg-white shadow-sm">
                            <div class="bg-gradient-to-b from-zinc-50 to-white px-6 py-7 sm:px-8 sm:py-9">
                                <div class="flex items-center justify-center gap-3">
                                    <div class="h-8 w-1.5 rounded-full bg-zinc-900/80" aria-hidden="true"></div>
                                    <div class="text-xs font-semibold tracking-[0.18em] text-zinc-500">{"INVITE-ONLY"}</div>
                                </div>
                                <div class="mt-5 text-center space-y-2">
                                    <p class="text-lg sm:text-xl font-semibold tracking-tight text-zinc-900">{"一人では、ただの点。"}</p>
                                    <p class="text-lg sm:text-xl font-semibold tracking-tight text-zinc-900">{"あなたがいれば、大きな渦になる。"}</p>
                                    <div class="mx-auto my-4 h-px w-16 bg-zinc-200" aria-hidden="true"></div>
                                    <p class="text-lg sm:text-xl font-medium tracking-tight text-zinc-900">{"これは寄付ではありません。"}</p>
                                    <p class="text-lg sm:text-xl font-medium tracking-tight text-zinc-900">{"「場」を共に創る人を探しています。"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="mt-10">
                        <StoryFold />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(PhilosophyBand)]
fn philosophy_band() -> Html {
    html! {
        <section class="mt-10 bg-zinc-50">
            <div class="mx-auto max-w-6xl px-4">
                <div class="rounded-3xl border border-zinc-200 bg-white p-6 shadow-sm sm:p-8">
                    <div class="flex items-center gap-3">
                        <div class="h-8 w-1.5 rounded-full bg-zinc-900/80"></div>
                        <h2 class="text-base font-semibold tracking-tight text-zinc-900 sm:text-lg">
                            {"どう関わりたいかによって選べる、5つのステップ"}
                        </h2>
                    </div>
                    <div class="mt-4 space-y-4 text-sm sm:text-base leading-relaxed text-zinc-700">
                        <p>{"光庭は、ただ整える場所ではありません。"}</p>
                        <p>
                            {"内側が変わり、判断が変わり、行動が変わる。\
                              その連鎖が起きたとき、人生は静かに、しかし確実に加速します。"}
                        </p>
                        <p>
                            {"だからこの場所では、「どれだけ関わりたいか」を基準に、5つのステップを用意しました。"}
                        </p>
                        <p>
                            {"軽くエネルギーを添える人。"}<br />
                            {"名を刻み、場の始まりに立ち会う人。"}<br />
                            {"共に作り、維持し、守る側に回る人。"}
                        </p>
                        <p>
                            {"STEPが上がるほど、受け取るものが増えるのではなく、\
                              この場に“与える役割”が深くなっていきます。"}
                        </p>
                        <p class="font-medium text-zinc-900">{"あなたは、どこから関わりますか？"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(MessageBand)]
fn message_band() -> Html {
    html! {
        <section class="bg-zinc-50">
            <div class="mx-auto max-w-6xl px-4">
                <div class="rounded-3xl border border-zinc-200 bg-white p-4 shadow-sm sm:p-6">
                    <div class="mx-auto max-w-4xl">
                        <div class="relative overflow-hidden rounded-2xl border border-zinc-200 bg-white">
                            <img
                                src="/images/message.jpg"
                                alt="植草智史 メッセージ"
                                width="2400"
                                height="1350"
                                loading="lazy"
                                class="h-auto w-full object-contain"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const PAGE_STYLES: &str = r#"
    .hn-card-strong {
        box-shadow: 0 0 0 1px rgba(167, 139, 250, 0.22), 0 28px 70px rgba(0, 0, 0, 0.6);
    }
    @media (prefers-reduced-motion: reduce) {
        .hn-ritual-aurora,
        .hn-ritual-sheen,
        .hn-ritual-pulse,
        .hn-ritual-step3,
        .hn-ritual-sigil,
        .transition-all {
            animation: none !important;
            transition: none !important;
        }
    }
    .hn-ritual-step3 {
        box-shadow: 0 0 0 1px rgba(167, 139, 250, 0.22), 0 22px 55px rgba(0, 0, 0, 0.55);
    }
    .hn-kekkai-step4 {
        box-shadow: 0 0 0 1px rgba(129, 140, 248, 0.14), 0 18px 46px rgba(0, 0, 0, 0.55);
    }
    .hn-kekkai-step5 {
        box-shadow: 0 0 0 1px rgba(232, 121, 249, 0.12), 0 18px 46px rgba(0, 0, 0, 0.60);
    }
    .hn-ritual-aurora {
        background:
            radial-gradient(circle at 25% 30%, rgba(167, 139, 250, 0.35), transparent 55%),
            radial-gradient(circle at 70% 65%, rgba(236, 72, 153, 0.18), transparent 60%),
            radial-gradient(circle at 45% 85%, rgba(59, 130, 246, 0.14), transparent 60%);
        filter: blur(34px);
        opacity: 0.55;
        animation: hnAurora 8.5s ease-in-out infinite alternate;
    }
    .hn-ritual-sheen {
        background: linear-gradient(115deg, transparent 0%, rgba(255, 255, 255, 0.06) 35%, transparent 70%);
        filter: blur(10px);
        transform: translateX(-15%) rotate(0.0001deg);
        animation: hnSheen 4.8s ease-in-out infinite;
    }
    .hn-ritual-pulse {
        animation: hnPulse 2.4s ease-in-out infinite;
    }
    .hn-ritual-cta {
        box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.2), 0 18px 40px rgba(167, 139, 250, 0.25);
    }
    .hn-ritual-cta2 {
        box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.22), 0 22px 55px rgba(167, 139, 250, 0.28);
    }
    .hn-ritual-thumb {
        box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.06);
    }
    .hn-ritual-sigil {
        background:
            radial-gradient(circle at 50% 50%, rgba(255, 255, 255, 0.22), transparent 55%),
            radial-gradient(circle at 50% 50%, rgba(167, 139, 250, 0.22), transparent 62%);
        mask-image: radial-gradient(circle at 50% 50%, #000 0%, transparent 70%);
        animation: hnSigil 6.5s ease-in-out infinite alternate;
        filter: blur(0.6px);
        opacity: 0.45;
    }
    @keyframes hnAurora {
        0% { transform: translate3d(-2%, -1%, 0) scale(1); }
        100% { transform: translate3d(2%, 1%, 0) scale(1.03); }
    }
    @keyframes hnSheen {
        0% { opacity: 0.15; transform: translateX(-25%) rotate(2deg); }
        50% { opacity: 0.32; transform: translateX(0%) rotate(2deg); }
        100% { opacity: 0.18; transform: translateX(18%) rotate(2deg); }
    }
    @keyframes hnPulse {
        0%, 100% { transform: translateY(0); opacity: 0.95; }
        50% { transform: translateY(-2px); opacity: 1; }
    }
    @keyframes hnSigil {
        0% { opacity: 0.35; transform: scale(0.98); }
        100% { opacity: 0.65; transform: scale(1.02); }
    }
"#;
