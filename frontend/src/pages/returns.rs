use yew::prelude::*;

use crate::campaign::{yen, Grant, ReturnItem, ReturnTone, STEP3_CHECKOUT_URL};

fn tone_shell(tone: ReturnTone) -> &'static str {
    match tone {
        ReturnTone::Mid => "bg-gradient-to-b from-white to-zinc-50 border-zinc-200 text-zinc-900",
        ReturnTone::Deep => "bg-gradient-to-b from-zinc-50 to-zinc-100 border-zinc-200 text-zinc-900",
        ReturnTone::Kekkai => "bg-gradient-to-br from-zinc-950 via-violet-950/18 to-zinc-950 border-white/12 text-white",
        ReturnTone::Light => "bg-white border-zinc-200 text-zinc-900",
    }
}

// Used when a tier has no thumbnail image.
fn tone_thumb(tone: ReturnTone) -> &'static str {
    match tone {
        ReturnTone::Mid => "bg-[radial-gradient(120px_circle_at_30%_20%,rgba(244,244,245,1)_0%,rgba(228,228,231,0.75)_40%,rgba(255,255,255,0)_70%),radial-gradient(200px_circle_at_70%_80%,rgba(161,161,170,0.35)_0%,rgba(255,255,255,0)_60%)]",
        ReturnTone::Deep => "bg-[radial-gradient(140px_circle_at_30%_20%,rgba(228,228,231,0.9)_0%,rgba(212,212,216,0.55)_45%,rgba(255,255,255,0)_75%),radial-gradient(260px_circle_at_75%_75%,rgba(113,113,122,0.25)_0%,rgba(255,255,255,0)_65%)]",
        ReturnTone::Kekkai => "bg-[radial-gradient(140px_circle_at_30%_25%,rgba(167,139,250,0.35)_0%,rgba(124,58,237,0.14)_45%,rgba(0,0,0,0)_72%),radial-gradient(260px_circle_at_80%_80%,rgba(255,255,255,0.10)_0%,rgba(0,0,0,0)_60%)]",
        ReturnTone::Light => "bg-[radial-gradient(140px_circle_at_30%_25%,rgba(250,250,250,1)_0%,rgba(228,228,231,0.65)_45%,rgba(255,255,255,0)_75%),radial-gradient(260px_circle_at_78%_78%,rgba(161,161,170,0.25)_0%,rgba(255,255,255,0)_65%)]",
    }
}

fn step_accent(step: &str) -> Option<(&'static str, &'static str)> {
    match step {
        "STEP 3" => Some(("hn-ritual-step3", "bg-violet-300/70")),
        "STEP 4" => Some(("hn-kekkai-step4", "bg-indigo-300/70")),
        "STEP 5" => Some(("hn-kekkai-step5", "bg-fuchsia-300/70")),
        _ => None,
    }
}

/// Attributes for an outbound checkout link. Tiers without a URL render a
/// dead link instead of navigating anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLink {
    pub href: &'static str,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
    pub disabled: bool,
}

impl CheckoutLink {
    pub fn new(url: Option<&'static str>) -> Self {
        match url {
            Some(url) if !url.is_empty() => Self {
                href: url,
                target: Some("_blank"),
                rel: Some("noopener noreferrer"),
                disabled: false,
            },
            _ => Self {
                href: "#",
                target: None,
                rel: None,
                disabled: true,
            },
        }
    }
}

fn checkout_classes(is_k: bool, passage_rite: bool, disabled: bool) -> Classes {
    classes!(
        "inline-flex", "items-center", "gap-2", "whitespace-nowrap", "rounded-xl", "px-4", "py-2.5", "text-sm", "font-medium", "transition",
        "focus:outline-none", "focus-visible:ring-2", "focus-visible:ring-violet-300/60",
        if is_k {
            "hn-ritual-btn bg-white text-zinc-950 hover:bg-zinc-100"
        } else {
            "bg-zinc-900 text-white hover:bg-zinc-800"
        },
        passage_rite.then(|| "hn-ritual-cta"),
        disabled.then(|| "pointer-events-none opacity-50"),
    )
}

#[derive(Properties, PartialEq)]
struct GrantListProps {
    tone: ReturnTone,
    grants: Vec<Grant>,
}

#[function_component(GrantList)]
fn grant_list(props: &GrantListProps) -> Html {
    let is_k = props.tone == ReturnTone::Kekkai;
    html! {
        <div class="mt-5 grid gap-3 sm:grid-cols-2">
            { for props.grants.iter().enumerate().map(|(i, g)| html! {
                <div
                    key={format!("{}-{}", g.name, i)}
                    class={classes!(
                        "rounded-2xl", "border", "p-4",
                        if is_k { "border-white/15 bg-white/5" } else { "border-zinc-200 bg-white" },
                    )}
                >
                    <div class="flex items-start gap-3">
                        <div
                            class={classes!(
                                "mt-0.5", "grid", "h-7", "w-10", "place-items-center", "rounded-xl", "text-[11px]", "font-semibold", "tracking-[0.14em]",
                                if is_k { "bg-white/10 text-zinc-100" } else { "bg-zinc-100 text-zinc-700" },
                            )}
                            aria-hidden="true"
                        >
                            { format!("{:02}", i + 1) }
                        </div>
                        <div>
                            <div class={classes!("text-sm", "font-semibold", if is_k { "text-white" } else { "text-zinc-900" })}>
                                { g.name }
                            </div>
                            <div class={classes!("mt-1", "text-sm", "leading-relaxed", if is_k { "text-zinc-200" } else { "text-zinc-700" })}>
                                { g.desc }
                            </div>
                        </div>
                    </div>
                </div>
            }) }
        </div>
    }
}

const RITE_HEADING: &str = "結界庭守への通過儀";
const RITE_CTA: &str = "結界側へ入る";

/// The rite button always leads somewhere: the tier's own checkout, or the
/// STEP 3 one when the tier has none.
fn rite_checkout(item: &ReturnItem) -> CheckoutLink {
    let url = item
        .checkout_url
        .filter(|url| !url.is_empty())
        .unwrap_or(STEP3_CHECKOUT_URL);
    CheckoutLink::new(Some(url))
}

fn passage_rite(item: &ReturnItem) -> Html {
    let link = rite_checkout(item);
    let passages = [
        ("通過 01", "鍵石を受領"),
        ("通過 02", "IC / 言霊を内在化"),
        ("通過 03", "月次調律で維持側へ"),
    ];
    html! {
        <div class="mt-6 rounded-2xl border border-white/15 bg-white/5 p-5">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <div class="text-xs font-semibold tracking-[0.18em] text-zinc-200">{"PASSAGE RITE"}</div>
                    <div class="mt-2 text-base font-semibold text-white">{ item.inner_cta_heading.unwrap_or(RITE_HEADING) }</div>
                    <p class="mt-2 text-sm leading-relaxed text-zinc-200">
                        {"「鍵石」を受け取り、整え、毎月の調律で“場を倒さない側”へ移ります。"}
                    </p>
                </div>
                <div class="hidden sm:block text-right">
                    <div class="hn-ritual-pulse inline-flex items-center gap-2 rounded-full border border-white/15 bg-white/10 px-3 py-1 text-[11px] font-semibold text-zinc-100">
                        <span class="inline-block h-2 w-2 rounded-full bg-violet-300/80"></span>
                        {"RITUAL ACTIVE"}
                    </div>
                </div>
            </div>
            <div class="mt-4 grid gap-3 sm:grid-cols-3">
                { for passages.iter().map(|(t, d)| html! {
                    <div key={*t} class="rounded-2xl border border-white/15 bg-white/5 px-4 py-3">
                        <div class="text-[11px] font-semibold tracking-[0.14em] text-zinc-200">{ *t }</div>
                        <div class="mt-1 text-sm font-semibold text-white">{ *d }</div>
                    </div>
                }) }
            </div>
            <div class="mt-5 flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
                <div class="text-xs text-zinc-300">{"※ ここから先は「利用」ではなく「維持」の領域です"}</div>
                <a
                    href={link.href}
                    target={link.target}
                    rel={link.rel}
                    class="hn-ritual-btn hn-ritual-cta2 inline-flex items-center gap-2 rounded-xl bg-white px-4 py-2.5 text-sm font-medium text-zinc-950 hover:bg-zinc-100"
                >
                    { item.inner_cta.unwrap_or(RITE_CTA) }
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReturnCardProps {
    pub item: ReturnItem,
}

#[function_component(ReturnCard)]
pub fn return_card(props: &ReturnCardProps) -> Html {
    let r = &props.item;
    let is_k = r.is_kekkai();
    let accent = step_accent(r.step);
    let link = CheckoutLink::new(r.checkout_url);

    html! {
        <article
            class={classes!(
                "relative", "overflow-hidden", "rounded-3xl", "border", "p-6", "sm:p-8",
                tone_shell(r.tone),
                if r.premium { "hn-violet-ring hn-card-strong" } else { "shadow-sm" },
                accent.map(|(card, _)| card),
            )}
        >
            if is_k {
                <div class="pointer-events-none absolute inset-0 opacity-80">
                    <div class="hn-violet-glow absolute inset-0"></div>
                    <div class="absolute inset-0 bg-gradient-to-br from-white/6 via-transparent to-transparent"></div>
                </div>
            }
            if let (true, Some((_, rail))) = (is_k, accent) {
                <div
                    class={classes!("pointer-events-none", "absolute", "left-0", "top-8", "h-16", "w-1.5", "rounded-r", rail)}
                    aria-hidden="true"
                ></div>
            }
            if r.passage_rite {
                <div class="pointer-events-none absolute inset-0">
                    <div class="hn-ritual-aurora absolute -inset-24 opacity-60"></div>
                    <div class="hn-ritual-sheen absolute -inset-10 opacity-50"></div>
                    <div class="absolute inset-0 bg-gradient-to-t from-black/35 via-transparent to-transparent"></div>
                </div>
            }

            <div class="relative">
                <div class="flex flex-col gap-4 sm:flex-row sm:items-start sm:justify-between">
                    <div class="flex items-start gap-4">
                        <div
                            class={classes!(
                                "relative", "overflow-hidden", "rounded-2xl", "border", "h-20", "w-28", "sm:h-24", "sm:w-36",
                                if is_k { "border-white/15" } else { "border-zinc-200" },
                                if r.thumb_src.is_some() { "bg-zinc-900/5" } else { tone_thumb(r.tone) },
                                r.passage_rite.then(|| "hn-ritual-thumb"),
                            )}
                            aria-hidden="true"
                        >
                            if let Some(src) = r.thumb_src {
                                <img src={src} alt={r.thumb_alt} loading="lazy" class="absolute inset-0 h-full w-full object-cover" />
                            }
                            <div class={classes!(
                                "absolute", "inset-0",
                                if is_k {
                                    "bg-gradient-to-t from-black/45 via-black/10 to-transparent"
                                } else {
                                    "bg-gradient-to-t from-black/20 via-black/0 to-transparent"
                                },
                            )}></div>
                            if r.passage_rite {
                                <div class="pointer-events-none absolute inset-0">
                                    <div class="hn-ritual-sigil absolute inset-0 opacity-60"></div>
                                </div>
                            }
                        </div>
                        <div>
                            <div class={if is_k { "text-zinc-200" } else { "text-zinc-600" }}>
                                <div class="text-xs font-semibold tracking-[0.18em]">{ r.step }</div>
                            </div>
                            <div class={if is_k { "text-white" } else { "text-zinc-900" }}>
                                <div class="mt-1 text-2xl font-semibold">{ format!("¥{}", yen(r.price)) }</div>
                            </div>
                            <div class={if is_k { "text-zinc-300" } else { "text-zinc-600" }}>
                                <div class="mt-1 text-sm">{ r.role }</div>
                            </div>
                        </div>
                    </div>

                    <div class="flex items-end justify-between gap-3 sm:flex-col sm:items-end">
                        if r.kekkai_badge {
                            <div class="rounded-full border border-white/15 bg-white/5 px-3 py-1 text-[11px] font-semibold tracking-[0.14em] text-zinc-200 backdrop-blur">
                                <span class="mr-2 inline-flex h-5 w-5 items-center justify-center rounded-full border border-white/20 bg-white/5 text-[12px] leading-none">
                                    {"結"}
                                </span>
                                {"KEKKAI"}
                            </div>
                        }
                        <a
                            href={link.href}
                            target={link.target}
                            rel={link.rel}
                            aria-disabled={link.disabled.to_string()}
                            class={checkout_classes(is_k, r.passage_rite, link.disabled)}
                        >
                            <span aria-hidden="true" class="shrink-0 text-[12px] leading-none opacity-90">{"▶"}</span>
                            <span class="leading-none">{ r.cta_label }</span>
                        </a>
                    </div>
                </div>

                <h3 class={classes!("mt-5", "text-lg", "font-semibold", if is_k { "text-white" } else { "text-zinc-900" })}>
                    { r.title }
                </h3>
                if let Some(subtitle) = r.subtitle {
                    <p class={classes!("mt-2", "text-sm", "leading-relaxed", if is_k { "text-zinc-200" } else { "text-zinc-700" })}>
                        { subtitle }
                    </p>
                }

                <GrantList tone={r.tone} grants={r.grants.clone()} />

                if r.passage_rite {
                    { passage_rite(r) }
                }
                if let Some(note) = r.note {
                    <p class={classes!("mt-4", "text-xs", "leading-relaxed", if is_k { "text-zinc-300" } else { "text-zinc-600" })}>
                        { note }
                    </p>
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReturnsBandProps {
    pub items: Vec<ReturnItem>,
}

#[function_component(ReturnsBand)]
pub fn returns_band(props: &ReturnsBandProps) -> Html {
    html! {
        <section id="returns" class="mt-10 bg-white">
            <div class="mx-auto max-w-6xl px-4 pb-16">
                <div class="rounded-3xl border border-zinc-200 bg-white p-6 shadow-sm sm:p-8">
                    <div class="mt-10">
                        <div class="relative overflow-hidden rounded-3xl border border-zinc-200 bg-white p-6 shadow-sm sm:p-8">
                            <div class="absolute left-0 top-6 h-16 w-1.5 rounded-r bg-violet-600"></div>
                            <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between pl-4">
                                <div class="space-y-2">
                                    <h2 class="text-2xl font-semibold tracking-tight text-zinc-900 sm:text-3xl">
                                        {"リターン一覧"}
                                        <span class="ml-2 text-base font-medium text-zinc-600">{"（関係性の深さ順）"}</span>
                                    </h2>
                                    <p class="text-base leading-relaxed text-zinc-700">
                                        {"STEPが進むほど、受け取るものが増えるのではありません。"}
                                        <br />
                                        <span class="font-medium text-zinc-900">{"この場に与える役割"}</span>
                                        {"が、静かに深くなっていきます。"}
                                    </p>
                                    <p class="text-base font-medium tracking-tight text-zinc-900">
                                        {"あなたは、どこから関わりますか？"}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="mt-7 grid gap-5">
                        { for props.items.iter().map(|item| html! {
                            <ReturnCard key={item.step} item={item.clone()} />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
