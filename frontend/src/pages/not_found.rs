use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="grid min-h-screen place-items-center bg-zinc-50 px-4 text-zinc-900">
            <div class="rounded-3xl border border-zinc-200 bg-white p-8 text-center shadow-sm">
                <p class="text-xs font-semibold tracking-[0.18em] text-zinc-500">{"404"}</p>
                <h1 class="mt-3 text-xl font-semibold">{"ページが見つかりません"}</h1>
                <div class="mt-6">
                    <Link<Route> to={Route::Home} classes="rounded-full bg-zinc-900 px-4 py-2 text-sm text-white hover:bg-zinc-800">
                        { config::SITE_NAME }
                    </Link<Route>>
                </div>
            </div>
        </main>
    }
}
