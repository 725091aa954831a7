use yew::prelude::*;

/// Static section after the hero so the pin visibly releases into normal scrolling.
#[function_component(BeyondTheFold)]
pub fn beyond_the_fold() -> Html {
    html! {
        <section class="h-[120vh] bg-gradient-to-b from-black via-slate-950 to-slate-900 flex items-center justify-center">
            <div class="max-w-xl text-center px-4">
                <p class="text-sm uppercase tracking-[0.3em] text-slate-400 mb-3">
                    {"B E Y O N D  T H E  F O L D"}
                </p>
                <h2 class="text-3xl md:text-4xl font-semibold mb-4 text-white">
                    {"Built for performance, crafted for experiences."}
                </h2>
                <p class="text-slate-400 text-sm md:text-base">
                    {"This spacer section simply demonstrates that the hero pins and then releases naturally as you scroll through the page."}
                </p>
            </div>
        </section>
    }
}
