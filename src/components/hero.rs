use log::{debug, info, warn};
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

use crate::config;
use crate::content::{self, STATS};
use crate::motion::dom::{self, BindError};
use crate::motion::driver::{self, ScrollBinding};
use crate::motion::pose::Pose;
use crate::motion::scope::MotionScope;
use crate::motion::scroll::{SceneTarget, ScrollScene};
use crate::motion::timeline::{Position, StageSpec};
use crate::theme::Theme;

fn headline_stage() -> StageSpec {
    StageSpec::entering(
        "headline characters",
        Pose::NATURAL.with_y_percent(100.0).with_opacity(0.0),
        config::ENTRANCE_EASE,
        config::ENTRANCE_DURATION_SECS,
    )
    .stagger(0.035)
    .at(Position::At(0.0))
}

fn subtitle_stage() -> StageSpec {
    StageSpec::entering(
        "subtitle",
        Pose::NATURAL.with_y_px(10.0).with_opacity(0.0),
        config::ENTRANCE_EASE,
        config::ENTRANCE_DURATION_SECS,
    )
    .at(Position::AfterEnd(-0.4))
}

fn stats_stage() -> StageSpec {
    StageSpec::entering(
        "stat cards",
        Pose::NATURAL.with_y_px(12.0).with_opacity(0.0),
        config::ENTRANCE_EASE,
        config::ENTRANCE_DURATION_SECS,
    )
    .stagger(0.08)
    .at(Position::AfterEnd(-0.3))
}

fn indicator_stage() -> StageSpec {
    StageSpec::entering(
        "scroll indicator",
        Pose::NATURAL.with_y_px(-8.0).with_opacity(0.0),
        config::ENTRANCE_EASE,
        config::ENTRANCE_DURATION_SECS,
    )
    .at(Position::AfterEnd(-0.4))
}

#[derive(Clone)]
struct HeroRefs {
    spacer: NodeRef,
    section: NodeRef,
    headline: NodeRef,
    stats: NodeRef,
    car: NodeRef,
    back_layer: NodeRef,
    mid_layer: NodeRef,
    indicator: NodeRef,
}

/// Resolves one target group, logging and returning `None` when it is absent.
fn resolve<T>(stage: &str, found: Result<T, BindError>) -> Option<T> {
    match found {
        Ok(found) => Some(found),
        Err(e) => {
            warn!("Skipping {} animation: {}", stage, e);
            None
        }
    }
}

fn bind_entrance(window: &Window, scope: &mut MotionScope, refs: &HeroRefs) {
    let mut groups: Vec<(StageSpec, Vec<HtmlElement>)> = Vec::new();

    let chars = dom::node(&refs.headline, "headline").and_then(|headline| dom::query_all(&headline, ".headline-char"));
    if let Some(chars) = resolve("headline characters", chars) {
        groups.push((headline_stage(), chars));
    }

    let subtitles = dom::node(&refs.section, "hero section").and_then(|section| dom::query_all(&section, ".hero-subtitle"));
    if let Some(subtitles) = resolve("subtitle", subtitles) {
        groups.push((subtitle_stage(), subtitles));
    }

    let cards = dom::node(&refs.stats, "stats").and_then(|stats| dom::query_all(&stats, ".stat-item"));
    if let Some(cards) = resolve("stat cards", cards) {
        groups.push((stats_stage(), cards));
    }

    if let Some(indicator) = resolve("scroll indicator", dom::node(&refs.indicator, "scroll indicator")) {
        groups.push((indicator_stage(), vec![indicator]));
    }

    driver::play_entrance(window, scope, groups);
}

fn bind_scroll_scene(window: &Window, scope: &mut MotionScope, refs: &HeroRefs) -> Result<(), BindError> {
    let trigger = dom::node(&refs.spacer, "pin spacer")?;
    let targets: Vec<(SceneTarget, HtmlElement)> = [
        (SceneTarget::Car, &refs.car),
        (SceneTarget::BackLayer, &refs.back_layer),
        (SceneTarget::MidLayer, &refs.mid_layer),
        (SceneTarget::Headline, &refs.headline),
        (SceneTarget::Stats, &refs.stats),
    ]
    .into_iter()
    .filter_map(|(target, node_ref)| {
        resolve(target.name(), dom::node(node_ref, target.name())).map(|element| (target, element))
    })
    .collect();

    driver::bind_scroll(
        window,
        scope,
        ScrollBinding {
            trigger,
            targets,
            scene: ScrollScene::hero(config::SCROLL_EASE),
            length_viewports: config::PIN_LENGTH_VIEWPORTS,
            scrub_lag_secs: config::SCRUB_LAG_SECS,
            resize_debounce_ms: config::RESIZE_DEBOUNCE_MS,
        },
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let theme = use_state(Theme::default);

    let refs = HeroRefs {
        spacer: use_node_ref(),
        section: use_node_ref(),
        headline: use_node_ref(),
        stats: use_node_ref(),
        car: use_node_ref(),
        back_layer: use_node_ref(),
        mid_layer: use_node_ref(),
        indicator: use_node_ref(),
    };

    // Bind once per mount; everything acquired here is released by the scope.
    {
        let refs = refs.clone();
        use_effect_with_deps(
            move |_| {
                let mut scope = MotionScope::new("hero");
                match dom::window() {
                    Ok(window) => {
                        bind_entrance(&window, &mut scope, &refs);
                        if let Err(e) = bind_scroll_scene(&window, &mut scope, &refs) {
                            warn!("Skipping hero scroll scene: {}", e);
                        }
                        info!("Hero motion bound with {} resources", scope.active());
                    }
                    Err(e) => warn!("Hero motion not bound: {}", e),
                }
                move || drop(scope)
            },
            (),
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            debug!("Theme {:?} -> {:?}", *theme, next);
            theme.set(next);
        })
    };

    let palette = theme.palette();
    let hidden_char = headline_stage().tween.from.inline_style();

    html! {
        <div ref={refs.spacer.clone()} class="relative w-full" style={config::pin_spacer_style()}>
            <section
                ref={refs.section.clone()}
                class={classes!("pin-sticky", "h-screen", "w-full", "overflow-hidden", palette.section)}
            >
                // Parallax background layers
                <div ref={refs.back_layer.clone()} class="motion-target pointer-events-none absolute inset-0 opacity-40">
                    <div class={classes!("absolute", "-left-40", "-top-40", "h-80", "w-80", "rounded-full", "blur-3xl", palette.glow_left)} />
                    <div class={classes!("absolute", "right-0", "bottom-[-6rem]", "h-96", "w-96", "rounded-full", "blur-3xl", palette.glow_right)} />
                </div>

                <div ref={refs.mid_layer.clone()} class="motion-target pointer-events-none absolute inset-0">
                    <div class={classes!("absolute", "inset-y-0", "left-1/2", "w-[1px]", "opacity-40", palette.rule_vertical)} />
                    <div class={classes!("absolute", "inset-x-10", "top-1/3", "h-px", "opacity-40", palette.rule_horizontal)} />
                </div>

                <div class="relative z-10 flex h-full flex-col">
                    <header class="flex items-center justify-between px-6 pt-6 md:px-10 md:pt-8">
                        <div class="flex items-center gap-3">
                            <div class={classes!("h-9", "w-9", "rounded-2xl", "border", "text-xs", "font-semibold", "uppercase", "tracking-[0.18em]", "flex", "items-center", "justify-center", palette.logo_badge)}>
                                {"IF"}
                            </div>
                            <div class="flex flex-col">
                                <span class="text-xs font-semibold tracking-[0.32em] uppercase">{"ItzFizz"}</span>
                                <span class={classes!("text-[10px]", "tracking-[0.2em]", "uppercase", palette.muted)}>
                                    {"Digital Experiences"}
                                </span>
                            </div>
                        </div>

                        <button
                            type="button"
                            onclick={toggle_theme}
                            class={classes!("relative", "flex", "items-center", "gap-2", "rounded-full", "border", "px-3", "py-1.5", "text-[11px]", "font-medium", "tracking-[0.16em]", "uppercase", "transition-colors", palette.toggle)}
                        >
                            <span class={classes!("inline-flex", "h-4", "w-4", "items-center", "justify-center", "rounded-full", "text-[10px]", palette.toggle_icon)}>
                                {theme.icon()}
                            </span>
                            <span>{theme.label()}</span>
                        </button>
                    </header>

                    <div class="relative flex flex-1 flex-col px-6 pb-10 pt-8 md:flex-row md:items-center md:justify-between md:px-10 md:pb-14 md:pt-10">
                        <div class="relative z-10 max-w-xl">
                            <div
                                ref={refs.headline.clone()}
                                class="motion-target mb-4 flex flex-wrap text-[10px] md:text-[12px] tracking-[0.5em] uppercase text-slate-400"
                                aria-label={content::headline_label()}
                            >
                                { for content::headline_chars().into_iter().map(|(index, ch)| html! {
                                    <span
                                        key={index}
                                        class={classes!("headline-char", "inline-block", (ch == ' ').then(|| "w-[0.6em]"))}
                                        style={hidden_char.clone()}
                                    >
                                        {ch.to_string()}
                                    </span>
                                }) }
                            </div>

                            <h1 class="hero-subtitle text-3xl leading-tight md:text-5xl md:leading-tight lg:text-6xl lg:leading-tight font-semibold tracking-tight mb-4 md:mb-6">
                                {"Scroll to drive"}
                                <br />
                                {"the "}<span class="text-brand">{"ItzFizz"}</span>{" experience."}
                            </h1>

                            <p class={classes!("hero-subtitle", "mb-8", "max-w-md", "text-sm", "md:text-base", palette.subtitle)}>
                                {"Precision-crafted hero motion on a scrubbed scroll timeline, tuned for 60fps and built to feel effortlessly premium."}
                            </p>

                            <div ref={refs.stats.clone()} class="motion-target grid grid-cols-2 gap-4 md:gap-6 max-w-md">
                                { for STATS.iter().map(|item| html! {
                                    <div
                                        key={item.label}
                                        class={classes!("stat-item", "rounded-2xl", "border", "px-4", "py-3", "md:px-5", "md:py-4", "transition-colors", palette.stat_card)}
                                    >
                                        <p class="text-xs uppercase tracking-[0.2em] text-slate-500 mb-1.5">{item.label}</p>
                                        <p class="text-lg md:text-2xl font-semibold">{item.value}</p>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="pointer-events-none relative mt-10 flex flex-1 items-center justify-center md:mt-0">
                            <div ref={refs.car.clone()} class="motion-target relative w-[240px] md:w-[320px] lg:w-[360px] aspect-[4/2.3]">
                                <div class={classes!("absolute", "inset-4", "rounded-[32px]", palette.car_panel, "shadow-soft-glow")} />
                                <div class={classes!("absolute", "-inset-x-4", "-bottom-8", "h-16", "rounded-full", "blur-2xl", palette.car_glow)} />

                                <div class="absolute inset-0 flex items-center justify-center">
                                    <img
                                        src={config::CAR_IMAGE_PATH}
                                        alt="ItzFizz performance car"
                                        width={config::CAR_IMAGE_WIDTH.to_string()}
                                        height={config::CAR_IMAGE_HEIGHT.to_string()}
                                        class="drop-shadow-[0_24px_60px_rgba(0,0,0,0.75)] object-contain"
                                    />
                                </div>

                                <div class="absolute left-5 top-5 rounded-full border border-white/20 bg-black/40 px-3 py-1 text-[10px] uppercase tracking-[0.18em] text-slate-200 backdrop-blur">
                                    {"Live Scroll Sync"}
                                </div>
                                <div class="absolute right-4 bottom-4 flex flex-col items-end gap-1 text-[10px] tracking-[0.16em] uppercase text-slate-400">
                                    <span>{"Scrubbed Timeline"}</span>
                                    <span class="text-emerald-400">{"Pinned Hero · 60fps"}</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="pointer-events-none absolute inset-x-0 bottom-6 flex justify-center">
                        <div
                            ref={refs.indicator.clone()}
                            class={classes!("flex", "flex-col", "items-center", "gap-2", "text-[10px]", "uppercase", "tracking-[0.3em]", palette.indicator_text)}
                        >
                            <span>{"Scroll"}</span>
                            <div class={classes!("flex", "h-10", "w-[1px]", "flex-col", "items-center", "justify-end", "rounded-full", palette.indicator_track)}>
                                <div class={classes!("scroll-indicator-dot", "h-2", "w-2", "rounded-full", palette.indicator_dot)} />
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timeline::Sequence;

    fn layout(headline_chars: usize) -> Sequence {
        let mut seq = Sequence::new();
        seq.place(headline_stage(), headline_chars);
        seq.place(subtitle_stage(), 2);
        seq.place(stats_stage(), STATS.len());
        seq.place(indicator_stage(), 1);
        seq
    }

    #[test]
    fn test_entrance_layout() {
        let chars = content::HEADLINE.chars().count();
        let seq = layout(chars);
        let headline_end = (chars - 1) as f64 * 0.035 + 0.8;
        let stages = seq.stages();
        assert_eq!(stages.len(), 4);
        assert!((stages[0].end() - headline_end).abs() < 1e-9);
        assert!((stages[1].start - (headline_end - 0.4)).abs() < 1e-9);
        assert!((stages[2].start - (stages[1].end() - 0.3)).abs() < 1e-9);
        assert!((stages[3].start - (stages[2].end() - 0.4)).abs() < 1e-9);
        assert!((seq.end() - stages[3].end()).abs() < 1e-9);
    }

    #[test]
    fn test_missing_headline_shifts_rest_forward() {
        let seq = layout(0);
        let stages = seq.stages();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].spec.name, "subtitle");
        assert_eq!(stages[0].start, 0.0);
    }

    #[test]
    fn test_characters_start_hidden() {
        let seq = layout(content::HEADLINE.chars().count());
        let chars = &seq.stages()[0];
        let first = chars.pose_at(0, 0.0);
        assert_eq!(first.opacity, 0.0);
        assert_eq!(first.y_percent, 100.0);
        assert_eq!(chars.pose_at(5, seq.end()), Pose::NATURAL);
        assert!(headline_stage().tween.from.inline_style().contains("opacity: 0.0000"));
    }
}
