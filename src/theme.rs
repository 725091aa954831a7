/// Colour mode of the hero. Lives only in view state; reloading starts dark again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☾",
            Theme::Light => "☼",
        }
    }

    /// Picks between the dark and light variant of a class list.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    pub fn palette(self) -> Palette {
        Palette {
            section: self.pick(
                "bg-black text-white",
                "bg-gradient-to-b from-slate-50 via-white to-slate-100 text-slate-900",
            ),
            glow_left: self.pick("bg-emerald-500/40", "bg-emerald-300/60"),
            glow_right: self.pick("bg-cyan-500/40", "bg-cyan-300/70"),
            rule_vertical: self.pick("bg-slate-700", "bg-slate-200"),
            rule_horizontal: self.pick("bg-slate-800", "bg-slate-200"),
            logo_badge: self.pick(
                "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
                "border-emerald-400/70 bg-emerald-50 text-emerald-700",
            ),
            muted: self.pick("text-slate-500", "text-slate-400"),
            toggle: self.pick(
                "border-slate-800 bg-slate-900/90 text-slate-300 hover:border-slate-600",
                "border-slate-200 bg-white text-slate-700 hover:border-slate-400",
            ),
            toggle_icon: self.pick("bg-yellow-400 text-black", "bg-slate-900 text-yellow-300"),
            subtitle: self.pick("text-slate-400", "text-slate-500"),
            stat_card: self.pick("border-slate-800/90 bg-slate-900/60", "border-slate-200 bg-white/80"),
            car_panel: self.pick(
                "bg-gradient-to-br from-slate-900/90 via-slate-900/80 to-slate-900/40",
                "bg-gradient-to-br from-white via-slate-50 to-slate-100",
            ),
            car_glow: self.pick("bg-emerald-500/30", "bg-emerald-300/50"),
            indicator_text: "text-slate-500",
            indicator_track: self.pick("bg-slate-700", "bg-slate-300"),
            indicator_dot: self.pick("bg-emerald-400", "bg-emerald-500"),
        }
    }
}

/// Theme-dependent utility classes for each part of the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub section: &'static str,
    pub glow_left: &'static str,
    pub glow_right: &'static str,
    pub rule_vertical: &'static str,
    pub rule_horizontal: &'static str,
    pub logo_badge: &'static str,
    pub muted: &'static str,
    pub toggle: &'static str,
    pub toggle_icon: &'static str,
    pub subtitle: &'static str,
    pub stat_card: &'static str,
    pub car_panel: &'static str,
    pub car_glow: &'static str,
    pub indicator_text: &'static str,
    pub indicator_track: &'static str,
    pub indicator_dot: &'static str,
}
