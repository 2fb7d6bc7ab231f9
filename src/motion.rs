//! Static motion parameters. Everything here is cosmetic timing data that the
//! components turn into CSS; none of it feeds back into page state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Critically damped spring (stiffness 100, damping 20): fast start, no
    /// overshoot.
    Spring,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Spring => "cubic-bezier(0.22, 1, 0.36, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Times(u32),
    Infinite,
}

impl Repeat {
    pub fn css(self) -> String {
        match self {
            Repeat::Once => "1".to_string(),
            Repeat::Times(n) => n.to_string(),
            Repeat::Infinite => "infinite".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Play every other iteration backwards.
    pub alternate: bool,
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
            repeat: Repeat::Once,
            alternate: false,
        }
    }

    pub const fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub const fn alternate(mut self) -> Self {
        self.alternate = true;
        self
    }

    /// Delay for the `index`-th item of a list that enters one after another.
    pub fn stagger(self, index: usize, step_ms: u32) -> Self {
        let extra = step_ms.saturating_mul(index as u32);
        self.delay(self.delay_ms.saturating_add(extra))
    }

    /// Value for the CSS `transition` property covering `properties`.
    pub fn transition_css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|property| {
                format!(
                    "{} {}ms {} {}ms",
                    property,
                    self.duration_ms,
                    self.easing.css(),
                    self.delay_ms
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Value for the CSS `animation` property running `keyframes` as an
    /// entrance. The first frame applies during the delay; the last one is
    /// not held.
    pub fn animation_css(&self, keyframes: &str) -> String {
        self.animation_with_fill(keyframes, "backwards")
    }

    /// Like [`Transition::animation_css`] but holds the last frame, for
    /// elements that are about to be removed.
    pub fn exit_animation_css(&self, keyframes: &str) -> String {
        self.animation_with_fill(keyframes, "forwards")
    }

    fn animation_with_fill(&self, keyframes: &str, fill: &str) -> String {
        let direction = if self.alternate { "alternate" } else { "normal" };
        format!(
            "{} {}ms {} {}ms {} {} {}",
            keyframes,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms,
            self.repeat.css(),
            direction,
            fill
        )
    }
}

pub const NAVBAR_SLIDE: Transition = Transition::new(600).easing(Easing::Spring);
pub const MENU_ICON: Transition = Transition::new(200);
pub const DRAWER: Transition = Transition::new(300).easing(Easing::EaseInOut);
pub const DRAWER_CONTENT: Transition = Transition::new(300).delay(100);
pub const LINK_ENTER: Transition = Transition::new(300);
pub const LINK_STAGGER_MS: u32 = 100;
pub const HOVER: Transition = Transition::new(200);
pub const LOGO_SPIN: Transition = Transition::new(500);
pub const HERO_PULSE: Transition = Transition::new(2000)
    .easing(Easing::EaseInOut)
    .repeat(Repeat::Infinite)
    .alternate();
pub const HERO_SUBTITLE: Transition = Transition::new(300).delay(500);
pub const HERO_BUTTON: Transition = Transition::new(400);
pub const HERO_BUTTON_STAGGER_MS: u32 = 200;
pub const FLOAT: Transition = Transition::new(4000)
    .easing(Easing::EaseInOut)
    .repeat(Repeat::Infinite);
pub const FLOAT_STAGGER_MS: u32 = 500;
pub const REVEAL: Transition = Transition::new(600);
pub const FEATURE_STAGGER_MS: u32 = 100;

/// Clamped linear map from `input` onto `output`.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 || value.is_nan() {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + t * (output.1 - output.0)
}

/// Fraction of the page scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range.is_nan() || range <= 0.0 || scroll_y.is_nan() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}
