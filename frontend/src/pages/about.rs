use std::rc::Rc;

use bbcars_common::i18n::translations;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::page_banner::PageBanner;
use crate::LangProps;

const TICK_MS: u32 = 16;
const COUNT_DURATION_MS: u32 = 2000;

/// Counter that climbs to `end` in equal steps, then holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    value: f64,
    end: u32,
}

impl CountUp {
    fn new(end: u32) -> Self {
        Self { value: 0.0, end }
    }

    fn shown(&self) -> u32 {
        self.value as u32
    }
}

impl Reducible for CountUp {
    type Action = ();

    fn reduce(self: Rc<Self>, _tick: ()) -> Rc<Self> {
        let end = f64::from(self.end);
        if self.value >= end {
            return self;
        }
        let step = end / f64::from(COUNT_DURATION_MS / TICK_MS);
        Rc::new(Self { value: (self.value + step).min(end), end: self.end })
    }
}

#[derive(Properties, PartialEq)]
struct StatProps {
    end: u32,
    suffix: AttrValue,
    label: AttrValue,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    let count = use_reducer_eq(|| CountUp::new(props.end));
    {
        let dispatcher = count.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(TICK_MS, move || dispatcher.dispatch(()));
                move || drop(interval)
            },
            (),
        );
    }
    html! {
        <div class="about-stat">
            <p class="about-stat-value">{count.shown()}{props.suffix.clone()}</p>
            <p class="spec-label">{props.label.clone()}</p>
        </div>
    }
}

#[function_component(About)]
pub fn about(props: &LangProps) -> Html {
    let t = translations(props.lang);

    let style = r#"
        .about-body { max-width: 64rem; margin: 0 auto; padding: 6rem 2rem; }
        .about-body p { font-size: 1.25rem; font-weight: 300; line-height: 1.8; color: rgba(255, 255, 255, 0.6); }
        .about-body p + p { margin-top: 2rem; }
        .about-body p:first-child { font-size: 1.75rem; color: rgba(255, 255, 255, 0.85); }
        .about-stats {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2px;
            background: rgba(255, 255, 255, 0.05);
            border-top: 1px solid rgba(255, 255, 255, 0.05);
        }
        .about-stat { background: #050505; padding: 5rem 2rem; text-align: center; }
        .about-stat-value { font-family: 'Playfair Display', serif; font-size: 4.5rem; font-weight: 700; color: #dbad1e; font-variant-numeric: tabular-nums; }
        @media (max-width: 768px) {
            .about-stats { grid-template-columns: 1fr; }
            .about-stat-value { font-size: 3rem; }
        }
    "#;

    html! {
        <div class="about fade-in">
            <style>{style}</style>
            <PageBanner title={t.about_title} image={AttrValue::Static("/showroom.png")} />
            <section class="about-body">
                { for t.about_paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
            </section>
            <section class="about-stats">
                { for t.about_stats.iter().map(|(end, suffix, label)| html! {
                    <Stat key={*label} end={*end} suffix={*suffix} label={*label} />
                }) }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut state: Rc<CountUp>, ticks: usize) -> Rc<CountUp> {
        for _ in 0..ticks {
            state = state.reduce(());
        }
        state
    }

    #[test]
    fn climbs_then_holds_at_end() {
        let start = Rc::new(CountUp::new(500));
        let halfway = run(start.clone(), 62);
        assert!(halfway.shown() > 200 && halfway.shown() < 300);
        let done = run(start, 200);
        assert_eq!(done.shown(), 500);
    }

    #[test]
    fn zero_target_never_moves() {
        assert_eq!(run(Rc::new(CountUp::new(0)), 5).shown(), 0);
    }
}
