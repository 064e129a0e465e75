use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

const ADVANCE_EVERY_MS: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Next,
    Prev,
    Go(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
            CarouselAction::Go(index) => index.min(self.len - 1),
        };
        Rc::new(Self { index, len: self.len })
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<&'static str>,
    pub alt: AttrValue,
    pub prev_label: AttrValue,
    pub next_label: AttrValue,
}

/// Full-bleed image slider. Advances on its own every six seconds; any
/// manual move restarts the wait.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = use_reducer(|| CarouselState { index: 0, len: props.images.len() });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(len, _index): &(usize, usize)| {
                let interval = (*len > 1)
                    .then(|| Interval::new(ADVANCE_EVERY_MS, move || dispatcher.dispatch(CarouselAction::Next)));
                move || drop(interval)
            },
            (state.len, state.index),
        );
    }

    let go = |action: fn() -> CarouselAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action()))
    };
    let prev = go(|| CarouselAction::Prev);
    let next = go(|| CarouselAction::Next);

    html! {
        <div class="carousel">
            { for props.images.iter().enumerate().map(|(i, src)| html! {
                <img
                    key={*src}
                    class={classes!("carousel-slide", (i == state.index).then_some("active"))}
                    src={*src}
                    alt={props.alt.clone()}
                />
            }) }
            if state.len > 1 {
                <button class="carousel-arrow prev" aria-label={props.prev_label.clone()} onclick={prev}>{"‹"}</button>
                <button class="carousel-arrow next" aria-label={props.next_label.clone()} onclick={next}>{"›"}</button>
                <div class="carousel-dots">
                    { for (0..state.len).map(|i| {
                        let dispatcher = state.dispatcher();
                        html! {
                            <button
                                class={classes!("carousel-dot", (i == state.index).then_some("active"))}
                                aria-label={format!("{}", i + 1)}
                                onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Go(i)))}
                            />
                        }
                    }) }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Reducible;

    fn step(index: usize, len: usize, action: CarouselAction) -> usize {
        Rc::new(CarouselState { index, len }).reduce(action).index
    }

    #[test]
    fn wraps_in_both_directions() {
        assert_eq!(step(2, 3, CarouselAction::Next), 0);
        assert_eq!(step(0, 3, CarouselAction::Prev), 2);
        assert_eq!(step(1, 3, CarouselAction::Next), 2);
    }

    #[test]
    fn go_is_clamped_and_empty_is_inert() {
        assert_eq!(step(0, 3, CarouselAction::Go(7)), 2);
        assert_eq!(step(0, 0, CarouselAction::Next), 0);
    }
}
