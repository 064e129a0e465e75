use gloo_timers::callback::Timeout;
use yew::prelude::*;

const SHOW_FOR_MS: u32 = 1200;

/// Full-screen brand splash shown once while the app boots.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let visible = use_state(|| true);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(SHOW_FOR_MS, move || visible.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }
    let style = r#"
        .loading-screen {
            position: fixed;
            inset: 0;
            z-index: 500;
            background: #050505;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .loading-screen span {
            font-family: 'Playfair Display', serif;
            font-size: 2.5rem;
            font-weight: 800;
            letter-spacing: -0.05em;
            animation: loading-pulse 1.2s ease-in-out infinite;
        }
        @keyframes loading-pulse {
            0%, 100% { opacity: 0.2; }
            50% { opacity: 1; }
        }
    "#;
    html! {
        <div class="loading-screen">
            <style>{style}</style>
            <span>{"BB CARS"}</span>
        </div>
    }
}
