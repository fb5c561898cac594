use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// Lifecycle of the splash screen. Phases only move forward and `Done`
/// is final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GatePhase {
    #[default]
    Showing,
    FadingOut,
    Done,
}

impl GatePhase {
    pub fn advance(self) -> Self {
        match self {
            GatePhase::Showing => GatePhase::FadingOut,
            GatePhase::FadingOut | GatePhase::Done => GatePhase::Done,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Gate {
    phase: GatePhase,
}

impl Reducible for Gate {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let phase = self.phase.advance();
        if phase == self.phase {
            return self;
        }
        Rc::new(Gate { phase })
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

/// Full-screen splash shown once per page load. Holds for
/// `LOADING_GATE_MS`, fades for `LOADING_FADE_MS`, then reports
/// completion exactly once.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let gate = use_reducer_eq(Gate::default);

    {
        let gate = gate.clone();
        use_effect_with_deps(
            move |_| {
                let hold = Timeout::new(config::LOADING_GATE_MS, move || gate.dispatch(()));
                move || drop(hold)
            },
            (),
        );
    }

    {
        let gate_handle = gate.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |phase| {
                let fade = match phase {
                    GatePhase::FadingOut => Some(Timeout::new(config::LOADING_FADE_MS, move || {
                        gate_handle.dispatch(());
                    })),
                    GatePhase::Done => {
                        on_complete.emit(());
                        None
                    }
                    GatePhase::Showing => None,
                };
                move || drop(fade)
            },
            gate.phase,
        );
    }

    let class = classes!(
        "loading-screen",
        (gate.phase != GatePhase::Showing).then_some("fading")
    );

    html! {
        <div {class}>
            <style>
                {r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 20000;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: linear-gradient(135deg, #0a1628 0%, #1a2942 100%);
                    opacity: 1;
                    transition: opacity 0.5s ease;
                }
                .loading-screen.fading {
                    opacity: 0;
                    pointer-events: none;
                }
                .loading-logo {
                    width: 160px;
                    animation: loadingPulse 1.6s ease-in-out infinite;
                }
                .loading-bar {
                    width: 200px;
                    height: 2px;
                    background: rgba(212, 175, 55, 0.2);
                    overflow: hidden;
                }
                .loading-bar span {
                    display: block;
                    height: 100%;
                    width: 100%;
                    background: #d4af37;
                    transform-origin: left;
                    animation: loadingFill 2s ease-out forwards;
                }
                @keyframes loadingPulse {
                    0%, 100% { opacity: 0.7; transform: scale(0.97); }
                    50% { opacity: 1; transform: scale(1); }
                }
                @keyframes loadingFill {
                    from { transform: scaleX(0); }
                    to { transform: scaleX(1); }
                }
                "#}
            </style>
            <img class="loading-logo" src={config::LOGO} alt={config::PRACTICE_NAME} />
            <div class="loading-bar"><span></span></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_order() {
        let phase = GatePhase::default();
        assert_eq!(phase, GatePhase::Showing);
        assert_eq!(phase.advance(), GatePhase::FadingOut);
        assert_eq!(phase.advance().advance(), GatePhase::Done);
    }

    #[test]
    fn done_is_final() {
        assert_eq!(GatePhase::Done.advance(), GatePhase::Done);
        let gate = Rc::new(Gate {
            phase: GatePhase::Done,
        });
        assert!(Rc::ptr_eq(&gate, &gate.clone().reduce(())));
    }
}
