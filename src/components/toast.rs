use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                queue.toasts.push(Toast {
                    id: queue.next_id,
                    kind,
                    message,
                });
                queue.next_id = queue.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                let before = queue.toasts.len();
                queue.toasts.retain(|toast| toast.id != id);
                if queue.toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(queue)
    }
}

/// Handle children use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    queue: UseReducerDispatcher<ToastQueue>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.queue.dispatch(ToastAction::Push(ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.queue.dispatch(ToastAction::Push(ToastKind::Error, message.into()));
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("ToastProvider must wrap components that raise toasts")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = Toaster {
        queue: queue.dispatcher(),
    };

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div class="toaster" role="status" aria-live="polite">
                <style>
                    {r#"
                    .toaster {
                        position: fixed;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        pointer-events: none;
                    }
                    .toast {
                        pointer-events: auto;
                        min-width: 280px;
                        max-width: 380px;
                        padding: 1rem 1.25rem;
                        border-radius: 8px;
                        background: #ffffff;
                        color: #0a1628;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                        border-left: 4px solid #d4af37;
                        display: flex;
                        align-items: flex-start;
                        justify-content: space-between;
                        gap: 1rem;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast.error {
                        border-left-color: #c0392b;
                    }
                    .toast button {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #6b7280;
                        font-size: 1rem;
                    }
                    @keyframes toastIn {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    "#}
                </style>
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DISMISS_MS, move || on_dismiss.emit(id));
                // Dropping the handle clears the timer if the toast goes first.
                move || drop(timeout)
            },
            id,
        );
    }

    let dismiss = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.kind {
        ToastKind::Success => classes!("toast", "success"),
        ToastKind::Error => classes!("toast", "error"),
    };

    html! {
        <div {class}>
            <span>{&props.toast.message}</span>
            <button onclick={dismiss} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, message: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(ToastKind::Success, message.to_string()))
    }

    #[test]
    fn ids_are_assigned_in_order() {
        let queue = push(push(Rc::new(ToastQueue::default()), "one"), "two");
        let ids: Vec<_> = queue.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = push(push(push(Rc::new(ToastQueue::default()), "a"), "b"), "c");
        let queue = queue.reduce(ToastAction::Dismiss(1));
        let messages: Vec<_> = queue.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "c"]);
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let queue = push(Rc::new(ToastQueue::default()), "a");
        let same = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &same));
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let queue = push(Rc::new(ToastQueue::default()), "a");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        let queue = push(queue, "b");
        assert_eq!(queue.toasts[0].id, 1);
    }
}
