//! Toast notifications

use gloo::timers::callback::Timeout;
use passage_core::UiTimings;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => {
                let before = toasts.len();
                toasts.retain(|t| t.id != id);
                if toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(Self { toasts })
    }
}

/// Handle for raising toasts from any view
#[derive(Clone)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.dispatcher
            .dispatch(ToastAction::Push(Toast { id, kind, message }));

        let dispatcher = self.dispatcher.clone();
        Timeout::new(UiTimings::NOTIFICATION_TIMEOUT_MS, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

/// Renders the toast stack and provides a [`Notifier`] to the subtree
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0_u32));
    let notifier = Notifier {
        dispatcher: list.dispatcher(),
        next_id,
    };

    let dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            {props.children.clone()}
            <div class="toast-stack">
                { for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let onclick = dismiss.reform(move |_: MouseEvent| id);
                    html! {
                        <div key={id} class={toast.kind.class()} role="alert" {onclick}>
                            {toast.message.clone()}
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

/// Hook to raise toasts
#[hook]
pub fn use_notify() -> Notifier {
    use_context::<Notifier>().expect(
        "Notifier not found. Make sure to wrap your component with NotificationProvider",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Toast {
        Toast {
            id,
            kind: ToastKind::Success,
            message: format!("toast {id}"),
        }
    }

    #[test]
    fn push_appends_in_order() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Push(toast(2)));
        let ids: Vec<_> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Push(toast(2)))
            .reduce(ToastAction::Dismiss(1));
        assert_eq!(list.toasts, vec![toast(2)]);
    }

    #[test]
    fn dismiss_unknown_id_keeps_state() {
        let list = Rc::new(ToastList::default()).reduce(ToastAction::Push(toast(1)));
        let same = list.clone().reduce(ToastAction::Dismiss(9));
        assert!(Rc::ptr_eq(&list, &same));
    }
}
