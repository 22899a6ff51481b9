use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;
use crate::state::contact_form::SubmitNotice;

/// The notice on screen and the show it belongs to.
///
/// Every `show` starts a new sequence number, so a dismissal from an
/// earlier show (its timer or close button) cannot clear a later one,
/// even when both carry identical notices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    notice: Option<SubmitNotice>,
    seq: u32,
}

impl ToastState {
    pub fn show(&mut self, notice: SubmitNotice) -> u32 {
        self.seq = self.seq.wrapping_add(1);
        self.notice = Some(notice);
        self.seq
    }

    /// Clears the notice if `seq` is the current show. Returns whether it did.
    pub fn dismiss(&mut self, seq: u32) -> bool {
        if seq != self.seq || self.notice.is_none() {
            return false;
        }
        self.notice = None;
        true
    }

    pub fn notice(&self) -> Option<&SubmitNotice> {
        self.notice.as_ref()
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<SubmitNotice>,
    pub seq: u32,
    /// Receives the `seq` of the show being dismissed.
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |&(seq, showing): &(u32, bool)| {
                let timeout = showing.then(|| {
                    Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(seq))
                });
                // dropping the handle clears the timer
                move || drop(timeout)
            },
            (props.seq, props.notice.is_some()),
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        let seq = props.seq;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(seq);
        })
    };

    let Some(notice) = &props.notice else {
        return html! {};
    };

    html! {
        <div class="toast" role="status" aria-live="polite">
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        max-width: 360px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: #1f2937;
                        color: #fff;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.3);
                        animation: toastIn 0.3s ease-out forwards;
                        z-index: 50;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        color: #d1d5db;
                        font-size: 0.9rem;
                    }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: #9ca3af;
                        cursor: pointer;
                    }
                "#}
            </style>
            <button class="toast-close" onclick={dismiss} aria-label="Dismiss">{"✕"}</button>
            <div class="toast-title">{&notice.title}</div>
            <div class="toast-description">{&notice.description}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn notice() -> SubmitNotice {
        SubmitNotice {
            title: "Message Sent Successfully! ✨".to_string(),
            description: "Thank you for your message. I'll get back to you soon!".to_string(),
        }
    }

    #[test]
    fn stale_dismissal_leaves_a_repeated_notice_up() {
        let mut toast = ToastState::default();
        let first = toast.show(notice());
        let second = toast.show(notice());
        assert_ne!(first, second);

        // the first show's timer fires after the second show started
        assert!(!toast.dismiss(first));
        assert_eq!(toast.notice(), Some(&notice()));

        assert!(toast.dismiss(second));
        assert_eq!(toast.notice(), None);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut toast = ToastState::default();
        let seq = toast.show(notice());
        assert!(toast.dismiss(seq));
        assert!(!toast.dismiss(seq));
        assert_eq!(toast.seq(), seq);
    }
}
