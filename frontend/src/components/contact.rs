use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::anchor::Anchor;
use crate::components::notification::{Toast, ToastState};
use crate::content::{CONTACT_INFO, PROFILE_LINKS};
use crate::state::contact_form::{
    ContactController, ContactFormState, FormError, FormField, SubmitNotice, SubmitOutcome,
};
use crate::state::deferred::TimerScheduler;

pub enum ContactMsg {
    Change(FormField, String),
    Ignore,
    Focus(FormField),
    Blur,
    Submit,
    Sent(SubmitNotice),
    DismissNotice(u32),
}

pub struct Contact {
    controller: ContactController<TimerScheduler>,
    error: Option<FormError>,
    toast: ToastState,
}

/// Routes an input event to its field by the element's `name`.
fn change_msg(name: &str, value: String) -> ContactMsg {
    match FormField::from_name(name) {
        Some(field) => ContactMsg::Change(field, value),
        None => {
            debug!("input event from unknown field {:?}", name);
            ContactMsg::Ignore
        }
    }
}

impl Contact {
    fn field_label(form: &ContactFormState, field: FormField) -> Html {
        let focused = form.is_focused(field);
        html! {
            <label for={field.name()} class={classes!("field-label", focused.then(|| "focused"))}>
                {field.label()}
            </label>
        }
    }

    fn text_input(
        ctx: &Context<Self>,
        form: &ContactFormState,
        field: FormField,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            change_msg(&input.name(), input.value())
        });
        html! {
            <div class="field">
                {Self::field_label(form, field)}
                <input
                    id={field.name()}
                    name={field.name()}
                    type={kind}
                    value={form.value(field).to_string()}
                    placeholder={placeholder}
                    required={true}
                    oninput={oninput}
                    onfocus={link.callback(move |_: FocusEvent| ContactMsg::Focus(field))}
                    onblur={link.callback(|_: FocusEvent| ContactMsg::Blur)}
                />
            </div>
        }
    }

    fn message_input(ctx: &Context<Self>, form: &ContactFormState) -> Html {
        let field = FormField::Message;
        let link = ctx.link();
        html! {
            <div class="field">
                {Self::field_label(form, field)}
                <textarea
                    id={field.name()}
                    name={field.name()}
                    rows="6"
                    value={form.message.clone()}
                    placeholder="Tell me about your project..."
                    required={true}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        change_msg(&input.name(), input.value())
                    })}
                    onfocus={link.callback(move |_: FocusEvent| ContactMsg::Focus(field))}
                    onblur={link.callback(|_: FocusEvent| ContactMsg::Blur)}
                />
            </div>
        }
    }
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: ContactController::new(TimerScheduler, ctx.link().callback(ContactMsg::Sent)),
            error: None,
            toast: ToastState::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Change(field, value) => {
                self.controller.on_field_change(field, value);
                self.error = None;
                true
            }
            ContactMsg::Ignore => false,
            ContactMsg::Focus(field) => {
                self.controller.focus(field);
                true
            }
            ContactMsg::Blur => {
                self.controller.blur();
                true
            }
            ContactMsg::Submit => match self.controller.submit() {
                SubmitOutcome::Started => {
                    self.error = None;
                    true
                }
                SubmitOutcome::AlreadySubmitting => false,
                SubmitOutcome::Rejected(err) => {
                    warn!("contact form rejected: {}", err);
                    self.error = Some(err);
                    true
                }
            },
            ContactMsg::Sent(notice) => {
                let seq = self.toast.show(notice);
                debug!("showing notice #{}", seq);
                true
            }
            ContactMsg::DismissNotice(seq) => self.toast.dismiss(seq),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let submitting = self.controller.is_submitting();
        let form = self.controller.state();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <section id={Anchor::Contact.id()} class="section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Get In "}<span class="text-gradient">{"Touch"}</span></h2>
                        <p>
                            {"Ready to start your next project? Let's discuss how I can help you \
                              transform your ideas into powerful data-driven solutions."}
                        </p>
                    </div>

                    <div class="contact-grid">
                        <div class="contact-side">
                            <div class="card">
                                <h3>{"Contact Information"}</h3>
                                { for CONTACT_INFO.iter().map(|info| html! {
                                    <div key={info.label} class="contact-item">
                                        <span class="card-icon">{info.icon.glyph()}</span>
                                        <div>
                                            <p class="muted">{info.label}</p>
                                            if let Some(href) = info.href {
                                                <a href={href}>{info.value}</a>
                                            } else {
                                                <p>{info.value}</p>
                                            }
                                        </div>
                                    </div>
                                }) }
                            </div>

                            <div class="card">
                                <h3>{"Follow Me"}</h3>
                                { for PROFILE_LINKS.iter().map(|profile| html! {
                                    <a key={profile.label} class="contact-item" href={profile.href} target="_blank" rel="noopener noreferrer">
                                        <span class="card-icon">{profile.icon.glyph()}</span>
                                        <span>{profile.label}</span>
                                    </a>
                                }) }
                            </div>

                            <button class="btn btn-cta btn-block">{"Download CV"}</button>
                        </div>

                        <div class="card contact-form-card">
                            <h3>{"Send Me a Message"}</h3>
                            <form onsubmit={onsubmit} class="contact-form">
                                <div class="field-row">
                                    {Self::text_input(ctx, &form, FormField::Name, "text", "Your full name")}
                                    {Self::text_input(ctx, &form, FormField::Email, "email", "your.email@example.com")}
                                </div>
                                {Self::text_input(ctx, &form, FormField::Subject, "text", "What's this about?")}
                                {Self::message_input(ctx, &form)}

                                if let Some(err) = &self.error {
                                    <p class="form-error">{err.to_string()}</p>
                                }

                                <button type="submit" class="btn btn-cta btn-block" disabled={submitting}>
                                    if submitting {
                                        <span class="spinner"></span>
                                        {"Sending..."}
                                    } else {
                                        {"Send Message"}
                                    }
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
                <Toast
                    notice={self.toast.notice().cloned()}
                    seq={self.toast.seq()}
                    on_dismiss={link.callback(ContactMsg::DismissNotice)}
                />
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.cancel_pending();
    }
}
