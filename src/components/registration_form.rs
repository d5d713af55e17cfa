//! Registration Form Component
//!
//! Live field validation (blur, password keystrokes), password strength,
//! confirmation matching and the submit flow that swaps the form for the
//! user dashboard.

use form_rules::{check_confirmation, validate, FieldName, FieldValue, PasswordStrength};
use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FieldError, FieldSlot, UserDashboard};
use crate::context::use_status_banner;
use crate::models::DashboardSnapshot;
use crate::navigation::scroll_smoothly;

/// Current input values, with per-field reactivity
#[derive(Clone, Debug, Store)]
pub struct RegistrationValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub terms: bool,
    pub contact: String,
}

impl Default for RegistrationValues {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            age: String::new(),
            terms: false,
            contact: "email".to_string(),
        }
    }
}

impl RegistrationValues {
    fn field_value(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::Username => FieldValue::Text(&self.username),
            FieldName::Email => FieldValue::Text(&self.email),
            FieldName::Password => FieldValue::Text(&self.password),
            FieldName::Age => FieldValue::Text(&self.age),
            FieldName::Terms => FieldValue::Checked(self.terms),
        }
    }

    fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::new(&self.username, &self.email, &self.age, &self.contact)
    }
}

/// Status and error slot of every checked input
#[derive(Clone, Copy)]
struct FormSlots {
    username: FieldSlot,
    email: FieldSlot,
    password: FieldSlot,
    confirm: FieldSlot,
    age: FieldSlot,
    terms: FieldSlot,
}

impl FormSlots {
    fn new() -> Self {
        Self {
            username: FieldSlot::new(),
            email: FieldSlot::new(),
            password: FieldSlot::new(),
            confirm: FieldSlot::new(),
            age: FieldSlot::new(),
            terms: FieldSlot::new(),
        }
    }

    fn get(&self, field: FieldName) -> FieldSlot {
        match field {
            FieldName::Username => self.username,
            FieldName::Email => self.email,
            FieldName::Password => self.password,
            FieldName::Age => self.age,
            FieldName::Terms => self.terms,
        }
    }
}

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let banner = use_status_banner();
    let values = Store::new(RegistrationValues::default());
    let slots = FormSlots::new();
    let (snapshot, set_snapshot) = signal(None::<DashboardSnapshot>);
    let success_ref = NodeRef::<html::Div>::new();

    let check_field = move |field: FieldName| -> bool {
        let outcome = values.with_untracked(|v| validate(field, v.field_value(field)));
        slots.get(field).settle(&outcome)
    };

    // Vacuously true while either side is empty
    let check_match = move || -> bool {
        let outcome =
            values.with_untracked(|v| check_confirmation(&v.password, &v.confirm_password));
        outcome.map_or(true, |outcome| slots.confirm.settle(&outcome))
    };

    let strength = Memo::new(move |_| values.password().with(|p| PasswordStrength::assess(p)));

    let on_password_input = move |value: String| {
        values.password().set(value);
        check_field(FieldName::Password);
        if !values.confirm_password().with_untracked(String::is_empty) {
            check_match();
        }
    };

    let on_confirm_input = move |value: String| {
        values.confirm_password().set(value);
        check_match();
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Every check runs so every annotation is refreshed
        let fields_ok = FieldName::ALL
            .into_iter()
            .map(check_field)
            .fold(true, |all, ok| all && ok);
        let confirmed = check_match();

        if fields_ok && confirmed {
            let submitted = values.with_untracked(RegistrationValues::snapshot);
            log::info!("registration accepted for {}", submitted.username);
            set_snapshot.set(Some(submitted));
            request_animation_frame(move || {
                if let Some(panel) = success_ref.get_untracked() {
                    scroll_smoothly(&panel);
                }
            });
            banner.display("Registration completed successfully!");
        } else {
            log::debug!("registration rejected");
            banner.display("Please fix the errors in the form.");
        }
    };

    let submitted = move || snapshot.with(Option::is_some);

    view! {
        <form
            id="registration-form"
            class="registration-form"
            novalidate=true
            style:display=move || if submitted() { "none" } else { "block" }
            on:submit=on_submit
        >
            <TextField
                id="username"
                label="Username"
                value=Signal::derive(move || values.username().get())
                field=slots.username
                on_input=move |value: String| values.username().set(value)
                on_blur=Callback::new(move |_| {
                    check_field(FieldName::Username);
                })
            />
            <TextField
                id="email"
                label="Email"
                input_type="email"
                value=Signal::derive(move || values.email().get())
                field=slots.email
                on_input=move |value: String| values.email().set(value)
                on_blur=Callback::new(move |_| {
                    check_field(FieldName::Email);
                })
            />
            <TextField
                id="password"
                label="Password"
                input_type="password"
                value=Signal::derive(move || values.password().get())
                field=slots.password
                on_input=on_password_input
                on_blur=Callback::new(move |_| {
                    check_field(FieldName::Password);
                })
            >
                <div
                    id="password-strength"
                    class=move || {
                        strength
                            .get()
                            .map_or("password-strength", |s| s.level().css_class())
                    }
                >
                    {move || strength.get().map(|s| s.summary()).unwrap_or_default()}
                </div>
            </TextField>
            <TextField
                id="confirm-password"
                label="Confirm Password"
                input_type="password"
                value=Signal::derive(move || values.confirm_password().get())
                field=slots.confirm
                on_input=on_confirm_input
            />
            <TextField
                id="age"
                label="Age (optional)"
                input_type="number"
                value=Signal::derive(move || values.age().get())
                field=slots.age
                on_input=move |value: String| values.age().set(value)
                on_blur=Callback::new(move |_| {
                    check_field(FieldName::Age);
                })
            />

            <fieldset class="form-group contact-group">
                <legend>"Preferred contact method"</legend>
                {[("email", "Email"), ("phone", "Phone")]
                    .into_iter()
                    .map(move |(value, label)| {
                        view! {
                            <label class="radio-label">
                                <input
                                    type="radio"
                                    name="contact"
                                    value=value
                                    prop:checked=move || values.contact().with(|c| c == value)
                                    on:change=move |_| values.contact().set(value.to_string())
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>

            <div class="form-group checkbox-group">
                <label for="terms">
                    <input
                        type="checkbox"
                        id="terms"
                        name="terms"
                        class=move || slots.terms.status.get().css_class()
                        prop:checked=move || values.terms().get()
                        on:change=move |ev| values.terms().set(event_target_checked(&ev))
                        on:blur=move |_| {
                            check_field(FieldName::Terms);
                        }
                    />
                    " I agree to the terms and conditions"
                </label>
                <FieldError id=FieldName::Terms.error_id() error=slots.terms.error />
            </div>

            <button type="submit" class="btn submit-btn">"Register"</button>
        </form>

        <div
            id="form-success"
            class="form-success"
            node_ref=success_ref
            style:display=move || if submitted() { "block" } else { "none" }
        >
            <h3>"Registration complete!"</h3>
            <UserDashboard snapshot=snapshot />
        </div>
    }
}

/// Labelled text-like input with its error slot
#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    field: FieldSlot,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                name=id
                class=move || field.status.get().css_class()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(on_blur) = on_blur {
                        on_blur.run(());
                    }
                }
            />
            {children.map(|children| children())}
            <FieldError id=format!("{id}-error") error=field.error />
        </div>
    }
}
