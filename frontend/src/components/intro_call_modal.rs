use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_timers::callback::Timeout;
use log::{debug, info};

use crate::config;
use crate::components::scheduling_embed::SchedulingEmbed;
use crate::wizard::controller::{AdvanceTicket, Navigation, WizardController};
use crate::wizard::scroll_lock::ScrollLock;
use crate::wizard::state::{
    Field, Step, WizardState, BUSINESS_TYPES, OTHER_BUSINESS_TYPE, PROJECT_TYPES, REVENUE_RANGES,
};
use crate::wizard::validation::is_email_valid;

#[derive(Properties, PartialEq)]
pub struct IntroCallModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum IntroCallMsg {
    SetField(Field, String),
    Next,
    Back,
    AutoAdvance(AdvanceTicket),
}

/// Lead-qualification modal that ends in the scheduling embed.
pub struct IntroCallModal {
    wizard: WizardController,
    scroll_lock: Option<ScrollLock>,
    auto_advance: Option<Timeout>,
}

impl IntroCallModal {
    fn open_session(&mut self) {
        self.wizard.open();
        if self.scroll_lock.is_none() {
            self.scroll_lock = ScrollLock::body();
        }
    }

    /// Tears the session down. Dropping the timeout cancels it, dropping the
    /// lock restores page scrolling.
    fn close_session(&mut self) {
        if self.auto_advance.take().is_some() {
            debug!("Dropped auto-advance timer");
        }
        if self.wizard.is_open() {
            self.wizard.close();
        }
        self.scroll_lock = None;
    }

    fn render_choices(&self, ctx: &Context<Self>, field: Field, options: &[&'static str], state: &WizardState) -> Html {
        let selected = state.answers.get(field);
        html! {
            <div class="choice-list">
                { for options.iter().map(|option| {
                    let option = *option;
                    let onclick = ctx.link().callback(move |_| IntroCallMsg::SetField(field, option.to_string()));
                    html! {
                        <button
                            key={option}
                            class={classes!("choice-button", (selected == option).then(|| "selected"))}
                            {onclick}
                        >
                            {option}
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, value: &str, placeholder: &'static str, input_type: &'static str, invalid: bool) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            IntroCallMsg::SetField(field, input.value())
        });
        html! {
            <input
                type={input_type}
                class={classes!("wizard-input", invalid.then(|| "invalid"))}
                value={value.to_string()}
                {placeholder}
                {oninput}
            />
        }
    }

    fn text_area(&self, ctx: &Context<Self>, field: Field, value: &str, placeholder: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            IntroCallMsg::SetField(field, input.value())
        });
        html! {
            <textarea class="wizard-input wizard-textarea" value={value.to_string()} {placeholder} {oninput} />
        }
    }

    fn render_step(&self, ctx: &Context<Self>, state: &WizardState) -> Html {
        let answers = &state.answers;
        match state.current_step {
            Step::BusinessType => html! {
                <div class="wizard-step">
                    <h2>{"What type of business do you run?"}</h2>
                    { self.render_choices(ctx, Field::BusinessType, &BUSINESS_TYPES, state) }
                    if answers.business_type == OTHER_BUSINESS_TYPE {
                        { self.text_input(ctx, Field::OtherBusinessType, &answers.other_business_type, "Please specify your business type...", "text", false) }
                    }
                </div>
            },
            Step::Description => html! {
                <div class="wizard-step">
                    <h2>{"What does it do?"}</h2>
                    <p class="wizard-hint">{"Tell us about your business. This helps us understand your needs and customize our solutions accordingly."}</p>
                    { self.text_area(ctx, Field::Description, &answers.description, "Brief description of your business...") }
                </div>
            },
            Step::HelpNeeded => html! {
                <div class="wizard-step">
                    <h2>{"What would you like help with?"}</h2>
                    <p class="wizard-hint">{"Be as detailed as possible. We'll use this to prepare for our call."}</p>
                    { self.text_area(ctx, Field::HelpNeeded, &answers.help_needed, "Your main challenges or goals...") }
                </div>
            },
            Step::ProjectType => html! {
                <div class="wizard-step">
                    <h2>{"Are you looking for a one-time project or an ongoing monthly relationship?"}</h2>
                    { self.render_choices(ctx, Field::ProjectType, &PROJECT_TYPES, state) }
                </div>
            },
            Step::Website => html! {
                <div class="wizard-step">
                    <h2>{"What's your website URL?"}</h2>
                    <p class="wizard-hint">{"Optional - enter 'no website' if you don't have one yet"}</p>
                    { self.text_input(ctx, Field::Website, &answers.website, "https:// or 'no website'", "text", false) }
                </div>
            },
            Step::Revenue => html! {
                <div class="wizard-step">
                    <h2>{"What's your current monthly revenue?"}</h2>
                    { self.render_choices(ctx, Field::Revenue, &REVENUE_RANGES, state) }
                </div>
            },
            Step::Contact => {
                let email_invalid = !answers.email.is_empty() && !is_email_valid(&answers.email);
                html! {
                    <div class="wizard-step">
                        <h2>{"How do we reach you?"}</h2>
                        <div class="name-row">
                            { self.text_input(ctx, Field::FirstName, &answers.first_name, "First name", "text", false) }
                            { self.text_input(ctx, Field::LastName, &answers.last_name, "Last name", "text", false) }
                        </div>
                        { self.text_input(ctx, Field::Email, &answers.email, "Email address", "email", email_invalid) }
                        { self.text_input(ctx, Field::Company, &answers.company, "Company name", "text", false) }
                    </div>
                }
            }
            Step::Handoff => match self.wizard.prefill() {
                Some(prefill) => html! { <SchedulingEmbed {prefill} /> },
                None => html! {},
            },
        }
    }
}

impl Component for IntroCallModal {
    type Message = IntroCallMsg;
    type Properties = IntroCallModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut modal = Self {
            wizard: WizardController::new(),
            scroll_lock: None,
            auto_advance: None,
        };
        if ctx.props().is_open {
            modal.open_session();
        }
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        match (old_props.is_open, ctx.props().is_open) {
            (false, true) => self.open_session(),
            (true, false) => self.close_session(),
            _ => {}
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let nav = match msg {
            IntroCallMsg::SetField(field, value) => {
                match self.wizard.set_field(field, value) {
                    Some(ticket) => {
                        let link = ctx.link().clone();
                        // replacing the handle cancels the previous timer
                        self.auto_advance = Some(Timeout::new(config::AUTO_ADVANCE_DELAY_MS, move || {
                            link.send_message(IntroCallMsg::AutoAdvance(ticket));
                        }));
                    }
                    None if field.is_choice() => self.auto_advance = None,
                    None => {}
                }
                return true;
            }
            IntroCallMsg::AutoAdvance(ticket) => {
                self.auto_advance = None;
                self.wizard.fire_auto_advance(ticket)
            }
            IntroCallMsg::Next => self.wizard.advance(),
            IntroCallMsg::Back => self.wizard.retreat(),
        };

        match nav {
            Navigation::Moved(step) => {
                info!("Intro call wizard moved to step {}", step.number());
                true
            }
            Navigation::Refused => false,
            Navigation::Closed => {
                self.close_session();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.close_session();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(state) = self.wizard.state() else {
            return html! {};
        };
        let step = state.current_step;
        let can_advance = state.can_advance();
        let progress = format!("width: {}%;", state.progress_percent());

        html! {
            <div class="intro-modal">
                <style>
                    {r#"
                        .intro-modal {
                            position: fixed;
                            inset: 0;
                            z-index: 100;
                            overflow-y: auto;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            padding: 1rem;
                        }
                        .intro-modal-backdrop {
                            position: fixed;
                            inset: 0;
                            background: rgba(0, 0, 0, 0.8);
                        }
                        .intro-modal-panel {
                            position: relative;
                            width: 100%;
                            max-width: 42rem;
                            padding: 2rem;
                            margin: 2rem 0;
                            background: #0A192F;
                            border-radius: 8px;
                            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.5);
                            color: #fff;
                        }
                        .progress-track {
                            width: 100%;
                            height: 4px;
                            background: #1f2937;
                            border-radius: 9999px;
                            margin-bottom: 2rem;
                        }
                        .progress-fill {
                            height: 100%;
                            background: #BD34FE;
                            transition: width 0.3s ease;
                        }
                        .wizard-step h2 {
                            font-size: 1.5rem;
                            font-weight: 600;
                            margin-bottom: 1rem;
                        }
                        .wizard-hint {
                            color: #9ca3af;
                            margin-bottom: 1rem;
                        }
                        .choice-list {
                            display: flex;
                            flex-direction: column;
                            gap: 0.75rem;
                        }
                        .choice-button {
                            width: 100%;
                            padding: 0.75rem 1rem;
                            text-align: left;
                            color: #fff;
                            background: transparent;
                            border: 1px solid rgba(255, 255, 255, 0.1);
                            border-radius: 8px;
                            cursor: pointer;
                            transition: border-color 0.2s;
                        }
                        .choice-button:hover {
                            border-color: rgba(255, 255, 255, 0.3);
                        }
                        .choice-button.selected {
                            border-color: #BD34FE;
                            background: rgba(189, 52, 254, 0.1);
                        }
                        .wizard-input {
                            width: 100%;
                            box-sizing: border-box;
                            margin-top: 0.75rem;
                            padding: 0.75rem 1rem;
                            color: #fff;
                            background: rgba(255, 255, 255, 0.05);
                            border: 1px solid rgba(255, 255, 255, 0.1);
                            border-radius: 8px;
                        }
                        .wizard-input:focus {
                            outline: none;
                            border-color: #BD34FE;
                        }
                        .wizard-input.invalid {
                            border-color: #ef4444;
                        }
                        .wizard-textarea {
                            height: 8rem;
                            resize: none;
                        }
                        .name-row {
                            display: grid;
                            grid-template-columns: 1fr 1fr;
                            gap: 1rem;
                        }
                        .wizard-nav {
                            margin-top: 2rem;
                            display: flex;
                            justify-content: space-between;
                        }
                        .wizard-back {
                            background: none;
                            border: none;
                            color: #9ca3af;
                            cursor: pointer;
                        }
                        .wizard-back:hover {
                            color: #fff;
                        }
                        .wizard-continue {
                            padding: 0.5rem 1.5rem;
                            border: none;
                            border-radius: 9999px;
                            font-weight: 500;
                            color: #fff;
                            background: #BD34FE;
                            cursor: pointer;
                        }
                        .wizard-continue:hover {
                            background: #A020F0;
                        }
                        .wizard-continue:disabled {
                            background: #4b5563;
                            cursor: not-allowed;
                        }
                    "#}
                </style>
                <div class="intro-modal-backdrop" aria-hidden="true"></div>
                <div class="intro-modal-panel" role="dialog" aria-modal="true">
                    <div class="progress-track">
                        <div class="progress-fill" style={progress}></div>
                    </div>

                    { self.render_step(ctx, state) }

                    if !step.is_terminal() {
                        <div class="wizard-nav">
                            <button class="wizard-back" onclick={ctx.link().callback(|_| IntroCallMsg::Back)}>
                                { if step == Step::BusinessType { "← Close" } else { "← Back" } }
                            </button>
                            <button
                                class="wizard-continue"
                                disabled={!can_advance}
                                onclick={ctx.link().callback(|_| IntroCallMsg::Next)}
                            >
                                {"Continue →"}
                            </button>
                        </div>
                    }
                </div>
            </div>
        }
    }
}
