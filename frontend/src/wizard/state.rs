use crate::wizard::validation;

/// Value of `business_type` that asks for a free-text description instead.
pub const OTHER_BUSINESS_TYPE: &str = "Other";

pub const BUSINESS_TYPES: [&str; 5] = ["Service", "E-commerce", "Software", "Brick-and-mortar", OTHER_BUSINESS_TYPE];
pub const PROJECT_TYPES: [&str; 3] = ["One-time project", "Monthly retainer", "Not sure yet"];
pub const REVENUE_RANGES: [&str; 4] = ["$0-$10k", "$10k-$50k", "$50k-$100k", "$100k+"];

/// One screen of the intro-call wizard. `Handoff` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    BusinessType = 1,
    Description = 2,
    HelpNeeded = 3,
    ProjectType = 4,
    Website = 5,
    Revenue = 6,
    Contact = 7,
    Handoff = 8,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::BusinessType,
        Step::Description,
        Step::HelpNeeded,
        Step::ProjectType,
        Step::Website,
        Step::Revenue,
        Step::Contact,
        Step::Handoff,
    ];

    /// Number of data-collection steps before the handoff.
    pub const COLLECTING: u8 = 7;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Step> {
        Step::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// The following step, saturating at `Handoff`.
    pub fn next(self) -> Step {
        Step::from_number(self.number() + 1).unwrap_or(Step::Handoff)
    }

    /// The preceding step, or `None` on the first one.
    pub fn prev(self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Handoff
    }
}

/// Every answer the wizard collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    BusinessType,
    OtherBusinessType,
    Description,
    HelpNeeded,
    ProjectType,
    Website,
    Revenue,
    FirstName,
    LastName,
    Email,
    Company,
}

impl Field {
    /// Choice fields are answered with a single click and auto-advance.
    pub fn is_choice(self) -> bool {
        matches!(self, Field::BusinessType | Field::ProjectType | Field::Revenue)
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::BusinessType => "businessType",
            Field::OtherBusinessType => "otherBusinessType",
            Field::Description => "description",
            Field::HelpNeeded => "helpNeeded",
            Field::ProjectType => "projectType",
            Field::Website => "website",
            Field::Revenue => "revenue",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Company => "company",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Answers {
    pub business_type: String,
    pub other_business_type: String,
    pub description: String,
    pub help_needed: String,
    pub project_type: String,
    pub website: String,
    pub revenue: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
}

impl Answers {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::BusinessType => &self.business_type,
            Field::OtherBusinessType => &self.other_business_type,
            Field::Description => &self.description,
            Field::HelpNeeded => &self.help_needed,
            Field::ProjectType => &self.project_type,
            Field::Website => &self.website,
            Field::Revenue => &self.revenue,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Company => &self.company,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::BusinessType => &mut self.business_type,
            Field::OtherBusinessType => &mut self.other_business_type,
            Field::Description => &mut self.description,
            Field::HelpNeeded => &mut self.help_needed,
            Field::ProjectType => &mut self.project_type,
            Field::Website => &mut self.website,
            Field::Revenue => &mut self.revenue,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
        };
        *slot = value;
    }

    pub fn wants_other_business_type(&self) -> bool {
        self.business_type == OTHER_BUSINESS_TYPE
    }

    /// The business type handed to the scheduler.
    pub fn effective_business_type(&self) -> &str {
        if self.wants_other_business_type() {
            &self.other_business_type
        } else {
            &self.business_type
        }
    }
}

/// State of one open intro-call session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: Step,
    pub answers: Answers,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: Step::BusinessType,
            answers: Answers::default(),
        }
    }
}

impl WizardState {
    /// Recomputed from the live answers on every call.
    pub fn can_advance(&self) -> bool {
        validation::is_step_valid(self.current_step, &self.answers)
    }

    /// Width of the progress bar in percent, full once the handoff is reached.
    pub fn progress_percent(&self) -> f64 {
        let ratio = f64::from(self.current_step.number()) / f64::from(Step::COLLECTING);
        (ratio * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_round_trip_through_numbers() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.number() as usize, i + 1);
            assert_eq!(Step::from_number(step.number()), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(9), None);
    }

    #[test]
    fn next_saturates_and_prev_stops_at_first() {
        assert_eq!(Step::Contact.next(), Step::Handoff);
        assert_eq!(Step::Handoff.next(), Step::Handoff);
        assert_eq!(Step::Description.prev(), Some(Step::BusinessType));
        assert_eq!(Step::BusinessType.prev(), None);
    }

    #[test]
    fn only_three_fields_are_choices() {
        let choices: Vec<Field> = [
            Field::BusinessType,
            Field::OtherBusinessType,
            Field::Description,
            Field::HelpNeeded,
            Field::ProjectType,
            Field::Website,
            Field::Revenue,
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Company,
        ]
        .into_iter()
        .filter(|f| f.is_choice())
        .collect();
        assert_eq!(choices, vec![Field::BusinessType, Field::ProjectType, Field::Revenue]);
    }

    #[test]
    fn effective_business_type_follows_other_sentinel() {
        let mut answers = Answers::default();
        answers.set(Field::BusinessType, "Software".into());
        answers.set(Field::OtherBusinessType, "Bakery".into());
        assert_eq!(answers.effective_business_type(), "Software");

        answers.set(Field::BusinessType, OTHER_BUSINESS_TYPE.into());
        assert_eq!(answers.effective_business_type(), "Bakery");
    }

    #[test]
    fn progress_is_clamped_at_handoff() {
        let mut state = WizardState::default();
        assert!((state.progress_percent() - 100.0 / 7.0).abs() < 1e-9);
        state.current_step = Step::Contact;
        assert_eq!(state.progress_percent(), 100.0);
        state.current_step = Step::Handoff;
        assert_eq!(state.progress_percent(), 100.0);
    }
}
