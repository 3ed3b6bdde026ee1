use once_cell::sync::Lazy;
use regex::Regex;

use crate::wizard::state::{Answers, Step};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

pub fn is_email_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Gate for leaving `step` forward. Only step 7 trims its inputs.
pub fn is_step_valid(step: Step, answers: &Answers) -> bool {
    match step {
        Step::BusinessType => {
            if answers.wants_other_business_type() {
                !answers.other_business_type.is_empty()
            } else {
                !answers.business_type.is_empty()
            }
        }
        Step::Description => !answers.description.is_empty(),
        Step::HelpNeeded => !answers.help_needed.is_empty(),
        Step::ProjectType => !answers.project_type.is_empty(),
        // website is optional
        Step::Website => true,
        Step::Revenue => !answers.revenue.is_empty(),
        Step::Contact => {
            !answers.first_name.trim().is_empty()
                && !answers.last_name.trim().is_empty()
                && !answers.company.trim().is_empty()
                && is_email_valid(&answers.email)
        }
        Step::Handoff => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::state::{Field, OTHER_BUSINESS_TYPE};

    fn contact(first: &str, last: &str, company: &str, email: &str) -> Answers {
        Answers {
            first_name: first.into(),
            last_name: last.into(),
            company: company.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn email_examples() {
        assert!(is_email_valid("a@b.co"));
        assert!(!is_email_valid("a@b"));
        assert!(!is_email_valid("plainstring"));
        assert!(is_email_valid("a.b+c@sub.domain.org"));
    }

    #[test]
    fn email_rejects_short_tld_and_spaces() {
        assert!(!is_email_valid("a@b.c"));
        assert!(!is_email_valid("a b@c.com"));
        assert!(!is_email_valid(" a@b.com"));
        assert!(!is_email_valid(""));
    }

    #[test]
    fn business_type_needs_description_when_other() {
        let mut answers = Answers::default();
        assert!(!is_step_valid(Step::BusinessType, &answers));

        answers.set(Field::BusinessType, "Service".into());
        assert!(is_step_valid(Step::BusinessType, &answers));

        answers.set(Field::BusinessType, OTHER_BUSINESS_TYPE.into());
        assert!(!is_step_valid(Step::BusinessType, &answers));

        answers.set(Field::OtherBusinessType, "Dog grooming".into());
        assert!(is_step_valid(Step::BusinessType, &answers));
    }

    #[test]
    fn free_text_steps_do_not_trim() {
        let answers = Answers {
            description: "   ".into(),
            help_needed: "\t".into(),
            ..Default::default()
        };
        assert!(is_step_valid(Step::Description, &answers));
        assert!(is_step_valid(Step::HelpNeeded, &answers));
    }

    #[test]
    fn website_and_handoff_always_pass() {
        let answers = Answers::default();
        assert!(is_step_valid(Step::Website, &answers));
        assert!(is_step_valid(Step::Handoff, &answers));
    }

    #[test]
    fn contact_step_trims_names_and_checks_email() {
        assert!(is_step_valid(Step::Contact, &contact("Jane", "Doe", "Acme", "jane@acme.com")));
        assert!(!is_step_valid(Step::Contact, &contact("  ", "Doe", "Acme", "jane@acme.com")));
        assert!(!is_step_valid(Step::Contact, &contact("Jane", "", "Acme", "jane@acme.com")));
        assert!(!is_step_valid(Step::Contact, &contact("Jane", "Doe", " \n", "jane@acme.com")));
        assert!(!is_step_valid(Step::Contact, &contact("Jane", "Doe", "Acme", "jane@acme")));
    }
}
