use serde::Serialize;

use crate::wizard::state::Answers;

/// Positional answers to the scheduler's custom questions.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomAnswers {
    pub a1: String,
    pub a2: String,
    pub a3: String,
    pub a4: String,
    pub a5: String,
    pub a6: String,
    pub a7: String,
}

/// Data handed to the scheduling widget to pre-populate its booking form.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrefillPayload {
    pub email: String,
    pub name: String,
    pub custom_answers: CustomAnswers,
}

impl PrefillPayload {
    pub fn from_answers(answers: &Answers) -> Self {
        Self {
            email: answers.email.clone(),
            name: format!("{} {}", answers.first_name, answers.last_name),
            custom_answers: CustomAnswers {
                a1: answers.effective_business_type().to_string(),
                a2: answers.company.clone(),
                a3: answers.description.clone(),
                a4: answers.help_needed.clone(),
                a5: answers.project_type.clone(),
                a6: answers.website.clone(),
                a7: answers.revenue.clone(),
            },
        }
    }

    /// Query parameters understood by the scheduler's inline embed.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let a = &self.custom_answers;
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("a1", a.a1.as_str()),
            ("a2", a.a2.as_str()),
            ("a3", a.a3.as_str()),
            ("a4", a.a4.as_str()),
            ("a5", a.a5.as_str()),
            ("a6", a.a6.as_str()),
            ("a7", a.a7.as_str()),
        ]
    }

    /// Full embed URL for `base`, with `embed_domain` set when known.
    pub fn embed_url(&self, base: &str, embed_domain: Option<&str>) -> String {
        let mut params = vec![("embed_type", "Inline")];
        if let Some(domain) = embed_domain {
            params.push(("embed_domain", domain));
        }
        params.extend(self.query_pairs());

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<String>>()
            .join("&");

        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{}{}{}", base, separator, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::state::{Field, OTHER_BUSINESS_TYPE};
    use pretty_assertions::assert_eq;

    fn filled() -> Answers {
        Answers {
            business_type: "Software".into(),
            description: "We sell widgets".into(),
            help_needed: "Need leads".into(),
            project_type: "Monthly retainer".into(),
            revenue: "$10k-$50k".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@acme.com".into(),
            company: "Acme".into(),
            ..Default::default()
        }
    }

    #[test]
    fn maps_answers_positionally() {
        let payload = PrefillPayload::from_answers(&filled());
        assert_eq!(
            payload,
            PrefillPayload {
                email: "jane@acme.com".into(),
                name: "Jane Doe".into(),
                custom_answers: CustomAnswers {
                    a1: "Software".into(),
                    a2: "Acme".into(),
                    a3: "We sell widgets".into(),
                    a4: "Need leads".into(),
                    a5: "Monthly retainer".into(),
                    a6: "".into(),
                    a7: "$10k-$50k".into(),
                },
            }
        );
    }

    #[test]
    fn other_business_type_replaces_sentinel() {
        let mut answers = filled();
        answers.set(Field::BusinessType, OTHER_BUSINESS_TYPE.into());
        answers.set(Field::OtherBusinessType, "Bakery".into());
        let payload = PrefillPayload::from_answers(&answers);
        assert_eq!(payload.custom_answers.a1, "Bakery");
    }

    #[test]
    fn serializes_with_scheduler_field_names() {
        let payload = PrefillPayload::from_answers(&filled());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["customAnswers"]["a7"], "$10k-$50k");
        assert!(json.get("custom_answers").is_none());
    }

    #[test]
    fn embed_url_encodes_values() {
        let payload = PrefillPayload::from_answers(&filled());
        let url = payload.embed_url("https://calendly.com/team/call", Some("example.com"));
        assert!(url.starts_with("https://calendly.com/team/call?embed_type=Inline&embed_domain=example.com&"));
        assert!(url.contains("name=Jane%20Doe"));
        assert!(url.contains("email=jane%40acme.com"));
        assert!(url.contains("a7=%2410k-%2450k"));
        assert!(url.contains("a6=&"));
    }

    #[test]
    fn embed_url_appends_to_existing_query() {
        let payload = PrefillPayload::default();
        let url = payload.embed_url("https://calendly.com/team/call?hide_gdpr_banner=1", None);
        assert!(url.starts_with("https://calendly.com/team/call?hide_gdpr_banner=1&embed_type=Inline&name="));
    }
}
