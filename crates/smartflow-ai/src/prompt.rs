//! Deterministic prompt rendering for process analysis.

use smartflow_core::ProcessInput;

/// Fixed system role sent with every analysis request.
pub const SYSTEM_ROLE: &str = "\
You are an expert in business-process automation for small companies (5-50 people). \
You assess manual processes for automation potential, taking into account the \
company's budget, the team's technical skills, legal compliance (GDPR and similar), \
and return on investment within 6-12 months. Always name concrete tools \
(Zapier, n8n, Airtable) rather than giving generic advice. \
Respond with a single JSON object and nothing else.";

/// Render the system role and user message for one process.
///
/// Pure function of its input: the same [`ProcessInput`] always produces the
/// same pair of strings. Empty improvement goals render as `unknown`.
pub fn build_prompt(input: &ProcessInput) -> (String, String) {
    let goals = if input.improvement_goals.is_empty() {
        "unknown".to_string()
    } else {
        input.improvement_goals.join(", ")
    };

    let user = format!(
        "Analyze the following business process and propose improvements.\n\
         \n\
         Company:\n\
         - size: {size}\n\
         - industry: {industry}\n\
         - improvement budget: {budget}\n\
         \n\
         Process:\n\
         - name: {title}\n\
         - frequency: {frequency}\n\
         - participants: {participants}\n\
         - duration: {duration} hours\n\
         - description: {description}\n\
         \n\
         Improvement goals: {goals}\n\
         \n\
         Reply with one JSON object of this exact shape:\n\
         {{\n\
         \x20 \"potential_score\": <integer 1-10>,\n\
         \x20 \"savings\": {{\"monthly_hours\": <number>, \"monthly_currency\": <number>}},\n\
         \x20 \"recommendations\": [{{\"tool_name\": <string>, \"description\": <string>, \
         \"rollout_time\": <string>, \"monthly_cost\": <number>}}],\n\
         \x20 \"rollout_plan\": [<step>, ...],\n\
         \x20 \"notes\": [<remark>, ...]\n\
         }}",
        size = input.company.size.as_str(),
        industry = input.company.industry.as_str(),
        budget = input.company.budget.as_str(),
        title = input.title,
        frequency = input.process.frequency.as_str(),
        participants = input.process.participants.as_str(),
        duration = input.process.duration_hours,
        description = input.description,
        goals = goals,
    );

    (SYSTEM_ROLE.to_string(), user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartflow_core::{
        Budget, CompanyProfile, CompanySize, Frequency, Industry, Participants, ProcessShape,
    };

    fn sample_input() -> ProcessInput {
        ProcessInput {
            title: "Invoicing customers".into(),
            description: "Every Friday an employee copies order data from email \
                          into the invoicing tool and mails each PDF by hand."
                .into(),
            company: CompanyProfile {
                size: CompanySize::Small,
                industry: Industry::Accounting,
                budget: Budget::Medium,
            },
            process: ProcessShape {
                frequency: Frequency::Weekly,
                participants: Participants::Few,
                duration_hours: 2.5,
            },
            improvement_goals: vec!["speed".into(), "fewer errors".into()],
        }
    }

    #[test]
    fn user_prompt_lists_every_attribute() {
        let (_, user) = build_prompt(&sample_input());
        for needle in [
            "5-10 people",
            "accounting",
            "500-2000/month",
            "Invoicing customers",
            "weekly",
            "2-3 people",
            "2.5 hours",
            "copies order data",
            "speed, fewer errors",
        ] {
            assert!(user.contains(needle), "missing {needle:?} in:\n{user}");
        }
    }

    #[test]
    fn user_prompt_names_the_response_schema() {
        let (_, user) = build_prompt(&sample_input());
        for field in [
            "\"potential_score\"",
            "\"savings\"",
            "\"monthly_hours\"",
            "\"recommendations\"",
            "\"rollout_plan\"",
            "\"notes\"",
        ] {
            assert!(user.contains(field), "schema field {field} not mentioned");
        }
    }

    #[test]
    fn empty_goals_render_as_unknown() {
        let mut input = sample_input();
        input.improvement_goals.clear();
        let (_, user) = build_prompt(&input);
        assert!(user.contains("Improvement goals: unknown"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let input = sample_input();
        assert_eq!(build_prompt(&input), build_prompt(&input));
    }

    #[test]
    fn system_role_is_fixed() {
        let (system, _) = build_prompt(&sample_input());
        assert_eq!(system, SYSTEM_ROLE);
        assert!(system.contains("business-process automation"));
    }
}
