use super::{load_advisor, CommandResult};

pub fn run(words: &[String]) -> CommandResult {
    let advisor = match load_advisor("ask") {
        Ok(advisor) => advisor,
        Err(failure) => return failure,
    };

    let classification = advisor.chat(&words.join(" "));
    let message = match classification.matched.rule_id() {
        Some(rule_id) => format!("answered by rule `{rule_id}`"),
        None => "no question given".to_string(),
    };

    CommandResult::success_with_data("ask", message, &classification)
}
