use skincircuit_core::RoutineRequest;

use super::{load_advisor, CommandResult};

pub fn run(skin_type: &str, concerns: &[String]) -> CommandResult {
    let advisor = match load_advisor("routine") {
        Ok(advisor) => advisor,
        Err(failure) => return failure,
    };

    match advisor.routine(&RoutineRequest::new(skin_type, concerns.to_vec())) {
        Ok(routine) => CommandResult::success_with_data(
            "routine",
            format!("{} steps focused on {}", routine.steps.len(), routine.main_concern),
            &routine,
        ),
        Err(error) => CommandResult::from_error("routine", error),
    }
}
