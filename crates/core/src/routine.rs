use serde::{Deserialize, Serialize};

/// Main-concern value used when no concern is supplied.
pub const GENERAL_CONCERN: &str = "General";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeOfDay {
    AnyTime,
    MorningOnly,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineStep {
    pub name: String,
    pub time_of_day: TimeOfDay,
}

impl RoutineStep {
    fn new(name: &str, time_of_day: TimeOfDay) -> Self {
        Self { name: name.to_string(), time_of_day }
    }

    pub fn is_morning_only(&self) -> bool {
        self.time_of_day == TimeOfDay::MorningOnly
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub skin_type: String,
    pub main_concern: String,
    pub steps: Vec<RoutineStep>,
    pub notes: String,
}

const STEP_SEQUENCE: &[(&str, TimeOfDay)] = &[
    ("Cleanser", TimeOfDay::AnyTime),
    ("Toner", TimeOfDay::AnyTime),
    ("Serum", TimeOfDay::AnyTime),
    ("Moisturizer", TimeOfDay::AnyTime),
    ("Sunscreen", TimeOfDay::MorningOnly),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoutineBuilder;

impl RoutineBuilder {
    pub fn build<S: AsRef<str>>(&self, skin_type: &str, concerns: &[S]) -> Routine {
        let main_concern =
            concerns.first().map(|concern| concern.as_ref()).unwrap_or(GENERAL_CONCERN).to_string();
        let steps = STEP_SEQUENCE
            .iter()
            .map(|(name, time_of_day)| RoutineStep::new(name, *time_of_day))
            .collect();
        let notes = format!(
            "Routine for {skin_type} skin focused on {main_concern}. Apply steps in order; sunscreen is for mornings only."
        );

        Routine { skin_type: skin_type.to_string(), main_concern, steps, notes }
    }
}

#[cfg(test)]
mod tests {
    use super::{RoutineBuilder, GENERAL_CONCERN};

    #[test]
    fn oily_acne_routine_has_fixed_steps_and_notes() {
        let routine = RoutineBuilder.build("oily", &["Acne"]);

        let names: Vec<&str> = routine.steps.iter().map(|step| step.name.as_str()).collect();
        assert_eq!(names, vec!["Cleanser", "Toner", "Serum", "Moisturizer", "Sunscreen"]);
        assert_eq!(routine.main_concern, "Acne");
        assert!(routine.notes.contains("oily"));
        assert!(routine.notes.contains("Acne"));
    }

    #[test]
    fn only_sunscreen_is_morning_only() {
        let routine = RoutineBuilder.build("dry", &["Dullness"]);
        let morning_only: Vec<&str> = routine
            .steps
            .iter()
            .filter(|step| step.is_morning_only())
            .map(|step| step.name.as_str())
            .collect();

        assert_eq!(morning_only, vec!["Sunscreen"]);
    }

    #[test]
    fn empty_concerns_use_general_sentinel() {
        let routine = RoutineBuilder.build::<&str>("sensitive", &[]);
        assert_eq!(routine.main_concern, GENERAL_CONCERN);
        assert!(routine.notes.contains("General"));
    }

    #[test]
    fn steps_do_not_depend_on_input() {
        let first = RoutineBuilder.build("oily", &["Acne", "Pores"]);
        let second = RoutineBuilder.build("", &[String::from("  spaced  ")]);

        assert_eq!(first.steps, second.steps);
        assert_eq!(second.main_concern, "  spaced  ");
    }

    #[test]
    fn routine_serializes_camel_case() {
        let value = serde_json::to_value(RoutineBuilder.build("oily", &["Acne"])).expect("serialize");

        assert_eq!(value["skinType"], "oily");
        assert_eq!(value["mainConcern"], "Acne");
        assert_eq!(value["steps"][4]["timeOfDay"], "morningOnly");
        assert_eq!(value["steps"][0]["timeOfDay"], "anyTime");
    }
}
