use skincircuit_core::RecommendRequest;

use super::{load_advisor, CommandResult};

pub fn run(skin_type: &str, categories: &[String]) -> CommandResult {
    let advisor = match load_advisor("recommend") {
        Ok(advisor) => advisor,
        Err(failure) => return failure,
    };

    let request = RecommendRequest::new(skin_type, categories.to_vec());
    match advisor.recommend(&request) {
        Ok(response) => {
            let found: usize =
                response.links_by_category.iter().map(|entry| entry.products.len()).sum();
            CommandResult::success_with_data(
                "recommend",
                format!(
                    "{found} product links across {} categories for `{}` skin",
                    response.links_by_category.len(),
                    response.skin_type
                ),
                &response,
            )
        }
        Err(error) => CommandResult::from_error("recommend", error),
    }
}
