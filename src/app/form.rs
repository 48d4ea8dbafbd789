use anyhow::Result;
use dialoguer::Input;

use crate::cli::RequestFields;
use crate::ui::style as ui;
use scriptsmith::chain::ReviewRequest;

pub const RESTAURANT_NAME: &str = "Restaurant Name";
pub const CUISINE_TYPE: &str = "Cuisine Type";
pub const LOCATION: &str = "Location";
pub const SPECIAL_FEATURE: &str = "Special Feature";
pub const DISHES: &str = "Dishes";
pub const ADDITIONAL_NOTES: &str = "Additional Notes";

/// Build a request from command-line fields, asking for the missing ones on
/// the terminal when `interactive` is set.
pub fn collect_request(fields: RequestFields, interactive: bool) -> Result<ReviewRequest> {
    if interactive {
        fill_request(fields, |label| {
            Ok(Input::<String>::new()
                .with_prompt(format!("  {} {label}", ui::accent("›")))
                .allow_empty(true)
                .interact_text()?)
        })
    } else {
        fill_request(fields, |_| Ok(String::new()))
    }
}

fn fill_request(
    fields: RequestFields,
    mut ask: impl FnMut(&str) -> Result<String>,
) -> Result<ReviewRequest> {
    let mut field = |value: Option<String>, label: &str| match value {
        Some(value) => Ok(value),
        None => ask(label),
    };

    Ok(ReviewRequest {
        restaurant_name: field(fields.restaurant, RESTAURANT_NAME)?,
        cuisine_type: field(fields.cuisine, CUISINE_TYPE)?,
        location: field(fields.location, LOCATION)?,
        special_feature: field(fields.feature, SPECIAL_FEATURE)?,
        dishes: field(fields.dishes, DISHES)?,
        notes: field(fields.notes, ADDITIONAL_NOTES)?,
    })
}
