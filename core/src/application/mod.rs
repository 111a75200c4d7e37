use crate::{
    domain::{
        common::{FoodmapConfig, entities::app_errors::CoreError},
        submission::services::FormController,
    },
    infrastructure::http::ReqwestApiClient,
};

pub type FoodmapFormController = FormController<ReqwestApiClient>;

/// Builds a form controller wired to the real food map API.
pub fn create_form_controller(config: FoodmapConfig) -> Result<FoodmapFormController, CoreError> {
    let api_client = ReqwestApiClient::new(config.api)?;

    Ok(FormController::with_reset_delay(
        api_client,
        config.form.reset_delay,
    ))
}
