use axum::Json;
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};

use phq_core::models::questionnaire::{FunctionalImpairment, Locale, ResponseLevel};
use phq_instruments::scoring::Domain;
use phq_instruments::{all_instruments, require_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct ItemView {
    index: u8,
    prompt: String,
    domain_tag: String,
}

#[derive(Serialize)]
pub struct ScaleOption {
    level: ResponseLevel,
    points: u8,
    label: &'static str,
}

#[derive(Serialize)]
pub struct FunctionalOption {
    value: FunctionalImpairment,
    label: &'static str,
}

/// Everything a form needs to render the questionnaire.
#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    locale: Locale,
    items: Vec<ItemView>,
    response_scale: Vec<ScaleOption>,
    functional_options: Vec<FunctionalOption>,
    domains: Vec<Domain>,
}

#[derive(Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    locale: Locale,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
    Query(LocaleQuery { locale }): Query<LocaleQuery>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = require_instrument(&id)?;

    let items = instrument
        .items()
        .iter()
        .map(|item| ItemView {
            index: item.index,
            prompt: item.prompt.get(locale).to_string(),
            domain_tag: item.domain_tag.get(locale).to_string(),
        })
        .collect();

    let response_scale = ResponseLevel::ALL
        .iter()
        .map(|level| ScaleOption {
            level: *level,
            points: level.points(),
            label: level.label(locale),
        })
        .collect();

    let functional_options = FunctionalImpairment::ALL
        .iter()
        .map(|value| FunctionalOption {
            value: *value,
            label: value.label(locale),
        })
        .collect();

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        locale,
        items,
        response_scale,
        functional_options,
        domains: instrument.domains().to_vec(),
    }))
}
