//! DTOs for the text conversion endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Conversion, ConversionReport};

/// Request to convert the links in a text.
///
/// Both fields are optional at the JSON level; an absent or empty `text` is
/// rejected by the conversion service.
#[derive(Debug, Default, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub text: Option<String>,

    /// Attribution tags applied to every link in this request.
    #[serde(default, rename = "subIds")]
    pub sub_ids: Option<Vec<String>>,
}

/// Response of a successful conversion.
///
/// Uses an untagged enum so the two shapes serialize without a discriminator.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ConvertResponse {
    Converted(ConvertedBody),
    NoLinks(NoLinksBody),
}

/// Body returned when at least one link was found.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedBody {
    pub success: bool,
    pub new_text: String,
    pub total_links: usize,
    pub converted: usize,
    pub details: Vec<ConversionDetail>,
}

/// Body returned when the text contains no links.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoLinksBody {
    pub success: bool,
    pub new_text: String,
    pub message: String,
    pub converted: usize,
}

/// Per-link diagnostics. `short` is `null` when conversion failed.
#[derive(Debug, Serialize)]
pub struct ConversionDetail {
    pub original: String,
    pub resolved: String,
    pub short: Option<String>,
}

impl From<Conversion> for ConversionDetail {
    fn from(conversion: Conversion) -> Self {
        Self {
            original: conversion.original,
            resolved: conversion.resolved,
            short: conversion.short,
        }
    }
}

impl From<ConversionReport> for ConvertResponse {
    fn from(report: ConversionReport) -> Self {
        if report.details.is_empty() {
            return ConvertResponse::NoLinks(NoLinksBody {
                success: true,
                new_text: report.new_text,
                message: "No links found".to_string(),
                converted: 0,
            });
        }

        let total_links = report.total_links();
        let converted = report.converted();

        ConvertResponse::Converted(ConvertedBody {
            success: true,
            new_text: report.new_text,
            total_links,
            converted,
            details: report.details.into_iter().map(Into::into).collect(),
        })
    }
}
