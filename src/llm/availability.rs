use super::TextGenerator;
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

fn conversion_prompt(text: &str) -> String {
    format!(
        "Convert the following text to a stringify string that resembles json with the keys as \
         days with Sunday 0-index, and its values be a list of floats from a 24 hour clock as \
         [start, end]. Include the empty days and do not include code or code blocking. \"{text}\""
    )
}

/// Removes a leading ```json fence and a trailing ``` fence, if present.
/// Anything else passes through unmodified.
pub fn strip_code_fences(raw: &str) -> String {
    static LEADING_FENCE: OnceLock<Regex> = OnceLock::new();
    static TRAILING_FENCE: OnceLock<Regex> = OnceLock::new();

    let leading = LEADING_FENCE.get_or_init(|| Regex::new(r"^```json\s*").unwrap());
    let trailing = TRAILING_FENCE.get_or_init(|| Regex::new(r"\s*```$").unwrap());

    let stripped = leading.replace(raw, "");
    trailing.replace(&stripped, "").into_owned()
}

/// Converts free-text availability into the weekly-schedule string stored
/// alongside the employee record. The model response is stored verbatim
/// after fence stripping; it is not validated as JSON.
pub async fn convert_availability(generator: &dyn TextGenerator, text: &str) -> Result<String> {
    let raw = generator.generate(&conversion_prompt(text)).await?;
    Ok(strip_code_fences(&raw))
}
