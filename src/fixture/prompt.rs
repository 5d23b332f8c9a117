use anyhow::{Result, anyhow};
use serde::Serialize;
use serde_json::json;

use super::declaration::get_user_info_declaration;

/// The single user request the fixture carries. The "black" special request
/// is a descriptive attribute in the source material and is preserved as
/// given.
pub const USER_QUESTION: &str = "Can you retrieve the details for the user with the ID 7890, \
                                 who has black as their special request?";

const FUNCTION_LIST_HEADER: &str =
    "Here is a list of functions in JSON format that you can invoke:";

const RESPONSE_FORMAT_RULES: &str = "Should you decide to return the function call(s), Put it in the format of [func1(params_name=params_value, params_name2=params_value2...), func2(params)]\nNO other text MUST be included.";

/// Render the full single-shot document in the Llama 3 chat template: user
/// header, question, function list, response-format rules, and the opening
/// assistant header. No trailing newline; callers append one when printing.
pub fn render_prompt() -> Result<String> {
    let functions = pretty_json(&[get_user_info_declaration()])?;
    Ok(format!(
        "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\
         Questions: {USER_QUESTION}\n\
         {FUNCTION_LIST_HEADER}\n\
         {functions}\n\
         {RESPONSE_FORMAT_RULES}<|eot_id|><|start_header_id|>assistant<|end_header_id|>"
    ))
}

/// Render the fixture as a structured object for harnesses that apply their
/// own chat template.
pub fn render_json() -> Result<String> {
    let document = json!({
        "question": USER_QUESTION,
        "functions": [get_user_info_declaration()],
    });
    pretty_json(&document)
}

fn pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| anyhow!("Failed to render fixture document as JSON: {err}"))?;
    String::from_utf8(buf)
        .map_err(|err| anyhow!("Failed to render fixture document as JSON: {err}"))
}
